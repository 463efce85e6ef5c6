//! FreshTrack CLI
//!
//! Command-line front end for the FreshTrack dashboard:
//! - Show any dashboard page once and exit
//! - Run a single action (consume, delete, add, buy, ...)
//! - Start the interactive shell or the browser dashboard

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use freshtrack::app::{AppState, Page};
use freshtrack::config::generate_default_config;
use freshtrack::present::{HtmlPresenter, Presenter, TextPresenter};
use freshtrack::shell::{self, Action, Shell, StdinConfirm};
use freshtrack::{ApiClient, App, Config, InventoryApi};

#[derive(Parser)]
#[command(name = "freshtrack")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Smart fridge dashboard for the FreshTrack API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: <config dir>/freshtrack/config.toml, then ./freshtrack.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API server URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum Format {
    Text,
    Html,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that the API is reachable
    Status,

    /// Show the configured user
    Whoami,

    /// Interactive session
    Shell,

    /// Serve the dashboard to a browser
    Serve {
        /// Listen port (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    #[command(flatten)]
    Action(Action),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.trim_end_matches('/').to_string();
    }
    config.logging.init();
    config.log_origin();

    let client = ApiClient::from_config(&config.api).context("Failed to build HTTP client")?;

    match cli.command {
        Commands::Status => {
            let info = client
                .health()
                .await
                .with_context(|| format!("API at {} is not reachable", client.base_url()))?;
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&info)?),
                _ => println!("{} ({}, v{})", info.message, info.status, info.version),
            }
        }

        Commands::Whoami => {
            let user = client.user(config.api.user_id).await?;
            match cli.format {
                Format::Json => println!("{}", serde_json::to_string_pretty(&user)?),
                _ => println!(
                    "#{} {} <{}>",
                    user.id,
                    user.username.as_deref().unwrap_or("-"),
                    user.email
                ),
            }
        }

        Commands::Shell => {
            let presenter = presenter(cli.format, &config);
            let session = Shell::new(App::from_config(client, &config), presenter.as_ref());
            session.run().await?;
        }

        Commands::Serve { port } => {
            if let Some(port) = port {
                config.web.port = port;
            }
            freshtrack::serve(App::from_config(client, &config), &config.web).await?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }

        Commands::Action(action) => {
            let app = App::from_config(client, &config);
            let page = action.page();
            let result = shell::apply(&app, action, &StdinConfirm).await;

            let presenter = presenter(cli.format, &config);
            let toasts = app.state().notifier.drain();
            for toast in &toasts {
                eprintln!("{}", presenter.toast(toast));
            }
            if let Some(page) = page {
                print_page(&app.state(), page, cli.format, presenter.as_ref())?;
            }
            result?;
        }
    }

    Ok(())
}

fn presenter(format: Format, config: &Config) -> Box<dyn Presenter> {
    match format {
        Format::Html => Box::new(HtmlPresenter::new(config.dashboard.toast_ms)),
        Format::Text | Format::Json => Box::new(TextPresenter),
    }
}

/// Print one page in the chosen format. JSON prints the raw view model.
fn print_page(
    state: &AppState,
    page: Page,
    format: Format,
    presenter: &dyn Presenter,
) -> anyhow::Result<()> {
    if format == Format::Json {
        let screen = &state.screen;
        let json = match page {
            Page::Dashboard => serde_json::to_string_pretty(&screen.dashboard)?,
            Page::Fridge => serde_json::to_string_pretty(&screen.fridge)?,
            Page::Recipes => serde_json::to_string_pretty(&screen.recipes)?,
            Page::Shopping => serde_json::to_string_pretty(&screen.shopping)?,
            Page::AddItem => serde_json::to_string_pretty(&state.add_form)?,
        };
        println!("{}", json);
        return Ok(());
    }

    let mut state = state.clone();
    state.current_page = page;
    println!("{}", presenter.page(&state));
    Ok(())
}
