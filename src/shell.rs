//! Terminal Session
//!
//! Drives the page controllers from typed commands. The same [`Action`]
//! set backs the interactive shell and the one-shot subcommands of the
//! `freshtrack` binary.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};

use crate::api::InventoryApi;
use crate::app::{today, ActionResult, App, Confirm, Page};
use crate::model::ItemId;
use crate::present::Presenter;
use crate::view::FridgeFilter;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Action {
    /// Show the dashboard
    Dashboard,

    /// Show the fridge
    Fridge {
        /// Only show: all, urgent, fresh
        #[arg(long)]
        filter: Option<FridgeFilter>,
    },

    /// Show recipe recommendations
    Recipes,

    /// Show the shopping list
    Shopping,

    /// Reload the dashboard
    Refresh,

    /// Filter the fridge list already loaded
    Filter { filter: FridgeFilter },

    /// Mark a food item as eaten
    Consume { id: ItemId },

    /// Delete a food item
    Delete {
        id: ItemId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Add a food item
    Add {
        name: String,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long, default_value_t = 1)]
        quantity: i64,
        #[arg(short, long)]
        unit: Option<String>,
        /// Expiration date (YYYY-MM-DD), default a week from today
        #[arg(short, long)]
        expires: Option<NaiveDate>,
    },

    /// Put a recipe's missing ingredients on the shopping list
    Missing {
        /// Position in the recipe list
        index: usize,
    },

    /// Tick a shopping entry as purchased
    Buy { id: ItemId },

    /// Untick a shopping entry (until the next reload)
    Unbuy { id: ItemId },

    /// Add an entry to the shopping list
    ShopAdd {
        name: String,
        #[arg(short, long, default_value_t = 1)]
        quantity: i64,
        #[arg(short, long, default_value = "")]
        unit: String,
        #[arg(short, long, default_value = "")]
        reason: String,
    },
}

impl Action {
    /// Page whose contents the action displays, if any
    pub fn page(&self) -> Option<Page> {
        match self {
            Action::Dashboard | Action::Refresh => Some(Page::Dashboard),
            Action::Fridge { .. } | Action::Filter { .. } => Some(Page::Fridge),
            Action::Recipes => Some(Page::Recipes),
            Action::Shopping | Action::Buy { .. } | Action::Unbuy { .. } => Some(Page::Shopping),
            _ => None,
        }
    }
}

/// Run one action against the controllers
pub async fn apply<A, C>(app: &App<A>, action: Action, confirm: &C) -> ActionResult<()>
where
    A: InventoryApi,
    C: Confirm,
{
    match action {
        Action::Dashboard => app.navigate(Page::Dashboard).await,
        Action::Fridge { filter } => {
            app.navigate(Page::Fridge).await?;
            if let Some(filter) = filter {
                app.filter_fridge(filter);
            }
            Ok(())
        }
        Action::Recipes => app.navigate(Page::Recipes).await,
        Action::Shopping => app.navigate(Page::Shopping).await,
        Action::Refresh => app.refresh_dashboard().await,
        Action::Filter { filter } => {
            let cached = app.state().screen.fridge.is_some();
            if !cached {
                app.load_fridge().await?;
            }
            app.filter_fridge(filter);
            Ok(())
        }
        Action::Consume { id } => app.consume_item(id).await,
        Action::Delete { id, yes } => {
            if yes {
                app.delete_item(id, &|_: &str| true).await.map(|_| ())
            } else {
                app.delete_item(id, confirm).await.map(|_| ())
            }
        }
        Action::Add {
            name,
            category,
            quantity,
            unit,
            expires,
        } => {
            let day = today();
            app.with_state(|state| {
                let form = &mut state.add_form;
                form.reset(day);
                form.food_name = name;
                form.quantity = quantity;
                if let Some(category) = category {
                    form.category = category;
                }
                if let Some(unit) = unit {
                    form.quantity_unit = unit;
                }
                if let Some(expires) = expires {
                    form.expiration_date = expires;
                }
            });
            app.submit_add_item(day).await.map(|_| ())
        }
        Action::Missing { index } => {
            let listed = !app.state().recipes.is_empty();
            if !listed {
                app.load_recipes().await?;
            }
            app.add_missing_for_recipe(index).await.map(|_| ())
        }
        Action::Buy { id } => app.toggle_purchased(id, true).await,
        Action::Unbuy { id } => {
            let listed = app.state().screen.shopping.is_some();
            if !listed {
                app.load_shopping().await?;
            }
            app.toggle_purchased(id, false).await
        }
        Action::ShopAdd {
            name,
            quantity,
            unit,
            reason,
        } => {
            app.open_shopping_modal();
            app.with_state(|state| {
                let form = &mut state.shopping_modal.form;
                form.item_name = name;
                form.quantity = quantity;
                form.quantity_unit = unit;
                form.reason = reason;
            });
            app.submit_shopping_form().await
        }
    }
}

/// A line typed into the shell
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Switch page: dashboard, fridge, recipes, shopping, add
    Go { page: Page },

    /// Redraw the current page
    Show,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,

    #[command(flatten)]
    Action(Action),
}

/// y/N question on the terminal
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        let _ = std::io::stdout().flush();

        let mut answer = String::new();
        if read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

fn read_line(buf: &mut String) -> std::io::Result<usize> {
    tokio::task::block_in_place(|| std::io::stdin().lock().read_line(buf))
}

/// Output of one shell line
#[derive(Debug, PartialEq)]
pub enum Step {
    Continue(String),
    Quit,
}

pub struct Shell<'p, A> {
    app: App<A>,
    presenter: &'p dyn Presenter,
}

impl<'p, A: InventoryApi> Shell<'p, A> {
    pub fn new(app: App<A>, presenter: &'p dyn Presenter) -> Self {
        Self { app, presenter }
    }

    pub fn app(&self) -> &App<A> {
        &self.app
    }

    /// Navigation bar, the active page and any toasts raised since the
    /// last screen
    pub fn screen(&self) -> String {
        let mut state = self.app.state();
        let mut out = vec![
            self.presenter.nav(state.current_page),
            String::new(),
            self.presenter.page(&state),
        ];
        if state.shopping_modal.open {
            out.push(self.presenter.shopping_modal(&state.shopping_modal));
        }
        let toasts: Vec<String> = state
            .notifier
            .drain()
            .iter()
            .map(|toast| self.presenter.toast(toast))
            .collect();
        if !toasts.is_empty() {
            out.push(String::new());
            out.extend(toasts);
        }
        out.join("\n")
    }

    /// Run one typed line
    pub async fn execute<C: Confirm>(&self, line: &str, confirm: &C) -> Step {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Step::Continue(String::new());
        }

        let parsed = match Line::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => return Step::Continue(e.to_string()),
        };

        match parsed.command {
            ShellCommand::Quit => return Step::Quit,
            ShellCommand::Show => {}
            ShellCommand::Go { page } => {
                let _ = self.app.navigate(page).await;
            }
            ShellCommand::Action(action) => {
                tracing::debug!(?action, "shell action");
                let _ = apply(&self.app, action, confirm).await;
            }
        }
        Step::Continue(self.screen())
    }

    /// Read commands from stdin until `quit` or end of input
    pub async fn run(&self) -> std::io::Result<()> {
        let _ = self.app.ensure_loaded().await;
        println!("{}", self.screen());

        loop {
            print!("\nfreshtrack> ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            if read_line(&mut line)? == 0 {
                break;
            }
            match self.execute(&line, &StdinConfirm).await {
                Step::Continue(output) => println!("{}", output),
                Step::Quit => break,
            }
        }
        Ok(())
    }
}
