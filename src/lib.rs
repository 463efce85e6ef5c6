//! # FreshTrack
//!
//! Client dashboard for the FreshTrack food-inventory API: what is in the
//! fridge, what expires soon, which recipes the inventory allows and what
//! to buy.
//!
//! ## Modules
//!
//! - [`model`]: Records exchanged with the API
//! - [`api`]: HTTP client behind the [`InventoryApi`] trait
//! - [`view`]: Pure renderers from fetched data to view models
//! - [`present`]: HTML and terminal presenters
//! - [`notify`]: Transient toast notifications
//! - [`app`]: Application state, navigation and page controllers
//! - [`web`]: Browser dashboard served with Axum
//! - [`shell`]: Interactive terminal session
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use freshtrack::{ApiClient, App, Config, Page};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let app = App::from_config(ApiClient::from_config(&config.api)?, &config);
//!
//!     app.navigate(Page::Fridge).await?;
//!     let fridge = app.state().screen.fridge.clone();
//!     for card in fridge.iter().flat_map(|view| &view.cards) {
//!         println!("{} {} ({})", card.emoji, card.name, card.expiry);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod app;
pub mod config;
pub mod model;
pub mod notify;
pub mod present;
pub mod shell;
pub mod view;
pub mod web;

// Re-export top-level types for convenience
pub use api::{ApiClient, InventoryApi, RequestError, RequestResult};

pub use app::{ActionError, ActionResult, App, AppState, BatchOutcome, Confirm, Page, Screen};

pub use config::{Config, ConfigError, ConfigOrigin, LoggingConfig};

pub use model::{
    ApiInfo, FoodItem, ItemId, NewFoodItem, NewShoppingItem, Recipe, ShoppingItem, Stats,
    UrgencyLevel, User, UserId,
};

pub use notify::{Notifier, Toast, ToastKind};

pub use present::{HtmlPresenter, Presenter, TextPresenter};

pub use web::{build_router, serve, WebError};
