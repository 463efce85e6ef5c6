//! Dashboard Controllers
//!
//! [`App`] owns the application state and the API handle. Navigation
//! switches the active page and always re-runs that page's load routine;
//! page controllers fetch, hand the data to a `view` renderer and store
//! the result in [`Screen`].
//!
//! Controllers take `&self`. The state sits behind a lock that is only
//! taken for synchronous reads and writes, never across a request, so a
//! request that never answers stalls its own action and nothing else.
//!
//! Failures never escape as fatal: every load or action logs the error,
//! raises a failure toast and leaves whatever was rendered before on
//! screen. The error is still returned so callers can pick an exit code.

mod add_item;
mod dashboard;
mod fridge;
pub mod messages;
mod recipes;
mod shopping;
mod state;

pub use recipes::BatchOutcome;
pub use state::{AppState, Page, Screen};

use chrono::NaiveDate;
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

use crate::api::{InventoryApi, RequestError};
use crate::config::{Config, DashboardConfig};
use crate::model::UserId;
use crate::notify::Notifier;
use crate::view::FormError;

/// Yes/no prompt shown before destructive actions
pub trait Confirm: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Errors returned by page controllers (already reported to the user)
#[derive(Error, Debug)]
pub enum ActionError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("No recipe at position {0}")]
    NoSuchRecipe(usize),
}

pub type ActionResult<T> = Result<T, ActionError>;

/// Today's date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub struct App<A> {
    api: A,
    user: UserId,
    settings: DashboardConfig,
    state: Mutex<AppState>,
}

impl<A: InventoryApi> App<A> {
    pub fn new(api: A, user: UserId, settings: DashboardConfig) -> Self {
        let notifier = Notifier::new(settings.toast_ttl());
        Self {
            api,
            user,
            settings,
            state: Mutex::new(AppState::new(today(), notifier)),
        }
    }

    pub fn from_config(api: A, config: &Config) -> Self {
        Self::new(api, config.api.user_id, config.dashboard.clone())
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn user(&self) -> UserId {
        self.user
    }

    pub fn settings(&self) -> &DashboardConfig {
        &self.settings
    }

    /// Lock the state for reading or editing. Drop the guard before
    /// awaiting anything.
    pub fn state(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with the state locked
    pub fn with_state<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(&mut self.state())
    }

    pub fn current_page(&self) -> Page {
        self.state().current_page
    }

    /// Make `page` the active page and run its load routine.
    ///
    /// Never rejected; navigating to the page already shown fetches again.
    pub async fn navigate(&self, page: Page) -> ActionResult<()> {
        let from = self.with_state(|state| std::mem::replace(&mut state.current_page, page));
        tracing::debug!(%from, to = %page, "navigate");
        self.load(page).await
    }

    /// Run the load routine of `page` without changing the active page
    pub async fn load(&self, page: Page) -> ActionResult<()> {
        self.with_state(|state| state.attempted.insert(page));
        match page {
            Page::Dashboard => self.load_dashboard().await,
            Page::Fridge => self.load_fridge().await,
            Page::Recipes => self.load_recipes().await,
            Page::Shopping => self.load_shopping().await,
            Page::AddItem => Ok(()),
        }
    }

    /// Load the active page unless its load routine already ran. A load
    /// that failed is not retried here; navigating to the page again is.
    pub async fn ensure_loaded(&self) -> ActionResult<()> {
        let pending = self.with_state(|state| {
            let page = state.current_page;
            let started = state.screen.is_loaded(page) || !state.attempted.insert(page);
            (!started).then_some(page)
        });
        match pending {
            Some(page) => self.load(page).await,
            None => Ok(()),
        }
    }

    /// Log a failed action and show its toast
    fn report(&self, error: ActionError, toast: impl Into<String>) -> ActionError {
        let page = self.with_state(|state| {
            state.notifier.error(toast);
            state.current_page
        });
        tracing::warn!(%page, error = %error, "action failed");
        error
    }
}
