//! Dashboard Routes
//!
//! Each action runs the matching controller and redirects back to `/`,
//! where the refreshed page (and its toast) is rendered. Controller
//! failures are already on screen as toasts, so they never turn into an
//! HTTP error here.

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

use super::error::{WebError, WebResult};
use super::WebState;
use crate::api::InventoryApi;
use crate::app::{today, ActionError, Page};
use crate::model::ItemId;
use crate::view::{AddItemForm, FridgeFilter, ShoppingForm};

type Shared<A> = State<Arc<WebState<A>>>;

fn back() -> Redirect {
    Redirect::to("/")
}

#[derive(Debug, Deserialize)]
pub struct FilterForm {
    pub filter: FridgeFilter,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    /// Set by the browser's confirmation prompt
    #[serde(default)]
    pub confirmed: bool,
}

#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    /// Absent when the box was unticked
    #[serde(default)]
    pub checked: bool,
}

/// GET /
///
/// The whole dashboard. Loads the active page on first visit.
pub async fn index<A: InventoryApi + 'static>(State(state): Shared<A>) -> Html<String> {
    let _ = state.app.ensure_loaded().await;

    let html = state.app.with_state(|app_state| {
        let html = state.presenter.document(app_state);
        // The browser only ever shows the visible toast; nothing reads the queue
        app_state.notifier.drain();
        html
    });
    Html(html)
}

/// GET /pages/:page
pub async fn navigate<A: InventoryApi + 'static>(
    State(state): Shared<A>,
    Path(page): Path<String>,
) -> WebResult<Redirect> {
    let page: Page = page.parse().map_err(WebError::NotFound)?;
    let _ = state.app.navigate(page).await;
    Ok(back())
}

/// POST /dashboard/refresh
pub async fn refresh_dashboard<A: InventoryApi + 'static>(State(state): Shared<A>) -> Redirect {
    let _ = state.app.refresh_dashboard().await;
    back()
}

/// POST /fridge/filter
pub async fn filter_fridge<A: InventoryApi + 'static>(
    State(state): Shared<A>,
    Form(form): Form<FilterForm>,
) -> Redirect {
    state.app.filter_fridge(form.filter);
    back()
}

/// POST /items
pub async fn add_item<A: InventoryApi + 'static>(
    State(state): Shared<A>,
    Form(form): Form<AddItemForm>,
) -> Redirect {
    state.app.with_state(|app_state| app_state.add_form = form);
    let _ = state.app.submit_add_item(today()).await;
    back()
}

/// POST /items/:id/consume
pub async fn consume_item<A: InventoryApi + 'static>(
    State(state): Shared<A>,
    Path(id): Path<ItemId>,
) -> Redirect {
    let _ = state.app.consume_item(id).await;
    back()
}

/// POST /items/:id/delete
pub async fn delete_item<A: InventoryApi + 'static>(
    State(state): Shared<A>,
    Path(id): Path<ItemId>,
    Form(form): Form<DeleteForm>,
) -> Redirect {
    let confirmed = form.confirmed;
    let _ = state.app.delete_item(id, &move |_: &str| confirmed).await;
    back()
}

/// POST /recipes/:index/missing
pub async fn add_missing<A: InventoryApi + 'static>(
    State(state): Shared<A>,
    Path(index): Path<usize>,
) -> WebResult<Redirect> {
    match state.app.add_missing_for_recipe(index).await {
        Err(ActionError::NoSuchRecipe(index)) => {
            Err(WebError::NotFound(format!("recipe {}", index)))
        }
        _ => Ok(back()),
    }
}

/// GET /shopping/modal
pub async fn open_shopping_modal<A: InventoryApi + 'static>(State(state): Shared<A>) -> Redirect {
    state.app.open_shopping_modal();
    back()
}

/// GET /shopping/modal/close
pub async fn close_shopping_modal<A: InventoryApi + 'static>(State(state): Shared<A>) -> Redirect {
    state.app.close_shopping_modal();
    back()
}

/// POST /shopping
pub async fn add_shopping_item<A: InventoryApi + 'static>(
    State(state): Shared<A>,
    Form(form): Form<ShoppingForm>,
) -> Redirect {
    state
        .app
        .with_state(|app_state| app_state.shopping_modal.form = form);
    let _ = state.app.submit_shopping_form().await;
    back()
}

/// POST /shopping/:id/toggle
pub async fn toggle_purchased<A: InventoryApi + 'static>(
    State(state): Shared<A>,
    Path(id): Path<ItemId>,
    Form(form): Form<ToggleForm>,
) -> Redirect {
    let _ = state.app.toggle_purchased(id, form.checked).await;
    back()
}
