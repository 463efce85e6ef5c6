//! Browser Dashboard
//!
//! Serves the dashboard as server-rendered HTML, built with Axum.
//!
//! # Routes
//!
//! - `GET /` - The dashboard, active page included
//! - `GET /pages/:page` - Navigate (dashboard, fridge, recipes, shopping, add)
//! - `POST /dashboard/refresh` - Reload the dashboard
//! - `POST /fridge/filter` - Filter the cached fridge list
//! - `POST /items` - Add a food item
//! - `POST /items/:id/consume` - Mark an item as eaten
//! - `POST /items/:id/delete` - Delete an item (needs `confirmed=true`)
//! - `POST /recipes/:index/missing` - Shop for a recipe's missing ingredients
//! - `GET /shopping/modal`, `GET /shopping/modal/close` - Toggle the add dialog
//! - `POST /shopping` - Add a shopping entry
//! - `POST /shopping/:id/toggle` - Tick or untick a shopping entry
//!
//! One [`App`] backs every browser tab. Its state lock is never held
//! while a request to the API is in flight, so a slow or hung call only
//! delays the handler that made it.

pub mod error;
pub mod routes;

pub use error::{WebError, WebResult};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api::InventoryApi;
use crate::app::App;
use crate::config::WebConfig;
use crate::present::HtmlPresenter;

/// Shared state of the web server
pub struct WebState<A> {
    pub app: App<A>,
    pub presenter: HtmlPresenter,
}

impl<A: InventoryApi> WebState<A> {
    pub fn new(app: App<A>) -> Self {
        let presenter = HtmlPresenter::new(app.settings().toast_ms);
        Self { app, presenter }
    }
}

/// Build the router around an existing shared state
pub fn router<A: InventoryApi + 'static>(state: Arc<WebState<A>>) -> Router {
    Router::new()
        .route("/", get(routes::index::<A>))
        .route("/pages/:page", get(routes::navigate::<A>))
        .route("/dashboard/refresh", post(routes::refresh_dashboard::<A>))
        .route("/fridge/filter", post(routes::filter_fridge::<A>))
        .route("/items", post(routes::add_item::<A>))
        .route("/items/:id/consume", post(routes::consume_item::<A>))
        .route("/items/:id/delete", post(routes::delete_item::<A>))
        .route("/recipes/:index/missing", post(routes::add_missing::<A>))
        .route("/shopping", post(routes::add_shopping_item::<A>))
        .route("/shopping/modal", get(routes::open_shopping_modal::<A>))
        .route("/shopping/modal/close", get(routes::close_shopping_modal::<A>))
        .route("/shopping/:id/toggle", post(routes::toggle_purchased::<A>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the router with all routes and middleware
pub fn build_router<A: InventoryApi + 'static>(app: App<A>) -> Router {
    router(Arc::new(WebState::new(app)))
}

/// Start the dashboard server
pub async fn serve<A: InventoryApi + 'static>(app: App<A>, config: &WebConfig) -> WebResult<()> {
    let router = build_router(app);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("FreshTrack dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| WebError::Server(e.to_string()))?;

    tracing::info!("FreshTrack dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
