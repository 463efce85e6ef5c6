//! FreshTrack REST API Client
//!
//! HTTP client for the FreshTrack inventory service. Every call is a
//! single attempt: no retries, no backoff, no timeout.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::endpoints;
use super::error::{RequestError, RequestResult, GENERIC_FAILURE};
use super::InventoryApi;
use crate::config::ApiConfig;
use crate::model::{
    ApiInfo, FoodItem, ItemId, NewFoodItem, NewShoppingItem, Recipe, ShoppingItem, Stats, User,
    UserId,
};

/// FreshTrack REST API client
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Error body shape produced by the API (`{"detail": ...}`)
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. "http://localhost:8000")
    pub fn new(base_url: impl Into<String>) -> RequestResult<Self> {
        let client = Client::builder().build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &ApiConfig) -> RequestResult<Self> {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue one request and return the decoded JSON body.
    ///
    /// The JSON content type is always set; `body` is serialized when
    /// present. A non-success status becomes [`RequestError::Api`] carrying
    /// the server's `detail` string, or [`GENERIC_FAILURE`] when the body is
    /// unreadable or has no string detail.
    pub async fn call(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
    ) -> RequestResult<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%method, endpoint, "API request");

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, endpoint, error = %e, "API request failed to send");
            RequestError::Transport(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await.unwrap_or_default();
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|body| body.detail)
                .and_then(|detail| detail.as_str().map(str::to_string))
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());

            tracing::warn!(%method, endpoint, status = status.as_u16(), %message, "API error");
            return Err(RequestError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> RequestResult<T> {
        let value = self.call(endpoint, Method::GET, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<Value>,
    ) -> RequestResult<T> {
        let value = self.call(endpoint, method, body.as_ref()).await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl InventoryApi for ApiClient {
    async fn health(&self) -> RequestResult<ApiInfo> {
        self.get(&endpoints::health()).await
    }

    async fn user(&self, user: UserId) -> RequestResult<User> {
        self.get(&endpoints::user(user)).await
    }

    async fn stats(&self, user: UserId) -> RequestResult<Stats> {
        self.get(&endpoints::stats(user)).await
    }

    async fn expiring_items(&self, user: UserId, days: u32) -> RequestResult<Vec<FoodItem>> {
        self.get(&endpoints::expiring_items(user, days)).await
    }

    async fn list_items(&self, user: UserId, include_consumed: bool) -> RequestResult<Vec<FoodItem>> {
        self.get(&endpoints::items(user, include_consumed)).await
    }

    async fn consume_item(&self, id: ItemId) -> RequestResult<()> {
        self.call(&endpoints::consume_item(id), Method::PUT, None)
            .await
            .map(|_| ())
    }

    async fn delete_item(&self, id: ItemId) -> RequestResult<()> {
        self.call(&endpoints::item(id), Method::DELETE, None)
            .await
            .map(|_| ())
    }

    async fn create_item(&self, user: UserId, item: &NewFoodItem) -> RequestResult<FoodItem> {
        let body = serde_json::to_value(item)?;
        self.send(&endpoints::items(user, false), Method::POST, Some(body))
            .await
    }

    async fn recommend_recipes(&self, user: UserId, limit: u32) -> RequestResult<Vec<Recipe>> {
        self.get(&endpoints::recommend_recipes(user, limit)).await
    }

    async fn shopping_list(
        &self,
        user: UserId,
        include_purchased: bool,
    ) -> RequestResult<Vec<ShoppingItem>> {
        self.get(&endpoints::shopping(user, include_purchased)).await
    }

    async fn create_shopping_item(
        &self,
        user: UserId,
        item: &NewShoppingItem,
    ) -> RequestResult<ShoppingItem> {
        let body = serde_json::to_value(item)?;
        self.send(&endpoints::new_shopping_item(user), Method::POST, Some(body))
            .await
    }

    async fn purchase_shopping_item(&self, id: ItemId) -> RequestResult<()> {
        self.call(&endpoints::purchase(id), Method::PUT, None)
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Path,
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        routing::{get, post, put},
        Json, Router,
    };
    use serde_json::json;

    /// Serve `router` on an ephemeral local port and return its base URL
    async fn spawn_mock(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn mock_router() -> Router {
        Router::new()
            .route(
                "/api/stats/:user",
                get(|Path(user): Path<i64>| async move {
                    Json(json!({
                        "total_items": user * 10,
                        "expiring_today": 1,
                        "expiring_within_3_days": 2,
                        "fresh_items": 5,
                        "category_breakdown": { "蔬菜": 6, "肉类": 4 }
                    }))
                }),
            )
            .route(
                "/api/shopping/:user",
                post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                    let content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    (
                        StatusCode::CREATED,
                        Json(json!({
                            "id": 42,
                            "item_name": body["item_name"],
                            "quantity": body["quantity"],
                            "is_purchased": 0,
                            "reason": content_type,
                        })),
                    )
                }),
            )
            .route(
                "/api/items/consume/:id",
                put(|Path(id): Path<i64>| async move {
                    if id == 404 {
                        (StatusCode::NOT_FOUND, Json(json!({ "detail": "Item not found" })))
                            .into_response()
                    } else {
                        Json(json!({ "message": "ok" })).into_response()
                    }
                }),
            )
            .route(
                "/api/shopping/purchase/:id",
                put(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route(
                "/api/items/:user",
                get(|| async {
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        Json(json!({ "detail": [{ "msg": "field required" }] })),
                    )
                }),
            )
    }

    #[tokio::test]
    async fn test_get_stats() {
        let base = spawn_mock(mock_router()).await;
        let client = ApiClient::new(format!("{}/", base)).unwrap();

        let stats = client.stats(1).await.unwrap();
        assert_eq!(stats.total_items, 10);
        assert_eq!(stats.category_breakdown.get("蔬菜"), Some(&6));
    }

    #[tokio::test]
    async fn test_post_sends_json_content_type() {
        let base = spawn_mock(mock_router()).await;
        let client = ApiClient::new(base).unwrap();

        let created = client
            .create_shopping_item(
                1,
                &NewShoppingItem {
                    item_name: "鸡蛋".to_string(),
                    quantity: 2,
                    quantity_unit: None,
                    reason: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(created.id, 42);
        assert_eq!(created.item_name, "鸡蛋");
        assert_eq!(created.reason.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn test_error_detail_is_surfaced() {
        let base = spawn_mock(mock_router()).await;
        let client = ApiClient::new(base).unwrap();

        let err = client.consume_item(404).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.message(), "Item not found");

        client.consume_item(1).await.unwrap();
    }

    #[tokio::test]
    async fn test_unparseable_error_body_falls_back() {
        let base = spawn_mock(mock_router()).await;
        let client = ApiClient::new(base).unwrap();

        let err = client.purchase_shopping_item(3).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.message(), GENERIC_FAILURE);
    }

    #[tokio::test]
    async fn test_non_string_detail_falls_back() {
        let base = spawn_mock(mock_router()).await;
        let client = ApiClient::new(base).unwrap();

        let err = client.list_items(1, false).await.unwrap_err();
        assert_eq!(err.message(), GENERIC_FAILURE);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ApiClient::new(format!("http://{}", addr)).unwrap();
        let err = client.health().await.unwrap_err();
        assert!(matches!(err, RequestError::Transport(_)));
    }
}
