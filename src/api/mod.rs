//! FreshTrack API Access
//!
//! The remote service owns every business rule (expiry computation,
//! recipe matching, persistence). This module only moves data.
//!
//! # Endpoints
//!
//! - `GET /` - Service info (health check)
//! - `GET /api/users/{user}` - User record
//! - `GET /api/stats/{user}` - Dashboard stats
//! - `GET /api/items/expiring/{user}?days=N` - Items with days_left <= N
//! - `GET /api/items/{user}` - Full item list
//! - `PUT /api/items/consume/{id}` - Mark an item consumed
//! - `DELETE /api/items/{id}` - Remove an item
//! - `POST /api/items/{user}` - Create an item
//! - `GET /api/recipes/recommend/{user}?limit=N` - Ranked recipes
//! - `GET /api/shopping/{user}?include_purchased=bool` - Shopping list
//! - `POST /api/shopping/{user}` - Create a shopping entry
//! - `PUT /api/shopping/purchase/{id}` - Mark an entry purchased

mod client;
pub mod endpoints;
mod error;

#[cfg(test)]
pub(crate) mod fake;

pub use client::ApiClient;
pub use error::{RequestError, RequestResult, GENERIC_FAILURE};

use async_trait::async_trait;

use crate::model::{
    ApiInfo, FoodItem, ItemId, NewFoodItem, NewShoppingItem, Recipe, ShoppingItem, Stats, User,
    UserId,
};

/// Operations the dashboard needs from the inventory service
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// Root health check
    async fn health(&self) -> RequestResult<ApiInfo>;

    async fn user(&self, user: UserId) -> RequestResult<User>;

    async fn stats(&self, user: UserId) -> RequestResult<Stats>;

    /// Items whose days_left is at most `days`
    async fn expiring_items(&self, user: UserId, days: u32) -> RequestResult<Vec<FoodItem>>;

    async fn list_items(&self, user: UserId, include_consumed: bool) -> RequestResult<Vec<FoodItem>>;

    /// Removes the item from active inventory
    async fn consume_item(&self, id: ItemId) -> RequestResult<()>;

    async fn delete_item(&self, id: ItemId) -> RequestResult<()>;

    async fn create_item(&self, user: UserId, item: &NewFoodItem) -> RequestResult<FoodItem>;

    async fn recommend_recipes(&self, user: UserId, limit: u32) -> RequestResult<Vec<Recipe>>;

    async fn shopping_list(
        &self,
        user: UserId,
        include_purchased: bool,
    ) -> RequestResult<Vec<ShoppingItem>>;

    async fn create_shopping_item(
        &self,
        user: UserId,
        item: &NewShoppingItem,
    ) -> RequestResult<ShoppingItem>;

    async fn purchase_shopping_item(&self, id: ItemId) -> RequestResult<()>;
}
