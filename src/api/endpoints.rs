//! Endpoint paths of the FreshTrack API, relative to the base URL.

use crate::model::{ItemId, UserId};

pub fn health() -> String {
    "/".to_string()
}

pub fn user(user: UserId) -> String {
    format!("/api/users/{}", user)
}

pub fn stats(user: UserId) -> String {
    format!("/api/stats/{}", user)
}

pub fn expiring_items(user: UserId, days: u32) -> String {
    format!("/api/items/expiring/{}?days={}", user, days)
}

pub fn items(user: UserId, include_consumed: bool) -> String {
    if include_consumed {
        format!("/api/items/{}?include_consumed=true", user)
    } else {
        format!("/api/items/{}", user)
    }
}

pub fn consume_item(id: ItemId) -> String {
    format!("/api/items/consume/{}", id)
}

pub fn item(id: ItemId) -> String {
    format!("/api/items/{}", id)
}

pub fn recommend_recipes(user: UserId, limit: u32) -> String {
    format!("/api/recipes/recommend/{}?limit={}", user, limit)
}

pub fn shopping(user: UserId, include_purchased: bool) -> String {
    format!("/api/shopping/{}?include_purchased={}", user, include_purchased)
}

pub fn new_shopping_item(user: UserId) -> String {
    format!("/api/shopping/{}", user)
}

pub fn purchase(id: ItemId) -> String {
    format!("/api/shopping/purchase/{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(stats(1), "/api/stats/1");
        assert_eq!(expiring_items(1, 3), "/api/items/expiring/1?days=3");
        assert_eq!(items(1, false), "/api/items/1");
        assert_eq!(items(1, true), "/api/items/1?include_consumed=true");
        assert_eq!(recommend_recipes(1, 10), "/api/recipes/recommend/1?limit=10");
        assert_eq!(shopping(1, true), "/api/shopping/1?include_purchased=true");
        assert_eq!(purchase(7), "/api/shopping/purchase/7");
    }
}
