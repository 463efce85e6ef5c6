//! FreshTrack Data Model
//!
//! Records exchanged with the FreshTrack API. The client never owns or
//! persists these; they are passed through to the renderers unchanged.

use chrono::{NaiveDate, NaiveTime, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of the (fixed) user all requests are made for
pub type UserId = i64;

/// Identifier of a food item or shopping entry
pub type ItemId = i64;

// ============================================
// Food items
// ============================================

/// Server-computed classification of remaining shelf life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum UrgencyLevel {
    Expired,
    Today,
    Urgent,
    Warning,
    Fresh,
    /// Anything the server sends that this client does not know about
    Unknown,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Expired => "expired",
            UrgencyLevel::Today => "today",
            UrgencyLevel::Urgent => "urgent",
            UrgencyLevel::Warning => "warning",
            UrgencyLevel::Fresh => "fresh",
            UrgencyLevel::Unknown => "unknown",
        }
    }
}

impl From<String> for UrgencyLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "expired" => UrgencyLevel::Expired,
            "today" => UrgencyLevel::Today,
            "urgent" => UrgencyLevel::Urgent,
            "warning" => UrgencyLevel::Warning,
            "fresh" => UrgencyLevel::Fresh,
            _ => UrgencyLevel::Unknown,
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A food item in the fridge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: ItemId,
    pub food_name: String,
    pub category: String,
    pub quantity: i64,
    pub quantity_unit: String,
    /// Timestamp as sent by the server (ISO 8601, possibly without offset)
    pub expiration_date: String,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub days_left: Option<i64>,
    pub urgency_level: UrgencyLevel,
    #[serde(default)]
    pub is_consumed: i64,
}

impl FoodItem {
    /// Calendar day of expiration, if the server timestamp is readable
    pub fn expiration_day(&self) -> Option<NaiveDate> {
        let date_part = self.expiration_date.get(..10)?;
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }
}

/// Payload for `POST /api/items/{user}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFoodItem {
    pub food_name: String,
    pub category: String,
    pub quantity: i64,
    pub quantity_unit: String,
    pub expiration_date: String,
}

impl NewFoodItem {
    /// Expiration timestamp for a calendar day: UTC midnight, RFC 3339
    pub fn expiration_timestamp(day: NaiveDate) -> String {
        day.and_time(NaiveTime::MIN)
            .and_utc()
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

// ============================================
// Dashboard stats
// ============================================

/// Aggregate inventory counts for the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_items: u64,
    pub expiring_today: u64,
    pub expiring_within_3_days: u64,
    pub fresh_items: u64,
    #[serde(default)]
    pub category_breakdown: BTreeMap<String, u64>,
}

// ============================================
// Recipes
// ============================================

/// A recommended recipe, ranked by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub name_cn: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub cook_time: Option<u32>,
    /// Percentage (0-100) of ingredients already in the fridge
    #[serde(default)]
    pub match_rate: Option<f64>,
    #[serde(default)]
    pub missing_ingredients: Option<Vec<String>>,
}

impl Recipe {
    /// Localized name when present, canonical name otherwise
    pub fn title(&self) -> &str {
        self.name_cn
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.name)
    }

    pub fn missing(&self) -> &[String] {
        self.missing_ingredients.as_deref().unwrap_or(&[])
    }
}

// ============================================
// Shopping list
// ============================================

/// An entry on the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: ItemId,
    pub item_name: String,
    pub quantity: i64,
    #[serde(default)]
    pub quantity_unit: Option<String>,
    /// 0 = pending, 1 = purchased
    #[serde(default)]
    pub is_purchased: i64,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ShoppingItem {
    pub fn purchased(&self) -> bool {
        self.is_purchased != 0
    }
}

/// Payload for `POST /api/shopping/{user}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewShoppingItem {
    pub item_name: String,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

// ============================================
// Users and service info
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response of the API root health check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    pub status: String,
}
