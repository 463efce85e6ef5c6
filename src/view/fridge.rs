//! Fridge view models: filterable list of food cards.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::dashboard::days_left_text;
use crate::model::{FoodItem, ItemId, UrgencyLevel};

/// Client-side filter over the cached fridge list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FridgeFilter {
    #[default]
    All,
    /// expired, today, urgent
    Urgent,
    /// fresh, warning
    Fresh,
}

impl FridgeFilter {
    pub const ALL: [FridgeFilter; 3] = [FridgeFilter::All, FridgeFilter::Urgent, FridgeFilter::Fresh];

    pub fn as_str(&self) -> &'static str {
        match self {
            FridgeFilter::All => "all",
            FridgeFilter::Urgent => "urgent",
            FridgeFilter::Fresh => "fresh",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FridgeFilter::All => "全部",
            FridgeFilter::Urgent => "即将过期",
            FridgeFilter::Fresh => "新鲜",
        }
    }

    pub fn matches(&self, level: UrgencyLevel) -> bool {
        match self {
            FridgeFilter::All => true,
            FridgeFilter::Urgent => matches!(
                level,
                UrgencyLevel::Expired | UrgencyLevel::Today | UrgencyLevel::Urgent
            ),
            FridgeFilter::Fresh => matches!(level, UrgencyLevel::Fresh | UrgencyLevel::Warning),
        }
    }

    /// Borrowing filter; the source list is left as is
    pub fn apply<'a>(&self, items: &'a [FoodItem]) -> Vec<&'a FoodItem> {
        items
            .iter()
            .filter(|item| self.matches(item.urgency_level))
            .collect()
    }
}

impl fmt::Display for FridgeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FridgeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(FridgeFilter::All),
            "urgent" => Ok(FridgeFilter::Urgent),
            "fresh" => Ok(FridgeFilter::Fresh),
            other => Err(format!("Unknown filter: {}. Use: all, urgent, fresh", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FridgeView {
    pub filter: FridgeFilter,
    pub cards: Vec<FoodCard>,
}

impl FridgeView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodCard {
    pub id: ItemId,
    pub urgency: UrgencyLevel,
    pub emoji: &'static str,
    pub name: String,
    /// "{category} • {quantity}{unit}"
    pub meta: String,
    pub badge: String,
    pub expiry: String,
}

pub fn urgency_emoji(level: UrgencyLevel) -> &'static str {
    match level {
        UrgencyLevel::Expired => "❌",
        UrgencyLevel::Today => "⚠️",
        UrgencyLevel::Urgent => "🟡",
        UrgencyLevel::Warning => "🟢",
        UrgencyLevel::Fresh => "✅",
        UrgencyLevel::Unknown => "📦",
    }
}

pub fn urgency_badge(level: UrgencyLevel, days_left: Option<i64>) -> String {
    match level {
        UrgencyLevel::Expired => "已过期".to_string(),
        UrgencyLevel::Today => "今天".to_string(),
        UrgencyLevel::Urgent | UrgencyLevel::Warning => days_left
            .map(|days| format!("{}天", days))
            .unwrap_or_else(|| "-".to_string()),
        UrgencyLevel::Fresh => "新鲜".to_string(),
        UrgencyLevel::Unknown => "-".to_string(),
    }
}

/// "2024/5/1 (还剩 3 天)"
pub fn expiry_text(item: &FoodItem) -> String {
    let date = item
        .expiration_day()
        .map(|d| format!("{}/{}/{}", d.year(), d.month(), d.day()))
        .unwrap_or_else(|| item.expiration_date.clone());

    match item.days_left {
        Some(days) => format!("{} ({})", date, days_left_text(days)),
        None => date,
    }
}

pub fn food_card(item: &FoodItem) -> FoodCard {
    FoodCard {
        id: item.id,
        urgency: item.urgency_level,
        emoji: urgency_emoji(item.urgency_level),
        name: item.food_name.clone(),
        meta: format!("{} • {}{}", item.category, item.quantity, item.quantity_unit),
        badge: urgency_badge(item.urgency_level, item.days_left),
        expiry: expiry_text(item),
    }
}

pub fn render_fridge(items: &[FoodItem], filter: FridgeFilter) -> FridgeView {
    FridgeView {
        filter,
        cards: filter.apply(items).into_iter().map(food_card).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::food_item;

    fn sample() -> Vec<FoodItem> {
        vec![
            food_item(1, "牛奶", UrgencyLevel::Expired, -2),
            food_item(2, "鸡蛋", UrgencyLevel::Today, 0),
            food_item(3, "菠菜", UrgencyLevel::Urgent, 2),
            food_item(4, "苹果", UrgencyLevel::Warning, 5),
            food_item(5, "土豆", UrgencyLevel::Fresh, 20),
            food_item(6, "神秘", UrgencyLevel::Unknown, 9),
        ]
    }

    #[test]
    fn test_urgent_filter_selects_exactly_urgent_levels() {
        let items = sample();
        let before = items.clone();

        let ids: Vec<ItemId> = FridgeFilter::Urgent.apply(&items).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(items, before);
    }

    #[test]
    fn test_fresh_and_all_filters() {
        let items = sample();
        let fresh: Vec<ItemId> = FridgeFilter::Fresh.apply(&items).iter().map(|i| i.id).collect();
        assert_eq!(fresh, vec![4, 5]);
        assert_eq!(FridgeFilter::All.apply(&items).len(), 6);
    }

    #[test]
    fn test_badges_and_emoji() {
        assert_eq!(urgency_badge(UrgencyLevel::Expired, Some(-1)), "已过期");
        assert_eq!(urgency_badge(UrgencyLevel::Today, Some(0)), "今天");
        assert_eq!(urgency_badge(UrgencyLevel::Urgent, Some(2)), "2天");
        assert_eq!(urgency_badge(UrgencyLevel::Warning, Some(6)), "6天");
        assert_eq!(urgency_badge(UrgencyLevel::Fresh, Some(30)), "新鲜");
        assert_eq!(urgency_badge(UrgencyLevel::Unknown, None), "-");
        assert_eq!(urgency_emoji(UrgencyLevel::Unknown), "📦");
        assert_eq!(urgency_emoji(UrgencyLevel::Today), "⚠️");
    }

    #[test]
    fn test_food_card() {
        let card = food_card(&food_item(1, "牛奶", UrgencyLevel::Expired, -2));
        assert_eq!(card.meta, "蔬菜 • 1个");
        assert_eq!(card.expiry, "2024/5/1 (已过期 2 天)");
        assert_eq!(card.emoji, "❌");
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("URGENT".parse::<FridgeFilter>(), Ok(FridgeFilter::Urgent));
        assert!("stale".parse::<FridgeFilter>().is_err());
    }
}
