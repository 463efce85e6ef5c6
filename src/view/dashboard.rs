//! Dashboard view models: stat tiles, urgent-items panel, category chart.

use serde::Serialize;

use crate::model::{FoodItem, Stats};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub tiles: StatTiles,
    pub urgent: UrgentPanel,
    pub chart: CategoryChart,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatTiles {
    pub total_items: u64,
    pub expiring_today: u64,
    pub expiring_soon: u64,
    pub fresh_items: u64,
}

/// Alert listing items close to expiry. Hidden when there are none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrgentPanel {
    pub visible: bool,
    pub entries: Vec<UrgentEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrgentEntry {
    pub name: String,
    /// e.g. "2盒"
    pub quantity: String,
    pub days_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "bars", rename_all = "lowercase")]
pub enum CategoryChart {
    /// No categories at all
    Empty,
    Bars(Vec<CategoryBar>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBar {
    pub category: String,
    pub count: u64,
    /// Bar width, `round(count / total * 100)`
    pub percent: u32,
}

/// Human phrasing of remaining shelf life
pub fn days_left_text(days_left: i64) -> String {
    if days_left == 0 {
        "今天到期！".to_string()
    } else if days_left < 0 {
        format!("已过期 {} 天", days_left.abs())
    } else {
        format!("还剩 {} 天", days_left)
    }
}

pub fn render_dashboard(stats: &Stats, expiring: &[FoodItem]) -> DashboardView {
    DashboardView {
        tiles: render_tiles(stats),
        urgent: render_urgent(expiring),
        chart: render_category_chart(stats.category_breakdown.iter().map(|(k, v)| (k.as_str(), *v))),
    }
}

pub fn render_tiles(stats: &Stats) -> StatTiles {
    StatTiles {
        total_items: stats.total_items,
        expiring_today: stats.expiring_today,
        expiring_soon: stats.expiring_within_3_days,
        fresh_items: stats.fresh_items,
    }
}

pub fn render_urgent(items: &[FoodItem]) -> UrgentPanel {
    let entries = items
        .iter()
        .map(|item| UrgentEntry {
            name: item.food_name.clone(),
            quantity: format!("{}{}", item.quantity, item.quantity_unit),
            days_text: item
                .days_left
                .map(days_left_text)
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect::<Vec<_>>();

    UrgentPanel {
        visible: !entries.is_empty(),
        entries,
    }
}

pub fn render_category_chart<'a>(categories: impl IntoIterator<Item = (&'a str, u64)>) -> CategoryChart {
    let categories: Vec<(&str, u64)> = categories.into_iter().collect();
    if categories.is_empty() {
        return CategoryChart::Empty;
    }

    let total: u64 = categories.iter().map(|(_, count)| count).sum();

    let bars = categories
        .into_iter()
        .map(|(category, count)| {
            let percent = if total == 0 {
                0
            } else {
                (count as f64 / total as f64 * 100.0).round() as u32
            };
            CategoryBar {
                category: category.to_string(),
                count,
                percent,
            }
        })
        .collect();

    CategoryChart::Bars(bars)
}
