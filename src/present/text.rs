//! Terminal presenter used by the one-shot commands and the shell.

use super::Presenter;
use crate::app::Page;
use crate::notify::Toast;
use crate::view::{
    AddItemForm, CategoryChart, DashboardView, FridgeFilter, FridgeView, IngredientStatus,
    RecipesView, ShoppingEntry, ShoppingModal, ShoppingView,
};

/// Width of a 100% category bar, in cells
const BAR_WIDTH: u32 = 20;

#[derive(Debug, Clone, Copy, Default)]
pub struct TextPresenter;

fn bar(percent: u32) -> String {
    let cells = (percent.min(100) * BAR_WIDTH + 50) / 100;
    "█".repeat(cells as usize)
}

fn shopping_line(entry: &ShoppingEntry) -> String {
    let mut line = format!(
        "  [{}] #{} {}",
        if entry.checked { "x" } else { " " },
        entry.id,
        entry.label
    );
    if let Some(reason) = &entry.reason {
        line.push_str(&format!("  ({})", reason));
    }
    line
}

impl Presenter for TextPresenter {
    fn nav(&self, active: Page) -> String {
        Page::ALL
            .iter()
            .map(|page| {
                if *page == active {
                    format!("[{}]", page.label())
                } else {
                    page.label().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn dashboard(&self, view: &DashboardView) -> String {
        let tiles = &view.tiles;
        let mut lines = vec![format!(
            "总食材数 {}  |  今天到期 {}  |  3天内到期 {}  |  新鲜食材 {}",
            tiles.total_items, tiles.expiring_today, tiles.expiring_soon, tiles.fresh_items
        )];

        if view.urgent.visible {
            lines.push(String::new());
            lines.push("⚠️ 紧急提醒".to_string());
            for entry in &view.urgent.entries {
                lines.push(format!("  {} ({}) - {}", entry.name, entry.quantity, entry.days_text));
            }
        }

        lines.push(String::new());
        lines.push("分类统计".to_string());
        match &view.chart {
            CategoryChart::Empty => lines.push("  暂无数据".to_string()),
            CategoryChart::Bars(bars) => {
                let width = bars
                    .iter()
                    .map(|b| b.category.chars().count())
                    .max()
                    .unwrap_or(0);
                for b in bars {
                    let pad = width - b.category.chars().count();
                    lines.push(format!(
                        "  {}{}  {} {} ({}%)",
                        b.category,
                        "　".repeat(pad),
                        bar(b.percent),
                        b.count,
                        b.percent
                    ));
                }
            }
        }
        lines.join("\n")
    }

    fn fridge(&self, view: &FridgeView) -> String {
        let filters = FridgeFilter::ALL
            .iter()
            .map(|f| {
                if *f == view.filter {
                    format!("[{}]", f.label())
                } else {
                    f.label().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" | ");
        let mut lines = vec![format!("筛选: {}", filters), String::new()];

        if view.is_empty() {
            lines.push("📭 冰箱里还没有食材".to_string());
        }
        for card in &view.cards {
            lines.push(format!("#{} {} {}  [{}]", card.id, card.emoji, card.name, card.badge));
            lines.push(format!("    {}", card.meta));
            lines.push(format!("    {}", card.expiry));
        }
        lines.join("\n")
    }

    fn recipes(&self, view: &RecipesView) -> String {
        if view.is_empty() {
            return "👨‍🍳 暂无食谱推荐".to_string();
        }

        let mut lines = Vec::new();
        for card in &view.cards {
            lines.push(format!("{}. {} ({})", card.index, card.title, card.subtitle));
            lines.push(format!(
                "   匹配度 {}  |  ⏱️ {} 分钟  |  🍽️ {}",
                card.match_label(),
                card.total_minutes,
                card.category
            ));
            match &card.ingredients {
                IngredientStatus::Complete => lines.push("   ✅ 所有食材齐全！".to_string()),
                IngredientStatus::Missing(missing) => lines.push(format!(
                    "   ⚠️ 还缺少 {} 样食材：{}",
                    missing.len(),
                    missing.join(", ")
                )),
            }
        }
        lines.join("\n")
    }

    fn shopping(&self, view: &ShoppingView) -> String {
        let mut lines = vec!["待购买".to_string()];
        if view.pending.is_empty() {
            lines.push("  购物清单为空".to_string());
        }
        lines.extend(view.pending.iter().map(shopping_line));

        lines.push(String::new());
        lines.push("已购买".to_string());
        if view.purchased.is_empty() {
            lines.push("  暂无已购买商品".to_string());
        }
        lines.extend(view.purchased.iter().map(shopping_line));
        lines.join("\n")
    }

    fn add_item_form(&self, form: &AddItemForm) -> String {
        format!(
            "食材名称: {}\n分类: {}\n数量: {}{}\n过期日期: {}",
            form.food_name,
            form.category,
            form.quantity,
            form.quantity_unit,
            form.expiration_date.format("%Y-%m-%d")
        )
    }

    fn shopping_modal(&self, modal: &ShoppingModal) -> String {
        if !modal.open {
            return String::new();
        }
        let form = &modal.form;
        format!(
            "添加到购物清单\n商品名称: {}\n数量: {}{}\n备注: {}",
            form.item_name, form.quantity, form.quantity_unit, form.reason
        )
    }

    fn toast(&self, toast: &Toast) -> String {
        format!("{} {}", toast.kind.icon(), toast.message)
    }

    fn loading(&self, page: Page) -> String {
        format!("{} 加载中...", page.label())
    }
}
