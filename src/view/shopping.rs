//! Shopping list partitions.

use serde::Serialize;
use std::collections::HashSet;

use crate::model::{ItemId, ShoppingItem};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingView {
    pub pending: Vec<ShoppingEntry>,
    pub purchased: Vec<ShoppingEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingEntry {
    pub id: ItemId,
    /// "{name} - {quantity}{unit}"
    pub label: String,
    pub reason: Option<String>,
    /// Checkbox state as displayed
    pub checked: bool,
}

fn entry(item: &ShoppingItem, unchecked: &HashSet<ItemId>) -> ShoppingEntry {
    ShoppingEntry {
        id: item.id,
        label: format!(
            "{} - {}{}",
            item.item_name,
            item.quantity,
            item.quantity_unit.as_deref().unwrap_or("")
        ),
        reason: item.reason.clone().filter(|r| !r.is_empty()),
        checked: item.purchased() && !unchecked.contains(&item.id),
    }
}

/// Split by the server's purchased flag.
///
/// `unchecked` holds entries the user unticked locally; they stay in the
/// purchased partition (the server still says purchased) but render unchecked.
pub fn render_shopping(items: &[ShoppingItem], unchecked: &HashSet<ItemId>) -> ShoppingView {
    let (purchased, pending): (Vec<&ShoppingItem>, Vec<&ShoppingItem>) =
        items.iter().partition(|item| item.purchased());

    ShoppingView {
        pending: pending.into_iter().map(|i| entry(i, unchecked)).collect(),
        purchased: purchased.into_iter().map(|i| entry(i, unchecked)).collect(),
    }
}
