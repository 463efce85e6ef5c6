//! Form state for adding food items and shopping entries.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{NewFoodItem, NewShoppingItem};

/// Default shelf life offered by the add-item form
pub const DEFAULT_SHELF_DAYS: i64 = 7;

/// Unit used when none is entered
pub const DEFAULT_UNIT: &str = "个";

pub const CATEGORIES: [&str; 8] = ["蔬菜", "水果", "肉类", "海鲜", "乳制品", "蛋类", "饮料", "其他"];

/// Client-side validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("Quantity must be at least 1")]
    Quantity,
}

pub fn default_expiration(today: NaiveDate) -> NaiveDate {
    today + Duration::days(DEFAULT_SHELF_DAYS)
}

/// The add-food-item form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddItemForm {
    pub food_name: String,
    pub category: String,
    pub quantity: i64,
    pub quantity_unit: String,
    pub expiration_date: NaiveDate,
}

impl AddItemForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            food_name: String::new(),
            category: CATEGORIES[0].to_string(),
            quantity: 1,
            quantity_unit: DEFAULT_UNIT.to_string(),
            expiration_date: default_expiration(today),
        }
    }

    /// Clear the inputs and restore the default date
    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    pub fn to_request(&self) -> Result<NewFoodItem, FormError> {
        let food_name = self.food_name.trim();
        if food_name.is_empty() {
            return Err(FormError::Missing("food_name"));
        }
        if self.quantity < 1 {
            return Err(FormError::Quantity);
        }
        let unit = self.quantity_unit.trim();

        Ok(NewFoodItem {
            food_name: food_name.to_string(),
            category: self.category.trim().to_string(),
            quantity: self.quantity,
            quantity_unit: if unit.is_empty() { DEFAULT_UNIT } else { unit }.to_string(),
            expiration_date: NewFoodItem::expiration_timestamp(self.expiration_date),
        })
    }
}

/// Fields of the add-to-shopping-list modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingForm {
    pub item_name: String,
    pub quantity: i64,
    #[serde(default)]
    pub quantity_unit: String,
    #[serde(default)]
    pub reason: String,
}

impl Default for ShoppingForm {
    fn default() -> Self {
        Self {
            item_name: String::new(),
            quantity: 1,
            quantity_unit: String::new(),
            reason: String::new(),
        }
    }
}

impl ShoppingForm {
    pub fn to_request(&self) -> Result<NewShoppingItem, FormError> {
        let item_name = self.item_name.trim();
        if item_name.is_empty() {
            return Err(FormError::Missing("item_name"));
        }
        if self.quantity < 1 {
            return Err(FormError::Quantity);
        }

        Ok(NewShoppingItem {
            item_name: item_name.to_string(),
            quantity: self.quantity,
            quantity_unit: Some(self.quantity_unit.trim().to_string()),
            reason: Some(self.reason.trim().to_string()),
        })
    }
}

/// Modal wrapper: the form only exists while the modal is open
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoppingModal {
    pub open: bool,
    pub form: ShoppingForm,
}

impl ShoppingModal {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close and reset the form
    pub fn close(&mut self) {
        self.open = false;
        self.form = ShoppingForm::default();
    }
}
