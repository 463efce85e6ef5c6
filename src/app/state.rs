//! Application State
//!
//! Everything the dashboard remembers between events: the active page,
//! the last fetched lists, the fridge filter, form contents and the
//! rendered view of every page.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::model::{FoodItem, ItemId, Recipe, ShoppingItem};
use crate::notify::Notifier;
use crate::view::{
    AddItemForm, DashboardView, FridgeFilter, FridgeView, RecipesView, ShoppingModal, ShoppingView,
};

/// Pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Fridge,
    Recipes,
    Shopping,
    #[serde(rename = "add")]
    AddItem,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Fridge,
        Page::Recipes,
        Page::Shopping,
        Page::AddItem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Fridge => "fridge",
            Page::Recipes => "recipes",
            Page::Shopping => "shopping",
            Page::AddItem => "add",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "📊 仪表盘",
            Page::Fridge => "🧊 我的冰箱",
            Page::Recipes => "👨‍🍳 食谱推荐",
            Page::Shopping => "🛒 购物清单",
            Page::AddItem => "➕ 添加食材",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dashboard" | "home" => Ok(Page::Dashboard),
            "fridge" => Ok(Page::Fridge),
            "recipes" => Ok(Page::Recipes),
            "shopping" => Ok(Page::Shopping),
            "add" | "add-item" => Ok(Page::AddItem),
            other => Err(format!(
                "Unknown page: {}. Use: dashboard, fridge, recipes, shopping, add",
                other
            )),
        }
    }
}

/// Latest rendered view of each page; `None` until first loaded
#[derive(Debug, Clone, Default, Serialize)]
pub struct Screen {
    pub dashboard: Option<DashboardView>,
    pub fridge: Option<FridgeView>,
    pub recipes: Option<RecipesView>,
    pub shopping: Option<ShoppingView>,
}

impl Screen {
    /// Whether `page` has something to show. The add page needs no data.
    pub fn is_loaded(&self, page: Page) -> bool {
        match page {
            Page::Dashboard => self.dashboard.is_some(),
            Page::Fridge => self.fridge.is_some(),
            Page::Recipes => self.recipes.is_some(),
            Page::Shopping => self.shopping.is_some(),
            Page::AddItem => true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub current_page: Page,
    /// Last fetched fridge list. Stale after any consume/delete/add until
    /// the fridge page reloads.
    pub fridge_items: Vec<FoodItem>,
    pub filter: FridgeFilter,
    /// Last recommendation list, addressed by card index
    pub recipes: Vec<Recipe>,
    pub shopping_items: Vec<ShoppingItem>,
    /// Purchased entries the user unticked since the last shopping reload
    pub unchecked: HashSet<ItemId>,
    pub add_form: AddItemForm,
    pub shopping_modal: ShoppingModal,
    pub notifier: Notifier,
    pub screen: Screen,
    /// Pages whose load routine has started at least once, whether or not
    /// it succeeded
    pub attempted: HashSet<Page>,
}

impl AppState {
    pub fn new(today: NaiveDate, notifier: Notifier) -> Self {
        Self {
            current_page: Page::default(),
            fridge_items: Vec::new(),
            filter: FridgeFilter::default(),
            recipes: Vec::new(),
            shopping_items: Vec::new(),
            unchecked: HashSet::new(),
            add_form: AddItemForm::new(today),
            shopping_modal: ShoppingModal::default(),
            notifier,
            screen: Screen::default(),
            attempted: HashSet::new(),
        }
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.current_page == page
    }
}
