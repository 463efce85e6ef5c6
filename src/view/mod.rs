//! View Models
//!
//! Pure functions from fetched data to structured views. Nothing here
//! performs I/O; the `present` module turns these into HTML or text.

pub mod dashboard;
pub mod forms;
pub mod fridge;
pub mod recipes;
pub mod shopping;

pub use dashboard::{
    days_left_text, render_dashboard, CategoryBar, CategoryChart, DashboardView, StatTiles,
    UrgentEntry, UrgentPanel,
};
pub use forms::{AddItemForm, FormError, ShoppingForm, ShoppingModal};
pub use fridge::{render_fridge, FoodCard, FridgeFilter, FridgeView};
pub use recipes::{render_recipes, IngredientStatus, RecipeCard, RecipesView};
pub use shopping::{render_shopping, ShoppingEntry, ShoppingView};
