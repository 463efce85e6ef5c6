//! Recipe recommendation cards.

use serde::Serialize;

use crate::model::{NewShoppingItem, Recipe};

/// Category shown when the server omits one
pub const DEFAULT_CATEGORY: &str = "家常菜";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipesView {
    pub cards: Vec<RecipeCard>,
}

impl RecipesView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeCard {
    /// Position in the recommendation list, used to address the card
    pub index: usize,
    pub title: String,
    pub subtitle: String,
    /// Clamped to 0..=100, 0 when absent
    pub match_rate: f64,
    pub total_minutes: u32,
    pub category: String,
    pub ingredients: IngredientStatus,
}

impl RecipeCard {
    pub fn match_label(&self) -> String {
        format!("{:.0}%", self.match_rate)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "missing", rename_all = "lowercase")]
pub enum IngredientStatus {
    /// Everything is in the fridge
    Complete,
    Missing(Vec<String>),
}

pub fn recipe_card(index: usize, recipe: &Recipe) -> RecipeCard {
    let missing = recipe.missing();
    RecipeCard {
        index,
        title: recipe.title().to_string(),
        subtitle: recipe.name.clone(),
        match_rate: recipe.match_rate.unwrap_or(0.0).clamp(0.0, 100.0),
        total_minutes: recipe.prep_time.unwrap_or(0) + recipe.cook_time.unwrap_or(0),
        category: recipe
            .category
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        ingredients: if missing.is_empty() {
            IngredientStatus::Complete
        } else {
            IngredientStatus::Missing(missing.to_vec())
        },
    }
}

pub fn render_recipes(recipes: &[Recipe]) -> RecipesView {
    RecipesView {
        cards: recipes
            .iter()
            .enumerate()
            .map(|(index, recipe)| recipe_card(index, recipe))
            .collect(),
    }
}

/// Shopping entries for a recipe's missing ingredients, one per name
pub fn missing_ingredient_requests(ingredients: &[String], recipe_title: &str) -> Vec<NewShoppingItem> {
    ingredients
        .iter()
        .map(|ingredient| NewShoppingItem {
            item_name: ingredient.clone(),
            quantity: 1,
            quantity_unit: None,
            reason: Some(format!("{}需要", recipe_title)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::recipe;

    #[test]
    fn test_recipe_card_defaults() {
        let mut r = recipe("Tomato Egg", &[]);
        r.match_rate = None;
        r.cook_time = None;

        let card = recipe_card(0, &r);
        assert_eq!(card.match_rate, 0.0);
        assert_eq!(card.match_label(), "0%");
        assert_eq!(card.total_minutes, 10);
        assert_eq!(card.category, DEFAULT_CATEGORY);
        assert_eq!(card.ingredients, IngredientStatus::Complete);
        assert_eq!(card.title, "Tomato Egg(中)");
        assert_eq!(card.subtitle, "Tomato Egg");
    }

    #[test]
    fn test_recipe_card_missing() {
        let mut r = recipe("Fried Rice", &["鸡蛋", "葱"]);
        r.match_rate = Some(66.7);
        r.category = Some("主食".to_string());

        let card = recipe_card(3, &r);
        assert_eq!(card.index, 3);
        assert_eq!(card.match_label(), "67%");
        assert_eq!(card.total_minutes, 25);
        assert_eq!(card.category, "主食");
        assert_eq!(
            card.ingredients,
            IngredientStatus::Missing(vec!["鸡蛋".to_string(), "葱".to_string()])
        );
    }

    #[test]
    fn test_missing_ingredient_requests() {
        let requests =
            missing_ingredient_requests(&["鸡蛋".to_string(), "葱".to_string()], "蛋炒饭");
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].item_name, "葱");
        assert_eq!(requests[1].quantity, 1);
        assert_eq!(requests[1].reason.as_deref(), Some("蛋炒饭需要"));
    }
}
