use futures_util::future::join_all;

use super::{messages, ActionError, ActionResult, App};
use crate::api::{InventoryApi, RequestError};
use crate::model::ShoppingItem;
use crate::view::recipes::missing_ingredient_requests;
use crate::view::render_recipes;

/// Result of one shopping-list creation in a bulk add
#[derive(Debug)]
pub struct BatchOutcome {
    pub ingredient: String,
    pub result: Result<ShoppingItem, RequestError>,
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

impl<A: InventoryApi> App<A> {
    pub async fn load_recipes(&self) -> ActionResult<()> {
        tracing::debug!(limit = self.settings.recipe_limit, "Loading recipes");

        match self
            .api
            .recommend_recipes(self.user, self.settings.recipe_limit)
            .await
        {
            Ok(recipes) => {
                self.with_state(|state| {
                    state.screen.recipes = Some(render_recipes(&recipes));
                    state.recipes = recipes;
                });
                Ok(())
            }
            Err(e) => Err(self.report(e.into(), messages::LOAD_RECIPES_FAILED)),
        }
    }

    /// Put every ingredient on the shopping list, all requests in flight at
    /// once. The toast counts what was requested, not what succeeded; the
    /// per-ingredient outcomes are returned for callers that care.
    pub async fn add_missing_ingredients(
        &self,
        ingredients: &[String],
        recipe_title: &str,
    ) -> Vec<BatchOutcome> {
        let requests = missing_ingredient_requests(ingredients, recipe_title);
        let api = &self.api;
        let user = self.user;

        let results = join_all(
            requests
                .iter()
                .map(|request| api.create_shopping_item(user, request)),
        )
        .await;

        let outcomes: Vec<BatchOutcome> = requests
            .into_iter()
            .zip(results)
            .map(|(request, result)| BatchOutcome {
                ingredient: request.item_name,
                result,
            })
            .collect();

        for outcome in &outcomes {
            if let Err(e) = &outcome.result {
                tracing::warn!(ingredient = %outcome.ingredient, error = %e, "Failed to add ingredient");
            }
        }
        tracing::info!(
            recipe = recipe_title,
            requested = ingredients.len(),
            added = outcomes.iter().filter(|o| o.is_ok()).count(),
            "Missing ingredients added"
        );

        self.with_state(|state| {
            state
                .notifier
                .success(messages::ingredients_added(ingredients.len()))
        });
        outcomes
    }

    /// Bulk add for the card at `index` of the last loaded recipe list.
    /// A recipe with nothing missing sends nothing and shows no toast.
    pub async fn add_missing_for_recipe(&self, index: usize) -> ActionResult<Vec<BatchOutcome>> {
        let found = self.with_state(|state| {
            state
                .recipes
                .get(index)
                .map(|recipe| (recipe.missing().to_vec(), recipe.title().to_string()))
        });
        let Some((missing, title)) = found else {
            return Err(ActionError::NoSuchRecipe(index));
        };

        if missing.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.add_missing_ingredients(&missing, &title).await)
    }
}
