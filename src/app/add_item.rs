use chrono::NaiveDate;

use super::{messages, ActionError, ActionResult, App, Page};
use crate::api::InventoryApi;
use crate::model::FoodItem;

impl<A: InventoryApi> App<A> {
    /// Create a food item from the add form.
    ///
    /// On success the form is cleared (expiration back to `today` plus the
    /// default shelf life) and whichever inventory page is showing reloads.
    /// On failure the form keeps what the user typed.
    pub async fn submit_add_item(&self, today: NaiveDate) -> ActionResult<FoodItem> {
        let request = match self.with_state(|state| state.add_form.to_request()) {
            Ok(request) => request,
            Err(e) => {
                let toast = messages::add_item_failed(&e.to_string());
                return Err(self.report(e.into(), toast));
            }
        };

        match self.api.create_item(self.user, &request).await {
            Ok(created) => {
                tracing::info!(id = created.id, food = %created.food_name, "Food item added");
                let active = self.with_state(|state| {
                    state.notifier.success(messages::ITEM_ADDED);
                    state.add_form.reset(today);
                    state.current_page
                });

                match active {
                    Page::Fridge => {
                        let _ = self.load_fridge().await;
                    }
                    Page::Dashboard => {
                        let _ = self.load_dashboard().await;
                    }
                    _ => {}
                }
                Ok(created)
            }
            Err(e) => {
                let toast = messages::add_item_failed(&e.message());
                Err(self.report(ActionError::from(e), toast))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{app, toasts};
    use super::*;
    use crate::api::fake::Call;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_submit_sends_midnight_utc_and_resets() {
        let app = app();
        app.navigate(Page::AddItem).await.unwrap();
        app.with_state(|state| {
            let form = &mut state.add_form;
            form.food_name = "牛奶".to_string();
            form.category = "乳制品".to_string();
            form.quantity = 2;
            form.quantity_unit = "盒".to_string();
            form.expiration_date = day(2024, 5, 10);
        });

        let created = app.submit_add_item(day(2024, 5, 1)).await.unwrap();
        assert_eq!(created.food_name, "牛奶");

        let calls = app.api().calls();
        assert_eq!(calls.len(), 1);
        let Call::CreateItem(1, item) = &calls[0] else {
            panic!("expected item creation");
        };
        assert_eq!(item.expiration_date, "2024-05-10T00:00:00.000Z");
        assert_eq!(item.quantity, 2);

        assert!(app.state().add_form.food_name.is_empty());
        assert_eq!(app.state().add_form.expiration_date, day(2024, 5, 8));
        assert_eq!(toasts(&app), vec![messages::ITEM_ADDED]);
    }

    #[tokio::test]
    async fn test_submit_reloads_visible_inventory_page() {
        let app = app();
        app.with_state(|state| {
            state.current_page = Page::Fridge;
            state.add_form.food_name = "苹果".to_string();
        });

        app.submit_add_item(day(2024, 5, 1)).await.unwrap();

        assert_eq!(app.api().calls()[1], Call::ListItems(1, false));
        assert_eq!(app.state().screen.fridge.as_ref().unwrap().cards.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_form() {
        let app = app();
        app.state().add_form.food_name = "牛奶".to_string();
        app.api().fail("create_item");

        assert!(app.submit_add_item(day(2024, 5, 1)).await.is_err());
        assert_eq!(app.state().add_form.food_name, "牛奶");
        assert_eq!(toasts(&app), vec!["添加失败：create_item failed"]);
    }

    #[tokio::test]
    async fn test_submit_invalid_form_sends_nothing() {
        let app = app();

        assert!(matches!(
            app.submit_add_item(day(2024, 5, 1)).await,
            Err(ActionError::Form(_))
        ));
        assert!(app.api().calls().is_empty());
        assert_eq!(toasts(&app).len(), 1);
        assert!(toasts(&app)[0].starts_with(messages::ADD_FAILED));
    }
}
