use super::{messages, ActionResult, App, Confirm, Page};
use crate::api::InventoryApi;
use crate::model::ItemId;
use crate::view::{render_fridge, FridgeFilter};

impl<A: InventoryApi> App<A> {
    /// Fetch the active inventory, cache it and render every item
    pub async fn load_fridge(&self) -> ActionResult<()> {
        tracing::debug!("Loading fridge items");

        match self.api.list_items(self.user, false).await {
            Ok(items) => {
                self.with_state(|state| {
                    state.screen.fridge = Some(render_fridge(&items, FridgeFilter::All));
                    state.filter = FridgeFilter::All;
                    state.fridge_items = items;
                });
                Ok(())
            }
            Err(e) => Err(self.report(e.into(), messages::LOAD_FRIDGE_FAILED)),
        }
    }

    /// Re-render the cached list through `filter`. No request is made.
    pub fn filter_fridge(&self, filter: FridgeFilter) {
        self.with_state(|state| {
            state.filter = filter;
            state.screen.fridge = Some(render_fridge(&state.fridge_items, filter));
        });
    }

    pub async fn consume_item(&self, id: ItemId) -> ActionResult<()> {
        match self.api.consume_item(id).await {
            Ok(()) => {
                tracing::info!(id, "Item consumed");
                self.with_state(|state| state.notifier.success(messages::CONSUMED));
                self.after_inventory_change().await;
                Ok(())
            }
            Err(e) => Err(self.report(e.into(), messages::ACTION_FAILED)),
        }
    }

    /// Delete after the user confirms. Returns `false` when declined, in
    /// which case nothing is sent.
    pub async fn delete_item<C: Confirm>(&self, id: ItemId, confirm: &C) -> ActionResult<bool> {
        if !confirm.confirm(messages::DELETE_CONFIRM) {
            tracing::debug!(id, "Delete cancelled");
            return Ok(false);
        }

        match self.api.delete_item(id).await {
            Ok(()) => {
                tracing::info!(id, "Item deleted");
                self.with_state(|state| state.notifier.success(messages::DELETED));
                self.after_inventory_change().await;
                Ok(true)
            }
            Err(e) => Err(self.report(e.into(), messages::DELETE_FAILED)),
        }
    }

    /// Refetch the fridge list, and the dashboard only when it is on screen.
    /// Reload failures are reported by the loads themselves.
    async fn after_inventory_change(&self) {
        let _ = self.load_fridge().await;
        let on_dashboard = self.with_state(|state| state.is_active(Page::Dashboard));
        if on_dashboard {
            let _ = self.load_dashboard().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{app, toasts};
    use super::*;
    use crate::api::fake::{food_item, Call};
    use crate::model::UrgencyLevel;

    fn stocked() -> App<crate::api::fake::FakeApi> {
        let app = app();
        *app.api().items.lock().unwrap() = vec![
            food_item(1, "牛奶", UrgencyLevel::Expired, -2),
            food_item(2, "鸡蛋", UrgencyLevel::Today, 0),
            food_item(3, "苹果", UrgencyLevel::Warning, 5),
            food_item(4, "土豆", UrgencyLevel::Fresh, 20),
        ];
        app
    }

    #[tokio::test]
    async fn test_filter_uses_cache_without_fetching() {
        let app = stocked();
        app.load_fridge().await.unwrap();
        let cached = app.state().fridge_items.clone();
        app.api().clear_calls();

        app.filter_fridge(FridgeFilter::Urgent);
        let view = app.state().screen.fridge.clone().unwrap();
        let ids: Vec<ItemId> = view.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(view.filter, FridgeFilter::Urgent);

        app.filter_fridge(FridgeFilter::Fresh);
        let view = app.state().screen.fridge.clone().unwrap();
        let ids: Vec<ItemId> = view.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 4]);

        assert_eq!(app.state().fridge_items, cached);
        assert!(app.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_reload_resets_filter() {
        let app = stocked();
        app.load_fridge().await.unwrap();
        app.filter_fridge(FridgeFilter::Urgent);

        app.load_fridge().await.unwrap();
        let state = app.state();
        assert_eq!(state.filter, FridgeFilter::All);
        assert_eq!(state.screen.fridge.as_ref().unwrap().cards.len(), 4);
    }

    #[tokio::test]
    async fn test_delete_without_confirmation_sends_nothing() {
        let app = stocked();
        let deleted = app.delete_item(1, &|_: &str| false).await.unwrap();

        assert!(!deleted);
        assert!(app.api().calls().is_empty());
        assert!(toasts(&app).is_empty());
    }

    #[tokio::test]
    async fn test_delete_confirmed_reloads_fridge_only_off_dashboard() {
        let app = stocked();
        app.state().current_page = Page::Fridge;

        let deleted = app.delete_item(1, &|_: &str| true).await.unwrap();
        assert!(deleted);
        assert_eq!(
            app.api().calls(),
            vec![Call::Delete(1), Call::ListItems(1, false)]
        );
        assert_eq!(app.state().fridge_items.len(), 3);
        assert_eq!(toasts(&app), vec![messages::DELETED]);
    }

    #[tokio::test]
    async fn test_consume_on_dashboard_refreshes_dashboard() {
        let app = stocked();
        assert!(app.state().is_active(Page::Dashboard));

        app.consume_item(2).await.unwrap();

        let calls = app.api().calls();
        assert_eq!(calls[0], Call::Consume(2));
        assert_eq!(calls[1], Call::ListItems(1, false));
        assert!(calls.contains(&Call::Stats(1)));
        assert!(app.state().screen.dashboard.is_some());
        assert_eq!(toasts(&app), vec![messages::CONSUMED]);
    }

    #[tokio::test]
    async fn test_consume_failure_reports_and_skips_reload() {
        let app = stocked();
        app.api().fail("consume");

        assert!(app.consume_item(2).await.is_err());
        assert_eq!(app.api().calls(), vec![Call::Consume(2)]);
        assert_eq!(toasts(&app), vec![messages::ACTION_FAILED]);
    }

    #[tokio::test]
    async fn test_delete_failure_reports() {
        let app = stocked();
        app.api().fail("delete");

        assert!(app.delete_item(1, &|_: &str| true).await.is_err());
        assert_eq!(toasts(&app), vec![messages::DELETE_FAILED]);
    }
}
