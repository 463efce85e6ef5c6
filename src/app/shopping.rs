use super::{messages, ActionResult, App, AppState};
use crate::api::InventoryApi;
use crate::model::ItemId;
use crate::view::render_shopping;

impl<A: InventoryApi> App<A> {
    /// Fetch the full list (purchased entries included). Local unticks are
    /// forgotten; the server's flag wins after a reload.
    pub async fn load_shopping(&self) -> ActionResult<()> {
        tracing::debug!("Loading shopping list");

        match self.api.shopping_list(self.user, true).await {
            Ok(items) => {
                self.with_state(|state| {
                    state.unchecked.clear();
                    state.shopping_items = items;
                    rerender(state);
                });
                Ok(())
            }
            Err(e) => Err(self.report(e.into(), messages::LOAD_SHOPPING_FAILED)),
        }
    }

    /// Checkbox change on a shopping entry.
    ///
    /// Ticking marks the entry purchased on the server and reloads. Unticking
    /// has no server counterpart, so it only changes what is displayed until
    /// the next reload.
    pub async fn toggle_purchased(&self, id: ItemId, checked: bool) -> ActionResult<()> {
        if !checked {
            tracing::debug!(id, "Shopping entry unticked locally");
            self.with_state(|state| {
                state.unchecked.insert(id);
                rerender(state);
            });
            return Ok(());
        }

        self.with_state(|state| state.unchecked.remove(&id));
        match self.api.purchase_shopping_item(id).await {
            Ok(()) => {
                tracing::info!(id, "Shopping entry purchased");
                let _ = self.load_shopping().await;
                Ok(())
            }
            Err(e) => Err(self.report(e.into(), messages::ACTION_FAILED)),
        }
    }

    pub fn open_shopping_modal(&self) {
        self.with_state(|state| state.shopping_modal.open());
    }

    pub fn close_shopping_modal(&self) {
        self.with_state(|state| state.shopping_modal.close());
    }

    /// Submit the modal form. The modal stays open with its contents when
    /// anything fails.
    pub async fn submit_shopping_form(&self) -> ActionResult<()> {
        let request = match self.with_state(|state| state.shopping_modal.form.to_request()) {
            Ok(request) => request,
            Err(e) => return Err(self.report(e.into(), messages::ADD_FAILED)),
        };

        match self.api.create_shopping_item(self.user, &request).await {
            Ok(created) => {
                tracing::info!(id = created.id, item = %created.item_name, "Shopping entry added");
                self.with_state(|state| {
                    state.notifier.success(messages::SHOPPING_ADDED);
                    state.shopping_modal.close();
                });
                let _ = self.load_shopping().await;
                Ok(())
            }
            Err(e) => Err(self.report(e.into(), messages::ADD_FAILED)),
        }
    }
}

fn rerender(state: &mut AppState) {
    state.screen.shopping = Some(render_shopping(&state.shopping_items, &state.unchecked));
}
