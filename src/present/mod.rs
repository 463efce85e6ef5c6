//! Presentation
//!
//! Turns view models into something a person can look at. The browser
//! gets HTML (`html`), the terminal gets plain text (`text`). Both work off
//! the same [`AppState`], so switching presenters changes nothing about
//! what is fetched or which toasts appear.

pub mod html;
pub mod text;

pub use html::HtmlPresenter;
pub use text::TextPresenter;

use crate::app::{AppState, Page};
use crate::notify::Toast;
use crate::view::{AddItemForm, DashboardView, FridgeView, RecipesView, ShoppingModal, ShoppingView};

pub trait Presenter {
    /// Navigation bar with `active` highlighted
    fn nav(&self, active: Page) -> String;

    fn dashboard(&self, view: &DashboardView) -> String;

    fn fridge(&self, view: &FridgeView) -> String;

    fn recipes(&self, view: &RecipesView) -> String;

    fn shopping(&self, view: &ShoppingView) -> String;

    fn add_item_form(&self, form: &AddItemForm) -> String;

    fn shopping_modal(&self, modal: &ShoppingModal) -> String;

    fn toast(&self, toast: &Toast) -> String;

    /// Placeholder for a page whose data has not arrived yet
    fn loading(&self, page: Page) -> String;

    /// Body of the active page
    fn page(&self, state: &AppState) -> String {
        let screen = &state.screen;
        let body = match state.current_page {
            Page::Dashboard => screen.dashboard.as_ref().map(|v| self.dashboard(v)),
            Page::Fridge => screen.fridge.as_ref().map(|v| self.fridge(v)),
            Page::Recipes => screen.recipes.as_ref().map(|v| self.recipes(v)),
            Page::Shopping => screen.shopping.as_ref().map(|v| self.shopping(v)),
            Page::AddItem => Some(self.add_item_form(&state.add_form)),
        };
        body.unwrap_or_else(|| self.loading(state.current_page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Notifier;
    use chrono::NaiveDate;

    #[test]
    fn test_unloaded_page_shows_loading() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut state = AppState::new(today, Notifier::default());
        state.current_page = Page::Recipes;

        let presenter = TextPresenter::default();
        assert_eq!(presenter.page(&state), presenter.loading(Page::Recipes));

        state.current_page = Page::AddItem;
        assert!(presenter.page(&state).contains("2024-05-08"));
    }
}
