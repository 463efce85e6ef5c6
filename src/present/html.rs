//! HTML Presenter
//!
//! Server-rendered markup for the browser dashboard, built from the askama
//! templates under `templates/`. Every user action is a plain `<form>`
//! posting to the `web` routes, which redirect back to `/`, so the page works
//! without client-side scripting except for the delete confirmation prompt
//! and the toast timer.

use askama::Template;

use super::Presenter;
use crate::app::{messages, AppState, Page};
use crate::notify::{Toast, DEFAULT_TOAST_MS};
use crate::view::forms::CATEGORIES;
use crate::view::{
    AddItemForm, CategoryChart, DashboardView, FridgeFilter, FridgeView, IngredientStatus,
    RecipesView, ShoppingModal, ShoppingView,
};

#[derive(Template)]
#[template(path = "pages/document.html")]
struct DocumentTemplate<'a> {
    page: &'a str,
    nav: &'a str,
    body: &'a str,
    modal: &'a str,
    toast: &'a str,
}

struct NavLink {
    slug: &'static str,
    label: &'static str,
    active: bool,
}

#[derive(Template)]
#[template(path = "components/nav.html")]
struct NavTemplate {
    links: Vec<NavLink>,
}

#[derive(Template)]
#[template(path = "pages/dashboard.html")]
struct DashboardTemplate<'a> {
    view: &'a DashboardView,
}

#[derive(Template)]
#[template(path = "pages/fridge.html")]
struct FridgeTemplate<'a> {
    view: &'a FridgeView,
    filters: Vec<NavLink>,
    confirm: &'a str,
    empty_icon: &'a str,
    empty_text: &'a str,
}

#[derive(Template)]
#[template(path = "pages/recipes.html")]
struct RecipesTemplate<'a> {
    view: &'a RecipesView,
    empty_icon: &'a str,
    empty_text: &'a str,
}

#[derive(Template)]
#[template(path = "pages/shopping.html")]
struct ShoppingTemplate<'a> {
    view: &'a ShoppingView,
}

struct CategoryOption {
    name: &'static str,
    selected: bool,
}

#[derive(Template)]
#[template(path = "pages/add-item.html")]
struct AddItemTemplate<'a> {
    form: &'a AddItemForm,
    categories: Vec<CategoryOption>,
}

#[derive(Template)]
#[template(path = "components/shopping-modal.html")]
struct ShoppingModalTemplate<'a> {
    modal: &'a ShoppingModal,
}

#[derive(Template)]
#[template(path = "components/toast.html")]
struct ToastTemplate<'a> {
    message: &'a str,
    toast_type: &'a str,
    dismiss_after: u64,
}

#[derive(Template)]
#[template(path = "components/loading.html")]
struct LoadingTemplate {
    page: &'static str,
}

/// Render a template, logging failures and falling back to an empty fragment
fn render<T: Template>(template: &T) -> String {
    template.render().unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to render template");
        String::new()
    })
}

#[derive(Debug, Clone)]
pub struct HtmlPresenter {
    toast_ms: u64,
}

impl Default for HtmlPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_MS)
    }
}

impl HtmlPresenter {
    pub fn new(toast_ms: u64) -> Self {
        Self { toast_ms }
    }

    /// Complete page: navigation, the active page, the shopping modal and
    /// the visible toast
    pub fn document(&self, state: &AppState) -> String {
        let page = state.current_page;
        let modal = if page == Page::Shopping {
            self.shopping_modal(&state.shopping_modal)
        } else {
            String::new()
        };
        let toast = state
            .notifier
            .visible()
            .map(|toast| self.toast(toast))
            .unwrap_or_default();

        render(&DocumentTemplate {
            page: page.as_str(),
            nav: &self.nav(page),
            body: &self.page(state),
            modal: &modal,
            toast: &toast,
        })
    }
}

impl Presenter for HtmlPresenter {
    fn nav(&self, active: Page) -> String {
        let links = Page::ALL
            .iter()
            .map(|page| NavLink {
                slug: page.as_str(),
                label: page.label(),
                active: *page == active,
            })
            .collect();
        render(&NavTemplate { links })
    }

    fn dashboard(&self, view: &DashboardView) -> String {
        render(&DashboardTemplate { view })
    }

    fn fridge(&self, view: &FridgeView) -> String {
        let filters = FridgeFilter::ALL
            .iter()
            .map(|filter| NavLink {
                slug: filter.as_str(),
                label: filter.label(),
                active: *filter == view.filter,
            })
            .collect();
        render(&FridgeTemplate {
            view,
            filters,
            confirm: messages::DELETE_CONFIRM,
            empty_icon: "📭",
            empty_text: "冰箱里还没有食材",
        })
    }

    fn recipes(&self, view: &RecipesView) -> String {
        render(&RecipesTemplate {
            view,
            empty_icon: "👨‍🍳",
            empty_text: "暂无食谱推荐",
        })
    }

    fn shopping(&self, view: &ShoppingView) -> String {
        render(&ShoppingTemplate { view })
    }

    fn add_item_form(&self, form: &AddItemForm) -> String {
        let categories = CATEGORIES
            .iter()
            .map(|&name| CategoryOption {
                name,
                selected: name == form.category,
            })
            .collect();
        render(&AddItemTemplate { form, categories })
    }

    fn shopping_modal(&self, modal: &ShoppingModal) -> String {
        render(&ShoppingModalTemplate { modal })
    }

    fn toast(&self, toast: &Toast) -> String {
        render(&ToastTemplate {
            message: &toast.message,
            toast_type: toast.kind.as_str(),
            dismiss_after: self.toast_ms,
        })
    }

    fn loading(&self, page: Page) -> String {
        render(&LoadingTemplate { page: page.as_str() })
    }
}
