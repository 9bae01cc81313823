//! HTML rendering of the table page.
//!
//! The page is a single Tera template; this module turns the catalog and
//! the current [`TableState`] into the flat model the template reads.

use serde::Serialize;
use tera::{Context, Tera};

use catalog_core::{Category, EnrichedProduct, Sex, SortColumn, TableState, User, UserId};

use crate::config::TableConfig;
use crate::hooks::{HookNames, HOOKS};

const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");
const PAGE_NAME: &str = "page.html";

/// Errors raised while rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// Everything one render needs.
pub struct PageView<'a> {
    pub config: &'a TableConfig,
    pub users: &'a [User],
    pub categories: &'a [Category],
    pub state: &'a TableState,
    pub rows: &'a [&'a EnrichedProduct],
}

#[derive(Serialize)]
struct PageModel<'a> {
    config: &'a TableConfig,
    cy: HookNames,
    all_users_active: bool,
    users: Vec<UserTab<'a>>,
    query: &'a str,
    show_clear: bool,
    all_categories_class: String,
    categories: Vec<CategoryToggle<'a>>,
    has_rows: bool,
    headers: Vec<HeaderCell>,
    rows: Vec<RowCells<'a>>,
}

#[derive(Serialize)]
struct UserTab<'a> {
    id: UserId,
    name: &'a str,
    active: bool,
}

#[derive(Serialize)]
struct CategoryToggle<'a> {
    title: &'a str,
    class: String,
}

#[derive(Serialize)]
struct HeaderCell {
    label: &'static str,
    icon_class: &'static str,
}

#[derive(Serialize)]
struct RowCells<'a> {
    id: u32,
    name: &'a str,
    category: String,
    user_name: &'a str,
    user_class: &'static str,
}

/// CSS class of the user cell.
pub fn user_class(user: Option<&User>) -> &'static str {
    match user.map(|u| u.sex) {
        Some(Sex::Male) => "has-text-link",
        Some(Sex::Female) => "has-text-danger",
        None => "",
    }
}

/// Renders [`PageView`]s with the page template.
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    /// Compile the page template.
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Render the full page. All text is HTML-escaped.
    pub fn render(&self, view: &PageView<'_>) -> Result<String, RenderError> {
        let model = build_model(view);
        let context = Context::from_serialize(&model)?;
        let html = self.tera.render(PAGE_NAME, &context)?;
        Ok(html)
    }
}

fn build_model<'a>(view: &PageView<'a>) -> PageModel<'a> {
    let filters = &view.state.filters;
    let selected_user = filters.selected_user_id;

    let users = view
        .users
        .iter()
        .map(|user| UserTab {
            id: user.id,
            name: &user.name,
            active: selected_user == Some(user.id),
        })
        .collect();

    let mut all_categories_class = "button is-success mr-6".to_string();
    if !filters.selected_category_ids.is_empty() {
        all_categories_class.push_str(" is-outlined");
    }

    let categories = view
        .categories
        .iter()
        .map(|category| {
            let mut class = "button mr-2 my-1".to_string();
            if filters.is_category_selected(category.id) {
                class.push_str(" is-info");
            }
            CategoryToggle {
                title: &category.title,
                class,
            }
        })
        .collect();

    let headers = SortColumn::ALL
        .iter()
        .map(|column| HeaderCell {
            label: column.label(),
            icon_class: view.state.sort.indicator(*column).icon_class(),
        })
        .collect();

    let rows = view
        .rows
        .iter()
        .map(|product| RowCells {
            id: product.id,
            name: &product.name,
            category: product.category.label(),
            user_name: product.user.as_ref().map(|u| u.name.as_str()).unwrap_or(""),
            user_class: user_class(product.user.as_ref()),
        })
        .collect();

    PageModel {
        config: view.config,
        cy: HOOKS,
        all_users_active: selected_user.is_none(),
        users,
        query: &filters.query,
        show_clear: !filters.query.is_empty(),
        all_categories_class,
        categories,
        has_rows: !view.rows.is_empty(),
        headers,
        rows,
    }
}
