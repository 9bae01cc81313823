//! Application state and dispatch

use catalog_core::{CatalogError, Category, EnrichedProduct, Fixture, TableState, User};

use crate::action::Action;
use crate::config::TableConfig;
use crate::error::AppError;
use crate::render::{PageRenderer, PageView};

/// The product table: immutable catalog plus the mutable table state.
pub struct App {
    /// Joined products, in fixture order
    products: Vec<EnrichedProduct>,
    /// Users, for the filter tabs
    users: Vec<User>,
    /// Categories, for the toggle buttons
    categories: Vec<Category>,
    /// Current filters and sort
    pub state: TableState,
    config: TableConfig,
    renderer: PageRenderer,
}

impl App {
    /// Join the fixture and set up an unfiltered, unsorted table.
    ///
    /// Fails when a product references a missing category.
    pub fn new(fixture: Fixture, config: TableConfig) -> Result<Self, AppError> {
        let products = fixture.join().map_err(CatalogError::from)?;
        let renderer = PageRenderer::new()?;

        tracing::info!(
            "Catalog ready: {} products, {} categories, {} users",
            products.len(),
            fixture.categories.len(),
            fixture.users.len()
        );

        Ok(Self {
            products,
            users: fixture.users,
            categories: fixture.categories,
            state: TableState::new(),
            config,
            renderer,
        })
    }

    /// Apply one user interaction.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!("Dispatch {:?}", action);
        match action {
            Action::SetQuery(text) => self.state.set_query(&text),
            Action::ClearQuery => self.state.clear_query(),
            Action::SelectUser(user_id) => self.state.set_selected_user(user_id),
            Action::ToggleCategory(id) => self.state.toggle_category(id),
            Action::ClearCategories => self.state.clear_categories(),
            Action::ResetAll => self.state.reset_all(),
            Action::Sort(column) => self.state.activate_sort(column),
        }
    }

    /// Parse and apply a command line.
    pub fn run_command(&mut self, line: &str) -> Result<(), AppError> {
        let action = Action::parse(line)?;
        self.dispatch(action);
        Ok(())
    }

    /// Rows visible under the current state.
    pub fn visible(&self) -> Vec<&EnrichedProduct> {
        self.state.view(&self.products)
    }

    /// Render the whole page.
    pub fn render(&self) -> Result<String, AppError> {
        let rows = self.visible();
        let html = self.renderer.render(&PageView {
            config: &self.config,
            users: &self.users,
            categories: &self.categories,
            state: &self.state,
            rows: &rows,
        })?;
        Ok(html)
    }

    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}
