//! Table state: the filter and sort records plus their transitions.

use serde::{Deserialize, Serialize};

use crate::filter::FilterState;
use crate::model::{CategoryId, EnrichedProduct, UserId};
use crate::sort::{SortColumn, SortState};
use crate::view::derive_view;

/// All mutable UI state of the product table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableState {
    pub filters: FilterState,
    pub sort: SortState,
}

impl TableState {
    /// Create the initial state (no filters, unsorted).
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search text.
    pub fn set_query(&mut self, text: &str) {
        self.filters.query = text.to_string();
        tracing::debug!("Query set to {:?}", self.filters.query);
    }

    /// Clear the search text.
    pub fn clear_query(&mut self) {
        self.filters.query.clear();
        tracing::debug!("Query cleared");
    }

    /// Select a user tab; `None` selects "All".
    pub fn set_selected_user(&mut self, user_id: Option<UserId>) {
        self.filters.selected_user_id = user_id;
        tracing::debug!("Selected user {:?}", user_id);
    }

    /// Add the category if absent, remove it if present.
    pub fn toggle_category(&mut self, id: CategoryId) {
        let ids = &mut self.filters.selected_category_ids;
        if !ids.remove(&id) {
            ids.insert(id);
        }
        tracing::debug!("Selected categories {:?}", self.filters.selected_category_ids);
    }

    /// Deselect every category.
    pub fn clear_categories(&mut self) {
        self.filters.selected_category_ids.clear();
        tracing::debug!("Categories cleared");
    }

    /// Clear query, user and categories at once. Sorting is left alone.
    pub fn reset_all(&mut self) {
        self.filters = FilterState::default();
        tracing::debug!("Filters reset");
    }

    /// Click a column header.
    pub fn activate_sort(&mut self, column: SortColumn) {
        self.sort.activate(column);
        tracing::debug!("Sort is now {:?} (reversed: {})", self.sort.column, self.sort.reversed);
    }

    /// The rows visible under this state.
    pub fn view<'a>(&self, all: &'a [EnrichedProduct]) -> Vec<&'a EnrichedProduct> {
        derive_view(all, &self.filters, &self.sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_category_adds_then_removes() {
        let mut state = TableState::new();
        state.toggle_category(3);
        assert!(state.filters.is_category_selected(3));
        state.toggle_category(3);
        assert!(!state.filters.is_category_selected(3));
    }

    #[test]
    fn reset_all_keeps_sort() {
        let mut state = TableState::new();
        state.set_query("milk");
        state.set_selected_user(Some(1));
        state.toggle_category(2);
        state.activate_sort(SortColumn::Id);

        state.reset_all();

        assert_eq!(state.filters, FilterState::default());
        assert_eq!(state.sort.column, Some(SortColumn::Id));
    }

    #[test]
    fn clear_query_keeps_other_filters() {
        let mut state = TableState::new();
        state.set_query("milk");
        state.set_selected_user(Some(1));
        state.clear_query();
        assert!(state.filters.query.is_empty());
        assert_eq!(state.filters.selected_user_id, Some(1));
    }

    #[test]
    fn clear_categories_empties_selection() {
        let mut state = TableState::new();
        state.toggle_category(1);
        state.toggle_category(2);
        state.clear_categories();
        assert!(state.filters.selected_category_ids.is_empty());
    }
}
