//! Filter state and the predicates derived from it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{CategoryId, EnrichedProduct, UserId};

/// The user-controlled filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Raw search text, exactly as typed.
    pub query: String,
    pub selected_user_id: Option<UserId>,
    pub selected_category_ids: BTreeSet<CategoryId>,
}

/// One active filter criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCriterion {
    /// Product name contains this (already trimmed, lower-cased) text
    NameContains(String),
    /// Category owner is this user
    OwnedBy(UserId),
    /// Product is in one of these categories
    InCategories(BTreeSet<CategoryId>),
}

/// Trim and lower-case a search query.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

impl FilterCriterion {
    /// Test whether a product passes this criterion.
    pub fn matches(&self, product: &EnrichedProduct) -> bool {
        match self {
            FilterCriterion::NameContains(needle) => product.name.to_lowercase().contains(needle.as_str()),
            FilterCriterion::OwnedBy(user_id) => product.user_id() == Some(*user_id),
            FilterCriterion::InCategories(ids) => ids.contains(&product.category_id),
        }
    }
}

impl FilterState {
    /// The criteria currently constraining the view, in pipeline order.
    pub fn criteria(&self) -> Vec<FilterCriterion> {
        let mut criteria = Vec::new();

        let needle = normalize_query(&self.query);
        if !needle.is_empty() {
            criteria.push(FilterCriterion::NameContains(needle));
        }
        if let Some(user_id) = self.selected_user_id {
            criteria.push(FilterCriterion::OwnedBy(user_id));
        }
        if !self.selected_category_ids.is_empty() {
            criteria.push(FilterCriterion::InCategories(self.selected_category_ids.clone()));
        }

        criteria
    }

    /// Test a product against every active criterion.
    pub fn matches(&self, product: &EnrichedProduct) -> bool {
        self.criteria().iter().all(|c| c.matches(product))
    }

    /// Whether a category toggle is currently on.
    pub fn is_category_selected(&self, id: CategoryId) -> bool {
        self.selected_category_ids.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Sex, User};

    fn product(id: u32, name: &str, category_id: u32, owner: Option<u32>) -> EnrichedProduct {
        EnrichedProduct {
            id,
            name: name.to_string(),
            category_id,
            category: Category {
                id: category_id,
                title: format!("Category {category_id}"),
                icon: "*".to_string(),
                owner_id: owner.unwrap_or(0),
            },
            user: owner.map(|id| User {
                id,
                name: format!("User {id}"),
                sex: Sex::Male,
            }),
        }
    }

    #[test]
    fn default_state_has_no_criteria() {
        let state = FilterState::default();
        assert!(state.criteria().is_empty());
        assert!(state.matches(&product(1, "Milk", 1, Some(1))));
    }

    #[test]
    fn whitespace_query_is_inactive() {
        let state = FilterState {
            query: "   ".to_string(),
            ..Default::default()
        };
        assert!(state.criteria().is_empty());
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let state = FilterState {
            query: "  MI ".to_string(),
            ..Default::default()
        };
        assert_eq!(state.criteria(), vec![FilterCriterion::NameContains("mi".to_string())]);
        assert!(state.matches(&product(1, "Milk", 1, Some(1))));
        assert!(!state.matches(&product(2, "Bread", 1, Some(1))));
    }

    #[test]
    fn user_filter_never_matches_missing_user() {
        let criterion = FilterCriterion::OwnedBy(1);
        assert!(criterion.matches(&product(1, "Milk", 1, Some(1))));
        assert!(!criterion.matches(&product(2, "Bread", 1, Some(2))));
        assert!(!criterion.matches(&product(3, "Ghost", 1, None)));
    }

    #[test]
    fn category_filter_uses_membership() {
        let state = FilterState {
            selected_category_ids: [2].into_iter().collect(),
            ..Default::default()
        };
        assert!(state.is_category_selected(2));
        assert!(!state.matches(&product(1, "Milk", 1, Some(1))));
        assert!(state.matches(&product(2, "Bread", 2, Some(1))));
    }

    #[test]
    fn criteria_are_conjunctive() {
        let state = FilterState {
            query: "e".to_string(),
            selected_user_id: Some(1),
            selected_category_ids: [1, 2].into_iter().collect(),
        };
        assert_eq!(state.criteria().len(), 3);
        assert!(state.matches(&product(1, "Beer", 2, Some(1))));
        assert!(!state.matches(&product(2, "Beer", 3, Some(1))));
        assert!(!state.matches(&product(3, "Beer", 2, Some(2))));
        assert!(!state.matches(&product(4, "Milk", 2, Some(1))));
    }
}
