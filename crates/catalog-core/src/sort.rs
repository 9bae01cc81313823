//! Sort columns, the three-click sort cycle, and row comparison.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::collation::locale_compare;
use crate::model::EnrichedProduct;

/// A sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum SortColumn {
    Id,
    Product,
    Category,
    User,
}

impl SortColumn {
    /// All columns, in table order.
    pub const ALL: [SortColumn; 4] = [Self::Id, Self::Product, Self::Category, Self::User];

    /// Header label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Product => "Product",
            Self::Category => "Category",
            Self::User => "User",
        }
    }

    /// Parse a column name (case insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "id" => Some(Self::Id),
            "product" | "name" => Some(Self::Product),
            "category" => Some(Self::Category),
            "user" => Some(Self::User),
            _ => None,
        }
    }

    /// Ascending comparison of two rows on this column.
    ///
    /// `User` treats a pair where either side has no user as equal, so a
    /// stable sort keeps such rows where they were.
    pub fn compare(&self, a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Product => locale_compare(&a.name, &b.name),
            Self::Category => locale_compare(&a.category.title, &b.category.title),
            Self::User => match (&a.user, &b.user) {
                (Some(a), Some(b)) => locale_compare(&a.name, &b.name),
                _ => Ordering::Equal,
            },
        }
    }
}

/// What the sort icon of a column shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortIndicator {
    Neutral,
    Ascending,
    Descending,
}

impl SortIndicator {
    /// Font Awesome class for the icon.
    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Neutral => "fa-sort",
            Self::Ascending => "fa-sort-up",
            Self::Descending => "fa-sort-down",
        }
    }
}

/// Active sort column and direction.
///
/// `column == None` means rows keep their filtered order; `reversed` is only
/// ever set together with a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub reversed: bool,
}

impl SortState {
    /// Apply one click on a column header.
    ///
    /// A different column starts ascending, the same column flips to
    /// reversed, and a third click clears the sort.
    pub fn activate(&mut self, column: SortColumn) {
        *self = match (self.column, self.reversed) {
            (Some(current), false) if current == column => SortState {
                column: Some(column),
                reversed: true,
            },
            (Some(current), true) if current == column => SortState::default(),
            _ => SortState {
                column: Some(column),
                reversed: false,
            },
        };
    }

    /// Indicator for one column header.
    pub fn indicator(&self, column: SortColumn) -> SortIndicator {
        match self.column {
            Some(active) if active == column && self.reversed => SortIndicator::Descending,
            Some(active) if active == column => SortIndicator::Ascending,
            _ => SortIndicator::Neutral,
        }
    }

    /// Sort rows in place: stable ascending sort, then a whole-sequence
    /// reversal when `reversed`.
    ///
    /// The reversal also flips the relative order of equal rows, so it is
    /// not the same as sorting with a descending comparator.
    pub fn apply(&self, rows: &mut [&EnrichedProduct]) {
        if let Some(column) = self.column {
            rows.sort_by(|a, b| column.compare(a, b));
        }
        if self.reversed {
            rows.reverse();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Sex, User};
    use rstest::rstest;

    fn row(id: u32, name: &str, user: Option<&str>) -> EnrichedProduct {
        EnrichedProduct {
            id,
            name: name.to_string(),
            category_id: 1,
            category: Category {
                id: 1,
                title: "Grocery".to_string(),
                icon: "🍞".to_string(),
                owner_id: 1,
            },
            user: user.map(|name| User {
                id,
                name: name.to_string(),
                sex: Sex::Female,
            }),
        }
    }

    #[test]
    fn three_clicks_cycle_back_to_unsorted() {
        let mut state = SortState::default();

        state.activate(SortColumn::Product);
        assert_eq!(state, SortState { column: Some(SortColumn::Product), reversed: false });

        state.activate(SortColumn::Product);
        assert_eq!(state, SortState { column: Some(SortColumn::Product), reversed: true });

        state.activate(SortColumn::Product);
        assert_eq!(state, SortState::default());
    }

    #[rstest]
    #[case(SortState::default())]
    #[case(SortState { column: Some(SortColumn::Product), reversed: false })]
    #[case(SortState { column: Some(SortColumn::Product), reversed: true })]
    #[case(SortState { column: Some(SortColumn::Id), reversed: true })]
    fn other_column_always_starts_ascending(#[case] mut state: SortState) {
        state.activate(SortColumn::User);
        assert_eq!(state, SortState { column: Some(SortColumn::User), reversed: false });
    }

    #[test]
    fn indicator_only_on_active_column() {
        let state = SortState { column: Some(SortColumn::Category), reversed: true };
        assert_eq!(state.indicator(SortColumn::Category), SortIndicator::Descending);
        assert_eq!(state.indicator(SortColumn::Id), SortIndicator::Neutral);
        assert_eq!(SortIndicator::Descending.icon_class(), "fa-sort-down");

        let state = SortState { column: Some(SortColumn::Category), reversed: false };
        assert_eq!(state.indicator(SortColumn::Category).icon_class(), "fa-sort-up");
        assert_eq!(SortState::default().indicator(SortColumn::Category).icon_class(), "fa-sort");
    }

    #[test]
    fn missing_user_compares_equal() {
        let with_user = row(1, "Milk", Some("Anna"));
        let without_user = row(2, "Bread", None);
        assert_eq!(SortColumn::User.compare(&with_user, &without_user), Ordering::Equal);
        assert_eq!(SortColumn::User.compare(&without_user, &with_user), Ordering::Equal);
    }

    #[test]
    fn reversal_flips_ties() {
        let a = row(1, "Same", None);
        let b = row(2, "Same", None);
        let mut rows = vec![&a, &b];

        SortState { column: Some(SortColumn::Product), reversed: false }.apply(&mut rows);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2]);

        SortState { column: Some(SortColumn::Product), reversed: true }.apply(&mut rows);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn column_names_parse() {
        assert_eq!(SortColumn::from_name("ID"), Some(SortColumn::Id));
        assert_eq!(SortColumn::from_name(" user "), Some(SortColumn::User));
        assert_eq!(SortColumn::from_name("price"), None);
        assert!(SortColumn::ALL.iter().all(|c| SortColumn::from_name(c.label()) == Some(*c)));
    }
}
