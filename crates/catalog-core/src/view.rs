//! The derived view: filter → sort → reverse.

use crate::filter::FilterState;
use crate::model::EnrichedProduct;
use crate::sort::SortState;

/// Derive the visible rows from the full product list.
///
/// Pure: `all` is never modified and a fresh sequence is returned on every
/// call. Filters run in [`FilterState::criteria`] order, then
/// [`SortState::apply`] sorts and optionally reverses.
pub fn derive_view<'a>(
    all: &'a [EnrichedProduct],
    filters: &FilterState,
    sort: &SortState,
) -> Vec<&'a EnrichedProduct> {
    let mut rows: Vec<&EnrichedProduct> = all.iter().collect();

    for criterion in filters.criteria() {
        rows.retain(|product| criterion.matches(product));
    }

    sort.apply(&mut rows);

    tracing::debug!(
        "Derived {} of {} rows (sort {:?}, reversed {})",
        rows.len(),
        all.len(),
        sort.column,
        sort.reversed
    );
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::Fixture;
    use crate::sort::SortColumn;

    fn catalog() -> Vec<EnrichedProduct> {
        Fixture::builtin().unwrap().join().unwrap()
    }

    fn ids(rows: &[&EnrichedProduct]) -> Vec<u32> {
        rows.iter().map(|p| p.id).collect()
    }

    #[test]
    fn default_state_is_identity() {
        let all = catalog();
        let rows = derive_view(&all, &FilterState::default(), &SortState::default());
        assert_eq!(ids(&rows), (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn sorts_by_product_name() {
        let all = catalog();
        let sort = SortState { column: Some(SortColumn::Product), reversed: false };
        let names: Vec<&str> = derive_view(&all, &FilterState::default(), &sort)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Apple", "Beer", "Bread", "Eggs", "Ice cream", "Jacket", "Laptop", "Milk", "Sugar"]
        );
    }

    #[test]
    fn sorts_by_category_is_stable() {
        let all = catalog();
        let sort = SortState { column: Some(SortColumn::Category), reversed: false };
        let rows = derive_view(&all, &FilterState::default(), &sort);
        // Clothes, Drinks (1, 6), Electronics, Fruits, Grocery (2, 3, 5, 7)
        assert_eq!(ids(&rows), vec![4, 1, 6, 9, 8, 2, 3, 5, 7]);
    }

    #[test]
    fn reversed_category_sort_flips_ties() {
        let all = catalog();
        let sort = SortState { column: Some(SortColumn::Category), reversed: true };
        let rows = derive_view(&all, &FilterState::default(), &sort);
        assert_eq!(ids(&rows), vec![7, 5, 3, 2, 8, 9, 6, 1, 4]);
    }

    #[test]
    fn filters_then_sorts() {
        let all = catalog();
        let filters = FilterState {
            selected_user_id: Some(2),
            ..Default::default()
        };
        let sort = SortState { column: Some(SortColumn::Id), reversed: true };
        // Anna owns Grocery and Fruits
        assert_eq!(ids(&derive_view(&all, &filters, &sort)), vec![8, 7, 5, 3, 2]);
    }

    #[test]
    fn no_match_is_empty() {
        let all = catalog();
        let filters = FilterState {
            query: "zzz".to_string(),
            ..Default::default()
        };
        assert!(derive_view(&all, &filters, &SortState::default()).is_empty());
    }
}
