//! Pure list-state helpers behind the data table: predicate filtering,
//! stable sorting, page slicing and identity-keyed selection.
//!
//! Everything here is synchronous and side-effect free; the component layer
//! wires these into memos so each stage recomputes only when its own inputs
//! change.

use super::columns::ColumnDescriptor;
use std::collections::{HashMap, HashSet};

/// Current sort column and direction. `key == None` preserves input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<&'static str>,
    pub ascending: bool,
}

impl SortState {
    pub fn none() -> Self {
        Self {
            key: None,
            ascending: true,
        }
    }

    /// Clicking the active column flips direction; a new column starts
    /// ascending.
    pub fn toggle(&mut self, key: &'static str) {
        if self.key == Some(key) {
            self.ascending = !self.ascending;
        } else {
            self.key = Some(key);
            self.ascending = true;
        }
    }
}

/// Keep records matching the global search (any column, case-insensitive
/// substring) AND every non-empty per-column filter. Empty search and empty
/// filters pass the input through unchanged.
pub fn apply_filters<T: Clone>(
    rows: &[T],
    columns: &[ColumnDescriptor<T>],
    search: &str,
    filters: &HashMap<String, String>,
) -> Vec<T> {
    let search = search.trim().to_lowercase();
    let active: Vec<(&ColumnDescriptor<T>, String)> = columns
        .iter()
        .filter_map(|col| {
            let needle = filters.get(col.key)?.trim().to_lowercase();
            (!needle.is_empty()).then_some((col, needle))
        })
        .collect();

    if search.is_empty() && active.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|row| {
            let search_ok =
                search.is_empty() || columns.iter().any(|col| col.value(row).matches(&search));
            search_ok
                && active
                    .iter()
                    .all(|(col, needle)| col.value(row).matches(needle))
        })
        .cloned()
        .collect()
}

/// Stable sort by the selected column. Ties and unknown keys preserve the
/// input order.
pub fn sort_rows<T: Clone>(
    mut rows: Vec<T>,
    columns: &[ColumnDescriptor<T>],
    sort: SortState,
) -> Vec<T> {
    let Some(key) = sort.key else {
        return rows;
    };
    let Some(col) = columns.iter().find(|c| c.key == key) else {
        return rows;
    };

    // Vec::sort_by is stable, which is what keeps equal cells in input order.
    rows.sort_by(|a, b| {
        let ord = col.value(a).compare(&col.value(b));
        if sort.ascending {
            ord
        } else {
            ord.reverse()
        }
    });
    rows
}

/// Number of pages needed for `len` records. Zero records means zero pages.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// The window of records shown on 1-based `page`. Pages past the end yield
/// an empty slice instead of panicking.
pub fn page_slice<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Vec<T> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= rows.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(rows.len());
    rows[start..end].to_vec()
}

/// Select exactly the visible page's keys, or clear the selection.
pub fn toggle_all(selected: &mut HashSet<String>, page_keys: &[String], checked: bool) {
    selected.clear();
    if checked {
        selected.extend(page_keys.iter().cloned());
    }
}

/// Add or remove a single row key.
pub fn toggle_one(selected: &mut HashSet<String>, key: &str, checked: bool) {
    if checked {
        selected.insert(key.to_string());
    } else {
        selected.remove(key);
    }
}

/// Drop selected keys that no longer exist in the data set (after a delete
/// or an external refresh).
pub fn retain_existing(selected: &mut HashSet<String>, existing: &HashSet<String>) {
    selected.retain(|key| existing.contains(key));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::columns::CellValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        price: f64,
    }

    fn columns() -> Vec<ColumnDescriptor<Row>> {
        vec![
            ColumnDescriptor::new("name", "Name", |r: &Row| {
                CellValue::Text(r.name.to_string())
            }),
            ColumnDescriptor::new("price", "Price", |r: &Row| CellValue::Number(r.price)),
        ]
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Tennis Court A", price: 50.0 },
            Row { name: "Basketball Hall", price: 75.0 },
            Row { name: "Tennis Court B", price: 50.0 },
            Row { name: "Squash Box", price: 30.0 },
        ]
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let cols = columns();
        let data = rows();
        let out = apply_filters(&data, &cols, "", &HashMap::new());
        assert_eq!(out, data);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let cols = columns();
        let data = rows();
        let once = apply_filters(&data, &cols, "tennis", &HashMap::new());
        let twice = apply_filters(&once, &cols, "tennis", &HashMap::new());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_search_is_case_insensitive_across_columns() {
        let cols = columns();
        let data = rows();
        let out = apply_filters(&data, &cols, "tennis", &HashMap::new());
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|r| r.name.starts_with("Tennis")));
    }

    #[test]
    fn test_column_filters_compose_with_and() {
        let cols = columns();
        let data = rows();
        let mut filters = HashMap::new();
        filters.insert("name".to_string(), "tennis".to_string());
        filters.insert("price".to_string(), "50".to_string());
        let out = apply_filters(&data, &cols, "", &filters);
        assert_eq!(out.len(), 2);

        filters.insert("price".to_string(), "75".to_string());
        let out = apply_filters(&data, &cols, "", &filters);
        assert!(out.is_empty());
    }

    #[test]
    fn test_sort_numeric_and_direction() {
        let cols = columns();
        let sorted = sort_rows(
            rows(),
            &cols,
            SortState { key: Some("price"), ascending: true },
        );
        let prices: Vec<f64> = sorted.iter().map(|r| r.price).collect();
        assert_eq!(prices, vec![30.0, 50.0, 50.0, 75.0]);

        let sorted = sort_rows(
            rows(),
            &cols,
            SortState { key: Some("price"), ascending: false },
        );
        assert_eq!(sorted[0].price, 75.0);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let cols = columns();
        let sorted = sort_rows(
            rows(),
            &cols,
            SortState { key: Some("price"), ascending: true },
        );
        // Both 50.0 rows keep their original relative order.
        let names: Vec<&str> = sorted
            .iter()
            .filter(|r| r.price == 50.0)
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Tennis Court A", "Tennis Court B"]);
    }

    #[test]
    fn test_none_key_preserves_order() {
        let cols = columns();
        let data = rows();
        assert_eq!(sort_rows(data.clone(), &cols, SortState::none()), data);
    }

    #[test]
    fn test_toggle_sort_state() {
        let mut sort = SortState::none();
        sort.toggle("price");
        assert_eq!(sort, SortState { key: Some("price"), ascending: true });
        sort.toggle("price");
        assert!(!sort.ascending);
        sort.toggle("name");
        assert_eq!(sort, SortState { key: Some("name"), ascending: true });
    }

    #[test]
    fn test_page_count_is_ceiling() {
        assert_eq!(page_count(12, 10), 2);
        assert_eq!(page_count(20, 10), 2);
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
    }

    #[test]
    fn test_twelve_records_page_by_ten() {
        let data: Vec<i32> = (1..=12).collect();
        assert_eq!(page_slice(&data, 1, 10).len(), 10);
        assert_eq!(page_slice(&data, 2, 10), vec![11, 12]);
        // Past the last page: empty, not a panic.
        assert!(page_slice(&data, 3, 10).is_empty());
        assert!(page_slice(&data, 100, 10).is_empty());
    }

    #[test]
    fn test_toggle_all_scopes_to_page_keys() {
        let mut selected = HashSet::new();
        selected.insert("stale".to_string());
        let page_keys: Vec<String> = (0..10).map(|i| format!("row-{i}")).collect();

        toggle_all(&mut selected, &page_keys, true);
        assert_eq!(selected.len(), 10);
        assert!(!selected.contains("stale"));

        toggle_all(&mut selected, &page_keys, false);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_toggle_one_and_retain() {
        let mut selected = HashSet::new();
        toggle_one(&mut selected, "a", true);
        toggle_one(&mut selected, "b", true);
        toggle_one(&mut selected, "a", false);
        assert_eq!(selected.len(), 1);

        let existing: HashSet<String> = HashSet::new();
        retain_existing(&mut selected, &existing);
        assert!(selected.is_empty());
    }
}
