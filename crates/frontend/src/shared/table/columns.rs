//! Column descriptors for the generic data table.
//!
//! A column knows how to pull a raw [`CellValue`] out of a record (used for
//! filtering, sorting and CSV export) and, optionally, how to render a richer
//! cell view (badges, money formatting). When no renderer is given the cell
//! shows the value's display string.

use leptos::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;

/// Raw field value handed to the comparator, the filter predicate and the
/// CSV encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Integer(i64),
    /// Missing optional field. Renders blank, never matches a filter.
    Empty,
}

impl CellValue {
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Integer(n) => n.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// Case-insensitive substring test. `needle_lower` must already be
    /// lowercased; `Empty` never matches a non-empty needle.
    pub fn matches(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        match self {
            CellValue::Empty => false,
            other => other.display().to_lowercase().contains(needle_lower),
        }
    }

    /// Total order used by the comparator: numbers compare numerically,
    /// text lexicographically, `Empty` sorts before everything else.
    /// Mixed text/number pairs fall back to their display strings.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::*;
        match (self, other) {
            (Empty, Empty) => Ordering::Equal,
            (Empty, _) => Ordering::Less,
            (_, Empty) => Ordering::Greater,
            (Number(a), Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Number(a), Integer(b)) => a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal),
            (Integer(a), Number(b)) => (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal),
            (Text(a), Text(b)) => a.cmp(b),
            (a, b) => a.display().cmp(&b.display()),
        }
    }
}

/// Horizontal alignment of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellAlign {
    #[default]
    Left,
    Right,
}

impl CellAlign {
    pub fn cell_class(&self) -> &'static str {
        match self {
            CellAlign::Left => "table__cell",
            CellAlign::Right => "table__cell table__cell--right",
        }
    }
}

pub type CellAccessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// Describes how one field of a record is labeled, extracted and displayed.
pub struct ColumnDescriptor<T> {
    /// Stable key; also the key of the per-column filter map.
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub align: CellAlign,
    pub accessor: CellAccessor<T>,
    /// Custom cell view. `None` renders the accessor's display string.
    pub render: Option<CellRenderer<T>>,
}

// Manual impl: `T` itself does not need to be `Clone`.
impl<T> Clone for ColumnDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            sortable: self.sortable,
            align: self.align,
            accessor: Arc::clone(&self.accessor),
            render: self.render.as_ref().map(Arc::clone),
        }
    }
}

impl<T> ColumnDescriptor<T> {
    pub fn new(
        key: &'static str,
        label: &'static str,
        accessor: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            label,
            sortable: true,
            align: CellAlign::Left,
            accessor: Arc::new(accessor),
            render: None,
        }
    }

    pub fn align_right(mut self) -> Self {
        self.align = CellAlign::Right;
        self
    }

    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn with_render(
        mut self,
        render: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn value(&self, record: &T) -> CellValue {
        (self.accessor)(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_trims_integral_numbers() {
        assert_eq!(CellValue::Number(50.0).display(), "50");
        assert_eq!(CellValue::Number(49.5).display(), "49.5");
        assert_eq!(CellValue::Integer(-3).display(), "-3");
        assert_eq!(CellValue::Empty.display(), "");
    }

    #[test]
    fn test_empty_never_matches() {
        assert!(!CellValue::Empty.matches("x"));
        assert!(CellValue::Empty.matches(""));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let cell = CellValue::Text("Tennis Court A".to_string());
        assert!(cell.matches("tennis"));
        assert!(!CellValue::Text("Basketball".to_string()).matches("tennis"));
    }

    #[test]
    fn test_numbers_compare_numerically() {
        // Lexicographic order would put "9" after "10".
        assert_eq!(
            CellValue::Number(9.0).compare(&CellValue::Number(10.0)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Integer(9).compare(&CellValue::Number(10.0)),
            Ordering::Less
        );
    }

    #[test]
    fn test_empty_sorts_first() {
        assert_eq!(
            CellValue::Empty.compare(&CellValue::Text("a".into())),
            Ordering::Less
        );
    }
}
