//! Sortable table header cell.

use super::column_resize::{clear_resize_flag, was_just_resizing};
use super::state::SortState;
use leptos::prelude::*;

/// Sort indicator for a header: active column shows direction, inactive
/// columns show the neutral glyph.
pub fn sort_indicator(sort: SortState, key: &'static str, sortable: bool) -> &'static str {
    if !sortable {
        return "";
    }
    if sort.key == Some(key) {
        if sort.ascending {
            " \u{25b2}"
        } else {
            " \u{25bc}"
        }
    } else {
        " \u{21c5}"
    }
}

/// Header cell that toggles sorting on click.
///
/// Clicks landing right after a column resize are swallowed so releasing a
/// drag handle does not also re-sort the table.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    sort_key: &'static str,
    #[prop(into)] sort: Signal<SortState>,
    on_sort: Callback<&'static str>,
    #[prop(optional)] align_right: bool,
) -> impl IntoView {
    let handle_click = move |_| {
        if was_just_resizing() {
            clear_resize_flag();
            return;
        }
        on_sort.run(sort_key);
    };

    let class = if align_right {
        "table__header-cell table__header-cell--sortable table__header-cell--right resizable"
    } else {
        "table__header-cell table__header-cell--sortable resizable"
    };

    view! {
        <th class=class data-col-key=sort_key on:click=handle_click>
            <span class="table__sortable-label">
                {label}
                <span class="table__sort-indicator">
                    {move || sort_indicator(sort.get(), sort_key, true)}
                </span>
            </span>
        </th>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_follows_state() {
        let mut sort = SortState::none();
        assert_eq!(sort_indicator(sort, "name", true), " \u{21c5}");
        sort.toggle("name");
        assert_eq!(sort_indicator(sort, "name", true), " \u{25b2}");
        sort.toggle("name");
        assert_eq!(sort_indicator(sort, "name", true), " \u{25bc}");
        assert_eq!(sort_indicator(sort, "price", true), " \u{21c5}");
        assert_eq!(sort_indicator(sort, "name", false), "");
    }
}
