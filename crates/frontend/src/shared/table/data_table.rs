//! Generic client-side data table: search, per-column filters, stable
//! sorting, pagination, identity-keyed selection, row actions and CSV
//! export.
//!
//! The derivation pipeline is filtered -> sorted -> paged, one memo per
//! stage, so typing in the search box never re-sorts an unchanged result
//! set and paging never re-filters.
//!
//! The host page owns the data; rows reach the table through a signal and
//! mutations travel back through the optional `on_edit` / `on_delete` /
//! `on_view` / `on_row_click` callbacks. A callback that is not supplied
//! simply has no button.

use super::column_resize::init_column_resize;
use super::columns::{CellAlign, ColumnDescriptor};
use super::pagination_controls::PaginationControls;
use super::sortable_header_cell::SortableHeaderCell;
use super::state::{self, SortState};
use super::table_checkbox::{TableCheckbox, TableHeaderCheckbox};
use crate::shared::components::search_input::SearchInput;
use crate::shared::export::{build_csv, download_csv};
use crate::shared::icons::icon;
use crate::shared::notifications::NotificationService;
use contracts::domain::notification::NotificationKind;
use leptos::prelude::*;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Stable unique key per record. Selection survives filtering, sorting and
/// paging because it stores these keys, never positional indices.
pub type RowKeyFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

#[component]
pub fn DataTable<T>(
    /// Records to display.
    #[prop(into)]
    rows: Signal<Vec<T>>,
    /// Columns in display order.
    columns: Vec<ColumnDescriptor<T>>,
    row_key: RowKeyFn<T>,
    /// DOM id; also scopes the persisted column widths.
    #[prop(into)]
    table_id: String,
    #[prop(optional, default = true)] searchable: bool,
    #[prop(optional)] filterable: bool,
    #[prop(optional, default = true)] sortable: bool,
    #[prop(optional, default = true)] paginated: bool,
    #[prop(optional)] selectable: bool,
    #[prop(optional)] exportable: bool,
    #[prop(optional, default = 10)] page_size: usize,
    #[prop(optional, into)] export_filename: Option<String>,
    #[prop(optional, into)] on_row_click: Option<Callback<T>>,
    #[prop(optional, into)] on_edit: Option<Callback<T>>,
    #[prop(optional, into)] on_delete: Option<Callback<T>>,
    #[prop(optional, into)] on_view: Option<Callback<T>>,
    /// Share the selection set with the host page (for bulk actions).
    #[prop(optional, into)]
    selection: Option<RwSignal<HashSet<String>>>,
) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let has_actions = on_edit.is_some() || on_delete.is_some() || on_view.is_some();
    let col_span = columns.len() + selectable as usize + has_actions as usize;
    let export_filename = export_filename.unwrap_or_else(|| format!("{}.csv", table_id));

    let columns = StoredValue::new(columns);
    let key_fn = row_key;

    let (search, set_search) = signal(String::new());
    let filters = RwSignal::new(HashMap::<String, String>::new());
    let sort = RwSignal::new(SortState::none());
    let (page, set_page) = signal(1usize);
    let (current_page_size, set_page_size) = signal(page_size.max(1));
    let selected = selection.unwrap_or_else(|| RwSignal::new(HashSet::new()));

    // Derivation pipeline. Each stage only recomputes when its own inputs
    // change.
    let filtered = Memo::new(move |_| {
        let all = rows.get();
        let search = search.get();
        let filters = filters.get();
        columns.with_value(|cols| state::apply_filters(&all, cols, &search, &filters))
    });
    let sorted = Memo::new(move |_| {
        columns.with_value(|cols| state::sort_rows(filtered.get(), cols, sort.get()))
    });
    let total_count = Memo::new(move |_| filtered.with(|r| r.len()));
    let total_pages = Memo::new(move |_| {
        if paginated {
            state::page_count(total_count.get(), current_page_size.get())
        } else {
            1
        }
    });
    let paged = Memo::new(move |_| {
        if paginated {
            sorted.with(|rows| state::page_slice(rows, page.get(), current_page_size.get()))
        } else {
            sorted.get()
        }
    });
    let page_keys = {
        let key_fn = key_fn.clone();
        Memo::new(move |_| {
            paged.with(|rows| rows.iter().map(|r| key_fn(r)).collect::<Vec<String>>())
        })
    };
    let all_selected = Memo::new(move |_| {
        let keys = page_keys.get();
        !keys.is_empty() && selected.with(|s| keys.iter().all(|k| s.contains(k)))
    });

    // Selected keys whose records were removed must not linger.
    {
        let key_fn = key_fn.clone();
        Effect::new(move |_| {
            let existing: HashSet<String> =
                rows.with(|all| all.iter().map(|r| key_fn(r)).collect());
            selected.update(|s| state::retain_existing(s, &existing));
        });
    }

    {
        let table_id = table_id.clone();
        Effect::new(move |_| {
            init_column_resize(&table_id, &format!("{}_column_widths", table_id));
        });
    }

    // Every relevance change lands the user back on page 1.
    let on_search = Callback::new(move |value: String| {
        set_search.set(value);
        set_page.set(1);
    });
    let handle_sort = Callback::new(move |key: &'static str| {
        sort.update(|s| s.toggle(key));
    });
    let on_page_change = Callback::new(move |p: usize| set_page.set(p));
    let on_page_size_change = Callback::new(move |size: usize| {
        set_page_size.set(size.max(1));
        set_page.set(1);
    });
    let toggle_all = Callback::new(move |checked: bool| {
        let keys = page_keys.get_untracked();
        selected.update(|s| state::toggle_all(s, &keys, checked));
    });

    let notifications = use_context::<NotificationService>();
    let export = move |_| {
        // Export covers the filtered+sorted set, not just the visible page.
        let content = sorted.with_untracked(|rows| columns.with_value(|cols| build_csv(cols, rows)));
        match download_csv(&export_filename, &content) {
            Ok(()) => {
                if let Some(svc) = notifications {
                    svc.toast_only(
                        NotificationKind::Success,
                        "Export ready",
                        &format!("{} downloaded", export_filename),
                    );
                }
            }
            Err(e) => {
                log::error!("CSV export failed: {}", e);
                if let Some(svc) = notifications {
                    svc.toast_only(NotificationKind::Error, "Export failed", &e);
                }
            }
        }
    };

    let header_cells = move || {
        columns.with_value(|cols| {
            cols.iter()
                .map(|col| {
                    if sortable && col.sortable {
                        view! {
                            <SortableHeaderCell
                                label=col.label
                                sort_key=col.key
                                sort=sort
                                on_sort=handle_sort
                                align_right={col.align == CellAlign::Right}
                            />
                        }
                        .into_any()
                    } else {
                        let class = if col.align == CellAlign::Right {
                            "table__header-cell table__header-cell--right resizable"
                        } else {
                            "table__header-cell resizable"
                        };
                        view! {
                            <th class=class data-col-key=col.key>{col.label}</th>
                        }
                        .into_any()
                    }
                })
                .collect_view()
        })
    };

    let filter_row = move || {
        filterable.then(|| {
            view! {
                <tr class="table__filter-row">
                    {selectable.then(|| view! {
                        <th class="table__header-cell table__header-cell--checkbox"></th>
                    })}
                    {columns.with_value(|cols| {
                        cols.iter()
                            .map(|col| {
                                let key = col.key;
                                view! {
                                    <th class="table__header-cell table__header-cell--filter">
                                        <input
                                            type="text"
                                            class="table__filter-input"
                                            placeholder="Filter"
                                            prop:value=move || {
                                                filters.with(|f| f.get(key).cloned().unwrap_or_default())
                                            }
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                filters.update(|f| {
                                                    if value.trim().is_empty() {
                                                        f.remove(key);
                                                    } else {
                                                        f.insert(key.to_string(), value);
                                                    }
                                                });
                                                set_page.set(1);
                                            }
                                        />
                                    </th>
                                }
                            })
                            .collect_view()
                    })}
                    {has_actions.then(|| view! {
                        <th class="table__header-cell table__header-cell--actions"></th>
                    })}
                </tr>
            }
        })
    };

    let body_key_fn = key_fn.clone();
    let body = move || {
        let visible = paged.get();
        if visible.is_empty() {
            return view! {
                <tr class="table__row table__row--empty">
                    <td class="table__cell table__cell--empty" colspan=col_span.to_string()>
                        "No records to display"
                    </td>
                </tr>
            }
            .into_any();
        }

        let key_fn = body_key_fn.clone();
        visible
            .into_iter()
            .map(|row| {
                let key = key_fn(&row);

                let cells: Vec<AnyView> = columns.with_value(|cols| {
                    cols.iter()
                        .map(|col| {
                            let class = col.align.cell_class();
                            let content = match &col.render {
                                Some(render) => render(&row),
                                None => {
                                    view! { <span>{col.value(&row).display()}</span> }.into_any()
                                }
                            };
                            view! { <td class=class>{content}</td> }.into_any()
                        })
                        .collect()
                });

                let checkbox = selectable.then(|| {
                    let key_for_checked = key.clone();
                    let key_for_toggle = key.clone();
                    view! {
                        <TableCheckbox
                            checked=Signal::derive(move || {
                                selected.with(|s| s.contains(&key_for_checked))
                            })
                            on_change=Callback::new(move |checked| {
                                selected.update(|s| state::toggle_one(s, &key_for_toggle, checked));
                            })
                        />
                    }
                });

                let actions = has_actions.then(|| {
                    let row_view = row.clone();
                    let row_edit = row.clone();
                    let row_delete = row.clone();
                    view! {
                        <td class="table__cell table__cell--actions" on:click=|e| e.stop_propagation()>
                            {on_view.map(|cb| {
                                let row = row_view.clone();
                                view! {
                                    <button class="table__action-btn" title="View" on:click=move |_| cb.run(row.clone())>
                                        {icon("eye")}
                                    </button>
                                }
                            })}
                            {on_edit.map(|cb| {
                                let row = row_edit.clone();
                                view! {
                                    <button class="table__action-btn" title="Edit" on:click=move |_| cb.run(row.clone())>
                                        {icon("edit")}
                                    </button>
                                }
                            })}
                            {on_delete.map(|cb| {
                                let row = row_delete.clone();
                                view! {
                                    <button class="table__action-btn table__action-btn--danger" title="Delete" on:click=move |_| cb.run(row.clone())>
                                        {icon("trash")}
                                    </button>
                                }
                            })}
                        </td>
                    }
                });

                let key_for_row_class = key.clone();
                let row_for_click = row.clone();
                view! {
                    <tr
                        class="table__row"
                        class:table__row--selected=move || {
                            selected.with(|s| s.contains(&key_for_row_class))
                        }
                        class:table__row--clickable=on_row_click.is_some()
                        on:click=move |_| {
                            if let Some(cb) = on_row_click {
                                cb.run(row_for_click.clone());
                            }
                        }
                    >
                        {checkbox}
                        {cells}
                        {actions}
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="table">
            <div class="table__toolbar">
                {searchable.then(|| view! {
                    <SearchInput value=search on_change=on_search />
                })}
                <div class="table__toolbar-spacer"></div>
                {selectable.then(|| view! {
                    <span
                        class="table__selection-info"
                        class:hidden=move || selected.with(|s| s.is_empty())
                    >
                        {move || format!("{} selected", selected.with(|s| s.len()))}
                    </span>
                })}
                {exportable.then(|| view! {
                    <button class="button button--secondary" on:click=export title="Export the filtered list">
                        {icon("download")}
                        "Export CSV"
                    </button>
                })}
            </div>

            <table class="table__data table--striped" id=table_id.clone()>
                <thead class="table__head">
                    <tr>
                        {selectable.then(|| view! {
                            <TableHeaderCheckbox all_selected=all_selected on_change=toggle_all />
                        })}
                        {header_cells}
                        {has_actions.then(|| view! {
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        })}
                    </tr>
                    {filter_row}
                </thead>
                <tbody>
                    {body}
                </tbody>
            </table>

            {paginated.then(|| view! {
                <PaginationControls
                    current_page=page
                    total_pages=total_pages
                    total_count=total_count
                    page_size=current_page_size
                    on_page_change=on_page_change
                    on_page_size_change=on_page_size_change
                />
            })}
        </div>
    }
}
