use leptos::prelude::*;

/// Row checkbox cell.
///
/// Renders a `<td>` so the click does not bubble into the row's own click
/// handler.
#[component]
pub fn TableCheckbox(
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </td>
    }
}

/// Header checkbox toggling the whole visible page.
#[component]
pub fn TableHeaderCheckbox(
    /// Whether every row on the current page is selected.
    #[prop(into)]
    all_selected: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <th class="table__header-cell table__header-cell--checkbox">
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=all_selected
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </th>
    }
}
