use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Right panel wrapper; visibility is driven by the global context (the
/// bell button in the top header toggles it).
#[component]
pub fn Right(children: Children) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let is_open = move || ctx.right_open.get();

    view! {
        <div
            data-zone="right"
            class="right-panel"
            class:right-panel--hidden=move || !is_open()
        >
            {children()}
        </div>
    }
}
