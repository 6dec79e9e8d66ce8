use leptos::prelude::*;

/// Modal overlay driven by a host-owned signal. Clicking the backdrop or
/// pressing the host's cancel path closes it; clicks inside the surface do
/// not bubble out.
#[component]
pub fn Modal(
    #[prop(into)] when: Signal<bool>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || when.get()>
            <div
                class="modal-overlay"
                on:click=move |_| on_close.run(())
            >
                <div
                    class="modal-content"
                    on:click=|e| e.stop_propagation()
                >
                    {children()}
                </div>
            </div>
        </Show>
    }
}
