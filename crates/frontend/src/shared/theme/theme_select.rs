use super::{use_theme, Theme};
use crate::shared::icons::icon;
use leptos::prelude::*;
use web_sys::window;

/// Theme dropdown for the top header.
#[component]
pub fn ThemeSelect() -> impl IntoView {
    let ctx = use_theme();
    let (dropdown_open, set_dropdown_open) = signal(false);

    let select_theme = move |theme: Theme| {
        ctx.set_theme(theme);
        set_dropdown_open.set(false);
    };

    // Close the dropdown when clicking anywhere else.
    Effect::new(move |_| {
        if dropdown_open.get() {
            use wasm_bindgen::prelude::*;
            use wasm_bindgen::JsCast;

            let closure = Closure::wrap(Box::new(move |_event: web_sys::MouseEvent| {
                set_dropdown_open.set(false);
            }) as Box<dyn FnMut(_)>);

            if let Some(window) = window() {
                let _ = window
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    });

    view! {
        <div class="theme-select" style="position: relative;">
            <button
                class="top-header__icon-btn"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_dropdown_open.update(|open| *open = !*open);
                }
                title="Theme"
            >
                {icon("palette")}
            </button>

            <Show when=move || dropdown_open.get()>
                <div class="theme-select__dropdown" on:click=move |ev| ev.stop_propagation()>
                    {Theme::all().into_iter().map(|theme| {
                        let is_active = move || ctx.theme.get() == theme;
                        view! {
                            <button
                                class=move || {
                                    if is_active() {
                                        "theme-select__item theme-select__item--active"
                                    } else {
                                        "theme-select__item"
                                    }
                                }
                                on:click=move |_| select_theme(theme)
                            >
                                {theme.display_name()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
