//! TopHeader component - application top navigation bar.
//!
//! Contains the brand, sidebar/panel toggles, the command-palette trigger,
//! the notification bell with its unread badge and the theme selector.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::command_palette::use_command_palette;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::theme::ThemeSelect;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let palette = use_command_palette();
    let notifications = use_notifications();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let toggle_right_panel = move |_| {
        ctx.toggle_right();
    };

    let is_sidebar_visible = move || ctx.left_open.get();
    let is_right_panel_visible = move || ctx.right_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__logo">{icon("racket")}</span>
                <span class="top-header__title">"Courtside"</span>
            </div>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("panel-left")}
                </button>

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| palette.show()
                    title="Command palette (Ctrl+K)"
                >
                    {icon("command")}
                </button>

                // Bell opens the notification panel on the right.
                <button
                    class="top-header__icon-btn top-header__bell"
                    on:click=toggle_right_panel
                    title=move || if is_right_panel_visible() { "Hide notifications" } else { "Show notifications" }
                >
                    {icon("bell")}
                    {move || {
                        let unread = notifications.unread_count();
                        (unread > 0).then(|| view! {
                            <span class="top-header__badge">{unread.to_string()}</span>
                        })
                    }}
                </button>

                <ThemeSelect />
            </div>
        </div>
    }
}
