//! Application shell: the Shell layout wired to the tab system, with the
//! notification panel on the right and the global overlays (toasts, command
//! palette) mounted once.

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::{TabPage, TabsBar};
use crate::layout::Shell;
use crate::shared::command_palette::CommandPalette;
use crate::shared::notifications::{NotificationPanel, ToastHost};
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Restore the active tab from the URL (or open the dashboard) and keep
    // the URL in sync from here on.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <TabsBar />
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! {
                                <TabPage tab=tab tabs_store=tabs_store />
                            }
                        }
                    />
                }.into_any()
            }
            right=|| view! { <NotificationPanel /> }.into_any()
        />
        <ToastHost />
        <CommandPalette />
    }
}
