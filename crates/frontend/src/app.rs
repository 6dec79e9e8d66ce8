use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::command_palette::CommandPaletteState;
use crate::shared::notifications::NotificationService;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Root-provided contexts: global UI state, notifications and the
    // command palette. The theme gets its own provider component.
    provide_context(AppGlobalContext::new());
    provide_context(NotificationService::new());
    provide_context(CommandPaletteState::new());

    view! {
        <ThemeProvider>
            <AppShell />
        </ThemeProvider>
    }
}
