//! Command palette: Ctrl+K overlay with fuzzy-matched navigation and
//! appearance commands.

pub mod fuzzy;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::use_theme;
use fuzzy::fuzzy_match;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteCommand {
    pub id: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
    pub icon: &'static str,
}

const COMMANDS: &[PaletteCommand] = &[
    PaletteCommand { id: "nav:dashboard", label: "Go to Dashboard", hint: "Navigate", icon: "layout-dashboard" },
    PaletteCommand { id: "nav:courts", label: "Go to Courts", hint: "Navigate", icon: "racket" },
    PaletteCommand { id: "nav:bookings", label: "Go to Bookings", hint: "Navigate", icon: "calendar" },
    PaletteCommand { id: "theme:cycle", label: "Cycle theme", hint: "Appearance", icon: "palette" },
    PaletteCommand { id: "panel:left", label: "Toggle sidebar", hint: "Layout", icon: "panel-left" },
    PaletteCommand { id: "panel:right", label: "Toggle notification panel", hint: "Layout", icon: "panel-right" },
];

/// Context handle controlling palette visibility (the top header button and
/// the global shortcut both go through this).
#[derive(Clone, Copy)]
pub struct CommandPaletteState {
    pub open: RwSignal<bool>,
}

impl CommandPaletteState {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
        }
    }

    pub fn show(&self) {
        self.open.set(true);
    }

    pub fn hide(&self) {
        self.open.set(false);
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }
}

impl Default for CommandPaletteState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_command_palette() -> CommandPaletteState {
    use_context::<CommandPaletteState>().expect("CommandPaletteState not found in context")
}

/// The palette overlay. Mounted once at the app root; listens for Ctrl+K /
/// Cmd+K globally.
#[component]
pub fn CommandPalette() -> impl IntoView {
    let state = use_command_palette();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let theme = use_theme();

    let (query, set_query) = signal(String::new());
    let (active, set_active) = signal(0usize);

    // Matching commands, best score first. Stable sort keeps the declared
    // order between equal scores.
    let results = Memo::new(move |_| {
        let query = query.get();
        let mut scored: Vec<(i32, PaletteCommand)> = COMMANDS
            .iter()
            .filter_map(|cmd| fuzzy_match(&query, cmd.label).map(|score| (score, *cmd)))
            .collect();
        scored.sort_by_key(|(score, _)| -score);
        scored.into_iter().map(|(_, cmd)| cmd).collect::<Vec<_>>()
    });

    let close = move || {
        state.hide();
        set_query.set(String::new());
        set_active.set(0);
    };

    let run_command = move |cmd: PaletteCommand| {
        match cmd.id {
            "nav:dashboard" => ctx.open_tab("dashboard", "Dashboard"),
            "nav:courts" => ctx.open_tab("courts", "Courts"),
            "nav:bookings" => ctx.open_tab("bookings", "Bookings"),
            "theme:cycle" => theme.cycle_theme(),
            "panel:left" => ctx.toggle_left(),
            "panel:right" => ctx.toggle_right(),
            other => log::warn!("Unknown palette command: {}", other),
        }
        close();
    };

    // Global shortcut.
    let _ = window_event_listener(leptos::ev::keydown, move |ev| {
        if (ev.ctrl_key() || ev.meta_key()) && ev.key().eq_ignore_ascii_case("k") {
            ev.prevent_default();
            state.toggle();
        }
    });

    // Focus the input whenever the palette opens.
    Effect::new(move |_| {
        if state.open.get() {
            if let Some(input) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("command-palette-input"))
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            {
                let _ = input.focus();
            }
        }
    });

    let handle_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let count = results.with(|r| r.len());
        match ev.key().as_str() {
            "ArrowDown" => {
                ev.prevent_default();
                set_active.update(|a| {
                    if count > 0 && *a + 1 < count {
                        *a += 1;
                    }
                });
            }
            "ArrowUp" => {
                ev.prevent_default();
                set_active.update(|a| *a = a.saturating_sub(1));
            }
            "Enter" => {
                if let Some(cmd) = results.with(|r| r.get(active.get()).copied()) {
                    run_command(cmd);
                }
            }
            "Escape" => close(),
            _ => {}
        }
    };

    view! {
        <Show when=move || state.open.get()>
            <div class="palette-overlay" on:click=move |_| close()>
                <div class="palette" on:click=|e| e.stop_propagation()>
                    <div class="palette__input-row">
                        {icon("search")}
                        <input
                            id="command-palette-input"
                            type="text"
                            class="palette__input"
                            placeholder="Type a command..."
                            prop:value=move || query.get()
                            on:input=move |ev| {
                                set_query.set(event_target_value(&ev));
                                set_active.set(0);
                            }
                            on:keydown=handle_keydown
                        />
                        <span class="palette__shortcut-hint">"esc"</span>
                    </div>
                    <div class="palette__results">
                        {move || {
                            let items = results.get();
                            if items.is_empty() {
                                view! {
                                    <div class="palette__empty">"No matching commands"</div>
                                }
                                .into_any()
                            } else {
                                items.into_iter().enumerate().map(|(i, cmd)| {
                                    view! {
                                        <div
                                            class="palette__item"
                                            class:palette__item--active=move || active.get() == i
                                            on:click=move |_| run_command(cmd)
                                            on:mousemove=move |_| set_active.set(i)
                                        >
                                            <span class="palette__item-icon">{icon(cmd.icon)}</span>
                                            <span class="palette__item-label">{cmd.label}</span>
                                            <span class="palette__item-hint">{cmd.hint}</span>
                                        </div>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
