//! Tab content registry - the single tab.key -> View mapping.

use crate::domain::bookings::ui::list::BookingsList;
use crate::domain::courts::ui::list::CourtsList;
use crate::domain::dashboard::ui::DashboardPage;
use leptos::logging::log;
use leptos::prelude::*;

/// Render the content of a tab by its key. Unknown keys get a visible
/// placeholder instead of a blank pane.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "dashboard" => view! { <DashboardPage /> }.into_any(),
        "courts" => view! { <CourtsList /> }.into_any(),
        "bookings" => view! { <BookingsList /> }.into_any(),
        _ => {
            log!("Unknown tab key: {}", key);
            view! { <div class="placeholder">{"Not implemented"}</div> }.into_any()
        }
    }
}
