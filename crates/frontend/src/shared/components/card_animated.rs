//! CardAnimated: thaw `Card` wrapper with an entry animation.
//!
//! The `card-enter` keyframes live in `layout.css`. Stagger cards by giving
//! each a growing `delay_ms`:
//!
//! ```ignore
//! <CardAnimated delay_ms=0>...</CardAnimated>
//! <CardAnimated delay_ms=80>...</CardAnimated>
//! <CardAnimated delay_ms=160>...</CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds (for the stagger effect).
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles appended after the animation.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-enter 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-enter 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
