use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const CLOCK_TICK_MS: u32 = 30_000;

/// Status bar: app version, a mock status dot and a clock that ticks every
/// half minute.
#[component]
pub fn Footer() -> impl IntoView {
    let (now, set_now) = signal(Utc::now());
    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    Effect::new(move |_| {
        spawn_local(async move {
            loop {
                TimeoutFuture::new(CLOCK_TICK_MS).await;
                if !alive.try_get_value().unwrap_or(false) {
                    break;
                }
                set_now.set(Utc::now());
            }
        });
    });

    view! {
        <footer data-zone="footer" class="status-bar">
            <span class="status-bar__status status-online">"All systems operational"</span>
            <span class="status-bar__note">"Demo data \u{00b7} no server connected"</span>
            <span class="status-bar__clock">
                {move || now.get().format("%H:%M UTC").to_string()}
            </span>
            <span class="status-bar__version">{format!("v{}", env!("CARGO_PKG_VERSION"))}</span>
        </footer>
    }
}
