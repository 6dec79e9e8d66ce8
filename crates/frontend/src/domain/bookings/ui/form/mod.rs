//! Booking form: court, date, hour slot and customer.
//!
//! Submission is validated through `BookingDraft`, checked against the
//! existing bookings for collisions and then "saved" behind a short timer
//! that stands in for network latency.

use chrono::NaiveDate;
use contracts::domain::booking::{
    Booking, BookingDraft, BookingStatus, CLOSING_HOUR, OPENING_HOUR,
};
use contracts::domain::court::{Court, CourtId};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

const SIMULATED_SAVE_MS: u32 = 600;

#[component]
#[allow(non_snake_case)]
pub fn BookingForm(
    /// Courts offered in the select.
    courts: Vec<Court>,
    /// Current bookings, for the collision check.
    #[prop(into)]
    existing: Signal<Vec<Booking>>,
    /// When set, the form edits this booking instead of creating a new one.
    #[prop(optional_no_strip)]
    initial: Option<Booking>,
    on_saved: Callback<Booking>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing_id = initial.as_ref().map(|b| b.id);

    let court_id = RwSignal::new(
        initial
            .as_ref()
            .map(|b| b.court_id.as_string())
            .unwrap_or_default(),
    );
    let date_str = RwSignal::new(
        initial
            .as_ref()
            .map(|b| b.date.to_string())
            .unwrap_or_default(),
    );
    let start_hour = RwSignal::new(initial.as_ref().map(|b| b.start_hour).unwrap_or(18));
    let end_hour = RwSignal::new(initial.as_ref().map(|b| b.end_hour).unwrap_or(19));
    let customer = RwSignal::new(
        initial
            .as_ref()
            .map(|b| b.customer.clone())
            .unwrap_or_default(),
    );

    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let courts = StoredValue::new(courts);
    let is_editing = editing_id.is_some();

    let submit = move |_| {
        if saving.get_untracked() {
            return;
        }

        let draft = BookingDraft {
            court_id: Uuid::parse_str(&court_id.get_untracked())
                .ok()
                .map(CourtId::new),
            customer: customer.get_untracked(),
            date: NaiveDate::parse_from_str(&date_str.get_untracked(), "%Y-%m-%d").ok(),
            start_hour: start_hour.get_untracked(),
            end_hour: end_hour.get_untracked(),
        };

        let court = draft.court_id.and_then(|id| {
            courts.with_value(|courts| courts.iter().find(|c| c.id == id).cloned())
        });
        let Some(court) = court else {
            set_error.set(Some("Select a court".to_string()));
            return;
        };

        let mut booking = match draft.into_booking(court.name.clone(), court.hourly_rate) {
            Ok(b) => b,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        if let Some(id) = editing_id {
            booking.id = id;
        }

        // Collision check against everything that still occupies the court.
        let collision = existing.with_untracked(|bookings| {
            bookings
                .iter()
                .filter(|b| b.id != booking.id && b.status != BookingStatus::Cancelled)
                .any(|b| b.overlaps(&booking))
        });
        if collision {
            set_error.set(Some(format!(
                "{} is already booked for that slot",
                court.name
            )));
            return;
        }

        set_error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            TimeoutFuture::new(SIMULATED_SAVE_MS).await;
            set_saving.set(false);
            on_saved.run(booking);
        });
    };

    let hour_options = move |range: std::ops::RangeInclusive<u32>, selected: RwSignal<u32>| {
        range
            .map(|hour| {
                view! {
                    <option
                        value=hour.to_string()
                        selected=move || selected.get() == hour
                    >
                        {format!("{:02}:00", hour)}
                    </option>
                }
            })
            .collect_view()
    };

    view! {
        <div class="form">
            <h2 class="form__title">
                {if is_editing { "Edit booking" } else { "New booking" }}
            </h2>

            {move || error.get().map(|e| view! {
                <div class="form__error">{e}</div>
            })}

            <label class="form__field">
                <span class="form__label">"Court"</span>
                <select
                    class="form__select"
                    prop:value=move || court_id.get()
                    on:change=move |ev| court_id.set(event_target_value(&ev))
                >
                    <option value="" selected=move || court_id.get().is_empty()>
                        "Select a court..."
                    </option>
                    {courts.with_value(|courts| courts.iter().map(|c| {
                        let id = c.id.as_string();
                        let id_for_selected = id.clone();
                        view! {
                            <option
                                value=id
                                selected=move || court_id.get() == id_for_selected
                            >
                                {format!("{} ({}/h)", c.name, c.hourly_rate)}
                            </option>
                        }
                    }).collect_view())}
                </select>
            </label>

            <label class="form__field">
                <span class="form__label">"Date"</span>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || date_str.get()
                    on:input=move |ev| date_str.set(event_target_value(&ev))
                />
            </label>

            <div class="form__row">
                <label class="form__field">
                    <span class="form__label">"From"</span>
                    <select
                        class="form__select"
                        on:change=move |ev| {
                            if let Ok(hour) = event_target_value(&ev).parse() {
                                start_hour.set(hour);
                            }
                        }
                    >
                        {hour_options(OPENING_HOUR..=CLOSING_HOUR - 1, start_hour)}
                    </select>
                </label>
                <label class="form__field">
                    <span class="form__label">"To"</span>
                    <select
                        class="form__select"
                        on:change=move |ev| {
                            if let Ok(hour) = event_target_value(&ev).parse() {
                                end_hour.set(hour);
                            }
                        }
                    >
                        {hour_options(OPENING_HOUR + 1..=CLOSING_HOUR, end_hour)}
                    </select>
                </label>
            </div>

            <label class="form__field">
                <span class="form__label">"Customer"</span>
                <input
                    type="text"
                    class="form__input"
                    placeholder="Name or team"
                    prop:value=move || customer.get()
                    on:input=move |ev| customer.set(event_target_value(&ev))
                />
            </label>

            <div class="form__actions">
                <button
                    class="button button--secondary"
                    on:click=move |_| on_cancel.run(())
                    disabled=move || saving.get()
                >
                    "Cancel"
                </button>
                <button
                    class="button button--primary"
                    on:click=submit
                    disabled=move || saving.get()
                >
                    {move || if saving.get() { "Saving..." } else { "Save booking" }}
                </button>
            </div>
        </div>
    }
}
