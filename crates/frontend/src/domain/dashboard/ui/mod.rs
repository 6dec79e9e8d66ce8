//! Dashboard: particle hero, stat cards computed from the seeded data and a
//! compact table of upcoming bookings.

use crate::domain::bookings::data::seed_bookings;
use crate::domain::courts::data::seed_courts;
use crate::shared::components::{CardAnimated, StatCard};
use crate::shared::particles::ParticleCanvas;
use crate::shared::table::{CellValue, ColumnDescriptor, DataTable, RowKeyFn};
use crate::shared::date_utils::format_date;
use crate::shared::table::number_format::format_money;
use chrono::Utc;
use contracts::domain::booking::{Booking, BookingStatus, CLOSING_HOUR, OPENING_HOUR};
use contracts::domain::common::Identified;
use contracts::domain::court::CourtStatus;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use std::sync::Arc;

struct DashboardStats {
    bookings_today: f64,
    revenue_today: f64,
    occupancy_percent: f64,
    open_courts: f64,
}

fn compute_stats(bookings: &[Booking]) -> DashboardStats {
    let courts = seed_courts();
    let today = Utc::now().date_naive();

    let todays: Vec<&Booking> = bookings
        .iter()
        .filter(|b| b.date == today && b.status != BookingStatus::Cancelled)
        .collect();

    let open_courts = courts
        .iter()
        .filter(|c| c.status == CourtStatus::Available)
        .count();
    let booked_hours: u32 = todays.iter().map(|b| b.duration_hours()).sum();
    let capacity_hours = open_courts as f64 * (CLOSING_HOUR - OPENING_HOUR) as f64;
    let occupancy_percent = if capacity_hours > 0.0 {
        booked_hours as f64 / capacity_hours * 100.0
    } else {
        0.0
    };

    DashboardStats {
        bookings_today: todays.len() as f64,
        revenue_today: todays.iter().map(|b| b.amount).sum(),
        occupancy_percent,
        open_courts: open_courts as f64,
    }
}

fn upcoming(bookings: &[Booking]) -> Vec<Booking> {
    let today = Utc::now().date_naive();
    let mut upcoming: Vec<Booking> = bookings
        .iter()
        .filter(|b| {
            b.date >= today
                && matches!(b.status, BookingStatus::Confirmed | BookingStatus::Pending)
        })
        .cloned()
        .collect();
    upcoming.sort_by_key(|b| (b.date, b.start_hour));
    upcoming.truncate(6);
    upcoming
}

fn upcoming_columns() -> Vec<ColumnDescriptor<Booking>> {
    vec![
        ColumnDescriptor::new("court", "Court", |b: &Booking| {
            CellValue::Text(b.court_name.clone())
        }),
        ColumnDescriptor::new("customer", "Customer", |b: &Booking| {
            CellValue::Text(b.customer.clone())
        }),
        ColumnDescriptor::new("date", "Date", |b: &Booking| {
            CellValue::Text(b.date.to_string())
        })
        .with_render(|b: &Booking| {
            view! { <span>{format_date(b.date)}</span> }.into_any()
        }),
        ColumnDescriptor::new("slot", "Slot", |b: &Booking| CellValue::Text(b.slot_label())),
        ColumnDescriptor::new("amount", "Amount", |b: &Booking| CellValue::Number(b.amount))
            .align_right()
            .with_render(|b: &Booking| {
                view! { <span class="table__cell-money">{format_money(b.amount)}</span> }
                    .into_any()
            }),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn DashboardPage() -> impl IntoView {
    let bookings = seed_bookings();
    let stats = compute_stats(&bookings);
    let (upcoming_rows, _) = signal(upcoming(&bookings));

    let bookings_today = stats.bookings_today;
    let revenue_today = stats.revenue_today;
    let occupancy = stats.occupancy_percent;
    let open_courts = stats.open_courts;

    let occupancy_status = if occupancy >= 50.0 {
        IndicatorStatus::Good
    } else if occupancy >= 20.0 {
        IndicatorStatus::Neutral
    } else {
        IndicatorStatus::Warning
    };

    let row_key: RowKeyFn<Booking> = Arc::new(|b: &Booking| b.key());

    view! {
        <div class="page">
            <div class="dashboard-hero">
                <ParticleCanvas canvas_id="dashboard-particles".to_string() />
                <div class="dashboard-hero__content">
                    <h1 class="dashboard-hero__title">"Courtside"</h1>
                    <p class="dashboard-hero__subtitle">
                        "Court utilisation and bookings at a glance"
                    </p>
                </div>
            </div>

            <div class="stat-grid">
                <CardAnimated delay_ms=0>
                    <StatCard
                        label="Bookings today".to_string()
                        icon_name="calendar".to_string()
                        value=Signal::derive(move || Some(bookings_today))
                        format=ValueFormat::Integer
                        status=Signal::derive(|| IndicatorStatus::Neutral)
                        change_percent=Signal::derive(|| Some(12.0))
                    />
                </CardAnimated>
                <CardAnimated delay_ms=80>
                    <StatCard
                        label="Revenue today".to_string()
                        icon_name="dollar-sign".to_string()
                        value=Signal::derive(move || Some(revenue_today))
                        format=ValueFormat::Money { currency: "EUR".to_string() }
                        status=Signal::derive(|| IndicatorStatus::Good)
                        change_percent=Signal::derive(|| Some(4.6))
                    />
                </CardAnimated>
                <CardAnimated delay_ms=160>
                    <StatCard
                        label="Occupancy".to_string()
                        icon_name="activity".to_string()
                        value=Signal::derive(move || Some(occupancy))
                        format=ValueFormat::Percent { decimals: 1 }
                        status=Signal::derive(move || occupancy_status)
                        change_percent=Signal::derive(|| Some(-2.3))
                        subtitle=Signal::derive(|| Some("of open-court hours".to_string()))
                    />
                </CardAnimated>
                <CardAnimated delay_ms=240>
                    <StatCard
                        label="Open courts".to_string()
                        icon_name="racket".to_string()
                        value=Signal::derive(move || Some(open_courts))
                        format=ValueFormat::Integer
                        status=Signal::derive(|| IndicatorStatus::Neutral)
                        change_percent=Signal::derive(|| None)
                    />
                </CardAnimated>
            </div>

            <CardAnimated delay_ms=320>
                <h2 class="dashboard__section-title">"Upcoming bookings"</h2>
                <DataTable
                    rows=upcoming_rows
                    columns=upcoming_columns()
                    row_key=row_key
                    table_id="upcoming-bookings-table"
                    searchable=false
                    sortable=false
                    paginated=false
                />
            </CardAnimated>
        </div>
    }
}
