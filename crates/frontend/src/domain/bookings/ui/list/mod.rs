use crate::domain::bookings::data::seed_bookings;
use crate::domain::bookings::ui::form::BookingForm;
use crate::domain::courts::data::seed_courts;
use crate::shared::components::{Modal, PageHeader};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::table::number_format::format_money;
use crate::shared::table::{CellValue, ColumnDescriptor, DataTable, RowKeyFn};
use contracts::domain::booking::Booking;
use contracts::domain::common::Identified;
use contracts::domain::notification::NotificationKind;
use leptos::prelude::*;
use std::sync::Arc;

fn columns() -> Vec<ColumnDescriptor<Booking>> {
    vec![
        ColumnDescriptor::new("court", "Court", |b: &Booking| {
            CellValue::Text(b.court_name.clone())
        }),
        ColumnDescriptor::new("customer", "Customer", |b: &Booking| {
            CellValue::Text(b.customer.clone())
        }),
        // ISO in the accessor keeps sorting and export sane; the cell shows
        // the local format.
        ColumnDescriptor::new("date", "Date", |b: &Booking| {
            CellValue::Text(b.date.to_string())
        })
        .with_render(|b: &Booking| {
            view! { <span>{format_date(b.date)}</span> }.into_any()
        }),
        ColumnDescriptor::new("slot", "Slot", |b: &Booking| CellValue::Text(b.slot_label()))
            .not_sortable(),
        ColumnDescriptor::new("status", "Status", |b: &Booking| {
            CellValue::Text(b.status.label().to_string())
        })
        .with_render(|b: &Booking| {
            view! {
                <span class=format!("badge {}", b.status.css_modifier())>{b.status.label()}</span>
            }
            .into_any()
        }),
        ColumnDescriptor::new("amount", "Amount", |b: &Booking| CellValue::Number(b.amount))
            .align_right()
            .with_render(|b: &Booking| {
                view! { <span class="table__cell-money">{format_money(b.amount)}</span> }
                    .into_any()
            }),
    ]
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[component]
#[allow(non_snake_case)]
pub fn BookingsList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Booking>>(seed_bookings());
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal::<Option<Booking>>(None);
    let notifications = use_notifications();

    let open_new = move || {
        set_editing.set(None);
        set_show_form.set(true);
    };

    let open_edit = move |booking: Booking| {
        set_editing.set(Some(booking));
        set_show_form.set(true);
    };

    let close_form = move || {
        set_show_form.set(false);
        set_editing.set(None);
    };

    let on_saved = Callback::new(move |booking: Booking| {
        let summary = format!(
            "{} for {} on {}",
            booking.court_name,
            booking.customer,
            format_date(booking.date)
        );
        set_items.update(|list| {
            if let Some(pos) = list.iter().position(|b| b.id == booking.id) {
                list[pos] = booking;
            } else {
                list.insert(0, booking);
            }
        });
        notifications.notify(NotificationKind::Success, "Booking saved", &summary);
        close_form();
    });

    let delete_one = move |booking: Booking| {
        if !confirm(&format!(
            "Delete the booking of {} for {}?",
            booking.court_name, booking.customer
        )) {
            return;
        }
        set_items.update(|list| list.retain(|b| b.id != booking.id));
        notifications.notify(
            NotificationKind::Info,
            "Booking deleted",
            &format!("{} on {}", booking.court_name, format_date(booking.date)),
        );
    };

    let row_key: RowKeyFn<Booking> = Arc::new(|b: &Booking| b.key());

    view! {
        <div class="page">
            <PageHeader title="Bookings" subtitle="Reservations across all courts".to_string()>
                <button class="button button--primary" on:click=move |_| open_new()>
                    {icon("plus")}
                    "New booking"
                </button>
            </PageHeader>

            <DataTable
                rows=items
                columns=columns()
                row_key=row_key
                table_id="bookings-table"
                filterable=true
                exportable=true
                export_filename="bookings.csv".to_string()
                on_edit=Callback::new(open_edit)
                on_delete=Callback::new(delete_one)
            />

            <Modal
                when=show_form
                on_close=Callback::new(move |_| close_form())
            >
                {move || view! {
                    <BookingForm
                        courts=seed_courts()
                        existing=items
                        initial=editing.get()
                        on_saved=on_saved
                        on_cancel=Callback::new(move |_| close_form())
                    />
                }}
            </Modal>
        </div>
    }
}
