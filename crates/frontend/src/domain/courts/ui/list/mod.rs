use crate::domain::courts::data::seed_courts;
use crate::shared::components::{Modal, PageHeader};
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifications;
use crate::shared::table::number_format::format_money;
use crate::shared::table::{CellValue, ColumnDescriptor, DataTable, RowKeyFn};
use contracts::domain::common::Identified;
use contracts::domain::court::{Court, CourtStatus, SportKind};
use contracts::domain::notification::NotificationKind;
use leptos::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub struct CourtRow {
    pub id: String,
    pub name: String,
    pub sport: SportKind,
    pub surface: &'static str,
    pub indoor: bool,
    pub hourly_rate: f64,
    pub status: CourtStatus,
}

impl From<Court> for CourtRow {
    fn from(court: Court) -> Self {
        Self {
            id: court.key(),
            name: court.name.clone(),
            sport: court.sport,
            surface: court.surface.label(),
            indoor: court.indoor,
            hourly_rate: court.hourly_rate,
            status: court.status,
        }
    }
}

fn columns() -> Vec<ColumnDescriptor<CourtRow>> {
    vec![
        ColumnDescriptor::new("name", "Name", |r: &CourtRow| CellValue::Text(r.name.clone())),
        ColumnDescriptor::new("sport", "Sport", |r: &CourtRow| {
            CellValue::Text(r.sport.label().to_string())
        })
        .with_render(|r: &CourtRow| {
            view! {
                <span class="table__cell-sport">
                    {icon(r.sport.icon_name())}
                    <span>{r.sport.label()}</span>
                </span>
            }
            .into_any()
        }),
        ColumnDescriptor::new("surface", "Surface", |r: &CourtRow| {
            CellValue::Text(r.surface.to_string())
        }),
        ColumnDescriptor::new("location", "Location", |r: &CourtRow| {
            CellValue::Text(if r.indoor { "Indoor" } else { "Outdoor" }.to_string())
        }),
        ColumnDescriptor::new("rate", "Rate / h", |r: &CourtRow| {
            CellValue::Number(r.hourly_rate)
        })
        .align_right()
        .with_render(|r: &CourtRow| {
            view! { <span class="table__cell-money">{format_money(r.hourly_rate)}</span> }
                .into_any()
        }),
        ColumnDescriptor::new("status", "Status", |r: &CourtRow| {
            CellValue::Text(r.status.label().to_string())
        })
        .with_render(|r: &CourtRow| {
            view! {
                <span class=format!("badge {}", r.status.css_modifier())>{r.status.label()}</span>
            }
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
pub fn CourtsList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<CourtRow>>(
        seed_courts().into_iter().map(Into::into).collect(),
    );
    let selected = RwSignal::new(HashSet::<String>::new());
    let (viewing, set_viewing) = signal::<Option<CourtRow>>(None);
    let notifications = use_notifications();

    let delete_one = move |row: CourtRow| {
        if !confirm(&format!("Delete court \"{}\"?", row.name)) {
            return;
        }
        set_items.update(|items| items.retain(|c| c.id != row.id));
        notifications.notify(
            NotificationKind::Success,
            "Court deleted",
            &format!("{} was removed", row.name),
        );
    };

    let delete_selected = move || {
        let ids = selected.get_untracked();
        if ids.is_empty() {
            return;
        }
        if !confirm(&format!("Delete selected courts? Count: {}", ids.len())) {
            return;
        }
        let count = ids.len();
        set_items.update(|items| items.retain(|c| !ids.contains(&c.id)));
        selected.set(HashSet::new());
        notifications.notify(
            NotificationKind::Success,
            "Courts deleted",
            &format!("{} courts removed", count),
        );
    };

    let row_key: RowKeyFn<CourtRow> = Arc::new(|row: &CourtRow| row.id.clone());

    view! {
        <div class="page">
            <PageHeader title="Courts" subtitle="Every bookable court in the facility".to_string()>
                <button
                    class="button button--secondary"
                    on:click=move |_| delete_selected()
                    disabled=move || selected.get().is_empty()
                >
                    {icon("trash")}
                    {move || format!("Delete ({})", selected.get().len())}
                </button>
            </PageHeader>

            <DataTable
                rows=items
                columns=columns()
                row_key=row_key
                table_id="courts-table"
                filterable=true
                selectable=true
                exportable=true
                export_filename="courts.csv".to_string()
                selection=selected
                on_view=Callback::new(move |row| set_viewing.set(Some(row)))
                on_delete=Callback::new(delete_one)
            />

            <Modal
                when=Signal::derive(move || viewing.get().is_some())
                on_close=Callback::new(move |_| set_viewing.set(None))
            >
                {move || viewing.get().map(|court| view! {
                    <div class="details">
                        <div class="details__header">
                            <h2 class="details__title">{court.name.clone()}</h2>
                            <span class=format!("badge {}", court.status.css_modifier())>
                                {court.status.label()}
                            </span>
                        </div>
                        <dl class="details__grid">
                            <dt>"Sport"</dt>
                            <dd>{court.sport.label()}</dd>
                            <dt>"Surface"</dt>
                            <dd>{court.surface}</dd>
                            <dt>"Location"</dt>
                            <dd>{if court.indoor { "Indoor" } else { "Outdoor" }}</dd>
                            <dt>"Hourly rate"</dt>
                            <dd>{format_money(court.hourly_rate)}</dd>
                        </dl>
                        <div class="details__actions">
                            <button
                                class="button button--secondary"
                                on:click=move |_| set_viewing.set(None)
                            >
                                "Close"
                            </button>
                        </div>
                    </div>
                })}
            </Modal>
        </div>
    }
}
