//! Seeded mock bookings, spread around the current date so the dashboard
//! and the list both have something to show.

use crate::domain::courts::data::seed_courts;
use chrono::{Duration, Utc};
use contracts::domain::booking::{Booking, BookingId, BookingStatus};
use contracts::domain::common::EntityMetadata;
use contracts::domain::court::Court;
use once_cell::sync::Lazy;

fn booking(
    court: &Court,
    customer: &str,
    day_offset: i64,
    start_hour: u32,
    end_hour: u32,
    status: BookingStatus,
) -> Booking {
    let date = (Utc::now() + Duration::days(day_offset)).date_naive();
    let duration = end_hour.saturating_sub(start_hour);
    Booking {
        id: BookingId::new_v4(),
        court_id: court.id,
        court_name: court.name.clone(),
        customer: customer.to_string(),
        date,
        start_hour,
        end_hour,
        status,
        amount: court.hourly_rate * duration as f64,
        metadata: EntityMetadata::new(),
    }
}

static BOOKINGS: Lazy<Vec<Booking>> = Lazy::new(|| {
    use BookingStatus::*;
    let courts = seed_courts();

    vec![
        booking(&courts[0], "Alice Martin", 0, 10, 12, Confirmed),
        booking(&courts[1], "Jonas Weber", 0, 9, 10, Confirmed),
        booking(&courts[4], "TSV Lions", 0, 18, 20, Confirmed),
        booking(&courts[6], "Mia Keller", 0, 17, 18, Pending),
        booking(&courts[8], "Tom Richter", 0, 12, 13, Cancelled),
        booking(&courts[10], "FC Nordwind", 0, 20, 22, Confirmed),
        booking(&courts[0], "Hannah Vogt", 1, 8, 10, Confirmed),
        booking(&courts[3], "Paul Brandt", 1, 16, 18, Pending),
        booking(&courts[7], "Lena Hoffmann", 1, 19, 21, Confirmed),
        booking(&courts[11], "Beach Crew", 2, 15, 17, Pending),
        booking(&courts[2], "Nico Lang", 3, 11, 12, Confirmed),
        booking(&courts[5], "After-Work Hoops", 4, 18, 19, Confirmed),
        booking(&courts[1], "Jonas Weber", -1, 9, 10, Completed),
        booking(&courts[4], "TSV Lions", -2, 18, 20, Completed),
        booking(&courts[9], "Sara Busch", -3, 10, 11, Cancelled),
        booking(&courts[6], "Mia Keller", -7, 17, 18, Completed),
    ]
});

pub fn seed_bookings() -> Vec<Booking> {
    BOOKINGS.clone()
}
