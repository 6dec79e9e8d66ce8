use crate::domain::common::{EntityMetadata, Identified};
use crate::domain::court::CourtId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Courts can be booked between these hours (half-open range).
pub const OPENING_HOUR: u32 = 7;
pub const CLOSING_HOUR: u32 = 23;

// ---------------------------------------------------------------------------
// ID type
// ---------------------------------------------------------------------------

/// Unique booking identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(pub Uuid);

impl BookingId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Completed => "Completed",
        }
    }

    /// BEM modifier used for the status badge.
    pub fn css_modifier(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "badge--success",
            BookingStatus::Pending => "badge--warning",
            BookingStatus::Cancelled => "badge--error",
            BookingStatus::Completed => "badge--neutral",
        }
    }
}

// ---------------------------------------------------------------------------
// Booking
// ---------------------------------------------------------------------------

/// A reservation of one court for a contiguous block of whole hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    #[serde(rename = "courtId")]
    pub court_id: CourtId,
    /// Denormalized for display; the UI has no joins to run.
    #[serde(rename = "courtName")]
    pub court_name: String,
    pub customer: String,
    pub date: NaiveDate,
    /// First booked hour, inclusive.
    #[serde(rename = "startHour")]
    pub start_hour: u32,
    /// Hour the booking ends, exclusive.
    #[serde(rename = "endHour")]
    pub end_hour: u32,
    pub status: BookingStatus,
    pub amount: f64,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Booking {
    pub fn duration_hours(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour)
    }

    /// Display label for the booked slot, e.g. "18:00-20:00".
    pub fn slot_label(&self) -> String {
        format!("{:02}:00-{:02}:00", self.start_hour, self.end_hour)
    }

    /// Two bookings collide when they hold the same court on the same date
    /// and their half-open hour ranges intersect.
    pub fn overlaps(&self, other: &Booking) -> bool {
        self.court_id == other.court_id
            && self.date == other.date
            && self.start_hour < other.end_hour
            && other.start_hour < self.end_hour
    }
}

impl Identified for Booking {
    fn key(&self) -> String {
        self.id.as_string()
    }
}

// ---------------------------------------------------------------------------
// Form DTO
// ---------------------------------------------------------------------------

/// What the booking form collects before a `Booking` is created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingDraft {
    #[serde(rename = "courtId")]
    pub court_id: Option<CourtId>,
    pub customer: String,
    pub date: Option<NaiveDate>,
    #[serde(rename = "startHour")]
    pub start_hour: u32,
    #[serde(rename = "endHour")]
    pub end_hour: u32,
}

impl BookingDraft {
    pub fn validate(&self) -> Result<(), String> {
        if self.court_id.is_none() {
            return Err("Select a court".into());
        }
        if self.customer.trim().is_empty() {
            return Err("Customer name must not be empty".into());
        }
        if self.date.is_none() {
            return Err("Select a date".into());
        }
        if self.start_hour >= self.end_hour {
            return Err("End time must be after start time".into());
        }
        if self.start_hour < OPENING_HOUR || self.end_hour > CLOSING_HOUR {
            return Err(format!(
                "Bookings must fall between {:02}:00 and {:02}:00",
                OPENING_HOUR, CLOSING_HOUR
            ));
        }
        Ok(())
    }

    /// Build the booking this draft describes. Call `validate` first; this
    /// returns an error for the same conditions rather than panicking.
    pub fn into_booking(self, court_name: String, hourly_rate: f64) -> Result<Booking, String> {
        self.validate()?;
        let duration = self.end_hour - self.start_hour;
        Ok(Booking {
            id: BookingId::new_v4(),
            court_id: self.court_id.ok_or("Select a court")?,
            court_name,
            customer: self.customer.trim().to_string(),
            date: self.date.ok_or("Select a date")?,
            start_hour: self.start_hour,
            end_hour: self.end_hour,
            status: BookingStatus::Confirmed,
            amount: hourly_rate * duration as f64,
            metadata: EntityMetadata::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BookingDraft {
        BookingDraft {
            court_id: Some(CourtId::new_v4()),
            customer: "Alice".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 12),
            start_hour: 18,
            end_hour: 20,
        }
    }

    fn booking(court_id: CourtId, start: u32, end: u32) -> Booking {
        Booking {
            id: BookingId::new_v4(),
            court_id,
            court_name: "Court A".to_string(),
            customer: "Bob".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
            start_hour: start,
            end_hour: end,
            status: BookingStatus::Confirmed,
            amount: 100.0,
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn test_draft_validate_ok() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_draft_rejects_inverted_slot() {
        let mut d = draft();
        d.start_hour = 20;
        d.end_hour = 18;
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_draft_rejects_outside_opening_hours() {
        let mut d = draft();
        d.start_hour = 5;
        d.end_hour = 6;
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_into_booking_computes_amount() {
        let b = draft().into_booking("Court A".to_string(), 45.0).unwrap();
        assert_eq!(b.amount, 90.0);
        assert_eq!(b.duration_hours(), 2);
        assert_eq!(b.slot_label(), "18:00-20:00");
    }

    #[test]
    fn test_overlap_same_court_intersecting_hours() {
        let court = CourtId::new_v4();
        let a = booking(court, 18, 20);
        let b = booking(court, 19, 21);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_no_overlap_adjacent_slots() {
        let court = CourtId::new_v4();
        let a = booking(court, 18, 20);
        let b = booking(court, 20, 22);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_no_overlap_different_courts() {
        let a = booking(CourtId::new_v4(), 18, 20);
        let b = booking(CourtId::new_v4(), 18, 20);
        assert!(!a.overlaps(&b));
    }
}
