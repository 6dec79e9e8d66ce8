//! Shared domain types for the court-booking application.
//!
//! Everything here is plain data: courts, bookings, notifications and the
//! display metadata consumed by the dashboard. The frontend is the only
//! consumer; all datasets are seeded in memory.

pub mod domain;
pub mod shared;
