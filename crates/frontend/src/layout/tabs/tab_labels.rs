//! Single source of truth for tab titles.

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "dashboard" => "Dashboard",
        "courts" => "Courts",
        "bookings" => "Bookings",
        _ => "Unknown",
    }
}
