//! Seeded mock courts. There is no backend; every host page clones this
//! static dataset into its own signal and mutates it locally.

use contracts::domain::court::{Court, CourtStatus, SportKind, Surface};
use once_cell::sync::Lazy;

fn court(
    name: &str,
    sport: SportKind,
    surface: Surface,
    indoor: bool,
    hourly_rate: f64,
    status: CourtStatus,
) -> Court {
    Court::new(name.to_string(), sport, surface, indoor, hourly_rate, status)
}

static COURTS: Lazy<Vec<Court>> = Lazy::new(|| {
    use CourtStatus::*;
    use SportKind::*;
    use Surface::*;

    vec![
        court("Center Court", Tennis, HardCourt, true, 52.0, Available),
        court("Tennis Court A", Tennis, Clay, false, 38.0, Available),
        court("Tennis Court B", Tennis, Clay, false, 38.0, Maintenance),
        court("Grass Court", Tennis, Grass, false, 60.0, Available),
        court("Basketball Hall", Basketball, Parquet, true, 75.0, Available),
        court("Streetball Cage", Basketball, Synthetic, false, 25.0, Available),
        court("Badminton 1", Badminton, Synthetic, true, 22.0, Available),
        court("Badminton 2", Badminton, Synthetic, true, 22.0, Available),
        court("Squash Box 1", Squash, Parquet, true, 30.0, Available),
        court("Squash Box 2", Squash, Parquet, true, 30.0, Closed),
        court("Futsal Arena", Futsal, Synthetic, true, 90.0, Available),
        court("Volleyball Court", Volleyball, Synthetic, false, 35.0, Available),
    ]
});

pub fn seed_courts() -> Vec<Court> {
    COURTS.clone()
}
