use crate::domain::common::{EntityMetadata, Identified};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ID type
// ---------------------------------------------------------------------------

/// Unique court identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourtId(pub Uuid);

impl CourtId {
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
// Enums
// ---------------------------------------------------------------------------

/// Sport a court is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SportKind {
    Tennis,
    Basketball,
    Badminton,
    Squash,
    Futsal,
    Volleyball,
}

impl SportKind {
    pub fn label(&self) -> &'static str {
        match self {
            SportKind::Tennis => "Tennis",
            SportKind::Basketball => "Basketball",
            SportKind::Badminton => "Badminton",
            SportKind::Squash => "Squash",
            SportKind::Futsal => "Futsal",
            SportKind::Volleyball => "Volleyball",
        }
    }

    /// Icon name understood by the frontend `icon()` helper.
    pub fn icon_name(&self) -> &'static str {
        match self {
            SportKind::Tennis | SportKind::Squash | SportKind::Badminton => "racket",
            SportKind::Basketball | SportKind::Volleyball => "ball",
            SportKind::Futsal => "goal",
        }
    }

    pub fn all() -> [SportKind; 6] {
        [
            SportKind::Tennis,
            SportKind::Basketball,
            SportKind::Badminton,
            SportKind::Squash,
            SportKind::Futsal,
            SportKind::Volleyball,
        ]
    }
}

/// Playing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    HardCourt,
    Clay,
    Grass,
    Parquet,
    Synthetic,
}

impl Surface {
    pub fn label(&self) -> &'static str {
        match self {
            Surface::HardCourt => "Hard court",
            Surface::Clay => "Clay",
            Surface::Grass => "Grass",
            Surface::Parquet => "Parquet",
            Surface::Synthetic => "Synthetic",
        }
    }
}

/// Operational status of a court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourtStatus {
    Available,
    Maintenance,
    Closed,
}

impl CourtStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CourtStatus::Available => "Available",
            CourtStatus::Maintenance => "Maintenance",
            CourtStatus::Closed => "Closed",
        }
    }

    /// BEM modifier used for the status badge.
    pub fn css_modifier(&self) -> &'static str {
        match self {
            CourtStatus::Available => "badge--success",
            CourtStatus::Maintenance => "badge--warning",
            CourtStatus::Closed => "badge--error",
        }
    }
}

// ---------------------------------------------------------------------------
// Court
// ---------------------------------------------------------------------------

/// A bookable court.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: CourtId,
    pub name: String,
    pub sport: SportKind,
    pub surface: Surface,
    pub indoor: bool,
    /// Price per hour, in whole currency units.
    #[serde(rename = "hourlyRate")]
    pub hourly_rate: f64,
    pub status: CourtStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Court {
    pub fn new(
        name: String,
        sport: SportKind,
        surface: Surface,
        indoor: bool,
        hourly_rate: f64,
        status: CourtStatus,
    ) -> Self {
        Self {
            id: CourtId::new_v4(),
            name,
            sport,
            surface,
            indoor,
            hourly_rate,
            status,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Court name must not be empty".into());
        }
        if self.hourly_rate <= 0.0 {
            return Err("Hourly rate must be positive".into());
        }
        Ok(())
    }
}

impl Identified for Court {
    fn key(&self) -> String {
        self.id.as_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Court {
        Court::new(
            "Center Court".to_string(),
            SportKind::Tennis,
            Surface::HardCourt,
            true,
            50.0,
            CourtStatus::Available,
        )
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut court = sample();
        court.name = "   ".to_string();
        assert!(court.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_rate() {
        let mut court = sample();
        court.hourly_rate = 0.0;
        assert!(court.validate().is_err());
    }
}
