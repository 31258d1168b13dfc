#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Disaster type and severity taxonomy.
//!
//! This crate defines the canonical disaster classification used across
//! the entire disaster-watch system: the fixed set of monitored disaster
//! types and the ordinal severity scale attached to alerts.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The fixed set of disaster types the system monitors and predicts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DisasterType {
    /// River or coastal flooding
    Flood,
    /// Tropical cyclone / hurricane
    Cyclone,
    /// Sustained extreme rainfall
    HeavyRainfall,
    /// Seismic activity
    Earthquake,
    /// Uncontrolled wildfire
    Wildfire,
}

impl DisasterType {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Flood,
            Self::Cyclone,
            Self::HeavyRainfall,
            Self::Earthquake,
            Self::Wildfire,
        ]
    }

    /// Returns a title-cased human-readable name, e.g. `"Heavy Rainfall"`.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Flood => "Flood",
            Self::Cyclone => "Cyclone",
            Self::HeavyRainfall => "Heavy Rainfall",
            Self::Earthquake => "Earthquake",
            Self::Wildfire => "Wildfire",
        }
    }
}

/// Severity level for an alert, from 1 (low) to 4 (critical).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SeverityLevel {
    /// Level 1: Minimal expected impact
    Low = 1,
    /// Level 2: Localized disruption likely
    Moderate = 2,
    /// Level 3: Serious impact, prepare to evacuate
    High = 3,
    /// Level 4: Life-threatening, evacuate immediately
    Critical = 4,
}

impl SeverityLevel {
    /// Returns the numeric value of this severity level.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Whether this severity counts toward high-risk area statistics.
    #[must_use]
    pub const fn is_high_risk(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disaster_type_round_trips_snake_case() {
        let json = serde_json::to_string(&DisasterType::HeavyRainfall).unwrap();
        assert_eq!(json, "\"heavy_rainfall\"");
        let parsed: DisasterType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DisasterType::HeavyRainfall);
    }

    #[test]
    fn disaster_type_displays_snake_case() {
        assert_eq!(DisasterType::HeavyRainfall.to_string(), "heavy_rainfall");
        assert_eq!(DisasterType::Flood.to_string(), "flood");
    }

    #[test]
    fn display_name_is_title_cased() {
        assert_eq!(DisasterType::HeavyRainfall.display_name(), "Heavy Rainfall");
    }

    #[test]
    fn severity_orders_low_to_critical() {
        assert!(SeverityLevel::Low < SeverityLevel::Moderate);
        assert!(SeverityLevel::Moderate < SeverityLevel::High);
        assert!(SeverityLevel::High < SeverityLevel::Critical);
    }

    #[test]
    fn only_high_and_critical_are_high_risk() {
        assert!(!SeverityLevel::Low.is_high_risk());
        assert!(!SeverityLevel::Moderate.is_high_risk());
        assert!(SeverityLevel::High.is_high_risk());
        assert!(SeverityLevel::Critical.is_high_risk());
    }

    #[test]
    fn all_lists_every_type_once() {
        assert_eq!(DisasterType::all().len(), 5);
    }
}
