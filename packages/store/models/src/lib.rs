#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Entity record types held by the in-memory store.
//!
//! Each entity kind has a stored record type (with `id` and `created_at`
//! assigned by the store at insert) and an insert type (`New*`) that omits
//! them. Alerts additionally have a partial-update type. Multi-word wire
//! fields serialize as snake_case, matching the original dashboard schema.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use disaster_watch_disaster_models::{DisasterType, SeverityLevel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A disaster warning as stored and served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Unique alert ID, assigned at insert.
    pub id: Uuid,
    /// Disaster classification.
    pub disaster_type: DisasterType,
    /// Impact severity.
    pub severity: SeverityLevel,
    /// Short headline, e.g. `"CYCLONE Warning - Chennai"`.
    pub title: String,
    /// Longer human-readable description.
    pub description: String,
    /// Names of regions expected to be affected.
    pub affected_regions: Vec<String>,
    /// Latitude of the alert epicenter.
    pub latitude: f64,
    /// Longitude of the alert epicenter.
    pub longitude: f64,
    /// Expected impact summary text.
    pub predicted_impact: String,
    /// Model confidence in this alert, 0..=1.
    pub confidence: f64,
    /// Whether the alert is currently active.
    pub is_active: bool,
    /// When the alert was created.
    pub created_at: DateTime<Utc>,
    /// When the alert stops being relevant, if known.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Fields for creating a new [`Alert`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAlert {
    /// Disaster classification.
    pub disaster_type: DisasterType,
    /// Impact severity.
    pub severity: SeverityLevel,
    /// Short headline.
    pub title: String,
    /// Longer human-readable description.
    pub description: String,
    /// Names of regions expected to be affected.
    pub affected_regions: Vec<String>,
    /// Latitude of the alert epicenter.
    pub latitude: f64,
    /// Longitude of the alert epicenter.
    pub longitude: f64,
    /// Expected impact summary text.
    pub predicted_impact: String,
    /// Model confidence in this alert, 0..=1.
    pub confidence: f64,
    /// Whether the alert starts out active.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// When the alert stops being relevant, if known.
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Partial update for an existing [`Alert`].
///
/// Absent fields are left untouched; collection-valued fields are replaced
/// wholesale, never merged element-wise. `expires_at` can be set but not
/// cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlertUpdate {
    /// New disaster classification.
    pub disaster_type: Option<DisasterType>,
    /// New severity.
    pub severity: Option<SeverityLevel>,
    /// New headline.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Replacement affected-region list.
    pub affected_regions: Option<Vec<String>>,
    /// New latitude.
    pub latitude: Option<f64>,
    /// New longitude.
    pub longitude: Option<f64>,
    /// New impact summary.
    pub predicted_impact: Option<String>,
    /// New confidence.
    pub confidence: Option<f64>,
    /// New activity flag.
    pub is_active: Option<bool>,
    /// New expiry timestamp.
    pub expires_at: Option<DateTime<Utc>>,
}

impl AlertUpdate {
    /// Merges the supplied fields onto `alert`, leaving the rest as is.
    pub fn apply(self, alert: &mut Alert) {
        if let Some(v) = self.disaster_type {
            alert.disaster_type = v;
        }
        if let Some(v) = self.severity {
            alert.severity = v;
        }
        if let Some(v) = self.title {
            alert.title = v;
        }
        if let Some(v) = self.description {
            alert.description = v;
        }
        if let Some(v) = self.affected_regions {
            alert.affected_regions = v;
        }
        if let Some(v) = self.latitude {
            alert.latitude = v;
        }
        if let Some(v) = self.longitude {
            alert.longitude = v;
        }
        if let Some(v) = self.predicted_impact {
            alert.predicted_impact = v;
        }
        if let Some(v) = self.confidence {
            alert.confidence = v;
        }
        if let Some(v) = self.is_active {
            alert.is_active = v;
        }
        if let Some(v) = self.expires_at {
            alert.expires_at = Some(v);
        }
    }
}

/// A user-registered location to monitor for nearby alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    /// Unique location ID, assigned at insert.
    pub id: Uuid,
    /// User-facing location name.
    pub name: String,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// Alert radius in kilometers.
    pub radius: f64,
    /// Disaster types the user wants to be notified about.
    pub notification_preferences: Vec<DisasterType>,
    /// When the location was registered.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a new [`UserLocation`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserLocation {
    /// User-facing location name.
    pub name: String,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// Alert radius in kilometers.
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Disaster types the user wants to be notified about. Non-empty by
    /// upstream validation; the store does not check.
    pub notification_preferences: Vec<DisasterType>,
}

/// An AI-generated disaster prediction for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Unique prediction ID, assigned at insert.
    pub id: Uuid,
    /// Predicted disaster classification.
    pub disaster_type: DisasterType,
    /// Location name the prediction is for.
    pub location: String,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// Probability of occurrence, 0..=1.
    pub probability: f64,
    /// Model confidence in the probability, 0..=1.
    pub confidence: f64,
    /// Named contributing signals with weights in 0..=1.
    pub contributing_factors: BTreeMap<String, f64>,
    /// Labels of the data sources consulted.
    pub data_sources: Vec<String>,
    /// When the predicted event is expected (future-dated).
    pub predicted_time: DateTime<Utc>,
    /// When the prediction was created.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a new [`Prediction`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPrediction {
    /// Predicted disaster classification.
    pub disaster_type: DisasterType,
    /// Location name the prediction is for.
    pub location: String,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// Probability of occurrence, 0..=1.
    pub probability: f64,
    /// Model confidence in the probability, 0..=1.
    pub confidence: f64,
    /// Named contributing signals with weights in 0..=1.
    pub contributing_factors: BTreeMap<String, f64>,
    /// Labels of the data sources consulted.
    pub data_sources: Vec<String>,
    /// When the predicted event is expected.
    pub predicted_time: DateTime<Utc>,
}

/// A single step along an evacuation route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Landmark or road name.
    pub name: String,
    /// Driving instruction, e.g. `"Take the main highway northbound"`.
    pub instruction: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// An evacuation route generated for an alert.
///
/// `alert_id` is a plain foreign reference; the store never checks it, so a
/// dangling reference is tolerated rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvacuationRoute {
    /// Unique route ID, assigned at insert.
    pub id: Uuid,
    /// The alert this route evacuates from.
    pub alert_id: Uuid,
    /// Starting location name.
    pub start_location: String,
    /// Starting latitude.
    pub start_lat: f64,
    /// Starting longitude.
    pub start_lng: f64,
    /// Destination safe-zone name.
    pub end_location: String,
    /// Destination latitude.
    pub end_lat: f64,
    /// Destination longitude.
    pub end_lng: f64,
    /// Ordered steps from start to destination.
    pub waypoints: Vec<Waypoint>,
    /// Total distance in kilometers.
    pub distance: f64,
    /// Estimated travel time in minutes.
    pub estimated_time: f64,
    /// Route safety rating, 0..=1.
    pub safety_rating: f64,
    /// Whether this is the recommended route for its alert (vs. an
    /// alternative). The generator produces exactly one primary per
    /// request; the store does not enforce uniqueness.
    pub is_primary: bool,
    /// When the route was generated.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a new [`EvacuationRoute`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvacuationRoute {
    /// The alert this route evacuates from.
    pub alert_id: Uuid,
    /// Starting location name.
    pub start_location: String,
    /// Starting latitude.
    pub start_lat: f64,
    /// Starting longitude.
    pub start_lng: f64,
    /// Destination safe-zone name.
    pub end_location: String,
    /// Destination latitude.
    pub end_lat: f64,
    /// Destination longitude.
    pub end_lng: f64,
    /// Ordered steps from start to destination.
    pub waypoints: Vec<Waypoint>,
    /// Total distance in kilometers.
    pub distance: f64,
    /// Estimated travel time in minutes.
    pub estimated_time: f64,
    /// Route safety rating, 0..=1.
    pub safety_rating: f64,
    /// Whether this is the recommended route for its alert.
    #[serde(default = "default_true")]
    pub is_primary: bool,
}

const fn default_true() -> bool {
    true
}

const fn default_radius() -> f64 {
    10.0
}
