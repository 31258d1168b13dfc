#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Result types for the aggregate queries served by the dashboard.

use std::collections::BTreeMap;

use disaster_watch_disaster_models::DisasterType;
use serde::{Deserialize, Serialize};

/// Dashboard analytics view, recomputed from the store on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsData {
    /// All-time prediction count.
    pub total_predictions: u64,
    /// Mean prediction confidence as a percentage. Confidence stands in
    /// for accuracy — there is no ground-truth outcome tracking.
    pub accuracy_rate: f64,
    /// Count of currently active alerts.
    pub active_alerts: u64,
    /// Placeholder response-time figure; not computed from data.
    pub avg_response_time: f64,
    /// Prediction count per disaster type. Every type is present, zero or
    /// not.
    pub predictions_by_type: BTreeMap<DisasterType, u64>,
    /// Decorative 7-day accuracy series, oldest day first.
    pub accuracy_trend: Vec<TrendPoint>,
}

/// One day in the accuracy trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Display date, e.g. `"Jan 15"`.
    pub date: String,
    /// Accuracy percentage for the day.
    pub accuracy: f64,
}

/// Headline numbers for the dashboard status bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Count of currently active alerts.
    pub active_alerts: u64,
    /// Predictions created within the trailing 24 hours (unlike the
    /// all-time count in [`AnalyticsData`]).
    pub total_predictions: u64,
    /// Active alerts with high or critical severity.
    pub high_risk_areas: u64,
    /// Mean prediction confidence as a percentage.
    pub avg_confidence: f64,
}
