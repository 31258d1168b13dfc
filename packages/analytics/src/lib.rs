#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]
#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]

//! Aggregate statistics over the entity store.
//!
//! Both queries are stateless: they re-scan the snapshot handed to them on
//! every call and cache nothing. They take slices rather than the store so
//! callers (and tests) control exactly which records are in view.
//!
//! Two fields of [`AnalyticsData`] are stubs standing in for future real
//! telemetry and are deliberately not computed from stored data:
//! `avg_response_time` is a constant and `accuracy_trend` is randomized.

use std::collections::BTreeMap;

use chrono::{Duration, Utc};
use disaster_watch_analytics_models::{AnalyticsData, StatsSummary, TrendPoint};
use disaster_watch_disaster_models::DisasterType;
use disaster_watch_store_models::{Alert, Prediction};
use rand::Rng as _;

/// Placeholder until real response-time telemetry exists.
const AVG_RESPONSE_TIME_STUB: f64 = 3.2;

/// Builds the dashboard analytics view from the current snapshot.
#[must_use]
pub fn analytics(predictions: &[Prediction], alerts: &[Alert]) -> AnalyticsData {
    let mut predictions_by_type: BTreeMap<DisasterType, u64> =
        DisasterType::all().iter().map(|t| (*t, 0)).collect();
    for prediction in predictions {
        if let Some(count) = predictions_by_type.get_mut(&prediction.disaster_type) {
            *count += 1;
        }
    }

    AnalyticsData {
        total_predictions: predictions.len() as u64,
        accuracy_rate: mean_confidence(predictions) * 100.0,
        active_alerts: count_active(alerts),
        avg_response_time: AVG_RESPONSE_TIME_STUB,
        predictions_by_type,
        accuracy_trend: accuracy_trend(),
    }
}

/// Builds the status-bar summary from the current snapshot.
///
/// Unlike [`analytics`], the prediction count here is windowed to the
/// trailing 24 hours.
#[must_use]
pub fn stats(predictions: &[Prediction], alerts: &[Alert]) -> StatsSummary {
    let cutoff = Utc::now() - Duration::hours(24);
    let recent = predictions
        .iter()
        .filter(|p| p.created_at > cutoff)
        .count() as u64;

    let high_risk_areas = alerts
        .iter()
        .filter(|a| a.is_active && a.severity.is_high_risk())
        .count() as u64;

    StatsSummary {
        active_alerts: count_active(alerts),
        total_predictions: recent,
        high_risk_areas,
        avg_confidence: mean_confidence(predictions) * 100.0,
    }
}

fn count_active(alerts: &[Alert]) -> u64 {
    alerts.iter().filter(|a| a.is_active).count() as u64
}

fn mean_confidence(predictions: &[Prediction]) -> f64 {
    if predictions.is_empty() {
        return 0.0;
    }
    let len = predictions.len() as f64;
    predictions.iter().map(|p| p.confidence).sum::<f64>() / len
}

/// Synthesizes the decorative 7-day accuracy series, one point per
/// trailing day, oldest first, each value drawn uniformly from [82, 92).
fn accuracy_trend() -> Vec<TrendPoint> {
    let mut rng = rand::thread_rng();
    let today = Utc::now();
    (0..7)
        .map(|i| TrendPoint {
            date: (today - Duration::days(6 - i))
                .format("%b %-d")
                .to_string(),
            accuracy: rng.gen_range(82.0..92.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use disaster_watch_disaster_models::SeverityLevel;
    use uuid::Uuid;

    fn prediction(
        disaster_type: DisasterType,
        confidence: f64,
        created_at: DateTime<Utc>,
    ) -> Prediction {
        Prediction {
            id: Uuid::new_v4(),
            disaster_type,
            location: "Chennai".to_string(),
            latitude: 13.0827,
            longitude: 80.2707,
            probability: 0.5,
            confidence,
            contributing_factors: BTreeMap::new(),
            data_sources: vec!["Weather API".to_string()],
            predicted_time: created_at + Duration::hours(24),
            created_at,
        }
    }

    fn alert(is_active: bool, severity: SeverityLevel) -> Alert {
        Alert {
            id: Uuid::new_v4(),
            disaster_type: DisasterType::Flood,
            severity,
            title: "t".to_string(),
            description: "d".to_string(),
            affected_regions: vec!["Mumbai".to_string()],
            latitude: 19.076,
            longitude: 72.8777,
            predicted_impact: "i".to_string(),
            confidence: 0.8,
            is_active,
            created_at: Utc::now(),
            expires_at: None,
        }
    }

    #[test]
    fn accuracy_rate_is_mean_confidence_percentage() {
        let now = Utc::now();
        let predictions = vec![
            prediction(DisasterType::Flood, 0.5, now),
            prediction(DisasterType::Cyclone, 0.7, now),
            prediction(DisasterType::Earthquake, 0.9, now),
        ];

        let data = analytics(&predictions, &[]);
        assert!((data.accuracy_rate - 70.0).abs() < 1e-9);

        let summary = stats(&predictions, &[]);
        assert!((summary.avg_confidence - 70.0).abs() < 1e-9);
    }

    #[test]
    fn empty_snapshot_yields_zero_rates() {
        let data = analytics(&[], &[]);
        assert_eq!(data.total_predictions, 0);
        assert!((data.accuracy_rate).abs() < f64::EPSILON);

        let summary = stats(&[], &[]);
        assert_eq!(summary.total_predictions, 0);
        assert!((summary.avg_confidence).abs() < f64::EPSILON);
    }

    #[test]
    fn predictions_by_type_counts_all_five_types() {
        let now = Utc::now();
        let predictions = vec![
            prediction(DisasterType::Flood, 0.8, now),
            prediction(DisasterType::Flood, 0.8, now),
            prediction(DisasterType::Wildfire, 0.8, now),
        ];

        let data = analytics(&predictions, &[]);
        assert_eq!(data.predictions_by_type.len(), 5);
        assert_eq!(data.predictions_by_type[&DisasterType::Flood], 2);
        assert_eq!(data.predictions_by_type[&DisasterType::Wildfire], 1);
        assert_eq!(data.predictions_by_type[&DisasterType::Cyclone], 0);
    }

    #[test]
    fn stats_window_diverges_from_all_time_count() {
        let now = Utc::now();
        let predictions = vec![
            prediction(DisasterType::Flood, 0.8, now - Duration::hours(25)),
            prediction(DisasterType::Flood, 0.8, now - Duration::hours(1)),
        ];

        let all_time = analytics(&predictions, &[]).total_predictions;
        let windowed = stats(&predictions, &[]).total_predictions;
        assert_eq!(all_time, 2);
        assert_eq!(windowed, 1);
    }

    #[test]
    fn high_risk_counts_only_active_high_or_critical() {
        let alerts = vec![
            alert(true, SeverityLevel::Critical),
            alert(false, SeverityLevel::Low),
        ];

        let summary = stats(&[], &alerts);
        assert_eq!(summary.active_alerts, 1);
        assert_eq!(summary.high_risk_areas, 1);

        let inactive_high = vec![alert(false, SeverityLevel::High)];
        assert_eq!(stats(&[], &inactive_high).high_risk_areas, 0);
    }

    #[test]
    fn trend_has_seven_points_in_band() {
        let data = analytics(&[], &[]);
        assert_eq!(data.accuracy_trend.len(), 7);
        for point in &data.accuracy_trend {
            assert!(point.accuracy >= 82.0 && point.accuracy < 92.0);
            assert!(!point.date.is_empty());
        }
    }

    #[test]
    fn response_time_is_the_documented_stub() {
        let data = analytics(&[], &[]);
        assert!((data.avg_response_time - 3.2).abs() < f64::EPSILON);
    }
}
