//! Sample-data seeding for `POST /api/init-data`.

use chrono::{Duration, Utc};
use disaster_watch_ai::Generator;
use disaster_watch_disaster_models::SeverityLevel;
use disaster_watch_store::MemStore;
use disaster_watch_store_models::{NewAlert, NewPrediction};
use rand::Rng as _;

/// Demo locations seeded by `/api/init-data`.
const SEED_LOCATIONS: &[(&str, f64, f64)] = &[
    ("Mumbai", 19.076, 72.8777),
    ("Chennai", 13.0827, 80.2707),
    ("Kolkata", 22.5726, 88.3639),
    ("Coastal Odisha", 20.2961, 85.8245),
];

const SEED_DATA_SOURCES: &[&str] = &[
    "Weather API",
    "Satellite Data",
    "Historical Records",
    "Climate Models",
];

/// Runs the generator for each demo location, storing one prediction per
/// location and, with some randomness, an accompanying alert. Severity
/// and activity are randomized so the seeded dashboard looks lived-in.
pub async fn sample_data(store: &MemStore, generator: &Generator) {
    for (name, lat, lng) in SEED_LOCATIONS {
        let forecast = generator.predict(name, *lat, *lng).await;

        let (create_alert, is_active, predicted_offset_mins) = {
            let mut rng = rand::thread_rng();
            (
                rng.r#gen::<f64>() > 0.4,
                rng.r#gen::<f64>() > 0.3,
                rng.gen_range(0..(72 * 60)),
            )
        };

        if create_alert {
            let severity = if forecast.probability > 0.8 {
                SeverityLevel::Critical
            } else if forecast.probability > 0.6 {
                SeverityLevel::High
            } else if forecast.probability > 0.4 {
                SeverityLevel::Moderate
            } else {
                SeverityLevel::Low
            };

            store.create_alert(NewAlert {
                disaster_type: forecast.disaster_type,
                severity,
                title: format!(
                    "{} Warning - {name}",
                    forecast.disaster_type.display_name()
                ),
                description: forecast.reasoning.clone(),
                affected_regions: vec![(*name).to_string()],
                latitude: *lat,
                longitude: *lng,
                predicted_impact: format!("{} impact expected", capitalize(severity.as_ref())),
                confidence: forecast.confidence,
                is_active,
                expires_at: Some(Utc::now() + Duration::hours(48)),
            });
        }

        store.create_prediction(NewPrediction {
            disaster_type: forecast.disaster_type,
            location: (*name).to_string(),
            latitude: *lat,
            longitude: *lng,
            probability: forecast.probability,
            confidence: forecast.confidence,
            contributing_factors: forecast.contributing_factors,
            data_sources: SEED_DATA_SOURCES.iter().map(|s| (*s).to_string()).collect(),
            predicted_time: Utc::now() + Duration::minutes(predicted_offset_mins),
        });
    }

    log::info!(
        "Seeded sample data for {} locations",
        SEED_LOCATIONS.len()
    );
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn seeds_one_prediction_per_location() {
        let store = MemStore::new();
        let generator = Generator::synthetic();

        sample_data(&store, &generator).await;

        let predictions = store.all_predictions();
        assert_eq!(predictions.len(), SEED_LOCATIONS.len());
        for (name, _, _) in SEED_LOCATIONS {
            assert!(predictions.iter().any(|p| p.location == *name));
        }
        // Alerts are randomized; every one that exists must reference a
        // seeded region.
        for alert in store.all_alerts() {
            assert!(
                SEED_LOCATIONS
                    .iter()
                    .any(|(name, _, _)| alert.affected_regions == vec![(*name).to_string()])
            );
        }
    }

    #[test]
    fn capitalizes_severity_labels() {
        assert_eq!(capitalize("critical"), "Critical");
        assert_eq!(capitalize(""), "");
    }
}
