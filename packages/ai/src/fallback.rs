//! Pseudo-random synthetic forecasts and routes.
//!
//! Used whenever the Gemini call fails or no API key is configured, so the
//! dashboard stays demonstrable offline. Values land in the same ranges
//! the model is prompted for.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use disaster_watch_disaster_models::DisasterType;
use disaster_watch_store_models::Waypoint;
use rand::Rng as _;

use crate::{DisasterForecast, RoutePlan};

/// Disaster types the synthetic forecaster draws from. Weather-driven
/// types only; synthesizing an earthquake out of thin air would look
/// obviously fake on the dashboard.
const FALLBACK_TYPES: &[DisasterType] = &[
    DisasterType::Flood,
    DisasterType::Cyclone,
    DisasterType::HeavyRainfall,
];

const FACTOR_NAMES: &[&str] = &[
    "weather_patterns",
    "geographical_risk",
    "historical_frequency",
    "seasonal_trends",
    "climate_indicators",
];

/// Synthesizes a forecast: probability in [0.3, 0.8), confidence in
/// [0.7, 0.9), uniform factor weights.
pub fn forecast() -> DisasterForecast {
    let mut rng = rand::thread_rng();
    let disaster_type = FALLBACK_TYPES[rng.gen_range(0..FALLBACK_TYPES.len())];
    let contributing_factors: BTreeMap<String, f64> = FACTOR_NAMES
        .iter()
        .map(|name| ((*name).to_string(), rng.r#gen::<f64>()))
        .collect();

    DisasterForecast {
        disaster_type,
        probability: 0.3 + rng.r#gen::<f64>() * 0.5,
        confidence: 0.7 + rng.r#gen::<f64>() * 0.2,
        contributing_factors,
        reasoning: "Based on geographical and climate analysis".to_string(),
    }
}

/// Synthesizes a route on a random bearing, 10-30 km out, with two
/// intermediate waypoints at the 30% and 70% marks.
pub fn route(start_lat: f64, start_lng: f64) -> RoutePlan {
    let mut rng = rand::thread_rng();
    let angle = rng.r#gen::<f64>() * 2.0 * PI;
    let distance = 10.0 + rng.r#gen::<f64>() * 20.0;

    // Equirectangular offset: ~111 km per degree of latitude.
    let end_lat = start_lat + (distance / 111.0) * angle.cos();
    let end_lng = start_lng + (distance / (111.0 * (start_lat * PI / 180.0).cos())) * angle.sin();

    let waypoint = |frac: f64, name: &str, instruction: &str| Waypoint {
        name: name.to_string(),
        instruction: instruction.to_string(),
        lat: start_lat + (end_lat - start_lat) * frac,
        lng: start_lng + (end_lng - start_lng) * frac,
    };

    RoutePlan {
        end_location: "Safe Zone".to_string(),
        end_lat,
        end_lng,
        waypoints: vec![
            waypoint(0.3, "Highway Junction", "Take the main highway northbound"),
            waypoint(0.7, "Regional Route", "Continue on regional road"),
        ],
        distance,
        estimated_time: distance * 3.5,
        safety_rating: 0.7 + rng.r#gen::<f64>() * 0.25,
    }
}
