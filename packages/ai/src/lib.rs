#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Generative-AI disaster forecasts and evacuation routes.
//!
//! [`Generator`] wraps the Gemini `generateContent` API with
//! JSON-schema-constrained responses. Its public operations are
//! infallible: any failure — missing API key, HTTP error, malformed
//! model output — is logged and replaced by a pseudo-random synthetic
//! result, so the dashboard keeps working in demo setups without
//! credentials.

mod fallback;
mod gemini;

use std::collections::BTreeMap;

use disaster_watch_disaster_models::{DisasterType, SeverityLevel};
use disaster_watch_store_models::Waypoint;
use serde::Deserialize;
use thiserror::Error;

use gemini::GeminiClient;

/// Errors on the fallible path of a generation request.
#[derive(Debug, Error)]
pub enum AiError {
    /// HTTP request to the model API failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Model API returned an error or an unusable response.
    #[error("Provider error: {message}")]
    Provider {
        /// Description of what went wrong.
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// Description.
        message: String,
    },
}

/// A disaster risk forecast for one location.
#[derive(Debug, Clone, Deserialize)]
pub struct DisasterForecast {
    /// Most likely disaster type.
    pub disaster_type: DisasterType,
    /// Probability of occurrence, 0..=1.
    pub probability: f64,
    /// Model confidence in the probability, 0..=1.
    pub confidence: f64,
    /// Named contributing signals with weights in 0..=1.
    pub contributing_factors: BTreeMap<String, f64>,
    /// Brief explanation of the forecast.
    pub reasoning: String,
}

/// A generated evacuation route away from a disaster zone.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutePlan {
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
}

/// Default model for risk forecasts.
const PREDICT_MODEL: &str = "gemini-2.5-pro";
/// Default model for route generation; routes are cheaper and latency
/// matters more, so the flash tier is enough.
const ROUTE_MODEL: &str = "gemini-2.5-flash";

/// Forecast and route generator backed by Gemini with a synthetic
/// fallback.
pub struct Generator {
    gemini: Option<GeminiClient>,
    predict_model: String,
    route_model: String,
}

impl Generator {
    /// Creates a generator from the environment.
    ///
    /// Reads `GEMINI_API_KEY` (optional — without it every request uses
    /// the synthetic fallback) and `GEMINI_MODEL` (overrides the model
    /// for both operations).
    #[must_use]
    pub fn from_env() -> Self {
        let gemini = match std::env::var("GEMINI_API_KEY") {
            Ok(key) if !key.is_empty() => Some(GeminiClient::new(key)),
            _ => {
                log::warn!(
                    "GEMINI_API_KEY not set; predictions and routes will use synthetic fallback data"
                );
                None
            }
        };
        let model_override = std::env::var("GEMINI_MODEL").ok();
        Self {
            gemini,
            predict_model: model_override
                .clone()
                .unwrap_or_else(|| PREDICT_MODEL.to_string()),
            route_model: model_override.unwrap_or_else(|| ROUTE_MODEL.to_string()),
        }
    }

    /// Creates a generator that always produces synthetic results.
    #[must_use]
    pub fn synthetic() -> Self {
        Self {
            gemini: None,
            predict_model: PREDICT_MODEL.to_string(),
            route_model: ROUTE_MODEL.to_string(),
        }
    }

    /// Forecasts the disaster risk for a location. Never fails; falls back
    /// to a synthetic forecast when the model call does.
    pub async fn predict(&self, location: &str, latitude: f64, longitude: f64) -> DisasterForecast {
        match self.try_predict(location, latitude, longitude).await {
            Ok(forecast) => forecast,
            Err(e) => {
                log::error!("Disaster prediction for {location} failed, using fallback: {e}");
                fallback::forecast()
            }
        }
    }

    /// Generates an evacuation route away from the danger zone. Never
    /// fails; falls back to a synthetic route when the model call does.
    pub async fn evacuation_route(
        &self,
        start_lat: f64,
        start_lng: f64,
        disaster_type: DisasterType,
        severity: SeverityLevel,
    ) -> RoutePlan {
        match self
            .try_evacuation_route(start_lat, start_lng, disaster_type, severity)
            .await
        {
            Ok(plan) => plan,
            Err(e) => {
                log::error!("Route generation failed, using fallback: {e}");
                fallback::route(start_lat, start_lng)
            }
        }
    }

    async fn try_predict(
        &self,
        location: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<DisasterForecast, AiError> {
        let gemini = self.gemini.as_ref().ok_or_else(|| AiError::Config {
            message: "GEMINI_API_KEY not set".to_string(),
        })?;

        let system = "You are an expert disaster prediction AI system. \
Analyze the given location and environmental data to predict potential disasters. \
Consider factors like geography, climate patterns, historical incidents, and \
current conditions. Respond with JSON only.";

        let prompt = format!(
            "Analyze disaster risk for:\nLocation: {location}\n\
             Coordinates: {latitude}, {longitude}\n\n\
             Provide a comprehensive disaster risk assessment."
        );

        gemini
            .generate(
                &self.predict_model,
                system,
                &prompt,
                forecast_response_schema(),
            )
            .await
    }

    async fn try_evacuation_route(
        &self,
        start_lat: f64,
        start_lng: f64,
        disaster_type: DisasterType,
        severity: SeverityLevel,
    ) -> Result<RoutePlan, AiError> {
        let gemini = self.gemini.as_ref().ok_or_else(|| AiError::Config {
            message: "GEMINI_API_KEY not set".to_string(),
        })?;

        let system = "You are an evacuation route planning AI. Generate a safe \
evacuation route away from the disaster zone. Consider the disaster type, \
severity, and optimal safe locations. Respond with JSON only.";

        let prompt = format!(
            "Generate an evacuation route from coordinates {start_lat}, {start_lng}.\n\
             Disaster type: {disaster_type}\nSeverity: {severity}\n\n\
             The route should move away from the danger zone to a safe location."
        );

        gemini
            .generate(&self.route_model, system, &prompt, route_response_schema())
            .await
    }
}

/// JSON schema constraining the forecast response shape.
fn forecast_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "disaster_type": {
                "type": "string",
                "enum": ["flood", "cyclone", "heavy_rainfall", "earthquake", "wildfire"],
            },
            "probability": { "type": "number" },
            "confidence": { "type": "number" },
            "contributing_factors": {
                "type": "object",
                "properties": {
                    "weather_patterns": { "type": "number" },
                    "geographical_risk": { "type": "number" },
                    "historical_frequency": { "type": "number" },
                    "seasonal_trends": { "type": "number" },
                    "climate_indicators": { "type": "number" },
                },
            },
            "reasoning": { "type": "string" },
        },
        "required": [
            "disaster_type",
            "probability",
            "confidence",
            "contributing_factors",
            "reasoning",
        ],
    })
}

/// JSON schema constraining the route response shape.
fn route_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "end_location": { "type": "string" },
            "end_lat": { "type": "number" },
            "end_lng": { "type": "number" },
            "waypoints": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "instruction": { "type": "string" },
                        "lat": { "type": "number" },
                        "lng": { "type": "number" },
                    },
                    "required": ["name", "instruction", "lat", "lng"],
                },
            },
            "distance": { "type": "number" },
            "estimated_time": { "type": "number" },
            "safety_rating": { "type": "number" },
        },
        "required": [
            "end_location",
            "end_lat",
            "end_lng",
            "waypoints",
            "distance",
            "estimated_time",
            "safety_rating",
        ],
    })
}
