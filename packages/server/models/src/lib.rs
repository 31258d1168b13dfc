#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the disaster watch server.
//!
//! Entity bodies reuse the store model types directly; this crate holds
//! the shapes that exist only at the HTTP boundary.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Service version.
    pub version: String,
}

/// Body for `POST /api/predictions`: where to assess risk. The forecast
/// itself comes from the generator, not the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Location name.
    pub location: String,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
}

/// Body for `POST /api/routes`: where evacuation starts. Destination and
/// waypoints come from the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRequest {
    /// The alert to evacuate from.
    pub alert_id: Uuid,
    /// Starting location name.
    pub start_location: String,
    /// Starting latitude.
    pub start_lat: f64,
    /// Starting longitude.
    pub start_lng: f64,
}

/// Generic success/message response, e.g. for deletes and seeding.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Optional human-readable detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiMessage {
    /// A bare success response.
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// A success response with detail text.
    #[must_use]
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }
}
