#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! In-memory entity store for the disaster watch API.
//!
//! [`MemStore`] holds four keyed collections — alerts, user locations,
//! predictions, and evacuation routes — for the lifetime of the process.
//! The store assigns ids and creation timestamps at insert, performs no
//! validation (malformed input is rejected upstream), and signals "not
//! found" through `Option`/`bool` returns rather than errors.
//!
//! The original dashboard ran its store on a single-threaded event loop;
//! under a multi-threaded server each collection is guarded by its own
//! lock instead. There are no cross-collection transactions.

mod table;

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use disaster_watch_store_models::{
    Alert, AlertUpdate, EvacuationRoute, NewAlert, NewEvacuationRoute, NewPrediction,
    NewUserLocation, Prediction, UserLocation,
};
use table::{Stored, Table};
use uuid::Uuid;

impl Stored for Alert {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Stored for UserLocation {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Stored for Prediction {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Stored for EvacuationRoute {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Process-lifetime keyed storage for all four entity kinds.
///
/// Construct one per server (or per test) and inject it; there is no
/// global instance.
#[derive(Default)]
pub struct MemStore {
    alerts: Table<Alert>,
    locations: Table<UserLocation>,
    predictions: Table<Prediction>,
    routes: Table<EvacuationRoute>,
    /// Monotonic insertion counter shared by all collections; orders
    /// records that share a creation timestamp.
    next_seq: AtomicU64,
}

impl MemStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_seq(&self) -> u64 {
        self.next_seq.fetch_add(1, Ordering::Relaxed)
    }

    // ── Alerts ───────────────────────────────────────────

    /// All alerts, most recent first.
    #[must_use]
    pub fn all_alerts(&self) -> Vec<Alert> {
        self.alerts.all_desc()
    }

    /// The alert with the given id, if present.
    #[must_use]
    pub fn alert(&self, id: Uuid) -> Option<Alert> {
        self.alerts.get(id)
    }

    /// Stores a new alert, assigning its id and creation timestamp.
    pub fn create_alert(&self, new: NewAlert) -> Alert {
        let alert = Alert {
            id: Uuid::new_v4(),
            disaster_type: new.disaster_type,
            severity: new.severity,
            title: new.title,
            description: new.description,
            affected_regions: new.affected_regions,
            latitude: new.latitude,
            longitude: new.longitude,
            predicted_impact: new.predicted_impact,
            confidence: new.confidence,
            is_active: new.is_active,
            created_at: Utc::now(),
            expires_at: new.expires_at,
        };
        self.alerts.insert(alert.id, self.next_seq(), alert.clone());
        alert
    }

    /// Merges `update` onto the alert with the given id and returns the
    /// merged record, or `None` (with no side effect) when absent.
    pub fn update_alert(&self, id: Uuid, update: AlertUpdate) -> Option<Alert> {
        self.alerts.update(id, |alert| update.apply(alert))
    }

    /// Removes an alert. Returns whether a record existed and was removed.
    pub fn delete_alert(&self, id: Uuid) -> bool {
        self.alerts.remove(id)
    }

    // ── User locations ───────────────────────────────────

    /// All registered locations, most recent first.
    #[must_use]
    pub fn all_locations(&self) -> Vec<UserLocation> {
        self.locations.all_desc()
    }

    /// The location with the given id, if present.
    #[must_use]
    pub fn location(&self, id: Uuid) -> Option<UserLocation> {
        self.locations.get(id)
    }

    /// Stores a new user location.
    pub fn create_location(&self, new: NewUserLocation) -> UserLocation {
        let location = UserLocation {
            id: Uuid::new_v4(),
            name: new.name,
            latitude: new.latitude,
            longitude: new.longitude,
            radius: new.radius,
            notification_preferences: new.notification_preferences,
            created_at: Utc::now(),
        };
        self.locations
            .insert(location.id, self.next_seq(), location.clone());
        location
    }

    /// Removes a location. Returns whether a record existed and was removed.
    pub fn delete_location(&self, id: Uuid) -> bool {
        self.locations.remove(id)
    }

    // ── Predictions ──────────────────────────────────────

    /// All predictions, most recent first.
    #[must_use]
    pub fn all_predictions(&self) -> Vec<Prediction> {
        self.predictions.all_desc()
    }

    /// The prediction with the given id, if present.
    #[must_use]
    pub fn prediction(&self, id: Uuid) -> Option<Prediction> {
        self.predictions.get(id)
    }

    /// Stores a new prediction. Predictions are never deleted.
    pub fn create_prediction(&self, new: NewPrediction) -> Prediction {
        let prediction = Prediction {
            id: Uuid::new_v4(),
            disaster_type: new.disaster_type,
            location: new.location,
            latitude: new.latitude,
            longitude: new.longitude,
            probability: new.probability,
            confidence: new.confidence,
            contributing_factors: new.contributing_factors,
            data_sources: new.data_sources,
            predicted_time: new.predicted_time,
            created_at: Utc::now(),
        };
        self.predictions
            .insert(prediction.id, self.next_seq(), prediction.clone());
        prediction
    }

    // ── Evacuation routes ────────────────────────────────

    /// All evacuation routes, most recent first.
    #[must_use]
    pub fn all_routes(&self) -> Vec<EvacuationRoute> {
        self.routes.all_desc()
    }

    /// The route with the given id, if present.
    #[must_use]
    pub fn route(&self, id: Uuid) -> Option<EvacuationRoute> {
        self.routes.get(id)
    }

    /// Every route referencing `alert_id`, most recent first.
    ///
    /// `alert_id` is not checked against the alerts collection; routes for
    /// a deleted (or never-existing) alert are still returned.
    #[must_use]
    pub fn routes_by_alert(&self, alert_id: Uuid) -> Vec<EvacuationRoute> {
        self.routes.filter_desc(|route| route.alert_id == alert_id)
    }

    /// Stores a new route. Routes are never deleted.
    pub fn create_route(&self, new: NewEvacuationRoute) -> EvacuationRoute {
        let route = EvacuationRoute {
            id: Uuid::new_v4(),
            alert_id: new.alert_id,
            start_location: new.start_location,
            start_lat: new.start_lat,
            start_lng: new.start_lng,
            end_location: new.end_location,
            end_lat: new.end_lat,
            end_lng: new.end_lng,
            waypoints: new.waypoints,
            distance: new.distance,
            estimated_time: new.estimated_time,
            safety_rating: new.safety_rating,
            is_primary: new.is_primary,
            created_at: Utc::now(),
        };
        self.routes.insert(route.id, self.next_seq(), route.clone());
        route
    }
}
