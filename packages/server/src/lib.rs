#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the disaster watch dashboard.
//!
//! Serves the REST API over the in-memory entity store and the static
//! dashboard frontend. Risk predictions and evacuation routes are
//! delegated to the generator crate, which falls back to synthetic data
//! when no model credentials are configured.

pub mod handlers;
pub mod seed;

use actix_web::web;
use disaster_watch_ai::Generator;
use disaster_watch_store::MemStore;

/// Shared application state, injected via [`web::Data`]. One store per
/// server process; tests construct their own.
pub struct AppState {
    /// The in-memory entity store.
    pub store: MemStore,
    /// Forecast and route generator.
    pub generator: Generator,
}

/// Registers the `/api` routes on an actix-web app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/alerts", web::get().to(handlers::alerts))
            .route("/alerts", web::post().to(handlers::create_alert))
            .route("/alerts/{id}", web::get().to(handlers::alert))
            .route("/alerts/{id}", web::patch().to(handlers::update_alert))
            .route("/alerts/{id}", web::delete().to(handlers::delete_alert))
            .route("/locations", web::get().to(handlers::locations))
            .route("/locations", web::post().to(handlers::create_location))
            .route(
                "/locations/{id}",
                web::delete().to(handlers::delete_location),
            )
            .route("/predictions", web::get().to(handlers::predictions))
            .route("/predictions", web::post().to(handlers::create_prediction))
            .route("/routes", web::get().to(handlers::routes))
            .route(
                "/routes/alert/{alert_id}",
                web::get().to(handlers::routes_by_alert),
            )
            .route("/routes", web::post().to(handlers::create_routes))
            .route("/analytics", web::get().to(handlers::analytics))
            .route("/stats", web::get().to(handlers::stats))
            .route("/init-data", web::post().to(handlers::init_data)),
    );
}
