//! HTTP handler functions for the disaster watch API.

use actix_web::{HttpResponse, web};
use chrono::{Duration, Utc};
use disaster_watch_disaster_models::SeverityLevel;
use disaster_watch_server_models::{ApiHealth, ApiMessage, PredictionRequest, RouteRequest};
use disaster_watch_store_models::{
    AlertUpdate, NewAlert, NewEvacuationRoute, NewPrediction, NewUserLocation,
};
use uuid::Uuid;

use crate::AppState;

/// Data-source labels attached to every generated prediction.
const DATA_SOURCES: &[&str] = &[
    "Weather API",
    "Satellite Imagery",
    "Historical Data",
    "Climate Models",
];

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/alerts`
pub async fn alerts(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.store.all_alerts())
}

/// `GET /api/alerts/{id}`
pub async fn alert(state: web::Data<AppState>, id: web::Path<Uuid>) -> HttpResponse {
    state.store.alert(*id).map_or_else(
        || not_found("Alert not found"),
        |alert| HttpResponse::Ok().json(alert),
    )
}

/// `POST /api/alerts`
///
/// Stores a caller-supplied alert. Id and creation timestamp are assigned
/// by the store; validation beyond the type shape happened upstream.
pub async fn create_alert(state: web::Data<AppState>, body: web::Json<NewAlert>) -> HttpResponse {
    HttpResponse::Ok().json(state.store.create_alert(body.into_inner()))
}

/// `PATCH /api/alerts/{id}`
///
/// Merges the supplied fields onto the alert; absent fields are left
/// untouched.
pub async fn update_alert(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<AlertUpdate>,
) -> HttpResponse {
    state.store.update_alert(*id, body.into_inner()).map_or_else(
        || not_found("Alert not found"),
        |alert| HttpResponse::Ok().json(alert),
    )
}

/// `DELETE /api/alerts/{id}`
pub async fn delete_alert(state: web::Data<AppState>, id: web::Path<Uuid>) -> HttpResponse {
    if state.store.delete_alert(*id) {
        HttpResponse::Ok().json(ApiMessage::ok())
    } else {
        not_found("Alert not found")
    }
}

/// `GET /api/locations`
pub async fn locations(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.store.all_locations())
}

/// `POST /api/locations`
pub async fn create_location(
    state: web::Data<AppState>,
    body: web::Json<NewUserLocation>,
) -> HttpResponse {
    HttpResponse::Ok().json(state.store.create_location(body.into_inner()))
}

/// `DELETE /api/locations/{id}`
pub async fn delete_location(state: web::Data<AppState>, id: web::Path<Uuid>) -> HttpResponse {
    if state.store.delete_location(*id) {
        HttpResponse::Ok().json(ApiMessage::ok())
    } else {
        not_found("Location not found")
    }
}

/// `GET /api/predictions`
pub async fn predictions(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.store.all_predictions())
}

/// `POST /api/predictions`
///
/// Runs the generator for the requested location, stores the resulting
/// prediction, and auto-creates an active alert when the probability
/// crosses 0.6.
pub async fn create_prediction(
    state: web::Data<AppState>,
    body: web::Json<PredictionRequest>,
) -> HttpResponse {
    let req = body.into_inner();
    let forecast = state
        .generator
        .predict(&req.location, req.latitude, req.longitude)
        .await;

    let prediction = state.store.create_prediction(NewPrediction {
        disaster_type: forecast.disaster_type,
        location: req.location.clone(),
        latitude: req.latitude,
        longitude: req.longitude,
        probability: forecast.probability,
        confidence: forecast.confidence,
        contributing_factors: forecast.contributing_factors,
        data_sources: DATA_SOURCES.iter().map(|s| (*s).to_string()).collect(),
        predicted_time: Utc::now() + Duration::hours(24),
    });

    if forecast.probability > 0.6 {
        let severity = if forecast.probability > 0.8 {
            SeverityLevel::Critical
        } else if forecast.probability > 0.7 {
            SeverityLevel::High
        } else {
            SeverityLevel::Moderate
        };

        state.store.create_alert(NewAlert {
            disaster_type: forecast.disaster_type,
            severity,
            title: format!(
                "{} Warning - {}",
                forecast.disaster_type.to_string().to_uppercase(),
                req.location
            ),
            description: forecast.reasoning,
            affected_regions: vec![req.location],
            latitude: req.latitude,
            longitude: req.longitude,
            predicted_impact: format!("{severity} impact expected in the region"),
            confidence: forecast.confidence,
            is_active: true,
            expires_at: Some(Utc::now() + Duration::hours(48)),
        });
    }

    HttpResponse::Ok().json(prediction)
}

/// `GET /api/routes`
pub async fn routes(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.store.all_routes())
}

/// `GET /api/routes/alert/{alert_id}`
pub async fn routes_by_alert(
    state: web::Data<AppState>,
    alert_id: web::Path<Uuid>,
) -> HttpResponse {
    HttpResponse::Ok().json(state.store.routes_by_alert(*alert_id))
}

/// `POST /api/routes`
///
/// Generates and stores three evacuation routes for the alert: one
/// primary and two alternatives. Responds with all three, primary first.
pub async fn create_routes(
    state: web::Data<AppState>,
    body: web::Json<RouteRequest>,
) -> HttpResponse {
    let req = body.into_inner();
    let Some(alert) = state.store.alert(req.alert_id) else {
        return not_found("Alert not found");
    };

    let mut stored = Vec::with_capacity(3);
    for is_primary in [true, false, false] {
        let plan = state
            .generator
            .evacuation_route(
                req.start_lat,
                req.start_lng,
                alert.disaster_type,
                alert.severity,
            )
            .await;

        stored.push(state.store.create_route(NewEvacuationRoute {
            alert_id: req.alert_id,
            start_location: req.start_location.clone(),
            start_lat: req.start_lat,
            start_lng: req.start_lng,
            end_location: plan.end_location,
            end_lat: plan.end_lat,
            end_lng: plan.end_lng,
            waypoints: plan.waypoints,
            distance: plan.distance,
            estimated_time: plan.estimated_time,
            safety_rating: plan.safety_rating,
            is_primary,
        }));
    }

    HttpResponse::Ok().json(stored)
}

/// `GET /api/analytics`
pub async fn analytics(state: web::Data<AppState>) -> HttpResponse {
    let data = disaster_watch_analytics::analytics(
        &state.store.all_predictions(),
        &state.store.all_alerts(),
    );
    HttpResponse::Ok().json(data)
}

/// `GET /api/stats`
pub async fn stats(state: web::Data<AppState>) -> HttpResponse {
    let summary =
        disaster_watch_analytics::stats(&state.store.all_predictions(), &state.store.all_alerts());
    HttpResponse::Ok().json(summary)
}

/// `POST /api/init-data`
///
/// Seeds the store with sample predictions and alerts for the demo
/// locations.
pub async fn init_data(state: web::Data<AppState>) -> HttpResponse {
    crate::seed::sample_data(&state.store, &state.generator).await;
    HttpResponse::Ok().json(ApiMessage::with_message("Sample data initialized"))
}

fn not_found(message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": message }))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use disaster_watch_ai::Generator;
    use disaster_watch_analytics_models::{AnalyticsData, StatsSummary};
    use disaster_watch_disaster_models::{DisasterType, SeverityLevel};
    use disaster_watch_store::MemStore;
    use disaster_watch_store_models::{Alert, EvacuationRoute, Prediction, UserLocation};
    use serde_json::json;

    use crate::{AppState, configure};

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState {
            store: MemStore::new(),
            generator: Generator::synthetic(),
        })
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(App::new().app_data($state.clone()).configure(configure)).await
        };
    }

    fn alert_body() -> serde_json::Value {
        json!({
            "disaster_type": "cyclone",
            "severity": "high",
            "title": "Cyclone Warning - Chennai",
            "description": "Deep depression intensifying over the bay",
            "affected_regions": ["Chennai"],
            "latitude": 13.0827,
            "longitude": 80.2707,
            "predicted_impact": "High impact expected",
            "confidence": 0.85
        })
    }

    #[actix_web::test]
    async fn creates_and_lists_alerts() {
        let state = state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/alerts")
            .set_json(alert_body())
            .to_request();
        let created: Alert = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.disaster_type, DisasterType::Cyclone);
        assert!(created.is_active);

        let req = test::TestRequest::get().uri("/api/alerts").to_request();
        let listed: Vec<Alert> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
    }

    #[actix_web::test]
    async fn unknown_alert_id_is_404() {
        let state = state();
        let app = app!(state);

        let req = test::TestRequest::get()
            .uri(&format!("/api/alerts/{}", uuid::Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn patch_toggles_activity_only() {
        let state = state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/alerts")
            .set_json(alert_body())
            .to_request();
        let created: Alert = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/alerts/{}", created.id))
            .set_json(json!({ "is_active": false }))
            .to_request();
        let updated: Alert = test::call_and_read_body_json(&app, req).await;
        assert!(!updated.is_active);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[actix_web::test]
    async fn deleting_a_location_twice_is_404() {
        let state = state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/locations")
            .set_json(json!({
                "name": "Home",
                "latitude": 22.5726,
                "longitude": 88.3639,
                "notification_preferences": ["flood"]
            }))
            .to_request();
        let location: UserLocation = test::call_and_read_body_json(&app, req).await;

        let uri = format!("/api/locations/{}", location.id);
        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), 200);

        let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn prediction_request_stores_a_prediction() {
        let state = state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/predictions")
            .set_json(json!({
                "location": "Mumbai",
                "latitude": 19.076,
                "longitude": 72.8777
            }))
            .to_request();
        let prediction: Prediction = test::call_and_read_body_json(&app, req).await;

        assert_eq!(prediction.location, "Mumbai");
        assert_eq!(prediction.data_sources.len(), 4);
        assert!(prediction.predicted_time > prediction.created_at);
        assert_eq!(state.store.all_predictions().len(), 1);

        // The synthetic generator caps probability below 0.8, so any
        // auto-created alert must be moderate or high, never critical.
        for alert in state.store.all_alerts() {
            assert!(alert.is_active);
            assert!(alert.severity <= SeverityLevel::High);
        }
    }

    #[actix_web::test]
    async fn route_request_fans_out_one_primary_and_two_alternatives() {
        let state = state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/alerts")
            .set_json(alert_body())
            .to_request();
        let alert: Alert = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/routes")
            .set_json(json!({
                "alert_id": alert.id,
                "start_location": "Chennai",
                "start_lat": 13.0827,
                "start_lng": 80.2707
            }))
            .to_request();
        let routes: Vec<EvacuationRoute> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(routes.len(), 3);
        assert!(routes[0].is_primary);
        assert!(!routes[1].is_primary);
        assert!(!routes[2].is_primary);
        assert!(routes.iter().all(|r| r.alert_id == alert.id));

        let req = test::TestRequest::get()
            .uri(&format!("/api/routes/alert/{}", alert.id))
            .to_request();
        let by_alert: Vec<EvacuationRoute> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(by_alert.len(), 3);
    }

    #[actix_web::test]
    async fn route_request_for_unknown_alert_is_404() {
        let state = state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/routes")
            .set_json(json!({
                "alert_id": uuid::Uuid::new_v4(),
                "start_location": "Chennai",
                "start_lat": 13.0827,
                "start_lng": 80.2707
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn analytics_and_stats_reflect_the_store() {
        let state = state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/api/alerts")
            .set_json(alert_body())
            .to_request();
        let _: Alert = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get().uri("/api/analytics").to_request();
        let data: AnalyticsData = test::call_and_read_body_json(&app, req).await;
        assert_eq!(data.active_alerts, 1);
        assert_eq!(data.total_predictions, 0);
        assert_eq!(data.accuracy_trend.len(), 7);

        let req = test::TestRequest::get().uri("/api/stats").to_request();
        let summary: StatsSummary = test::call_and_read_body_json(&app, req).await;
        assert_eq!(summary.active_alerts, 1);
        assert_eq!(summary.high_risk_areas, 1);
    }

    #[actix_web::test]
    async fn init_data_seeds_predictions_for_each_demo_location() {
        let state = state();
        let app = app!(state);

        let req = test::TestRequest::post().uri("/api/init-data").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        assert_eq!(state.store.all_predictions().len(), 4);
    }
}
