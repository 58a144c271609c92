// src/handlers/health.rs
// DOCUMENTATION: Service banner and health check
// PURPOSE: Verify service status and advertise the endpoint map

use crate::config::ping;
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;
use sqlx::PgPool;
use std::time::Instant;

/// Process start time, registered as app data in main
#[derive(Debug, Clone, Copy)]
pub struct Uptime(pub Instant);

/// GET /
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "GoTrip travel API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
        "endpoints": {
            "places": "/api/places",
            "trips": "/api/trips",
            "hotels": "/api/hotels",
            "restaurants": "/api/restaurants",
            "weather": "/api/weather",
            "distance": "/api/distance",
            "transport": "/api/transport",
            "ai": "/api/ai"
        }
    }))
}

/// GET /health
/// DOCUMENTATION: Always 200; database state is reported, not enforced
pub async fn health_check(
    pool: Option<web::Data<PgPool>>,
    uptime: Option<web::Data<Uptime>>,
) -> impl Responder {
    let connected = match pool {
        Some(pool) => ping(pool.get_ref()).await,
        None => false,
    };
    let uptime_secs = uptime.map(|u| u.0.elapsed().as_secs()).unwrap_or(0);

    HttpResponse::Ok().json(json!({
        "success": true,
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
        "uptime": uptime_secs,
        "database": if connected { "Connected" } else { "Disconnected" }
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_banner_lists_endpoints() {
        let app = test::init_service(App::new().configure(config)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["success"], true);
        assert_eq!(body["endpoints"]["weather"], "/api/weather");
    }

    #[actix_web::test]
    async fn test_health_without_database() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Uptime(Instant::now())))
                .configure(config),
        )
        .await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "Disconnected");
        assert_eq!(body["uptime"], 0);
    }
}
