// src/handlers/distance.rs
// DOCUMENTATION: Distance endpoint

use super::params;
use crate::errors::TravelError;
use crate::models::DistanceQuery;
use crate::services::{DistanceService, Integrations};
use actix_web::{web, HttpResponse, Responder};

const MISSING_COORDINATES: &str = "startLat, startLng, endLat and endLng are required";

fn endpoints(query: &DistanceQuery) -> Result<((f64, f64), (f64, f64)), TravelError> {
    let start_lat = params::latitude("startLat", &query.start_lat)?;
    let start_lng = params::longitude("startLng", &query.start_lng)?;
    let end_lat = params::latitude("endLat", &query.end_lat)?;
    let end_lng = params::longitude("endLng", &query.end_lng)?;

    match (start_lat, start_lng, end_lat, end_lng) {
        (Some(a), Some(b), Some(c), Some(d)) => Ok(((a, b), (c, d))),
        _ => Err(TravelError::InvalidInput(MISSING_COORDINATES.to_string())),
    }
}

/// GET /api/distance/calculate?startLat&startLng&endLat&endLng
pub async fn calculate_distance(
    integrations: web::Data<Integrations>,
    query: web::Query<DistanceQuery>,
) -> Result<impl Responder, TravelError> {
    let (start, end) = endpoints(&query)?;
    let result = DistanceService::calculate(&integrations.routing, start, end).await;
    Ok(HttpResponse::Ok().json(result.into_response()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/distance/calculate", web::get().to(calculate_distance));
}
