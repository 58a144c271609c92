// src/handlers/transport.rs
// DOCUMENTATION: Flight, train and transport-advice endpoints

use super::params;
use crate::errors::TravelError;
use crate::models::{TransportQuery, TransportRecommendationRequest};
use crate::services::{Integrations, TransportService};
use actix_web::{web, HttpResponse, Responder};
use chrono::NaiveDate;
use validator::Validate;

/// Route and travel date; all three are required
fn route(query: &TransportQuery) -> Result<(&str, &str, NaiveDate), TravelError> {
    let from = params::required("from", &query.from)?;
    let to = params::required("to", &query.to)?;
    let date = params::date("date", &query.date)?;
    Ok((from, to, date))
}

/// GET /api/transport/flights?from&to&date
pub async fn flights(
    integrations: web::Data<Integrations>,
    query: web::Query<TransportQuery>,
) -> Result<impl Responder, TravelError> {
    let (from, to, date) = route(&query)?;
    let flights = TransportService::flights(&integrations.flights, from, to, date).await;
    Ok(HttpResponse::Ok().json(flights.into_response()))
}

/// GET /api/transport/trains?from&to&date
pub async fn trains(query: web::Query<TransportQuery>) -> Result<impl Responder, TravelError> {
    let (from, to, date) = route(&query)?;
    Ok(HttpResponse::Ok().json(TransportService::trains(from, to, date).into_response()))
}

/// POST /api/transport/recommendations
pub async fn recommendations(
    integrations: web::Data<Integrations>,
    req: web::Json<TransportRecommendationRequest>,
) -> Result<impl Responder, TravelError> {
    req.validate()?;
    let advice = TransportService::recommendations(&integrations.gemini, &req).await;
    Ok(HttpResponse::Ok().json(advice.into_response()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/transport")
            .route("/flights", web::get().to(flights))
            .route("/trains", web::get().to(trains))
            .route("/recommendations", web::post().to(recommendations)),
    );
}
