// src/handlers/ai.rs
// DOCUMENTATION: AI planning endpoints (authenticated)

use crate::auth::AuthenticatedUser;
use crate::errors::TravelError;
use crate::models::{PackingListRequest, RecommendTripRequest, SafetyTipsRequest};
use crate::services::{AiService, Integrations};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// POST /api/ai/recommend-trip
pub async fn recommend_trip(
    user: AuthenticatedUser,
    integrations: web::Data<Integrations>,
    req: web::Json<RecommendTripRequest>,
) -> Result<impl Responder, TravelError> {
    req.validate()?;
    log::debug!("User {} requested a {}-day plan for {}", user.id, req.days, req.place);

    let plan = AiService::recommend_trip(&integrations.gemini, &req).await;
    Ok(HttpResponse::Ok().json(plan.into_response()))
}

/// POST /api/ai/packing-list
pub async fn packing_list(
    user: AuthenticatedUser,
    integrations: web::Data<Integrations>,
    req: web::Json<PackingListRequest>,
) -> Result<impl Responder, TravelError> {
    req.validate()?;
    log::debug!("User {} requested a packing list for {}", user.id, req.destination);

    let list = AiService::packing_list(&integrations.gemini, &req).await;
    Ok(HttpResponse::Ok().json(list.into_response()))
}

/// POST /api/ai/safety-tips
pub async fn safety_tips(
    user: AuthenticatedUser,
    integrations: web::Data<Integrations>,
    req: web::Json<SafetyTipsRequest>,
) -> Result<impl Responder, TravelError> {
    req.validate()?;
    log::debug!("User {} requested safety tips for {}", user.id, req.destination);

    let tips = AiService::safety_tips(&integrations.gemini, &req).await;
    Ok(HttpResponse::Ok().json(tips.into_response()))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/ai")
            .route("/recommend-trip", web::post().to(recommend_trip))
            .route("/packing-list", web::post().to(packing_list))
            .route("/safety-tips", web::post().to(safety_tips)),
    );
}
