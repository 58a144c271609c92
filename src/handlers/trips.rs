// src/handlers/trips.rs
// DOCUMENTATION: HTTP handlers for a user's trips
// PURPOSE: Owner-scoped trip CRUD; every response embeds the destination place
//
// Another user's trip is indistinguishable from a missing one (404).

use crate::auth::AuthenticatedUser;
use crate::db::{PlaceRepository, TripRepository};
use crate::errors::TravelError;
use crate::models::{
    ApiResponse, CreateTripRequest, Trip, TripResponse, UpdateChecklistRequest, UpdateTripRequest,
};
use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// Attach each trip's place, loading all places in one query
async fn with_places(pool: &PgPool, trips: Vec<Trip>) -> Result<Vec<TripResponse>, TravelError> {
    let mut ids: Vec<Uuid> = trips.iter().map(|t| t.place_id).collect();
    ids.sort();
    ids.dedup();

    let places: HashMap<Uuid, _> = PlaceRepository::get_many(pool, &ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    Ok(trips
        .into_iter()
        .map(|trip| {
            let place = places.get(&trip.place_id).cloned();
            TripResponse { trip, place }
        })
        .collect())
}

/// Attach a single trip's place; a deleted place embeds as null
async fn with_place(pool: &PgPool, trip: Trip) -> Result<TripResponse, TravelError> {
    let place = match PlaceRepository::get_by_id(pool, trip.place_id).await {
        Ok(place) => Some(place),
        Err(TravelError::NotFound(_)) => None,
        Err(e) => return Err(e),
    };
    Ok(TripResponse { trip, place })
}

/// GET /api/trips
/// Newest first
pub async fn list_trips(
    user: AuthenticatedUser,
    pool: web::Data<PgPool>,
) -> Result<impl Responder, TravelError> {
    let trips = TripRepository::list_for_user(pool.get_ref(), user.id).await?;
    let trips = with_places(pool.get_ref(), trips).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::list(trips)))
}

/// GET /api/trips/upcoming
/// Next five trips starting today or later
pub async fn upcoming_trips(
    user: AuthenticatedUser,
    pool: web::Data<PgPool>,
) -> Result<impl Responder, TravelError> {
    let today = Utc::now().date_naive();
    let trips = TripRepository::upcoming_for_user(pool.get_ref(), user.id, today).await?;
    let trips = with_places(pool.get_ref(), trips).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::list(trips)))
}

/// GET /api/trips/{id}
pub async fn get_trip(
    user: AuthenticatedUser,
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, TravelError> {
    let trip = TripRepository::get_for_user(pool.get_ref(), path.into_inner(), user.id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(with_place(pool.get_ref(), trip).await?)))
}

/// POST /api/trips
/// The destination place must exist
pub async fn create_trip(
    user: AuthenticatedUser,
    pool: web::Data<PgPool>,
    req: web::Json<CreateTripRequest>,
) -> Result<impl Responder, TravelError> {
    req.validate()?;

    let place = PlaceRepository::get_by_id(pool.get_ref(), req.place_id).await?;
    let trip = TripRepository::create(pool.get_ref(), user.id, &req).await?;

    log::info!("User {} planned trip {} to {}", user.id, trip.id, place.name);
    Ok(HttpResponse::Created().json(ApiResponse::ok(TripResponse {
        trip,
        place: Some(place),
    })))
}

/// PUT /api/trips/{id}
/// Partial update; date order is checked on the merged trip
pub async fn update_trip(
    user: AuthenticatedUser,
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateTripRequest>,
) -> Result<impl Responder, TravelError> {
    req.validate()?;
    let req = req.into_inner();
    let mut trip = TripRepository::get_for_user(pool.get_ref(), path.into_inner(), user.id).await?;

    if let Some(place_id) = req.place_id.filter(|id| *id != trip.place_id) {
        PlaceRepository::get_by_id(pool.get_ref(), place_id).await?;
    }

    trip.apply_update(req).map_err(|e| {
        let mut errors = ValidationErrors::new();
        errors.add("endDate", e);
        TravelError::from(errors)
    })?;

    let trip = TripRepository::update(pool.get_ref(), &trip).await?;
    log::info!("User {} updated trip {}", user.id, trip.id);
    Ok(HttpResponse::Ok().json(ApiResponse::ok(with_place(pool.get_ref(), trip).await?)))
}

/// PUT /api/trips/{id}/checklist
pub async fn update_checklist(
    user: AuthenticatedUser,
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateChecklistRequest>,
) -> Result<impl Responder, TravelError> {
    req.validate()?;

    let trip = TripRepository::update_checklist(
        pool.get_ref(),
        path.into_inner(),
        user.id,
        &req.checklist,
    )
    .await?;

    log::info!("User {} updated checklist of trip {}", user.id, trip.id);
    Ok(HttpResponse::Ok().json(ApiResponse::ok(with_place(pool.get_ref(), trip).await?)))
}

/// DELETE /api/trips/{id}
pub async fn delete_trip(
    user: AuthenticatedUser,
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, TravelError> {
    let id = path.into_inner();
    TripRepository::delete(pool.get_ref(), id, user.id).await?;

    log::info!("User {} deleted trip {}", user.id, id);
    Ok(HttpResponse::Ok().json(ApiResponse::message("Trip deleted successfully")))
}

/// Configuration for trip routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/trips")
            .route("", web::get().to(list_trips))
            .route("", web::post().to(create_trip))
            .route("/upcoming", web::get().to(upcoming_trips))
            .route("/{id}", web::get().to(get_trip))
            .route("/{id}", web::put().to(update_trip))
            .route("/{id}", web::delete().to(delete_trip))
            .route("/{id}/checklist", web::put().to(update_checklist)),
    );
}
