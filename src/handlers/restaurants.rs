// src/handlers/restaurants.rs
// DOCUMENTATION: HTTP handlers for restaurants near a place

use crate::db::{PlaceRepository, RestaurantRepository};
use crate::errors::TravelError;
use crate::models::{ApiResponse, CreateRestaurantRequest};
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /api/restaurants/place/{place_id}
pub async fn restaurants_by_place(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, TravelError> {
    let restaurants =
        RestaurantRepository::list_by_place(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::list(restaurants)))
}

/// POST /api/restaurants
pub async fn create_restaurant(
    pool: web::Data<PgPool>,
    req: web::Json<CreateRestaurantRequest>,
) -> Result<impl Responder, TravelError> {
    req.validate()?;

    PlaceRepository::get_by_id(pool.get_ref(), req.place_id).await?;
    let restaurant = RestaurantRepository::create(pool.get_ref(), &req).await?;

    log::info!("Created restaurant {} for place {}", restaurant.name, restaurant.place_id);
    Ok(HttpResponse::Created().json(ApiResponse::ok(restaurant)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/restaurants")
            .route("", web::post().to(create_restaurant))
            .route("/place/{place_id}", web::get().to(restaurants_by_place)),
    );
}
