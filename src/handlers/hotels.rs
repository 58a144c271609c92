// src/handlers/hotels.rs
// DOCUMENTATION: HTTP handlers for hotels near a place

use crate::db::{HotelRepository, PlaceRepository};
use crate::errors::TravelError;
use crate::models::{ApiResponse, CreateHotelRequest};
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /api/hotels/place/{place_id}
/// Best rated first, then closest
pub async fn hotels_by_place(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, TravelError> {
    let hotels = HotelRepository::list_by_place(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::list(hotels)))
}

/// POST /api/hotels
pub async fn create_hotel(
    pool: web::Data<PgPool>,
    req: web::Json<CreateHotelRequest>,
) -> Result<impl Responder, TravelError> {
    req.validate()?;

    PlaceRepository::get_by_id(pool.get_ref(), req.place_id).await?;
    let hotel = HotelRepository::create(pool.get_ref(), &req).await?;

    log::info!("Created hotel {} for place {}", hotel.name, hotel.place_id);
    Ok(HttpResponse::Created().json(ApiResponse::ok(hotel)))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/hotels")
            .route("", web::post().to(create_hotel))
            .route("/place/{place_id}", web::get().to(hotels_by_place)),
    );
}
