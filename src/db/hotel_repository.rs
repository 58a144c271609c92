// src/db/hotel_repository.rs
// DOCUMENTATION: Database access layer for hotels

use crate::errors::TravelError;
use crate::models::*;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const HOTEL_COLUMNS: &str = "id, name, place_id, price_range, rating, address, amenities, \
     booking_link, distance_from_place, image, created_at, updated_at";

#[derive(Debug, FromRow)]
struct HotelRow {
    pub id: Uuid,
    pub name: String,
    pub place_id: Uuid,
    pub price_range: PriceRange,
    pub rating: f64,
    pub address: String,
    pub amenities: Vec<String>,
    pub booking_link: String,
    pub distance_from_place: f64,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HotelRow {
    fn to_hotel(self) -> Hotel {
        Hotel {
            id: self.id,
            name: self.name,
            place_id: self.place_id,
            price_range: self.price_range,
            rating: self.rating,
            address: self.address,
            amenities: self.amenities,
            booking_link: self.booking_link,
            distance_from_place: self.distance_from_place,
            image: self.image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub struct HotelRepository;

impl HotelRepository {
    /// Hotels near a place: best rated first, then closest
    pub async fn list_by_place(pool: &PgPool, place_id: Uuid) -> Result<Vec<Hotel>, TravelError> {
        let sql = format!(
            "SELECT {} FROM hotels WHERE place_id = $1 \
             ORDER BY rating DESC, distance_from_place ASC",
            HOTEL_COLUMNS
        );

        let rows = sqlx::query_as::<_, HotelRow>(&sql)
            .bind(place_id)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to list hotels for place {}: {}", place_id, e);
                TravelError::DatabaseError(e.to_string())
            })?;

        log::debug!("Found {} hotels for place {}", rows.len(), place_id);
        Ok(rows.into_iter().map(|r| r.to_hotel()).collect())
    }

    pub async fn create(pool: &PgPool, req: &CreateHotelRequest) -> Result<Hotel, TravelError> {
        let sql = format!(
            r#"
            INSERT INTO hotels (
                name, place_id, price_range, rating, address, amenities,
                booking_link, distance_from_place, image
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            HOTEL_COLUMNS
        );

        let row = sqlx::query_as::<_, HotelRow>(&sql)
            .bind(&req.name)
            .bind(req.place_id)
            .bind(req.price_range)
            .bind(req.rating)
            .bind(&req.address)
            .bind(&req.amenities)
            .bind(&req.booking_link)
            .bind(req.distance_from_place)
            .bind(&req.image)
            .fetch_one(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to create hotel: {}", e);
                TravelError::DatabaseError(e.to_string())
            })?;

        log::info!("Created hotel {} for place {}", row.id, row.place_id);
        Ok(row.to_hotel())
    }
}
