// src/db/restaurant_repository.rs
// DOCUMENTATION: Database access layer for restaurants

use crate::errors::TravelError;
use crate::models::*;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const RESTAURANT_COLUMNS: &str = "id, name, place_id, price_range, rating, address, cuisine_type, \
     menu_link, distance_from_place, image, created_at, updated_at";

#[derive(Debug, FromRow)]
struct RestaurantRow {
    pub id: Uuid,
    pub name: String,
    pub place_id: Uuid,
    pub price_range: PriceRange,
    pub rating: f64,
    pub address: String,
    pub cuisine_type: Vec<String>,
    pub menu_link: String,
    pub distance_from_place: f64,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RestaurantRow {
    fn to_restaurant(self) -> Restaurant {
        Restaurant {
            id: self.id,
            name: self.name,
            place_id: self.place_id,
            price_range: self.price_range,
            rating: self.rating,
            address: self.address,
            cuisine_type: self.cuisine_type,
            menu_link: self.menu_link,
            distance_from_place: self.distance_from_place,
            image: self.image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub struct RestaurantRepository;

impl RestaurantRepository {
    pub async fn list_by_place(
        pool: &PgPool,
        place_id: Uuid,
    ) -> Result<Vec<Restaurant>, TravelError> {
        let sql = format!(
            "SELECT {} FROM restaurants WHERE place_id = $1 \
             ORDER BY rating DESC, distance_from_place ASC",
            RESTAURANT_COLUMNS
        );

        let rows = sqlx::query_as::<_, RestaurantRow>(&sql)
            .bind(place_id)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to list restaurants for place {}: {}", place_id, e);
                TravelError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(|r| r.to_restaurant()).collect())
    }

    pub async fn create(
        pool: &PgPool,
        req: &CreateRestaurantRequest,
    ) -> Result<Restaurant, TravelError> {
        let sql = format!(
            r#"
            INSERT INTO restaurants (
                name, place_id, price_range, rating, address, cuisine_type,
                menu_link, distance_from_place, image
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            RESTAURANT_COLUMNS
        );

        let row = sqlx::query_as::<_, RestaurantRow>(&sql)
            .bind(&req.name)
            .bind(req.place_id)
            .bind(req.price_range)
            .bind(req.rating)
            .bind(&req.address)
            .bind(&req.cuisine_type)
            .bind(&req.menu_link)
            .bind(req.distance_from_place)
            .bind(&req.image)
            .fetch_one(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to create restaurant: {}", e);
                TravelError::DatabaseError(e.to_string())
            })?;

        log::info!("Created restaurant {} for place {}", row.id, row.place_id);
        Ok(row.to_restaurant())
    }
}
