// src/db/trip_repository.rs
// DOCUMENTATION: Database access layer for trips
// PURPOSE: Every query is scoped to the owning user; other users' trips look missing

use crate::errors::TravelError;
use crate::models::*;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const TRIP_COLUMNS: &str = "id, user_id, place_id, start_date, end_date, budget, \
     preferred_transport, checklist, ai_recommendations, created_at, updated_at";

const UPCOMING_LIMIT: i64 = 5;

/// Checklist and AI output live in JSONB columns
#[derive(Debug, FromRow)]
struct TripRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub place_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: BudgetTier,
    pub preferred_transport: TransportMode,
    pub checklist: Json<Vec<ChecklistItem>>,
    pub ai_recommendations: Json<TripAiRecommendations>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TripRow {
    fn to_trip(self) -> Trip {
        Trip {
            id: self.id,
            user_id: self.user_id,
            place_id: self.place_id,
            start_date: self.start_date,
            end_date: self.end_date,
            budget: self.budget,
            preferred_transport: self.preferred_transport,
            checklist: self.checklist.0,
            ai_recommendations: self.ai_recommendations.0,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn trip_not_found() -> TravelError {
    TravelError::NotFound("Trip".to_string())
}

pub struct TripRepository;

impl TripRepository {
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        req: &CreateTripRequest,
    ) -> Result<Trip, TravelError> {
        let sql = format!(
            r#"
            INSERT INTO trips (user_id, place_id, start_date, end_date, budget, preferred_transport, checklist)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            TRIP_COLUMNS
        );

        let row = sqlx::query_as::<_, TripRow>(&sql)
            .bind(user_id)
            .bind(req.place_id)
            .bind(req.start_date)
            .bind(req.end_date)
            .bind(req.budget)
            .bind(req.preferred_transport)
            .bind(Json(&req.checklist))
            .fetch_one(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to create trip: {}", e);
                TravelError::DatabaseError(e.to_string())
            })?;

        log::info!("Created trip {} for user {}", row.id, user_id);
        Ok(row.to_trip())
    }

    /// All trips of a user, newest first
    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<Trip>, TravelError> {
        let sql = format!(
            "SELECT {} FROM trips WHERE user_id = $1 ORDER BY created_at DESC",
            TRIP_COLUMNS
        );

        let rows = sqlx::query_as::<_, TripRow>(&sql)
            .bind(user_id)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to list trips for user {}: {}", user_id, e);
                TravelError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(|r| r.to_trip()).collect())
    }

    /// Next trips starting on or after `today`, soonest first
    pub async fn upcoming_for_user(
        pool: &PgPool,
        user_id: Uuid,
        today: NaiveDate,
    ) -> Result<Vec<Trip>, TravelError> {
        let sql = format!(
            "SELECT {} FROM trips WHERE user_id = $1 AND start_date >= $2 \
             ORDER BY start_date ASC LIMIT $3",
            TRIP_COLUMNS
        );

        let rows = sqlx::query_as::<_, TripRow>(&sql)
            .bind(user_id)
            .bind(today)
            .bind(UPCOMING_LIMIT)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to list upcoming trips for user {}: {}", user_id, e);
                TravelError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(|r| r.to_trip()).collect())
    }

    pub async fn get_for_user(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<Trip, TravelError> {
        let sql = format!("SELECT {} FROM trips WHERE id = $1 AND user_id = $2", TRIP_COLUMNS);

        let row = sqlx::query_as::<_, TripRow>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching trip {}: {}", id, e);
                TravelError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| {
                log::warn!("Trip {} not found for user {}", id, user_id);
                trip_not_found()
            })?;

        Ok(row.to_trip())
    }

    /// Persist a fully merged trip
    pub async fn update(pool: &PgPool, trip: &Trip) -> Result<Trip, TravelError> {
        let sql = format!(
            r#"
            UPDATE trips
            SET place_id = $1,
                start_date = $2,
                end_date = $3,
                budget = $4,
                preferred_transport = $5,
                checklist = $6,
                ai_recommendations = $7,
                updated_at = NOW()
            WHERE id = $8 AND user_id = $9
            RETURNING {}
            "#,
            TRIP_COLUMNS
        );

        let row = sqlx::query_as::<_, TripRow>(&sql)
            .bind(trip.place_id)
            .bind(trip.start_date)
            .bind(trip.end_date)
            .bind(trip.budget)
            .bind(trip.preferred_transport)
            .bind(Json(&trip.checklist))
            .bind(Json(&trip.ai_recommendations))
            .bind(trip.id)
            .bind(trip.user_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Update failed for trip {}: {}", trip.id, e);
                TravelError::DatabaseError(e.to_string())
            })?
            .ok_or_else(trip_not_found)?;

        log::info!("Updated trip: {}", trip.id);
        Ok(row.to_trip())
    }

    /// Replace the checklist only
    pub async fn update_checklist(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        checklist: &[ChecklistItem],
    ) -> Result<Trip, TravelError> {
        let sql = format!(
            "UPDATE trips SET checklist = $1, updated_at = NOW() \
             WHERE id = $2 AND user_id = $3 RETURNING {}",
            TRIP_COLUMNS
        );

        let row = sqlx::query_as::<_, TripRow>(&sql)
            .bind(Json(checklist))
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Checklist update failed for trip {}: {}", id, e);
                TravelError::DatabaseError(e.to_string())
            })?
            .ok_or_else(trip_not_found)?;

        log::info!("Updated checklist of trip {} ({} items)", id, checklist.len());
        Ok(row.to_trip())
    }

    pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<(), TravelError> {
        let rows = sqlx::query("DELETE FROM trips WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for trip {}: {}", id, e);
                TravelError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            return Err(trip_not_found());
        }

        log::info!("Deleted trip: {}", id);
        Ok(())
    }
}
