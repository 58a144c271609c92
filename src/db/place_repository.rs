// src/db/place_repository.rs
// DOCUMENTATION: Database access layer for places
// PURPOSE: All SQL touching the places table

use crate::errors::TravelError;
use crate::models::*;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const PLACE_COLUMNS: &str = "id, name, description, state, country, images, latitude, longitude, \
     best_season, rating, tips, category, budget, created_at, updated_at";

const TRENDING_LIMIT: i64 = 6;

/// Internal struct for mapping database rows to Place struct
/// DOCUMENTATION: Coordinates are stored as two columns and folded back into one object
#[derive(Debug, FromRow)]
struct PlaceRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub state: String,
    pub country: String,
    pub images: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub best_season: String,
    pub rating: f64,
    pub tips: Vec<String>,
    pub category: Category,
    pub budget: BudgetTier,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlaceRow {
    /// Convert PlaceRow to Place model
    fn to_place(self) -> Place {
        Place {
            id: self.id,
            name: self.name,
            description: self.description,
            state: self.state,
            country: self.country,
            images: self.images,
            coordinates: Coordinates {
                lat: self.latitude,
                lng: self.longitude,
            },
            best_season: self.best_season,
            rating: self.rating,
            tips: self.tips,
            category: self.category,
            budget: self.budget,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Escape LIKE wildcards so user input only ever matches literally
pub fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Append the WHERE clause for a listing query
/// DOCUMENTATION: Every user value goes through push_bind
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &PlaceQuery) {
    builder.push(" WHERE TRUE");

    if let Some(term) = non_empty(&query.search) {
        let pattern = contains_pattern(term);
        builder.push(" AND (name ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR description ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR state ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR country ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }

    if let Some(state) = non_empty(&query.state) {
        builder.push(" AND state ILIKE ");
        builder.push_bind(contains_pattern(state));
    }

    if let Some(country) = non_empty(&query.country) {
        builder.push(" AND country ILIKE ");
        builder.push_bind(contains_pattern(country));
    }

    if let Some(category) = query.category {
        builder.push(" AND category = ");
        builder.push_bind(category);
    }

    if let Some(budget) = query.budget {
        builder.push(" AND budget = ");
        builder.push_bind(budget);
    }
}

/// One page of a filtered listing
fn listing_query(query: &PlaceQuery) -> QueryBuilder<'static, Postgres> {
    let page = query.page_params();

    let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {} FROM places", PLACE_COLUMNS));
    push_filters(&mut builder, query);
    builder.push(" ORDER BY ");
    builder.push(query.sort().order_by());
    builder.push(" LIMIT ");
    builder.push_bind(page.limit());
    builder.push(" OFFSET ");
    builder.push_bind(page.offset());
    builder
}

/// PlaceRepository: All database operations for places
pub struct PlaceRepository;

impl PlaceRepository {
    /// Insert a new place and return the stored record
    pub async fn create(pool: &PgPool, req: &CreatePlaceRequest) -> Result<Place, TravelError> {
        let sql = format!(
            r#"
            INSERT INTO places (
                name, description, state, country, images, latitude, longitude,
                best_season, rating, tips, category, budget
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {}
            "#,
            PLACE_COLUMNS
        );

        let row = sqlx::query_as::<_, PlaceRow>(&sql)
            .bind(&req.name)
            .bind(&req.description)
            .bind(&req.state)
            .bind(&req.country)
            .bind(&req.images)
            .bind(req.coordinates.lat)
            .bind(req.coordinates.lng)
            .bind(&req.best_season)
            .bind(req.rating.unwrap_or(0.0))
            .bind(&req.tips)
            .bind(req.category)
            .bind(req.budget)
            .fetch_one(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to create place: {}", e);
                TravelError::DatabaseError(e.to_string())
            })?;

        log::info!("Created place with id: {}", row.id);
        Ok(row.to_place())
    }

    /// Retrieve place by ID
    /// DOCUMENTATION: Used for GET /api/places/{id} and for reference checks
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Place, TravelError> {
        let sql = format!("SELECT {} FROM places WHERE id = $1", PLACE_COLUMNS);

        let row = sqlx::query_as::<_, PlaceRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching place: {}", e);
                TravelError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| {
                log::warn!("Place not found: {}", id);
                TravelError::NotFound("Place".to_string())
            })?;

        Ok(row.to_place())
    }

    /// Fetch several places at once; missing ids are simply absent from the result
    pub async fn get_many(pool: &PgPool, ids: &[Uuid]) -> Result<Vec<Place>, TravelError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!("SELECT {} FROM places WHERE id = ANY($1)", PLACE_COLUMNS);

        let rows = sqlx::query_as::<_, PlaceRow>(&sql)
            .bind(ids)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching places: {}", e);
                TravelError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(|r| r.to_place()).collect())
    }

    /// Filtered, sorted, paginated listing
    /// DOCUMENTATION: Used for GET /api/places
    /// Returns tuple: (results, total_count) for pagination
    pub async fn list(pool: &PgPool, query: &PlaceQuery) -> Result<(Vec<Place>, i64), TravelError> {
        let page = query.page_params();

        let mut count_builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM places");
        push_filters(&mut count_builder, query);

        let (total,) = count_builder
            .build_query_as::<(i64,)>()
            .fetch_one(pool)
            .await
            .map_err(|e| {
                log::error!("Count query error: {}", e);
                TravelError::DatabaseError(e.to_string())
            })?;

        let mut builder = listing_query(query);
        log::debug!("Executing place listing: {}", builder.sql());

        let rows = builder
            .build_query_as::<PlaceRow>()
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Listing query error: {}", e);
                TravelError::DatabaseError(e.to_string())
            })?;

        let places: Vec<Place> = rows.into_iter().map(|r| r.to_place()).collect();

        log::info!(
            "Place listing: {} results, {} total (page {}/{})",
            places.len(),
            total,
            page.page(),
            page.pages(total)
        );

        Ok((places, total))
    }

    /// Highest rated places, newest first among equals
    pub async fn trending(pool: &PgPool) -> Result<Vec<Place>, TravelError> {
        let sql = format!(
            "SELECT {} FROM places ORDER BY {} LIMIT $1",
            PLACE_COLUMNS,
            PlaceSort::Rating.order_by()
        );

        let rows = sqlx::query_as::<_, PlaceRow>(&sql)
            .bind(TRENDING_LIMIT)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Trending query error: {}", e);
                TravelError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(|r| r.to_place()).collect())
    }

    /// Places of one category, same ordering as the default listing
    pub async fn list_by_category(
        pool: &PgPool,
        category: Category,
        page: &PageParams,
    ) -> Result<(Vec<Place>, i64), TravelError> {
        let query = PlaceQuery {
            category: Some(category),
            page: page.page,
            limit: page.limit,
            ..Default::default()
        };
        Self::list(pool, &query).await
    }

    /// Persist a fully merged place
    /// DOCUMENTATION: Caller loads the record, applies the partial update, then saves
    pub async fn update(pool: &PgPool, place: &Place) -> Result<Place, TravelError> {
        let sql = format!(
            r#"
            UPDATE places
            SET name = $1,
                description = $2,
                state = $3,
                country = $4,
                images = $5,
                latitude = $6,
                longitude = $7,
                best_season = $8,
                rating = $9,
                tips = $10,
                category = $11,
                budget = $12,
                updated_at = NOW()
            WHERE id = $13
            RETURNING {}
            "#,
            PLACE_COLUMNS
        );

        let row = sqlx::query_as::<_, PlaceRow>(&sql)
            .bind(&place.name)
            .bind(&place.description)
            .bind(&place.state)
            .bind(&place.country)
            .bind(&place.images)
            .bind(place.coordinates.lat)
            .bind(place.coordinates.lng)
            .bind(&place.best_season)
            .bind(place.rating)
            .bind(&place.tips)
            .bind(place.category)
            .bind(place.budget)
            .bind(place.id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Update failed for place {}: {}", place.id, e);
                TravelError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| TravelError::NotFound("Place".to_string()))?;

        log::info!("Updated place: {}", place.id);
        Ok(row.to_place())
    }

    /// Hard delete; trips, hotels and restaurants referencing it are left alone
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), TravelError> {
        let rows = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for place {}: {}", id, e);
                TravelError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            return Err(TravelError::NotFound("Place".to_string()));
        }

        log::info!("Deleted place: {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_wildcards() {
        assert_eq!(escape_like("goa"), "goa");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\"), "c:\\\\");
        assert_eq!(contains_pattern("50%"), "%50\\%%");
    }

    #[test]
    fn test_filters_are_bound_not_inlined() {
        let query = PlaceQuery {
            search: Some("'; DROP TABLE places; --".to_string()),
            state: Some("  ".to_string()),
            category: Some(Category::Beach),
            ..Default::default()
        };

        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM places");
        push_filters(&mut builder, &query);
        let sql = builder.sql();

        assert!(!sql.contains("DROP TABLE"));
        assert!(sql.contains("name ILIKE $1"));
        assert!(sql.contains("country ILIKE $4"));
        assert!(sql.contains("category = $5"));
        // blank state filter is ignored
        assert!(!sql.contains("AND state ILIKE"));
    }

    #[test]
    fn test_listing_orders_by_id_before_paging() {
        let query = PlaceQuery {
            category: Some(Category::Mountain),
            sort: Some("name".to_string()),
            page: Some(2),
            ..Default::default()
        };

        let sql = listing_query(&query).sql().to_string();
        assert!(sql.ends_with("ORDER BY name ASC, id ASC LIMIT $2 OFFSET $3"), "{}", sql);
    }
}
