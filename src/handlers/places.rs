// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for place operations
// PURPOSE: Parse requests, call repositories, return envelopes

use crate::auth::AuthenticatedUser;
use crate::db::PlaceRepository;
use crate::errors::TravelError;
use crate::models::{
    ApiResponse, Category, CreatePlaceRequest, PageParams, PlaceQuery, UpdatePlaceRequest,
};
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// GET /api/places
/// Filtered, sorted, paginated listing
pub async fn list_places(
    pool: web::Data<PgPool>,
    query: web::Query<PlaceQuery>,
) -> Result<impl Responder, TravelError> {
    let query = query.into_inner();
    let (places, total) = PlaceRepository::list(pool.get_ref(), &query).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::paginated(places, total, &query.page_params())))
}

/// GET /api/places/trending
pub async fn trending_places(pool: web::Data<PgPool>) -> Result<impl Responder, TravelError> {
    let places = PlaceRepository::trending(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::list(places)))
}

/// GET /api/places/category/{category}
pub async fn places_by_category(
    pool: web::Data<PgPool>,
    path: web::Path<Category>,
    page: web::Query<PageParams>,
) -> Result<impl Responder, TravelError> {
    let page = page.into_inner();
    let (places, total) =
        PlaceRepository::list_by_category(pool.get_ref(), path.into_inner(), &page).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::paginated(places, total, &page)))
}

/// GET /api/places/{id}
pub async fn get_place(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, TravelError> {
    let place = PlaceRepository::get_by_id(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(place)))
}

/// POST /api/places
pub async fn create_place(
    user: AuthenticatedUser,
    pool: web::Data<PgPool>,
    req: web::Json<CreatePlaceRequest>,
) -> Result<impl Responder, TravelError> {
    req.validate()?;

    let place = PlaceRepository::create(pool.get_ref(), &req).await?;
    log::info!("User {} created place {} ({})", user.id, place.id, place.name);
    Ok(HttpResponse::Created().json(ApiResponse::ok(place)))
}

/// PUT /api/places/{id}
/// Partial update: only provided fields change
pub async fn update_place(
    user: AuthenticatedUser,
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePlaceRequest>,
) -> Result<impl Responder, TravelError> {
    req.validate()?;

    let mut place = PlaceRepository::get_by_id(pool.get_ref(), path.into_inner()).await?;
    place.apply_update(req.into_inner());
    let place = PlaceRepository::update(pool.get_ref(), &place).await?;

    log::info!("User {} updated place {}", user.id, place.id);
    Ok(HttpResponse::Ok().json(ApiResponse::ok(place)))
}

/// DELETE /api/places/{id}
/// Hard delete; trips, hotels and restaurants keep their dangling reference
pub async fn delete_place(
    user: AuthenticatedUser,
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, TravelError> {
    let id = path.into_inner();
    PlaceRepository::delete(pool.get_ref(), id).await?;

    log::info!("User {} deleted place {}", user.id, id);
    Ok(HttpResponse::Ok().json(ApiResponse::message("Place deleted successfully")))
}

/// Configuration for place routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/places")
            .route("", web::get().to(list_places))
            .route("", web::post().to(create_place))
            .route("/trending", web::get().to(trending_places))
            .route("/category/{category}", web::get().to(places_by_category))
            .route("/{id}", web::get().to(get_place))
            .route("/{id}", web::put().to(update_place))
            .route("/{id}", web::delete().to(delete_place)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::tests::token_for;
    use crate::config::{db::lazy_test_pool, Config};
    use crate::handlers::{bad_request, path_not_found};
    use actix_web::{http::header, http::StatusCode, test, App};
    use serde_json::{json, Value};

    macro_rules! places_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(Config::for_tests()))
                    .app_data(web::Data::new(lazy_test_pool()))
                    .app_data(web::QueryConfig::default().error_handler(bad_request))
                    .app_data(web::PathConfig::default().error_handler(path_not_found))
                    .configure(config),
            )
            .await
        };
    }

    fn bearer() -> String {
        format!("Bearer {}", token_for(Uuid::new_v4(), &Config::for_tests().jwt_secret))
    }

    fn place_body() -> Value {
        json!({
            "name": "Munnar",
            "description": "Tea gardens in the Western Ghats",
            "state": "Kerala",
            "country": "India",
            "coordinates": { "lat": 10.0889, "lng": 77.0595 },
            "bestSeason": "September to March",
            "rating": 4.6,
            "category": "mountain",
            "budget": "medium"
        })
    }

    #[actix_web::test]
    async fn test_create_place_requires_token() {
        let app = places_app!();

        let req = test::TestRequest::post()
            .uri("/api/places")
            .set_json(place_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_create_place_lists_every_field_error() {
        let app = places_app!();
        let mut body = place_body();
        body["rating"] = json!(6);
        body["coordinates"]["lat"] = json!(91);

        let req = test::TestRequest::post()
            .uri("/api/places")
            .insert_header((header::AUTHORIZATION, bearer()))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(
            body["errors"],
            json!([
                "coordinates.lat: latitude must be between -90 and 90",
                "rating: rating must be between 0 and 5"
            ])
        );
    }

    #[actix_web::test]
    async fn test_update_place_validates_before_lookup() {
        let app = places_app!();

        let req = test::TestRequest::put()
            .uri(&format!("/api/places/{}", Uuid::new_v4()))
            .insert_header((header::AUTHORIZATION, bearer()))
            .set_json(json!({ "name": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["errors"][0], "name: name must be 1-200 characters");
    }

    #[actix_web::test]
    async fn test_unknown_filter_values_are_bad_requests() {
        let app = places_app!();

        for uri in [
            "/api/places?category=desert",
            "/api/places?budget=luxury",
            "/api/places?page=first",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["code"], "INVALID_INPUT");
        }
    }

    #[actix_web::test]
    async fn test_unparseable_path_segments_are_not_found() {
        let app = places_app!();

        for uri in ["/api/places/category/desert", "/api/places/not-a-uuid"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        }
    }
}
