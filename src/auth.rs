// src/auth.rs
// DOCUMENTATION: Bearer-token gate
// PURPOSE: Verify HS256 JWTs and hand handlers the caller's user id

use crate::config::Config;
use crate::errors::TravelError;
use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::future::{ready, Ready};
use uuid::Uuid;

/// Token payload; the user id travels in `id`, or in `sub` for standard issuers
#[derive(Debug, Deserialize)]
struct Claims {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    sub: Option<String>,
}

/// The caller of an authenticated endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: Uuid,
}

fn bearer_token(req: &HttpRequest) -> Result<&str, TravelError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| TravelError::Unauthorized("no token provided".to_string()))?
        .to_str()
        .map_err(|_| TravelError::Unauthorized("malformed authorization header".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| TravelError::Unauthorized("expected a Bearer token".to_string()))
}

/// Decode and verify a token signed with `secret`
pub fn verify_token(token: &str, secret: &str) -> Result<AuthenticatedUser, TravelError> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map_err(|e| {
            log::debug!("Rejected token: {}", e);
            TravelError::Unauthorized("invalid or expired token".to_string())
        })?;

    let raw_id = data
        .claims
        .id
        .or(data.claims.sub)
        .ok_or_else(|| TravelError::Unauthorized("token has no user id".to_string()))?;

    let id = Uuid::parse_str(&raw_id)
        .map_err(|_| TravelError::Unauthorized("token has an invalid user id".to_string()))?;

    Ok(AuthenticatedUser { id })
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, TravelError> {
    let config = req.app_data::<web::Data<Config>>().ok_or_else(|| {
        log::error!("Config missing from app data; cannot verify tokens");
        TravelError::Internal("authentication is not configured".to_string())
    })?;

    verify_token(bearer_token(req)?, &config.jwt_secret)
}

impl FromRequest for AuthenticatedUser {
    type Error = TravelError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}
