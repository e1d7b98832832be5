use std::convert::Infallible;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::request::Parts;
use uuid::Uuid;

use crate::auth::jwt;
use crate::error::AppError;
use crate::state::SharedState;

/// The authenticated principal, resolved from a Bearer token. Handlers take
/// this (or `Option<AuthUser>` for routes that serve anonymous readers too)
/// so that ownership checks never consult ambient session state.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

fn bearer_claims(parts: &Parts, state: &SharedState) -> Option<Result<jwt::Claims, AppError>> {
    let auth_header = parts.headers.get("authorization")?;

    let auth_str = match auth_header.to_str() {
        Ok(s) => s,
        Err(_) => {
            return Some(Err(AppError::Unauthorized(
                "Invalid authorization header".to_string(),
            )));
        }
    };

    let token = auth_str.strip_prefix("Bearer ")?;
    Some(
        jwt::decode_token(token, &state.config.jwt_secret)
            .map_err(|_| AppError::Unauthorized("Invalid or expired token".to_string())),
    )
}

impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        match bearer_claims(parts, state) {
            Some(claims) => Ok(AuthUser {
                user_id: claims?.sub,
            }),
            None => Err(AppError::Unauthorized(
                "Missing authentication token".to_string(),
            )),
        }
    }
}

impl OptionalFromRequestParts<SharedState> for AuthUser {
    type Rejection = Infallible;

    /// Anonymous requests and requests with an unusable token both resolve to
    /// `None`; visibility rules decide what an anonymous reader may see.
    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(match bearer_claims(parts, state) {
            Some(Ok(claims)) => Some(AuthUser { user_id: claims.sub }),
            _ => None,
        })
    }
}
