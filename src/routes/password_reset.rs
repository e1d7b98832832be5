use axum::extract::State;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::password;
use crate::auth::token::generate_reset_token;
use crate::db;
use crate::error::AppError;
use crate::extract::Json;
use crate::state::SharedState;

/// Returned for every reset request, registered account or not, so responses
/// never reveal whether an email exists.
const GENERIC_RESET_MESSAGE: &str =
    "If an account exists, you will receive a password reset link";

#[derive(Deserialize)]
pub struct RequestReset {
    pub email: String,
}

#[derive(Deserialize)]
pub struct ConfirmReset {
    pub token: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn request(
    State(state): State<SharedState>,
    Json(req): Json<RequestReset>,
) -> Result<Json<MessageResponse>, AppError> {
    if req.email.is_empty() {
        return Err(AppError::BadRequest("Email is required".to_string()));
    }

    let response = Json(MessageResponse {
        message: GENERIC_RESET_MESSAGE.to_string(),
    });

    let Some(user) = db::users::find_by_email(&state.pool, &req.email).await? else {
        return Ok(response);
    };

    let token = generate_reset_token();
    let expires_at = Utc::now() + Duration::hours(1);
    db::verification_tokens::create(&state.pool, &token, &user.email, expires_at).await?;

    match &state.mailer {
        Some(mailer) => {
            let reset_url = format!("{}/reset-password?token={token}", state.config.base_url);
            mailer
                .send_password_reset(&user.email, &reset_url)
                .await
                .map_err(AppError::Internal)?;
        }
        None => {
            tracing::warn!("SMTP not configured. Password reset token: {token}");
        }
    }

    Ok(response)
}

pub async fn confirm(
    State(state): State<SharedState>,
    Json(req): Json<ConfirmReset>,
) -> Result<Json<MessageResponse>, AppError> {
    if req.token.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    }

    if req.password.len() < 8 {
        return Err(AppError::BadRequest(
            "Password must be at least 8 characters".to_string(),
        ));
    }

    // Claiming the token deletes it in the same statement, so a concurrent
    // confirm with the same token loses the race and sees it as already gone.
    let reset_token = db::verification_tokens::consume(&state.pool, &req.token)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid or expired reset token".to_string()))?;

    if reset_token.expires_at < Utc::now() {
        return Err(AppError::BadRequest("Token has expired".to_string()));
    }

    let user = db::users::find_by_email(&state.pool, &reset_token.identifier)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;
    db::users::update_password(&state.pool, user.id, &pw_hash).await?;

    tracing::info!(user_id = %user.id, "password reset completed");

    Ok(Json(MessageResponse {
        message: "Password has been reset successfully".to_string(),
    }))
}
