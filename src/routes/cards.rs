use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::extract::Json;
use crate::models::BusinessCard;
use crate::models::card::{CardDraft, CardPatch, THEMES};
use crate::state::SharedState;
use crate::vcard;

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<BusinessCard>>, AppError> {
    let cards = db::cards::list_by_owner(&state.pool, auth.user_id).await?;
    Ok(Json(cards))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(draft): Json<CardDraft>,
) -> Result<Json<BusinessCard>, AppError> {
    validate_draft(&draft)?;

    let card = db::cards::create(&state.pool, auth.user_id, &draft).await?;

    tracing::info!(card_id = %card.id, user_id = %auth.user_id, "business card created");

    Ok(Json(card))
}

pub async fn get(
    auth: Option<AuthUser>,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BusinessCard>, AppError> {
    let card = fetch_visible(&state, id, auth).await?;
    Ok(Json(card))
}

/// Render a card as a downloadable vCard, under the same visibility rule as
/// the JSON read.
pub async fn vcard(
    auth: Option<AuthUser>,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let card = fetch_visible(&state, id, auth).await?;
    let body = vcard::render(&card);

    Ok((
        [
            (header::CONTENT_TYPE, "text/vcard; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}.vcf\"", card.id),
            ),
        ],
        body,
    )
        .into_response())
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<CardPatch>,
) -> Result<Json<BusinessCard>, AppError> {
    validate_patch(&patch)?;

    // Scoped by id AND owner in one statement; a non-owner's request matches
    // zero rows and is reported as NotFound without leaking existence.
    let card = db::cards::update(&state.pool, id, auth.user_id, &patch)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                AppError::NotFound("Business card not found".to_string())
            }
            _ => AppError::Database(e),
        })?;

    Ok(Json(card))
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let removed = db::cards::delete(&state.pool, id, auth.user_id).await?;
    if removed == 0 {
        return Err(AppError::NotFound("Business card not found".to_string()));
    }

    tracing::info!(card_id = %id, user_id = %auth.user_id, "business card deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Fetch a card and apply the visibility rule: public cards are readable by
/// anyone, private cards only by their owner. Non-owner reads of a public
/// card bump the view counter.
async fn fetch_visible(
    state: &SharedState,
    id: Uuid,
    auth: Option<AuthUser>,
) -> Result<BusinessCard, AppError> {
    let card = db::cards::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Business card not found".to_string()))?;

    let is_owner = auth.is_some_and(|a| card.is_owned_by(a.user_id));

    if card.is_public {
        if !is_owner {
            db::cards::increment_views(&state.pool, card.id).await?;
        }
        return Ok(card);
    }

    if is_owner {
        Ok(card)
    } else {
        Err(AppError::Forbidden(
            "You do not have access to this business card".to_string(),
        ))
    }
}

fn validate_draft(draft: &CardDraft) -> Result<(), AppError> {
    validate_name(&draft.name)?;
    validate_theme(&draft.theme)?;
    validate_social_links(draft.social_links.as_ref())
}

fn validate_patch(patch: &CardPatch) -> Result<(), AppError> {
    if let Some(name) = &patch.name {
        validate_name(name)?;
    }
    if let Some(theme) = &patch.theme {
        validate_theme(theme)?;
    }
    validate_social_links(patch.social_links.as_ref())
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }
    Ok(())
}

fn validate_theme(theme: &str) -> Result<(), AppError> {
    if !THEMES.contains(&theme) {
        return Err(AppError::BadRequest(format!(
            "Unknown theme '{theme}'. Valid themes: {}",
            THEMES.join(", ")
        )));
    }
    Ok(())
}

fn validate_social_links(links: Option<&serde_json::Value>) -> Result<(), AppError> {
    if let Some(links) = links {
        if !links.is_object() {
            return Err(AppError::BadRequest(
                "social_links must be an object of platform to URL".to_string(),
            ));
        }
    }
    Ok(())
}
