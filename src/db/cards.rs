use sqlx::PgPool;
use uuid::Uuid;

use crate::models::BusinessCard;
use crate::models::card::{CardDraft, CardPatch};

pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    draft: &CardDraft,
) -> Result<BusinessCard, sqlx::Error> {
    sqlx::query_as::<_, BusinessCard>(
        "INSERT INTO business_cards
            (user_id, name, title, company, email, phone, secondary_phone,
             website, address, bio, social_links, image_url, theme, is_public)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
         RETURNING *",
    )
    .bind(user_id)
    .bind(&draft.name)
    .bind(&draft.title)
    .bind(&draft.company)
    .bind(&draft.email)
    .bind(&draft.phone)
    .bind(&draft.secondary_phone)
    .bind(&draft.website)
    .bind(&draft.address)
    .bind(&draft.bio)
    .bind(&draft.social_links)
    .bind(&draft.image_url)
    .bind(&draft.theme)
    .bind(draft.is_public)
    .fetch_one(pool)
    .await
}

pub async fn list_by_owner(pool: &PgPool, user_id: Uuid) -> Result<Vec<BusinessCard>, sqlx::Error> {
    sqlx::query_as::<_, BusinessCard>(
        "SELECT * FROM business_cards WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<BusinessCard>, sqlx::Error> {
    sqlx::query_as::<_, BusinessCard>("SELECT * FROM business_cards WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Owner-scoped partial update. Omitted fields keep their stored value via
/// COALESCE. The compound predicate makes a non-owner's request match zero
/// rows (surfaced as `RowNotFound`), so it can never touch another user's
/// card.
pub async fn update(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
    patch: &CardPatch,
) -> Result<BusinessCard, sqlx::Error> {
    sqlx::query_as::<_, BusinessCard>(
        "UPDATE business_cards SET
            name = COALESCE($3, name),
            title = COALESCE($4, title),
            company = COALESCE($5, company),
            email = COALESCE($6, email),
            phone = COALESCE($7, phone),
            secondary_phone = COALESCE($8, secondary_phone),
            website = COALESCE($9, website),
            address = COALESCE($10, address),
            bio = COALESCE($11, bio),
            social_links = COALESCE($12, social_links),
            image_url = COALESCE($13, image_url),
            theme = COALESCE($14, theme),
            is_public = COALESCE($15, is_public),
            updated_at = now()
         WHERE id = $1 AND user_id = $2
         RETURNING *",
    )
    .bind(id)
    .bind(user_id)
    .bind(&patch.name)
    .bind(&patch.title)
    .bind(&patch.company)
    .bind(&patch.email)
    .bind(&patch.phone)
    .bind(&patch.secondary_phone)
    .bind(&patch.website)
    .bind(&patch.address)
    .bind(&patch.bio)
    .bind(&patch.social_links)
    .bind(&patch.image_url)
    .bind(&patch.theme)
    .bind(patch.is_public)
    .fetch_one(pool)
    .await
}

/// Owner-scoped delete. Returns the number of rows removed; zero means the
/// card does not exist or belongs to someone else.
pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM business_cards WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn increment_views(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE business_cards SET views = views + 1 WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
