pub mod auth;
pub mod cards;
pub mod password_reset;

use axum::Router;
use axum::routing::{get, post};

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        // Password reset
        .route("/password-reset/request", post(password_reset::request))
        .route("/password-reset/confirm", post(password_reset::confirm))
        // Business cards
        .route("/cards", get(cards::list).post(cards::create))
        .route(
            "/cards/{id}",
            get(cards::get).put(cards::update).delete(cards::delete),
        )
        .route("/cards/{id}/vcard", get(cards::vcard))
}
