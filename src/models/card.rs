use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const THEMES: &[&str] = &["default", "modern", "classic", "minimal"];

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct BusinessCard {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub title: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub secondary_phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub bio: Option<String>,
    pub social_links: Option<serde_json::Value>,
    pub image_url: Option<String>,
    pub theme: String,
    pub is_public: bool,
    pub views: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BusinessCard {
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

fn default_theme() -> String {
    "default".to_string()
}

/// Request payload for creating a card. Everything but the display name is
/// optional; `theme` falls back to "default".
#[derive(Debug, Clone, Deserialize)]
pub struct CardDraft {
    pub name: String,
    pub title: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub secondary_phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub bio: Option<String>,
    pub social_links: Option<serde_json::Value>,
    pub image_url: Option<String>,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub is_public: bool,
}

/// Request payload for updating a card. Every field is optional: an omitted
/// field leaves the stored value untouched, so a sparse update cannot wipe
/// contact details or silently re-privatize a public card.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardPatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub secondary_phone: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub bio: Option<String>,
    pub social_links: Option<serde_json::Value>,
    pub image_url: Option<String>,
    pub theme: Option<String>,
    pub is_public: Option<bool>,
}
