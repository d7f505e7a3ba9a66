use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const TEMPLATE_IDS: [&str; 3] = ["template1", "template2", "template3"];

/// An authored invitation. `url_slug` is the guest-facing identifier and is
/// immutable once assigned; `id` is the owner-facing identifier. The two must
/// never be looked up through each other's path.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Invitation {
    pub id: String,
    pub owner_id: String,
    pub url_slug: String,
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub location: Option<String>,
    pub template_id: String,
    pub font: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewInvitationParams {
    pub owner_id: String,
    pub url_slug: String,
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub location: Option<String>,
    pub template_id: String,
    pub font: String,
    pub primary_color: String,
    pub secondary_color: String,
}

impl Invitation {
    pub fn new(params: NewInvitationParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            owner_id: params.owner_id,
            url_slug: params.url_slug,
            title: params.title,
            description: params.description,
            event_date: params.event_date,
            location: params.location,
            template_id: params.template_id,
            font: params.font,
            primary_color: params.primary_color,
            secondary_color: params.secondary_color,
            created_at: now,
            updated_at: now,
        }
    }
}
