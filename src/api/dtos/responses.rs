use chrono::{DateTime, Utc};
use serde::Serialize;

/// Guest-facing view of an invitation. Exposes the slug and presentation
/// fields only; internal id and owner are owner-path concerns.
#[derive(Serialize)]
pub struct PublicInvitationResponse {
    pub url_slug: String,
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub location: Option<String>,
    pub template_id: String,
    pub font: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub countdown: String,
}

#[derive(Serialize)]
pub struct SendPendingResponse {
    pub message: String,
    pub guest_count: usize,
}
