use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{requests::CreateRsvpRequest, responses::PublicInvitationResponse};
use crate::domain::models::rsvp::Rsvp;
use crate::domain::services::countdown::time_until;
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::info;

/// Guest-facing invitation view. Resolves the public slug only; internal
/// ids never enter or leave through this path.
pub async fn view_invitation(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invitation = state.invitation_repo.find_by_slug(&slug).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    Ok(Json(PublicInvitationResponse {
        url_slug: invitation.url_slug,
        title: invitation.title,
        description: invitation.description,
        event_date: invitation.event_date,
        location: invitation.location,
        template_id: invitation.template_id,
        font: invitation.font,
        primary_color: invitation.primary_color,
        secondary_color: invitation.secondary_color,
        countdown: time_until(invitation.event_date, Utc::now()),
    }))
}

pub async fn submit_rsvp(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Json(payload): Json<CreateRsvpRequest>,
) -> Result<impl IntoResponse, AppError> {
    let invitation = state.invitation_repo.find_by_slug(&slug).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }
    let email = payload.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(AppError::Validation("Invalid email address".into()));
    }

    let rsvp = Rsvp::new(invitation.id, name, email, payload.attending);
    let created = state.rsvp_repo.create(&rsvp).await?;

    info!("RSVP recorded for invitation slug {}: attending={}", slug, created.attending);

    Ok(Json(created))
}
