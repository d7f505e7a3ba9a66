use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::{CreateInvitationRequest, UpdateInvitationRequest};
use crate::domain::models::invitation::{Invitation, NewInvitationParams, TEMPLATE_IDS};
use crate::domain::services::slug::{generate_slug, SLUG_MAX_ATTEMPTS};
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::{info, warn};

fn validate_template(template_id: &str) -> Result<(), AppError> {
    if !TEMPLATE_IDS.contains(&template_id) {
        return Err(AppError::Validation("Unknown template".into()));
    }
    Ok(())
}

pub async fn create_invitation(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(payload): Json<CreateInvitationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let title = payload.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::Validation("Title is required".into()));
    }

    let template_id = payload.template_id.unwrap_or_else(|| "template1".to_string());
    validate_template(&template_id)?;

    info!("Creating invitation '{}' for user {}", title, user.id);

    // The store's UNIQUE constraint on url_slug is the only serialization
    // point. A collision means another invitation landed in the same
    // millisecond with an identically-normalized title; regenerate with a
    // fresh instant instead of overwriting.
    let mut attempts = 0;
    let created = loop {
        let slug = generate_slug(&title, Utc::now().timestamp_millis());

        let invitation = Invitation::new(NewInvitationParams {
            owner_id: user.id.clone(),
            url_slug: slug,
            title: title.clone(),
            description: payload.description.clone(),
            event_date: payload.event_date,
            location: payload.location.clone(),
            template_id: template_id.clone(),
            font: payload.font.clone().unwrap_or_else(|| "font-sans".to_string()),
            primary_color: payload.primary_color.clone().unwrap_or_else(|| "slate".to_string()),
            secondary_color: payload.secondary_color.clone().unwrap_or_else(|| "sky".to_string()),
        });

        match state.invitation_repo.create(&invitation).await {
            Ok(created) => break created,
            Err(e) if e.is_unique_violation() => {
                attempts += 1;
                warn!("Slug collision on attempt {} for title '{}'", attempts, title);
                if attempts >= SLUG_MAX_ATTEMPTS {
                    return Err(AppError::SlugAllocation);
                }
            }
            Err(e) => return Err(e),
        }
    };

    info!("Invitation created: {} ({})", created.id, created.url_slug);
    Ok(Json(created))
}

pub async fn list_invitations(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let invitations = state.invitation_repo.list_by_owner(&user.id).await?;
    Ok(Json(invitations))
}

pub async fn get_invitation(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invitation = state.invitation_repo.find_by_id(&user.id, &id).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    let share_link = format!("{}/i/{}", state.config.public_base_url, invitation.url_slug);

    let mut invitation_json = serde_json::to_value(&invitation).map_err(|_| AppError::Internal)?;
    invitation_json["share_link"] = serde_json::Value::String(share_link);

    Ok(Json(invitation_json))
}

pub async fn update_invitation(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateInvitationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut invitation = state.invitation_repo.find_by_id(&user.id, &id).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    if let Some(val) = payload.title {
        let title = val.trim().to_string();
        if title.is_empty() {
            return Err(AppError::Validation("Title cannot be empty".into()));
        }
        invitation.title = title;
    }
    if let Some(val) = payload.description { invitation.description = Some(val); }
    if let Some(val) = payload.event_date { invitation.event_date = val; }
    if let Some(val) = payload.location { invitation.location = Some(val); }
    if let Some(val) = payload.template_id {
        validate_template(&val)?;
        invitation.template_id = val;
    }
    if let Some(val) = payload.font { invitation.font = val; }
    if let Some(val) = payload.primary_color { invitation.primary_color = val; }
    if let Some(val) = payload.secondary_color { invitation.secondary_color = val; }

    invitation.updated_at = Utc::now();

    // url_slug is never written here: shared links must keep resolving
    // after the title changes.
    let updated = state.invitation_repo.update(&invitation).await?;
    info!("Invitation updated: {}", id);
    Ok(Json(updated))
}

pub async fn delete_invitation(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.invitation_repo.delete(&user.id, &id).await?;
    info!("Invitation deleted: {}", id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
