use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::requests::{CreateGuestRequest, UpdateGuestRequest};
use crate::domain::models::guest::{Guest, GUEST_STATUSES};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

/// E.164-ish: optional '+', leading digit 1-9, 2 to 15 digits total.
fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    let mut chars = digits.chars();
    match chars.next() {
        Some(c) if ('1'..='9').contains(&c) => {}
        _ => return false,
    }
    let rest = chars.as_str();
    (1..=14).contains(&rest.len()) && rest.chars().all(|c| c.is_ascii_digit())
}

pub async fn create_guest(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(invitation_id): Path<String>,
    Json(payload): Json<CreateGuestRequest>,
) -> Result<impl IntoResponse, AppError> {
    let invitation = state.invitation_repo.find_by_id(&user.id, &invitation_id).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    if payload.full_name.trim().is_empty() {
        return Err(AppError::Validation("Full name is required".into()));
    }
    if !is_valid_phone(&payload.phone) {
        return Err(AppError::Validation("Invalid phone number".into()));
    }

    let guest = Guest::new(invitation.id, payload.full_name.trim().to_string(), payload.phone);
    let created = state.guest_repo.create(&guest).await?;

    info!("Guest {} queued for invitation {}", created.id, invitation_id);

    Ok(Json(created))
}

pub async fn list_guests(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(invitation_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invitation = state.invitation_repo.find_by_id(&user.id, &invitation_id).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    let guests = state.guest_repo.list_by_invitation(&invitation.id).await?;
    Ok(Json(guests))
}

pub async fn update_guest(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(guest_id): Path<String>,
    Json(payload): Json<UpdateGuestRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut guest = state.guest_repo.find_by_id(&guest_id).await?
        .ok_or(AppError::NotFound("Guest not found".into()))?;

    // Ownership check goes through the invitation; a guest of someone
    // else's invitation is indistinguishable from a missing one.
    state.invitation_repo.find_by_id(&user.id, &guest.invitation_id).await?
        .ok_or(AppError::NotFound("Guest not found".into()))?;

    if let Some(val) = payload.full_name {
        if val.trim().is_empty() {
            return Err(AppError::Validation("Full name cannot be empty".into()));
        }
        guest.full_name = val.trim().to_string();
    }
    if let Some(val) = payload.phone {
        if !is_valid_phone(&val) {
            return Err(AppError::Validation("Invalid phone number".into()));
        }
        guest.phone = val;
    }
    if let Some(val) = payload.status {
        if !GUEST_STATUSES.contains(&val.as_str()) {
            return Err(AppError::Validation("Invalid guest status".into()));
        }
        guest.status = val;
    }

    let updated = state.guest_repo.update(&guest).await?;
    info!("Guest updated: {}", guest_id);
    Ok(Json(updated))
}

pub async fn delete_guest(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(guest_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let guest = state.guest_repo.find_by_id(&guest_id).await?
        .ok_or(AppError::NotFound("Guest not found".into()))?;

    state.invitation_repo.find_by_id(&user.id, &guest.invitation_id).await?
        .ok_or(AppError::NotFound("Guest not found".into()))?;

    state.guest_repo.delete(&guest.id).await?;
    info!("Guest deleted: {}", guest_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}
