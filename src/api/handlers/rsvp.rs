use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::error::AppError;
use std::sync::Arc;

pub async fn list_rsvps(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(invitation_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invitation = state.invitation_repo.find_by_id(&user.id, &invitation_id).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    let responses = state.rsvp_repo.list_by_invitation(&invitation.id).await?;
    Ok(Json(responses))
}
