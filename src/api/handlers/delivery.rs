use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::api::dtos::responses::SendPendingResponse;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{error, info};

/// Dispatches the invitation message to every guest still in `pending` and
/// marks each one `sent` once its delivery succeeded. A guest is never
/// marked `sent` ahead of a successful send; a mid-batch failure leaves the
/// remaining guests pending for the next attempt.
pub async fn send_pending(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Path(invitation_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invitation = state.invitation_repo.find_by_id(&user.id, &invitation_id).await?
        .ok_or(AppError::NotFound("Invitation not found".into()))?;

    let pending = state.guest_repo.list_pending(&invitation.id).await?;

    if pending.is_empty() {
        return Err(AppError::Validation("No pending invitations to send".into()));
    }

    let owner = state.user_repo.find_by_id(&invitation.owner_id).await?
        .ok_or(AppError::Internal)?;

    let link = format!("{}/i/{}", state.config.public_base_url, invitation.url_slug);

    let mut sent_count = 0usize;

    for mut guest in pending {
        let mut context = tera::Context::new();
        context.insert("guest_name", &guest.full_name);
        context.insert("host_name", &owner.display_name);
        context.insert("title", &invitation.title);
        context.insert("description", &invitation.description);
        context.insert("event_date", &invitation.event_date.format("%Y-%m-%d %H:%M").to_string());
        context.insert("location", &invitation.location);
        context.insert("link", &link);

        let body = state.templates.render("invitation_message.txt", &context)
            .map_err(|e| {
                error!("Message template render error: {:?}", e);
                AppError::InternalWithMsg(format!("Message render error: {:?}", e))
            })?;

        state.message_service.send(&guest.phone, &body).await?;

        guest.status = "sent".to_string();
        state.guest_repo.update(&guest).await?;
        sent_count += 1;
    }

    info!("Sent {} pending invitation(s) for {}", sent_count, invitation_id);

    Ok(Json(SendPendingResponse {
        message: "Invitations sent successfully".to_string(),
        guest_count: sent_count,
    }))
}
