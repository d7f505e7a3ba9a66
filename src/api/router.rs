use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, auth, invitation, guest, rsvp, public, delivery};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/refresh", post(auth::refresh))
        .route("/api/v1/auth/logout", post(auth::logout))

        // Owner-facing management (internal ids, scoped by owner)
        .route("/api/v1/invitations", post(invitation::create_invitation).get(invitation::list_invitations))
        .route("/api/v1/invitations/{id}", get(invitation::get_invitation).put(invitation::update_invitation).delete(invitation::delete_invitation))
        .route("/api/v1/invitations/{id}/guests", post(guest::create_guest).get(guest::list_guests))
        .route("/api/v1/invitations/{id}/rsvps", get(rsvp::list_rsvps))
        .route("/api/v1/invitations/{id}/send-pending", post(delivery::send_pending))
        .route("/api/v1/guests/{guest_id}", put(guest::update_guest).delete(guest::delete_guest))

        // Guest-facing public flow (slugs only, anonymous)
        .route("/api/v1/i/{slug}", get(public::view_invitation))
        .route("/api/v1/i/{slug}/rsvp", post(public::submit_rsvp))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
