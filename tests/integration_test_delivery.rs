mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{Duration, Utc};
use common::{AuthHeaders, TestApp};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn setup_invitation(app: &TestApp, auth: &AuthHeaders, title: &str) -> Value {
    let res = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri("/api/v1/invitations")
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", auth.csrf_token.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "title": title,
                "event_date": (Utc::now() + Duration::days(20)).to_rfc3339()
            }).to_string()))
            .unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await
}

async fn add_guest(app: &TestApp, auth: &AuthHeaders, invitation_id: &str, name: &str, phone: &str) -> Value {
    let res = app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri(format!("/api/v1/invitations/{}/guests", invitation_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", auth.csrf_token.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({
                "full_name": name,
                "phone": phone
            }).to_string()))
            .unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await
}

async fn send_pending(app: &TestApp, auth: &AuthHeaders, invitation_id: &str) -> axum::response::Response {
    app.router.clone().oneshot(
        Request::builder()
            .method("POST")
            .uri(format!("/api/v1/invitations/{}/send-pending", invitation_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .header("X-CSRF-Token", auth.csrf_token.clone())
            .body(Body::empty())
            .unwrap()
    ).await.unwrap()
}

async fn guest_statuses(app: &TestApp, auth: &AuthHeaders, invitation_id: &str) -> Vec<(String, String)> {
    let res = app.router.clone().oneshot(
        Request::builder()
            .method("GET")
            .uri(format!("/api/v1/invitations/{}/guests", invitation_id))
            .header(header::COOKIE, format!("access_token={}", auth.access_token))
            .body(Body::empty())
            .unwrap()
    ).await.unwrap();
    parse_body(res).await
        .as_array().unwrap()
        .iter()
        .map(|g| (
            g["phone"].as_str().unwrap().to_string(),
            g["status"].as_str().unwrap().to_string(),
        ))
        .collect()
}

#[tokio::test]
async fn test_send_pending_delivers_and_marks_sent() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("oli@example.com", "super-secret-1", "Oli").await;
    let invitation = setup_invitation(&app, &auth, "Launch Party").await;
    let invitation_id = invitation["id"].as_str().unwrap();
    let slug = invitation["url_slug"].as_str().unwrap();

    add_guest(&app, &auth, invitation_id, "Uno", "+15550000001").await;
    add_guest(&app, &auth, invitation_id, "Dos", "+15550000002").await;

    let res = send_pending(&app, &auth, invitation_id).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["guest_count"], 2);

    let sent = app.messages.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 2);
    for (_, message_body) in &sent {
        assert!(message_body.contains(&format!("/i/{}", slug)), "body should carry the public link");
        assert!(message_body.contains("Launch Party"));
    }

    for (_, status) in guest_statuses(&app, &auth, invitation_id).await {
        assert_eq!(status, "sent");
    }
}

#[tokio::test]
async fn test_send_pending_with_empty_queue_is_a_client_error() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("pam@example.com", "super-secret-1", "Pam").await;
    let invitation = setup_invitation(&app, &auth, "Quiet Event").await;
    let invitation_id = invitation["id"].as_str().unwrap();

    let res = send_pending(&app, &auth, invitation_id).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_second_send_only_covers_new_guests() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("quin@example.com", "super-secret-1", "Quin").await;
    let invitation = setup_invitation(&app, &auth, "Recital").await;
    let invitation_id = invitation["id"].as_str().unwrap();

    add_guest(&app, &auth, invitation_id, "First Wave", "+15550000010").await;
    let res = send_pending(&app, &auth, invitation_id).await;
    assert_eq!(res.status(), StatusCode::OK);

    // Everything already sent: nothing to do
    let res = send_pending(&app, &auth, invitation_id).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    add_guest(&app, &auth, invitation_id, "Late Addition", "+15550000011").await;
    let res = send_pending(&app, &auth, invitation_id).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["guest_count"], 1);

    assert_eq!(app.messages.sent.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_delivery_failure_leaves_remaining_guests_pending() {
    let app = TestApp::new().await;
    let auth = app.register_and_login("rita@example.com", "super-secret-1", "Rita").await;
    let invitation = setup_invitation(&app, &auth, "Gala").await;
    let invitation_id = invitation["id"].as_str().unwrap();

    add_guest(&app, &auth, invitation_id, "Reachable", "+15550000020").await;
    // Distinct created_at so the pending queue order is deterministic
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    add_guest(&app, &auth, invitation_id, "Unreachable", "+15550000021").await;

    app.messages.fail_for.lock().unwrap().insert("+15550000021".to_string());

    let res = send_pending(&app, &auth, invitation_id).await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // The guest delivered before the failure is sent; the failed one is not
    let statuses = guest_statuses(&app, &auth, invitation_id).await;
    let by_phone: std::collections::HashMap<_, _> = statuses.into_iter().collect();
    assert_eq!(by_phone["+15550000020"], "sent");
    assert_eq!(by_phone["+15550000021"], "pending");

    // Clearing the fault lets a retry drain the queue
    app.messages.fail_for.lock().unwrap().clear();
    let res = send_pending(&app, &auth, invitation_id).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["guest_count"], 1);

    let statuses = guest_statuses(&app, &auth, invitation_id).await;
    assert!(statuses.iter().all(|(_, s)| s == "sent"));
}

#[tokio::test]
async fn test_send_pending_is_owner_scoped() {
    let app = TestApp::new().await;
    let auth_a = app.register_and_login("sam@example.com", "super-secret-1", "Sam").await;
    let auth_b = app.register_and_login("tom@example.com", "super-secret-1", "Tom").await;

    let invitation = setup_invitation(&app, &auth_a, "Members Only").await;
    let invitation_id = invitation["id"].as_str().unwrap();
    add_guest(&app, &auth_a, invitation_id, "Guest", "+15550000030").await;

    let res = send_pending(&app, &auth_b, invitation_id).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(app.messages.sent.lock().unwrap().is_empty());
}
