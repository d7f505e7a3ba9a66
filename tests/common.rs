use invitation_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    infra::repositories::{
        sqlite_auth_repo::SqliteAuthRepo,
        sqlite_guest_repo::SqliteGuestRepo,
        sqlite_invitation_repo::SqliteInvitationRepo,
        sqlite_rsvp_repo::SqliteRsvpRepo,
        sqlite_user_repo::SqliteUserRepo,
    },
    domain::services::auth_service::AuthService,
    domain::ports::MessageService,
    error::AppError,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::collections::HashSet;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, header},
    Router,
};
use async_trait::async_trait;
use tera::Tera;
use tower::ServiceExt;
use serde_json::Value;

/// Records outbound messages instead of delivering them. Recipients placed
/// in `fail_for` make the send fail, to exercise mid-batch behavior.
pub struct MockMessageService {
    pub sent: Mutex<Vec<(String, String)>>,
    pub fail_for: Mutex<HashSet<String>>,
}

impl MockMessageService {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_for: Mutex::new(HashSet::new()),
        }
    }
}

#[async_trait]
impl MessageService for MockMessageService {
    async fn send(&self, recipient: &str, body: &str) -> Result<(), AppError> {
        if self.fail_for.lock().unwrap().contains(recipient) {
            return Err(AppError::InternalWithMsg(format!("Delivery failed for {}", recipient)));
        }
        self.sent.lock().unwrap().push((recipient.to_string(), body.to_string()));
        Ok(())
    }
}

pub struct AuthHeaders {
    pub access_token: String,
    pub csrf_token: String,
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
    pub messages: Arc<MockMessageService>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let mut tera = Tera::default();
        tera.add_raw_template(
            "invitation_message.txt",
            "Hola {{ guest_name }}! {{ host_name }} te ha invitado: {{ title }}. Link: {{ link }}",
        ).unwrap();
        let templates = Arc::new(tera);

        let priv_key_pem = include_str!("keys/test_private.pem");
        let pub_key_pem = include_str!("keys/test_public.pem");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            message_service_url: "http://localhost".to_string(),
            message_service_token: "token".to_string(),
            jwt_secret_key: priv_key_pem.to_string(),
            jwt_public_key: pub_key_pem.to_string(),
            auth_issuer: "test-issuer".to_string(),
            public_base_url: "http://localhost:5173".to_string(),
        };

        let auth_repo = Arc::new(SqliteAuthRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(auth_repo.clone(), config.clone()));
        let messages = Arc::new(MockMessageService::new());

        let state = Arc::new(AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            invitation_repo: Arc::new(SqliteInvitationRepo::new(pool.clone())),
            guest_repo: Arc::new(SqliteGuestRepo::new(pool.clone())),
            rsvp_repo: Arc::new(SqliteRsvpRepo::new(pool.clone())),
            auth_repo,
            auth_service,
            message_service: messages.clone(),
            templates,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
            messages,
        }
    }

    pub async fn register(&self, email: &str, password: &str, display_name: &str) {
        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "display_name": display_name
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/register")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Register failed in test helper: status {}", response.status());
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> AuthHeaders {
        let payload = serde_json::json!({
            "email": email,
            "password": password
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/auth/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let cookies: Vec<String> = response.headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|h| h.to_str().unwrap().to_string())
            .collect();

        let access_token_cookie = cookies.iter()
            .find(|c| c.contains("access_token="))
            .expect("No access_token cookie returned");

        let start = access_token_cookie.find("access_token=").unwrap() + 13;
        let end = access_token_cookie[start..].find(';').unwrap_or(access_token_cookie.len() - start);
        let access_token = access_token_cookie[start..start+end].to_string();

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body_json: Value = serde_json::from_slice(&body_bytes).unwrap();
        let csrf_token = body_json["csrf_token"].as_str().expect("No csrf_token in body").to_string();

        AuthHeaders {
            access_token,
            csrf_token
        }
    }

    pub async fn register_and_login(&self, email: &str, password: &str, display_name: &str) -> AuthHeaders {
        self.register(email, password, display_name).await;
        self.login(email, password).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
