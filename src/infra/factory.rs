use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;
use tera::Tera;

use crate::config::Config;
use crate::state::AppState;
use crate::infra::messaging::http_message_service::HttpMessageService;
use crate::domain::services::auth_service::AuthService;
use crate::infra::repositories::{
    postgres_auth_repo::PostgresAuthRepo, postgres_guest_repo::PostgresGuestRepo,
    postgres_invitation_repo::PostgresInvitationRepo, postgres_rsvp_repo::PostgresRsvpRepo,
    postgres_user_repo::PostgresUserRepo,
    sqlite_auth_repo::SqliteAuthRepo, sqlite_guest_repo::SqliteGuestRepo,
    sqlite_invitation_repo::SqliteInvitationRepo, sqlite_rsvp_repo::SqliteRsvpRepo,
    sqlite_user_repo::SqliteUserRepo,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;
    let message_service = Arc::new(HttpMessageService::new(
        config.message_service_url.clone(),
        config.message_service_token.clone(),
    ));

    let mut tera = Tera::default();
    tera.add_raw_template("invitation_message.txt", include_str!("../templates/invitation_message.txt"))
        .expect("Failed to load invitation message template");
    let templates = Arc::new(tera);

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        let auth_repo = Arc::new(PostgresAuthRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(auth_repo.clone(), config.clone()));

        AppState {
            config: config.clone(),
            user_repo: Arc::new(PostgresUserRepo::new(pool.clone())),
            invitation_repo: Arc::new(PostgresInvitationRepo::new(pool.clone())),
            guest_repo: Arc::new(PostgresGuestRepo::new(pool.clone())),
            rsvp_repo: Arc::new(PostgresRsvpRepo::new(pool.clone())),
            auth_repo,
            auth_service,
            message_service,
            templates,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        let auth_repo = Arc::new(SqliteAuthRepo::new(pool.clone()));
        let auth_service = Arc::new(AuthService::new(auth_repo.clone(), config.clone()));

        AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            invitation_repo: Arc::new(SqliteInvitationRepo::new(pool.clone())),
            guest_repo: Arc::new(SqliteGuestRepo::new(pool.clone())),
            rsvp_repo: Arc::new(SqliteRsvpRepo::new(pool.clone())),
            auth_repo,
            auth_service,
            message_service,
            templates,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
