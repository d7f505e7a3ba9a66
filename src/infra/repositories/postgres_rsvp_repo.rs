use crate::domain::{models::rsvp::Rsvp, ports::RsvpRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresRsvpRepo {
    pool: PgPool,
}

impl PostgresRsvpRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpRepository for PostgresRsvpRepo {
    async fn create(&self, rsvp: &Rsvp) -> Result<Rsvp, AppError> {
        sqlx::query_as::<_, Rsvp>(
            "INSERT INTO rsvps (id, invitation_id, name, email, attending, created_at) VALUES ($1, $2, $3, $4, $5, $6) RETURNING id, invitation_id, name, email, attending, created_at",
        )
            .bind(&rsvp.id)
            .bind(&rsvp.invitation_id)
            .bind(&rsvp.name)
            .bind(&rsvp.email)
            .bind(rsvp.attending)
            .bind(rsvp.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_invitation(&self, invitation_id: &str) -> Result<Vec<Rsvp>, AppError> {
        sqlx::query_as::<_, Rsvp>(
            "SELECT id, invitation_id, name, email, attending, created_at FROM rsvps WHERE invitation_id = $1 ORDER BY created_at DESC",
        )
            .bind(invitation_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
