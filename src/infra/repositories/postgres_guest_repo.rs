use crate::domain::{models::guest::Guest, ports::GuestRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresGuestRepo {
    pool: PgPool,
}

impl PostgresGuestRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuestRepository for PostgresGuestRepo {
    async fn create(&self, guest: &Guest) -> Result<Guest, AppError> {
        sqlx::query_as::<_, Guest>(
            "INSERT INTO guests (id, invitation_id, full_name, phone, status, created_at) VALUES ($1, $2, $3, $4, $5, $6) RETURNING id, invitation_id, full_name, phone, status, created_at",
        )
            .bind(&guest.id)
            .bind(&guest.invitation_id)
            .bind(&guest.full_name)
            .bind(&guest.phone)
            .bind(&guest.status)
            .bind(guest.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Guest>, AppError> {
        sqlx::query_as::<_, Guest>(
            "SELECT id, invitation_id, full_name, phone, status, created_at FROM guests WHERE id = $1",
        )
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_invitation(&self, invitation_id: &str) -> Result<Vec<Guest>, AppError> {
        sqlx::query_as::<_, Guest>(
            "SELECT id, invitation_id, full_name, phone, status, created_at FROM guests WHERE invitation_id = $1 ORDER BY created_at DESC",
        )
            .bind(invitation_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_pending(&self, invitation_id: &str) -> Result<Vec<Guest>, AppError> {
        sqlx::query_as::<_, Guest>(
            "SELECT id, invitation_id, full_name, phone, status, created_at FROM guests WHERE invitation_id = $1 AND status = 'pending' ORDER BY created_at ASC",
        )
            .bind(invitation_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, guest: &Guest) -> Result<Guest, AppError> {
        sqlx::query_as::<_, Guest>(
            "UPDATE guests SET full_name=$1, phone=$2, status=$3 WHERE id=$4 RETURNING *"
        )
            .bind(&guest.full_name)
            .bind(&guest.phone)
            .bind(&guest.status)
            .bind(&guest.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM guests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Guest not found".into()));
        }
        Ok(())
    }
}
