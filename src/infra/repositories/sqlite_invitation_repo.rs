use crate::domain::{models::invitation::Invitation, ports::InvitationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteInvitationRepo {
    pool: SqlitePool,
}

impl SqliteInvitationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvitationRepository for SqliteInvitationRepo {
    async fn create(&self, invitation: &Invitation) -> Result<Invitation, AppError> {
        sqlx::query_as::<_, Invitation>(
            r#"INSERT INTO invitations (
                id, owner_id, url_slug, title, description, event_date, location,
                template_id, font, primary_color, secondary_color, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#
        )
            .bind(&invitation.id)
            .bind(&invitation.owner_id)
            .bind(&invitation.url_slug)
            .bind(&invitation.title)
            .bind(&invitation.description)
            .bind(invitation.event_date)
            .bind(&invitation.location)
            .bind(&invitation.template_id)
            .bind(&invitation.font)
            .bind(&invitation.primary_color)
            .bind(&invitation.secondary_color)
            .bind(invitation.created_at)
            .bind(invitation.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Invitation>, AppError> {
        sqlx::query_as::<_, Invitation>(
            "SELECT * FROM invitations WHERE url_slug = ?",
        )
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, owner_id: &str, id: &str) -> Result<Option<Invitation>, AppError> {
        sqlx::query_as::<_, Invitation>(
            "SELECT * FROM invitations WHERE owner_id = ? AND id = ?",
        )
            .bind(owner_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Invitation>, AppError> {
        sqlx::query_as::<_, Invitation>(
            "SELECT * FROM invitations WHERE owner_id = ? ORDER BY created_at DESC",
        )
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, invitation: &Invitation) -> Result<Invitation, AppError> {
        // url_slug and owner_id deliberately absent from the SET list
        sqlx::query_as::<_, Invitation>(
            r#"UPDATE invitations SET
                title=?, description=?, event_date=?, location=?,
                template_id=?, font=?, primary_color=?, secondary_color=?, updated_at=?
               WHERE id=? AND owner_id=? RETURNING *"#
        )
            .bind(&invitation.title)
            .bind(&invitation.description)
            .bind(invitation.event_date)
            .bind(&invitation.location)
            .bind(&invitation.template_id)
            .bind(&invitation.font)
            .bind(&invitation.primary_color)
            .bind(&invitation.secondary_color)
            .bind(invitation.updated_at)
            .bind(&invitation.id)
            .bind(&invitation.owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, owner_id: &str, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM invitations WHERE id = ? AND owner_id = ?")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Invitation not found".into()));
        }
        Ok(())
    }
}
