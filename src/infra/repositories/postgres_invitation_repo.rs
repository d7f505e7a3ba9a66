use crate::domain::{models::invitation::Invitation, ports::InvitationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresInvitationRepo {
    pool: PgPool,
}

impl PostgresInvitationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvitationRepository for PostgresInvitationRepo {
    async fn create(&self, invitation: &Invitation) -> Result<Invitation, AppError> {
        sqlx::query_as::<_, Invitation>(
            r#"INSERT INTO invitations (
                id, owner_id, url_slug, title, description, event_date, location,
                template_id, font, primary_color, secondary_color, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
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
            "SELECT * FROM invitations WHERE url_slug = $1",
        )
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, owner_id: &str, id: &str) -> Result<Option<Invitation>, AppError> {
        sqlx::query_as::<_, Invitation>(
            "SELECT * FROM invitations WHERE owner_id = $1 AND id = $2",
        )
            .bind(owner_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Invitation>, AppError> {
        sqlx::query_as::<_, Invitation>(
            "SELECT * FROM invitations WHERE owner_id = $1 ORDER BY created_at DESC",
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
                title=$1, description=$2, event_date=$3, location=$4,
                template_id=$5, font=$6, primary_color=$7, secondary_color=$8, updated_at=$9
               WHERE id=$10 AND owner_id=$11 RETURNING *"#
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
        let result = sqlx::query("DELETE FROM invitations WHERE id = $1 AND owner_id = $2")
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
