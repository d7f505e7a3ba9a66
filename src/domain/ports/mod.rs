use crate::domain::models::{
    user::User, invitation::Invitation, guest::Guest, rsvp::Rsvp,
    auth::RefreshTokenRecord,
};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn create_refresh_token(&self, record: &RefreshTokenRecord) -> Result<(), AppError>;
    async fn find_refresh_token(&self, token_hash: &str) -> Result<Option<RefreshTokenRecord>, AppError>;
    async fn delete_refresh_token(&self, token_hash: &str) -> Result<(), AppError>;
    async fn delete_refresh_family(&self, family_id: Uuid) -> Result<(), AppError>;
}

#[async_trait]
pub trait InvitationRepository: Send + Sync {
    /// Insert fails with a unique-violation database error when the slug is
    /// already taken; callers retry with a fresh slug.
    async fn create(&self, invitation: &Invitation) -> Result<Invitation, AppError>;
    /// Guest-facing exact-match lookup. Unscoped: slugs are globally unique.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Invitation>, AppError>;
    /// Owner-facing lookup, always scoped by owner.
    async fn find_by_id(&self, owner_id: &str, id: &str) -> Result<Option<Invitation>, AppError>;
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Invitation>, AppError>;
    /// Updates mutable fields only; `url_slug` and `owner_id` are never written.
    async fn update(&self, invitation: &Invitation) -> Result<Invitation, AppError>;
    async fn delete(&self, owner_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait GuestRepository: Send + Sync {
    async fn create(&self, guest: &Guest) -> Result<Guest, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Guest>, AppError>;
    async fn list_by_invitation(&self, invitation_id: &str) -> Result<Vec<Guest>, AppError>;
    async fn list_pending(&self, invitation_id: &str) -> Result<Vec<Guest>, AppError>;
    async fn update(&self, guest: &Guest) -> Result<Guest, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait RsvpRepository: Send + Sync {
    async fn create(&self, rsvp: &Rsvp) -> Result<Rsvp, AppError>;
    async fn list_by_invitation(&self, invitation_id: &str) -> Result<Vec<Rsvp>, AppError>;
}

#[async_trait]
pub trait MessageService: Send + Sync {
    async fn send(&self, recipient: &str, body: &str) -> Result<(), AppError>;
}
