use std::sync::Arc;
use crate::domain::ports::{
    UserRepository, AuthRepository, InvitationRepository, GuestRepository,
    RsvpRepository, MessageService,
};
use crate::domain::services::auth_service::AuthService;
use crate::config::Config;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub user_repo: Arc<dyn UserRepository>,
    pub auth_repo: Arc<dyn AuthRepository>,
    pub invitation_repo: Arc<dyn InvitationRepository>,
    pub guest_repo: Arc<dyn GuestRepository>,
    pub rsvp_repo: Arc<dyn RsvpRepository>,
    pub auth_service: Arc<AuthService>,
    pub message_service: Arc<dyn MessageService>,
    pub templates: Arc<Tera>,
}
