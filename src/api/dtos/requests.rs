use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct CreateInvitationRequest {
    pub title: String,
    pub description: Option<String>,
    pub event_date: DateTime<Utc>,
    pub location: Option<String>,
    pub template_id: Option<String>,
    pub font: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateInvitationRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub template_id: Option<String>,
    pub font: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateGuestRequest {
    pub full_name: String,
    pub phone: String,
}

#[derive(Deserialize)]
pub struct UpdateGuestRequest {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateRsvpRequest {
    pub name: String,
    pub email: String,
    pub attending: bool,
}
