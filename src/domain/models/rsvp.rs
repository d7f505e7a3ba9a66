use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Rsvp {
    pub id: String,
    pub invitation_id: String,
    pub name: String,
    pub email: String,
    pub attending: bool,
    pub created_at: DateTime<Utc>,
}

impl Rsvp {
    pub fn new(invitation_id: String, name: String, email: String, attending: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            invitation_id,
            name,
            email,
            attending,
            created_at: Utc::now(),
        }
    }
}
