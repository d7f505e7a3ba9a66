use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Closed status set for the guest queue. The sending pipeline only ever
/// moves PENDING -> SENT; CONFIRMED and CANCELLED are owner-side bookkeeping.
pub const GUEST_STATUSES: [&str; 4] = ["pending", "sent", "confirmed", "cancelled"];

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Guest {
    pub id: String,
    pub invitation_id: String,
    pub full_name: String,
    pub phone: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Guest {
    pub fn new(invitation_id: String, full_name: String, phone: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            invitation_id,
            full_name,
            phone,
            status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }
}
