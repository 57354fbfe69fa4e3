use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Meeting {
    pub id: Uuid,
    /// Calendar date only; a meeting is "past" when this is <= today (UTC).
    pub meeting_date: NaiveDate,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
