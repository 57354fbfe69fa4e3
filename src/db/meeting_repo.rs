use anyhow::{Context, Result};
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::Meeting;

/// Every meeting, most recent first.
pub async fn list_all(db: &PgPool) -> Result<Vec<Meeting>> {
    sqlx::query_as::<_, Meeting>(
        "SELECT id, meeting_date, photo_url, created_at
           FROM meetings
          ORDER BY meeting_date DESC",
    )
    .fetch_all(db)
    .await
    .context("listing meetings")
}

/// Meetings already held (date on or before `today`), most recent first.
pub async fn list_past(db: &PgPool, today: NaiveDate) -> Result<Vec<Meeting>> {
    sqlx::query_as::<_, Meeting>(
        "SELECT id, meeting_date, photo_url, created_at
           FROM meetings
          WHERE meeting_date <= $1
          ORDER BY meeting_date DESC",
    )
    .bind(today)
    .fetch_all(db)
    .await
    .context("listing past meetings")
}

/// Number of meetings held on or before `today`.
pub async fn count_past(db: &PgPool, today: NaiveDate) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM meetings WHERE meeting_date <= $1")
        .bind(today)
        .fetch_one(db)
        .await
        .context("counting past meetings")
}

/// Current photo URL of a meeting, if the meeting exists and has one.
pub async fn photo_url(db: &PgPool, meeting_id: Uuid) -> Result<Option<String>> {
    let url: Option<Option<String>> =
        sqlx::query_scalar("SELECT photo_url FROM meetings WHERE id = $1")
            .bind(meeting_id)
            .fetch_optional(db)
            .await
            .context("fetching meeting photo url")?;
    Ok(url.flatten())
}

/// Point a meeting at a freshly stored photo. A dangling meeting id updates
/// zero rows and is not an error (existence is not validated at this layer).
pub async fn set_photo_url(db: &PgPool, meeting_id: Uuid, url: &str) -> Result<()> {
    sqlx::query("UPDATE meetings SET photo_url = $2 WHERE id = $1")
        .bind(meeting_id)
        .bind(url)
        .execute(db)
        .await
        .context("updating meeting photo url")?;
    Ok(())
}
