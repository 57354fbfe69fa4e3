use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::db::models::Member;

/// Every member, ordered by display name.
pub async fn list_all(db: &PgPool) -> Result<Vec<Member>> {
    sqlx::query_as::<_, Member>(
        "SELECT id, name, created_at
           FROM members
          ORDER BY name",
    )
    .fetch_all(db)
    .await
    .context("listing members")
}
