use anyhow::{Context, Result};
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

/// Ids of members marked present at one meeting.
pub async fn member_ids_for_meeting(db: &PgPool, meeting_id: Uuid) -> Result<Vec<Uuid>> {
    sqlx::query_scalar::<_, Uuid>("SELECT member_id FROM attendance WHERE meeting_id = $1")
        .bind(meeting_id)
        .fetch_all(db)
        .await
        .context("fetching attendance for meeting")
}

/// One entry per attendance row at a meeting held on or before `today`.
/// Members appear once per meeting attended; this is the ranking input.
pub async fn attended_member_ids_until(db: &PgPool, today: NaiveDate) -> Result<Vec<Uuid>> {
    sqlx::query_scalar::<_, Uuid>(
        "SELECT a.member_id
           FROM attendance a
           JOIN meetings m ON m.id = a.meeting_id
          WHERE m.meeting_date <= $1",
    )
    .bind(today)
    .fetch_all(db)
    .await
    .context("fetching past attendance")
}

/// Collapse duplicate member ids to one row each, in a stable order.
pub fn dedup_roster(member_ids: &[Uuid]) -> Vec<Uuid> {
    let mut ids = member_ids.to_vec();
    ids.sort();
    ids.dedup();
    ids
}

/// Replace the full roster for one meeting: delete everything, then insert
/// one row per deduplicated member id. The two steps are not wrapped in a
/// transaction: a failed delete aborts before any insert, and a failed
/// insert after a successful delete leaves the meeting with an empty roster.
/// Concurrent calls for the same meeting can interleave; callers that care
/// must serialize per meeting id.
pub async fn replace_for_meeting(db: &PgPool, meeting_id: Uuid, member_ids: &[Uuid]) -> Result<()> {
    let ids = dedup_roster(member_ids);

    sqlx::query("DELETE FROM attendance WHERE meeting_id = $1")
        .bind(meeting_id)
        .execute(db)
        .await
        .context("clearing attendance for meeting")?;

    if !ids.is_empty() {
        sqlx::query(
            "INSERT INTO attendance (meeting_id, member_id)
             SELECT $1, member_id FROM UNNEST($2::uuid[]) AS t(member_id)",
        )
        .bind(meeting_id)
        .bind(&ids)
        .execute(db)
        .await
        .context("inserting attendance for meeting")?;
    }

    Ok(())
}
