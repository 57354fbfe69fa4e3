//! Attendance leaderboard endpoint.

use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;

use crate::db::{attendance_repo, meeting_repo, member_repo};
use crate::error::ApiError;
use crate::ranking::rank_members;

/// GET /api/ranking lists every member with count, percentage and rank.
/// Any of the three fetches failing makes the whole ranking unavailable;
/// there is no partial computation.
#[get("/ranking")]
pub async fn ranking(db: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let today = Utc::now().date_naive();

    let members = member_repo::list_all(&db).await?;
    let total_past_meetings = meeting_repo::count_past(&db, today).await?;
    let attendance = attendance_repo::attended_member_ids_until(&db, today).await?;

    let ranked = rank_members(members, total_past_meetings, &attendance);
    Ok(HttpResponse::Ok().json(ranked))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(ranking);
}
