//! Per-meeting attendance: read the roster, replace the roster.

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::attendance_repo;
use crate::error::ApiError;
use crate::http::auth::AdminSession;

//////////////////////////////////////////////////
// Requests
//////////////////////////////////////////////////

#[derive(Deserialize)]
pub struct AttendanceQuery {
    #[serde(rename = "meetingId")]
    pub meeting_id: Uuid,
}

#[derive(Deserialize)]
pub struct SaveAttendanceRequest {
    #[serde(rename = "meetingId")]
    pub meeting_id: Uuid,
    #[serde(rename = "memberIds", default)]
    pub member_ids: Vec<Uuid>,
}

//////////////////////////////////////////////////
// Handlers
//////////////////////////////////////////////////

/// GET /api/attendance?meetingId=ID
#[get("/attendance")]
pub async fn get_attendance(
    web::Query(params): web::Query<AttendanceQuery>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    let member_ids = attendance_repo::member_ids_for_meeting(&db, params.meeting_id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "memberIds": member_ids })))
}

/// POST /api/attendance replaces the full roster. An empty id list is
/// valid and records that nobody attended.
#[post("/attendance")]
pub async fn save_attendance(
    _session: AdminSession,
    info: web::Json<SaveAttendanceRequest>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, ApiError> {
    attendance_repo::replace_for_meeting(&db, info.meeting_id, &info.member_ids).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_attendance).service(save_attendance);
}
