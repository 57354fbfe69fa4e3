//! Meeting listings (all, and already-held only).

use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;

use crate::db::meeting_repo;
use crate::error::ApiError;

#[get("/meetings")]
pub async fn list_meetings(db: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let meetings = meeting_repo::list_all(&db).await?;
    Ok(HttpResponse::Ok().json(meetings))
}

/// Past meetings only, for the meeting picker on the public page.
#[get("/meetings/past")]
pub async fn list_past_meetings(db: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let today = Utc::now().date_naive();
    let meetings = meeting_repo::list_past(&db, today).await?;
    Ok(HttpResponse::Ok().json(meetings))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_meetings).service(list_past_meetings);
}
