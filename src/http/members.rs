//! Member roster listing.

use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::db::member_repo;
use crate::error::ApiError;

#[get("/members")]
pub async fn list_members(db: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let members = member_repo::list_all(&db).await?;
    Ok(HttpResponse::Ok().json(members))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_members);
}
