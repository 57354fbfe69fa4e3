//! Meeting photo upload (multipart).
//!
//! Validation order: session, then meeting id shape, then declared MIME.
//! Replaces any previously stored photo for the meeting: the old object is
//! deleted first, the processed image is written under a fresh name, and
//! the meeting row is pointed at it last. The delete→upload and
//! upload→update steps each leave a narrow, accepted failure window (a
//! recoverable missing photo, an unreferenced orphan object).

use actix_multipart::form::{bytes::Bytes as UploadedFile, text::Text, MultipartForm};
use actix_web::{post, web, HttpResponse};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::meeting_repo;
use crate::error::ApiError;
use crate::http::auth::AdminSession;
use crate::photo;
use crate::storage::{object_name_from_url, PhotoStore, StoreError};

#[derive(MultipartForm)]
pub struct PhotoUploadForm {
    pub file: UploadedFile,
    #[multipart(rename = "meetingId")]
    pub meeting_id: Text<String>,
}

#[post("/meetings/upload")]
pub async fn upload_photo(
    _session: AdminSession,
    MultipartForm(form): MultipartForm<PhotoUploadForm>,
    db: web::Data<PgPool>,
    store: web::Data<PhotoStore>,
) -> Result<HttpResponse, ApiError> {
    let meeting_id = Uuid::parse_str(&form.meeting_id)
        .map_err(|_| ApiError::Validation("invalid meetingId".into()))?;

    let declared_image = form
        .file
        .content_type
        .as_ref()
        .map(|m| m.essence_str().starts_with("image/"))
        .unwrap_or(false);
    if !declared_image {
        return Err(ApiError::Validation("only images are allowed".into()));
    }

    // The previous object goes away before the new one is written; a
    // failed delete only logs and the replacement still proceeds.
    if let Some(old_url) = meeting_repo::photo_url(&db, meeting_id).await? {
        if let Some(old_name) = object_name_from_url(&old_url) {
            if let Err(e) = store.remove(old_name).await {
                log::warn!("could not remove previous photo {old_name}: {e}");
            }
        }
    }

    // Image work is CPU-bound; keep it off the async workers.
    let data = form.file.data.to_vec();
    let processed = web::block(move || photo::process(&data))
        .await
        .map_err(|_| ApiError::Upload("failed to process image".into()))?
        .map_err(|e| {
            log::error!("image processing failed: {e:?}");
            ApiError::Upload("failed to process image".into())
        })?;

    // Timestamped name keeps repeated uploads for one meeting unique.
    let file_name = format!(
        "{}-{}.{}",
        meeting_id,
        Utc::now().timestamp_millis(),
        photo::PHOTO_EXTENSION
    );

    let photo_url = match store
        .upload(&file_name, processed.bytes, photo::PHOTO_CONTENT_TYPE)
        .await
    {
        Ok(url) => url,
        Err(StoreError::BucketMissing) => {
            return Err(ApiError::Upload("photo bucket not configured".into()))
        }
        Err(e) => {
            log::error!("photo upload failed: {e:?}");
            return Err(ApiError::Upload("failed to upload image".into()));
        }
    };

    if let Err(e) = meeting_repo::set_photo_url(&db, meeting_id, &photo_url).await {
        log::error!("photo url update failed, object {file_name} is unreferenced: {e:?}");
        return Err(ApiError::Upload("failed to update meeting".into()));
    }

    log::info!(
        "stored photo {file_name} ({}x{}) for meeting {meeting_id}",
        processed.width,
        processed.height
    );

    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true, "photoUrl": photo_url })))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(upload_photo);
}
