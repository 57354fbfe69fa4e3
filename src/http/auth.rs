//! Password-gated admin session (opaque cookie token)
//!
//! There is a single shared credential and no server-side session store:
//! login mints a 256-bit token, and every later check only validates the
//! token's shape (64 lowercase hex chars). Logout clears the client cookie.

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use rand::RngCore;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::config::settings;
use crate::error::ApiError;

pub const SESSION_COOKIE: &str = "admin_session";
const SESSION_MAX_AGE_DAYS: i64 = 7;
const TOKEN_LEN: usize = 64;

//////////////////////////////////////////////////
// Token minting & validation
//////////////////////////////////////////////////

/// Mint a fresh session token: sha256(secret + timestamp + 16 random bytes),
/// hex-encoded. The hash construction is not a security boundary; the random
/// material carries the entropy.
pub fn generate_session_token(secret: &str) -> String {
    let mut random = [0u8; 16];
    rand::rng().fill_bytes(&mut random);

    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(chrono::Utc::now().timestamp_millis().to_string().as_bytes());
    hasher.update(hex::encode(random).as_bytes());
    hex::encode(hasher.finalize())
}

/// Structural bearer-token check: exactly 64 lowercase hex characters.
/// No stored-session lookup; a well-shaped token is an authenticated one.
pub fn is_valid_session_token(token: &str) -> bool {
    token.len() == TOKEN_LEN
        && token
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Compare the candidate against the configured secret. Both sides are
/// hashed first so the comparison cost does not depend on how much of the
/// candidate matches. An empty configured secret rejects everything.
pub fn verify_password(candidate: &str, configured: &str) -> bool {
    if configured.is_empty() {
        return false;
    }
    Sha256::digest(candidate.as_bytes()) == Sha256::digest(configured.as_bytes())
}

//////////////////////////////////////////////////
// ───────── AdminSession extractor ─────────
//////////////////////////////////////////////////

pub mod extractor {
    use actix_web::{dev::Payload, FromRequest, HttpRequest};
    use futures_util::future::{ready, Ready};

    use crate::error::ApiError;

    use super::{is_valid_session_token, SESSION_COOKIE};

    /// Gates write endpoints on a well-shaped session cookie.
    #[derive(Debug, Clone)]
    pub struct AdminSession;

    impl FromRequest for AdminSession {
        type Error = ApiError;
        type Future = Ready<Result<Self, Self::Error>>;

        fn from_request(req: &HttpRequest, _pl: &mut Payload) -> Self::Future {
            let ok = req
                .cookie(SESSION_COOKIE)
                .map(|c| is_valid_session_token(c.value()))
                .unwrap_or(false);

            ready(if ok { Ok(AdminSession) } else { Err(ApiError::Auth) })
        }
    }
}
pub use extractor::AdminSession;

//////////////////////////////////////////////////
// POST /api/auth/login
//////////////////////////////////////////////////

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[post("/auth/login")]
pub async fn login(info: web::Json<LoginRequest>) -> Result<HttpResponse, ApiError> {
    if !verify_password(&info.password, &settings().admin_password) {
        // Same rejection for every failure mode.
        return Err(ApiError::Auth);
    }

    let token = generate_session_token(&settings().admin_password);

    let cookie = Cookie::build(SESSION_COOKIE, token)
        .http_only(true)
        .secure(settings().cookie_secure)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::days(SESSION_MAX_AGE_DAYS))
        .path("/")
        .finish();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(serde_json::json!({ "success": true })))
}

//////////////////////////////////////////////////
// GET /api/auth/check
//////////////////////////////////////////////////

#[get("/auth/check")]
pub async fn check(req: HttpRequest) -> impl Responder {
    let authenticated = req
        .cookie(SESSION_COOKIE)
        .map(|c| is_valid_session_token(c.value()))
        .unwrap_or(false);

    if authenticated {
        HttpResponse::Ok().json(serde_json::json!({ "authenticated": true }))
    } else {
        HttpResponse::Unauthorized().json(serde_json::json!({ "authenticated": false }))
    }
}

//////////////////////////////////////////////////
// POST /api/auth/logout
//////////////////////////////////////////////////

#[post("/auth/logout")]
pub async fn logout() -> impl Responder {
    // Clears the client credential only; there is nothing to revoke server-side.
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();

    HttpResponse::Ok()
        .cookie(cookie)
        .json(serde_json::json!({ "success": true }))
}

//////////////////////////////////////////////////
// Mount
//////////////////////////////////////////////////

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(login).service(check).service(logout);
}
