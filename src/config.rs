//! Runtime configuration for the rollcall server.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// Shared administrative password; empty disables login entirely.
    pub admin_password: String,
    /// Object-store base URL, e.g. `https://xyz.example.co/storage/v1`.
    pub storage_url: String,
    /// Object-store service key (sent as a bearer token).
    pub storage_key: String,
    /// Bucket holding meeting photos.
    pub storage_bucket: String,
    /// Set the `Secure` flag on the session cookie.
    pub cookie_secure: bool,
}

impl Settings {
    fn from_env() -> Self {
        let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_default();
        let storage_url = env::var("STORAGE_URL").unwrap_or_default();
        let storage_key = env::var("STORAGE_KEY").unwrap_or_default();
        let storage_bucket = env::var("STORAGE_BUCKET").unwrap_or_else(|_| "photos".into());

        let cookie_secure = env::var("APP_ENV")
            .map(|v| v == "production")
            .unwrap_or(false);

        Settings {
            admin_password,
            storage_url,
            storage_key,
            storage_bucket,
            cookie_secure,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
