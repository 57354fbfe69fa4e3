//! Session gate: token shape plus the full login/check/logout round trip.
//! The auth endpoints never touch the database, so they run against a real
//! service instance.

use actix_web::{test, web, App};
use rollcall_server::http;
use rollcall_server::http::auth::{generate_session_token, is_valid_session_token};

const PASSWORD: &str = "correct-horse";

fn set_password() {
    std::env::set_var("ADMIN_PASSWORD", PASSWORD);
}

//////////////////////////////////////////////////
// Token shape
//////////////////////////////////////////////////

#[::core::prelude::v1::test]
fn minted_tokens_are_64_lowercase_hex() {
    let token = generate_session_token("secret");
    assert_eq!(token.len(), 64);
    assert!(token.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
    assert!(is_valid_session_token(&token));
}

#[::core::prelude::v1::test]
fn minted_tokens_differ_between_calls() {
    assert_ne!(generate_session_token("secret"), generate_session_token("secret"));
}

#[::core::prelude::v1::test]
fn structural_check_rejects_malformed_tokens() {
    assert!(is_valid_session_token(&"a".repeat(64)));
    assert!(!is_valid_session_token(&"a".repeat(63)));
    assert!(!is_valid_session_token(&"a".repeat(65)));
    assert!(!is_valid_session_token(&"A".repeat(64))); // uppercase hex
    assert!(!is_valid_session_token(&"g".repeat(64))); // not hex
    assert!(!is_valid_session_token(""));
}

//////////////////////////////////////////////////
// HTTP round trip
//////////////////////////////////////////////////

macro_rules! auth_app {
    () => {
        test::init_service(
            App::new().service(web::scope("/api").configure(http::auth::init_routes)),
        )
        .await
    };
}

#[actix_rt::test]
async fn wrong_password_is_rejected_without_detail() {
    set_password();
    let app = auth_app!();

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({ "password": "nope" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    assert!(resp.response().cookies().next().is_none());
}

#[actix_rt::test]
async fn login_sets_session_cookie_and_check_accepts_it() {
    set_password();
    let app = auth_app!();

    // No cookie → unauthenticated.
    let req = test::TestRequest::get().uri("/api/auth/check").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // Login with the right password.
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({ "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "admin_session")
        .expect("login must set the session cookie")
        .into_owned();
    assert!(cookie.http_only().unwrap_or(false));
    assert!(is_valid_session_token(cookie.value()));

    // Check with the cookie → authenticated.
    let req = test::TestRequest::get()
        .uri("/api/auth/check")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["authenticated"], true);
}

#[actix_rt::test]
async fn logout_clears_the_client_cookie() {
    set_password();
    let app = auth_app!();

    let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "admin_session")
        .expect("logout must send a removal cookie")
        .into_owned();
    assert!(cookie.value().is_empty());
}

#[actix_rt::test]
async fn malformed_cookie_is_unauthenticated() {
    set_password();
    let app = auth_app!();

    let bad = actix_web::cookie::Cookie::new("admin_session", "DEADBEEF");
    let req = test::TestRequest::get()
        .uri("/api/auth/check")
        .cookie(bad)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}
