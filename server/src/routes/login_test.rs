use super::*;
use axum::http::{StatusCode, header};
use axum_extra::extract::cookie::Cookie;

#[test]
fn load_renders_without_cookies() {
    assert_eq!(load(&CookieJar::new()), LoadOutcome::Render);
}

#[test]
fn load_renders_with_unrelated_cookies() {
    let jar = CookieJar::new().add(Cookie::new("theme", "dark"));
    assert_eq!(load(&jar), LoadOutcome::Render);
}

#[test]
fn load_redirects_with_access_token() {
    let jar = CookieJar::new().add(Cookie::new(gate::ACCESS_TOKEN_COOKIE, "a"));
    assert_eq!(load(&jar), LoadOutcome::Redirect(GateRedirect::found("/")));
}

#[test]
fn load_redirects_with_refresh_token() {
    let jar = CookieJar::new().add(Cookie::new(gate::REFRESH_TOKEN_COOKIE, "r"));
    assert_eq!(load(&jar), LoadOutcome::Redirect(GateRedirect::found("/")));
}

#[test]
fn load_redirects_on_empty_cookie_values() {
    for name in [gate::ACCESS_TOKEN_COOKIE, gate::REFRESH_TOKEN_COOKIE] {
        let jar = CookieJar::new().add(Cookie::new(name, ""));
        assert_eq!(load(&jar), LoadOutcome::Redirect(GateRedirect::found("/")), "cookie {name}");
    }
}

#[tokio::test]
async fn login_page_redirects_without_gate() {
    let jar = CookieJar::new().add(Cookie::new(gate::ACCESS_TOKEN_COOKIE, "a"));
    let response = login_page(jar).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");
}

#[tokio::test]
async fn login_page_renders_html_for_anonymous() {
    let response = login_page(CookieJar::new()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}
