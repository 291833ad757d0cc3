use actix_web::{
    cookie::{time::Duration as CookieDuration, Cookie, SameSite},
    http::header::Header,
    HttpRequest,
};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};

pub const SESSION_COOKIE: &str = "session_token";

pub fn decode_all(input: &str) -> Option<String> {
    urlencoding::decode(input).ok().map(|cow| cow.into_owned())
}

/// Session token from the cookie, or from a bearer header for non-browser clients.
pub fn session_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }
    Authorization::<Bearer>::parse(req)
        .ok()
        .map(|auth| auth.into_scheme().token().to_string())
}

pub fn session_cookie(token: String, max_age_secs: i64, secure: bool) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(CookieDuration::seconds(max_age_secs))
        .finish()
}

pub fn expired_session_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = session_cookie(String::new(), 0, secure);
    cookie.make_removal();
    cookie
}

/// `/login?callbackUrl=...` for a gated path.
pub fn login_redirect_location(original: &str) -> String {
    format!("/login?callbackUrl={}", urlencoding::encode(original))
}

/// Only same-origin relative paths are honored as post-login targets.
///
/// Browsers drop tabs and newlines while parsing a `Location`, so `/\t/host`
/// would become `//host`; any control or whitespace character disqualifies.
pub fn safe_callback(raw: Option<&str>) -> Option<String> {
    let decoded = decode_all(raw?)?;
    if decoded.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return None;
    }
    let is_local = decoded.starts_with('/')
        && !decoded.starts_with("//")
        && !decoded.starts_with("/\\");
    is_local.then_some(decoded)
}
