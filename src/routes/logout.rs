use actix_web::{get, http::header::ContentType, web, HttpResponse};

use crate::auth::SessionManager;
use crate::utils::html::page;

pub const LOGOUT_REDIRECT_DELAY_SECS: u32 = 2;

/// Drops the session cookie and bounces to `/login` after a short pause.
/// Tokens are stateless, so there is nothing to revoke server-side.
#[get("/logout")]
async fn logout(sessions: web::Data<SessionManager>) -> HttpResponse {
    let refresh = format!("{LOGOUT_REDIRECT_DELAY_SECS};url=/login");
    let head = format!("<meta http-equiv=\"refresh\" content=\"{refresh}\">\n");
    let body = "<h1>Signed out</h1>\n<p>Taking you back to <a href=\"/login\">the login page</a>...</p>";

    HttpResponse::Ok()
        .cookie(sessions.removal_cookie())
        .insert_header(("Refresh", refresh))
        .content_type(ContentType::html())
        .body(page("Signed out", &head, body))
}
