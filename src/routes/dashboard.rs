use actix_web::{get, http::header::ContentType, HttpResponse};

use crate::types::session::Session;
use crate::utils::html::{escape, page};

#[get("/dashboard")]
async fn dashboard(session: Session) -> HttpResponse {
    let user = &session.user;
    let greeting = if user.name.is_empty() { &user.email } else { &user.name };
    let body = format!(
        "<h1>Welcome, {greeting}</h1>\n\
         <p>Signed in as <strong>{email}</strong>.</p>\n\
         <p><a href=\"/logout\">Sign out</a></p>",
        greeting = escape(greeting),
        email = escape(&user.email),
    );

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page("Dashboard", "", &body))
}
