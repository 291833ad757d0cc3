use actix_web::{http::header::ContentType, web, HttpResponse};
use serde::Deserialize;

use crate::utils::html::{escape, page};

fn html(title: &str, body: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page(title, "", body))
}

async fn home() -> HttpResponse {
    html(
        "Welcome",
        "<h1>Welcome</h1>\n<p><a href=\"/login\">Sign in</a> or <a href=\"/register\">create an account</a>.</p>",
    )
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct LoginPageQuery {
    callback_url: Option<String>,
    error: Option<String>,
}

async fn login_page(query: web::Query<LoginPageQuery>) -> HttpResponse {
    let notice = match query.error.as_deref() {
        Some(_) => "<p role=\"alert\">Invalid email or password.</p>\n",
        None => "",
    };
    let callback = escape(query.callback_url.as_deref().unwrap_or("/dashboard"));
    let body = format!(
        "<h1>Sign in</h1>\n{notice}\
         <form method=\"post\" action=\"/api/auth/login\">\n\
         <input type=\"hidden\" name=\"callbackUrl\" value=\"{callback}\">\n\
         <label>Email <input type=\"email\" name=\"email\" required></label>\n\
         <label>Password <input type=\"password\" name=\"password\" required></label>\n\
         <button type=\"submit\">Sign in</button>\n\
         </form>\n\
         <p>No account? <a href=\"/register\">Register</a></p>"
    );
    html("Sign in", &body)
}

const REGISTER_BODY: &str = r#"<h1>Create an account</h1>
<form id="register">
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" minlength="6" required></label>
<label>First name <input name="firstName"></label>
<label>Last name <input name="lastName"></label>
<label>Invite code <input name="inviteCode" required></label>
<button type="submit">Register</button>
</form>
<p id="status" role="status"></p>
<script>
document.getElementById("register").addEventListener("submit", async (e) => {
  e.preventDefault();
  const body = Object.fromEntries(new FormData(e.target));
  const res = await fetch("/api/auth/register", {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify(body),
  });
  if (res.ok) { window.location.href = "/login"; return; }
  const err = await res.json().catch(() => ({}));
  document.getElementById("status").textContent = err.message || "Registration failed";
});
</script>"#;

async fn register_page() -> HttpResponse {
    html("Register", REGISTER_BODY)
}

async fn reset_password_page() -> HttpResponse {
    html(
        "Reset password",
        "<h1>Reset password</h1>\n<p>Contact your administrator to reset your password.</p>",
    )
}

async fn privacy_page() -> HttpResponse {
    html("Privacy", "<h1>Privacy</h1>\n<p>We store your email, name and a hash of your password.</p>")
}

async fn terms_page() -> HttpResponse {
    html("Terms", "<h1>Terms of service</h1>\n<p>Accounts are invite-only.</p>")
}

async fn docs_page() -> HttpResponse {
    html(
        "Docs",
        "<h1>API</h1>\n<ul>\n\
         <li><code>POST /api/auth/register</code></li>\n\
         <li><code>POST /api/auth/login</code></li>\n\
         <li><code>GET /api/auth/session</code></li>\n\
         <li><code>POST /api/v1/users</code></li>\n\
         <li><code>DELETE /api/v1/users/{id}</code></li>\n</ul>",
    )
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/login", web::get().to(login_page))
        .route("/register", web::get().to(register_page))
        .route("/reset-password", web::get().to(reset_password_page))
        .route("/privacy", web::get().to(privacy_page))
        .route("/terms", web::get().to(terms_page))
        .route("/docs", web::get().to(docs_page));
}
