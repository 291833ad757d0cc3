use actix_web::{http::header, post, web, Either, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::auth::{Authenticator, SessionManager};
use crate::types::error::AppError;
use crate::utils::webutils::safe_callback;

const DEFAULT_LANDING: &str = "/dashboard";
const FAILED_LOGIN: &str = "/login?error=CredentialsSignin";

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RLogin {
    pub email: Option<String>,
    pub password: Option<String>,
    pub callback_url: Option<String>,
}

/// Back to the login page, keeping an on-site callback for the retry.
fn failed_login_location(callback: Option<&str>) -> String {
    match callback {
        Some(cb) => format!("{FAILED_LOGIN}&callbackUrl={}", urlencoding::encode(cb)),
        None => FAILED_LOGIN.to_string(),
    }
}

fn see_other(location: &str) -> actix_web::HttpResponseBuilder {
    let mut builder = HttpResponse::SeeOther();
    builder.insert_header((header::LOCATION, location.to_string()));
    builder
}

/// JSON clients get the session back (or 401); browser forms get redirected.
#[post("")]
async fn login(
    authenticator: web::Data<Authenticator>,
    sessions: web::Data<SessionManager>,
    body: Either<web::Json<RLogin>, web::Form<RLogin>>,
) -> Result<HttpResponse, AppError> {
    let (body, from_form) = match body {
        Either::Left(json) => (json.into_inner(), false),
        Either::Right(form) => (form.into_inner(), true),
    };

    let identity = authenticator
        .authenticate(body.email.as_deref(), body.password.as_deref())
        .await?;

    let callback = safe_callback(body.callback_url.as_deref());

    let Some(identity) = identity else {
        if from_form {
            return Ok(see_other(&failed_login_location(callback.as_deref())).finish());
        }
        return Err(AppError::Unauthorized);
    };

    let (token, session) = sessions.issue(&identity)?;
    let cookie = sessions.cookie(token);

    if from_form {
        let target = callback.unwrap_or_else(|| DEFAULT_LANDING.to_string());
        return Ok(see_other(&target).cookie(cookie).finish());
    }
    Ok(HttpResponse::Ok().cookie(cookie).json(session))
}
