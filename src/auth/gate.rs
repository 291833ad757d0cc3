use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header,
    middleware::Next,
    web, Error, HttpMessage, HttpResponse,
};
use tracing::debug;

use crate::auth::policy::{evaluate, is_static_asset, Decision};
use crate::auth::session::SessionManager;
use crate::utils::webutils::login_redirect_location;

/// Runs ahead of every route. Wire it with `middleware::from_fn(access_gate)`.
///
/// A resolved session is left in the request extensions for handlers.
pub async fn access_gate(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<EitherBody<impl MessageBody>>, Error> {
    let path = req.path().to_string();
    if is_static_asset(&path) {
        return Ok(next.call(req).await?.map_into_left_body());
    }

    let session = req
        .app_data::<web::Data<SessionManager>>()
        .and_then(|sessions| sessions.resolve(req.request()));

    match evaluate(&path, session.as_ref()) {
        Decision::Allow => {
            if let Some(session) = session {
                req.extensions_mut().insert(session);
            }
            Ok(next.call(req).await?.map_into_left_body())
        }
        Decision::RedirectToLogin => {
            debug!(%path, "anonymous request redirected to login");
            let original = match req.query_string() {
                "" => path,
                qs => format!("{path}?{qs}"),
            };
            let redirect = HttpResponse::TemporaryRedirect()
                .insert_header((header::LOCATION, login_redirect_location(&original)))
                .finish();
            Ok(req.into_response(redirect).map_into_right_body())
        }
    }
}
