use actix_web::get;

use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::Session;

/// The caller's session, or `null` when anonymous.
#[get("")]
async fn session(session: Option<Session>) -> ApiResult<Option<Session>> {
    Ok(ApiResponse::Ok(session))
}
