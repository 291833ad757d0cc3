use crate::db::credential_store::CredentialStore;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserCreate, UserPublic};
use actix_web::{post, web};
use std::sync::Arc;

/// Same validated path as `/api/auth/register`.
#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<CredentialStore>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserPublic> {
    let user = db.register_user(body.into_inner()).await?;

    Ok(ApiResponse::Created(UserPublic::from(user)))
}
