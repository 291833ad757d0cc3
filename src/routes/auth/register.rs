use actix_web::{post, web};
use std::sync::Arc;

use crate::db::credential_store::CredentialStore;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserCreate, UserPublic};

#[post("")]
async fn register(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<CredentialStore>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserPublic> {
    let user = db.register_user(body.into_inner()).await?;
    Ok(ApiResponse::Created(user.into()))
}
