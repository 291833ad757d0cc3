use crate::db::credential_store::CredentialStore;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::session::Session;
use crate::types::user::UserDeleteRes;
use actix_web::{delete, web};
use std::sync::Arc;
use tracing::{info, warn};

#[delete("/{id}")]
async fn delete_user(
    db: web::Data<Arc<CredentialStore>>,
    path: web::Path<String>,
    session: Option<Session>,
) -> ApiResult<UserDeleteRes> {
    let target = path.into_inner();

    // The gate lets this prefix through, so ownership is checked here.
    let Some(session) = session else {
        return Err(AppError::Unauthorized);
    };
    if session.user.id != target {
        warn!(caller = %session.user.id, %target, "refused to delete another user's account");
        return Err(AppError::Forbidden);
    }

    db.delete_user(&target).await?;
    info!(user_id = %target, "user deleted");

    Ok(ApiResponse::Ok(UserDeleteRes {
        message: format!("User {target} has been deleted."),
    }))
}
