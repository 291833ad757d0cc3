use std::sync::Arc;

use tracing::{debug, warn};

use crate::db::credential_store::CredentialStore;
use crate::types::{error::AppError, session::Identity};
use crate::utils::token::verify_password;

/// Checks email + password against the store.
///
/// Bad credentials of any kind come back as `Ok(None)`; only store failures
/// are errors.
#[derive(Clone)]
pub struct Authenticator {
    store: Arc<CredentialStore>,
}

impl Authenticator {
    pub fn new(store: Arc<CredentialStore>) -> Self {
        Self { store }
    }

    pub async fn authenticate(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<Identity>, AppError> {
        let (Some(email), Some(password)) = (
            email.map(str::trim).filter(|e| !e.is_empty()),
            password.filter(|p| !p.is_empty()),
        ) else {
            return Ok(None);
        };

        let Some(user) = self.store.find_user_by_email(email).await? else {
            debug!("login rejected: unknown email");
            return Ok(None);
        };

        let Some(hash) = user.password.as_deref() else {
            debug!(user_id = %user.id, "login rejected: no password set");
            return Ok(None);
        };

        match verify_password(password, hash) {
            Ok(true) => Ok(Some(Identity::from_user(&user))),
            Ok(false) => {
                debug!(user_id = %user.id, "login rejected: wrong password");
                Ok(None)
            }
            Err(e) => {
                warn!(user_id = %user.id, "stored password hash unreadable: {e}");
                Ok(None)
            }
        }
    }
}
