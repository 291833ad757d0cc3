use std::future::{ready, Ready};

use actix_web::{cookie::Cookie, dev::Payload, web, FromRequest, HttpMessage, HttpRequest};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, error};

use crate::config::SessionConfig;
use crate::types::{
    error::AppError,
    session::{Identity, Session, SessionClaims},
};
use crate::utils::webutils::{expired_session_cookie, session_cookie, session_token};

/// Issues and verifies stateless HS256 session tokens.
///
/// Built once at startup from [`SessionConfig`]; nothing is stored per session.
#[derive(Clone)]
pub struct SessionManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
    secure_cookie: bool,
}

impl SessionManager {
    pub fn new(config: &SessionConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl: config.ttl,
            secure_cookie: config.secure_cookie,
        }
    }

    pub fn issue(&self, identity: &Identity) -> Result<(String, Session), AppError> {
        let claims = SessionClaims::from_identity(identity, Utc::now(), self.ttl);
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(|e| {
            error!("failed to sign session token: {e}");
            AppError::Internal("failed to sign session token".into())
        })?;
        Ok((token, Session::from(&claims)))
    }

    pub fn verify(&self, token: &str) -> Option<SessionClaims> {
        match decode::<SessionClaims>(token, &self.decoding, &self.validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                debug!("session token rejected: {e}");
                None
            }
        }
    }

    /// Anonymous (`None`) when the request carries no token or a bad one.
    pub fn resolve(&self, req: &HttpRequest) -> Option<Session> {
        let token = session_token(req)?;
        self.verify(&token).map(|claims| Session::from(&claims))
    }

    pub fn cookie(&self, token: String) -> Cookie<'static> {
        session_cookie(token, self.ttl.num_seconds(), self.secure_cookie)
    }

    pub fn removal_cookie(&self) -> Cookie<'static> {
        expired_session_cookie(self.secure_cookie)
    }
}

/// Extracts the caller's session, preferring the one the gate already resolved.
/// Use `Option<Session>` in handlers where anonymous callers are fine.
impl FromRequest for Session {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(session) = req.extensions().get::<Session>() {
            return ready(Ok(session.clone()));
        }
        let resolved = req
            .app_data::<web::Data<SessionManager>>()
            .and_then(|sessions| sessions.resolve(req));
        ready(resolved.ok_or(AppError::Unauthorized))
    }
}
