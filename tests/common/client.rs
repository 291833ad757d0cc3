use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::from_fn,
    web, App,
};
use portal_auth::{
    auth::{gate::access_gate, Authenticator, SessionManager},
    db::credential_store::CredentialStore,
    types::{error::AppError, session::Identity, user::RUserCreate},
    utils::webutils::SESSION_COOKIE,
};
use std::sync::Arc;

pub struct TestClient {
    pub db: Arc<CredentialStore>,
    pub sessions: SessionManager,
}

impl TestClient {
    pub fn new(db: Arc<CredentialStore>, sessions: SessionManager) -> Self {
        TestClient { db, sessions }
    }

    /// Same wiring as `main`, minus the request logger.
    pub fn create_app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(Authenticator::new(Arc::clone(&self.db))))
            .app_data(web::Data::new(self.sessions.clone()))
            .wrap(from_fn(access_gate))
            .configure(portal_auth::routes::configure_routes)
    }

    /// Creates a user through the store and returns (user id, session token).
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: &str, password: &str) -> Result<(String, String), AppError> {
        let user = self
            .db
            .register_user(RUserCreate {
                email: Some(email.to_string()),
                password: Some(password.to_string()),
                first_name: Some("Test".to_string()),
                last_name: Some("User".to_string()),
                invite_code: Some("TEST-INVITE".to_string()),
            })
            .await?;

        let (token, _) = self.sessions.issue(&Identity::from_user(&user))?;
        Ok((user.id, token))
    }
}

#[allow(dead_code)]
pub fn session_cookie_value<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.value().to_string())
}
