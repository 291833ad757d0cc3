use std::sync::Arc;

use chrono::Duration;
use portal_auth::auth::SessionManager;
use portal_auth::config::SessionConfig;
use portal_auth::db::credential_store::CredentialStore;

pub mod client;

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestContext {
    pub db: Arc<CredentialStore>,
    pub sessions: SessionManager,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let db = Arc::new(
            CredentialStore::new("sqlite::memory:")
                .await
                .expect("Failed to initialize CredentialStore")
        );

        TestContext {
            db,
            sessions: SessionManager::new(&get_test_session_config()),
        }
    }
}

pub fn get_test_session_config() -> SessionConfig {
    SessionConfig {
        secret: TEST_SECRET.to_string(),
        ttl: Duration::hours(1),
        secure_cookie: false,
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use serde_json::{json, Value};

    pub fn sample_signup(email: &str, password: &str) -> Value {
        json!({
            "email": email,
            "password": password,
            "firstName": "Test",
            "lastName": "User",
            "inviteCode": "TEST-INVITE",
        })
    }
}
