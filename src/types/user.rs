use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::error::AppError;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Signup body, shared by `/api/auth/register` and `/api/v1/users`.
///
/// Every field is optional at the wire level so a missing field becomes a
/// `VALIDATION_ERROR` instead of a deserializer rejection.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RUserCreate {
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub invite_code: Option<String>,
}

/// A signup body that passed [`RUserCreate::validate`].
pub struct ValidUserCreate {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub invite_code: String,
}

/// What the store needs to insert a row; the password is already hashed.
pub struct DBUserCreate {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub invite_code: String,
}

fn required(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.trim().is_empty())
}

impl RUserCreate {
    pub fn validate(self) -> Result<ValidUserCreate, AppError> {
        let (Some(email), Some(password), Some(invite_code)) = (
            required(self.email),
            self.password.filter(|p| !p.is_empty()),
            required(self.invite_code),
        ) else {
            return Err(AppError::Validation(
                "Email, password and invite code are required".into(),
            ));
        };

        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        Ok(ValidUserCreate {
            email: email.trim().to_string(),
            password,
            first_name: self.first_name.unwrap_or_default().trim().to_string(),
            last_name: self.last_name.unwrap_or_default().trim().to_string(),
            invite_code: invite_code.trim().to_string(),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPublic {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub invite_code: String,
    pub is_email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<entity::user::Model> for UserPublic {
    fn from(m: entity::user::Model) -> Self {
        UserPublic {
            id: m.id,
            email: m.email,
            first_name: m.first_name,
            last_name: m.last_name,
            invite_code: m.invite_code,
            is_email_verified: m.is_email_verified,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserDeleteRes {
    pub message: String,
}
