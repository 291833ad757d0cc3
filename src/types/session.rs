use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A user whose credentials were just checked.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl Identity {
    pub fn from_user(user: &entity::user::Model) -> Self {
        Identity {
            id: user.id.clone(),
            email: user.email.clone(),
            name: display_name(&user.first_name, &user.last_name),
        }
    }
}

pub fn display_name(first: &str, last: &str) -> String {
    format!("{first} {last}").trim().to_string()
}

/// Signed token payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    pub sub: String,
    pub email: String,
    pub name: String,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn from_identity(identity: &Identity, now: DateTime<Utc>, ttl: Duration) -> Self {
        SessionClaims {
            sub: identity.id.clone(),
            email: identity.email.clone(),
            name: identity.name.clone(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// The session as handlers and clients see it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: SessionUser,
    pub expires: DateTime<Utc>,
}

impl From<&SessionClaims> for Session {
    fn from(claims: &SessionClaims) -> Self {
        Session {
            user: SessionUser {
                id: claims.sub.clone(),
                email: claims.email.clone(),
                name: claims.name.clone(),
            },
            expires: Utc
                .timestamp_opt(claims.exp, 0)
                .single()
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_trimmed() {
        assert_eq!(display_name("Ada", "Lovelace"), "Ada Lovelace");
        assert_eq!(display_name("Ada", ""), "Ada");
        assert_eq!(display_name("", ""), "");
    }

    #[test]
    fn claims_carry_identity_and_session_copies_subject() {
        let identity = Identity {
            id: "u_1".into(),
            email: "ada@example.com".into(),
            name: "Ada".into(),
        };
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let claims = SessionClaims::from_identity(&identity, now, Duration::hours(1));
        assert_eq!(claims.sub, "u_1");
        assert_eq!(claims.exp - claims.iat, 3600);

        let session = Session::from(&claims);
        assert_eq!(session.user.id, "u_1");
        assert_eq!(session.user.email, "ada@example.com");
        assert_eq!(session.expires.timestamp(), claims.exp);
    }
}
