use crate::db::credential_store::CredentialStore;
use crate::{
    types::{
        error::AppError,
        user::{DBUserCreate, RUserCreate},
    },
    utils::token::{hash_password, new_id},
};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, Set};
use tracing::{debug, error};

impl CredentialStore {
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(&self.database_connection)
            .await?)
    }

    pub async fn find_user_by_id(&self, id: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find_by_id(id.to_string())
            .one(&self.database_connection)
            .await?)
    }

    /// Inserts a row. A taken email comes back as [`AppError::AlreadyExists`]
    /// straight from the unique index, so concurrent signups cannot both win.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        let now = Utc::now();
        let model = User::insert(UserActive {
            id: Set(new_id()),
            email: Set(payload.email),
            password: Set(Some(payload.password_hash)),
            first_name: Set(payload.first_name),
            last_name: Set(payload.last_name),
            invite_code: Set(payload.invite_code),
            is_email_verified: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec_with_returning(&self.database_connection)
        .await?;
        Ok(model)
    }

    /// Signup: validate, hash, insert. Every user-creating route goes through here.
    pub async fn register_user(&self, body: RUserCreate) -> Result<UserModel, AppError> {
        let valid = body.validate()?;

        let password_hash = hash_password(&valid.password).map_err(|e| {
            error!("password hashing failed: {e}");
            AppError::Internal("password hashing failed".into())
        })?;

        let user = self
            .create_user(DBUserCreate {
                email: valid.email,
                password_hash,
                first_name: valid.first_name,
                last_name: valid.last_name,
                invite_code: valid.invite_code,
            })
            .await?;
        debug!(user_id = %user.id, "user created");
        Ok(user)
    }

    /// Deleting a missing id is a store failure, not a no-op.
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let res = User::delete_by_id(id.to_string())
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::Db(DbErr::RecordNotFound(format!(
                "user {id} does not exist"
            ))));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> CredentialStore {
        CredentialStore::new("sqlite::memory:").await.unwrap()
    }

    fn signup(email: &str) -> RUserCreate {
        RUserCreate {
            email: Some(email.into()),
            password: Some("hunter22".into()),
            first_name: Some("Grace".into()),
            last_name: Some("Hopper".into()),
            invite_code: Some("BETA".into()),
        }
    }

    #[actix_web::test]
    async fn register_then_find_by_email() {
        let store = store().await;
        let created = store.register_user(signup("grace@example.com")).await.unwrap();
        assert!(!created.is_email_verified);
        assert_ne!(created.password.as_deref(), Some("hunter22"));

        let found = store.find_user_by_email("grace@example.com").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert!(store.find_user_by_email("GRACE@example.com").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn duplicate_email_is_already_exists() {
        let store = store().await;
        store.register_user(signup("dup@example.com")).await.unwrap();
        let err = store.register_user(signup("dup@example.com")).await.unwrap_err();
        assert!(matches!(err, AppError::AlreadyExists), "got {err:?}");
    }

    #[actix_web::test]
    async fn concurrent_duplicate_signups_one_wins() {
        let store = store().await;
        let (a, b) = futures::join!(
            store.register_user(signup("race@example.com")),
            store.register_user(signup("race@example.com")),
        );
        let (won, lost) = match (a, b) {
            (Ok(user), Err(err)) | (Err(err), Ok(user)) => (user, err),
            (a, b) => panic!("expected exactly one winner, got {a:?} and {b:?}"),
        };
        assert_eq!(won.email, "race@example.com");
        assert!(matches!(lost, AppError::AlreadyExists), "got {lost:?}");
    }

    #[actix_web::test]
    async fn delete_missing_user_is_a_store_error() {
        let store = store().await;
        let user = store.register_user(signup("gone@example.com")).await.unwrap();
        store.delete_user(&user.id).await.unwrap();
        assert!(store.find_user_by_id(&user.id).await.unwrap().is_none());

        let err = store.delete_user(&user.id).await.unwrap_err();
        assert!(matches!(err, AppError::Db(_)), "got {err:?}");
    }
}
