use sea_orm::{QueryFilter, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{EngineError, ResultEngine, User, users};

use super::{Engine, normalize_required_name, with_tx};

impl Engine {
    /// Register a new account and return its id.
    ///
    /// Usernames and emails are unique across accounts; the first one already
    /// taken is reported back via `ExistingKey`. The password is run through
    /// bcrypt before the transaction opens, plaintext never reaches the
    /// database.
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> ResultEngine<Uuid> {
        let username = normalize_required_name(username, "username")?;
        let email = normalize_required_name(email, "email")?;
        if password.is_empty() {
            return Err(EngineError::InvalidAmount(
                "password must not be empty".to_string(),
            ));
        }
        // Hashing is CPU-bound, keep it outside the transaction.
        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

        let user = User::new(username.clone(), email.clone(), password_hash);
        let user_id = user.id;
        let user_model: users::ActiveModel = (&user).into();
        with_tx!(self, |db_tx| {
            let username_taken = users::Entity::find()
                .filter(users::Column::Username.eq(username.clone()))
                .one(&db_tx)
                .await?
                .is_some();
            if username_taken {
                return Err(EngineError::ExistingKey(username));
            }
            let email_taken = users::Entity::find()
                .filter(users::Column::Email.eq(email.clone()))
                .one(&db_tx)
                .await?
                .is_some();
            if email_taken {
                return Err(EngineError::ExistingKey(email));
            }

            user_model.insert(&db_tx).await?;
            Ok(user_id)
        })
    }

    /// Look up an account by email.
    pub async fn user_by_email(&self, email: &str) -> ResultEngine<User> {
        with_tx!(self, |db_tx| {
            let model = users::Entity::find()
                .filter(users::Column::Email.eq(email.to_string()))
                .one(&db_tx)
                .await?
                .ok_or_else(|| EngineError::KeyNotFound("user not exists".to_string()))?;
            User::try_from(model)
        })
    }

    /// Return the account behind `user_id`.
    pub async fn user_by_id(&self, user_id: Uuid) -> ResultEngine<User> {
        with_tx!(self, |db_tx| {
            let model = self.require_user_by_id(&db_tx, user_id).await?;
            User::try_from(model)
        })
    }

    /// Return the running expense balance of `user_id`.
    pub async fn total_expenses(&self, user_id: Uuid) -> ResultEngine<f64> {
        with_tx!(self, |db_tx| {
            let model = self.require_user_by_id(&db_tx, user_id).await?;
            Ok(model.total_expenses)
        })
    }
}
