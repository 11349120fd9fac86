//! The module contains the `User` struct and its entity.
//!
//! A user owns friends, bills and items. `total_expenses` is the running sum
//! of the owner share of every bill, updated atomically when a bill is
//! recorded.

use chrono::{DateTime, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};
use uuid::Uuid;

use crate::EngineError;

/// A registered account.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    /// Stable identifier, a UUID generated once and persisted in the
    /// database.
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// Bcrypt digest of the password. The plaintext is never stored.
    pub password_hash: String,
    pub total_expenses: f64,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            total_expenses: 0.0,
            created_at: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub total_expenses: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::friends::Entity")]
    Friends,
    #[sea_orm(has_many = "super::bills::Entity")]
    Bills,
    #[sea_orm(has_many = "super::items::Entity")]
    Items,
}

impl Related<super::friends::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Friends.def()
    }
}

impl Related<super::bills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bills.def()
    }
}

impl Related<super::items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        Self {
            id: ActiveValue::Set(user.id.to_string()),
            username: ActiveValue::Set(user.username.clone()),
            email: ActiveValue::Set(user.email.clone()),
            password_hash: ActiveValue::Set(user.password_hash.clone()),
            total_expenses: ActiveValue::Set(user.total_expenses),
            created_at: ActiveValue::Set(user.created_at),
        }
    }
}

impl TryFrom<Model> for User {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::KeyNotFound("user not exists".to_string()))?,
            username: model.username,
            email: model.email,
            password_hash: model.password_hash,
            total_expenses: model.total_expenses,
            created_at: model.created_at,
        })
    }
}
