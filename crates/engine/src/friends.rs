//! Friends of a user.
//!
//! `expenses` is carried in the schema but always written as zero; bills
//! track the shared amounts instead.

use chrono::{DateTime, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};
use uuid::Uuid;

use crate::EngineError;

#[derive(Clone, Debug, PartialEq)]
pub struct Friend {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub expenses: f64,
    pub created_at: DateTime<Utc>,
}

impl Friend {
    pub fn new(user_id: Uuid, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            expenses: 0.0,
            created_at: Utc::now(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "friends")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub expenses: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Friend> for ActiveModel {
    fn from(friend: &Friend) -> Self {
        Self {
            id: ActiveValue::Set(friend.id.to_string()),
            user_id: ActiveValue::Set(friend.user_id.to_string()),
            name: ActiveValue::Set(friend.name.clone()),
            expenses: ActiveValue::Set(friend.expenses),
            created_at: ActiveValue::Set(friend.created_at),
        }
    }
}

impl TryFrom<Model> for Friend {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::KeyNotFound("friend not exists".to_string()))?,
            user_id: Uuid::parse_str(&model.user_id)
                .map_err(|_| EngineError::KeyNotFound("user not exists".to_string()))?,
            name: model.name,
            expenses: model.expenses,
            created_at: model.created_at,
        })
    }
}
