//! Itemized purchases.
//!
//! Items record individual purchases on their own ledger. Unlike bills they
//! never touch the owner's `total_expenses` balance. `friends` is free text
//! kept as submitted, the engine never queries it.

use chrono::{DateTime, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};
use uuid::Uuid;

use crate::{EngineError, ResultEngine};

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub item_name: String,
    pub cost: f64,
    pub friends: String,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(
        user_id: Uuid,
        description: String,
        item_name: String,
        cost: f64,
        friends: String,
    ) -> ResultEngine<Self> {
        if cost < 0.0 {
            return Err(EngineError::InvalidAmount("cost must be >= 0".to_string()));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            description,
            item_name,
            cost,
            friends,
            created_at: Utc::now(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub description: String,
    pub item_name: String,
    pub cost: f64,
    pub friends: String,
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

impl From<&Item> for ActiveModel {
    fn from(item: &Item) -> Self {
        Self {
            id: ActiveValue::Set(item.id.to_string()),
            user_id: ActiveValue::Set(item.user_id.to_string()),
            description: ActiveValue::Set(item.description.clone()),
            item_name: ActiveValue::Set(item.item_name.clone()),
            cost: ActiveValue::Set(item.cost),
            friends: ActiveValue::Set(item.friends.clone()),
            created_at: ActiveValue::Set(item.created_at),
        }
    }
}

impl TryFrom<Model> for Item {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::KeyNotFound("item not exists".to_string()))?,
            user_id: Uuid::parse_str(&model.user_id)
                .map_err(|_| EngineError::KeyNotFound("user not exists".to_string()))?,
            description: model.description,
            item_name: model.item_name,
            cost: model.cost,
            friends: model.friends,
            created_at: model.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_cost_is_rejected() {
        let outcome = Item::new(
            Uuid::new_v4(),
            "groceries".to_string(),
            "milk".to_string(),
            -3.5,
            "Ann Bob".to_string(),
        );
        assert_eq!(
            outcome,
            Err(EngineError::InvalidAmount("cost must be >= 0".to_string()))
        );
    }
}
