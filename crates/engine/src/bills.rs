//! Split bills.
//!
//! A [`Bill`] records one shared expense: the owner share, the friends
//! share, and who took part. `total_spending` is computed at creation time
//! and persisted next to the two shares. `includes_me` marks whether the
//! owner took part in the bill; listings of "my" bills keep only
//! self-included ones.

use chrono::{DateTime, Utc};
use sea_orm::entity::{ActiveValue, prelude::*};
use uuid::Uuid;

use crate::{EngineError, ResultEngine};

#[derive(Clone, Debug, PartialEq)]
pub struct Bill {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub my_spending: f64,
    pub friends_spending: f64,
    pub includes_me: bool,
    pub created_at: DateTime<Utc>,
    /// Names of everyone on the bill, in the order they were submitted.
    pub participants: Vec<String>,
}

impl Bill {
    pub fn new(
        user_id: Uuid,
        description: String,
        my_spending: f64,
        friends_spending: f64,
        includes_me: bool,
        participants: Vec<String>,
    ) -> ResultEngine<Self> {
        if my_spending < 0.0 {
            return Err(EngineError::InvalidAmount(
                "my_spending must be >= 0".to_string(),
            ));
        }
        if friends_spending < 0.0 {
            return Err(EngineError::InvalidAmount(
                "friends_spending must be >= 0".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            description,
            my_spending,
            friends_spending,
            includes_me,
            created_at: Utc::now(),
            participants,
        })
    }

    /// Combined owner and friends share.
    pub fn total_spending(&self) -> f64 {
        self.my_spending + self.friends_spending
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub description: String,
    pub my_spending: f64,
    pub friends_spending: f64,
    pub total_spending: f64,
    pub includes_me: bool,
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
    #[sea_orm(has_many = "super::bill_participants::Entity")]
    BillParticipants,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::bill_participants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BillParticipants.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Bill> for ActiveModel {
    fn from(bill: &Bill) -> Self {
        Self {
            id: ActiveValue::Set(bill.id.to_string()),
            user_id: ActiveValue::Set(bill.user_id.to_string()),
            description: ActiveValue::Set(bill.description.clone()),
            my_spending: ActiveValue::Set(bill.my_spending),
            friends_spending: ActiveValue::Set(bill.friends_spending),
            total_spending: ActiveValue::Set(bill.total_spending()),
            includes_me: ActiveValue::Set(bill.includes_me),
            created_at: ActiveValue::Set(bill.created_at),
        }
    }
}

impl TryFrom<Model> for Bill {
    type Error = EngineError;

    /// Participants live in their own table; the caller fills them in after
    /// loading the related rows.
    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::KeyNotFound("bill not exists".to_string()))?,
            user_id: Uuid::parse_str(&model.user_id)
                .map_err(|_| EngineError::KeyNotFound("user not exists".to_string()))?,
            description: model.description,
            my_spending: model.my_spending,
            friends_spending: model.friends_spending,
            includes_me: model.includes_me,
            created_at: model.created_at,
            participants: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_spending_sums_both_shares() {
        let bill = Bill::new(
            Uuid::new_v4(),
            "Dinner".to_string(),
            10.0,
            5.0,
            true,
            vec!["Me".to_string(), "Bob".to_string()],
        )
        .unwrap();

        assert_eq!(bill.total_spending(), 15.0);
    }

    #[test]
    fn negative_shares_are_rejected() {
        let err = Bill::new(Uuid::new_v4(), "Dinner".to_string(), -1.0, 0.0, true, vec![])
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidAmount("my_spending must be >= 0".to_string())
        );

        let err = Bill::new(Uuid::new_v4(), "Dinner".to_string(), 0.0, -1.0, true, vec![])
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidAmount("friends_spending must be >= 0".to_string())
        );
    }
}
