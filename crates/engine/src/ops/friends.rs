use sea_orm::{QueryFilter, QueryOrder, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{EngineError, Friend, ResultEngine, friends};

use super::{Engine, normalize_required_name, with_tx};

impl Engine {
    /// Record a new friend for `user_id` and return the friend id.
    pub async fn new_friend(&self, user_id: Uuid, name: &str) -> ResultEngine<Uuid> {
        let name = normalize_required_name(name, "friend name")?;
        let friend = Friend::new(user_id, name);
        let friend_id = friend.id;
        let friend_model: friends::ActiveModel = (&friend).into();
        with_tx!(self, |db_tx| {
            self.require_user_exists(&db_tx, user_id).await?;
            friend_model.insert(&db_tx).await?;
            Ok(friend_id)
        })
    }

    /// List the friends of `user_id`, oldest first.
    ///
    /// A user with no friends recorded yet gets `KeyNotFound` rather than an
    /// empty list.
    pub async fn friends(&self, user_id: Uuid) -> ResultEngine<Vec<Friend>> {
        with_tx!(self, |db_tx| {
            self.require_user_exists(&db_tx, user_id).await?;
            let models = friends::Entity::find()
                .filter(friends::Column::UserId.eq(user_id.to_string()))
                .order_by_asc(friends::Column::CreatedAt)
                .all(&db_tx)
                .await?;
            if models.is_empty() {
                return Err(EngineError::KeyNotFound("no friends yet".to_string()));
            }
            models.into_iter().map(Friend::try_from).collect()
        })
    }
}
