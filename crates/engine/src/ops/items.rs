use sea_orm::{TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{Item, ItemCmd, ResultEngine, items};

use super::{Engine, with_tx};

impl Engine {
    /// Record an itemized purchase and return its id.
    ///
    /// Items live on their own ledger. The owner's `total_expenses` balance
    /// only tracks bills and is left untouched here.
    pub async fn new_item(&self, cmd: ItemCmd) -> ResultEngine<Uuid> {
        let item = Item::new(
            cmd.user_id,
            cmd.description,
            cmd.item_name,
            cmd.cost,
            cmd.friends,
        )?;
        let item_id = item.id;
        let item_model: items::ActiveModel = (&item).into();
        with_tx!(self, |db_tx| {
            self.require_user_exists(&db_tx, item.user_id).await?;
            item_model.insert(&db_tx).await?;
            Ok(item_id)
        })
    }
}
