use std::collections::HashMap;

use sea_orm::{QueryFilter, QueryOrder, Statement, TransactionTrait, prelude::*};
use uuid::Uuid;

use crate::{Bill, BillCmd, EngineError, Participant, ResultEngine, bill_participants, bills};

use super::{Engine, with_tx};

impl Engine {
    /// Record a split bill and charge the owner's share to their balance.
    ///
    /// The bill row, its participant rows and the `total_expenses` increment
    /// commit or fail together.
    pub async fn new_bill(&self, cmd: BillCmd) -> ResultEngine<Uuid> {
        let bill = Bill::new(
            cmd.user_id,
            cmd.description,
            cmd.my_spending,
            cmd.friends_spending,
            cmd.includes_me,
            cmd.participants,
        )?;
        let bill_id = bill.id;
        let bill_model: bills::ActiveModel = (&bill).into();
        let backend = self.database.get_database_backend();
        with_tx!(self, |db_tx| {
            // The increment goes first so the transaction starts out as a
            // writer; under SQLite WAL a read-then-write transaction can fail
            // its lock upgrade when another writer commits in between.
            db_tx
                .execute(Statement::from_sql_and_values(
                    backend,
                    "UPDATE users SET total_expenses = total_expenses + ? WHERE id = ?;",
                    vec![bill.my_spending.into(), bill.user_id.to_string().into()],
                ))
                .await?;
            // MySQL reports changed rows, not matched rows, so the update
            // count cannot stand in for an existence check.
            self.require_user_exists(&db_tx, bill.user_id).await?;

            bill_model.insert(&db_tx).await?;
            for (position, name) in bill.participants.iter().enumerate() {
                let participant = Participant::new(bill_id, name.clone(), position as i32);
                let participant_model: bill_participants::ActiveModel = (&participant).into();
                participant_model.insert(&db_tx).await?;
            }

            Ok(bill_id)
        })
    }

    /// List the bills of `user_id` that the owner took part in, oldest first.
    ///
    /// A user with no bills at all gets `KeyNotFound`. A user whose bills
    /// were all paid for others gets an empty list.
    pub async fn bills_for_user(&self, user_id: Uuid) -> ResultEngine<Vec<Bill>> {
        with_tx!(self, |db_tx| {
            self.require_user_exists(&db_tx, user_id).await?;

            let bill_models = bills::Entity::find()
                .filter(bills::Column::UserId.eq(user_id.to_string()))
                .order_by_asc(bills::Column::CreatedAt)
                .all(&db_tx)
                .await?;
            if bill_models.is_empty() {
                return Err(EngineError::KeyNotFound("no bills yet".to_string()));
            }

            let shared: Vec<bills::Model> =
                bill_models.into_iter().filter(|m| m.includes_me).collect();

            let participant_models = if shared.is_empty() {
                Vec::new()
            } else {
                let bill_ids: Vec<String> = shared.iter().map(|m| m.id.clone()).collect();
                bill_participants::Entity::find()
                    .filter(bill_participants::Column::BillId.is_in(bill_ids))
                    .order_by_asc(bill_participants::Column::Position)
                    .all(&db_tx)
                    .await?
            };

            let mut names_by_bill: HashMap<String, Vec<String>> = HashMap::new();
            for participant in participant_models {
                names_by_bill
                    .entry(participant.bill_id)
                    .or_default()
                    .push(participant.name);
            }

            let mut out = Vec::with_capacity(shared.len());
            for model in shared {
                let names = names_by_bill.remove(&model.id).unwrap_or_default();
                let mut bill = Bill::try_from(model)?;
                bill.participants = names;
                out.push(bill);
            }
            Ok(out)
        })
    }
}
