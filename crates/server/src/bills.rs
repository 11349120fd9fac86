//! Bill API endpoints

use api_types::bill::{BillCreated, BillNew, BillView, BillsView};
use api_types::user::UserQuery;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use engine::BillCmd;

use crate::{ServerError, server::ServerState};

/// Handle requests for recording a split bill
pub async fn add(
    State(state): State<ServerState>,
    Json(payload): Json<BillNew>,
) -> Result<(StatusCode, Json<BillCreated>), ServerError> {
    let bill_id = state
        .engine
        .new_bill(
            BillCmd::new(
                payload.user_id,
                payload.description,
                payload.my_spending,
                payload.friends_spending,
            )
            .participants(payload.participants)
            .includes_me(payload.includes_me),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(BillCreated { bill_id })))
}

/// Handle requests for listing the bills a user took part in
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<BillsView>, ServerError> {
    let bills = state.engine.bills_for_user(query.user_id).await?;

    let bills = bills
        .into_iter()
        .map(|bill| BillView {
            description: bill.description,
            my_spending: bill.my_spending,
            date: bill.created_at,
            participants: bill.participants,
        })
        .collect();
    Ok(Json(BillsView { bills }))
}
