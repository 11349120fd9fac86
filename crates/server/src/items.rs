//! Item API endpoints

use api_types::item::{ItemCreated, ItemNew};
use axum::{Json, extract::State, http::StatusCode};
use engine::ItemCmd;

use crate::{ServerError, server::ServerState};

/// Handle requests for recording an itemized purchase
pub async fn add(
    State(state): State<ServerState>,
    Json(payload): Json<ItemNew>,
) -> Result<(StatusCode, Json<ItemCreated>), ServerError> {
    let item_id = state
        .engine
        .new_item(
            ItemCmd::new(
                payload.user_id,
                payload.description,
                payload.item_name,
                payload.cost,
            )
            .friends(payload.friends),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(ItemCreated { item_id })))
}
