//! Friend list API endpoints

use api_types::friend::{FriendCreated, FriendNew, FriendsView};
use api_types::user::UserQuery;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

/// Handle requests for recording a new friend
pub async fn add(
    State(state): State<ServerState>,
    Json(payload): Json<FriendNew>,
) -> Result<(StatusCode, Json<FriendCreated>), ServerError> {
    if payload.name.trim().is_empty() {
        return Err(ServerError::Generic(
            "friend name must not be empty".to_string(),
        ));
    }

    let friend_id = state
        .engine
        .new_friend(payload.user_id, &payload.name)
        .await?;
    Ok((StatusCode::CREATED, Json(FriendCreated { friend_id })))
}

/// Handle requests for listing a user's friends
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<FriendsView>, ServerError> {
    let friends = state.engine.friends(query.user_id).await?;

    let friend_num = friends.len() as u64;
    let names: Vec<String> = friends.into_iter().map(|friend| friend.name).collect();
    Ok(Json(FriendsView {
        friends: names.join(" "),
        friend_num,
    }))
}
