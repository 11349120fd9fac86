//! User account API endpoints

use api_types::user::{
    ExpenseView, ProfileView, SignupNew, UserCreated, UserFound, UserLookup, UserQuery,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

/// Handle requests for creating new accounts
pub async fn signup(
    State(state): State<ServerState>,
    Json(payload): Json<SignupNew>,
) -> Result<(StatusCode, Json<UserCreated>), ServerError> {
    let (Some(username), Some(email), Some(password)) =
        (payload.username, payload.email, payload.password)
    else {
        return Err(ServerError::Generic("missing required fields".to_string()));
    };
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ServerError::Generic("missing required fields".to_string()));
    }

    let user_id = state.engine.signup(&username, &email, &password).await?;
    Ok((StatusCode::CREATED, Json(UserCreated { user_id })))
}

/// Handle requests for resolving an email to a user id
pub async fn lookup(
    State(state): State<ServerState>,
    Query(query): Query<UserLookup>,
) -> Result<Json<UserFound>, ServerError> {
    let user = state.engine.user_by_email(&query.email).await?;
    Ok(Json(UserFound { user_id: user.id }))
}

/// Handle requests for the account profile
pub async fn profile(
    State(state): State<ServerState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<ProfileView>, ServerError> {
    let user = state.engine.user_by_id(query.user_id).await?;
    Ok(Json(ProfileView {
        username: user.username,
        email: user.email,
        total_expenses: user.total_expenses,
    }))
}

/// Handle requests for the running expense balance
pub async fn expense(
    State(state): State<ServerState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<ExpenseView>, ServerError> {
    let total_expenses = state.engine.total_expenses(query.user_id).await?;
    Ok(Json(ExpenseView { total_expenses }))
}
