use axum::{
    Router,
    routing::{get, post},
};

use std::sync::Arc;

use crate::{bills, friends, items, users};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/signup", post(users::signup))
        .route("/users", get(users::lookup))
        .route("/profile", get(users::profile))
        .route("/expense", get(users::expense))
        .route("/friends", get(friends::list))
        .route("/addFriend", post(friends::add))
        .route("/addBill", post(bills::add))
        .route("/getBill", get(bills::list))
        .route("/addItem", post(items::add))
        .with_state(state)
}

pub async fn run(engine: Engine) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:5000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state)).await
}
