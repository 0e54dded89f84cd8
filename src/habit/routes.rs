use axum::{
    Router,
    routing::{get, post},
};

use super::handler;
use crate::handler::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/habits", get(handler::list_habits))
        .route("/habits", post(handler::create_habit))
}
