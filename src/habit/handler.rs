//! HTTP handlers for the habit API.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use super::{Habits, validate};
use crate::handler::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn internal_error(msg: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: msg.to_string(),
        }),
    )
        .into_response()
}

pub async fn list_habits(State(state): State<AppState>) -> Response {
    let store = Habits::new(state.db.connection());

    match store.list_all().await {
        Ok(habits) => (StatusCode::OK, Json(habits)).into_response(),
        Err(e) => {
            tracing::error!("Failed to list habits: {}", e);
            internal_error("Failed to list habits")
        }
    }
}

pub async fn create_habit(State(state): State<AppState>, Json(payload): Json<Value>) -> Response {
    let input = match validate::parse_create(&payload) {
        Ok(input) => input,
        Err(errors) => return (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
    };

    let store = Habits::new(state.db.connection());

    match store.insert(input).await {
        Ok(habit) => {
            tracing::info!("created habit {}", habit.id);
            (StatusCode::CREATED, Json(habit)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to create habit: {}", e);
            internal_error("Failed to create habit")
        }
    }
}
