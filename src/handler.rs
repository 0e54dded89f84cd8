use std::sync::Arc;

use axum::{Json, Router, response::IntoResponse, routing::get};
use serde_json::json;
use tracing::info;

use crate::db::Database;
use crate::{docs, habit};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

pub async fn healthcheck() -> impl IntoResponse {
    info!("got healthcheck request");
    Json(json!({ "ok": true }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(docs::serve_docs))
        .route("/api/health", get(healthcheck))
        .route("/api/openapi.json", get(docs::serve_openapi))
        .nest("/api", habit::routes())
}
