use axum::{extract::State, Json};
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    db_healthy: bool,
}

pub async fn health(State(app_state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = sqlx::query("SELECT 1")
        .execute(app_state.db_pool.as_ref())
        .await
        .map_err(|e| tracing::warn!("Database health check failed: {}", e))
        .is_ok();

    Json(HealthResponse {
        status: "ok",
        db_healthy,
    })
}
