use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::db::DbPool;
use crate::version::GIT_VERSION;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
    git_version: &'static str,
}

/// Liveness plus a `SELECT 1` round trip through the pool.
pub async fn health_check(State(pool): State<DbPool>) -> (StatusCode, Json<HealthResponse>) {
    let probe = tokio::task::spawn_blocking(move || ping(&pool))
        .await
        .unwrap_or_else(|e| Err(format!("health check task failed: {}", e)));

    report(probe)
}

fn ping(pool: &DbPool) -> Result<(), String> {
    let conn = pool.get().map_err(|e| e.to_string())?;
    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
        .map(|_| ())
        .map_err(|e| e.to_string())
}

fn report(database: Result<(), String>) -> (StatusCode, Json<HealthResponse>) {
    let (status, response) = match database {
        Ok(()) => (
            StatusCode::OK,
            HealthResponse {
                status: "ok",
                database: "ok",
                git_version: GIT_VERSION,
            },
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                HealthResponse {
                    status: "degraded",
                    database: "unavailable",
                    git_version: GIT_VERSION,
                },
            )
        }
    };

    (status, Json(response))
}
