use axum::{extract::State, Json};

use crate::diagnostics::{probe_optional, DiagnosticReport};
use crate::http::AppState;

/// Backend and optional database status. Always 200.
pub async fn report(State(state): State<AppState>) -> Json<DiagnosticReport> {
    let status = probe_optional(state.database.as_deref()).await;
    tracing::debug!(?status, "Database probe finished");
    Json(DiagnosticReport::new(status, &state.database_config))
}
