//! Quran text and audio relays. All four are status-checked.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::http::{ApiError, AppState, ValidPath};
use crate::relay::{OutboundRequest, Upstream};

/// Reciter edition served by the audio route.
pub const AUDIO_EDITION: &str = "ar.alafasy";

fn surah() -> OutboundRequest {
    OutboundRequest::new(Upstream::Quran).segment("surah")
}

pub async fn list_surahs(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let data = state.relay.relay(surah()).await?;
    Ok(Json(data))
}

pub async fn get_surah(
    State(state): State<AppState>,
    ValidPath(sid): ValidPath<i64>,
) -> Result<Json<Value>, ApiError> {
    let data = state.relay.relay(surah().segment(sid)).await?;
    Ok(Json(data))
}

pub async fn get_surah_audio(
    State(state): State<AppState>,
    ValidPath(sid): ValidPath<i64>,
) -> Result<Json<Value>, ApiError> {
    let data = state
        .relay
        .relay(surah().segment(sid).segment(AUDIO_EDITION))
        .await?;
    Ok(Json(data))
}

pub async fn get_surah_translation(
    State(state): State<AppState>,
    ValidPath((sid, edition)): ValidPath<(i64, String)>,
) -> Result<Json<Value>, ApiError> {
    let data = state.relay.relay(surah().segment(sid).segment(edition)).await?;
    Ok(Json(data))
}
