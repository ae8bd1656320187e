//! Prayer times relay.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::api::default_method;
use crate::http::{ApiError, AppState, ValidQuery};
use crate::relay::{OutboundRequest, Upstream};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TimingsQuery {
    pub city: String,
    pub country: String,
    #[serde(default = "default_method")]
    pub method: i64,
}

pub async fn timings_by_city(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<TimingsQuery>,
) -> Result<Json<Value>, ApiError> {
    let request = OutboundRequest::new(Upstream::Aladhan)
        .segment("timingsByCity")
        .query("city", query.city)
        .query("country", query.country)
        .query("method", query.method);
    let data = state.relay.relay(request).await?;
    Ok(Json(data))
}
