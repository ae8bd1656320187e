//! Hijri calendar relays.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::api::default_method;
use crate::http::{ApiError, AppState, ValidQuery};
use crate::relay::{OutboundRequest, Upstream};

/// Gregorian date, expected as `DD-MM-YYYY`. The format is the upstream's
/// concern and is not checked here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ConvertQuery {
    pub date: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CalendarQuery {
    pub month: i64,
    pub year: i64,
    #[serde(default = "default_method")]
    pub method: i64,
}

pub async fn convert(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ConvertQuery>,
) -> Result<Json<Value>, ApiError> {
    let request = OutboundRequest::new(Upstream::Aladhan)
        .segment("gToH")
        .query("date", query.date);
    let data = state.relay.relay(request).await?;
    Ok(Json(data))
}

pub async fn calendar(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<CalendarQuery>,
) -> Result<Json<Value>, ApiError> {
    let request = OutboundRequest::new(Upstream::Aladhan)
        .segment("hijriCalendar")
        .segment(query.year)
        .segment(query.month)
        .query("method", query.method)
        .empty_list();
    let data = state.relay.relay(request).await?;
    Ok(Json(data))
}
