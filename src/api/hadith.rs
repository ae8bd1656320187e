//! Hadith collection relays. The upstream has no status marker.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::http::{ApiError, AppState, ValidPath, ValidQuery};
use crate::relay::{OutboundRequest, Upstream};

pub const DEFAULT_RANGE_START: i64 = 1;
pub const DEFAULT_RANGE_END: i64 = 150;
pub const MAX_RANGE_END: i64 = 500;

/// Hadith number window. `end < start` is left for the upstream to judge.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RangeQuery {
    #[serde(default = "default_start")]
    #[validate(range(min = 1, message = "start must be greater than or equal to 1"))]
    pub start: i64,

    #[serde(default = "default_end")]
    #[validate(range(min = 1, max = 500, message = "end must be between 1 and 500"))]
    pub end: i64,
}

fn default_start() -> i64 {
    DEFAULT_RANGE_START
}

fn default_end() -> i64 {
    DEFAULT_RANGE_END
}

impl RangeQuery {
    /// Upstream `range` parameter, e.g. `1-150`.
    pub fn range_param(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

pub async fn list_collections(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let request = OutboundRequest::new(Upstream::Hadith)
        .segment("books")
        .empty_list();
    let data = state.relay.relay(request).await?;
    Ok(Json(data))
}

pub async fn get_range(
    State(state): State<AppState>,
    ValidPath(collection): ValidPath<String>,
    ValidQuery(range): ValidQuery<RangeQuery>,
) -> Result<Json<Value>, ApiError> {
    let request = OutboundRequest::new(Upstream::Hadith)
        .segment("books")
        .segment(collection)
        .query("range", range.range_param());
    let data = state.relay.relay(request).await?;
    Ok(Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: i64, end: i64) -> RangeQuery {
        RangeQuery { start, end }
    }

    #[test]
    fn test_defaults() {
        let query: RangeQuery = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(query.range_param(), "1-150");
    }

    #[test]
    fn test_bounds() {
        assert!(range(1, 1).validate().is_ok());
        assert!(range(1, MAX_RANGE_END).validate().is_ok());
        assert!(range(0, 150).validate().is_err());
        assert!(range(1, 501).validate().is_err());
        assert!(range(1, 0).validate().is_err());
    }

    #[test]
    fn test_inverted_range_is_forwarded() {
        let query = range(200, 10);
        assert!(query.validate().is_ok());
        assert_eq!(query.range_param(), "200-10");
    }
}
