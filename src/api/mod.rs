//! Inbound API surface.
//!
//! Each relay handler is one instance of the same pattern:
//! validated params → `OutboundRequest` → `UpstreamRelay::relay` → `Json(data)`.

pub mod contact;
pub mod diagnostics;
pub mod greeting;
pub mod hadith;
pub mod hijri;
pub mod prayer;
pub mod quran;

use axum::{
    routing::{get, post},
    Router,
};

use crate::http::{
    error::{method_not_allowed, not_found},
    AppState,
};

/// Default calculation method for prayer times and the Hijri calendar.
pub const DEFAULT_METHOD: i64 = 2;

pub(crate) fn default_method() -> i64 {
    DEFAULT_METHOD
}

/// Route table for the whole gateway.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(greeting::root))
        .route("/api/hello", get(greeting::hello))
        .route("/api/quran/surahs", get(quran::list_surahs))
        .route("/api/quran/surah/{sid}", get(quran::get_surah))
        .route("/api/quran/surah/{sid}/audio", get(quran::get_surah_audio))
        .route(
            "/api/quran/surah/{sid}/translation/{edition}",
            get(quran::get_surah_translation),
        )
        .route("/api/hadith/collections", get(hadith::list_collections))
        .route("/api/hadith/{collection}", get(hadith::get_range))
        .route("/api/prayer/timingsByCity", get(prayer::timings_by_city))
        .route("/api/hijri/convert", get(hijri::convert))
        .route("/api/hijri/calendar", get(hijri::calendar))
        .route("/api/contact", post(contact::submit))
        .route("/test", get(diagnostics::report))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}
