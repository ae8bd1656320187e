//! Gateway for the Quran, Hadith and prayer-times public APIs.

pub mod api;
pub mod config;
pub mod diagnostics;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use relay::UpstreamRelay;
