//! Upstream relay subsystem.
//!
//! # Data Flow
//! ```text
//! Handler (validated path/query params)
//!     → request.rs (OutboundRequest: upstream, path segments, query)
//!     → client.rs (one GET with the upstream deadline)
//!     → envelope.rs (status check and/or `data` unwrap)
//!     → Ok(data) | Err(RelayError)
//! ```
//!
//! # Design Decisions
//! - Exactly one outbound call per inbound request; nothing is retried
//! - The envelope policy belongs to the upstream, not to the route: only the
//!   Quran service carries a status marker
//! - Every failure collapses to a `RelayError`, which the HTTP layer maps to 502

pub mod client;
pub mod envelope;
pub mod error;
pub mod request;
pub mod upstream;

pub use client::UpstreamRelay;
pub use error::RelayError;
pub use request::OutboundRequest;
pub use upstream::{EnvelopeKind, Upstream, UpstreamBases};
