//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, trace span)
//!     → extract.rs (validated path/query params)
//!     → api handlers → relay
//!     → error.rs (failures → {"detail": ...})
//!     → Send to client
//! ```

pub mod error;
pub mod extract;
pub mod request;
pub mod server;

pub use error::{ApiError, ErrorBody};
pub use extract::{ValidPath, ValidQuery};
pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
