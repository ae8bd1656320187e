//! Diagnostics subsystem.
//!
//! # Data Flow
//! ```text
//! GET /test
//!     → probe.rs (optional DatabaseProbe, probed at call time)
//!     → report.rs (status + configured env presence → display strings)
//!     → 200 JSON, never an error
//! ```

pub mod probe;
pub mod report;

pub use probe::{probe_optional, DatabaseProbe, DatabaseStatus, TcpDatabaseProbe};
pub use report::DiagnosticReport;
