//! `/test` diagnostic report.

use serde::Serialize;

use crate::config::DatabaseConfig;
use crate::diagnostics::DatabaseStatus;

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

/// Body of the diagnostic endpoint. Every field is a display string.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub backend: &'static str,
    pub database: String,
    pub database_url: &'static str,
    pub database_name: &'static str,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

impl DiagnosticReport {
    pub fn new(status: DatabaseStatus, config: &DatabaseConfig) -> Self {
        let (database, connection_status, collections) = match status {
            DatabaseStatus::Unavailable => (
                "❌ Database module not found (run enable-database first)".to_string(),
                "Not Connected",
                Vec::new(),
            ),
            DatabaseStatus::Uninitialized => (
                "⚠️  Available but not initialized".to_string(),
                "Not Connected",
                Vec::new(),
            ),
            DatabaseStatus::Connected { collections } => (
                "✅ Connected & Working".to_string(),
                "Connected",
                collections.into_iter().take(MAX_COLLECTIONS).collect(),
            ),
            DatabaseStatus::Degraded(err) => (
                format!("⚠️  Connected but Error: {}", truncate(&err)),
                "Connected",
                Vec::new(),
            ),
            DatabaseStatus::Failed(err) => (
                format!("❌ Error: {}", truncate(&err)),
                "Not Connected",
                Vec::new(),
            ),
        };

        Self {
            backend: "✅ Running",
            database,
            database_url: presence(config.url.as_deref()),
            database_name: presence(config.name.as_deref()),
            connection_status,
            collections,
        }
    }
}

fn presence(value: Option<&str>) -> &'static str {
    match value {
        Some(v) if !v.is_empty() => "✅ Set",
        _ => "❌ Not Set",
    }
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}
