//! Database probe capability.
//!
//! # States
//! - Unavailable: no integration configured
//! - Uninitialized: configured, but no usable handle could be formed
//! - Connected: reachable (with optional collection listing)
//! - Degraded: reachable, but introspection failed
//! - Failed: probing itself failed
//!
//! # Design Decisions
//! - Probed at call time; nothing is cached between requests
//! - The probe never returns an error, it returns a state

use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio::time::timeout;
use url::Url;

use crate::config::DatabaseConfig;

/// Port assumed when `DATABASE_URL` carries none (MongoDB default).
pub const DEFAULT_DATABASE_PORT: u16 = 27017;

/// Result of probing the optional database integration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseStatus {
    Unavailable,
    Uninitialized,
    Connected { collections: Vec<String> },
    Degraded(String),
    Failed(String),
}

/// A database integration that can report its own health.
#[async_trait]
pub trait DatabaseProbe: Send + Sync + std::fmt::Debug {
    async fn probe(&self) -> DatabaseStatus;
}

/// Run `probe` if present, otherwise report the integration as unavailable.
pub async fn probe_optional(probe: Option<&dyn DatabaseProbe>) -> DatabaseStatus {
    match probe {
        Some(probe) => probe.probe().await,
        None => DatabaseStatus::Unavailable,
    }
}

/// Checks that the host in `DATABASE_URL` accepts TCP connections.
#[derive(Debug, Clone)]
pub struct TcpDatabaseProbe {
    url: String,
    timeout: Duration,
}

impl TcpDatabaseProbe {
    /// Build a probe when a database URL is configured.
    pub fn from_config(config: &DatabaseConfig) -> Option<Self> {
        let url = config.url.clone()?;
        Some(Self {
            url,
            timeout: Duration::from_secs(config.probe_timeout_secs),
        })
    }

    fn target(&self) -> Option<(String, u16)> {
        let url = Url::parse(&self.url).ok()?;
        let host = url.host_str()?.to_string();
        Some((host, url.port().unwrap_or(DEFAULT_DATABASE_PORT)))
    }
}

#[async_trait]
impl DatabaseProbe for TcpDatabaseProbe {
    async fn probe(&self) -> DatabaseStatus {
        let Some((host, port)) = self.target() else {
            return DatabaseStatus::Uninitialized;
        };

        match timeout(self.timeout, TcpStream::connect((host.as_str(), port))).await {
            Ok(Ok(_)) => DatabaseStatus::Connected {
                collections: Vec::new(),
            },
            Ok(Err(e)) => {
                tracing::debug!(host = %host, port, error = %e, "Database probe failed");
                DatabaseStatus::Failed(e.to_string())
            }
            Err(_) => DatabaseStatus::Failed(format!(
                "connection to {}:{} timed out after {:?}",
                host, port, self.timeout
            )),
        }
    }
}
