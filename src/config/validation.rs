//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Upstream base URLs must be absolute http(s) URLs
//! - Timeouts must be non-zero and correctly ordered, including the
//!   database probe, which must finish inside the request deadline
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("upstreams.{field}: invalid URL '{value}': {reason}")]
    InvalidUpstreamUrl {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("timeouts.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("timeouts.request_secs ({request}) must exceed timeouts.upstream_secs ({upstream})")]
    RequestDeadlineTooShort { request: u64, upstream: u64 },

    #[error("database.probe_timeout_secs must be greater than zero")]
    ZeroProbeTimeout,

    #[error("database.probe_timeout_secs ({probe}) must be less than timeouts.request_secs ({request})")]
    ProbeTimeoutTooLong { probe: u64, request: u64 },

    #[error("listener.host must not be empty")]
    EmptyHost,

    #[error("limits.max_body_bytes must be greater than zero")]
    ZeroBodyLimit,
}

/// Validate a parsed configuration.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }

    let upstreams = [
        ("quran_base_url", &config.upstreams.quran_base_url),
        ("hadith_base_url", &config.upstreams.hadith_base_url),
        ("aladhan_base_url", &config.upstreams.aladhan_base_url),
    ];
    for (field, value) in upstreams {
        if let Err(reason) = check_base_url(value) {
            errors.push(ValidationError::InvalidUpstreamUrl {
                field,
                value: value.clone(),
                reason,
            });
        }
    }

    let timeouts = &config.timeouts;
    if timeouts.upstream_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("upstream_secs"));
    }
    if timeouts.connect_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("connect_secs"));
    }
    if timeouts.request_secs <= timeouts.upstream_secs {
        errors.push(ValidationError::RequestDeadlineTooShort {
            request: timeouts.request_secs,
            upstream: timeouts.upstream_secs,
        });
    }

    let probe = config.database.probe_timeout_secs;
    if probe == 0 {
        errors.push(ValidationError::ZeroProbeTimeout);
    } else if probe >= timeouts.request_secs {
        errors.push(ValidationError::ProbeTimeoutTooLong {
            probe,
            request: timeouts.request_secs,
        });
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_base_url(value: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme '{}'", other)),
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    Ok(())
}
