//! Relay error definitions.

use thiserror::Error;

/// Errors that can occur while relaying a request upstream.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The upstream answered but its envelope did not report success.
    #[error("Upstream error")]
    Rejected,

    /// Connection failure, timeout, non-2xx status or undecodable body.
    #[error("{message}")]
    Transport { message: String, timed_out: bool },

    /// The outbound URL could not be built from the configured base.
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(String),
}

impl RelayError {
    /// Short label used for metrics and logs.
    pub fn outcome(&self) -> &'static str {
        match self {
            RelayError::Rejected => "rejected",
            RelayError::Transport { timed_out: true, .. } => "timeout",
            RelayError::Transport { .. } => "transport",
            RelayError::InvalidUrl(_) => "invalid_url",
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        RelayError::Transport {
            timed_out: err.is_timeout(),
            message: error_chain(&err),
        }
    }
}

impl From<url::ParseError> for RelayError {
    fn from(err: url::ParseError) -> Self {
        RelayError::InvalidUrl(err.to_string())
    }
}

/// Render an error with its source chain, e.g.
/// `error sending request for url (...): operation timed out`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
