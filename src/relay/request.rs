//! Outbound request descriptor.

use serde_json::Value;
use url::Url;

use crate::relay::{RelayError, Upstream};

/// Everything needed to make one upstream call and unwrap its answer.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    upstream: Upstream,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
    empty: Value,
}

impl OutboundRequest {
    /// Start a request against `upstream`. The fallback for an absent `data`
    /// key is an empty object until [`OutboundRequest::empty_list`] is called.
    pub fn new(upstream: Upstream) -> Self {
        Self {
            upstream,
            segments: Vec::new(),
            query: Vec::new(),
            empty: Value::Object(Default::default()),
        }
    }

    /// Append one path segment. Caller-supplied values are percent-encoded,
    /// so a `/` inside `segment` never introduces a new path level.
    pub fn segment(mut self, segment: impl ToString) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Use `[]` instead of `{}` when the upstream omits `data`.
    pub fn empty_list(mut self) -> Self {
        self.empty = Value::Array(Vec::new());
        self
    }

    pub fn upstream(&self) -> Upstream {
        self.upstream
    }

    pub fn empty(&self) -> &Value {
        &self.empty
    }

    /// Resolve against the upstream base URL.
    pub fn url(&self, base: &Url) -> Result<Url, RelayError> {
        let mut url = base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| RelayError::InvalidUrl(format!("{} cannot be a base", base)))?;
            path.pop_if_empty().extend(&self.segments);
        }
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }
}
