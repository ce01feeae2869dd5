//! Captured request records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One request as observed by the host proxy
///
/// Header and query pairs are kept exactly as received, duplicates included.
/// No validation is performed; malformed values are carried through as-is.
#[derive(Debug, Clone)]
pub struct ObservedRequest {
    /// Full request URL
    pub url: String,
    /// HTTP method verb
    pub method: String,
    /// Header pairs as received
    pub headers: Vec<(String, String)>,
    /// Query parameter pairs as received
    pub query: Vec<(String, String)>,
    /// Request start time, fractional seconds since the Unix epoch
    pub timestamp_start: f64,
}

/// Immutable snapshot of one captured request
///
/// Field order matches the persisted JSON object layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Full request URL
    pub url: String,
    /// HTTP method verb
    pub method: String,
    /// Headers, duplicate names collapsed to the last-seen value
    pub headers: BTreeMap<String, String>,
    /// Query parameters, duplicate names collapsed to the last-seen value
    pub query_params: BTreeMap<String, String>,
    /// Request start time, fractional seconds since the Unix epoch
    pub timestamp: f64,
}

impl LogEntry {
    /// Snapshot an observed request
    #[must_use]
    pub fn from_request(req: &ObservedRequest) -> Self {
        Self {
            url: req.url.clone(),
            method: req.method.clone(),
            headers: collapse_pairs(&req.headers),
            query_params: collapse_pairs(&req.query),
            timestamp: req.timestamp_start,
        }
    }
}

/// Collapse raw pairs into a map, last-seen value wins
fn collapse_pairs(pairs: &[(String, String)]) -> BTreeMap<String, String> {
    pairs.iter().cloned().collect()
}
