//! Host proxy integration
//!
//! Maps the host's request representation into the filter's input type. The
//! proxy engine itself (interception, TLS, HTTP parsing) lives in the host;
//! only request metadata crosses this boundary.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::capture::ObservedRequest;

/// Build an [`ObservedRequest`] from a hyper request
///
/// The body is never touched. Non-UTF-8 header values are lossily converted;
/// the filter degrades to capturing partial data rather than rejecting input.
pub fn observe_request<B>(req: &hyper::Request<B>, timestamp_start: f64) -> ObservedRequest {
    let headers = req
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();

    ObservedRequest {
        url: req.uri().to_string(),
        method: req.method().as_str().to_string(),
        headers,
        query: parse_query(req.uri().query().unwrap_or("")),
        timestamp_start,
    }
}

/// Parse a URL query string into raw key/value pairs
///
/// Pairs are `&`-separated, `+` counts as a space, and percent escapes are
/// decoded. Undecodable escapes are kept verbatim; a key without `=` maps to
/// an empty value.
#[must_use]
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (decode_component(key), decode_component(value)),
            None => (decode_component(pair), String::new()),
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Current time as fractional seconds since the Unix epoch
#[must_use]
pub fn unix_timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}
