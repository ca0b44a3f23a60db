//! Request context with typed parameters.

use std::collections::HashMap;

use crate::lifecycle::TimingContext;

/// Unique request identifier for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        let id = format!(
            "{:x}-{:x}-{:x}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos(),
            rand_simple(),
            rand_simple()
        );
        Self(id)
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

fn rand_simple() -> u32 {
    // Pseudo-random without std::random, usable from WASM
    static mut SEED: u32 = 98761;
    unsafe {
        SEED = SEED.wrapping_mul(1103515245).wrapping_add(12345);
        SEED
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Query string parameters.
pub type QueryParams = HashMap<String, String>;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

/// Typed request context passed to page handlers.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Request path, without the query string.
    pub path: String,
    /// Parsed query string parameters.
    pub query: QueryParams,
    /// Timing context for observability.
    pub timing: TimingContext,
}

impl RequestContext {
    /// Create a new request context. The query string (if any) is split
    /// off `path_with_query` and parsed into `query`.
    pub fn new(method: Method, path_with_query: impl Into<String>) -> Self {
        let path_with_query = path_with_query.into();
        let (path, query) = match path_with_query.split_once('?') {
            Some((path, qs)) => (path.to_string(), parse_query_string(qs)),
            None => (path_with_query, HashMap::new()),
        };
        Self {
            request_id: RequestId::generate(),
            method,
            path,
            query,
            timing: TimingContext::new(),
        }
    }

    /// Get a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(|s| s.as_str())
    }
}

/// Parse an `application/x-www-form-urlencoded` query string.
///
/// Later duplicates win. Keys without `=` map to the empty string.
pub fn parse_query_string(qs: &str) -> QueryParams {
    let mut params = HashMap::new();
    for pair in qs.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        params.insert(url_decode(key), url_decode(value));
    }
    params
}

/// Decode percent-escapes and `+` in a query component.
///
/// Malformed escapes pass through literally rather than failing.
pub fn url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_parsing() {
        let ctx = RequestContext::new(Method::Get, "/tour?id=3&ref=home");
        assert_eq!(ctx.path, "/tour");
        assert_eq!(ctx.query_param("id"), Some("3"));
        assert_eq!(ctx.query_param("ref"), Some("home"));
        assert_eq!(ctx.query_param("missing"), None);
    }

    #[test]
    fn test_path_without_query() {
        let ctx = RequestContext::new(Method::Get, "/tours");
        assert_eq!(ctx.path, "/tours");
        assert!(ctx.query.is_empty());
    }

    #[test]
    fn test_url_decode() {
        assert_eq!(url_decode("Arenal%20Volcano"), "Arenal Volcano");
        assert_eq!(url_decode("Rio+Celeste"), "Rio Celeste");
        assert_eq!(url_decode("plain"), "plain");
        // Truncated escape survives as-is
        assert_eq!(url_decode("50%"), "50%");
    }

    #[test]
    fn test_query_key_without_value() {
        let params = parse_query_string("id");
        assert_eq!(params.get("id").map(String::as_str), Some(""));
    }
}
