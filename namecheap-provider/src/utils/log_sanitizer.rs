//! Log sanitization utilities
//!
//! Every Namecheap request carries the API key as a plain query or form
//! parameter, and `setHosts` bodies can be large. Anything that reaches a log
//! line goes through here first.

/// Maximum number of characters to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Parameters whose values never appear in logs.
const SECRET_PARAMS: &[&str] = &["ApiKey"];

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit,
/// otherwise returns the first `TRUNCATE_LIMIT` characters with a suffix
/// indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// Render request parameters as `key=value&...` with secrets masked.
pub fn redact_params<K, V>(params: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    params
        .iter()
        .map(|(key, value)| {
            let key = key.as_ref();
            if SECRET_PARAMS.contains(&key) {
                format!("{key}=***")
            } else {
                format!("{key}={}", value.as_ref())
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}
