//! Keeps response bodies from flooding the operator log.

/// Maximum number of characters kept from a body.
const TRUNCATE_LIMIT: usize = 256;

/// Shorten `s` to at most `TRUNCATE_LIMIT` characters, noting the original size.
pub fn truncate_for_log(s: &str) -> String {
    match s.char_indices().nth(TRUNCATE_LIMIT) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}... [truncated, total {} bytes]", &s[..cut], s.len()),
    }
}
