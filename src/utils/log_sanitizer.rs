//! Log sanitization utilities
//!
//! Prevents large response bodies (and whatever tokens or records they
//! carry) from being dumped into debug/error logs wholesale.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the
/// leading `TRUNCATE_LIMIT` bytes (backed off to a char boundary) with
/// a suffix indicating the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let mut end = TRUNCATE_LIMIT;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... [truncated, {} bytes total]", &s[..end], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_unchanged() {
        let s = "hello world";
        assert_eq!(truncate_for_log(s), s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&s), s);
    }

    #[test]
    fn over_limit_truncated() {
        let s = "a".repeat(TRUNCATE_LIMIT + 100);
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated,"));
        assert!(result.contains(&format!("{} bytes total]", TRUNCATE_LIMIT + 100)));
        assert!(result.len() < s.len());
    }

    #[test]
    fn multibyte_chars_safe() {
        // Ensure truncation doesn't split multi-byte characters
        let s = "你".repeat(200); // Each '你' is 3 bytes
        let result = truncate_for_log(&s);
        assert!(result.contains("... [truncated,"));
    }
}
