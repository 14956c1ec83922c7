//! Log truncation for catalog payloads
//!
//! `home.json` and set documents run to hundreds of kilobytes. Debug and error
//! logs only keep a prefix of them.

/// Maximum number of bytes of a payload kept in a log line.
const TRUNCATE_LIMIT: usize = 512;

/// `str::floor_char_boundary` is not stable on the MSRV.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a payload for logging.
///
/// Payloads within the limit are returned as-is; longer ones are cut at a
/// character boundary and suffixed with their total size.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = floor_char_boundary(s, TRUNCATE_LIMIT);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_payload_kept() {
        let body = r#"{"data":{}}"#;
        assert_eq!(truncate_for_log(body), body);
    }

    #[test]
    fn payload_at_limit_kept() {
        let body = "x".repeat(TRUNCATE_LIMIT);
        assert_eq!(truncate_for_log(&body), body);
    }

    #[test]
    fn large_payload_reports_size() {
        let body = "x".repeat(TRUNCATE_LIMIT * 3);
        let logged = truncate_for_log(&body);
        assert!(logged.starts_with(&"x".repeat(TRUNCATE_LIMIT)));
        assert!(logged.ends_with(&format!("total {} bytes]", TRUNCATE_LIMIT * 3)));
    }

    #[test]
    fn cut_respects_char_boundary() {
        // 标题里常见多字节字符
        let body = "é".repeat(TRUNCATE_LIMIT);
        let logged = truncate_for_log(&body);
        assert!(logged.contains("... [truncated"));
    }
}
