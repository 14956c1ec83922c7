//! Utility modules.

/// Log truncation for large catalog payloads.
pub mod log_sanitizer;
