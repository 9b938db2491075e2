//! Utility modules.

/// Log sanitization utilities that keep large response bodies out of logs.
pub mod log_sanitizer;
