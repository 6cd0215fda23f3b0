//! Utility modules.

/// Log sanitization utilities to prevent credential exposure.
pub mod log_sanitizer;
