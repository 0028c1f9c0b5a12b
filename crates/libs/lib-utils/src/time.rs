//! # Time Utilities
//!
//! Utilities for time formatting using chrono.

use chrono::{DateTime, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format time for use inside a file name: no colons, microsecond precision.
///
/// `2024-03-01T12:30:05.123456Z` becomes `2024-03-01T12-30-05-123456Z`.
pub fn format_file_stamp(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%dT%H-%M-%S-%6fZ").to_string()
}
