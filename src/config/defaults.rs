//! System-wide default constants.
//!
//! Grouped by subsystem. Config file values override the tunable ones.

// ============================================================================
// Adjustment Rule
// ============================================================================

/// Completion times strictly below this (seconds) raise the grade.
pub const FAST_THRESHOLD_SECS: f64 = 60.0;

/// Completion times strictly above this (seconds) lower the grade.
pub const SLOW_THRESHOLD_SECS: f64 = 90.0;

/// Lowest grade a downward adjustment can produce.
pub const MIN_GRADE: i64 = 1;

/// Highest grade an upward adjustment can produce.
pub const MAX_GRADE: i64 = 10;

// ============================================================================
// Server
// ============================================================================

/// Default HTTP bind address.
pub const SERVER_ADDR: &str = "127.0.0.1:5000";

/// Config file looked up in the working directory when `GRADE_CONFIG` is unset.
pub const LOCAL_CONFIG_FILE: &str = "grade_config.toml";

// ============================================================================
// Preprocessing
// ============================================================================

/// Default location of the encoder/scaler artifact.
pub const PREPROCESSING_ARTIFACT: &str = "preprocessing.json";

/// Upper end of the default time scaler range (seconds).
///
/// 120 s keeps both rule thresholds inside `[0, 1]`.
pub const SCALER_TIME_MAX_SECS: f64 = 120.0;
