//! API route handlers
//!
//! - `predict`: time-based grade adjustment
//! - `health`: liveness and uptime

mod health;
mod predict;

pub use health::*;
pub use predict::*;

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;

use crate::adjustment::AdjustmentRule;
use crate::preprocessing::Preprocessor;

// ============================================================================
// API State
// ============================================================================

/// Shared, read-only state for API handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Thresholds and bounds applied by `/predict`
    pub rule: AdjustmentRule,
    /// Encoder/scaler loaded at startup
    pub preprocessor: Arc<Preprocessor>,
    /// Wall-clock start time
    pub started_at: DateTime<Utc>,
    started: Instant,
}

impl AppState {
    pub fn new(rule: AdjustmentRule, preprocessor: Preprocessor) -> Self {
        Self {
            rule,
            preprocessor: Arc::new(preprocessor),
            started_at: Utc::now(),
            started: Instant::now(),
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AdjustmentRule::default(), Preprocessor::default())
    }
}
