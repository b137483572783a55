//! Time-based grade adjustment rule.
//!
//! The whole decision is a three-way threshold comparison:
//!
//! | `time_taken`              | adjusted grade            |
//! |---------------------------|---------------------------|
//! | `< fast_threshold_secs`   | `min(grade + 1, max_grade)` |
//! | `> slow_threshold_secs`   | `max(grade - 1, min_grade)` |
//! | otherwise                 | `grade`                   |
//!
//! Both comparisons are strict, so a time exactly on a threshold leaves the
//! grade unchanged. Clamping only happens in the direction of the adjustment;
//! an out-of-range grade in the neutral band passes through untouched.

use serde::{Deserialize, Serialize};

use crate::config::defaults;

// ============================================================================
// Rule
// ============================================================================

/// Thresholds and bounds for the grade adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentRule {
    /// Times strictly below this (seconds) raise the grade
    pub fast_threshold_secs: f64,
    /// Times strictly above this (seconds) lower the grade
    pub slow_threshold_secs: f64,
    /// Floor applied when lowering
    pub min_grade: i64,
    /// Cap applied when raising
    pub max_grade: i64,
}

impl Default for AdjustmentRule {
    fn default() -> Self {
        Self {
            fast_threshold_secs: defaults::FAST_THRESHOLD_SECS,
            slow_threshold_secs: defaults::SLOW_THRESHOLD_SECS,
            min_grade: defaults::MIN_GRADE,
            max_grade: defaults::MAX_GRADE,
        }
    }
}

/// Which branch of the rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Fast,
    Steady,
    Slow,
}

/// Outcome of applying the rule to one input pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    pub original_grade: i64,
    pub adjusted_grade: i64,
    pub pace: Pace,
}

impl Adjustment {
    /// Signed difference between adjusted and original grade.
    pub fn delta(&self) -> i64 {
        self.adjusted_grade.saturating_sub(self.original_grade)
    }
}

impl AdjustmentRule {
    /// Classify a completion time against the thresholds.
    pub fn pace(&self, time_taken: f64) -> Pace {
        if time_taken < self.fast_threshold_secs {
            Pace::Fast
        } else if time_taken > self.slow_threshold_secs {
            Pace::Slow
        } else {
            Pace::Steady
        }
    }

    /// Apply the rule to a grade and completion time.
    pub fn apply(&self, grade: i64, time_taken: f64) -> Adjustment {
        let pace = self.pace(time_taken);
        let adjusted_grade = match pace {
            Pace::Fast => grade.saturating_add(1).min(self.max_grade),
            Pace::Slow => grade.saturating_sub(1).max(self.min_grade),
            Pace::Steady => grade,
        };

        Adjustment {
            original_grade: grade,
            adjusted_grade,
            pace,
        }
    }
}

/// Apply the default rule (60s / 90s, grades 1..=10).
pub fn adjust(grade: i64, time_taken: f64) -> Adjustment {
    AdjustmentRule::default().apply(grade, time_taken)
}
