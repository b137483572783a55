//! Min-max scaler for completion time.

use serde::Deserialize;

use crate::config::defaults;

/// Linear map of `[min, max]` onto `[0, 1]`. Values outside the range are not clipped.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TimeScaler {
    pub min: f64,
    pub max: f64,
}

impl Default for TimeScaler {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: defaults::SCALER_TIME_MAX_SECS,
        }
    }
}

impl TimeScaler {
    pub fn scale(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            return 0.0;
        }
        (value - self.min) / span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_endpoints() {
        let s = TimeScaler { min: 30.0, max: 130.0 };
        assert_eq!(s.scale(30.0), 0.0);
        assert_eq!(s.scale(130.0), 1.0);
        assert_eq!(s.scale(80.0), 0.5);
        assert_eq!(s.scale(230.0), 2.0);
    }

    #[test]
    fn test_degenerate_range() {
        let s = TimeScaler { min: 5.0, max: 5.0 };
        assert_eq!(s.scale(100.0), 0.0);
    }
}
