//! Config range checks.
//!
//! Returns every violation at once so an operator can fix a file in one pass.

use std::net::SocketAddr;

use super::ServiceConfig;

/// Check a loaded config, returning one message per violation.
pub fn validate(config: &ServiceConfig) -> Vec<String> {
    let mut errors = Vec::new();
    let rule = &config.rule;

    for (name, value) in [
        ("rule.fast_threshold_secs", rule.fast_threshold_secs),
        ("rule.slow_threshold_secs", rule.slow_threshold_secs),
    ] {
        if !value.is_finite() {
            errors.push(format!("{name}: must be finite (got {value})"));
        }
    }

    if rule.fast_threshold_secs > rule.slow_threshold_secs {
        errors.push(format!(
            "rule: fast_threshold_secs ({:.3}) must be <= slow_threshold_secs ({:.3})",
            rule.fast_threshold_secs, rule.slow_threshold_secs
        ));
    }

    if rule.min_grade > rule.max_grade {
        errors.push(format!(
            "rule: min_grade ({}) must be <= max_grade ({})",
            rule.min_grade, rule.max_grade
        ));
    }

    if config.server.addr.parse::<SocketAddr>().is_err() {
        errors.push(format!(
            "server.addr: '{}' is not a valid HOST:PORT socket address",
            config.server.addr
        ));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&ServiceConfig::default()).is_empty());
    }

    #[test]
    fn test_equal_thresholds_allowed() {
        let mut config = ServiceConfig::default();
        config.rule.fast_threshold_secs = 75.0;
        config.rule.slow_threshold_secs = 75.0;
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_inverted_grades_rejected() {
        let mut config = ServiceConfig::default();
        config.rule.min_grade = 5;
        config.rule.max_grade = 4;
        let errors = validate(&config);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("min_grade"));
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let mut config = ServiceConfig::default();
        config.rule.slow_threshold_secs = f64::NAN;
        let errors = validate(&config);
        assert!(errors.iter().any(|e| e.contains("must be finite")));
    }

    #[test]
    fn test_bad_addr_rejected() {
        let mut config = ServiceConfig::default();
        config.server.addr = "localhost".to_string();
        let errors = validate(&config);
        assert!(errors[0].starts_with("server.addr"));
    }
}
