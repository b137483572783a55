//! Read-only feature preprocessing.
//!
//! A label encoder for grades and a min-max scaler for completion time,
//! loaded once from a JSON artifact at startup. The resulting features are
//! recorded in request traces and never influence the adjustment itself.

mod encoder;
mod scaler;

pub use encoder::GradeEncoder;
pub use scaler::TimeScaler;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors raised while loading a preprocessing artifact.
#[derive(Debug, Error)]
pub enum PreprocessingError {
    #[error("Preprocessing artifact I/O error ({}): {1}", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Preprocessing artifact parse error ({}): {1}", .0.display())]
    Parse(PathBuf, #[source] serde_json::Error),

    #[error("Grade encoder has duplicate class: {0}")]
    DuplicateClass(i64),
}

/// Features derived from one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    /// Index of the grade among known classes, `None` if unseen
    pub encoded_grade: Option<usize>,
    /// Time scaled into the artifact's range
    pub scaled_time: f64,
}

/// Encoder and scaler pair, immutable after load.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Preprocessor {
    #[serde(default)]
    pub grade_classes: GradeEncoder,
    #[serde(default)]
    pub time_range: TimeScaler,
}

impl Preprocessor {
    /// Load from a JSON artifact, falling back to defaults if the file is absent.
    pub fn load(path: &Path) -> Result<Self, PreprocessingError> {
        if !path.exists() {
            warn!(path = %path.display(), "Preprocessing artifact not found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| PreprocessingError::Io(path.to_path_buf(), e))?;
        let preprocessor = Self::from_json(&contents)
            .map_err(|e| match e {
                PreprocessingError::Parse(_, inner) => {
                    PreprocessingError::Parse(path.to_path_buf(), inner)
                }
                other => other,
            })?;

        info!(
            path = %path.display(),
            classes = preprocessor.grade_classes.len(),
            time_min = preprocessor.time_range.min,
            time_max = preprocessor.time_range.max,
            "Loaded preprocessing artifact"
        );
        Ok(preprocessor)
    }

    /// Parse an artifact from a JSON string.
    pub fn from_json(contents: &str) -> Result<Self, PreprocessingError> {
        let preprocessor: Self = serde_json::from_str(contents)
            .map_err(|e| PreprocessingError::Parse(PathBuf::from("<inline>"), e))?;
        preprocessor.grade_classes.check_unique()?;
        Ok(preprocessor)
    }

    pub fn features(&self, grade: i64, time_taken: f64) -> FeatureVector {
        FeatureVector {
            encoded_grade: self.grade_classes.encode(grade),
            scaled_time: self.time_range.scale(time_taken),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_artifact_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let p = Preprocessor::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(p, Preprocessor::default());
    }

    #[test]
    fn test_load_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"grade_classes": [2, 4, 6], "time_range": {{"min": 0.0, "max": 200.0}}}}"#
        )
        .unwrap();

        let p = Preprocessor::load(file.path()).unwrap();
        let f = p.features(4, 50.0);
        assert_eq!(f.encoded_grade, Some(1));
        assert!((f.scaled_time - 0.25).abs() < 1e-12);
        assert_eq!(p.features(5, 0.0).encoded_grade, None);
    }

    #[test]
    fn test_malformed_artifact_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Preprocessor::load(file.path()).unwrap_err();
        assert!(matches!(err, PreprocessingError::Parse(ref p, _) if p == file.path()));
    }

    #[test]
    fn test_duplicate_class_rejected() {
        let err = Preprocessor::from_json(r#"{"grade_classes": [1, 1]}"#).unwrap_err();
        assert!(matches!(err, PreprocessingError::DuplicateClass(1)));
    }

    #[test]
    fn test_partial_artifact_fills_defaults() {
        let p = Preprocessor::from_json(r#"{"grade_classes": [7]}"#).unwrap();
        assert_eq!(p.time_range, TimeScaler::default());
        assert_eq!(p.features(7, 0.0).encoded_grade, Some(0));
    }
}
