//! Grade label encoder.

use serde::Deserialize;

use super::PreprocessingError;
use crate::config::defaults;

/// Maps known grade values to dense class indices.
///
/// Read from a plain JSON array of grades in class order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct GradeEncoder {
    classes: Vec<i64>,
}

impl Default for GradeEncoder {
    fn default() -> Self {
        Self::new((defaults::MIN_GRADE..=defaults::MAX_GRADE).collect())
    }
}

impl GradeEncoder {
    pub fn new(classes: Vec<i64>) -> Self {
        Self { classes }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class index of `grade`, or `None` for a grade outside the known classes.
    pub fn encode(&self, grade: i64) -> Option<usize> {
        self.classes.iter().position(|&c| c == grade)
    }

    pub(super) fn check_unique(&self) -> Result<(), PreprocessingError> {
        for (i, c) in self.classes.iter().enumerate() {
            if self.classes[..i].contains(c) {
                return Err(PreprocessingError::DuplicateClass(*c));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classes_cover_grade_range() {
        let enc = GradeEncoder::default();
        assert_eq!(enc.len(), 10);
        assert_eq!(enc.encode(1), Some(0));
        assert_eq!(enc.encode(10), Some(9));
        assert_eq!(enc.encode(11), None);
        assert_eq!(enc.encode(5), Some(4));
    }

    #[test]
    fn test_reads_plain_array() {
        let enc: GradeEncoder = serde_json::from_str("[3, 1]").unwrap();
        assert_eq!(enc, GradeEncoder::new(vec![3, 1]));
        assert_eq!(enc.encode(1), Some(1));
    }
}
