//! Request and response shapes for `GET /predict`.

use serde::{Deserialize, Serialize};

use crate::adjustment::Adjustment;

/// Raw query parameters. Both are kept as strings so that absence and
/// malformed values can be reported separately.
#[derive(Debug, Default, Deserialize)]
pub struct PredictParams {
    pub grade: Option<String>,
    pub time_taken: Option<String>,
}

/// Echo of the parsed inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputData {
    pub original_grade: i64,
    pub time_taken: f64,
}

/// Successful adjustment result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResponse {
    /// Always `"success"`
    pub status: String,
    pub adjusted_grade: i64,
    /// Signed difference `adjusted_grade - original_grade`
    pub adjustment: i64,
    pub input_data: InputData,
}

impl PredictionResponse {
    pub fn new(adjustment: &Adjustment, time_taken: f64) -> Self {
        Self {
            status: "success".to_string(),
            adjusted_grade: adjustment.adjusted_grade,
            adjustment: adjustment.delta(),
            input_data: InputData {
                original_grade: adjustment.original_grade,
                time_taken,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjustment::adjust;

    #[test]
    fn test_response_json_shape() {
        let resp = PredictionResponse::new(&adjust(5, 30.0), 30.0);
        let v = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "status": "success",
                "adjusted_grade": 6,
                "adjustment": 1,
                "input_data": {"original_grade": 5, "time_taken": 30.0}
            })
        );
    }

    #[test]
    fn test_time_taken_serialized_as_float() {
        let resp = PredictionResponse::new(&adjust(5, 75.0), 75.0);
        let s = serde_json::to_string(&resp).unwrap();
        assert!(s.contains(r#""time_taken":75.0"#), "got {s}");
    }
}
