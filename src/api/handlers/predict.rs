//! Grade adjustment endpoint

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use tracing::debug;

use super::AppState;
use crate::api::error::PredictError;
use crate::types::{PredictParams, PredictionResponse};

/// GET /predict?grade=<int>&time_taken=<float>
pub async fn predict(
    State(state): State<AppState>,
    query: Result<Query<PredictParams>, QueryRejection>,
) -> Result<Json<PredictionResponse>, PredictError> {
    let Query(params) = query.map_err(|e| PredictError::InvalidFormat(e.body_text()))?;
    let (grade, time_taken) = parse_params(&params)?;

    let adjustment = state.rule.apply(grade, time_taken);
    let features = state.preprocessor.features(grade, time_taken);
    debug!(
        grade,
        time_taken,
        adjusted_grade = adjustment.adjusted_grade,
        pace = ?adjustment.pace,
        ?features,
        "Grade adjusted"
    );

    Ok(Json(PredictionResponse::new(&adjustment, time_taken)))
}

/// Validate and convert the raw query strings.
///
/// Empty values count as missing. Surrounding ASCII whitespace is ignored.
pub fn parse_params(params: &PredictParams) -> Result<(i64, f64), PredictError> {
    fn present(v: &Option<String>) -> Option<&str> {
        v.as_deref().filter(|s| !s.is_empty())
    }

    let (Some(grade), Some(time_taken)) = (present(&params.grade), present(&params.time_taken))
    else {
        return Err(PredictError::MissingParameter);
    };

    let grade: i64 = grade
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .parse()
        .map_err(|e| PredictError::InvalidFormat(format!("grade: {e}")))?;

    let time_taken: f64 = time_taken
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .parse()
        .map_err(|e| PredictError::InvalidFormat(format!("time_taken: {e}")))?;

    if !time_taken.is_finite() {
        return Err(PredictError::InvalidFormat(format!(
            "time_taken: must be a finite number (got {time_taken})"
        )));
    }

    Ok((grade, time_taken))
}
