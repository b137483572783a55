//! Grade Adjuster: time-based grade adjustment over HTTP
//!
//! A completion time below the fast threshold raises a grade by one, a time
//! above the slow threshold lowers it by one, and anything in between leaves
//! it alone. Results are clamped to the configured grade range only in the
//! direction of the adjustment.
//!
//! ## Modules
//!
//! - **adjustment**: the threshold rule
//! - **api**: axum router, handlers and error mapping
//! - **config**: TOML configuration and validation
//! - **preprocessing**: read-only grade encoder and time scaler
//! - **types**: request/response data model

pub mod adjustment;
pub mod api;
pub mod config;
pub mod preprocessing;
pub mod types;

pub use adjustment::{adjust, Adjustment, AdjustmentRule, Pace};
pub use api::{create_app, AppState, PredictError};
pub use config::{ConfigError, ServiceConfig};
pub use preprocessing::{FeatureVector, Preprocessor, PreprocessingError};
pub use types::{InputData, PredictParams, PredictionResponse};
