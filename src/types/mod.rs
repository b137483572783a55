//! Shared data types for the grade adjustment service.

pub mod prediction;

pub use prediction::{InputData, PredictParams, PredictionResponse};
