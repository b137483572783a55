//! Service Configuration Module
//!
//! Configuration is loaded from TOML, validated once at startup and then
//! passed by value into the HTTP layer. Nothing here is global.
//!
//! ## Loading Order
//!
//! 1. Explicit path (`--config` on the command line)
//! 2. `GRADE_CONFIG` environment variable (path to TOML file)
//! 3. `grade_config.toml` in the current working directory
//! 4. Built-in defaults

mod service_config;
mod validation;
pub mod defaults;

pub use service_config::*;
pub use validation::validate;
