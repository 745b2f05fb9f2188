//! Infrastructure layer module
//!
//! Adapters around the outside world:
//! - Settings loading from the env file and process environment
//! - Logging infrastructure

pub mod config;
pub mod logging;
