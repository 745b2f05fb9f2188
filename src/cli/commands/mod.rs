//! CLI command implementations.

pub mod settings;
