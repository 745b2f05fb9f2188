//! Evidence Anchor - runtime settings
//!
//! Typed settings for the evidence-anchor backend: cloud credentials, the AI
//! service key, the blockchain RPC endpoint, signing key and contract address,
//! and the frontend origin used for CORS.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the [`Settings`] record and its field catalogue
//! - **Infrastructure Layer** (`infrastructure`): settings loading and logging
//! - **CLI Layer** (`cli`): command-line inspection of the loaded settings
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! fn main() -> anyhow::Result<()> {
//!     let settings = Arc::new(evidence_anchor::load()?);
//!     println!("RPC endpoint: {}", settings.rpc_url());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{FieldSpec, RedactedSettings, Settings};
pub use infrastructure::config::{load, SettingsError, SettingsLoader, DEFAULT_ENV_FILE};
pub use infrastructure::logging::{LogConfig, LogFormat, LoggerImpl, RotationPolicy};
