pub mod settings;

pub use settings::{FieldSpec, RedactedSettings, Settings};
