//! Engine configuration
//!
//! Two levels:
//! - Preset: `EngineConfig::preset(Preset::Strict)`
//! - YAML v1 file with per-field overrides
//!
//! ```yaml
//! version: 1
//! preset: standard
//! overrides:
//!   max_depth: 64
//!   constrained_equality: false
//! ```

pub mod engine_config;
pub mod error;
pub mod io;
pub mod preset;
pub mod validation;

// Re-exports
pub use engine_config::{EngineConfig, MAX_DEPTH_LIMIT};
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, EngineOverrides};
pub use preset::Preset;
pub use validation::Validatable;
