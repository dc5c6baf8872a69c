/*
 * Domain Inversion - boolean domain algebra engine
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Value, Context)
 * - features/    : domain_inversion (typed DSL → evaluation → inversion → normalization)
 * - config/      : Presets, YAML loading, validation
 * - errors       : Crate error type
 *
 * Every entry point is a pure function of its arguments: no shared state,
 * safe to call from any number of threads.
 */

#![allow(clippy::unnecessary_map_or)] // map_or style for compatibility

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Engine configuration
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Convenience re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, EngineConfig, Preset};
pub use errors::{DomainError, Result};
pub use features::domain_inversion::{
    concat, constrained_leaf, domain_inversion, eval_domain, eval_domains, eval_leaf,
    extract_reference_models, filter_leaf, inverse_leaf, locale_part, localize_domain, merge,
    prepare_reference_domain, simplify, unique_value, BoolOp, Domain, DomainUseCase,
    DomainUseCaseImpl, DslCodec, Inversion, Inverter, Leaf, Operator,
};
pub use shared::models::{Context, Value};
