//! Common test utilities for domain-inversion
//!
//! Shared builders, strategies and assertions for the integration tests.

#![allow(dead_code)]
#![allow(unused_imports)]

mod assertions;
mod builders;
mod strategies;

// Re-export all utilities
pub use assertions::*;
pub use builders::*;
pub use strategies::*;
