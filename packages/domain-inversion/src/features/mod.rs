//! Feature modules
//!
//! Each feature contains:
//! - domain/         - Pure data types
//! - infrastructure/ - Algorithms and codecs
//! - application/    - Use cases

pub mod domain_inversion;
