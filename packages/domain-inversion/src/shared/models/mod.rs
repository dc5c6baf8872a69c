//! Shared models used across features

pub mod context;
pub mod value;

pub use context::Context;
pub use value::Value;
