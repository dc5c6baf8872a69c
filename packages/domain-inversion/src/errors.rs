//! Error types for domain-inversion
//!
//! Evaluation and inversion over the typed model are total. Errors only come
//! from decoding the JSON DSL and from loading configuration.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for domain-inversion operations
#[derive(Debug, Error)]
pub enum DomainError {
    /// A clause that looks like a leaf but cannot be one
    #[error("Malformed leaf: {0}")]
    MalformedLeaf(String),

    /// An element that is neither a leaf, a sub-domain nor a leading tag
    #[error("Unexpected element at position {position}: {found}")]
    UnexpectedElement { position: usize, found: String },

    /// A JSON value with no `Value` counterpart (bad date object, huge number...)
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Nesting deeper than the configured limit
    #[error("Domain nesting depth {depth} exceeds limit {max}")]
    TooDeep { depth: usize, max: usize },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl DomainError {
    /// Create a malformed leaf error
    pub fn malformed_leaf(msg: impl Into<String>) -> Self {
        DomainError::MalformedLeaf(msg.into())
    }

    /// Create an invalid value error
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        DomainError::InvalidValue(msg.into())
    }

    pub fn unexpected(position: usize, found: &serde_json::Value) -> Self {
        DomainError::UnexpectedElement {
            position,
            found: found.to_string(),
        }
    }
}

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display() {
        let err = DomainError::malformed_leaf("field must be a string");
        assert_eq!(err.to_string(), "Malformed leaf: field must be a string");

        let err = DomainError::unexpected(2, &json!("AND"));
        assert_eq!(err.to_string(), "Unexpected element at position 2: \"AND\"");

        let err = DomainError::TooDeep { depth: 9, max: 8 };
        assert!(err.to_string().contains("exceeds limit 8"));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("[1, 2")
            .err()
            .unwrap();
        let err: DomainError = json_err.into();
        assert!(matches!(err, DomainError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_result_propagation() {
        fn inner() -> Result<()> {
            Err(DomainError::invalid_value("NaN"))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        assert!(matches!(outer(), Err(DomainError::InvalidValue(_))));
    }
}
