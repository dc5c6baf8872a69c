//! Tri-valued inversion result

use super::expression::Domain;
use serde::{Deserialize, Serialize};

/// Outcome of inverting a domain on one field
///
/// `Resolved(true)`: nothing left constrains the field.
/// `Resolved(false)`: the domain cannot hold whatever the field's value.
/// `Residual(d)`: the field must still satisfy `d`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "serde_json::Value")]
pub enum Inversion {
    Resolved(bool),
    Residual(Domain),
}

impl Inversion {
    pub fn is_true(&self) -> bool {
        matches!(self, Inversion::Resolved(true))
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Inversion::Resolved(false))
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Inversion::Resolved(_))
    }

    pub fn residual(&self) -> Option<&Domain> {
        match self {
            Inversion::Residual(domain) => Some(domain),
            Inversion::Resolved(_) => None,
        }
    }

    pub fn into_residual(self) -> Option<Domain> {
        match self {
            Inversion::Residual(domain) => Some(domain),
            Inversion::Resolved(_) => None,
        }
    }
}

impl From<bool> for Inversion {
    fn from(value: bool) -> Self {
        Inversion::Resolved(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(Inversion::Resolved(true).is_true());
        assert!(Inversion::Resolved(false).is_false());
        let residual = Inversion::Residual(Domain::leaf("x", "=", 3));
        assert!(!residual.is_resolved());
        assert_eq!(residual.residual(), Some(&Domain::leaf("x", "=", 3)));
        assert_eq!(Inversion::from(true).into_residual(), None);
    }
}
