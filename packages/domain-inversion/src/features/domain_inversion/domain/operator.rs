//! Comparison operators and boolean combinators

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator of a leaf clause
///
/// The eight evaluated operators form a closed set. Any other symbol is kept
/// verbatim in `Other` so it survives rewriting; it evaluates to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `in`
    In,
    /// `not in`
    NotIn,
    /// Anything else (`child_of`, `like`, vendor operators...)
    Other(String),
}

impl Operator {
    pub fn parse(symbol: &str) -> Self {
        match symbol {
            "=" => Self::Eq,
            "!=" => Self::Ne,
            ">" => Self::Gt,
            "<" => Self::Lt,
            ">=" => Self::Ge,
            "<=" => Self::Le,
            "in" => Self::In,
            "not in" => Self::NotIn,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::In => "in",
            Self::NotIn => "not in",
            Self::Other(symbol) => symbol,
        }
    }

    /// Hierarchical operators (`child_of`, `not child_of`)
    pub fn is_child_of(&self) -> bool {
        matches!(self, Self::Other(symbol) if symbol.contains("child_of"))
    }

    /// Operators with no evaluation rule
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl From<String> for Operator {
    fn from(symbol: String) -> Self {
        Operator::parse(&symbol)
    }
}

impl From<&str> for Operator {
    fn from(symbol: &str) -> Self {
        Operator::parse(symbol)
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        op.as_str().to_string()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Boolean combinator of a branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BoolOp {
    #[default]
    And,
    Or,
}

impl BoolOp {
    /// The DSL tag (`"AND"` / `"OR"`)
    pub fn tag(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            _ => None,
        }
    }
}

impl fmt::Display for BoolOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols_roundtrip() {
        for symbol in ["=", "!=", ">", "<", ">=", "<=", "in", "not in", "child_of", "ilike"] {
            assert_eq!(Operator::parse(symbol).as_str(), symbol);
        }
    }

    #[test]
    fn test_unknown_operators() {
        assert!(Operator::parse("like").is_unknown());
        assert!(!Operator::parse("not in").is_unknown());
    }

    #[test]
    fn test_child_of_detection() {
        assert!(Operator::parse("child_of").is_child_of());
        assert!(Operator::parse("not child_of").is_child_of());
        assert!(!Operator::parse("parent_of").is_child_of());
        assert!(!Operator::Eq.is_child_of());
    }

    #[test]
    fn test_bool_op_tags() {
        assert_eq!(BoolOp::from_tag("OR"), Some(BoolOp::Or));
        assert_eq!(BoolOp::from_tag("or"), None);
        assert_eq!(BoolOp::default().tag(), "AND");
    }
}
