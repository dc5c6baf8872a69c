//! Typed domain DSL
//!
//! A raw domain is a nested list where a clause `[field, operator, value, ...]`
//! and a sub-domain are told apart by shape. Here the shape is explicit:
//! a `Domain` is a leaf clause or a conjunction/disjunction of sub-domains.
//! Implicit (untagged) lists and `"AND"`-tagged lists are both `And`.

use super::operator::{BoolOp, Operator};
use crate::shared::models::Value;
use serde::{Deserialize, Serialize};

/// A single clause `(field, operator, value, extra...)`
///
/// `field` may be a dotted path (`"partner.code"`). `extra` carries the
/// trailing positional metadata of the clause; its first entry is the target
/// model (or, for `child_of`, the parent field).
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    pub field: String,
    pub operator: Operator,
    pub value: Value,
    pub extra: Vec<String>,
}

impl Leaf {
    pub fn new(field: impl Into<String>, operator: impl Into<Operator>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator: operator.into(),
            value: value.into(),
            extra: Vec::new(),
        }
    }

    /// Append trailing metadata (target model / target field)
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.extra.push(target.into());
        self
    }

    /// Field name before the first dot
    pub fn base(&self) -> &str {
        base_name(&self.field)
    }

    pub fn is_dotted(&self) -> bool {
        self.field.contains('.')
    }

    /// First trailing element, if any
    pub fn target(&self) -> Option<&str> {
        self.extra.first().map(String::as_str)
    }
}

/// Portion of a dotted path before the first dot
pub fn base_name(field: &str) -> &str {
    field.split('.').next().unwrap_or(field)
}

/// Boolean filter expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "serde_json::Value")]
pub enum Domain {
    Leaf(Leaf),
    And(Vec<Domain>),
    Or(Vec<Domain>),
}

impl Domain {
    /// The empty domain `[]`
    pub fn empty() -> Self {
        Domain::And(Vec::new())
    }

    pub fn leaf(field: impl Into<String>, operator: impl Into<Operator>, value: impl Into<Value>) -> Self {
        Domain::Leaf(Leaf::new(field, operator, value))
    }

    pub fn and(children: Vec<Domain>) -> Self {
        Domain::And(children)
    }

    pub fn or(children: Vec<Domain>) -> Self {
        Domain::Or(children)
    }

    pub fn node(op: BoolOp, children: Vec<Domain>) -> Self {
        match op {
            BoolOp::And => Domain::And(children),
            BoolOp::Or => Domain::Or(children),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Domain::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Domain::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    /// A branch with no operands
    pub fn is_empty(&self) -> bool {
        match self {
            Domain::Leaf(_) => false,
            Domain::And(children) | Domain::Or(children) => children.is_empty(),
        }
    }

    /// Combinator of a branch (`None` for a leaf)
    pub fn bool_op(&self) -> Option<BoolOp> {
        match self {
            Domain::Leaf(_) => None,
            Domain::And(_) => Some(BoolOp::And),
            Domain::Or(_) => Some(BoolOp::Or),
        }
    }

    /// Operands of a branch (empty for a leaf)
    pub fn children(&self) -> &[Domain] {
        match self {
            Domain::Leaf(_) => &[],
            Domain::And(children) | Domain::Or(children) => children,
        }
    }

    /// Every leaf, depth first
    pub fn leaves(&self) -> Vec<&Leaf> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Leaf>) {
        match self {
            Domain::Leaf(leaf) => out.push(leaf),
            Domain::And(children) | Domain::Or(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    /// Rebuild the domain with every leaf passed through `f`
    pub fn map_leaves<F>(&self, f: &F) -> Domain
    where
        F: Fn(&Leaf) -> Domain,
    {
        match self {
            Domain::Leaf(leaf) => f(leaf),
            Domain::And(children) => Domain::And(children.iter().map(|c| c.map_leaves(f)).collect()),
            Domain::Or(children) => Domain::Or(children.iter().map(|c| c.map_leaves(f)).collect()),
        }
    }
}

impl From<Leaf> for Domain {
    fn from(leaf: Leaf) -> Self {
        Domain::Leaf(leaf)
    }
}
