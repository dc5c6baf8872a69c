//! Operator table
//!
//! `apply(op, context_value, clause_value)` returns `None` when the operands
//! cannot be compared (type error). Callers decide what that means; leaf
//! evaluation maps it to `false`.

use crate::features::domain_inversion::domain::Operator;
use crate::shared::models::Value;
use std::cmp::Ordering;

/// Apply a comparison operator
pub fn apply(op: &Operator, context_value: &Value, clause_value: &Value) -> Option<bool> {
    match op {
        Operator::Eq => Some(context_value.loose_eq(clause_value)),
        Operator::Ne => Some(!context_value.loose_eq(clause_value)),
        Operator::Gt => context_value.compare(clause_value).map(|o| o == Ordering::Greater),
        Operator::Lt => context_value.compare(clause_value).map(|o| o == Ordering::Less),
        Operator::Ge => context_value.compare(clause_value).map(|o| o != Ordering::Less),
        Operator::Le => context_value.compare(clause_value).map(|o| o != Ordering::Greater),
        Operator::In => in_(context_value, clause_value),
        Operator::NotIn => in_(context_value, clause_value).map(|found| !found),
        Operator::Other(_) => Some(true),
    }
}

/// Asymmetric membership
///
/// - list context, list clause: any clause element appears in the context
/// - list context, scalar clause: the clause value appears in the context
/// - scalar context: the context value appears in the clause container
///   (list element or substring); `None` if the clause is not a container
pub fn in_(context_value: &Value, clause_value: &Value) -> Option<bool> {
    match (context_value, clause_value) {
        (Value::List(haystack), Value::List(needles)) => {
            Some(needles.iter().any(|n| haystack.iter().any(|h| h.loose_eq(n))))
        }
        (Value::List(haystack), needle) => Some(haystack.iter().any(|h| h.loose_eq(needle))),
        (needle, Value::List(haystack)) => Some(haystack.iter().any(|h| h.loose_eq(needle))),
        (Value::String(needle), Value::String(haystack)) => Some(haystack.contains(needle.as_str())),
        _ => None,
    }
}
