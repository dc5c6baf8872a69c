//! Structural normalization: simplify, merge, concat, unique_value

use crate::features::domain_inversion::domain::{BoolOp, Domain, Operator};
use crate::shared::models::Value;

/// Remove redundant nesting
///
/// - a leaf is unchanged
/// - a group with no operands becomes `[]`
/// - a group around a single leaf becomes `[leaf]`
/// - a group around a single sub-domain becomes that sub-domain, simplified
/// - otherwise every operand is simplified and the group kept
///
/// `simplify(simplify(d)) == simplify(d)` for every `d`.
pub fn simplify(domain: &Domain) -> Domain {
    let (op, children) = match domain {
        Domain::Leaf(_) => return domain.clone(),
        Domain::And(children) => (BoolOp::And, children),
        Domain::Or(children) => (BoolOp::Or, children),
    };

    match children.as_slice() {
        [] => Domain::empty(),
        [leaf @ Domain::Leaf(_)] => Domain::And(vec![leaf.clone()]),
        [single] => simplify(single),
        _ => Domain::node(op, children.iter().map(simplify).collect()),
    }
}

/// Flatten nested groups of the same kind
///
/// `AND(a, AND(b, c))` becomes `AND(a, b, c)`; `AND(a, OR(b, c))` keeps the
/// `OR` (itself merged). Empty operands are dropped.
pub fn merge(domain: &Domain) -> Domain {
    let (op, children) = match domain {
        Domain::Leaf(_) => return Domain::And(vec![domain.clone()]),
        Domain::And(children) => (BoolOp::And, children),
        Domain::Or(children) => (BoolOp::Or, children),
    };
    let flat = flatten(op, children);
    if flat.is_empty() {
        Domain::empty()
    } else {
        Domain::node(op, flat)
    }
}

fn flatten(op: BoolOp, children: &[Domain]) -> Vec<Domain> {
    let mut out = Vec::with_capacity(children.len());
    flatten_into(op, children, &mut out);
    out
}

fn flatten_into(op: BoolOp, children: &[Domain], out: &mut Vec<Domain>) {
    for child in children {
        match child {
            Domain::Leaf(_) => out.push(child.clone()),
            group if group.bool_op() == Some(op) => flatten_into(op, group.children(), out),
            group => {
                let merged = merge(group);
                if !merged.is_empty() {
                    out.push(merged);
                }
            }
        }
    }
}

/// Combine domains under `op` (AND when `None`), dropping empty ones, then
/// merge and simplify
pub fn concat(domains: &[Domain], op: Option<BoolOp>) -> Domain {
    let parts = domains.iter().filter(|d| !d.is_empty()).cloned().collect();
    let combined = Domain::node(op.unwrap_or_default(), parts);
    simplify(&merge(&combined))
}

/// `Some((=, value))` when the domain pins its field to exactly one value:
/// a single undotted `=` clause
pub fn unique_value(domain: &Domain) -> Option<(Operator, Value)> {
    let leaf = match domain {
        Domain::And(children) if children.len() == 1 => children[0].as_leaf()?,
        _ => return None,
    };
    if leaf.operator == Operator::Eq && !leaf.is_dotted() {
        Some((leaf.operator.clone(), leaf.value.clone()))
    } else {
        None
    }
}
