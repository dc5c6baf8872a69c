//! Leaf and domain evaluation against a fully-known context

use super::operators;
use crate::features::domain_inversion::domain::{BoolOp, Domain, Leaf, Operator};
use crate::shared::models::{Context, Value};
use tracing::trace;

/// Evaluate one clause against `context`
///
/// A dotted field only checks that its base field holds a truthy value; the
/// related record is never traversed. An absent field evaluates as `Null`.
/// Incomparable operands make the clause false, unknown operators make it
/// true.
pub fn eval_leaf(leaf: &Leaf, context: &Context, boolop: BoolOp) -> bool {
    if leaf.is_dotted() {
        return context.get(leaf.base()).map_or(false, Value::is_truthy);
    }

    let null = Value::Null;
    let context_value = context.get(&leaf.field).unwrap_or(&null);
    let (context_value, clause_value, operator) = coerce(context_value, &leaf.value, &leaf.operator);
    if let Operator::Other(symbol) = &operator {
        trace!(field = %leaf.field, %symbol, "unknown operator, clause is true");
    }

    match operators::apply(&operator, &context_value, &clause_value) {
        Some(result) => result,
        None => {
            trace!(
                field = %leaf.field,
                operator = %operator,
                %boolop,
                "incomparable operands, clause is false"
            );
            false
        }
    }
}

/// Operand coercions applied before the operator runs
fn coerce(context_value: &Value, clause_value: &Value, operator: &Operator) -> (Value, Value, Operator) {
    let mut context_value = context_value.clone();
    let mut clause_value = clause_value.clone();
    let mut operator = operator.clone();

    match (&context_value, &clause_value) {
        (Value::Date(_), v) if !v.is_truthy() => clause_value = Value::min_date(),
        (Value::DateTime(_), v) if !v.is_truthy() => clause_value = Value::min_datetime(),
        (v, Value::Date(_)) if !v.is_truthy() => context_value = Value::min_date(),
        (v, Value::DateTime(_)) if !v.is_truthy() => context_value = Value::min_datetime(),
        (Value::String(_), Value::List(pair)) if pair.len() == 2 => {
            clause_value = Value::String(format!("{},{}", pair[0], pair[1]));
        }
        (Value::List(pair), Value::String(_)) if pair.len() == 2 => {
            context_value = Value::String(format!("{},{}", pair[0], pair[1]));
        }
        (Value::List(_), Value::Int(_) | Value::Bool(_)) => {
            operator = match operator {
                Operator::Eq => Operator::In,
                Operator::Ne => Operator::NotIn,
                other => other,
            };
        }
        _ => {}
    }

    (context_value, clause_value, operator)
}

/// `=` clauses under AND are assumed to be enforced by the inversion on their
/// own field, so they never block
pub fn constrained_leaf(leaf: &Leaf, boolop: BoolOp) -> bool {
    leaf.operator == Operator::Eq && boolop == BoolOp::And
}

/// Evaluate a whole domain; `And[]` is true, `Or[]` is false
pub fn eval_domain(domain: &Domain, context: &Context) -> bool {
    match domain {
        Domain::Leaf(leaf) => eval_leaf(leaf, context, BoolOp::And),
        Domain::And(children) => eval_domains(children, context, BoolOp::And),
        Domain::Or(children) => eval_domains(children, context, BoolOp::Or),
    }
}

/// Evaluate sibling domains under an explicit combinator
pub fn eval_domains(parts: &[Domain], context: &Context, boolop: BoolOp) -> bool {
    let eval = |part: &Domain| match part {
        Domain::Leaf(leaf) => eval_leaf(leaf, context, boolop),
        nested => eval_domain(nested, context),
    };
    match boolop {
        BoolOp::And => parts.iter().all(eval),
        BoolOp::Or => parts.iter().any(eval),
    }
}
