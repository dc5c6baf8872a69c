//! Rewrites for relational fields
//!
//! A domain written on a parent model (`partner.code = 'x'`) is moved onto the
//! related model (`code = 'x'`); reference fields (`"model,id"`) are split per
//! target model.

use crate::features::domain_inversion::domain::{BoolOp, Domain, Leaf, Operator};
use crate::shared::models::Value;
use std::collections::BTreeSet;

/// Local part of a field path
///
/// The field itself maps to `locale_name`; a dotted path drops its first
/// segment; anything else is unchanged.
pub fn locale_part<'a>(expression: &'a str, field_name: Option<&str>, locale_name: &'a str) -> &'a str {
    if Some(expression) == field_name {
        return locale_name;
    }
    match expression.split_once('.') {
        Some((_, local)) => local,
        None => expression,
    }
}

/// Move every clause onto the related model
///
/// Clauses on the field itself compare `id`, or `rec_name` when the value is a
/// string. `child_of` clauses take their parent field from the trailing
/// metadata. With `strip_target` the target model annotation is dropped.
pub fn localize_domain(domain: &Domain, field_name: Option<&str>, strip_target: bool) -> Domain {
    domain.map_leaves(&|leaf| Domain::Leaf(localize_leaf(leaf, field_name, strip_target)))
}

fn localize_leaf(leaf: &Leaf, field_name: Option<&str>, strip_target: bool) -> Leaf {
    if leaf.operator.is_child_of() {
        if let Some((_, target_part)) = leaf.field.split_once('.') {
            return Leaf {
                field: target_part.to_string(),
                ..leaf.clone()
            };
        }
        return match leaf.extra.split_last() {
            Some((_, rest)) => Leaf {
                field: leaf.extra[0].clone(),
                operator: leaf.operator.clone(),
                value: leaf.value.clone(),
                extra: rest.to_vec(),
            },
            None => leaf.clone(),
        };
    }

    let locale_name = match leaf.value {
        Value::String(_) => "rec_name",
        _ => "id",
    };
    let extra = if strip_target {
        leaf.extra.iter().skip(1).cloned().collect()
    } else {
        leaf.extra.clone()
    };
    Leaf {
        field: locale_part(&leaf.field, field_name, locale_name).to_string(),
        operator: leaf.operator.clone(),
        value: leaf.value.clone(),
        extra,
    }
}

/// Replace clauses under `field` that target a model other than `model` with
/// the always-false `('id', '=', None)`
pub fn filter_leaf(domain: &Domain, field: &str, model: &str) -> Domain {
    domain.map_leaves(&|leaf| match leaf.target() {
        Some(target) if leaf.field.starts_with(field) && target != model => {
            Domain::leaf("id", Operator::Eq, Value::Null)
        }
        _ => Domain::Leaf(leaf.clone()),
    })
}

/// Turn `child_of` clauses around: `(field, child_of, v, parent)` becomes
/// `(parent, child_of, v, field)`
pub fn inverse_leaf(domain: &Domain) -> Domain {
    domain.map_leaves(&|leaf| {
        if !leaf.operator.is_child_of() || leaf.is_dotted() {
            return Domain::Leaf(leaf.clone());
        }
        match leaf.extra.split_first() {
            Some((target, rest)) => {
                let mut extra = Vec::with_capacity(leaf.extra.len());
                extra.push(leaf.field.clone());
                extra.extend(rest.iter().cloned());
                Domain::Leaf(Leaf {
                    field: target.clone(),
                    operator: leaf.operator.clone(),
                    value: leaf.value.clone(),
                    extra,
                })
            }
            None => Domain::Leaf(leaf.clone()),
        }
    })
}

/// Target models annotated on clauses of `field_name`
pub fn extract_reference_models(domain: &Domain, field_name: &str) -> BTreeSet<String> {
    domain
        .leaves()
        .into_iter()
        .filter(|leaf| leaf.base() == field_name)
        .filter_map(|leaf| leaf.target().map(str::to_string))
        .collect()
}

/// A reference value split into model and id
///
/// `"model,id"` strings and `[model, id]` pairs carry a model; anything else
/// is a bare id. The id `%` means "any record".
fn split_reference(value: &Value) -> (Option<String>, Value) {
    match value {
        Value::String(s) => match s.split_once(',') {
            Some((model, id)) => {
                let id = match id.parse::<i64>() {
                    Ok(n) => Value::Int(n),
                    Err(_) => Value::String(id.to_string()),
                };
                (Some(model.to_string()), id)
            }
            None => (None, value.clone()),
        },
        Value::List(pair) if pair.len() == 2 => match (&pair[0], &pair[1]) {
            (Value::String(model), id @ Value::Int(_)) => (Some(model.clone()), id.clone()),
            (Value::String(model), Value::String(id)) if id == "%" => (Some(model.clone()), Value::from("%")),
            _ => (None, value.clone()),
        },
        _ => (None, value.clone()),
    }
}

fn is_any(id: &Value) -> bool {
    id.as_str() == Some("%")
}

/// Rewrite clauses on a reference field into clauses on `<reference>.id`
/// annotated with the target model
pub fn prepare_reference_domain(domain: &Domain, reference: &str) -> Domain {
    domain.map_leaves(&|leaf| {
        if leaf.field != reference {
            return Domain::Leaf(leaf.clone());
        }
        prepare_reference_leaf(leaf, reference).unwrap_or_else(Domain::empty)
    })
}

fn prepare_reference_leaf(leaf: &Leaf, reference: &str) -> Option<Domain> {
    let id_field = format!("{}.id", reference);
    match &leaf.operator {
        op @ (Operator::Eq | Operator::Ne) => {
            let (model, id) = split_reference(&leaf.value);
            let model = model?;
            if is_any(&id) {
                return Some(if *op == Operator::Eq {
                    Domain::Leaf(Leaf::new(id_field, Operator::Ne, Value::Null).with_target(model))
                } else {
                    Domain::leaf(reference, "not like", leaf.value.clone())
                });
            }
            Some(Domain::Leaf(Leaf::new(id_field, op.clone(), id).with_target(model)))
        }
        op @ (Operator::In | Operator::NotIn) => {
            let values = leaf.value.as_list()?;
            // insertion ordered
            let mut grouped: Vec<(String, Vec<Value>)> = Vec::new();
            for value in values {
                let (model, id) = split_reference(value);
                let model = model?;
                match grouped.iter_mut().find(|(m, _)| *m == model) {
                    Some((_, ids)) => ids.push(id),
                    None => grouped.push((model, vec![id])),
                }
            }

            let children = grouped
                .into_iter()
                .map(|(model, ids)| {
                    if ids.iter().any(is_any) {
                        if *op == Operator::In {
                            Domain::Leaf(Leaf::new(id_field.clone(), Operator::Ne, Value::Null).with_target(model))
                        } else {
                            Domain::leaf(reference, "not like", format!("{},%", model))
                        }
                    } else {
                        Domain::Leaf(Leaf::new(id_field.clone(), op.clone(), ids).with_target(model))
                    }
                })
                .collect();

            let combinator = if *op == Operator::In { BoolOp::Or } else { BoolOp::And };
            Some(Domain::node(combinator, children))
        }
        _ => None,
    }
}
