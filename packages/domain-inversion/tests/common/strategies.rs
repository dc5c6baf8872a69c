//! proptest strategies for domains and contexts

use domain_inversion::{Context, Domain, Leaf, Value};
use proptest::prelude::*;

/// Fields used by generated domains; `unused` never appears
pub const FIELDS: &[&str] = &["x", "y", "z", "y.code"];

pub const OPERATORS: &[&str] = &["=", "!=", ">", "<", ">=", "<=", "in", "not in", "ilike"];

pub fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-5i64..5).prop_map(Value::Int),
        "[a-c]{0,2}".prop_map(Value::String),
        prop::collection::vec((-3i64..3).prop_map(Value::Int), 0..3).prop_map(Value::List),
    ]
}

pub fn arb_leaf() -> impl Strategy<Value = Leaf> {
    (
        prop::sample::select(FIELDS),
        prop::sample::select(OPERATORS),
        arb_value(),
    )
        .prop_map(|(field, op, value)| Leaf::new(field, op, value))
}

pub fn arb_domain() -> impl Strategy<Value = Domain> {
    arb_leaf().prop_map(Domain::Leaf).prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Domain::And),
            prop::collection::vec(inner, 0..4).prop_map(Domain::Or),
        ]
    })
}

/// Context over the plain fields (`x`, `y`, `z`)
pub fn arb_context() -> impl Strategy<Value = Context> {
    prop::collection::hash_map(prop::sample::select(&FIELDS[..3]), arb_value(), 0..3)
        .prop_map(|values| values.into_iter().collect())
}
