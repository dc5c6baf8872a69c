//! Inversion and evaluation scenarios, written in the JSON DSL

mod common;

use chrono::NaiveDate;
use common::*;
use domain_inversion::config::{EngineConfig, Preset};
use domain_inversion::{domain_inversion, eval_domain, Context, Inversion, Inverter, Value};
use serde_json::json;

fn invert(domain: serde_json::Value, symbol: &str, context: serde_json::Value) -> Inversion {
    domain_inversion(&dom(domain), symbol, &ctx(context))
}

// ============================================================================
// Inversion
// ============================================================================

#[test]
fn test_simple_inversion() {
    let inversion = invert(json!([["x", "=", 3]]), "x", json!({}));
    assert_residual(&inversion, &dom(json!([["x", "=", 3]])));

    assert_resolved(&invert(json!([]), "x", json!({})), true);
    assert_resolved(&invert(json!([]), "x", json!({"x": 5})), true);
    assert_resolved(&invert(json!([]), "z", json!({"x": 7})), true);

    let inversion = invert(json!([["x.id", ">", 5]]), "x", json!({}));
    assert_residual(&inversion, &dom(json!([["x.id", ">", 5]])));
}

#[test]
fn test_and_inversion() {
    let domain = json!([["x", "=", 3], ["y", ">", 5]]);
    let x_only = dom(json!([["x", "=", 3]]));

    assert_residual(&invert(domain.clone(), "x", json!({})), &x_only);
    assert_resolved(&invert(domain.clone(), "x", json!({"y": 4})), false);
    assert_residual(&invert(domain.clone(), "x", json!({"y": 6})), &x_only);
    assert_residual(&invert(domain, "x", json!({"y": 7})), &x_only);

    let domain = json!([["x", "=", 3], ["y", "=", 5]]);
    assert_resolved(&invert(domain.clone(), "z", json!({})), true);
    assert_resolved(&invert(domain.clone(), "z", json!({"x": 2, "y": 7})), true);
    assert_residual(&invert(domain, "x", json!({"y": null})), &x_only);

    let domain = json!([["x.id", ">", 5], ["y", "<", 3]]);
    assert_residual(&invert(domain.clone(), "y", json!({})), &dom(json!([["y", "<", 3]])));
    assert_residual(&invert(domain.clone(), "y", json!({"x": 3})), &dom(json!([["y", "<", 3]])));
    assert_residual(&invert(domain, "x", json!({})), &dom(json!([["x.id", ">", 5]])));
}

#[test]
fn test_or_inversion() {
    let domain = json!(["OR", ["x", "=", 3], ["y", ">", 5], ["z", "=", "abc"]]);
    let x_only = dom(json!([["x", "=", 3]]));

    assert_residual(&invert(domain.clone(), "x", json!({})), &x_only);
    assert_residual(&invert(domain.clone(), "x", json!({"y": 4})), &x_only);
    assert_residual(&invert(domain.clone(), "x", json!({"y": 4, "z": "ab"})), &x_only);
    assert_resolved(&invert(domain.clone(), "x", json!({"y": 7})), true);
    assert_resolved(&invert(domain.clone(), "x", json!({"y": 7, "z": "b"})), true);
    assert_resolved(&invert(domain.clone(), "x", json!({"z": "abc"})), true);
    assert_resolved(&invert(domain, "x", json!({"y": 4, "z": "abc"})), true);

    let domain = json!(["OR", ["x", "=", 1], ["y", "=", 2]]);
    assert_residual(&invert(domain.clone(), "x", json!({})), &dom(json!([["x", "=", 1]])));
    assert_resolved(&invert(domain.clone(), "x", json!({"y": 2})), true);
    assert_residual(&invert(domain, "x", json!({"y": 3})), &dom(json!([["x", "=", 1]])));

    let domain = json!(["OR", ["x", "=", 1], ["x", ">", 5]]);
    assert_residual(&invert(domain.clone(), "x", json!({})), &dom(domain));
}

#[test]
fn test_or_dotted_field_checked_by_base_name() {
    let domain = json!(["OR", ["x", "=", 1], ["y.code", "=", 2]]);
    let x_only = dom(json!([["x", "=", 1]]));

    assert_resolved(&invert(domain.clone(), "x", json!({"y": 5})), true);
    assert_residual(&invert(domain.clone(), "x", json!({"y": null})), &x_only);
    assert_residual(&invert(domain.clone(), "x", json!({})), &x_only);
    // only the base name counts under OR
    assert_residual(&invert(domain, "x", json!({"y.code": 2})), &x_only);
}

#[test]
fn test_and_or_inversion() {
    let domain = json!([["x", "=", 4], ["OR", ["y", ">", 6], ["z", "=", 3]]]);
    let z_only = dom(json!([["z", "=", 3]]));

    assert_residual(&invert(domain.clone(), "z", json!({})), &z_only);
    assert_resolved(&invert(domain.clone(), "z", json!({"y": 7})), true);
    assert_residual(&invert(domain.clone(), "z", json!({"y": 5})), &z_only);
    assert_residual(&invert(domain.clone(), "z", json!({"x": 5})), &z_only);
    assert_resolved(&invert(domain.clone(), "y", json!({"z": 3})), true);
    assert_residual(&invert(domain, "x", json!({})), &dom(json!([["x", "=", 4]])));
}

#[test]
fn test_or_of_and_inversion() {
    let domain = json!(["OR", [["x", ">", 1], ["y", "=", "a"]], [["x", "<", 0], ["y", "=", "b"]]]);

    // y pins one alternative, the other keeps its `=` clause as satisfiable
    assert_residual(
        &invert(domain.clone(), "x", json!({"y": "a"})),
        &dom(json!(["OR", [["x", ">", 1]], [["x", "<", 0]]])),
    );

    let strict = Inverter::new(&EngineConfig::preset(Preset::Strict));
    assert_residual(
        &strict.invert(&dom(domain.clone()), "x", &ctx(json!({"y": "a"}))),
        &dom(json!([["x", ">", 1]])),
    );
    assert_resolved(&strict.invert(&dom(domain), "x", &ctx(json!({"y": "c"}))), false);
}

#[test]
fn test_deferred_or_without_symbol() {
    let domain = json!([["x", "=", 3], ["OR", ["y", "=", 1], ["z", "=", 2]]]);
    let x_only = dom(json!([["x", "=", 3]]));

    assert_residual(&invert(domain.clone(), "x", json!({})), &x_only);
    assert_residual(&invert(domain.clone(), "x", json!({"y": 5})), &x_only);
    assert_resolved(&invert(domain.clone(), "x", json!({"y": 5, "z": 5})), false);
    assert_residual(&invert(domain, "x", json!({"y": 1, "z": 5})), &x_only);
}

#[test]
fn test_child_of_is_unconstrained() {
    let domain = json!([["x", "=", 3], ["parent", "child_of", [1], "parent"]]);
    let inversion = invert(domain, "x", json!({"parent": 8}));
    assert_residual(&inversion, &dom(json!([["x", "=", 3]])));
}

#[test]
fn test_residual_serializes_to_dsl() {
    let inversion = invert(json!(["OR", ["x", "=", 1], ["x", "=", 2], ["y", "=", 3]]), "x", json!({"y": 4}));
    assert_eq!(
        serde_json::to_value(&inversion).unwrap(),
        json!(["OR", ["x", "=", 1], ["x", "=", 2]])
    );
    assert_eq!(
        serde_json::to_value(invert(json!([]), "x", json!({}))).unwrap(),
        json!(true)
    );
}

// ============================================================================
// Evaluation
// ============================================================================

#[test]
fn test_eval_comparisons() {
    let domain = dom(json!([["x", ">", 5]]));
    assert!(eval_domain(&domain, &ctx(json!({"x": 6}))));
    assert!(!eval_domain(&domain, &ctx(json!({"x": 4}))));
}

#[test]
fn test_eval_dates_against_empty_values() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let now = today.and_hms_opt(12, 30, 0).unwrap();

    let domain = dom(json!([["x", ">", null]]));
    assert!(eval_domain(&domain, &Context::new().with("x", today)));
    assert!(eval_domain(&domain, &Context::new().with("x", now)));

    let domain = dom(json!([["x", "<", {"__class__": "date", "year": 2024, "month": 6, "day": 1}]]));
    assert!(eval_domain(&domain, &ctx(json!({"x": null}))));

    let domain = dom(json!([["x", "<", Value::DateTime(now).to_json()]]));
    assert!(eval_domain(&domain, &ctx(json!({"x": null}))));
}

#[test]
fn test_eval_membership() {
    let domain = dom(json!([["x", "in", [3, 5]]]));
    assert!(eval_domain(&domain, &ctx(json!({"x": 3}))));
    assert!(!eval_domain(&domain, &ctx(json!({"x": 4}))));
    assert!(eval_domain(&domain, &ctx(json!({"x": [3]}))));
    assert!(eval_domain(&domain, &ctx(json!({"x": [3, 4]}))));
    assert!(!eval_domain(&domain, &ctx(json!({"x": [1, 2]}))));
    assert!(!eval_domain(&domain, &ctx(json!({"x": null}))));

    let domain = dom(json!([["x", "in", [1, null]]]));
    assert!(eval_domain(&domain, &ctx(json!({"x": null}))));
    assert!(!eval_domain(&domain, &ctx(json!({"x": 2}))));

    let domain = dom(json!([["x", "not in", [3, 5]]]));
    assert!(!eval_domain(&domain, &ctx(json!({"x": 3}))));
    assert!(eval_domain(&domain, &ctx(json!({"x": 4}))));
    assert!(!eval_domain(&domain, &ctx(json!({"x": [3]}))));
    assert!(eval_domain(&domain, &ctx(json!({"x": [1, 2]}))));
}

#[test]
fn test_eval_boolean_structure() {
    let domain = dom(json!(["OR", ["x", ">", 10], ["x", "<", 0]]));
    assert!(eval_domain(&domain, &ctx(json!({"x": 11}))));
    assert!(eval_domain(&domain, &ctx(json!({"x": -4}))));
    assert!(!eval_domain(&domain, &ctx(json!({"x": 5}))));

    let domain = dom(json!(["OR", ["x", ">", 0], ["x", "=", null]]));
    assert!(eval_domain(&domain, &ctx(json!({"x": 1}))));
    assert!(eval_domain(&domain, &ctx(json!({"x": null}))));
    assert!(!eval_domain(&domain, &ctx(json!({"x": -1}))));
    assert!(!eval_domain(&domain, &ctx(json!({"x": 0}))));

    let domain = dom(json!([["x", ">", 0], ["OR", ["x", "=", 3], ["x", "=", 2]]]));
    assert!(!eval_domain(&domain, &ctx(json!({"x": 1}))));
    assert!(eval_domain(&domain, &ctx(json!({"x": 3}))));
    assert!(eval_domain(&domain, &ctx(json!({"x": 2}))));
    assert!(!eval_domain(&domain, &ctx(json!({"x": 4}))));

    let domain = dom(json!(["OR", ["x", "=", 4], [["x", ">", 6], ["x", "<", 10]]]));
    assert!(eval_domain(&domain, &ctx(json!({"x": 4}))));
    assert!(eval_domain(&domain, &ctx(json!({"x": 7}))));
    assert!(!eval_domain(&domain, &ctx(json!({"x": 3}))));
    assert!(!eval_domain(&domain, &ctx(json!({"x": 11}))));
}

#[test]
fn test_eval_references() {
    for domain in [json!([["x", "=", "test,1"]]), json!([["x", "=", ["test", 1]]])] {
        let domain = dom(domain);
        assert!(eval_domain(&domain, &ctx(json!({"x": ["test", 1]}))));
        assert!(eval_domain(&domain, &ctx(json!({"x": "test,1"}))));
        assert!(!eval_domain(&domain, &ctx(json!({"x": ["test", 2]}))));
        assert!(!eval_domain(&domain, &ctx(json!({"x": "test,2"}))));
    }
}

#[test]
fn test_eval_multi_valued_equality() {
    let domain = dom(json!([["x", "=", 1]]));
    assert!(eval_domain(&domain, &ctx(json!({"x": [1, 2]}))));
    assert!(!eval_domain(&domain, &ctx(json!({"x": [2]}))));

    let domain = dom(json!([["x", "=", true]]));
    assert!(eval_domain(&domain, &ctx(json!({"x": [1, 2]}))));
    assert!(!eval_domain(&domain, &ctx(json!({"x": [0, 2]}))));
}

#[test]
fn test_eval_type_mismatch_and_unknown_operator() {
    assert!(!eval_domain(&dom(json!([["x", "<", 5]])), &ctx(json!({"x": "abc"}))));
    assert!(eval_domain(&dom(json!([["x", "ilike", "%a%"]])), &ctx(json!({"x": 5}))));
}
