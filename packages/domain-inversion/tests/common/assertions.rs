//! Custom assertions for inversion results

use domain_inversion::{Domain, Inversion};
use pretty_assertions::assert_eq;

/// Assert that an inversion resolved to `expected`
pub fn assert_resolved(inversion: &Inversion, expected: bool) {
    assert_eq!(
        inversion,
        &Inversion::Resolved(expected),
        "Expected Resolved({}), got {:?}",
        expected,
        inversion
    );
}

/// Assert that an inversion left exactly `expected` as residual
pub fn assert_residual(inversion: &Inversion, expected: &Domain) {
    match inversion {
        Inversion::Residual(domain) => assert_eq!(domain, expected),
        other => panic!("Expected residual {}, got {:?}", expected, other),
    }
}
