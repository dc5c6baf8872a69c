//! Test data builders
//!
//! Domains and contexts are written in their JSON form so test cases read
//! like the DSL itself.

use domain_inversion::{Context, Domain, DslCodec};

/// Decode a JSON domain, panicking on malformed input
pub fn dom(json: serde_json::Value) -> Domain {
    DslCodec::default()
        .decode(&json)
        .unwrap_or_else(|e| panic!("invalid test domain {}: {}", json, e))
}

/// Decode a JSON context object
pub fn ctx(json: serde_json::Value) -> Context {
    Context::from_json(&json).unwrap_or_else(|e| panic!("invalid test context {}: {}", json, e))
}

/// Encode a domain back to JSON
pub fn to_json(domain: &Domain) -> serde_json::Value {
    DslCodec::default().encode(domain)
}
