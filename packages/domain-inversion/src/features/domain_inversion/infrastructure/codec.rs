//! JSON form of the domain DSL
//!
//! ```text
//! ["x", "=", 3]                         leaf
//! [["x", "=", 3], ["y", ">", 5]]        implicit AND
//! ["AND", ["x", "=", 3], ...]           explicit AND
//! ["OR", ["x", "=", 3], ...]            OR
//! []                                    empty (always true)
//! ```
//!
//! Encoding is canonical: `And` is written untagged, `Or` with its tag.

use crate::config::EngineConfig;
use crate::errors::{DomainError, Result};
use crate::features::domain_inversion::domain::{BoolOp, Domain, Inversion, Leaf, Operator};
use crate::shared::models::Value;
use serde_json::Value as Json;
use tracing::debug;

/// Shape test telling a clause from a sub-domain: an array of more than two
/// elements whose second element is a string
pub fn is_leaf(json: &Json) -> bool {
    matches!(json, Json::Array(items) if items.len() > 2 && items[1].is_string())
}

/// Decoder/encoder between JSON and `Domain`
#[derive(Debug, Clone, Copy)]
pub struct DslCodec {
    max_depth: usize,
}

impl Default for DslCodec {
    fn default() -> Self {
        Self::new(EngineConfig::default().max_depth)
    }
}

impl DslCodec {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.max_depth)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Decode a JSON domain
    pub fn decode(&self, json: &Json) -> Result<Domain> {
        self.decode_at(json, 1)
    }

    /// Parse JSON text and decode it
    pub fn decode_str(&self, text: &str) -> Result<Domain> {
        let json: Json = serde_json::from_str(text)?;
        self.decode(&json)
    }

    fn decode_at(&self, json: &Json, depth: usize) -> Result<Domain> {
        if depth > self.max_depth {
            debug!("domain rejected at depth {} (max {})", depth, self.max_depth);
            return Err(DomainError::TooDeep {
                depth,
                max: self.max_depth,
            });
        }

        let items = match json {
            Json::Array(items) => items,
            other => return Err(DomainError::unexpected(0, other)),
        };

        if is_leaf(json) {
            return decode_leaf(items).map(Domain::Leaf);
        }

        let (op, offset) = match items.first().and_then(Json::as_str).and_then(BoolOp::from_tag) {
            Some(op) => (op, 1),
            None => (BoolOp::And, 0),
        };

        let children = items[offset..]
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Json::Array(_) => self.decode_at(item, depth + 1),
                other => Err(DomainError::unexpected(i + offset, other)),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Domain::node(op, children))
    }

    /// Encode a domain to its canonical JSON form
    pub fn encode(&self, domain: &Domain) -> Json {
        encode_domain(domain)
    }
}

fn decode_leaf(items: &[Json]) -> Result<Leaf> {
    let field = items[0]
        .as_str()
        .ok_or_else(|| DomainError::malformed_leaf(format!("field must be a string, got {}", items[0])))?;
    // is_leaf guarantees a string operator
    let operator = Operator::parse(items[1].as_str().unwrap_or_default());
    let value = Value::from_json(&items[2])?;
    let extra = items[3..]
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                DomainError::malformed_leaf(format!(
                    "trailing element of '{}' must be a string, got {}",
                    field, item
                ))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Leaf {
        field: field.to_string(),
        operator,
        value,
        extra,
    })
}

fn encode_leaf(leaf: &Leaf) -> Json {
    let mut items = Vec::with_capacity(3 + leaf.extra.len());
    items.push(Json::String(leaf.field.clone()));
    items.push(Json::String(leaf.operator.as_str().to_string()));
    items.push(leaf.value.to_json());
    items.extend(leaf.extra.iter().cloned().map(Json::String));
    Json::Array(items)
}

fn encode_domain(domain: &Domain) -> Json {
    match domain {
        Domain::Leaf(leaf) => encode_leaf(leaf),
        Domain::And(children) => Json::Array(children.iter().map(encode_domain).collect()),
        Domain::Or(children) => {
            let mut items = Vec::with_capacity(children.len() + 1);
            items.push(Json::String(BoolOp::Or.tag().to_string()));
            items.extend(children.iter().map(encode_domain));
            Json::Array(items)
        }
    }
}

impl TryFrom<Json> for Domain {
    type Error = DomainError;

    fn try_from(json: Json) -> Result<Self> {
        DslCodec::default().decode(&json)
    }
}

impl From<Domain> for Json {
    fn from(domain: Domain) -> Self {
        encode_domain(&domain)
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", encode_domain(self))
    }
}

impl TryFrom<Json> for Inversion {
    type Error = DomainError;

    fn try_from(json: Json) -> Result<Self> {
        match json {
            Json::Bool(b) => Ok(Inversion::Resolved(b)),
            other => DslCodec::default().decode(&other).map(Inversion::Residual),
        }
    }
}

impl From<Inversion> for Json {
    fn from(inversion: Inversion) -> Self {
        match inversion {
            Inversion::Resolved(b) => Json::Bool(b),
            Inversion::Residual(domain) => encode_domain(&domain),
        }
    }
}
