//! Evaluation context: the already-known field values of a record

use super::value::Value;
use crate::errors::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Field name → known value
///
/// A key mapped to `Value::Null` is *known to be empty*, which is not the same
/// as an absent key (unknown). Inversion treats the two differently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    values: HashMap<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Decode a JSON object (`null` is accepted as the empty context)
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Null => Ok(Self::new()),
            serde_json::Value::Object(obj) => {
                let mut context = Self::new();
                for (field, value) in obj {
                    context.insert(field.clone(), Value::from_json(value)?);
                }
                Ok(context)
            }
            other => Err(DomainError::invalid_value(format!(
                "context must be an object, got {}",
                other
            ))),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Self::new();
        for (field, value) in iter {
            context.insert(field, value);
        }
        context
    }
}
