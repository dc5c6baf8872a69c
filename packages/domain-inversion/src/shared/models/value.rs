//! Dynamic values carried by domain clauses and evaluation contexts
//!
//! Domains come from a loosely-typed DSL, so clause values and context values
//! share one dynamic type. Comparison follows the host semantics the DSL was
//! designed around: numbers compare across `Bool`/`Int`/`Float`, lists compare
//! lexicographically and anything else is incomparable (`compare` returns
//! `None`, which leaf evaluation turns into `false`).

use crate::errors::{DomainError, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Number};
use std::cmp::Ordering;
use std::fmt;

/// Value types for clause operands and context entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Value {
    /// Truthiness: null, false, zero, empty string and empty list are falsy
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Float(f) => *f != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::List(items) => !items.is_empty(),
            Value::Date(_) | Value::DateTime(_) => true,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Numeric view; booleans count as 0/1
    fn as_number(&self) -> Option<f64> {
        match self {
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Equality across numeric kinds; `Date` never equals `DateTime`
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loose_eq(y))
            }
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Ordering, or `None` when the two values are incomparable
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            (Value::DateTime(a), Value::DateTime(b)) => Some(a.cmp(b)),
            (Value::List(a), Value::List(b)) => {
                for (x, y) in a.iter().zip(b) {
                    if !x.loose_eq(y) {
                        return x.compare(y);
                    }
                }
                Some(a.len().cmp(&b.len()))
            }
            _ => {
                let (a, b) = (self.as_number()?, other.as_number()?);
                a.partial_cmp(&b)
            }
        }
    }

    /// Smallest date, used in place of an empty operand facing a date
    pub fn min_date() -> Value {
        Value::Date(NaiveDate::MIN)
    }

    /// Smallest datetime, used in place of an empty operand facing a datetime
    pub fn min_datetime() -> Value {
        Value::DateTime(NaiveDateTime::MIN)
    }

    /// Decode a JSON value
    ///
    /// Dates use the JSON-RPC object form:
    /// `{"__class__": "date", "year": 2024, "month": 1, "day": 31}`.
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Float(f))
                } else {
                    Err(DomainError::invalid_value(format!("number {}", n)))
                }
            }
            serde_json::Value::String(s) => Ok(Value::String(s.clone())),
            serde_json::Value::Array(items) => items
                .iter()
                .map(Value::from_json)
                .collect::<Result<Vec<_>>>()
                .map(Value::List),
            serde_json::Value::Object(obj) => decode_temporal(obj),
        }
    }

    /// Encode to JSON (NaN and infinities become `null`)
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Date(d) => json!({
                "__class__": "date",
                "year": d.year(),
                "month": d.month(),
                "day": d.day(),
            }),
            Value::DateTime(dt) => json!({
                "__class__": "datetime",
                "year": dt.year(),
                "month": dt.month(),
                "day": dt.day(),
                "hour": dt.hour(),
                "minute": dt.minute(),
                "second": dt.second(),
                "microsecond": dt.nanosecond() / 1_000,
            }),
        }
    }
}

fn decode_temporal(obj: &Map<String, serde_json::Value>) -> Result<Value> {
    let field = |name: &str, default: Option<u32>| -> Result<u32> {
        match obj.get(name) {
            Some(v) => v
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| DomainError::invalid_value(format!("{} must be a number", name))),
            None => default.ok_or_else(|| DomainError::invalid_value(format!("missing {}", name))),
        }
    };

    let class = obj.get("__class__").and_then(|c| c.as_str());
    match class {
        Some(class @ ("date" | "datetime")) => {
            let year = obj
                .get("year")
                .and_then(|y| y.as_i64())
                .and_then(|y| i32::try_from(y).ok())
                .ok_or_else(|| DomainError::invalid_value("year must be a number"))?;
            let date = NaiveDate::from_ymd_opt(year, field("month", None)?, field("day", None)?)
                .ok_or_else(|| DomainError::invalid_value("date out of range"))?;
            if class == "date" {
                return Ok(Value::Date(date));
            }
            let time = NaiveTime::from_hms_micro_opt(
                field("hour", Some(0))?,
                field("minute", Some(0))?,
                field("second", Some(0))?,
                field("microsecond", Some(0))?,
            )
            .ok_or_else(|| DomainError::invalid_value("time out of range"))?;
            Ok(Value::DateTime(date.and_time(time)))
        }
        Some(other) => Err(DomainError::invalid_value(format!(
            "unsupported __class__ '{}'",
            other
        ))),
        None => Err(DomainError::invalid_value("objects are not domain values")),
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = DomainError;

    fn try_from(json: serde_json::Value) -> Result<Self> {
        Value::from_json(&json)
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        value.to_json()
    }
}

/// Plain rendering, used when a pair is flattened to `"a,b"`
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "None"),
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match item {
                        Value::String(s) => write!(f, "'{}'", s)?,
                        other => write!(f, "{}", other)?,
                    }
                }
                write!(f, "]")
            }
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
