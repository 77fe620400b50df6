//! Loosely typed argument values, the common currency between the typed
//! parameter structs, the JSON entry point, and the validator.

use crate::date::DateLike;
use crate::error::{NasaError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(DateLike),
}

impl Arg {
    /// Convert a JSON scalar. `null` means unset.
    pub fn from_json(param: &str, value: &Value) -> Result<Option<Arg>> {
        match value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(Arg::Bool(*b))),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(Some(Arg::Int(i))),
                None => n
                    .as_f64()
                    .map(|f| Some(Arg::Float(f)))
                    .ok_or_else(|| NasaError::type_error(param, "a representable number")),
            },
            Value::String(s) => Ok(Some(Arg::Str(s.clone()))),
            Value::Array(_) | Value::Object(_) => Err(NasaError::type_error(
                param,
                "a string, number or boolean (not an array or object)",
            )),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Arg::Int(i) => Some(*i as f64),
            Arg::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Numeric view that also reads numeric strings, for cross-field comparisons.
    pub fn numeric(&self) -> Option<f64> {
        match self {
            Arg::Str(s) => s.trim().parse::<f64>().ok(),
            other => other.as_f64(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Arg::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn shape_name(&self) -> &'static str {
        match self {
            Arg::Str(_) => "string",
            Arg::Int(_) => "integer",
            Arg::Float(_) => "float",
            Arg::Bool(_) => "boolean",
            Arg::Date(_) => "date",
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => f.write_str(s),
            Arg::Int(i) => write!(f, "{i}"),
            Arg::Float(x) => write!(f, "{x}"),
            Arg::Bool(b) => write!(f, "{b}"),
            Arg::Date(DateLike::Text(s)) => f.write_str(s),
            Arg::Date(DateLike::Date(d)) => write!(f, "{}", d.format("%Y-%m-%d")),
            Arg::Date(DateLike::DateTime(dt)) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            Arg::Date(DateLike::Now) => f.write_str("now"),
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Str(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Str(s)
    }
}

impl From<i64> for Arg {
    fn from(i: i64) -> Self {
        Arg::Int(i)
    }
}

impl From<i32> for Arg {
    fn from(i: i32) -> Self {
        Arg::Int(i64::from(i))
    }
}

impl From<u32> for Arg {
    fn from(i: u32) -> Self {
        Arg::Int(i64::from(i))
    }
}

impl From<f64> for Arg {
    fn from(x: f64) -> Self {
        Arg::Float(x)
    }
}

impl From<bool> for Arg {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl From<DateLike> for Arg {
    fn from(d: DateLike) -> Self {
        Arg::Date(d)
    }
}

impl From<NaiveDate> for Arg {
    fn from(d: NaiveDate) -> Self {
        Arg::Date(DateLike::Date(d))
    }
}

impl From<NaiveDateTime> for Arg {
    fn from(dt: NaiveDateTime) -> Self {
        Arg::Date(DateLike::DateTime(dt))
    }
}

/// Named arguments for one endpoint call, keyed by logical parameter name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    values: BTreeMap<String, Arg>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<Arg>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<Arg>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn set_opt<T: Into<Arg>>(&mut self, name: &str, value: Option<T>) {
        if let Some(v) = value {
            self.set(name, v);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arg> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build from a JSON object of scalars; anything else is a type error.
    pub fn from_json(value: &Value) -> Result<Self> {
        let mut args = Args::new();
        match value {
            Value::Null => Ok(args),
            Value::Object(map) => {
                for (name, v) in map {
                    if let Some(arg) = Arg::from_json(name, v)? {
                        args.values.insert(name.clone(), arg);
                    }
                }
                Ok(args)
            }
            _ => Err(NasaError::type_error("arguments", "a JSON object")),
        }
    }
}

/// Lowering of a typed parameter struct into [`Args`].
pub trait ToArgs {
    fn to_args(&self) -> Args;
}

impl ToArgs for Args {
    fn to_args(&self) -> Args {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn json_scalars_convert() {
        let args = Args::from_json(&json!({
            "date": "2019-01-01",
            "hd": true,
            "limit": 5,
            "h_min": 0.9,
            "keyword": null
        }))
        .unwrap();
        assert_eq!(args.get("date"), Some(&Arg::Str("2019-01-01".into())));
        assert_eq!(args.get("hd"), Some(&Arg::Bool(true)));
        assert_eq!(args.get("limit"), Some(&Arg::Int(5)));
        assert_eq!(args.get("h_min"), Some(&Arg::Float(0.9)));
        assert!(!args.contains("keyword"));
        assert_eq!(args.len(), 4);
    }

    #[test]
    fn nested_json_is_a_type_error() {
        let err = Args::from_json(&json!({"camera": ["FHAZ"]})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        let err = Args::from_json(&json!([1, 2])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn numeric_view_reads_strings() {
        assert_eq!(Arg::from("0.05").numeric(), Some(0.05));
        assert_eq!(Arg::from("10LD").numeric(), None);
        assert_eq!(Arg::from(3i64).numeric(), Some(3.0));
        assert_eq!(Arg::from(true).numeric(), None);
    }

    #[test]
    fn set_opt_skips_none() {
        let mut args = Args::new();
        args.set_opt::<i64>("sol", None);
        args.set_opt("page", Some(2i64));
        assert!(!args.contains("sol"));
        assert_eq!(args.get("page"), Some(&Arg::Int(2)));
    }
}
