use crate::error::Result;
use crate::table::Table;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Rate-limit values reported by the service for the current credential.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RateMeta {
    pub remaining: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Meta {
    /// Request URL with the credential masked.
    pub url: String,
    pub rate: Option<RateMeta>,
}

/// Result envelope: the normalized body plus what the exchange reported.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    pub value: T,
    pub meta: Meta,
}

impl<T> Response<T> {
    pub fn into_value(self) -> T {
        self.value
    }

    pub fn remaining(&self) -> Option<i64> {
        self.meta.rate.and_then(|r| r.remaining)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            value: f(self.value),
            meta: self.meta,
        }
    }
}

impl Response<Value> {
    /// Tabular view of the body; see [`Table::from_body`].
    pub fn table(&self) -> Result<Table> {
        Table::from_body(&self.value)
    }
}

/// A body that is JSON unless another textual format was requested.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(v) => Some(v),
            Payload::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(s) => Some(s),
            Payload::Json(_) => None,
        }
    }

    /// JSON view; text becomes a JSON string.
    pub fn into_json(self) -> Value {
        match self {
            Payload::Json(v) => v,
            Payload::Text(s) => Value::String(s),
        }
    }
}

/// Closed-captions file located through the asset pipeline.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Captions {
    pub location: String,
    pub captions: String,
}
