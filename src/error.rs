use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NasaError>;

/// Coarse classification of a [`NasaError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Value,
    Transport,
}

#[derive(Debug, Error)]
pub enum NasaError {
    /// A supplied argument does not have any of the shapes accepted by the parameter.
    #[error("{param} parameter must be {expected}")]
    Type { param: String, expected: String },
    #[error(transparent)]
    Value(#[from] ValueError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl NasaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NasaError::Type { .. } => ErrorKind::Type,
            NasaError::Value(_) => ErrorKind::Value,
            NasaError::Transport(_) => ErrorKind::Transport,
        }
    }

    pub(crate) fn type_error(param: &str, expected: &str) -> Self {
        NasaError::Type {
            param: param.to_string(),
            expected: expected.to_string(),
        }
    }

    pub fn as_value(&self) -> Option<&ValueError> {
        match self {
            NasaError::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_transport(&self) -> Option<&TransportError> {
        match self {
            NasaError::Transport(t) => Some(t),
            _ => None,
        }
    }
}

/// Constraint violations detected before any request is sent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("{param} parameter must be one of {{{}}}, got {value:?}", .allowed.join(", "))]
    NotInSet {
        param: String,
        value: String,
        allowed: Vec<String>,
    },
    #[error("{param} parameter must be in the range {interval}, got {value}")]
    OutOfRange {
        param: String,
        value: f64,
        interval: String,
    },
    #[error("{min} parameter must not be greater than {max}")]
    Unordered { min: String, max: String },
    #[error("{start} parameter must be earlier than {end}")]
    NotBefore { start: String, end: String },
    #[error("only one of {} may be specified", .params.join(", "))]
    Exclusive { params: Vec<String> },
    #[error("at least one of {} must be specified", .params.join(", "))]
    MissingOneOf { params: Vec<String> },
    #[error("{param} parameter requires {} to be specified", .requires.join(" and "))]
    MissingDependency {
        param: String,
        requires: Vec<String>,
    },
    #[error("{param} parameter is required")]
    Missing { param: String },
    #[error("unknown parameter {param} for endpoint {endpoint}")]
    UnknownParam { endpoint: String, param: String },
    #[error("invalid calendar date or time: {value}")]
    InvalidDate { value: String },
}

/// A failed or unusable HTTP exchange. Never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub code: String,
    pub status: Option<u16>,
    pub reason: String,
    pub url: Option<String>,
    pub detail: Option<String>,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.reason, self.code)?;
        if let Some(url) = &self.url {
            write!(f, " for url {url}")?;
        }
        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

impl std::error::Error for TransportError {}

impl TransportError {
    pub fn from_status(status: StatusCode, url: Option<String>, detail: Option<String>) -> Self {
        let code = match status {
            StatusCode::BAD_REQUEST => "bad_request",
            StatusCode::UNAUTHORIZED => "unauthorized",
            StatusCode::FORBIDDEN => "forbidden",
            StatusCode::NOT_FOUND => "not_found",
            StatusCode::TOO_MANY_REQUESTS => "rate_limited",
            s if s.is_server_error() => "upstream_error",
            _ => "http_error",
        };
        let reason = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP status {}", status.as_u16()));
        TransportError {
            code: code.to_string(),
            status: Some(status.as_u16()),
            reason,
            url,
            detail,
        }
    }

    pub fn network(url: Option<String>, message: impl Into<String>) -> Self {
        TransportError {
            code: "network_error".into(),
            status: None,
            reason: "request failed".into(),
            url,
            detail: Some(message.into()),
        }
    }

    pub fn malformed(url: Option<String>, message: impl Into<String>) -> Self {
        TransportError {
            code: "malformed_body".into(),
            status: None,
            reason: "response body is not valid JSON".into(),
            url,
            detail: Some(message.into()),
        }
    }

    pub fn unexpected(url: Option<String>, message: impl Into<String>) -> Self {
        TransportError {
            code: "unexpected_body".into(),
            status: None,
            reason: "response body has an unexpected shape".into(),
            url,
            detail: Some(message.into()),
        }
    }
}
