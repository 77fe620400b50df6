use crate::config::Config;
use crate::error::TransportError;
use crate::types::RateMeta;
use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// One completed HTTP exchange, before any interpretation.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub url: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, url: impl Into<String>, body: impl Into<String>) -> Self {
        RawResponse {
            status,
            url: url.into(),
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: &'static str, value: &str) -> Self {
        if let Ok(v) = HeaderValue::from_str(value) {
            self.headers.insert(name, v);
        }
        self
    }
}

/// A single blocking GET. Retries, redirects and TLS belong to implementors.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<RawResponse, TransportError>;
}

/// [`Transport`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(cfg: &Config) -> reqwest::Result<Self> {
        Ok(HttpTransport {
            client: build_client(cfg)?,
        })
    }
}

pub fn build_client(cfg: &Config) -> reqwest::Result<Client> {
    let mut default_headers = HeaderMap::new();
    if let Ok(ua) = HeaderValue::from_str(&cfg.user_agent) {
        default_headers.insert(USER_AGENT, ua);
    }
    default_headers.insert(ACCEPT, HeaderValue::from_static("application/json, */*;q=0.5"));
    Client::builder()
        .default_headers(default_headers)
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .use_rustls_tls()
        .build()
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<RawResponse, TransportError> {
        debug!("GET {} ({} query params)", redact_url(url), query.len());
        let res = self.client.get(url).query(query).send().map_err(|e| {
            warn!("GET {} failed: {}", redact_url(url), e);
            TransportError::network(Some(redact_url(url)), e.to_string())
        })?;
        let status = res.status();
        let final_url = res.url().to_string();
        let headers = res.headers().clone();
        let body = res
            .text()
            .map_err(|e| TransportError::network(Some(redact_url(&final_url)), e.to_string()))?;
        Ok(RawResponse {
            status,
            url: final_url,
            headers,
            body,
        })
    }
}

/// Build the error for a non-success status, pulling a message out of a JSON
/// error body when one is present.
pub fn map_status_to_error(status: StatusCode, url: &str, body: &str) -> TransportError {
    TransportError::from_status(status, Some(redact_url(url)), error_detail(body))
}

fn error_detail(body: &str) -> Option<String> {
    let v: Value = serde_json::from_str(body).ok()?;
    let candidates = [
        "/error/message",
        "/response/message",
        "/message",
        "/msg",
        "/error_message",
        "/error",
    ];
    candidates
        .iter()
        .filter_map(|p| v.pointer(p))
        .find_map(|m| m.as_str().map(str::to_string))
        .filter(|s| !s.is_empty())
}

/// Read the rate-limit headers. `None` when the response carries neither.
pub fn extract_rate(headers: &HeaderMap) -> Option<RateMeta> {
    let read = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<i64>().ok())
    };
    let remaining = read("x-ratelimit-remaining");
    let limit = read("x-ratelimit-limit");
    if remaining.is_none() && limit.is_none() {
        return None;
    }
    Some(RateMeta { remaining, limit })
}

/// Percent-encode one path segment; unreserved characters stay as-is.
pub fn encode_path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Mask the credential in a URL so it can be logged or carried in errors.
pub fn redact_url(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return raw.to_string();
    };
    if !url.query_pairs().any(|(k, _)| k == crate::validate::CREDENTIAL_KEY) {
        return raw.to_string();
    }
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            if k == crate::validate::CREDENTIAL_KEY {
                (k.into_owned(), "***".to_string())
            } else {
                (k.into_owned(), v.into_owned())
            }
        })
        .collect();
    url.query_pairs_mut().clear().extend_pairs(pairs);
    url.to_string()
}
