#![allow(dead_code)]

use nasa_api::http::{RawResponse, Transport};
use nasa_api::{Config, Nasa, TransportError};
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};

pub type Call = (String, Vec<(String, String)>);

/// In-memory transport that records every request and answers with a canned reply.
#[derive(Clone)]
pub struct RecordingTransport {
    calls: Arc<Mutex<Vec<Call>>>,
    status: StatusCode,
    body: String,
    remaining: Option<&'static str>,
}

impl RecordingTransport {
    pub fn ok(body: &str) -> Self {
        RecordingTransport {
            calls: Arc::default(),
            status: StatusCode::OK,
            body: body.to_string(),
            remaining: None,
        }
    }

    pub fn with_remaining(mut self, remaining: &'static str) -> Self {
        self.remaining = Some(remaining);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// A client wired to this transport; the handle keeps the call log.
    pub fn client(&self) -> Nasa {
        Nasa::with_transport(Config::new(Some("TEST_KEY".into())), Box::new(self.clone()))
    }
}

impl Transport for RecordingTransport {
    fn get(&self, url: &str, query: &[(String, String)]) -> Result<RawResponse, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), query.to_vec()));
        let mut raw = RawResponse::new(self.status, url, self.body.clone());
        if let Some(r) = self.remaining {
            raw = raw.with_header("x-ratelimit-remaining", r);
        }
        Ok(raw)
    }
}

pub fn query_value<'a>(call: &'a Call, key: &str) -> Option<&'a str> {
    call.1
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
