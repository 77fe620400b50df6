//! Turn a raw exchange into the value callers see.

use crate::args::Arg;
use crate::error::{Result, TransportError};
use crate::http::{map_status_to_error, redact_url, RawResponse};
use crate::types::Payload;
use crate::validate::{EmptyBody, EndpointSpec, Prepared};
use log::{debug, warn};
use serde_json::{Map, Value};

/// Non-success status is an error; an empty body may stand for "no data";
/// JSON is parsed and narrowed to the endpoint's extract pointer.
pub fn normalize(spec: &EndpointSpec, prepared: &Prepared, raw: &RawResponse) -> Result<Payload> {
    if !raw.status.is_success() {
        warn!(
            "{} returned {} for {}",
            spec.name,
            raw.status.as_u16(),
            redact_url(&raw.url)
        );
        return Err(map_status_to_error(raw.status, &raw.url, &raw.body).into());
    }

    if wants_text(prepared) {
        return Ok(Payload::Text(raw.body.clone()));
    }

    if raw.body.trim().is_empty() {
        return match spec.empty_body {
            EmptyBody::EmptyObject => {
                debug!("{}: empty body, no data in range", spec.name);
                Ok(Payload::Json(Value::Object(Map::new())))
            }
            EmptyBody::Reject => Err(TransportError::malformed(
                Some(redact_url(&raw.url)),
                "empty response body",
            )
            .into()),
        };
    }

    let value: Value = serde_json::from_str(&raw.body)
        .map_err(|e| TransportError::malformed(Some(redact_url(&raw.url)), e.to_string()))?;
    match spec.extract {
        None => Ok(Payload::Json(value)),
        Some(pointer) => value.pointer(pointer).cloned().map(Payload::Json).ok_or_else(|| {
            TransportError::unexpected(
                Some(redact_url(&raw.url)),
                format!("missing {pointer} in response"),
            )
            .into()
        }),
    }
}

/// Non-JSON formats are only served for a single record.
fn wants_text(prepared: &Prepared) -> bool {
    prepared.path_value("project_id").is_some()
        && matches!(prepared.local("return_format"), Some(Arg::Str(f)) if f != "json")
}

/// Read the `location` a media asset lookup points at.
pub fn asset_location(value: &Value, url: &str) -> Result<String> {
    value
        .get("location")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            TransportError::unexpected(Some(redact_url(url)), "missing location in response").into()
        })
}
