//! Declarative parameter constraints and the one routine that enforces them.
//!
//! Every endpoint is described by a static [`EndpointSpec`]. [`prepare`] checks
//! the supplied [`Args`] against it and assembles the wire query. It never
//! touches the network, so a rejected call sends nothing.

use crate::args::{Arg, Args};
use crate::date::{DateLike, Granularity};
use crate::error::{NasaError, Result, ValueError};
use std::collections::BTreeMap;
use std::ops::Bound;

/// Wire key reserved for the access credential.
pub const CREDENTIAL_KEY: &str = "api_key";

/// Which configured base URL an endpoint lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    Api,
    Ssd,
    Images,
    Genelab,
    Exoplanet,
    Tle,
}

/// What a successful, empty response body means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyBody {
    /// No data in range: the result is `{}`.
    EmptyObject,
    /// The body must be present and parse.
    Reject,
}

/// Which client-held counter a response's rate-limit header updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quota {
    Shared,
    MarsWeather,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Str,
    Int,
    Number,
    Bool,
    StrOrNumber,
    Date(Granularity),
    DateOrNow(Granularity),
}

impl Shape {
    pub fn describe(self) -> String {
        match self {
            Shape::Str => "a string".into(),
            Shape::Int => "an integer".into(),
            Shape::Number => "an integer or float".into(),
            Shape::Bool => "boolean (true or false)".into(),
            Shape::StrOrNumber => "a string, integer or float".into(),
            Shape::Date(g) => format!(
                "a string representing a date in {} format or a date/time value",
                g.describe()
            ),
            Shape::DateOrNow(g) => format!(
                "a string representing a date in {} format, 'now', or a date/time value",
                g.describe()
            ),
        }
    }

    fn admits(self, arg: &Arg) -> bool {
        match (self, arg) {
            (Shape::Str, Arg::Str(_)) => true,
            (Shape::Int, Arg::Int(_)) => true,
            (Shape::Number, Arg::Int(_) | Arg::Float(_)) => true,
            (Shape::Bool, Arg::Bool(_)) => true,
            (Shape::StrOrNumber, Arg::Str(_) | Arg::Int(_) | Arg::Float(_)) => true,
            (Shape::Date(_), Arg::Str(_) | Arg::Date(_)) => true,
            (Shape::DateOrNow(_), Arg::Str(_) | Arg::Date(_)) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Check {
    Any,
    OneOf(&'static [&'static str]),
    /// Case-insensitive membership; the value is lower-cased on the wire.
    OneOfCaseless(&'static [&'static str]),
    OneOfInt(&'static [i64]),
    Range(Bound<f64>, Bound<f64>),
    AbsAbove(f64),
}

impl Check {
    pub fn describe(&self) -> Option<String> {
        match self {
            Check::Any => None,
            Check::OneOf(set) | Check::OneOfCaseless(set) => Some(format!("one of {{{}}}", set.join(", "))),
            Check::OneOfInt(set) => Some(format!(
                "one of {{{}}}",
                set.iter().map(i64::to_string).collect::<Vec<_>>().join(", ")
            )),
            Check::Range(lo, hi) => Some(format!("in {}", interval(*lo, *hi))),
            Check::AbsAbove(x) => Some(format!("absolute value greater than {x}")),
        }
    }
}

/// Render a pair of bounds in interval notation, e.g. `(0, 1800]`.
pub fn interval(lo: Bound<f64>, hi: Bound<f64>) -> String {
    let left = match lo {
        Bound::Included(x) => format!("[{x}"),
        Bound::Excluded(x) => format!("({x}"),
        Bound::Unbounded => "(-inf".to_string(),
    };
    let right = match hi {
        Bound::Included(x) => format!("{x}]"),
        Bound::Excluded(x) => format!("{x})"),
        Bound::Unbounded => "+inf)".to_string(),
    };
    format!("{left}, {right}")
}

fn in_bounds(x: f64, lo: Bound<f64>, hi: Bound<f64>) -> bool {
    let above = match lo {
        Bound::Included(l) => x >= l,
        Bound::Excluded(l) => x > l,
        Bound::Unbounded => true,
    };
    let below = match hi {
        Bound::Included(h) => x <= h,
        Bound::Excluded(h) => x < h,
        Bound::Unbounded => true,
    };
    above && below
}

/// Where a validated parameter ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wire {
    Query(&'static str),
    /// Query parameter whose value is upper-cased on the wire.
    QueryUpper(&'static str),
    /// Substituted into a `{name}` path template or appended as a path segment.
    Path,
    /// Validated, then left for the endpoint method to interpret.
    Local,
}

/// Default applied when the caller leaves a parameter unset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fallback {
    Str(&'static str),
    Int(i64),
    Float(f64),
    Bool(bool),
    Now,
}

impl Fallback {
    fn to_arg(self) -> Arg {
        match self {
            Fallback::Str(s) => Arg::Str(s.to_string()),
            Fallback::Int(i) => Arg::Int(i),
            Fallback::Float(x) => Arg::Float(x),
            Fallback::Bool(b) => Arg::Bool(b),
            Fallback::Now => Arg::Date(DateLike::Now),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub wire: Wire,
    pub shape: Shape,
    pub check: Check,
    pub fallback: Option<Fallback>,
    pub required: bool,
}

impl ParamSpec {
    pub const fn query(name: &'static str, key: &'static str, shape: Shape) -> Self {
        ParamSpec {
            name,
            wire: Wire::Query(key),
            shape,
            check: Check::Any,
            fallback: None,
            required: false,
        }
    }

    pub const fn path(name: &'static str, shape: Shape) -> Self {
        ParamSpec {
            wire: Wire::Path,
            ..ParamSpec::query(name, name, shape)
        }
    }

    pub const fn local(name: &'static str, shape: Shape) -> Self {
        ParamSpec {
            wire: Wire::Local,
            ..ParamSpec::query(name, name, shape)
        }
    }

    pub const fn upper(self) -> Self {
        match self.wire {
            Wire::Query(key) => ParamSpec {
                wire: Wire::QueryUpper(key),
                ..self
            },
            _ => self,
        }
    }

    pub const fn check(self, check: Check) -> Self {
        ParamSpec { check, ..self }
    }

    pub const fn default(self, fallback: Fallback) -> Self {
        ParamSpec {
            fallback: Some(fallback),
            ..self
        }
    }

    pub const fn required(self) -> Self {
        ParamSpec {
            required: true,
            ..self
        }
    }

    pub fn wire_key(&self) -> Option<&'static str> {
        match self.wire {
            Wire::Query(k) | Wire::QueryUpper(k) => Some(k),
            Wire::Path | Wire::Local => None,
        }
    }
}

/// Constraints spanning more than one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// When both are numeric, `min <= max`.
    Ordered {
        min: &'static str,
        max: &'static str,
    },
    /// When both are structured date values, `start < end`, or
    /// `start <= end` unless `strict`.
    Before {
        start: &'static str,
        end: &'static str,
        strict: bool,
    },
    /// At most one of the group may be supplied.
    Exclusive(&'static [&'static str]),
    /// At least one of the group must be supplied.
    AnyOf(&'static [&'static str]),
    /// Supplying `param` requires all of `all_of`.
    Requires {
        param: &'static str,
        all_of: &'static [&'static str],
    },
}

/// How the request path is derived from the validated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `{name}` templates filled, remaining path values appended as segments.
    Template,
    /// Path values appended when present, otherwise the given suffix.
    OrElse(&'static str),
    /// `{color}/date/{date}`, `{color}/available` or `{color}/all`.
    Epic,
    /// Optional project id segment, suffixed `.xml` for the XML format.
    Techport,
}

/// Query keys dropped after assembly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Omit {
    /// Drop `key` when it carries `value`.
    IfValue {
        key: &'static str,
        value: &'static str,
    },
    /// Drop `keys` when any of `present` was supplied.
    IfAny {
        keys: &'static [&'static str],
        present: &'static [&'static str],
    },
}

#[derive(Debug)]
pub struct EndpointSpec {
    pub name: &'static str,
    pub summary: &'static str,
    pub host: Host,
    pub path: &'static str,
    pub route: Route,
    pub credential: bool,
    pub params: &'static [ParamSpec],
    pub rules: &'static [Rule],
    pub fixed: &'static [(&'static str, &'static str)],
    pub omit: &'static [Omit],
    pub empty_body: EmptyBody,
    pub quota: Option<Quota>,
    /// JSON pointer applied to the parsed body.
    pub extract: Option<&'static str>,
}

impl EndpointSpec {
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }
}

/// The outcome of validation: wire query pairs plus values destined for the path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prepared {
    pub query: Vec<(String, String)>,
    path: BTreeMap<&'static str, String>,
    path_order: Vec<&'static str>,
    local: BTreeMap<&'static str, Arg>,
}

impl Prepared {
    pub fn path_value(&self, name: &str) -> Option<&str> {
        self.path.get(name).map(String::as_str)
    }

    pub fn local(&self, name: &str) -> Option<&Arg> {
        self.local.get(name)
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove_query(&mut self, key: &str) {
        self.query.retain(|(k, _)| k != key);
    }

    /// Fill `{name}` templates in `template`, then append any remaining path
    /// values as segments in declaration order.
    pub fn render_path(&self, template: &str) -> String {
        let mut path = template.to_string();
        let mut trailing = Vec::new();
        for name in &self.path_order {
            let Some(value) = self.path.get(name) else {
                continue;
            };
            let encoded = crate::http::encode_path_segment(value);
            let placeholder = format!("{{{name}}}");
            if path.contains(&placeholder) {
                path = path.replace(&placeholder, &encoded);
            } else {
                trailing.push(encoded);
            }
        }
        for segment in trailing {
            if !path.ends_with('/') {
                path.push('/');
            }
            path.push_str(&segment);
        }
        path
    }

    /// Full request path for `spec`, per its [`Route`].
    pub fn resolve_path(&self, spec: &EndpointSpec) -> String {
        match spec.route {
            Route::Template => self.render_path(spec.path),
            Route::OrElse(suffix) => {
                if self.path.is_empty() {
                    format!("{}{}", spec.path, suffix)
                } else {
                    self.render_path(spec.path)
                }
            }
            Route::Epic => {
                let color = self.path_value("color").unwrap_or("natural");
                let tail = match self.path_value("date") {
                    Some(date) => format!("date/{}", crate::http::encode_path_segment(date)),
                    None if matches!(self.local("available"), Some(Arg::Bool(true))) => {
                        "available".to_string()
                    }
                    None => "all".to_string(),
                };
                format!(
                    "{}/{}/{}",
                    spec.path.trim_end_matches('/'),
                    crate::http::encode_path_segment(color),
                    tail
                )
            }
            Route::Techport => match self.path_value("project_id") {
                Some(id) => {
                    let xml = matches!(self.local("return_format"), Some(Arg::Str(f)) if f == "xml");
                    format!(
                        "{}/{}{}",
                        spec.path.trim_end_matches('/'),
                        crate::http::encode_path_segment(id),
                        if xml { ".xml" } else { "" }
                    )
                }
                None => spec.path.to_string(),
            },
        }
    }
}

/// Validate `args` against `spec` and assemble the request.
///
/// Unset parameters are omitted from the query. The credential is injected
/// under [`CREDENTIAL_KEY`] when the endpoint takes one.
pub fn prepare(spec: &EndpointSpec, args: &Args, credential: Option<&str>) -> Result<Prepared> {
    if let Some(unknown) = args.names().find(|n| spec.param(n).is_none()) {
        return Err(ValueError::UnknownParam {
            endpoint: spec.name.to_string(),
            param: unknown.to_string(),
        }
        .into());
    }

    let mut resolved: BTreeMap<&'static str, Arg> = BTreeMap::new();
    let mut supplied: Vec<&'static str> = Vec::new();
    for p in spec.params {
        let value = match args.get(p.name) {
            Some(v) => {
                supplied.push(p.name);
                v.clone()
            }
            None => match p.fallback {
                Some(f) => f.to_arg(),
                None if p.required => {
                    return Err(ValueError::Missing {
                        param: p.name.to_string(),
                    }
                    .into())
                }
                None => continue,
            },
        };
        if !p.shape.admits(&value) {
            let expected = format!("{}, got {}", p.shape.describe(), value.shape_name());
            return Err(NasaError::type_error(p.name, &expected));
        }
        let value = apply_check(p, value)?;
        resolved.insert(p.name, value);
    }

    for rule in spec.rules {
        check_rule(rule, &resolved, &supplied)?;
    }

    let mut prepared = Prepared::default();
    for p in spec.params {
        let Some(value) = resolved.remove(p.name) else {
            continue;
        };
        match p.wire {
            Wire::Query(key) => prepared.query.push((key.to_string(), render(p, &value))),
            Wire::QueryUpper(key) => prepared
                .query
                .push((key.to_string(), render(p, &value).to_uppercase())),
            Wire::Path => {
                prepared.path.insert(p.name, render(p, &value));
                prepared.path_order.push(p.name);
            }
            Wire::Local => {
                prepared.local.insert(p.name, value);
            }
        }
    }
    for (k, v) in spec.fixed {
        prepared.query.push((k.to_string(), v.to_string()));
    }
    for omit in spec.omit {
        match *omit {
            Omit::IfValue { key, value } => {
                prepared.query.retain(|(k, v)| !(k == key && v == value));
            }
            Omit::IfAny { keys, present } => {
                if present.iter().any(|n| supplied.contains(n)) {
                    prepared.query.retain(|(k, _)| !keys.contains(&k.as_str()));
                }
            }
        }
    }
    if spec.credential {
        if let Some(key) = credential {
            prepared.query.push((CREDENTIAL_KEY.to_string(), key.to_string()));
        }
    }
    Ok(prepared)
}

fn apply_check(p: &ParamSpec, value: Arg) -> Result<Arg> {
    let not_in_set = |value: &Arg, allowed: Vec<String>| -> NasaError {
        ValueError::NotInSet {
            param: p.name.to_string(),
            value: value.to_string(),
            allowed,
        }
        .into()
    };
    match p.check {
        Check::Any => Ok(value),
        Check::OneOf(set) => match value.as_str() {
            Some(s) if set.contains(&s) => Ok(value),
            _ => Err(not_in_set(&value, owned(set))),
        },
        Check::OneOfCaseless(set) => {
            let folded = value.as_str().map(str::to_lowercase);
            match folded {
                Some(s) if set.contains(&s.as_str()) => Ok(Arg::Str(s)),
                _ => Err(not_in_set(&value, owned(set))),
            }
        }
        Check::OneOfInt(set) => match value {
            Arg::Int(i) if set.contains(&i) => Ok(value),
            _ => Err(not_in_set(
                &value,
                set.iter().map(i64::to_string).collect(),
            )),
        },
        Check::Range(lo, hi) => match value.as_f64() {
            Some(x) if in_bounds(x, lo, hi) => Ok(value),
            Some(x) => Err(ValueError::OutOfRange {
                param: p.name.to_string(),
                value: x,
                interval: interval(lo, hi),
            }
            .into()),
            None => Err(NasaError::type_error(p.name, "an integer or float")),
        },
        Check::AbsAbove(limit) => match value.as_f64() {
            Some(x) if x.abs() > limit => Ok(value),
            Some(x) => Err(ValueError::OutOfRange {
                param: p.name.to_string(),
                value: x,
                interval: format!("|x| > {limit}"),
            }
            .into()),
            None => Err(NasaError::type_error(p.name, "an integer or float")),
        },
    }
}

fn owned(set: &[&str]) -> Vec<String> {
    set.iter().map(|s| s.to_string()).collect()
}

fn check_rule(
    rule: &Rule,
    resolved: &BTreeMap<&'static str, Arg>,
    supplied: &[&'static str],
) -> Result<()> {
    match *rule {
        Rule::Ordered { min, max } => {
            let lo = resolved.get(min).and_then(Arg::numeric);
            let hi = resolved.get(max).and_then(Arg::numeric);
            if let (Some(lo), Some(hi)) = (lo, hi) {
                if lo > hi {
                    return Err(ValueError::Unordered {
                        min: min.to_string(),
                        max: max.to_string(),
                    }
                    .into());
                }
            }
        }
        Rule::Before { start, end, strict } => {
            let as_dt = |name: &str| match resolved.get(name) {
                Some(Arg::Date(d)) => d.as_datetime(),
                _ => None,
            };
            if let (Some(a), Some(b)) = (as_dt(start), as_dt(end)) {
                if strict && a >= b {
                    return Err(ValueError::NotBefore {
                        start: start.to_string(),
                        end: end.to_string(),
                    }
                    .into());
                }
                if !strict && a > b {
                    return Err(ValueError::Unordered {
                        min: start.to_string(),
                        max: end.to_string(),
                    }
                    .into());
                }
            }
        }
        Rule::Exclusive(group) => {
            let present: Vec<String> = group
                .iter()
                .filter(|n| resolved.contains_key(*n))
                .map(|n| n.to_string())
                .collect();
            if present.len() > 1 {
                return Err(ValueError::Exclusive { params: present }.into());
            }
        }
        Rule::AnyOf(group) => {
            let any = group
                .iter()
                .any(|n| supplied.contains(n) && !is_blank(resolved.get(n)));
            if !any {
                return Err(ValueError::MissingOneOf {
                    params: owned(group),
                }
                .into());
            }
        }
        Rule::Requires { param, all_of } => {
            if resolved.contains_key(param) {
                let missing: Vec<String> = all_of
                    .iter()
                    .filter(|n| !resolved.contains_key(*n))
                    .map(|n| n.to_string())
                    .collect();
                if !missing.is_empty() {
                    return Err(ValueError::MissingDependency {
                        param: param.to_string(),
                        requires: missing,
                    }
                    .into());
                }
            }
        }
    }
    Ok(())
}

fn is_blank(arg: Option<&Arg>) -> bool {
    match arg {
        None => true,
        Some(Arg::Str(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Wire string for a validated value.
fn render(p: &ParamSpec, value: &Arg) -> String {
    match (p.shape, value) {
        (Shape::Date(g), Arg::Date(d)) => d.normalize(g, false),
        (Shape::DateOrNow(g), Arg::Date(d)) => d.normalize(g, true),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::NaiveDate;

    static DEMO: EndpointSpec = EndpointSpec {
        name: "demo",
        summary: "test endpoint",
        host: Host::Api,
        path: "/things/{kind}",
        route: Route::Template,
        credential: true,
        params: &[
            ParamSpec::path("kind", Shape::Str)
                .check(Check::OneOfCaseless(&["rock", "ice"]))
                .default(Fallback::Str("rock")),
            ParamSpec::query("start_date", "startDate", Shape::Date(Granularity::Day)),
            ParamSpec::query("h_min", "h-min", Shape::Number),
            ParamSpec::query("h_max", "h-max", Shape::Number),
            ParamSpec::query("order", "order", Shape::Str)
                .check(Check::OneOf(&["asc", "desc"]))
                .default(Fallback::Str("desc"))
                .upper(),
            ParamSpec::query("limit", "limit", Shape::Int)
                .check(Check::Range(Bound::Excluded(0.0), Bound::Unbounded)),
            ParamSpec::query("des", "des", Shape::StrOrNumber),
            ParamSpec::query("spk", "spk", Shape::Int),
            ParamSpec::query("flag", "flag", Shape::Bool).default(Fallback::Bool(false)),
            ParamSpec::local("mode", Shape::Str),
            ParamSpec::path("id", Shape::Int),
        ],
        rules: &[
            Rule::Ordered {
                min: "h_min",
                max: "h_max",
            },
            Rule::Exclusive(&["des", "spk"]),
        ],
        fixed: &[("format", "json")],
        omit: &[
            Omit::IfValue {
                key: "order",
                value: "ASC",
            },
            Omit::IfAny {
                keys: &["flag"],
                present: &["des", "spk"],
            },
        ],
        empty_body: EmptyBody::Reject,
        quota: None,
        extract: None,
    };

    fn run(args: Args) -> Result<Prepared> {
        prepare(&DEMO, &args, Some("KEY"))
    }

    #[test]
    fn assembles_wire_names_defaults_and_credential() {
        let date = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        let p = run(Args::new().with("start_date", date).with("limit", 5i64)).unwrap();
        assert_eq!(p.query_value("startDate"), Some("2019-01-01"));
        assert_eq!(p.query_value("limit"), Some("5"));
        assert_eq!(p.query_value("order"), Some("DESC"));
        assert_eq!(p.query_value("flag"), Some("false"));
        assert_eq!(p.query_value("format"), Some("json"));
        assert_eq!(p.query_value("api_key"), Some("KEY"));
        assert_eq!(p.query_value("h-min"), None);
        assert_eq!(p.path_value("kind"), Some("rock"));
    }

    #[test]
    fn unset_parameters_are_omitted() {
        let p = run(Args::new()).unwrap();
        assert!(p.query.iter().all(|(k, _)| k != "des" && k != "spk"));
        assert!(p.query.iter().all(|(_, v)| !v.is_empty()));
    }

    #[test]
    fn caseless_enumeration_folds() {
        let p = run(Args::new().with("kind", "ICE")).unwrap();
        assert_eq!(p.path_value("kind"), Some("ice"));
        assert_eq!(p.render_path(DEMO.path), "/things/ice");
    }

    #[test]
    fn trailing_path_segments_are_appended() {
        let p = run(Args::new().with("id", 42i64)).unwrap();
        assert_eq!(p.render_path(DEMO.path), "/things/rock/42");
    }

    #[test]
    fn enumeration_violation() {
        let err = run(Args::new().with("order", "sideways")).unwrap_err();
        match err.as_value() {
            Some(ValueError::NotInSet { param, allowed, .. }) => {
                assert_eq!(param, "order");
                assert_eq!(allowed, &vec!["asc".to_string(), "desc".to_string()]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn range_bounds() {
        assert!(run(Args::new().with("limit", 1i64)).is_ok());
        let err = run(Args::new().with("limit", 0i64)).unwrap_err();
        assert!(matches!(
            err.as_value(),
            Some(ValueError::OutOfRange { interval, .. }) if interval == "(0, +inf)"
        ));
    }

    #[test]
    fn ordering_accepts_equal_bounds() {
        assert!(run(Args::new().with("h_min", 1.0).with("h_max", 1.0)).is_ok());
        assert!(run(Args::new().with("h_min", 0.9).with("h_max", 1.0)).is_ok());
        let err = run(Args::new().with("h_min", 1.0).with("h_max", 0.9)).unwrap_err();
        assert!(matches!(err.as_value(), Some(ValueError::Unordered { .. })));
    }

    #[test]
    fn exclusivity() {
        let err = run(Args::new().with("des", "99942").with("spk", 2000433i64)).unwrap_err();
        assert!(matches!(
            err.as_value(),
            Some(ValueError::Exclusive { params }) if params == &vec!["des".to_string(), "spk".to_string()]
        ));
    }

    #[test]
    fn shape_mismatch_is_type_error() {
        let err = run(Args::new().with("flag", "false")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        let err = run(Args::new().with("start_date", 1i64)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        let err = run(Args::new().with("limit", 2.5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn unknown_parameter() {
        let err = run(Args::new().with("colour", "red")).unwrap_err();
        assert!(matches!(err.as_value(), Some(ValueError::UnknownParam { .. })));
    }

    #[test]
    fn local_values_stay_out_of_the_query() {
        let p = run(Args::new().with("mode", "fast")).unwrap();
        assert_eq!(p.local("mode"), Some(&Arg::Str("fast".into())));
        assert_eq!(p.query_value("mode"), None);
    }

    #[test]
    fn omitted_keys() {
        let p = run(Args::new().with("order", "asc")).unwrap();
        assert_eq!(p.query_value("order"), None);
        let p = run(Args::new().with("des", "433")).unwrap();
        assert_eq!(p.query_value("flag"), None);
        assert_eq!(p.query_value("des"), Some("433"));
    }

    #[test]
    fn interval_notation() {
        assert_eq!(interval(Bound::Included(-90.0), Bound::Included(90.0)), "[-90, 90]");
        assert_eq!(interval(Bound::Excluded(0.0), Bound::Included(1800.0)), "(0, 1800]");
        assert_eq!(interval(Bound::Included(0.0), Bound::Unbounded), "[0, +inf)");
    }
}
