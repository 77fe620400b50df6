mod support;

use chrono::NaiveDate;
use nasa_api::catalog::{self, ENDPOINTS};
use nasa_api::params::{
    CloseApproachParams, EarthAssetsParams, FireballParams, MissionDesignParams, NhatsParams,
    ScoutParams, SentryParams,
};
use nasa_api::validate::{Check, EndpointSpec, ParamSpec, Rule, Shape};
use nasa_api::{Arg, Args, ErrorKind, NasaError, ValueError};
use std::ops::Bound;
use support::{query_value, RecordingTransport};

fn sample(p: &ParamSpec) -> Arg {
    match p.check {
        Check::OneOf(set) | Check::OneOfCaseless(set) => return Arg::from(set[0]),
        Check::OneOfInt(set) => return Arg::Int(set[0]),
        Check::Range(lo, _) => {
            let x = match lo {
                Bound::Included(x) => x,
                Bound::Excluded(x) => x + 1.0,
                Bound::Unbounded => 0.0,
            };
            return numeric(p.shape, x);
        }
        Check::AbsAbove(x) => return numeric(p.shape, x + 1.0),
        Check::Any => {}
    }
    match p.shape {
        Shape::Str | Shape::StrOrNumber => Arg::from("x"),
        Shape::Int => Arg::Int(1),
        Shape::Number => Arg::Float(1.0),
        Shape::Bool => Arg::Bool(true),
        Shape::Date(_) | Shape::DateOrNow(_) => Arg::from("2019-01-01"),
    }
}

fn numeric(shape: Shape, x: f64) -> Arg {
    match shape {
        Shape::Int => Arg::Int(x as i64),
        _ => Arg::Float(x),
    }
}

/// Smallest argument set that passes validation for `spec`.
fn minimal_args(spec: &EndpointSpec) -> Args {
    let mut args = Args::new();
    for p in spec.params.iter().filter(|p| p.required) {
        args.set(p.name, sample(p));
    }
    for rule in spec.rules {
        if let Rule::AnyOf(group) = rule {
            if let Some(p) = spec.param(group[0]) {
                args.set(p.name, sample(p));
            }
        }
    }
    args
}

fn assert_value_error(err: NasaError) {
    assert_eq!(err.kind(), ErrorKind::Value, "{err}");
}

#[test]
fn every_minimal_call_validates_and_reaches_transport() {
    for spec in ENDPOINTS {
        let t = RecordingTransport::ok("{\"location\": \"http://127.0.0.1:1/x.json\"}");
        let nasa = t.client();
        let _ = nasa.call(spec.name, &minimal_args(spec));
        assert!(!t.calls().is_empty(), "{} sent nothing", spec.name);
    }
}

#[test]
fn enumeration_violations_never_reach_transport() {
    for spec in ENDPOINTS {
        for p in spec.params {
            let bogus = match p.check {
                Check::OneOf(_) | Check::OneOfCaseless(_) => Arg::from("not-a-member"),
                Check::OneOfInt(_) => Arg::Int(-12345),
                _ => continue,
            };
            let t = RecordingTransport::ok("{}");
            let args = minimal_args(spec).with(p.name, bogus);
            let err = t.client().call(spec.name, &args).unwrap_err();
            assert!(
                matches!(err.as_value(), Some(ValueError::NotInSet { param, .. }) if param == p.name),
                "{}.{}: {err}",
                spec.name,
                p.name
            );
            assert!(t.calls().is_empty(), "{}.{} reached transport", spec.name, p.name);
        }
    }
}

#[test]
fn range_boundaries() {
    for spec in ENDPOINTS {
        for p in spec.params {
            let Check::Range(lo, hi) = p.check else {
                continue;
            };
            let step: f64 = if p.shape == Shape::Int { 1.0 } else { 1e-3 };
            let mut inside = Vec::new();
            let mut outside = Vec::new();
            match lo {
                Bound::Included(x) => {
                    inside.push(x);
                    outside.push(x - if x.abs() < 1e-6 && x != 0.0 { x } else { step.max(x.abs() * 0.5) });
                }
                Bound::Excluded(x) => {
                    outside.push(x);
                    inside.push(x + step);
                }
                Bound::Unbounded => {}
            }
            match hi {
                Bound::Included(x) => {
                    inside.push(x);
                    outside.push(x + step);
                }
                Bound::Excluded(x) => {
                    outside.push(x);
                    inside.push(x - step);
                }
                Bound::Unbounded => {}
            }
            for x in inside {
                let t = RecordingTransport::ok("{}");
                let args = minimal_args(spec).with(p.name, numeric(p.shape, x));
                let res = t.client().call(spec.name, &args);
                assert!(
                    res.as_ref().err().map(NasaError::kind) != Some(ErrorKind::Value),
                    "{}.{}={x} should be accepted: {res:?}",
                    spec.name,
                    p.name
                );
            }
            for x in outside {
                let t = RecordingTransport::ok("{}");
                let args = minimal_args(spec).with(p.name, numeric(p.shape, x));
                let err = t.client().call(spec.name, &args).unwrap_err();
                assert!(
                    matches!(err.as_value(), Some(ValueError::OutOfRange { .. })),
                    "{}.{}={x}: {err}",
                    spec.name,
                    p.name
                );
                assert!(t.calls().is_empty());
            }
        }
    }
}

#[test]
fn min_max_pairs_are_ordered() {
    for spec in ENDPOINTS {
        for rule in spec.rules {
            let Rule::Ordered { min, max } = *rule else {
                continue;
            };
            let (Some(pmin), Some(pmax)) = (spec.param(min), spec.param(max)) else {
                panic!("{}: unknown pair {min}/{max}", spec.name);
            };
            let base = match sample(pmin) {
                Arg::Int(i) => i as f64,
                Arg::Float(x) => x,
                _ => 1970.0,
            };
            let value = |p: &ParamSpec, x: f64| match p.shape {
                Shape::Date(_) => Arg::Str(format!("{}", x as i64)),
                other => numeric(other, x),
            };
            let call = |a: f64, b: f64| {
                let t = RecordingTransport::ok("{}");
                let args = minimal_args(spec)
                    .with(min, value(pmin, a))
                    .with(max, value(pmax, b));
                let res = t.client().call(spec.name, &args);
                (res, t.calls().len())
            };

            let (res, sent) = call(base + 2.0, base + 1.0);
            assert!(
                matches!(res.as_ref().err().and_then(NasaError::as_value), Some(ValueError::Unordered { .. })),
                "{}: {min} > {max} accepted",
                spec.name
            );
            assert_eq!(sent, 0);

            for (a, b) in [(base + 1.0, base + 1.0), (base + 1.0, base + 2.0)] {
                let (res, sent) = call(a, b);
                assert!(
                    res.as_ref().err().map(NasaError::kind) != Some(ErrorKind::Value),
                    "{}: {min}={a} {max}={b} rejected: {res:?}",
                    spec.name
                );
                assert_eq!(sent, 1);
            }
        }
    }
}

#[test]
fn magnitude_window_example() {
    let t = RecordingTransport::ok(r#"{"count":"0"}"#);
    let nasa = t.client();
    let err = nasa
        .close_approach(&CloseApproachParams::default().h_min(1.0).h_max(0.9))
        .unwrap_err();
    assert_value_error(err);
    assert!(t.calls().is_empty());

    nasa.close_approach(&CloseApproachParams::default().h_min(0.9).h_max(1.0))
        .unwrap();
    let calls = t.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(query_value(&calls[0], "h-min"), Some("0.9"));
    assert_eq!(query_value(&calls[0], "h-max"), Some("1"));
}

#[test]
fn designation_and_spk_are_exclusive() {
    let t = RecordingTransport::ok("{}");
    let nasa = t.client();
    let both = CloseApproachParams::default().des(99942i64).spk(2000433i64);
    assert_value_error(nasa.close_approach(&both).unwrap_err());
    let both = SentryParams::default().des("99942").spk(2000433i64);
    assert_value_error(nasa.sentry(&both).unwrap_err());
    let both = NhatsParams::default().des("99942").magnitude(20i64);
    assert_value_error(nasa.nhats(&both).unwrap_err());
    let two = MissionDesignParams::default().des("2012 TC4").sstr("TC4");
    assert_value_error(nasa.mission_design(&two).unwrap_err());
    assert!(t.calls().is_empty());
}

#[test]
fn required_one_of_groups() {
    let t = RecordingTransport::ok("{}");
    let nasa = t.client();
    let err = nasa.mission_design(&MissionDesignParams::default()).unwrap_err();
    assert!(matches!(err.as_value(), Some(ValueError::MissingOneOf { .. })));
    let err = nasa
        .call("media_search", &Args::new().with("page", 2i64))
        .unwrap_err();
    assert!(matches!(err.as_value(), Some(ValueError::MissingOneOf { .. })));
    let err = nasa
        .call("media_search", &Args::new().with("query", "  "))
        .unwrap_err();
    assert!(matches!(err.as_value(), Some(ValueError::MissingOneOf { .. })));
    assert!(t.calls().is_empty());
}

#[test]
fn field_of_view_dependencies() {
    let t = RecordingTransport::ok("{}");
    let nasa = t.client();
    let err = nasa
        .scout(&ScoutParams::default().fov_ra("10:15:00").fov_diam(60.0))
        .unwrap_err();
    assert!(matches!(
        err.as_value(),
        Some(ValueError::MissingDependency { param, requires }) if param == "fov_ra" && requires == &vec!["fov_dec".to_string()]
    ));
    nasa.scout(
        &ScoutParams::default()
            .fov_ra("10:15:00")
            .fov_dec("-10:00:00")
            .fov_diam(60.0),
    )
    .unwrap();
    assert_eq!(query_value(&t.calls()[0], "fov-dec"), Some("-10:00:00"));
}

#[test]
fn structured_dates_match_preformatted_strings() {
    let date = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    let dt = date.and_hms_opt(6, 30, 0).unwrap();

    let pairs: [(&str, &str, Arg, Arg, &str); 4] = [
        ("apod", "date", Arg::from(date), Arg::from("2019-01-01"), "date"),
        ("geomagnetic_storm", "start_date", Arg::from(dt), Arg::from("2019-01-01"), "startDate"),
        ("close_approach", "date_min", Arg::from(dt), Arg::from("2019-01-01T06:30:00"), "date-min"),
        ("media_search", "year_start", Arg::from(date), Arg::from("2019"), "year_start"),
    ];
    for (endpoint, param, structured, text, wire) in pairs {
        let spec = catalog::lookup(endpoint).unwrap();
        let a = RecordingTransport::ok("{\"collection\": {}}");
        let b = RecordingTransport::ok("{\"collection\": {}}");
        a.client()
            .call(endpoint, &minimal_args(spec).with(param, structured))
            .unwrap();
        b.client()
            .call(endpoint, &minimal_args(spec).with(param, text))
            .unwrap();
        let (qa, qb) = (a.calls(), b.calls());
        assert_eq!(query_value(&qa[0], wire), query_value(&qb[0], wire), "{endpoint}");
        assert!(query_value(&qa[0], wire).is_some());
    }
}

#[test]
fn wrong_shapes_are_type_errors() {
    let t = RecordingTransport::ok("{}");
    let nasa = t.client();
    let err = nasa
        .call("apod", &Args::new().with("date", 20190101i64))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert!(err.to_string().contains("date parameter must be"));
    assert!(err.to_string().ends_with("got integer"), "{err}");
    let err = nasa.call("fireballs", &Args::new().with("req_loc", "yes")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    let err = nasa.call("close_approach", &Args::new().with("limit", 2.5)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert!(t.calls().is_empty());
}

#[test]
fn unknown_endpoint_and_parameter() {
    let t = RecordingTransport::ok("{}");
    let nasa = t.client();
    assert_value_error(nasa.call("patents", &Args::new()).unwrap_err());
    assert_value_error(nasa.call("apod", &Args::new().with("colour", "red")).unwrap_err());
    assert!(t.calls().is_empty());
}

#[test]
fn equal_date_bounds_are_a_valid_window() {
    let day = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    let t = RecordingTransport::ok(r#"{"count":"0"}"#);
    let nasa = t.client();
    nasa.fireballs(&FireballParams::default().date_min(day).date_max(day))
        .unwrap();
    nasa.close_approach(&CloseApproachParams::default().date_min(day).date_max(day))
        .unwrap();
    let calls = t.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(query_value(&calls[0], "date-min"), Some("2019-01-01"));
    assert_eq!(query_value(&calls[0], "date-max"), Some("2019-01-01"));
    assert_eq!(query_value(&calls[1], "date-min"), Some("2019-01-01T00:00:00"));
    assert_eq!(query_value(&calls[1], "date-max"), Some("2019-01-01T00:00:00"));
}

#[test]
fn reversed_date_bounds_are_rejected() {
    let early = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    let late = NaiveDate::from_ymd_opt(2019, 2, 1).unwrap();
    let t = RecordingTransport::ok("{}");
    let nasa = t.client();
    let err = nasa
        .fireballs(&FireballParams::default().date_min(late).date_max(early))
        .unwrap_err();
    assert!(matches!(err.as_value(), Some(ValueError::Unordered { min, .. }) if min == "date_min"));
    let err = nasa
        .close_approach(&CloseApproachParams::default().date_min(late).date_max(early))
        .unwrap_err();
    assert!(matches!(err.as_value(), Some(ValueError::Unordered { .. })));
    assert!(t.calls().is_empty());
}

#[test]
fn asset_window_must_start_before_it_ends() {
    let early = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
    let late = NaiveDate::from_ymd_opt(2018, 6, 1).unwrap();
    let t = RecordingTransport::ok("{}");
    let nasa = t.client();
    for end in [early, NaiveDate::from_ymd_opt(2017, 12, 31).unwrap()] {
        let err = nasa
            .earth_assets(&EarthAssetsParams::new(29.78, -95.33, early).end_date(end))
            .unwrap_err();
        assert!(
            matches!(err.as_value(), Some(ValueError::NotBefore { start, end }) if start == "begin_date" && end == "end_date"),
            "{err}"
        );
    }
    assert!(t.calls().is_empty());

    nasa.earth_assets(&EarthAssetsParams::new(29.78, -95.33, early).end_date(late))
        .unwrap();
    assert_eq!(t.calls().len(), 1);
}

#[test]
fn ephemeris_window_is_strict() {
    let start = NaiveDate::from_ymd_opt(2019, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let t = RecordingTransport::ok("{}");
    let nasa = t.client();
    for stop in [start, start - chrono::Duration::hours(1)] {
        let err = nasa
            .scout(&ScoutParams::default().tdes("P10vY9r").eph_start(start).eph_stop(stop))
            .unwrap_err();
        assert!(matches!(err.as_value(), Some(ValueError::NotBefore { .. })), "{err}");
    }
    assert!(t.calls().is_empty());
}

#[test]
fn text_dates_skip_ordering() {
    let t = RecordingTransport::ok("{}");
    let nasa = t.client();
    let stop = NaiveDate::from_ymd_opt(2019, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    nasa.scout(&ScoutParams::default().eph_start("2020-01-01T00:00:00").eph_stop(stop))
        .unwrap();
    let day = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
    nasa.fireballs(&FireballParams::default().date_min("2020-01-01").date_max(day))
        .unwrap();
    nasa.earth_assets(&EarthAssetsParams::new(29.78, -95.33, "2019-06-01").end_date(day))
        .unwrap();
    let calls = t.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(query_value(&calls[0], "eph-start"), Some("2020-01-01T00:00:00"));
    assert_eq!(query_value(&calls[0], "eph-stop"), Some("2019-01-01T00:00:00"));
}
