mod cli;

use anyhow::{anyhow, Context};
use chrono::{NaiveDate, NaiveDateTime};
use nasa_api::catalog::{self, ENDPOINTS};
use nasa_api::validate::{EndpointSpec, Fallback, ParamSpec, Shape, Wire};
use nasa_api::{julian_date, julian_date_now, Args, Config, Nasa, Table};
use serde_json::{Map, Value};

fn main() -> anyhow::Result<()> {
    let cmd = cli::build_cli();
    let matches = cmd.get_matches();
    let log_level = matches.get_one::<String>("log-level").cloned();
    let version_flag = matches.get_flag("version");

    cli::init_logging(log_level.as_deref());

    if version_flag {
        println!("nasa-api {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = Config::from_env();
    if let Some(key) = matches.get_one::<String>("api-key") {
        config.api_key = key.clone();
    }

    match matches.subcommand() {
        Some(("list", _)) => print_endpoints(),
        Some(("call", sub)) => {
            let endpoint = sub
                .get_one::<String>("endpoint")
                .ok_or_else(|| anyhow!("endpoint name is required"))?;
            let pairs: Vec<&String> = sub
                .get_many::<String>("params")
                .map(|v| v.collect())
                .unwrap_or_default();
            let args = parse_params(catalog::lookup(endpoint), &pairs)?;
            let nasa = Nasa::new(config)?;
            let res = nasa
                .call(endpoint, &args)
                .with_context(|| format!("{endpoint} failed"))?;
            if sub.get_flag("table") {
                print_table(&res.table()?);
            } else {
                println!("{}", serde_json::to_string_pretty(&res.value)?);
            }
            if let Some(left) = res.remaining() {
                log::info!("{left} requests remaining");
            }
        }
        Some(("julian", sub)) => {
            let modified = !sub.get_flag("absolute");
            let jd = match sub.get_one::<String>("date") {
                Some(raw) => julian_date(parse_datetime(raw)?, modified),
                None => julian_date_now(modified),
            };
            println!("{jd}");
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

/// `name=value` pairs into arguments. Values that parse as JSON scalars keep
/// their type (`5`, `0.9`, `true`) unless the parameter only takes text;
/// anything else is a string.
fn parse_params(spec: Option<&EndpointSpec>, pairs: &[&String]) -> anyhow::Result<Args> {
    let mut map = Map::new();
    for pair in pairs {
        let (name, raw) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("expected NAME=VALUE, got {pair:?}"))?;
        let name = name.trim();
        let text_only = spec
            .and_then(|s| s.param(name))
            .is_some_and(|p| {
                matches!(p.shape, Shape::Str | Shape::Date(_) | Shape::DateOrNow(_))
            });
        let value = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Number(_)) if text_only => Value::String(raw.to_string()),
            Ok(v @ (Value::Bool(_) | Value::Number(_) | Value::Null)) => v,
            _ => Value::String(raw.to_string()),
        };
        map.insert(name.to_string(), value);
    }
    Ok(Args::from_json(&Value::Object(map))?)
}

fn parse_datetime(raw: &str) -> anyhow::Result<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| anyhow!("invalid date {raw:?}; use YYYY-MM-DD or YYYY-MM-DDThh:mm:ss"))
}

fn print_endpoints() {
    for e in ENDPOINTS {
        println!("{}  {}", e.name, e.summary);
        for p in e.params {
            println!("    {}", describe_param(p));
        }
    }
}

fn describe_param(p: &ParamSpec) -> String {
    let mut line = p.name.to_string();
    match p.wire {
        Wire::Query(k) | Wire::QueryUpper(k) if k != p.name => line.push_str(&format!(" ({k})")),
        Wire::Path => line.push_str(" (path)"),
        _ => {}
    }
    line.push_str(&format!(": {}", p.shape.describe()));
    if let Some(c) = p.check.describe() {
        line.push_str(&format!(", {c}"));
    }
    if p.required {
        line.push_str(", required");
    }
    match p.fallback {
        Some(Fallback::Str(s)) => line.push_str(&format!(", default {s}")),
        Some(Fallback::Int(i)) => line.push_str(&format!(", default {i}")),
        Some(Fallback::Float(x)) => line.push_str(&format!(", default {x}")),
        Some(Fallback::Bool(b)) => line.push_str(&format!(", default {b}")),
        Some(Fallback::Now) => line.push_str(", default now"),
        None => {}
    }
    line
}

fn print_table(table: &Table) {
    println!("{}", table.columns.join("\t"));
    for row in &table.rows {
        let cells: Vec<String> = row
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            })
            .collect();
        println!("{}", cells.join("\t"));
    }
}
