//! Tabular projection of list-shaped response bodies.

use crate::error::{NasaError, Result, TransportError};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Column-oriented body: a `fields` name list with positional `data` rows.
    pub fn from_fields(fields: &[Value], data: &[Value]) -> Result<Table> {
        let columns = fields
            .iter()
            .map(|f| match f {
                Value::String(s) => Ok(s.clone()),
                other => Err(shape_error(format!("field name {other} is not a string"))),
            })
            .collect::<Result<Vec<_>>>()?;
        let mut rows = Vec::with_capacity(data.len());
        for row in data {
            let Value::Array(cells) = row else {
                return Err(shape_error("data row is not an array".to_string()));
            };
            if cells.len() != columns.len() {
                return Err(shape_error(format!(
                    "data row has {} cells, expected {}",
                    cells.len(),
                    columns.len()
                )));
            }
            rows.push(cells.clone());
        }
        Ok(Table { columns, rows })
    }

    /// Row-oriented body: a list of objects. Columns appear in first-seen order;
    /// absent keys become `null`.
    pub fn from_records(records: &[Value]) -> Result<Table> {
        let mut columns: Vec<String> = Vec::new();
        for rec in records {
            let Value::Object(map) = rec else {
                return Err(shape_error("record is not an object".to_string()));
            };
            for k in map.keys() {
                if !columns.iter().any(|c| c == k) {
                    columns.push(k.clone());
                }
            }
        }
        let rows = records
            .iter()
            .filter_map(Value::as_object)
            .map(|map| {
                columns
                    .iter()
                    .map(|c| map.get(c).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();
        Ok(Table { columns, rows })
    }

    /// Pick the projection that fits `body`: `{fields, data}`, `{data: [..]}`
    /// or a top-level array of records.
    pub fn from_body(body: &Value) -> Result<Table> {
        match body {
            Value::Array(records) => Table::from_records(records),
            Value::Object(map) => match (map.get("fields"), map.get("data")) {
                (Some(Value::Array(fields)), Some(Value::Array(data))) => {
                    Table::from_fields(fields, data)
                }
                (None, Some(Value::Array(data))) => Table::from_records(data),
                // Empty result sets come back as {"count": "0"} with no data key.
                (_, None) if map.contains_key("count") => Ok(Table::default()),
                _ => Err(shape_error("body has no tabular data".to_string())),
            },
            _ => Err(shape_error("body is neither an object nor an array".to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of one column; short rows read as `null`.
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(
            self.rows
                .iter()
                .map(|r| r.get(idx).unwrap_or(&Value::Null))
                .collect(),
        )
    }

    /// Back to one object per row.
    pub fn records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }
}

fn shape_error(message: String) -> NasaError {
    TransportError::unexpected(None, message).into()
}
