use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use num_complex::Complex64;
use ordered_float::OrderedFloat;
use serde_json::Value;

use crate::core::primitives::{complex_to_json, datetime_to_unix_millis, float_to_json};

/// Closed classification of column element types.
///
/// Only `Numeric` and `Boolean` columns become chart series; `Datetime` and
/// `Categorical` columns are skipped by the series stage and drive axis typing
/// when they form the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Numeric,
    Boolean,
    Datetime,
    Categorical,
}

impl ColumnKind {
    #[must_use]
    pub fn is_plottable(self) -> bool {
        matches!(self, Self::Numeric | Self::Boolean)
    }
}

/// Typed value storage shared by table columns and the table index.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Bool(Vec<bool>),
    Int(Vec<i64>),
    /// `NaN` marks a missing value.
    Float(Vec<f64>),
    Complex(Vec<Complex64>),
    Str(Vec<String>),
    DateTime(Vec<DateTime<Utc>>),
    /// Heterogeneous values with no common element type.
    Object(Vec<Value>),
}

impl ColumnData {
    /// Default positional labels `0..len`.
    #[must_use]
    pub fn range(len: usize) -> Self {
        Self::Int((0..len as i64).collect())
    }

    /// All-missing float values, used when a requested column is absent.
    #[must_use]
    pub fn missing(len: usize) -> Self {
        Self::Float(vec![f64::NAN; len])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Bool(v) => v.len(),
            Self::Int(v) => v.len(),
            Self::Float(v) => v.len(),
            Self::Complex(v) => v.len(),
            Self::Str(v) => v.len(),
            Self::DateTime(v) => v.len(),
            Self::Object(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn kind(&self) -> ColumnKind {
        match self {
            Self::Bool(_) => ColumnKind::Boolean,
            Self::Int(_) | Self::Float(_) | Self::Complex(_) => ColumnKind::Numeric,
            Self::DateTime(_) => ColumnKind::Datetime,
            Self::Str(_) | Self::Object(_) => ColumnKind::Categorical,
        }
    }

    /// JSON encoding of the value at `row`, or `None` when out of bounds.
    #[must_use]
    pub fn json_at(&self, row: usize) -> Option<Value> {
        let value = match self {
            Self::Bool(v) => Value::Bool(*v.get(row)?),
            Self::Int(v) => Value::from(*v.get(row)?),
            Self::Float(v) => float_to_json(*v.get(row)?),
            Self::Complex(v) => complex_to_json(*v.get(row)?),
            Self::Str(v) => Value::String(v.get(row)?.clone()),
            Self::DateTime(v) => Value::from(datetime_to_unix_millis(*v.get(row)?)),
            Self::Object(v) => v.get(row)?.clone(),
        };
        Some(value)
    }

    #[must_use]
    pub fn to_json_values(&self) -> Vec<Value> {
        (0..self.len()).filter_map(|row| self.json_at(row)).collect()
    }

    /// Gathers rows in the order given by `rows`.
    ///
    /// Every entry of `rows` must be a valid row position.
    #[must_use]
    pub fn take(&self, rows: &[usize]) -> Self {
        fn gather<T: Clone>(values: &[T], rows: &[usize]) -> Vec<T> {
            rows.iter().map(|&row| values[row].clone()).collect()
        }

        match self {
            Self::Bool(v) => Self::Bool(gather(v, rows)),
            Self::Int(v) => Self::Int(gather(v, rows)),
            Self::Float(v) => Self::Float(gather(v, rows)),
            Self::Complex(v) => Self::Complex(gather(v, rows)),
            Self::Str(v) => Self::Str(gather(v, rows)),
            Self::DateTime(v) => Self::DateTime(gather(v, rows)),
            Self::Object(v) => Self::Object(gather(v, rows)),
        }
    }

    /// Row positions that visit the values in ascending order.
    ///
    /// The sort is stable: equal values keep their original relative order.
    #[must_use]
    pub fn sort_permutation(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = (0..self.len()).collect();
        match self {
            Self::Bool(v) => rows.sort_by_key(|&row| v[row]),
            Self::Int(v) => rows.sort_by_key(|&row| v[row]),
            Self::Float(v) => rows.sort_by_key(|&row| OrderedFloat(v[row])),
            Self::Complex(v) => {
                rows.sort_by_key(|&row| (OrderedFloat(v[row].re), OrderedFloat(v[row].im)));
            }
            Self::Str(v) => rows.sort_by(|&a, &b| v[a].cmp(&v[b])),
            Self::DateTime(v) => rows.sort_by_key(|&row| v[row]),
            Self::Object(v) => rows.sort_by(|&a, &b| compare_json(&v[a], &v[b])),
        }
        rows
    }

    /// Copy of the values sorted ascending.
    #[must_use]
    pub fn sorted(&self) -> Self {
        self.take(&self.sort_permutation())
    }
}

/// Total order over heterogeneous JSON values: null, booleans, numbers,
/// strings, then arrays and objects by their JSON text.
fn compare_json(a: &Value, b: &Value) -> Ordering {
    fn rank(value: &Value) -> u8 {
        match value {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) | Value::Object(_) => 4,
        }
    }

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = OrderedFloat(x.as_f64().unwrap_or(f64::NAN));
            let y = OrderedFloat(y.as_f64().unwrap_or(f64::NAN));
            x.cmp(&y)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => rank(a)
            .cmp(&rank(b))
            .then_with(|| a.to_string().cmp(&b.to_string())),
    }
}

impl From<Vec<bool>> for ColumnData {
    fn from(values: Vec<bool>) -> Self {
        Self::Bool(values)
    }
}

impl From<Vec<i64>> for ColumnData {
    fn from(values: Vec<i64>) -> Self {
        Self::Int(values)
    }
}

impl From<Vec<f64>> for ColumnData {
    fn from(values: Vec<f64>) -> Self {
        Self::Float(values)
    }
}

impl From<Vec<Complex64>> for ColumnData {
    fn from(values: Vec<Complex64>) -> Self {
        Self::Complex(values)
    }
}

impl From<Vec<String>> for ColumnData {
    fn from(values: Vec<String>) -> Self {
        Self::Str(values)
    }
}

impl From<Vec<&str>> for ColumnData {
    fn from(values: Vec<&str>) -> Self {
        Self::Str(values.into_iter().map(str::to_owned).collect())
    }
}

impl From<Vec<DateTime<Utc>>> for ColumnData {
    fn from(values: Vec<DateTime<Utc>>) -> Self {
        Self::DateTime(values)
    }
}

impl From<Vec<Value>> for ColumnData {
    fn from(values: Vec<Value>) -> Self {
        Self::Object(values)
    }
}

/// Named column of a [`crate::core::Table`].
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>, data: impl Into<ColumnData>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ColumnKind {
        self.data.kind()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
