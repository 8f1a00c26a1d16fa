use chrono::{DateTime, Utc};
use num_complex::Complex64;
use serde_json::{Value, json};

/// Epoch milliseconds, the time unit Highcharts expects on datetime axes.
#[must_use]
pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis()
}

/// Non-finite floats encode as `null` so missing values stay gaps in the chart.
#[must_use]
pub fn float_to_json(value: f64) -> Value {
    if value.is_finite() {
        json!(value)
    } else {
        Value::Null
    }
}

#[must_use]
pub fn complex_to_json(value: Complex64) -> Value {
    json!({
        "real": float_to_json(value.re),
        "imag": float_to_json(value.im),
    })
}
