use std::borrow::Cow;

use serde::Serialize;
use serde_json::{Number, Value};
use tracing::{debug, trace};

use crate::core::{Column, Table};
use crate::error::{ChartError, ChartResult};

use super::{Document, SerializeOptions, map_line_style};

/// Suffix appended to the display name of secondary-axis series.
pub const RIGHT_AXIS_MARKER: &str = " (right)";

const DEFAULT_LINE_WIDTH: u64 = 2;
const DEFAULT_LINE_STYLE: &str = "-";

/// One entry of the `series` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<u8>,
    /// Bare values, or `[x, y]` pairs when the chart has a numeric x-axis.
    pub data: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_style: Option<&'static str>,
}

/// Builds one record per plottable column, sorted by display name.
///
/// Non-numeric columns are skipped without error.
pub fn build_series(table: &Table, options: &SerializeOptions) -> ChartResult<Vec<SeriesRecord>> {
    let table = if options.sort_columns {
        let mut sorted = table.clone();
        sorted.sort_by_index();
        Cow::Owned(sorted)
    } else {
        Cow::Borrowed(table)
    };

    let x_values = table.index().values.to_json_values();
    let mut records = Vec::with_capacity(table.columns().len());
    for column in table.columns() {
        if !column.kind().is_plottable() {
            debug!(column = %column.name, kind = ?column.kind(), "skip non-plottable column");
            continue;
        }
        let record = build_record(column, &x_values, options)?;
        trace!(name = %record.name, points = record.data.len(), "build series");
        records.push(record);
    }

    records.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(records)
}

fn build_record(
    column: &Column,
    x_values: &[Value],
    options: &SerializeOptions,
) -> ChartResult<SeriesRecord> {
    let mut name = column.name.clone();
    let mut y_axis = None;
    if options.is_secondary(&column.name) {
        y_axis = Some(1);
        if options.mark_right {
            name.push_str(RIGHT_AXIS_MARKER);
        }
    }

    let values = column.data.to_json_values();
    let bare_values = options.polar || options.kind.as_deref() == Some("area");
    let data = if bare_values {
        values
    } else {
        x_values
            .iter()
            .cloned()
            .zip(values)
            .map(|(x, y)| Value::Array(vec![x, y]))
            .collect()
    };

    let color = options
        .color
        .as_ref()
        .and_then(|colors| colors.get(&name))
        .filter(|color| !color.is_empty())
        .cloned();

    let line_width = options
        .linewidth
        .as_ref()
        .filter(|widths| !widths.is_empty())
        .map(|widths| {
            widths
                .get(&column.name)
                .cloned()
                .unwrap_or_else(|| Number::from(DEFAULT_LINE_WIDTH))
        });

    let dash_style = match options.style.as_ref().filter(|styles| !styles.is_empty()) {
        Some(styles) => {
            let symbol = styles
                .get(&column.name)
                .map_or(DEFAULT_LINE_STYLE, String::as_str);
            Some(map_line_style(symbol)?)
        }
        None => None,
    };

    Ok(SeriesRecord {
        name,
        y_axis,
        data,
        color,
        line_width,
        dash_style,
    })
}

/// Writes the `series` key.
pub(super) fn serialize_series(
    table: &Table,
    options: &SerializeOptions,
    output: &mut Document,
) -> ChartResult<()> {
    let records = build_series(table, options)?;
    let series = serde_json::to_value(records)
        .map_err(|e| ChartError::InvalidData(format!("failed to encode series: {e}")))?;
    output.insert("series".to_owned(), series);
    Ok(())
}
