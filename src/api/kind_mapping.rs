use crate::error::{ChartError, ChartResult};

const CHART_KINDS: [(&str, &str); 6] = [
    ("bar", "column"),
    ("barh", "bar"),
    ("area", "area"),
    ("line", "line"),
    ("pie", "pie"),
    ("scatter", "scatter"),
];

const LINE_STYLES: [(&str, &str); 4] = [
    ("-", "Solid"),
    ("--", "Dash"),
    ("-.", "DashDot"),
    (":", "Dot"),
];

/// Translates a plot kind name into the Highcharts series type.
pub fn map_kind(kind: &str) -> ChartResult<&'static str> {
    lookup(&CHART_KINDS, kind).ok_or_else(|| ChartError::UnsupportedValue {
        what: "plots",
        value: kind.to_owned(),
    })
}

/// Translates a matplotlib-style line symbol into a Highcharts `dashStyle`.
pub fn map_line_style(style: &str) -> ChartResult<&'static str> {
    lookup(&LINE_STYLES, style).ok_or_else(|| ChartError::UnsupportedValue {
        what: "linestyles",
        value: style.to_owned(),
    })
}

fn lookup(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find_map(|&(from, to)| (from == key).then_some(to))
}
