use serde_json::{Map, Value, json};

use crate::error::{ChartError, ChartResult};

use super::{Document, SerializeOptions, map_kind};

const ZOOM_TYPES: [&str; 3] = ["x", "y", "xy"];

/// Writes `chart`: render target, size, mapped series type and polar flag.
pub(super) fn serialize_chart(options: &SerializeOptions, output: &mut Document) -> ChartResult<()> {
    let mut chart = Map::new();
    if let Some(render_to) = &options.render_to {
        chart.insert("renderTo".to_owned(), json!(render_to));
    }
    if let Some((width, height)) = options.figsize {
        chart.insert("width".to_owned(), json!(width));
        chart.insert("height".to_owned(), json!(height));
    }
    if let Some(kind) = &options.kind {
        let series_type = map_kind(kind)?;
        chart.insert("type".to_owned(), json!(series_type));
    }
    if options.polar {
        chart.insert("polar".to_owned(), Value::Bool(true));
    }
    output.insert("chart".to_owned(), Value::Object(chart));
    Ok(())
}

pub(super) fn serialize_plot_options(options: &SerializeOptions, output: &mut Document) {
    let plot_options = match options.kind.as_deref() {
        Some("area") => json!({ "area": { "stacking": "normal" } }),
        Some("scatter") => json!({ "scatter": { "marker": { "radius": 4 } } }),
        _ => return,
    };
    output.insert("plotOptions".to_owned(), plot_options);
}

pub(super) fn serialize_title(options: &SerializeOptions, output: &mut Document) {
    let text = options.title.as_deref().unwrap_or_default();
    output.insert("title".to_owned(), json!({ "text": text }));
}

pub(super) fn serialize_tooltip(options: &SerializeOptions, output: &mut Document) {
    if let Some(tooltip) = &options.tooltip {
        output.insert("tooltip".to_owned(), tooltip.clone());
    }
}

/// Sets `chart.zoomType`; the `chart` key must already be present.
pub(super) fn serialize_zoom(options: &SerializeOptions, output: &mut Document) -> ChartResult<()> {
    let Some(zoom) = &options.zoom else {
        return Ok(());
    };
    if !ZOOM_TYPES.contains(&zoom.as_str()) {
        return Err(ChartError::InvalidValue {
            option: "zoom",
            value: zoom.clone(),
            expected: "('x', 'y', 'xy')",
        });
    }
    let chart = output
        .get_mut("chart")
        .and_then(Value::as_object_mut)
        .ok_or_else(|| {
            ChartError::InvalidData("zoom requires `chart` to be serialized first".to_owned())
        })?;
    chart.insert("zoomType".to_owned(), json!(zoom));
    Ok(())
}
