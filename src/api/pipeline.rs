use tracing::debug;

use crate::core::Table;
use crate::error::{ChartError, ChartResult};

use super::output_encoding::encode;
use super::{
    ChartOutput, ChartType, Document, FieldStage, OutputType, SerializeOptions, debug_view,
};

/// Serializes `table` into a Highcharts configuration.
///
/// The caller's table is never modified; index promotion, index reset and
/// column selection happen on a private copy before every [`FieldStage`]
/// runs in order against a fresh document.
pub fn serialize(
    table: &Table,
    output_type: OutputType,
    chart_type: ChartType,
    options: &SerializeOptions,
) -> ChartResult<ChartOutput> {
    debug!(
        rows = table.len(),
        columns = table.columns().len(),
        ?output_type,
        ?chart_type,
        "serialize chart"
    );

    let prepared = prepare_table(table, options)?;
    let mut document = build_document(&prepared, options)?;

    if let Some(transform) = &options.output_fun {
        document = transform(document);
    }
    if options.debug {
        let view = debug_view(&document);
        match serde_json::to_string_pretty(&view) {
            Ok(json) => debug!(document = %json, "serialized chart document"),
            Err(e) => debug!(error = %e, "failed to render debug document"),
        }
    }

    encode(document, output_type, chart_type)
}

/// Document form of [`serialize`].
pub fn serialize_to_document(table: &Table, options: &SerializeOptions) -> ChartResult<Document> {
    serialize(table, OutputType::Dict, ChartType::Default, options)?
        .into_document()
        .ok_or_else(|| ChartError::InvalidData("expected document output".to_owned()))
}

/// JSON text form of [`serialize`].
pub fn serialize_to_json(table: &Table, options: &SerializeOptions) -> ChartResult<String> {
    serialize_text(table, OutputType::Json, ChartType::Default, options)
}

/// Constructor-call form of [`serialize`], ready to embed in a page script.
pub fn serialize_to_javascript(
    table: &Table,
    chart_type: ChartType,
    options: &SerializeOptions,
) -> ChartResult<String> {
    serialize_text(table, OutputType::Javascript, chart_type, options)
}

fn serialize_text(
    table: &Table,
    output_type: OutputType,
    chart_type: ChartType,
    options: &SerializeOptions,
) -> ChartResult<String> {
    serialize(table, output_type, chart_type, options)?
        .into_text()
        .ok_or_else(|| ChartError::InvalidData("expected text output".to_owned()))
}

/// Working copy of `table` with `x`, `use_index` and `y` applied, in that order.
pub fn prepare_table(table: &Table, options: &SerializeOptions) -> ChartResult<Table> {
    let mut prepared = table.clone();
    if let Some(x) = &options.x {
        prepared.set_index_from_column(x)?;
    }
    if !options.use_index {
        prepared.reset_index()?;
    }
    if let Some(y) = &options.y {
        prepared = prepared.select_columns(y);
    }
    Ok(prepared)
}

fn build_document(table: &Table, options: &SerializeOptions) -> ChartResult<Document> {
    let mut document = Document::new();
    for stage in FieldStage::PIPELINE {
        stage.apply(table, options, &mut document)?;
    }
    Ok(document)
}
