mod axis_fields;
mod chart_fields;
mod debug_view;
mod field_stage;
mod kind_mapping;
mod output_encoding;
mod pipeline;
mod serialize_options;
mod series_builder;

pub use debug_view::debug_view;
pub use field_stage::FieldStage;
pub use kind_mapping::{map_kind, map_line_style};
pub use output_encoding::{
    ChartOutput, ChartType, Document, OutputType, encode_javascript, encode_json,
};
pub use pipeline::{
    prepare_table, serialize, serialize_to_document, serialize_to_javascript, serialize_to_json,
};
pub use serialize_options::{FontSize, OutputTransform, SerializeOptions};
pub use series_builder::{RIGHT_AXIS_MARKER, SeriesRecord, build_series};
