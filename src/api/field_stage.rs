use tracing::trace;

use crate::core::Table;
use crate::error::ChartResult;

use super::axis_fields::{serialize_x_axis, serialize_y_axis};
use super::chart_fields::{
    serialize_chart, serialize_plot_options, serialize_title, serialize_tooltip, serialize_zoom,
};
use super::series_builder::serialize_series;
use super::{Document, SerializeOptions};

/// One step of the serialization pipeline, named after the top-level
/// document key it owns.
///
/// Stages run in [`FieldStage::PIPELINE`] order. Stages that write nothing yet
/// keep their slot so new fields never reorder existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldStage {
    Chart,
    Colors,
    Credits,
    Data,
    Drilldown,
    Exporting,
    Labels,
    Legend,
    Loading,
    Navigation,
    NoData,
    Pane,
    PlotOptions,
    Series,
    Subtitle,
    Title,
    Tooltip,
    XAxis,
    YAxis,
    Zoom,
}

impl FieldStage {
    /// Fixed execution order. `Chart` precedes `Zoom`, which amends `chart`.
    pub const PIPELINE: [FieldStage; 20] = [
        Self::Chart,
        Self::Colors,
        Self::Credits,
        Self::Data,
        Self::Drilldown,
        Self::Exporting,
        Self::Labels,
        Self::Legend,
        Self::Loading,
        Self::Navigation,
        Self::NoData,
        Self::Pane,
        Self::PlotOptions,
        Self::Series,
        Self::Subtitle,
        Self::Title,
        Self::Tooltip,
        Self::XAxis,
        Self::YAxis,
        Self::Zoom,
    ];

    /// Document key written (or reserved) by this stage. `zoom` has no key of
    /// its own and writes `chart.zoomType`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Chart => "chart",
            Self::Colors => "colors",
            Self::Credits => "credits",
            Self::Data => "data",
            Self::Drilldown => "drilldown",
            Self::Exporting => "exporting",
            Self::Labels => "labels",
            Self::Legend => "legend",
            Self::Loading => "loading",
            Self::Navigation => "navigation",
            Self::NoData => "noData",
            Self::Pane => "pane",
            Self::PlotOptions => "plotOptions",
            Self::Series => "series",
            Self::Subtitle => "subtitle",
            Self::Title => "title",
            Self::Tooltip => "tooltip",
            Self::XAxis => "xAxis",
            Self::YAxis => "yAxis",
            Self::Zoom => "zoom",
        }
    }

    /// Whether the stage currently writes anything.
    #[must_use]
    pub fn is_extension_point(self) -> bool {
        matches!(
            self,
            Self::Colors
                | Self::Credits
                | Self::Data
                | Self::Drilldown
                | Self::Exporting
                | Self::Labels
                | Self::Legend
                | Self::Loading
                | Self::Navigation
                | Self::NoData
                | Self::Pane
                | Self::Subtitle
        )
    }

    pub fn apply(
        self,
        table: &Table,
        options: &SerializeOptions,
        output: &mut Document,
    ) -> ChartResult<()> {
        trace!(stage = self.key(), "serialize field");
        match self {
            Self::Chart => serialize_chart(options, output)?,
            Self::PlotOptions => serialize_plot_options(options, output),
            Self::Series => serialize_series(table, options, output)?,
            Self::Title => serialize_title(options, output),
            Self::Tooltip => serialize_tooltip(options, output),
            Self::XAxis => serialize_x_axis(table, options, output),
            Self::YAxis => serialize_y_axis(options, output),
            Self::Zoom => serialize_zoom(options, output)?,
            Self::Colors
            | Self::Credits
            | Self::Data
            | Self::Drilldown
            | Self::Exporting
            | Self::Labels
            | Self::Legend
            | Self::Loading
            | Self::Navigation
            | Self::NoData
            | Self::Pane
            | Self::Subtitle => {}
        }
        Ok(())
    }
}
