use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::{ChartError, ChartResult};

use super::Document;

/// Post-processing hook applied to the finished document before encoding.
pub type OutputTransform = Arc<dyn Fn(Document) -> Document + Send + Sync + 'static>;

/// Axis label font size: a bare number or any CSS size string (`"12px"`).
///
/// Numbers keep their JSON form, so `12` stays an integer and `10.5` is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontSize {
    Pixels(Number),
    Css(String),
}

impl FontSize {
    #[must_use]
    pub fn pixels(size: impl Into<Number>) -> Self {
        Self::Pixels(size.into())
    }
}

/// Options recognized by [`super::serialize`].
///
/// Every field has a default and unknown keys are ignored when deserializing,
/// so option files written for newer versions still load.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeOptions {
    /// Column promoted to the index before serializing.
    pub x: Option<String>,
    /// When `false` the index is demoted to a column and replaced by `0..n`.
    pub use_index: bool,
    /// Columns to plot, in order.
    pub y: Option<Vec<String>>,
    pub render_to: Option<String>,
    /// Chart `(width, height)` in pixels.
    pub figsize: Option<(u32, u32)>,
    /// Plot kind name, see [`super::map_kind`].
    pub kind: Option<String>,
    pub polar: bool,
    pub sort_columns: bool,
    /// Columns plotted against the secondary (right) y-axis.
    pub secondary_y: Vec<String>,
    /// Append ` (right)` to secondary series names.
    pub mark_right: bool,
    /// Series display name -> color.
    pub color: Option<IndexMap<String, String>>,
    /// Column name -> line width.
    pub linewidth: Option<IndexMap<String, Number>>,
    /// Column name -> line style symbol, see [`super::map_line_style`].
    pub style: Option<IndexMap<String, String>>,
    pub title: Option<String>,
    /// Copied verbatim into the `tooltip` key.
    pub tooltip: Option<Value>,
    pub grid: bool,
    pub loglog: bool,
    pub logx: bool,
    pub logy: bool,
    pub xlim: Option<(Number, Number)>,
    pub ylim: Option<(Number, Number)>,
    pub rot: Option<i32>,
    pub fontsize: Option<FontSize>,
    pub xticks: Option<Vec<Number>>,
    pub yticks: Option<Vec<Number>>,
    pub ylabel: Option<String>,
    pub ylim2: Option<(Number, Number)>,
    pub rot2: Option<i32>,
    pub yticks2: Option<Vec<Number>>,
    pub ylabel2: Option<String>,
    pub loglog2: Option<bool>,
    pub logy2: Option<bool>,
    /// One of `x`, `y`, `xy`.
    pub zoom: Option<String>,
    #[serde(skip)]
    pub output_fun: Option<OutputTransform>,
    /// Log the finished document with series data elided.
    pub debug: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            x: None,
            use_index: true,
            y: None,
            render_to: None,
            figsize: None,
            kind: None,
            polar: false,
            sort_columns: false,
            secondary_y: Vec::new(),
            mark_right: true,
            color: None,
            linewidth: None,
            style: None,
            title: None,
            tooltip: None,
            grid: false,
            loglog: false,
            logx: false,
            logy: false,
            xlim: None,
            ylim: None,
            rot: None,
            fontsize: None,
            xticks: None,
            yticks: None,
            ylabel: None,
            ylim2: None,
            rot2: None,
            yticks2: None,
            ylabel2: None,
            loglog2: None,
            logy2: None,
            zoom: None,
            output_fun: None,
            debug: false,
        }
    }
}

impl fmt::Debug for SerializeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializeOptions")
            .field("x", &self.x)
            .field("use_index", &self.use_index)
            .field("y", &self.y)
            .field("render_to", &self.render_to)
            .field("figsize", &self.figsize)
            .field("kind", &self.kind)
            .field("polar", &self.polar)
            .field("sort_columns", &self.sort_columns)
            .field("secondary_y", &self.secondary_y)
            .field("mark_right", &self.mark_right)
            .field("color", &self.color)
            .field("linewidth", &self.linewidth)
            .field("style", &self.style)
            .field("title", &self.title)
            .field("tooltip", &self.tooltip)
            .field("grid", &self.grid)
            .field("loglog", &self.loglog)
            .field("logx", &self.logx)
            .field("logy", &self.logy)
            .field("xlim", &self.xlim)
            .field("ylim", &self.ylim)
            .field("rot", &self.rot)
            .field("fontsize", &self.fontsize)
            .field("xticks", &self.xticks)
            .field("yticks", &self.yticks)
            .field("ylabel", &self.ylabel)
            .field("ylim2", &self.ylim2)
            .field("rot2", &self.rot2)
            .field("yticks2", &self.yticks2)
            .field("ylabel2", &self.ylabel2)
            .field("loglog2", &self.loglog2)
            .field("logy2", &self.logy2)
            .field("zoom", &self.zoom)
            .field("output_fun", &self.output_fun.as_ref().map(|_| "<fn>"))
            .field("debug", &self.debug)
            .finish()
    }
}

impl SerializeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_x(mut self, column: impl Into<String>) -> Self {
        self.x = Some(column.into());
        self
    }

    #[must_use]
    pub fn with_use_index(mut self, use_index: bool) -> Self {
        self.use_index = use_index;
        self
    }

    #[must_use]
    pub fn with_y<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.y = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_render_to(mut self, target: impl Into<String>) -> Self {
        self.render_to = Some(target.into());
        self
    }

    #[must_use]
    pub fn with_figsize(mut self, width: u32, height: u32) -> Self {
        self.figsize = Some((width, height));
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn with_polar(mut self, polar: bool) -> Self {
        self.polar = polar;
        self
    }

    #[must_use]
    pub fn with_sort_columns(mut self, sort_columns: bool) -> Self {
        self.sort_columns = sort_columns;
        self
    }

    #[must_use]
    pub fn with_secondary_y<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.secondary_y = columns.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_mark_right(mut self, mark_right: bool) -> Self {
        self.mark_right = mark_right;
        self
    }

    /// Sets the color of the series displayed as `name`.
    #[must_use]
    pub fn with_color(mut self, name: impl Into<String>, color: impl Into<String>) -> Self {
        self.color
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), color.into());
        self
    }

    #[must_use]
    pub fn with_linewidth(mut self, column: impl Into<String>, width: impl Into<Number>) -> Self {
        self.linewidth
            .get_or_insert_with(IndexMap::new)
            .insert(column.into(), width.into());
        self
    }

    #[must_use]
    pub fn with_style(mut self, column: impl Into<String>, style: impl Into<String>) -> Self {
        self.style
            .get_or_insert_with(IndexMap::new)
            .insert(column.into(), style.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: Value) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: bool) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn with_loglog(mut self, loglog: bool) -> Self {
        self.loglog = loglog;
        self
    }

    #[must_use]
    pub fn with_logx(mut self, logx: bool) -> Self {
        self.logx = logx;
        self
    }

    #[must_use]
    pub fn with_logy(mut self, logy: bool) -> Self {
        self.logy = logy;
        self
    }

    #[must_use]
    pub fn with_xlim(mut self, min: impl Into<Number>, max: impl Into<Number>) -> Self {
        self.xlim = Some((min.into(), max.into()));
        self
    }

    #[must_use]
    pub fn with_ylim(mut self, min: impl Into<Number>, max: impl Into<Number>) -> Self {
        self.ylim = Some((min.into(), max.into()));
        self
    }

    #[must_use]
    pub fn with_rot(mut self, degrees: i32) -> Self {
        self.rot = Some(degrees);
        self
    }

    #[must_use]
    pub fn with_fontsize(mut self, size: FontSize) -> Self {
        self.fontsize = Some(size);
        self
    }

    #[must_use]
    pub fn with_xticks<I, N>(mut self, ticks: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Number>,
    {
        self.xticks = Some(ticks.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_yticks<I, N>(mut self, ticks: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Number>,
    {
        self.yticks = Some(ticks.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_ylabel(mut self, label: impl Into<String>) -> Self {
        self.ylabel = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_ylim2(mut self, min: impl Into<Number>, max: impl Into<Number>) -> Self {
        self.ylim2 = Some((min.into(), max.into()));
        self
    }

    #[must_use]
    pub fn with_rot2(mut self, degrees: i32) -> Self {
        self.rot2 = Some(degrees);
        self
    }

    #[must_use]
    pub fn with_yticks2<I, N>(mut self, ticks: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Number>,
    {
        self.yticks2 = Some(ticks.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_ylabel2(mut self, label: impl Into<String>) -> Self {
        self.ylabel2 = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_loglog2(mut self, loglog: bool) -> Self {
        self.loglog2 = Some(loglog);
        self
    }

    #[must_use]
    pub fn with_logy2(mut self, logy: bool) -> Self {
        self.logy2 = Some(logy);
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: impl Into<String>) -> Self {
        self.zoom = Some(zoom.into());
        self
    }

    #[must_use]
    pub fn with_output_fun<F>(mut self, transform: F) -> Self
    where
        F: Fn(Document) -> Document + Send + Sync + 'static,
    {
        self.output_fun = Some(Arc::new(transform));
        self
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Options for the secondary y-axis.
    ///
    /// Primary-only axis keys are dropped and replaced by their `*2`
    /// counterparts when those are set; everything else carries over.
    #[must_use]
    pub fn secondary_axis_options(&self) -> Self {
        Self {
            ylim: self.ylim2.clone(),
            rot: self.rot2,
            yticks: self.yticks2.clone(),
            ylabel: self.ylabel2.clone(),
            loglog: self.loglog2.unwrap_or(false),
            logy: self.logy2.unwrap_or(false),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn is_secondary(&self, column: &str) -> bool {
        self.secondary_y.iter().any(|name| name == column)
    }

    #[must_use]
    pub fn has_secondary_axis(&self) -> bool {
        !self.secondary_y.is_empty()
    }

    /// Serializes options to pretty JSON. `output_fun` is not persisted.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize options: {e}")))
    }

    /// Deserializes options from JSON, ignoring unknown keys.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse options: {e}")))
    }
}
