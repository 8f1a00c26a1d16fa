use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ChartError, ChartResult};

/// Chart configuration document, keys kept in insertion order.
pub type Document = Map<String, Value>;

/// Final encoding of a serialized chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    /// Constructor call embedding the JSON document.
    #[default]
    Javascript,
    Json,
    /// The document itself.
    Dict,
}

/// Highcharts constructor used by [`OutputType::Javascript`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Default,
    Stock,
}

impl ChartType {
    #[must_use]
    pub fn constructor(self) -> &'static str {
        match self {
            Self::Default => "Highcharts.Chart",
            Self::Stock => "Highcharts.StockChart",
        }
    }
}

impl FromStr for OutputType {
    type Err = ChartError;

    fn from_str(s: &str) -> ChartResult<Self> {
        match s {
            "javascript" => Ok(Self::Javascript),
            "json" => Ok(Self::Json),
            "dict" => Ok(Self::Dict),
            _ => Err(ChartError::UnsupportedValue {
                what: "output types",
                value: s.to_owned(),
            }),
        }
    }
}

impl FromStr for ChartType {
    type Err = ChartError;

    fn from_str(s: &str) -> ChartResult<Self> {
        match s {
            "default" => Ok(Self::Default),
            "stock" => Ok(Self::Stock),
            _ => Err(ChartError::UnsupportedValue {
                what: "chart types",
                value: s.to_owned(),
            }),
        }
    }
}

/// Result of [`super::serialize`]: the raw document or its text encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutput {
    Document(Document),
    Text(String),
}

impl ChartOutput {
    #[must_use]
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Self::Document(document) => Some(document),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Document(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    #[must_use]
    pub fn into_document(self) -> Option<Document> {
        match self {
            Self::Document(document) => Some(document),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Document(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl fmt::Display for ChartOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document(document) => match serde_json::to_string(document) {
                Ok(json) => f.write_str(&json),
                Err(_) => Err(fmt::Error),
            },
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Compact JSON text of the document.
pub fn encode_json(document: &Document) -> ChartResult<String> {
    serde_json::to_string(document)
        .map_err(|e| ChartError::InvalidData(format!("failed to encode chart json: {e}")))
}

/// `new Highcharts.Chart({...});` style constructor call.
pub fn encode_javascript(document: &Document, chart_type: ChartType) -> ChartResult<String> {
    let json = encode_json(document)?;
    Ok(format!("new {}({json});", chart_type.constructor()))
}

pub(super) fn encode(
    document: Document,
    output_type: OutputType,
    chart_type: ChartType,
) -> ChartResult<ChartOutput> {
    match output_type {
        OutputType::Dict => Ok(ChartOutput::Document(document)),
        OutputType::Json => encode_json(&document).map(ChartOutput::Text),
        OutputType::Javascript => encode_javascript(&document, chart_type).map(ChartOutput::Text),
    }
}
