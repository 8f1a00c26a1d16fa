//! frame-highcharts: turn an indexed table into a Highcharts configuration.
//!
//! A [`core::Table`] plus [`SerializeOptions`] go through a fixed sequence of
//! field stages, each owning one top-level key of the output document. The
//! result is returned as a JSON document, JSON text, or a ready-to-embed
//! `new Highcharts.Chart(...)` call.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartOutput, ChartType, Document, OutputType, SerializeOptions, serialize};
pub use error::{ChartError, ChartResult};
