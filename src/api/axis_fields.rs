use serde_json::{Map, Number, Value, json};

use crate::core::{ColumnKind, Table};

use super::{Document, SerializeOptions};

/// Writes `xAxis` from the index and the x-axis options.
///
/// Categorical indexes, and every index on area charts, are emitted as
/// `categories`; sorting them follows `sort_columns` so they line up with
/// the sorted series rows.
pub(super) fn serialize_x_axis(table: &Table, options: &SerializeOptions, output: &mut Document) {
    let index = table.index();
    let mut axis = Map::new();

    if let Some(name) = index.name.as_deref().filter(|name| !name.is_empty()) {
        axis.insert("title".to_owned(), json!({ "text": name }));
    }
    if index.kind() == ColumnKind::Datetime {
        axis.insert("type".to_owned(), json!("datetime"));
    }
    if index.kind() == ColumnKind::Categorical || options.kind.as_deref() == Some("area") {
        let categories = if options.sort_columns {
            index.values.sorted().to_json_values()
        } else {
            index.values.to_json_values()
        };
        axis.insert("categories".to_owned(), Value::Array(categories));
    }

    apply_axis_options(
        &mut axis,
        options,
        options.loglog || options.logx,
        options.xlim.as_ref(),
        options.xticks.as_deref(),
    );
    output.insert("xAxis".to_owned(), Value::Object(axis));
}

/// Writes `yAxis` as a list holding the primary axis and, when any column is
/// plotted on the secondary axis, an `opposite` axis built from the `*2`
/// overrides.
pub(super) fn serialize_y_axis(options: &SerializeOptions, output: &mut Document) {
    let mut axes = vec![Value::Object(y_axis_config(options))];
    if options.has_secondary_axis() {
        let mut secondary = y_axis_config(&options.secondary_axis_options());
        secondary.insert("opposite".to_owned(), Value::Bool(true));
        axes.push(Value::Object(secondary));
    }
    output.insert("yAxis".to_owned(), Value::Array(axes));
}

fn y_axis_config(options: &SerializeOptions) -> Map<String, Value> {
    let mut axis = Map::new();
    apply_axis_options(
        &mut axis,
        options,
        options.loglog || options.logy,
        options.ylim.as_ref(),
        options.yticks.as_deref(),
    );
    let label = options.ylabel.as_deref().unwrap_or_default();
    axis.insert("title".to_owned(), json!({ "text": label }));
    axis
}

fn apply_axis_options(
    axis: &mut Map<String, Value>,
    options: &SerializeOptions,
    logarithmic: bool,
    limits: Option<&(Number, Number)>,
    ticks: Option<&[Number]>,
) {
    if options.grid {
        axis.insert("gridLineWidth".to_owned(), json!(1));
        axis.insert("gridLineDashStyle".to_owned(), json!("Dot"));
    }
    if logarithmic {
        axis.insert("type".to_owned(), json!("logarithmic"));
    }
    if let Some((min, max)) = limits {
        axis.insert("min".to_owned(), Value::Number(min.clone()));
        axis.insert("max".to_owned(), Value::Number(max.clone()));
    }
    if let Some(rotation) = options.rot {
        axis.insert("labels".to_owned(), json!({ "rotation": rotation }));
    }
    if let Some(fontsize) = &options.fontsize {
        let labels = axis
            .entry("labels")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Some(labels) = labels.as_object_mut() {
            labels.insert("style".to_owned(), json!({ "fontSize": fontsize }));
        }
    }
    if let Some(ticks) = ticks {
        axis.insert("tickPositions".to_owned(), json!(ticks));
    }
}
