use chrono::{TimeZone, Utc};
use frame_highcharts::SerializeOptions;
use frame_highcharts::api::{FontSize, serialize_to_document};
use frame_highcharts::core::{Column, Index, Table};
use serde_json::{Number, Value, json};

fn numeric_table() -> Table {
    Table::new(
        Index::new(vec![1_i64, 2, 3]),
        vec![Column::new("a", vec![1.0, 2.0, 3.0])],
    )
    .expect("valid table")
}

fn x_axis(table: &Table, options: &SerializeOptions) -> Value {
    let document = serialize_to_document(table, options).expect("serialize");
    document.get("xAxis").cloned().expect("xAxis present")
}

fn y_axis(table: &Table, options: &SerializeOptions) -> Value {
    let document = serialize_to_document(table, options).expect("serialize");
    document.get("yAxis").cloned().expect("yAxis present")
}

#[test]
fn numeric_index_without_options_yields_empty_x_axis() {
    assert_eq!(x_axis(&numeric_table(), &SerializeOptions::default()), json!({}));
}

#[test]
fn named_index_becomes_x_axis_title() {
    let table = Table::new(
        Index::new(vec![1_i64, 2]).with_name("step"),
        vec![Column::new("a", vec![1_i64, 2])],
    )
    .expect("valid table");
    let axis = x_axis(&table, &SerializeOptions::default());
    assert_eq!(axis["title"], json!({ "text": "step" }));
}

#[test]
fn datetime_index_sets_datetime_type_without_categories() {
    let table = Table::new(
        Index::new(vec![
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap(),
        ]),
        vec![Column::new("a", vec![1_i64, 2])],
    )
    .expect("valid table");
    let axis = x_axis(&table, &SerializeOptions::default());
    assert_eq!(axis["type"], json!("datetime"));
    assert!(axis.get("categories").is_none());
}

#[test]
fn string_index_emits_categories_in_table_order() {
    let table = Table::new(
        Index::new(vec!["b", "c", "a"]),
        vec![Column::new("v", vec![1_i64, 2, 3])],
    )
    .expect("valid table");
    let axis = x_axis(&table, &SerializeOptions::default());
    assert_eq!(axis["categories"], json!(["b", "c", "a"]));
}

#[test]
fn sort_columns_sorts_categories() {
    let table = Table::new(
        Index::new(vec!["b", "c", "a"]),
        vec![Column::new("v", vec![1_i64, 2, 3])],
    )
    .expect("valid table");
    let options = SerializeOptions::new().with_sort_columns(true);
    let axis = x_axis(&table, &options);
    assert_eq!(axis["categories"], json!(["a", "b", "c"]));
}

#[test]
fn area_kind_forces_categories_for_numeric_index() {
    let options = SerializeOptions::new().with_kind("area");
    let axis = x_axis(&numeric_table(), &options);
    assert_eq!(axis["categories"], json!([1, 2, 3]));
}

#[test]
fn x_axis_styling_options_are_applied() {
    let options = SerializeOptions::new()
        .with_grid(true)
        .with_logx(true)
        .with_xlim(0, 10)
        .with_rot(45)
        .with_fontsize(FontSize::Css("14px".to_owned()))
        .with_xticks([0, 5, 10]);
    let axis = x_axis(&numeric_table(), &options);
    assert_eq!(
        axis,
        json!({
            "gridLineWidth": 1,
            "gridLineDashStyle": "Dot",
            "type": "logarithmic",
            "min": 0,
            "max": 10,
            "labels": { "rotation": 45, "style": { "fontSize": "14px" } },
            "tickPositions": [0, 5, 10],
        })
    );
}

#[test]
fn fontsize_alone_creates_labels_style() {
    let options = SerializeOptions::new().with_fontsize(FontSize::pixels(9));
    let axis = x_axis(&numeric_table(), &options);
    assert_eq!(axis["labels"], json!({ "style": { "fontSize": 9 } }));
}

#[test]
fn fractional_limits_and_fontsize_keep_their_value() {
    let half = Number::from_f64(10.5).expect("finite");
    let options = SerializeOptions::new()
        .with_xlim(Number::from_f64(-0.5).expect("finite"), 2)
        .with_fontsize(FontSize::Pixels(half));
    let axis = x_axis(&numeric_table(), &options);
    assert_eq!(axis["min"], json!(-0.5));
    assert_eq!(axis["max"], json!(2));
    assert!(axis["max"].is_u64());
    assert_eq!(axis["labels"], json!({ "style": { "fontSize": 10.5 } }));
}

#[test]
fn loglog_applies_to_both_axes() {
    let options = SerializeOptions::new().with_loglog(true);
    assert_eq!(x_axis(&numeric_table(), &options)["type"], json!("logarithmic"));
    assert_eq!(y_axis(&numeric_table(), &options)[0]["type"], json!("logarithmic"));
}

#[test]
fn primary_y_axis_always_has_title() {
    let axes = y_axis(&numeric_table(), &SerializeOptions::default());
    assert_eq!(axes, json!([{ "title": { "text": "" } }]));

    let options = SerializeOptions::new()
        .with_ylabel("price")
        .with_ylim(-1, 1)
        .with_yticks([-1, 0, 1]);
    let axes = y_axis(&numeric_table(), &options);
    assert_eq!(
        axes,
        json!([{
            "min": -1,
            "max": 1,
            "tickPositions": [-1, 0, 1],
            "title": { "text": "price" },
        }])
    );
}

#[test]
fn secondary_axis_uses_suffixed_overrides() {
    let options = SerializeOptions::new()
        .with_secondary_y(["a"])
        .with_grid(true)
        .with_ylabel("left")
        .with_ylim(0, 1)
        .with_rot(30)
        .with_logy(true)
        .with_ylabel2("right")
        .with_ylim2(10, 20);
    let axes = y_axis(&numeric_table(), &options);
    let axes = axes.as_array().expect("axis list");
    assert_eq!(axes.len(), 2);

    assert_eq!(axes[0]["title"], json!({ "text": "left" }));
    assert_eq!(axes[0]["type"], json!("logarithmic"));
    assert_eq!(axes[0]["labels"], json!({ "rotation": 30 }));

    assert_eq!(
        axes[1],
        json!({
            "gridLineWidth": 1,
            "gridLineDashStyle": "Dot",
            "min": 10,
            "max": 20,
            "title": { "text": "right" },
            "opposite": true,
        })
    );
}

#[test]
fn empty_secondary_list_keeps_single_axis() {
    let options = SerializeOptions::new().with_secondary_y(Vec::<String>::new());
    let axes = y_axis(&numeric_table(), &options);
    assert_eq!(axes.as_array().map(Vec::len), Some(1));
}
