use frame_highcharts::SerializeOptions;
use frame_highcharts::api::FontSize;
use serde_json::{Number, json};

#[test]
fn defaults_match_documented_values() {
    let options = SerializeOptions::default();
    assert!(options.use_index);
    assert!(options.mark_right);
    assert!(!options.sort_columns);
    assert!(!options.polar);
    assert!(options.secondary_y.is_empty());
    assert!(options.kind.is_none());
    assert!(options.output_fun.is_none());
}

#[test]
fn options_json_roundtrip() {
    let options = SerializeOptions::new()
        .with_kind("line")
        .with_figsize(640, 480)
        .with_secondary_y(["b"])
        .with_color("a", "#123456")
        .with_ylim(0, Number::from_f64(2.5).expect("finite"))
        .with_fontsize(FontSize::Css("11px".to_owned()))
        .with_tooltip(json!({ "shared": true }));

    let json = options.to_json_pretty().expect("serialize options");
    let restored = SerializeOptions::from_json_str(&json).expect("parse options");

    assert_eq!(restored.kind.as_deref(), Some("line"));
    assert_eq!(restored.figsize, Some((640, 480)));
    assert_eq!(restored.secondary_y, vec!["b".to_owned()]);
    assert_eq!(
        restored.color.as_ref().and_then(|c| c.get("a")).map(String::as_str),
        Some("#123456")
    );
    assert_eq!(
        restored.ylim,
        Some((Number::from(0), Number::from_f64(2.5).expect("finite")))
    );
    assert_eq!(restored.fontsize, Some(FontSize::Css("11px".to_owned())));
    assert_eq!(restored.tooltip, Some(json!({ "shared": true })));
}

#[test]
fn partial_json_uses_defaults_and_ignores_unknown_keys() {
    let input = r#"{ "kind": "bar", "fontsize": 12, "future_option": [1, 2, 3] }"#;
    let options = SerializeOptions::from_json_str(input).expect("parse options");
    assert_eq!(options.kind.as_deref(), Some("bar"));
    assert_eq!(options.fontsize, Some(FontSize::pixels(12)));
    assert!(options.use_index);
    assert!(options.mark_right);
}

#[test]
fn fractional_fontsize_and_widths_parse_from_json() {
    let input = r#"{ "fontsize": 10.5, "linewidth": { "a": 1.5, "b": 3 } }"#;
    let options = SerializeOptions::from_json_str(input).expect("parse options");
    assert_eq!(
        options.fontsize,
        Some(FontSize::Pixels(Number::from_f64(10.5).expect("finite")))
    );
    let widths = options.linewidth.expect("widths");
    assert_eq!(widths["a"].as_f64(), Some(1.5));
    assert_eq!(widths["b"], Number::from(3));

    let json = SerializeOptions::new()
        .with_fontsize(FontSize::pixels(12))
        .to_json_pretty()
        .expect("serialize options");
    assert!(json.contains("\"fontsize\": 12,"));
}

#[test]
fn malformed_json_is_reported_as_invalid_data() {
    let err = SerializeOptions::from_json_str("{ not json").expect_err("must fail");
    assert!(err.to_string().starts_with("invalid data: failed to parse options"));
}

#[test]
fn secondary_axis_options_replace_primary_only_keys() {
    let options = SerializeOptions::new()
        .with_grid(true)
        .with_fontsize(FontSize::pixels(10))
        .with_ylim(0, 1)
        .with_rot(90)
        .with_yticks([0, 1])
        .with_ylabel("left")
        .with_loglog(true)
        .with_logy(true)
        .with_ylabel2("right")
        .with_logy2(true);

    let secondary = options.secondary_axis_options();
    assert!(secondary.grid);
    assert_eq!(secondary.fontsize, Some(FontSize::pixels(10)));
    assert_eq!(secondary.ylim, None);
    assert_eq!(secondary.rot, None);
    assert_eq!(secondary.yticks, None);
    assert_eq!(secondary.ylabel.as_deref(), Some("right"));
    assert!(!secondary.loglog);
    assert!(secondary.logy);
}

#[test]
fn debug_format_hides_output_fun() {
    let options = SerializeOptions::new().with_output_fun(|document| document);
    let rendered = format!("{options:?}");
    assert!(rendered.contains("output_fun: Some(\"<fn>\")"));
}
