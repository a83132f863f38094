use std::collections::HashMap;

use super::*;

fn style(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_parse_leading_number() {
    assert_eq!(parse_leading_number("12px"), Some(12.0));
    assert_eq!(parse_leading_number("  -3.5em"), Some(-3.5));
    assert_eq!(parse_leading_number(".5"), Some(0.5));
    assert_eq!(parse_leading_number("1e2px"), Some(100.0));
    assert_eq!(parse_leading_number("2em"), Some(2.0));
    assert_eq!(parse_leading_number("+7"), Some(7.0));
    assert_eq!(parse_leading_number("0.75"), Some(0.75));
}

#[test]
fn test_parse_leading_number_failures() {
    assert_eq!(parse_leading_number("auto"), None);
    assert_eq!(parse_leading_number(""), None);
    assert_eq!(parse_leading_number("-"), None);
    assert_eq!(parse_leading_number(".px"), None);
    assert_eq!(parse_leading_number("normal"), None);
}

#[test]
fn test_font_size_fallback_is_14() {
    let record = StyleNormalizer::normalize(&style(&[("font-size", "inherit")]));
    assert_eq!(record.typography.font_size, DEFAULT_FONT_SIZE);

    let record = StyleNormalizer::normalize(&style(&[]));
    assert_eq!(record.typography.font_size, 14.0);

    let record = StyleNormalizer::normalize(&style(&[("font-size", "18px")]));
    assert_eq!(record.typography.font_size, 18.0);
}

#[test]
fn test_other_numbers_fall_back_to_zero() {
    let record = StyleNormalizer::normalize(&style(&[
        ("padding-top", "auto"),
        ("margin-left", "garbage"),
        ("border-top-left-radius", ""),
        ("opacity", "x"),
    ]));
    assert_eq!(record.padding.top, 0.0);
    assert_eq!(record.margin.left, 0.0);
    assert_eq!(record.border.border_radius.top_left, 0.0);
    assert_eq!(record.effects.opacity, 0.0);
}

#[test]
fn test_box_model_sides_are_independent() {
    let record = StyleNormalizer::normalize(&style(&[
        ("padding-top", "1px"),
        ("padding-right", "2px"),
        ("padding-bottom", "3px"),
        ("padding-left", "4px"),
        ("margin-top", "5px"),
        ("margin-bottom", "-6px"),
        ("border-left-width", "2px"),
        ("border-top-right-radius", "8px"),
        ("border-bottom-left-radius", "50%"),
    ]));
    assert_eq!(
        record.padding,
        Edges {
            top: 1.0,
            right: 2.0,
            bottom: 3.0,
            left: 4.0
        }
    );
    assert_eq!(record.margin.top, 5.0);
    assert_eq!(record.margin.bottom, -6.0);
    assert_eq!(record.margin.right, 0.0);
    assert_eq!(record.border.border_width.left, 2.0);
    assert_eq!(record.border.border_width.top, 0.0);
    assert_eq!(record.border.border_radius.top_right, 8.0);
    assert_eq!(record.border.border_radius.bottom_left, 50.0);
}

#[test]
fn test_none_becomes_empty_for_every_string_field() {
    let record = StyleNormalizer::normalize(&style(&[
        ("background-image", "none"),
        ("box-shadow", "none"),
        ("transform", "none"),
        ("filter", "none"),
        ("text-transform", "none"),
        ("border-style", "none"),
        ("color", "rgb(0, 0, 0)"),
    ]));
    assert_eq!(record.background.background_image, "");
    assert_eq!(record.effects.box_shadow, "");
    assert_eq!(record.effects.transform, "");
    assert_eq!(record.effects.filter, "");
    assert_eq!(record.typography.text_transform, "");
    assert_eq!(record.border.border_style, "");
    assert_eq!(record.typography.color, "rgb(0, 0, 0)");
}

#[test]
fn test_opaque_values_pass_through() {
    let record = StyleNormalizer::normalize(&style(&[
        ("background-image", "url(\"a.png\"), linear-gradient(red, blue)"),
        ("z-index", "auto"),
        ("top", "10px"),
        ("line-height", "normal"),
        ("font-weight", "700"),
    ]));
    assert_eq!(
        record.background.background_image,
        "url(\"a.png\"), linear-gradient(red, blue)"
    );
    assert_eq!(record.layout.z_index, "auto");
    assert_eq!(record.layout.top, "10px");
    assert_eq!(record.typography.line_height, "normal");
    assert_eq!(record.typography.font_weight, "700");
}

#[test]
fn test_record_serializes_flat_camel_case() {
    let record = StyleNormalizer::normalize(&style(&[
        ("font-size", "16px"),
        ("background-color", "red"),
        ("border-top-color", "blue"),
        ("overflow-x", "hidden"),
    ]));
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["fontSize"], 16.0);
    assert_eq!(json["backgroundColor"], "red");
    assert_eq!(json["borderColor"]["top"], "blue");
    assert_eq!(json["overflowX"], "hidden");
    assert_eq!(json["padding"]["left"], 0.0);
    assert!(json["borderRadius"].get("topLeft").is_some());
    assert!(json.get("typography").is_none());
}

#[test]
fn test_style_properties_cover_visibility_inputs() {
    assert!(STYLE_PROPERTIES.contains(&"display"));
    assert!(STYLE_PROPERTIES.contains(&"visibility"));
    assert!(STYLE_PROPERTIES.contains(&"font-size"));
}
