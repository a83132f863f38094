//! Computed style normalization.
//!
//! Raw computed values are trusted as input. Lengths are reduced to their
//! leading number, everything else passes through as an opaque string with
//! the literal `none` mapped to the empty string.

use serde::{Deserialize, Serialize};

use crate::element::ComputedStyleSource;

/// Font size used when the computed value cannot be parsed.
pub const DEFAULT_FONT_SIZE: f64 = 14.0;

/// Every computed property the normalizer and visibility filter read.
///
/// Hosts that prefetch styles should fetch exactly these.
pub const STYLE_PROPERTIES: &[&str] = &[
    // Typography
    "font-family",
    "font-size",
    "font-weight",
    "font-style",
    "line-height",
    "text-align",
    "text-decoration",
    "text-transform",
    "letter-spacing",
    "color",
    // Background
    "background-color",
    "background-image",
    "background-size",
    "background-position",
    "background-repeat",
    // Box model
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    // Border
    "border-top-width",
    "border-right-width",
    "border-bottom-width",
    "border-left-width",
    "border-top-color",
    "border-right-color",
    "border-bottom-color",
    "border-left-color",
    "border-style",
    "border-top-left-radius",
    "border-top-right-radius",
    "border-bottom-right-radius",
    "border-bottom-left-radius",
    // Layout
    "display",
    "visibility",
    "position",
    "top",
    "right",
    "bottom",
    "left",
    "z-index",
    "flex-direction",
    "justify-content",
    "align-items",
    "flex-wrap",
    "gap",
    // Effects
    "box-shadow",
    "opacity",
    "transform",
    "filter",
    // Overflow
    "overflow",
    "overflow-x",
    "overflow-y",
];

/// Per-side pixel values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Per-side opaque color strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeColors {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

/// Per-corner radii in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corners {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: String,
    pub font_style: String,
    pub line_height: String,
    pub text_align: String,
    pub text_decoration: String,
    pub text_transform: String,
    pub letter_spacing: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    pub background_color: String,
    pub background_image: String,
    pub background_size: String,
    pub background_position: String,
    pub background_repeat: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    pub border_width: Edges,
    pub border_color: EdgeColors,
    pub border_style: String,
    pub border_radius: Corners,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub display: String,
    pub position: String,
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
    pub z_index: String,
    pub flex_direction: String,
    pub justify_content: String,
    pub align_items: String,
    pub flex_wrap: String,
    pub gap: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effects {
    pub box_shadow: String,
    pub opacity: f64,
    pub transform: String,
    pub filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overflow {
    pub overflow: String,
    pub overflow_x: String,
    pub overflow_y: String,
}

/// Normalized style of one element. Groups are flattened on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleRecord {
    #[serde(flatten)]
    pub typography: Typography,
    #[serde(flatten)]
    pub background: Background,
    pub padding: Edges,
    pub margin: Edges,
    #[serde(flatten)]
    pub border: Border,
    #[serde(flatten)]
    pub layout: Layout,
    #[serde(flatten)]
    pub effects: Effects,
    #[serde(flatten)]
    pub overflow: Overflow,
}

/// Converts raw computed style into a [`StyleRecord`].
pub struct StyleNormalizer;

impl StyleNormalizer {
    pub fn normalize<S: ComputedStyleSource>(style: &S) -> StyleRecord {
        let read = Reader(style);

        StyleRecord {
            typography: Typography {
                font_family: read.text("font-family"),
                font_size: read.number_or("font-size", DEFAULT_FONT_SIZE),
                font_weight: read.text("font-weight"),
                font_style: read.text("font-style"),
                line_height: read.text("line-height"),
                text_align: read.text("text-align"),
                text_decoration: read.text("text-decoration"),
                text_transform: read.text("text-transform"),
                letter_spacing: read.text("letter-spacing"),
                color: read.text("color"),
            },
            background: Background {
                background_color: read.text("background-color"),
                background_image: read.text("background-image"),
                background_size: read.text("background-size"),
                background_position: read.text("background-position"),
                background_repeat: read.text("background-repeat"),
            },
            padding: read.edges("padding-{}"),
            margin: read.edges("margin-{}"),
            border: Border {
                border_width: read.edges("border-{}-width"),
                border_color: EdgeColors {
                    top: read.text("border-top-color"),
                    right: read.text("border-right-color"),
                    bottom: read.text("border-bottom-color"),
                    left: read.text("border-left-color"),
                },
                border_style: read.text("border-style"),
                border_radius: Corners {
                    top_left: read.number("border-top-left-radius"),
                    top_right: read.number("border-top-right-radius"),
                    bottom_right: read.number("border-bottom-right-radius"),
                    bottom_left: read.number("border-bottom-left-radius"),
                },
            },
            layout: Layout {
                display: read.text("display"),
                position: read.text("position"),
                top: read.text("top"),
                right: read.text("right"),
                bottom: read.text("bottom"),
                left: read.text("left"),
                z_index: read.text("z-index"),
                flex_direction: read.text("flex-direction"),
                justify_content: read.text("justify-content"),
                align_items: read.text("align-items"),
                flex_wrap: read.text("flex-wrap"),
                gap: read.text("gap"),
            },
            effects: Effects {
                box_shadow: read.text("box-shadow"),
                opacity: read.number("opacity"),
                transform: read.text("transform"),
                filter: read.text("filter"),
            },
            overflow: Overflow {
                overflow: read.text("overflow"),
                overflow_x: read.text("overflow-x"),
                overflow_y: read.text("overflow-y"),
            },
        }
    }
}

struct Reader<'s, S>(&'s S);

impl<S: ComputedStyleSource> Reader<'_, S> {
    /// Opaque string; `none` and missing both become `""`.
    fn text(&self, property: &str) -> String {
        match self.0.get(property) {
            None | Some("none") => String::new(),
            Some(value) => value.to_string(),
        }
    }

    fn number(&self, property: &str) -> f64 {
        self.number_or(property, 0.0)
    }

    fn number_or(&self, property: &str, fallback: f64) -> f64 {
        self.0
            .get(property)
            .and_then(parse_leading_number)
            .unwrap_or(fallback)
    }

    /// `pattern` holds one `{}` replaced by each side name.
    fn edges(&self, pattern: &str) -> Edges {
        let side = |name: &str| self.number(&pattern.replace("{}", name));
        Edges {
            top: side("top"),
            right: side("right"),
            bottom: side("bottom"),
            left: side("left"),
        }
    }
}

/// Parse the leading numeric portion of a dimensioned value, like
/// JavaScript's `parseFloat`. Non-finite results count as failures.
pub fn parse_leading_number(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
