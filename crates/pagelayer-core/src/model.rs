//! Output data model: layout nodes, bounds, attributes, viewport.

use serde::{Deserialize, Serialize};

use crate::element::{LiveElement, Rect};
use crate::error::ElementError;
use crate::style::StyleRecord;

/// Viewport size measured after layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Window inner width in pixels.
    pub width: u32,
    /// Window inner height in pixels.
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

/// Integer element bounds, viewport-relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Bounds {
    /// Round a layout rectangle the way `Math.round` does.
    pub fn from_rect(rect: &Rect) -> Self {
        Self {
            x: round_half_up(rect.x) as i64,
            y: round_half_up(rect.y) as i64,
            width: round_half_up(rect.width) as i64,
            height: round_half_up(rect.height) as i64,
        }
    }
}

/// Round to nearest, ties toward positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    // `value + 0.5` can round up before flooring; the fractional part is exact.
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Attributes carried over from the element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeAttributes {
    /// Element ID attribute.
    pub id: Option<String>,
    /// Raw `class` attribute.
    pub class_name: Option<String>,
    /// Src for images/iframes.
    pub src: Option<String>,
    /// Alt text.
    pub alt: Option<String>,
    /// Href for links.
    pub href: Option<String>,
    /// Type attribute.
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    /// Placeholder text.
    pub placeholder: Option<String>,
}

impl NodeAttributes {
    /// Read the supported attribute subset from an element.
    pub fn read<E: LiveElement>(element: &E) -> Result<Self, ElementError> {
        Ok(Self {
            id: element.attribute("id")?,
            class_name: element.attribute("class")?,
            src: element.attribute("src")?,
            alt: element.attribute("alt")?,
            href: element.attribute("href")?,
            r#type: element.attribute("type")?,
            placeholder: element.attribute("placeholder")?,
        })
    }
}

/// One visible element that survived pruning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    /// Tag name (lowercase).
    pub tag: String,

    /// Sanitized text owned directly by this element.
    pub text: String,

    /// Rounded bounding box.
    pub bounds: Bounds,

    /// Normalized computed style.
    pub style: StyleRecord,

    pub attributes: NodeAttributes,

    /// Retained children in document order.
    #[serde(default)]
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(LayoutNode::node_count).sum::<usize>()
    }

    /// Levels below this node; a leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// The sole output artifact of an extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Pruned tree rooted at `body`, or `None` when `body` itself was pruned.
    pub elements: Option<LayoutNode>,

    pub viewport: Viewport,

    /// Element count of the unpruned document, for diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<u64>,
}

impl ExtractionResult {
    /// Number of retained nodes.
    pub fn node_count(&self) -> usize {
        self.elements.as_ref().map_or(0, LayoutNode::node_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_matches_math_round() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn test_round_half_up_precision_edges() {
        // Largest double below 0.5 rounds down, as Math.round does.
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(-0.49999999999999994), 0.0);
        // Odd integers above 2^52 are already whole.
        let big = 4_503_599_627_370_497.0;
        assert_eq!(round_half_up(big), big);
        assert_eq!(round_half_up(-big), -big);
        assert!(round_half_up(f64::NAN).is_nan());
    }

    #[test]
    fn test_bounds_from_rect() {
        let bounds = Bounds::from_rect(&Rect::new(10.4, 19.5, 49.6, 50.0));
        assert_eq!(
            bounds,
            Bounds {
                x: 10,
                y: 20,
                width: 50,
                height: 50
            }
        );
    }

    #[test]
    fn test_attributes_serialize_camel_case() {
        let attrs = NodeAttributes {
            class_name: Some("btn primary".into()),
            r#type: Some("submit".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&attrs).unwrap();
        assert_eq!(json["className"], "btn primary");
        assert_eq!(json["type"], "submit");
        assert!(json["id"].is_null());
    }

    #[test]
    fn test_result_without_root_serializes_null() {
        let result = ExtractionResult {
            elements: None,
            viewport: Viewport::new(1280, 800),
            total_elements: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["elements"].is_null());
        assert_eq!(json["viewport"]["width"], 1280);
        assert!(json.get("totalElements").is_none());
        assert_eq!(result.node_count(), 0);
    }
}
