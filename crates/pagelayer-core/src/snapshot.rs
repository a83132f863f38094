//! Materialized element trees.
//!
//! A host that cannot hand out live handles (for example a remote browser
//! over CDP) serializes the element facts the extractor needs in one round
//! trip. The snapshot then answers [`LiveElement`] queries from memory.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::element::{ComputedStyleSource, LiveElement, Rect};
use crate::error::ElementError;
use crate::model::Viewport;

/// Computed style values keyed by kebab-case property name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(pub HashMap<String, String>);

impl ComputedStyleSource for StyleMap {
    fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }
}

impl FromIterator<(String, String)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One element as captured by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSnapshot {
    pub tag: String,

    #[serde(default)]
    pub rect: Rect,

    #[serde(default)]
    pub style: StyleMap,

    /// Raw attributes; only the names the extractor reads need be present.
    #[serde(default)]
    pub attributes: HashMap<String, String>,

    #[serde(default)]
    pub direct_text: String,

    #[serde(default)]
    pub rendered_text: String,

    #[serde(default)]
    pub children: Vec<ElementSnapshot>,

    /// Set when the host failed to read this element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ElementSnapshot {
    fn readable(&self) -> Result<(), ElementError> {
        match &self.error {
            Some(reason) => Err(ElementError::unreadable(self.tag.to_ascii_lowercase(), reason.clone())),
            None => Ok(()),
        }
    }
}

impl<'a> LiveElement for &'a ElementSnapshot {
    type Style = &'a StyleMap;

    fn tag(&self) -> Result<String, ElementError> {
        Ok(self.tag.clone())
    }

    fn bounding_rect(&self) -> Result<Rect, ElementError> {
        self.readable()?;
        Ok(self.rect)
    }

    fn computed_style(&self) -> Result<Self::Style, ElementError> {
        let this: &'a ElementSnapshot = *self;
        this.readable()?;
        Ok(&this.style)
    }

    fn attribute(&self, name: &str) -> Result<Option<String>, ElementError> {
        self.readable()?;
        Ok(self.attributes.get(name).cloned())
    }

    fn direct_text(&self) -> Result<String, ElementError> {
        self.readable()?;
        Ok(self.direct_text.clone())
    }

    fn rendered_text(&self) -> Result<String, ElementError> {
        self.readable()?;
        Ok(self.rendered_text.clone())
    }

    fn element_children(&self) -> Result<Vec<Self>, ElementError> {
        let this: &'a ElementSnapshot = *self;
        this.readable()?;
        Ok(this.children.iter().collect())
    }
}

/// Everything captured from one rendered document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSnapshot {
    /// The `body` element, absent for documents without one.
    pub body: Option<ElementSnapshot>,

    pub viewport: Viewport,

    #[serde(default)]
    pub total_elements: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_snapshot() {
        let json = r#"{
            "body": {
                "tag": "BODY",
                "rect": {"x": 0, "y": 0, "width": 1280, "height": 300.5},
                "style": {"display": "block", "font-size": "16px"},
                "attributes": {"class": "page"},
                "directText": "",
                "renderedText": "Hi",
                "children": [{"tag": "P", "rect": {"x": 20, "y": 20, "width": 100, "height": 18}}]
            },
            "viewport": {"width": 1280, "height": 800},
            "totalElements": 5
        }"#;
        let doc: DocumentSnapshot = serde_json::from_str(json).unwrap();
        let body = doc.body.unwrap();
        assert_eq!(body.tag, "BODY");
        assert_eq!(body.rect.height, 300.5);
        assert_eq!(body.style.get("font-size"), Some("16px"));
        assert_eq!(body.children.len(), 1);
        assert!(body.children[0].style.0.is_empty());
        assert_eq!(doc.viewport, Viewport::new(1280, 800));
        assert_eq!(doc.total_elements, Some(5));
    }

    #[test]
    fn test_live_element_reads() {
        let mut node = ElementSnapshot {
            tag: "IMG".into(),
            rect: Rect::new(1.0, 2.0, 3.0, 4.0),
            ..Default::default()
        };
        node.attributes.insert("src".into(), "x.png".into());

        let handle = &node;
        assert_eq!(handle.tag().unwrap(), "IMG");
        assert_eq!(handle.bounding_rect().unwrap().width, 3.0);
        assert_eq!(handle.attribute("src").unwrap().as_deref(), Some("x.png"));
        assert_eq!(handle.attribute("alt").unwrap(), None);
        assert!(handle.element_children().unwrap().is_empty());
    }

    #[test]
    fn test_host_error_surfaces_on_read() {
        let node = ElementSnapshot {
            tag: "DIV".into(),
            error: Some("node detached during snapshot".into()),
            ..Default::default()
        };
        let handle = &node;
        assert!(handle.tag().is_ok());
        let err = handle.bounding_rect().unwrap_err();
        assert!(err.to_string().contains("node detached"));
    }
}
