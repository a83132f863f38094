//! Snapshot builders for tests.

use crate::element::Rect;
use crate::snapshot::ElementSnapshot;

/// A visible 100x20 block element at the origin.
pub(crate) fn el(tag: &str) -> ElementSnapshot {
    ElementSnapshot {
        tag: tag.to_ascii_uppercase(),
        rect: Rect::new(0.0, 0.0, 100.0, 20.0),
        style: [
            ("display", "block"),
            ("visibility", "visible"),
            ("font-size", "16px"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect(),
        ..Default::default()
    }
}

impl ElementSnapshot {
    pub(crate) fn rect(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.rect = Rect::new(x, y, width, height);
        self
    }

    pub(crate) fn css(mut self, property: &str, value: &str) -> Self {
        self.style.0.insert(property.to_string(), value.to_string());
        self
    }

    pub(crate) fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    /// Direct text; also becomes the rendered text unless set separately.
    pub(crate) fn text(mut self, text: &str) -> Self {
        self.direct_text = text.to_string();
        if self.rendered_text.is_empty() {
            self.rendered_text = text.to_string();
        }
        self
    }

    pub(crate) fn inner_text(mut self, text: &str) -> Self {
        self.rendered_text = text.to_string();
        self
    }

    pub(crate) fn child(mut self, child: ElementSnapshot) -> Self {
        self.children.push(child);
        self
    }

    pub(crate) fn failing(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

/// `depth` nested divs with a text leaf at the bottom.
pub(crate) fn nested(depth: usize, leaf_text: &str) -> ElementSnapshot {
    let mut node = el("span").text(leaf_text);
    for _ in 0..depth {
        node = el("div").child(node);
    }
    node
}
