//! Host-facing element capabilities.
//!
//! The extractor never talks to a browser binding directly. Anything that can
//! answer the questions below for a rendered element can be walked: a CDP
//! snapshot, an in-process engine, or a test fixture.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ElementError;

/// Floating-point layout rectangle, viewport-relative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Resolved computed style values keyed by kebab-case property name.
pub trait ComputedStyleSource {
    /// Raw computed value, or `None` when the host did not supply it.
    fn get(&self, property: &str) -> Option<&str>;
}

impl<T: ComputedStyleSource + ?Sized> ComputedStyleSource for &T {
    fn get(&self, property: &str) -> Option<&str> {
        (**self).get(property)
    }
}

impl ComputedStyleSource for HashMap<String, String> {
    fn get(&self, property: &str) -> Option<&str> {
        HashMap::get(self, property).map(String::as_str)
    }
}

/// A handle to one rendered element.
///
/// Implementors are cheap handles (references, ids, reference-counted
/// nodes); `element_children` hands out handles of the same type.
pub trait LiveElement: Sized {
    type Style: ComputedStyleSource;

    /// Element type name in any case.
    fn tag(&self) -> Result<String, ElementError>;

    /// Border box from `getBoundingClientRect`.
    fn bounding_rect(&self) -> Result<Rect, ElementError>;

    fn computed_style(&self) -> Result<Self::Style, ElementError>;

    /// Raw DOM attribute by name (`class`, not `className`).
    fn attribute(&self, name: &str) -> Result<Option<String>, ElementError>;

    /// Concatenated text of direct text-node children, untrimmed.
    fn direct_text(&self) -> Result<String, ElementError>;

    /// Full rendered text including descendants (`innerText`).
    fn rendered_text(&self) -> Result<String, ElementError>;

    /// Direct element children in document order. Text nodes are excluded.
    fn element_children(&self) -> Result<Vec<Self>, ElementError>;
}
