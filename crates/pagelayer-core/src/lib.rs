//! Layout tree extraction for rendered HTML documents.
//!
//! Walks the rendered element tree from `body`, filters invisible and
//! non-content elements, normalizes computed style, and prunes nodes that
//! carry no content.
//!
//! The core is synchronous and independent of any browser binding: any
//! host that implements [`LiveElement`] can be walked. [`DocumentSnapshot`]
//! is the serialized form captured from a remote browser.

pub mod config;
pub mod element;
pub mod error;
pub mod extractor;
pub mod model;
pub mod pruner;
pub mod sanitizer;
pub mod snapshot;
pub mod style;
pub mod visibility;
pub mod walker;

#[cfg(test)]
mod fixtures;

pub use config::ExtractConfig;
pub use element::{ComputedStyleSource, LiveElement, Rect};
pub use error::{ElementError, ExtractError};
pub use extractor::{assemble, Extractor};
pub use model::{Bounds, ExtractionResult, LayoutNode, NodeAttributes, Viewport};
pub use pruner::TreePruner;
pub use sanitizer::{extract_text, sanitize};
pub use snapshot::{DocumentSnapshot, ElementSnapshot, StyleMap};
pub use style::{parse_leading_number, StyleNormalizer, StyleRecord, STYLE_PROPERTIES};
pub use visibility::is_visible;
pub use walker::DocumentWalker;
