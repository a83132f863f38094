//! Visibility filter.

use crate::config::ExtractConfig;
use crate::element::{ComputedStyleSource, Rect};
use crate::model::round_half_up;

/// Whether an element is a candidate for inclusion.
///
/// Sizes are compared after rounding. A NaN dimension is invisible.
pub fn is_visible<S: ComputedStyleSource>(rect: &Rect, style: &S, config: &ExtractConfig) -> bool {
    let width = round_half_up(rect.width);
    let height = round_half_up(rect.height);

    if !(width >= config.min_visible_size && height >= config.min_visible_size) {
        return false;
    }

    if style.get("display") == Some("none") {
        return false;
    }

    style.get("visibility") != Some("hidden")
}
