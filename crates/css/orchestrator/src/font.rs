//! Font metrics used while resolving font-relative lengths.

use css_properties::FontData;

/// Supplies metrics for the font being assembled for an element.
pub trait FontMetricsProvider {
    /// Height of a lowercase `x` in pixels, used for `ex` units.
    fn x_height(&self, font: &FontData) -> f32;
}

/// Metrics without access to real fonts: the x-height is half the size.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproximateFontMetrics;

impl FontMetricsProvider for ApproximateFontMetrics {
    #[inline]
    fn x_height(&self, font: &FontData) -> f32 {
        font.computed_size * 0.5
    }
}
