// File: crates/timings-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the category (X) and value (Y) axes.

use crate::axis::Axis;
use crate::geometry::RectI32;

/// Maps the domain `[d0, d1]` onto the pixel range `[p0, p1]`.
/// Pixel ranges may be inverted (Y grows downwards on screen).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub p0: f32,
    pub p1: f32,
}

impl LinearScale {
    pub fn new(d0: f64, d1: f64, p0: f32, p1: f32) -> Self {
        Self { d0, d1, p0, p1 }
    }

    /// Horizontal scale for `axis` across the plot rect.
    pub fn horizontal(axis: &Axis, rect: &RectI32) -> Self {
        Self::new(axis.min, axis.max, rect.left as f32, rect.right as f32)
    }

    /// Vertical scale for `axis`; `axis.min` sits on the bottom edge.
    pub fn vertical(axis: &Axis, rect: &RectI32) -> Self {
        Self::new(axis.min, axis.max, rect.bottom as f32, rect.top as f32)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = (self.d1 - self.d0).max(1e-12);
        self.p0 + ((v - self.d0) / span) as f32 * (self.p1 - self.p0)
    }
}
