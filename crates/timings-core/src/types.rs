// File: crates/timings-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, font sizes).

/// Default surface width in pixels (10in figure at 100 dpi).
pub const WIDTH: i32 = 1000;
/// Default surface height in pixels (6in figure at 100 dpi).
pub const HEIGHT: i32 = 600;

/// Font sizes in pixels.
pub const TITLE_SIZE: f32 = 16.0;
pub const LABEL_SIZE: f32 = 14.0;
pub const TICK_SIZE: f32 = 12.0;
pub const LEGEND_SIZE: f32 = 12.0;

/// Outer padding kept around all decorations by the tight layout.
pub const PAD: u32 = 8;
/// Length of tick marks outside the plot frame.
pub const TICK_LEN: f32 = 4.0;
/// Marker radius for scatter dots.
pub const MARKER_RADIUS: f32 = 4.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 40, 96)
    }
}
