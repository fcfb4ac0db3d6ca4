// File: crates/timings-core/src/series.rs
// Summary: Series model for per-word timing data (lines, scatter dots, or both).

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,        // connected polyline, no markers
    Scatter,     // markers only
    LineMarkers, // polyline with a marker at every point
}

impl SeriesType {
    pub fn draws_line(self) -> bool {
        matches!(self, SeriesType::Line | SeriesType::LineMarkers)
    }

    pub fn draws_markers(self) -> bool {
        matches!(self, SeriesType::Scatter | SeriesType::LineMarkers)
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    pub label: String,
    pub color: skia::Color,
    pub data_xy: Vec<(f64, f64)>, // (category position, value)
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self {
            series_type,
            label: String::new(),
            color: skia::Color::BLACK,
            data_xy: Vec::new(),
        }
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, ..Self::new(series_type) }
    }

    /// Pair `values` with the x positions at the same index.
    /// Contract: both slices have the same length.
    pub fn from_columns(series_type: SeriesType, xs: &[f64], values: &[f64]) -> Self {
        debug_assert_eq!(xs.len(), values.len());
        Self::with_data(series_type, xs.iter().copied().zip(values.iter().copied()).collect())
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    /// Y values in plotting order.
    pub fn values(&self) -> Vec<f64> {
        self.data_xy.iter().map(|&(_, y)| y).collect()
    }

    pub fn len(&self) -> usize { self.data_xy.len() }
    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }
}

/// (min, max) over the finite values, or `None` when there are none.
pub(crate) fn minmax(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
