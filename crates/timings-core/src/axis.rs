// File: crates/timings-core/src/axis.rs
// Summary: Axis model with labels, ranges, explicit (categorical) ticks and a forced lower bound.

use crate::grid::{format_tick, nice_step, nice_ticks};

/// A tick placed at `position` (axis units) and drawn with `label`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

impl Tick {
    pub fn new(position: f64, label: impl Into<String>) -> Self {
        Self { position, label: label.into() }
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// Explicit ticks. Empty means numeric ticks are generated from `min..max`.
    pub ticks: Vec<Tick>,
    /// Tick label rotation in degrees, counter-clockwise.
    pub tick_rotation: f32,
    /// Lower bound that autoscaling must keep.
    pub bottom: Option<f64>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            ticks: Vec::new(),
            tick_rotation: 0.0,
            bottom: None,
        }
    }

    pub fn default_x() -> Self {
        Self::new("Words", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("Time (ms)", 0.0, 1.0)
    }

    /// Replace ticks with one tick per label at the matching position.
    pub fn set_ticks<S: Into<String>>(&mut self, positions: &[f64], labels: impl IntoIterator<Item = S>) {
        self.ticks = positions
            .iter()
            .zip(labels)
            .map(|(&p, l)| Tick::new(p, l))
            .collect();
    }

    pub fn tick_labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }
}

impl Axis {
    /// Ticks to draw: the explicit ones inside the range, or generated numeric ticks.
    pub fn tick_marks(&self, max_ticks: usize) -> Vec<Tick> {
        let (lo, hi) = (self.min.min(self.max), self.min.max(self.max));
        let eps = (hi - lo).abs() * 1e-9;
        if !self.ticks.is_empty() {
            return self
                .ticks
                .iter()
                .filter(|t| t.position >= lo - eps && t.position <= hi + eps)
                .cloned()
                .collect();
        }
        let step = nice_step(hi - lo, max_ticks);
        nice_ticks(lo, hi, max_ticks)
            .into_iter()
            .map(|v| Tick::new(v, format_tick(v, step)))
            .collect()
    }

    /// Whether tick labels are drawn reading bottom-to-top.
    pub fn vertical_tick_labels(&self) -> bool {
        self.tick_rotation.abs() >= 45.0
    }
}
