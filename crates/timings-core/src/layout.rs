// File: crates/timings-core/src/layout.rs
// Summary: Tight layout (margins sized from measured labels) and legend placement.

use crate::chart::{Chart, MAX_VALUE_TICKS};
use crate::geometry::{clamp, RectI32};
use crate::scale::LinearScale;
use crate::text::TextShaper;
use crate::types::{Insets, LABEL_SIZE, LEGEND_SIZE, MARKER_RADIUS, PAD, TICK_LEN, TICK_SIZE, TITLE_SIZE};

/// Gap between tick marks and tick labels, and between the title and the frame.
pub const TICK_GAP: f32 = 3.0;
/// Gap between tick labels and the axis label.
pub const LABEL_GAP: f32 = 6.0;
pub const LEGEND_PAD: f32 = 8.0;
/// Width of the line/marker sample in a legend row.
pub const LEGEND_SWATCH: f32 = 28.0;
const LEGEND_ROW_GAP: f32 = 4.0;
/// Smallest share of each surface dimension left for the plot area.
pub const MIN_PLOT_FRACTION: f32 = 0.3;

/// Margins that keep the title, axis labels and tick labels on the surface.
pub fn tight_insets(chart: &Chart, shaper: &TextShaper, width: i32, height: i32) -> Insets {
    let pad = PAD as f32;
    let x_ticks = chart.x_axis.tick_marks(MAX_VALUE_TICKS);
    let y_ticks = chart.y_axis.tick_marks(MAX_VALUE_TICKS);
    let vertical_x = chart.x_axis.vertical_tick_labels();

    let y_tick_w = y_ticks
        .iter()
        .map(|t| shaper.measure_width(&t.label, TICK_SIZE))
        .fold(0.0, f32::max);
    let x_tick_extent = x_ticks
        .iter()
        .map(|t| {
            let (w, h) = shaper.measure(&t.label, TICK_SIZE);
            if vertical_x { w } else { h }
        })
        .fold(0.0, f32::max);
    let tick_h = shaper.measure("0", TICK_SIZE).1;
    let axis_label = |s: &str| if s.is_empty() { 0.0 } else { shaper.measure(s, LABEL_SIZE).1 + LABEL_GAP };
    let title_h = if chart.title.is_empty() {
        0.0
    } else {
        shaper.measure(&chart.title, TITLE_SIZE).1 + TICK_GAP
    };

    let left = pad + axis_label(&chart.y_axis.label) + y_tick_w + TICK_GAP + TICK_LEN;
    let bottom = pad + axis_label(&chart.x_axis.label) + x_tick_extent + TICK_GAP + TICK_LEN;
    let top = pad + title_h.max(tick_h * 0.5);
    // horizontal tick labels overhang the right edge by half their width
    let right = pad
        + if vertical_x {
            tick_h * 0.5
        } else {
            x_ticks.last().map_or(0.0, |t| shaper.measure_width(&t.label, TICK_SIZE) * 0.5)
        };

    let (left, right) = fit(left, right, width as f32);
    let (top, bottom) = fit(top, bottom, height as f32);
    Insets::new(left, right, top, bottom)
}

/// Scale a pair of margins down so they leave `MIN_PLOT_FRACTION` of `total`.
/// Rounded margins never eat into that share.
fn fit(a: f32, b: f32, total: f32) -> (u32, u32) {
    let budget = (total.max(0.0) * (1.0 - MIN_PLOT_FRACTION)).floor();
    let (a, b) = (a.max(0.0).ceil(), b.max(0.0).ceil());
    let sum = a + b;
    if sum <= budget {
        return (a as u32, b as u32);
    }
    let k = clamp(budget / sum, 0.0, 1.0);
    ((a * k).floor() as u32, (b * k).floor() as u32)
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Index into `Chart::series`.
    pub series: usize,
    pub row_center: f32,
    pub text_height: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendLayout {
    pub frame: RectI32,
    pub entries: Vec<LegendEntry>,
}

/// Legend box for every labelled series, placed in the plot corner covering the fewest
/// data points (ties go to upper right, upper left, lower left, lower right in that order).
pub fn legend_layout(
    chart: &Chart,
    shaper: &TextShaper,
    rect: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
) -> Option<LegendLayout> {
    let labelled: Vec<usize> = chart
        .series
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.label.is_empty())
        .map(|(i, _)| i)
        .collect();
    if labelled.is_empty() {
        return None;
    }

    let sizes: Vec<(f32, f32)> = labelled
        .iter()
        .map(|&i| shaper.measure(&chart.series[i].label, LEGEND_SIZE))
        .collect();
    let text_w = sizes.iter().map(|s| s.0).fold(0.0, f32::max);
    let row_h = sizes.iter().map(|s| s.1).fold(MARKER_RADIUS * 2.0, f32::max) + LEGEND_ROW_GAP;
    let w = (LEGEND_PAD * 3.0 + LEGEND_SWATCH + text_w).ceil() as i32;
    let h = (LEGEND_PAD * 2.0 + row_h * labelled.len() as f32).ceil() as i32;

    let m = LEGEND_PAD as i32;
    let candidates = [
        RectI32::from_ltwh(rect.right - m - w, rect.top + m, w, h),
        RectI32::from_ltwh(rect.left + m, rect.top + m, w, h),
        RectI32::from_ltwh(rect.left + m, rect.bottom - m - h, w, h),
        RectI32::from_ltwh(rect.right - m - w, rect.bottom - m - h, w, h),
    ];
    let points: Vec<(f32, f32)> = chart
        .series
        .iter()
        .flat_map(|s| s.data_xy.iter().map(|&(x, y)| (sx.to_px(x), sy.to_px(y))))
        .collect();
    let covered = |r: &RectI32| {
        points
            .iter()
            .filter(|&&(x, y)| x >= r.left as f32 && x <= r.right as f32 && y >= r.top as f32 && y <= r.bottom as f32)
            .count()
    };
    let frame = candidates.into_iter().min_by_key(covered)?;

    let entries = labelled
        .iter()
        .zip(&sizes)
        .enumerate()
        .map(|(row, (&series, &(_, text_height)))| LegendEntry {
            series,
            row_center: frame.top as f32 + LEGEND_PAD + row_h * (row as f32 + 0.5),
            text_height,
        })
        .collect();
    Some(LegendLayout { frame, entries })
}
