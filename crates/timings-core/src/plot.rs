// File: crates/timings-core/src/plot.rs
// Summary: Builds the per-word timing comparison chart from a ResultsTable.
// Notes:
// - Automate/KMP files plot dots and connecting lines as separate series against a positional index.
// - Files with an egrep column plot one marker+line series per method against the words
//   themselves and pin the Y axis at zero.

use std::collections::HashMap;

use skia_safe as skia;

use crate::chart::Chart;
use crate::series::{Series, SeriesType};
use crate::table::{Method, ResultsTable, Variant};

pub const BLUE: skia::Color = skia::Color::new(0xFF_00_00_FF);
pub const RED: skia::Color = skia::Color::new(0xFF_FF_00_00);
pub const GREEN: skia::Color = skia::Color::new(0xFF_00_80_00);

pub const X_LABEL: &str = "Words";
pub const Y_LABEL: &str = "Time (ms)";
/// Fraction of the data span added on both sides of each axis.
pub const AXIS_MARGIN: f64 = 0.05;
/// Rotation of the word labels under the X axis.
pub const WORD_ROTATION: f32 = 90.0;

pub fn method_color(method: Method) -> skia::Color {
    match method {
        Method::Automate => BLUE,
        Method::Kmp => RED,
        Method::Egrep => GREEN,
    }
}

pub fn title(variant: Variant) -> &'static str {
    match variant {
        Variant::AutomateKmp => "Comparison of Ahu-Ullman and KMP Execution Times",
        Variant::WithEgrep => "Comparison of Ahu-Ullman, KMP & egrep Execution Times",
    }
}

fn dots_label(method: Method) -> String {
    match method {
        Method::Egrep => "Method egrep Time".to_string(),
        m => format!("Method {m} Time (Dots)"),
    }
}

fn line_label(method: Method) -> String {
    format!("Method {method} Time (Line)")
}

/// X positions for each row: the row index, or the position of the row's word when the
/// words themselves form the axis (a repeated word reuses its first position).
pub fn x_positions(table: &ResultsTable) -> Vec<f64> {
    match table.variant() {
        Variant::AutomateKmp => (0..table.len()).map(|i| i as f64).collect(),
        Variant::WithEgrep => {
            let mut seen: HashMap<&str, usize> = HashMap::new();
            table
                .rows()
                .iter()
                .map(|r| {
                    let next = seen.len();
                    *seen.entry(r.word.as_str()).or_insert(next) as f64
                })
                .collect()
        }
    }
}

fn times(table: &ResultsTable, method: Method) -> Vec<f64> {
    table.rows().iter().filter_map(|r| r.time(method)).collect()
}

/// Describe the full comparison chart for `table`, axes already scaled.
pub fn build_chart(table: &ResultsTable) -> Chart {
    let xs = x_positions(table);
    let mut chart = Chart::new();
    chart.title = title(table.variant()).to_string();
    chart.legend = true;
    chart.grid = true;

    match table.variant() {
        Variant::AutomateKmp => {
            let automate = times(table, Method::Automate);
            let kmp = times(table, Method::Kmp);
            for (method, values) in [(Method::Automate, &automate), (Method::Kmp, &kmp)] {
                chart.add_series(
                    Series::from_columns(SeriesType::Scatter, &xs, values)
                        .with_label(dots_label(method))
                        .with_color(method_color(method)),
                );
            }
            // lines go on top of the dots, KMP first
            for (method, values) in [(Method::Kmp, &kmp), (Method::Automate, &automate)] {
                chart.add_series(
                    Series::from_columns(SeriesType::Line, &xs, values)
                        .with_label(line_label(method))
                        .with_color(method_color(method)),
                );
            }
        }
        Variant::WithEgrep => {
            for &method in table.methods() {
                chart.add_series(
                    Series::from_columns(SeriesType::LineMarkers, &xs, &times(table, method))
                        .with_label(dots_label(method))
                        .with_color(method_color(method)),
                );
            }
            chart.y_axis.bottom = Some(0.0);
        }
    }

    chart.x_axis.label = X_LABEL.to_string();
    chart.y_axis.label = Y_LABEL.to_string();
    chart.x_axis.set_ticks(&xs, table.words());
    chart.x_axis.tick_rotation = WORD_ROTATION;
    chart.autoscale_axes(AXIS_MARGIN);
    chart
}
