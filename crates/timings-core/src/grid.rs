// File: crates/timings-core/src/grid.rs
// Summary: Tick layout helpers: "nice" numeric tick steps and label formatting.

/// Step from the 1-2-2.5-5-10 family that yields at most `max_ticks` intervals over `span`.
pub fn nice_step(span: f64, max_ticks: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 { return 1.0; }
    let raw = span / max_ticks.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    for m in [1.0, 2.0, 2.5, 5.0, 10.0] {
        if m * mag >= raw { return m * mag; }
    }
    10.0 * mag
}

/// Multiples of a nice step lying inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min { return vec![min]; }
    let step = nice_step(max - min, max_ticks);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        .map(|k| k as f64 * step)
        // snap -0.0
        .map(|v| if v.abs() < step * 1e-9 { 0.0 } else { v })
        .collect()
}

/// Format `v` with just enough decimals to represent multiples of `step`.
pub fn format_tick(v: f64, step: f64) -> String {
    let mut decimals = 0usize;
    if step.is_finite() && step > 0.0 {
        while decimals < 6 {
            let scaled = step * 10f64.powi(decimals as i32);
            if (scaled - scaled.round()).abs() < 1e-6 { break; }
            decimals += 1;
        }
    }
    format!("{v:.decimals$}")
}
