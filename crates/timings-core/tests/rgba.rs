// File: crates/timings-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use timings_core::plot::BLUE;
use timings_core::{Axis, Chart, RenderOptions, Series, SeriesType, Theme};

fn opts() -> RenderOptions {
    RenderOptions {
        width: 400,
        height: 300,
        draw_labels: false, // avoid font variance
        ..RenderOptions::default()
    }
}

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (4.0, 4.0)]));

    let (px, w, h, stride) = chart.render_to_rgba8(&opts()).expect("rgba render");
    assert_eq!((w, h), (400, 300));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // top-left pixel is opaque theme background
    let bg = Theme::light().background;
    assert_eq!(&px[0..4], &[bg.r(), bg.g(), bg.b(), 255]);
}

#[test]
fn markers_land_at_scaled_positions() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 2.0);
    chart.y_axis = Axis::new("Y", 0.0, 2.0);
    chart.add_series(Series::with_data(SeriesType::Scatter, vec![(1.0, 1.0)]).with_color(BLUE));

    let o = opts();
    let (px, w, _, _) = chart.render_to_rgba8(&o).expect("rgba render");
    // plot rect comes from the default insets when labels are off
    let left = o.insets.left as i32;
    let right = o.width - o.insets.right as i32;
    let top = o.insets.top as i32;
    let bottom = o.height - o.insets.bottom as i32;
    let (cx, cy) = ((left + right) / 2, (top + bottom) / 2);
    let i = (cy as usize * w as usize + cx as usize) * 4;
    assert_eq!(&px[i..i + 3], &[0, 0, 255], "marker center should be blue");
}
