// File: crates/timings-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (RGBA buffer / PNG) using Skia CPU raster surfaces.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;

use crate::axis::{Axis, Tick};
use crate::error::RenderError;
use crate::geometry::RectI32;
use crate::layout;
use crate::scale::LinearScale;
use crate::series::{minmax, Series};
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, LABEL_SIZE, LEGEND_SIZE, MARKER_RADIUS, TICK_LEN, TICK_SIZE, TITLE_SIZE, WIDTH};

/// Upper bound on generated numeric ticks per axis.
pub const MAX_VALUE_TICKS: usize = 8;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    /// Margins used when `tight_layout` is off or labels are not drawn.
    pub insets: Insets,
    pub theme: Theme,
    /// Draw text (ticks, axis labels, title, legend). Off gives font-independent pixels.
    pub draw_labels: bool,
    /// Size margins from the measured labels instead of using `insets`.
    pub tight_layout: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            tight_layout: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: bool,
    pub grid: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: false,
            grid: false,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Series drawn in `color`, in insertion order.
    pub fn series_with_color(&self, color: skia::Color) -> impl Iterator<Item = &Series> {
        self.series.iter().filter(move |s| s.color == color)
    }

    /// Fit both axes to the data, padded by `margin` (fraction of the span).
    /// X also covers explicit tick positions; Y never goes below `y_axis.bottom`.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let xs = self
            .series
            .iter()
            .flat_map(|s| s.data_xy.iter().map(|&(x, _)| x))
            .chain(self.x_axis.ticks.iter().map(|t| t.position));
        let (x_min, x_max) = padded(minmax(xs), margin);
        self.x_axis.min = x_min;
        self.x_axis.max = x_max;

        let ys = self.series.iter().flat_map(|s| s.data_xy.iter().map(|&(_, y)| y));
        let (mut y_min, mut y_max) = padded(minmax(ys), margin);
        if let Some(bottom) = self.y_axis.bottom {
            y_min = bottom;
            if y_max <= bottom {
                y_max = bottom + 1.0;
            }
        }
        self.y_axis.min = y_min;
        self.y_axis.max = y_max;
    }

    /// Render into a tightly packed RGBA8 (unpremultiplied) buffer.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        let shaper = TextShaper::new();
        self.paint(surface.canvas(), opts, &shaper);

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let (pixels, w, h, _) = self.render_to_rgba8(opts)?;
        let img = image::RgbaImage::from_raw(w, h, pixels).ok_or(RenderError::ReadPixels)?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<(), RenderError> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Paint the whole figure onto `canvas`.
    pub fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions, shaper: &TextShaper) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let insets = if opts.tight_layout && opts.draw_labels {
            layout::tight_insets(self, shaper, opts.width, opts.height)
        } else {
            opts.insets
        };
        let rect = RectI32::inset(opts.width, opts.height, &insets);
        let sx = LinearScale::horizontal(&self.x_axis, &rect);
        let sy = LinearScale::vertical(&self.y_axis, &rect);
        let x_ticks = self.x_axis.tick_marks(MAX_VALUE_TICKS);
        let y_ticks = self.y_axis.tick_marks(MAX_VALUE_TICKS);

        if self.grid {
            draw_grid(canvas, &rect, &sx, &sy, &x_ticks, &y_ticks, theme);
        }

        canvas.save();
        canvas.clip_rect(to_rect(&rect), skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_series(canvas, &sx, &sy, s);
        }
        canvas.restore();

        draw_frame(canvas, &rect, &sx, &sy, &x_ticks, &y_ticks, theme);

        if opts.draw_labels {
            draw_tick_labels(canvas, shaper, &rect, &sx, &sy, &self.x_axis, &x_ticks, &y_ticks, theme);
            draw_titles(canvas, shaper, self, &rect, &insets, theme);
            if self.legend {
                draw_legend(canvas, shaper, self, &rect, &sx, &sy, theme);
            }
        }
    }
}

fn padded(range: Option<(f64, f64)>, margin: f64) -> (f64, f64) {
    match range {
        None => (0.0, 1.0),
        Some((lo, hi)) if (hi - lo).abs() < 1e-9 => (lo - 0.5, hi + 0.5),
        Some((lo, hi)) => {
            let m = (hi - lo) * margin;
            (lo - m, hi + m)
        }
    }
}

fn to_rect(r: &RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    rect: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[Tick],
    y_ticks: &[Tick],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(0.8);

    let (l, t, r, b) = (rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
    // verticals
    for tick in x_ticks {
        let x = sx.to_px(tick.position);
        canvas.draw_line((x, t), (x, b), &paint);
    }
    // horizontals
    for tick in y_ticks {
        let y = sy.to_px(tick.position);
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

fn draw_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }

    if series.series_type.draws_line() && data.len() >= 2 {
        let mut path = skia::Path::new();
        let (x0, y0) = data[0];
        path.move_to((sx.to_px(x0), sy.to_px(y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((sx.to_px(x), sy.to_px(y)));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);
        stroke.set_color(series.color);
        canvas.draw_path(&path, &stroke);
    }

    if series.series_type.draws_markers() {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(series.color);
        for &(x, y) in data {
            canvas.draw_circle((sx.to_px(x), sy.to_px(y)), MARKER_RADIUS, &fill);
        }
    }
}

fn draw_frame(
    canvas: &skia::Canvas,
    rect: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[Tick],
    y_ticks: &[Tick],
    theme: &Theme,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.0);
    canvas.draw_rect(to_rect(rect), &axis_paint);

    axis_paint.set_color(theme.tick);
    let (l, b) = (rect.left as f32, rect.bottom as f32);
    for tick in x_ticks {
        let x = sx.to_px(tick.position);
        canvas.draw_line((x, b), (x, b + TICK_LEN), &axis_paint);
    }
    for tick in y_ticks {
        let y = sy.to_px(tick.position);
        canvas.draw_line((l - TICK_LEN, y), (l, y), &axis_paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    rect: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_axis: &Axis,
    x_ticks: &[Tick],
    y_ticks: &[Tick],
    theme: &Theme,
) {
    let below = rect.bottom as f32 + TICK_LEN + layout::TICK_GAP;
    for tick in x_ticks {
        let x = sx.to_px(tick.position);
        if x_axis.vertical_tick_labels() {
            shaper.draw_vertical(canvas, &tick.label, x, below, TICK_SIZE, theme.axis_label);
        } else {
            shaper.draw_centered(canvas, &tick.label, x, below, TICK_SIZE, theme.axis_label);
        }
    }
    let right = rect.left as f32 - TICK_LEN - layout::TICK_GAP;
    for tick in y_ticks {
        shaper.draw_right(canvas, &tick.label, right, sy.to_px(tick.position), TICK_SIZE, theme.axis_label);
    }
}

fn draw_titles(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    chart: &Chart,
    rect: &RectI32,
    insets: &Insets,
    theme: &Theme,
) {
    let pad = crate::types::PAD as f32;
    let cx = (rect.left + rect.right) as f32 * 0.5;

    if !chart.title.is_empty() {
        let (_, h) = shaper.measure(&chart.title, TITLE_SIZE);
        let y = (rect.top as f32 - h - layout::TICK_GAP).max(pad);
        shaper.draw_centered(canvas, &chart.title, cx, y, TITLE_SIZE, theme.axis_label);
    }
    if !chart.x_axis.label.is_empty() {
        let (_, h) = shaper.measure(&chart.x_axis.label, LABEL_SIZE);
        let y = rect.bottom as f32 + insets.bottom as f32 - pad - h;
        shaper.draw_centered(canvas, &chart.x_axis.label, cx, y, LABEL_SIZE, theme.axis_label);
    }
    if !chart.y_axis.label.is_empty() {
        let (w, h) = shaper.measure(&chart.y_axis.label, LABEL_SIZE);
        let cy = (rect.top + rect.bottom) as f32 * 0.5;
        let left = (rect.left as f32 - insets.left as f32 + pad).max(0.0);
        shaper.draw_vertical(canvas, &chart.y_axis.label, left + h * 0.5, cy - w * 0.5, LABEL_SIZE, theme.axis_label);
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    chart: &Chart,
    rect: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    theme: &Theme,
) {
    let Some(legend) = layout::legend_layout(chart, shaper, rect, sx, sy) else { return };

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_fill);
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    let frame = to_rect(&legend.frame);
    canvas.draw_rect(frame, &fill);
    canvas.draw_rect(frame, &border);

    for entry in &legend.entries {
        let s = &chart.series[entry.series];
        let cy = entry.row_center;
        let (x0, x1) = (legend.frame.left as f32 + layout::LEGEND_PAD, legend.frame.left as f32 + layout::LEGEND_PAD + layout::LEGEND_SWATCH);
        if s.series_type.draws_line() {
            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(2.0);
            stroke.set_color(s.color);
            canvas.draw_line((x0, cy), (x1, cy), &stroke);
        }
        if s.series_type.draws_markers() {
            let mut dot = skia::Paint::default();
            dot.set_anti_alias(true);
            dot.set_color(s.color);
            canvas.draw_circle(((x0 + x1) * 0.5, cy), MARKER_RADIUS, &dot);
        }
        shaper.draw_top_left(canvas, &s.label, x1 + layout::LEGEND_PAD, cy - entry.text_height * 0.5, LEGEND_SIZE, theme.axis_label);
    }
}
