// File: crates/timings-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; measures and draws horizontal and rotated labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// (width, height) of `text` laid out on one line.
    pub fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::TRANSPARENT);
        (p.longest_line(), p.height())
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        self.measure(text, size).0
    }

    /// Draw with the top-left corner of the text box at (x, y).
    pub fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        p.paint(canvas, (x, y));
    }

    /// Draw horizontally centered on `cx`, top edge at `y`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        p.paint(canvas, (cx - p.longest_line() * 0.5, y));
    }

    /// Draw right-aligned to `right`, vertically centered on `cy`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right: f32, cy: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        p.paint(canvas, (right - p.longest_line(), cy - p.height() * 0.5));
    }

    /// Draw rotated 90° counter-clockwise so it reads bottom-to-top.
    /// The text ends at `top` and is centered horizontally on `cx`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, cx: f32, top: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        let w = p.longest_line();
        let h = p.height();
        canvas.save();
        canvas.translate((cx - h * 0.5, top + w));
        canvas.rotate(-90.0, None);
        p.paint(canvas, (0.0, 0.0));
        canvas.restore();
    }
}
