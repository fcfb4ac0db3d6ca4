// File: crates/timings-core/src/lib.rs
// Summary: Core library entry point; loads benchmark timing results and renders the comparison chart.

pub mod error;
pub mod table;
pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod layout;
pub mod theme;
pub mod text;
pub mod plot;

pub use error::{RenderError, TableError};
pub use table::{Method, ResultsTable, TableSummary, TimingRow, Variant, VariantChoice, DEFAULT_PATH};
pub use chart::{Chart, RenderOptions};
pub use series::{Series, SeriesType};
pub use axis::{Axis, Tick};
pub use theme::Theme;
pub use text::TextShaper;
pub use plot::build_chart;
