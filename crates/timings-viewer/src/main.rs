// File: crates/timings-viewer/src/main.rs
// Summary: Loads the benchmark results CSV and shows the per-word timing comparison chart
// (or writes it to a PNG with --output).

mod cli;
mod viewer;

use anyhow::{Context, Result};
use clap::Parser;
use timings_core::{build_chart, theme, RenderOptions, ResultsTable, TableSummary, Theme};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();

    let theme = theme::find(&args.theme).unwrap_or_else(|| {
        warn!(theme = %args.theme, "unknown theme; using light");
        Theme::light()
    });

    let table = ResultsTable::load(&args.input, args.variant.into())
        .with_context(|| format!("failed to load results from '{}'", args.input.display()))?;
    info!(rows = table.len(), variant = ?table.variant(), "loaded {}", args.input.display());
    log_summary(&table.summary());

    let chart = build_chart(&table);
    let opts = RenderOptions {
        width: args.width as i32,
        height: args.height as i32,
        theme,
        ..RenderOptions::default()
    };

    match args.output {
        Some(path) => {
            chart
                .render_to_png(&opts, &path)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            info!("wrote {}", path.display());
            Ok(())
        }
        None => viewer::show(chart, opts),
    }
}

fn log_summary(summary: &TableSummary) {
    for (method, mean) in &summary.means {
        info!(%method, mean_ms = *mean, "mean time over {} words", summary.rows);
    }
    if !summary.flag_mismatches.is_empty() {
        warn!(
            words = ?summary.flag_mismatches,
            "Automate and KMP disagree on whether {} word(s) occur",
            summary.flag_mismatches.len()
        );
    }
}
