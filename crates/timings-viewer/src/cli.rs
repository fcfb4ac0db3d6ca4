// File: crates/timings-viewer/src/cli.rs
// Summary: Command-line arguments for plot-results (input path, variant, PNG output, theme, size).

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use timings_core::types::{HEIGHT, WIDTH};
use timings_core::VariantChoice;

#[derive(Parser, Debug)]
#[command(
    name = "plot-results",
    about = "Plot per-word execution times of the Automate, KMP and egrep searches",
    after_help = "\
EXAMPLES:
    plot-results                              Show ./results.csv, variant detected from the file
    plot-results runs/results.csv             Show another results file
    plot-results --output chart.png           Write a PNG instead of opening a window"
)]
pub struct Args {
    /// Results CSV written by the benchmark run
    #[arg(value_name = "INPUT", default_value = timings_core::DEFAULT_PATH)]
    pub input: PathBuf,

    /// Input shape; `auto` reads a header row naming egrepTime as the egrep variant
    #[arg(long, value_enum, default_value_t = VariantArg::Auto)]
    pub variant: VariantArg,

    /// Write the chart to a PNG file instead of opening a window
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Color theme (light, dark)
    #[arg(long, default_value = "light")]
    pub theme: String,

    /// Window or image width in pixels
    #[arg(long, default_value_t = WIDTH as u32, value_parser = clap::value_parser!(u32).range(64..=16_384))]
    pub width: u32,

    /// Window or image height in pixels
    #[arg(long, default_value_t = HEIGHT as u32, value_parser = clap::value_parser!(u32).range(64..=16_384))]
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Auto,
    AutomateKmp,
    WithEgrep,
}

impl From<VariantArg> for VariantChoice {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Auto => VariantChoice::Auto,
            VariantArg::AutomateKmp => VariantChoice::AutomateKmp,
            VariantArg::WithEgrep => VariantChoice::WithEgrep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_plain_script() {
        let args = Args::try_parse_from(["plot-results"]).unwrap();
        assert_eq!(args.input, PathBuf::from("results.csv"));
        assert_eq!(args.variant, VariantArg::Auto);
        assert!(args.output.is_none());
        assert_eq!((args.width, args.height), (1000, 600));
    }

    #[test]
    fn parses_variant_and_output() {
        let args = Args::try_parse_from([
            "plot-results",
            "data.csv",
            "--variant",
            "with-egrep",
            "-o",
            "out.png",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("data.csv"));
        assert_eq!(VariantChoice::from(args.variant), VariantChoice::WithEgrep);
        assert_eq!(args.output, Some(PathBuf::from("out.png")));
    }

    #[test]
    fn rejects_tiny_surface() {
        assert!(Args::try_parse_from(["plot-results", "--width", "10"]).is_err());
    }
}
