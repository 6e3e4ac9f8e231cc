//! Command-line parsing for the `zt` binary.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the transform/plotting code.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::domain::SingularPolicy;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "zt",
    version,
    about = "Closed-form Z-transforms with ROC and frequency-response plots"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the four classic examples (default when no subcommand is given).
    Demo(DemoArgs),
    /// Transform a single sequence given on the command line.
    Transform(TransformArgs),
    /// Parse a textual ROC description and plot its boundary circle.
    Roc(RocArgs),
    /// Show the figures stored in a JSON report written by `--export-json`.
    Replot(ReplotArgs),
}

#[derive(Debug, Args, Clone)]
pub struct DemoArgs {
    #[command(flatten)]
    pub plot: PlotArgs,

    #[command(flatten)]
    pub eval: EvalArgs,
}

#[derive(Debug, Args, Clone)]
pub struct TransformArgs {
    /// Sequence type: exponential, sum_exponential or sinusoidal.
    pub kind: String,

    /// Sequence parameters (a | a1 a2 | w).
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub params: Vec<f64>,

    /// Draw the magnitude response.
    #[arg(long)]
    pub magnitude: bool,

    /// Draw the phase response.
    #[arg(long)]
    pub phase: bool,

    /// Label printed instead of the derived sequence description.
    #[arg(long)]
    pub label: Option<String>,

    #[command(flatten)]
    pub plot: PlotArgs,

    #[command(flatten)]
    pub eval: EvalArgs,
}

#[derive(Debug, Args, Clone)]
pub struct RocArgs {
    /// ROC description, e.g. "|z| > 3" or "|z| > max(2, 3)".
    pub text: String,

    #[command(flatten)]
    pub plot: PlotArgs,
}

#[derive(Debug, Args, Clone)]
pub struct ReplotArgs {
    /// Report file produced by `--export-json`.
    #[arg(value_name = "JSON")]
    pub report: PathBuf,

    #[command(flatten)]
    pub plot: PlotArgs,
}

/// Where and how figures are shown.
#[derive(Debug, Args, Clone)]
pub struct PlotArgs {
    /// Do not render any figures.
    #[arg(long)]
    pub no_plot: bool,

    /// Terminal plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Terminal plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Write SVG files into this directory instead of plotting in the terminal.
    #[arg(long, value_name = "DIR", env = "ZT_SVG_DIR")]
    pub svg_dir: Option<PathBuf>,
}

/// Response sampling and export options.
#[derive(Debug, Args, Clone)]
pub struct EvalArgs {
    /// What to do when a response sample lands on a pole.
    #[arg(long, value_enum, env = "ZT_SINGULAR", default_value_t = SingularPolicy::Skip)]
    pub singular: SingularPolicy,

    /// Write a JSON report of every section.
    #[arg(long = "export-json", value_name = "JSON")]
    pub export_json: Option<PathBuf>,

    /// Write sampled responses to CSV.
    #[arg(long = "export-csv", value_name = "CSV")]
    pub export_csv: Option<PathBuf>,
}
