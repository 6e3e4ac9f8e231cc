//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - initialises logging
//! - builds each section's transform and ROC
//! - prints reports and shows plots
//! - writes optional exports

use clap::Parser;
use tracing::info;

use crate::cli::{Command, DemoArgs, EvalArgs, PlotArgs, ReplotArgs, RocArgs, TransformArgs};
use crate::domain::{PlotTarget, ResponseToggles, RunConfig, Section, SequenceSpec};
use crate::error::AppError;

pub mod pipeline;

use pipeline::SectionOutput;

/// Entry point for the `zt` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    // We want `zt` and `zt --no-plot` to behave like `zt demo ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    crate::logging::init_tracing(cli.verbose);

    match cli.command {
        Command::Demo(args) => handle_demo(args),
        Command::Transform(args) => handle_transform(args),
        Command::Roc(args) => handle_roc(args),
        Command::Replot(args) => handle_replot(args),
    }
}

fn handle_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args.plot, &args.eval);
    run_sections(&pipeline::demo_sections(), &config)
}

fn handle_transform(args: TransformArgs) -> Result<(), AppError> {
    let mut spec = SequenceSpec::from_tag(&args.kind, &args.params)?;
    if let Some(label) = &args.label {
        spec = spec.with_label(label.clone());
    }
    let section = Section {
        spec,
        toggles: ResponseToggles {
            show_magnitude: args.magnitude,
            show_phase: args.phase,
        },
    };
    let config = run_config_from_args(&args.plot, &args.eval);
    run_sections(&[section], &config)
}

fn handle_roc(args: RocArgs) -> Result<(), AppError> {
    let target = plot_target_from_args(&args.plot);
    let mut sink = crate::plot::sink_for(&target)?;
    let radius = crate::roc::plot_roc_text("input", &args.text, sink.as_mut())?;
    println!("{}", crate::report::format_roc_summary(&args.text, radius));
    Ok(())
}

fn handle_replot(args: ReplotArgs) -> Result<(), AppError> {
    let report = crate::io::read_report_json(&args.report)?;
    info!(path = %args.report.display(), sections = report.sections.len(), "replotting report");

    let mut sink = crate::plot::sink_for(&plot_target_from_args(&args.plot))?;
    for record in &report.sections {
        println!("{}", crate::report::format_record(record));
        pipeline::replot_record(record, sink.as_mut())?;
    }
    Ok(())
}

/// Print, plot and export each section in order.
pub fn run_sections(sections: &[Section], config: &RunConfig) -> Result<(), AppError> {
    let mut sink = crate::plot::sink_for(&config.plot)?;
    let mut outputs: Vec<SectionOutput> = Vec::with_capacity(sections.len());

    for (i, section) in sections.iter().enumerate() {
        let mut out = pipeline::build_section(i + 1, section);
        println!("{}", crate::report::format_section(&out));

        pipeline::plot_section(&mut out, config.singular, sink.as_mut())?;
        if let Some(note) = crate::report::format_singular_note(&out) {
            println!("{note}");
        }
        outputs.push(out);
    }

    // Optional exports.
    if let Some(path) = &config.export_json {
        crate::io::write_report_json(path, &outputs)?;
        info!(path = %path.display(), "wrote JSON report");
    }
    if let Some(path) = &config.export_csv {
        crate::io::write_response_csv(path, &outputs)?;
        info!(path = %path.display(), "wrote response CSV");
    }

    Ok(())
}

pub fn run_config_from_args(plot: &PlotArgs, eval: &EvalArgs) -> RunConfig {
    RunConfig {
        plot: plot_target_from_args(plot),
        singular: eval.singular,
        export_json: eval.export_json.clone(),
        export_csv: eval.export_csv.clone(),
    }
}

fn plot_target_from_args(plot: &PlotArgs) -> PlotTarget {
    if plot.no_plot {
        PlotTarget::Off
    } else if let Some(dir) = &plot.svg_dir {
        PlotTarget::Svg { dir: dir.clone() }
    } else {
        PlotTarget::Terminal {
            width: plot.width,
            height: plot.height,
        }
    }
}

/// Rewrite argv so `zt` defaults to `zt demo`.
///
/// Rules:
/// - `zt`                      -> `zt demo`
/// - `zt --no-plot ...`        -> `zt demo --no-plot ...`
/// - `zt -v roc ...`           -> unchanged (global flags may precede a subcommand)
/// - `zt --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    // Skip leading global flags to find the first token that picks a command.
    let first = argv.iter().skip(1).position(|arg| !is_global_flag(arg)).map(|i| i + 1);
    let Some(first) = first else {
        argv.push("demo".to_string());
        return argv;
    };

    let arg = argv[first].as_str();
    let is_top_level_help_or_version = matches!(arg, "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg, "demo" | "transform" | "roc" | "replot");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "demo flags".
    if arg.starts_with('-') {
        argv.insert(first, "demo".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

/// `-v`, `-vv`, ... and `--verbose`.
fn is_global_flag(arg: &str) -> bool {
    arg == "--verbose" || (arg.len() > 1 && arg.starts_with('-') && arg[1..].chars().all(|c| c == 'v'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_runs_demo() {
        assert_eq!(rewrite_args(argv(&["zt"])), argv(&["zt", "demo"]));
        assert_eq!(
            rewrite_args(argv(&["zt", "--no-plot"])),
            argv(&["zt", "demo", "--no-plot"])
        );
    }

    #[test]
    fn subcommands_and_help_are_untouched() {
        for args in [
            argv(&["zt", "--help"]),
            argv(&["zt", "roc", "|z| > 1"]),
            argv(&["zt", "transform", "exponential", "0.5"]),
        ] {
            assert_eq!(rewrite_args(args.clone()), args);
        }
    }

    #[test]
    fn verbosity_before_a_subcommand_is_kept_in_place() {
        assert_eq!(
            rewrite_args(argv(&["zt", "-v", "roc", "|z| > 1"])),
            argv(&["zt", "-v", "roc", "|z| > 1"])
        );
        assert_eq!(
            rewrite_args(argv(&["zt", "-vv", "transform", "exponential", "0.5"])),
            argv(&["zt", "-vv", "transform", "exponential", "0.5"])
        );
        assert_eq!(
            rewrite_args(argv(&["zt", "--verbose", "--no-plot"])),
            argv(&["zt", "--verbose", "demo", "--no-plot"])
        );
        assert_eq!(rewrite_args(argv(&["zt", "-v"])), argv(&["zt", "-v", "demo"]));

        let cli = crate::cli::Cli::try_parse_from(rewrite_args(argv(&["zt", "-v", "roc", "|z| > 1"]))).unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Command::Roc(_)));

        let cli = crate::cli::Cli::try_parse_from(rewrite_args(argv(&["zt", "-vv", "--no-plot"]))).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Demo(_)));
    }

    #[test]
    fn plot_target_precedence() {
        let mut plot = PlotArgs {
            no_plot: false,
            width: 40,
            height: 10,
            svg_dir: Some("figs".into()),
        };
        assert_eq!(plot_target_from_args(&plot), PlotTarget::Svg { dir: "figs".into() });

        plot.no_plot = true;
        assert_eq!(plot_target_from_args(&plot), PlotTarget::Off);

        plot.no_plot = false;
        plot.svg_dir = None;
        assert_eq!(plot_target_from_args(&plot), PlotTarget::Terminal { width: 40, height: 10 });
    }
}
