//! Integration tests for the `zt` binary.

use std::f64::consts::FRAC_PI_4;
use std::process::{Command, Output};

fn zt() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_zt"));
    cmd.env_remove("ZT_SVG_DIR").env_remove("ZT_SINGULAR").env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    zt().args(args).output().expect("Failed to run zt")
}

#[test]
fn demo_prints_the_four_sections() {
    let output = run(&["demo", "--no-plot"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "demo failed: {}", String::from_utf8_lossy(&output.stderr));

    let decay = (-0.2f64).exp();
    let expected = format!(
        concat!(
            "\n1. Sequence: 3^n u[n]\n",
            "Z-transform: z/(z - 3)\n",
            "ROC: |z| > 3\n",
            "\n2. Sequence: 2^n*u[n] + 3^n*u[n]\n",
            "Z-transform: z/(z - 2) + z/(z - 3)\n",
            "ROC: |z| > max(2, 3)\n",
            "\n3. Sequence: e^(-0.2n)*u[n]\n",
            "Z-transform: z/(z - {decay})\n",
            "ROC: |z| > {decay}\n",
            "\n4. Sequence: sin(πn/4)u[n]\n",
            "Z-transform: {sin}*z/(z^2 - {two_cos}*z + 1)\n",
            "ROC: |z| > 1\n",
        ),
        decay = decay,
        sin = FRAC_PI_4.sin(),
        two_cos = 2.0 * FRAC_PI_4.cos(),
    );
    assert_eq!(stdout, expected);
}

#[test]
fn bare_invocation_defaults_to_demo() {
    let output = run(&["--no-plot"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("4. Sequence: sin(πn/4)u[n]"));
}

#[test]
fn demo_terminal_plots_follow_each_section() {
    let output = run(&["demo", "--width", "40", "--height", "12"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());

    assert_eq!(stdout.matches("ROC: |z| >").count(), 8, "section text + plot title per section");
    assert_eq!(stdout.matches("Magnitude Response").count(), 2);
    assert_eq!(stdout.matches("Phase Response").count(), 2);

    let sec1 = stdout.find("1. Sequence").unwrap();
    let sec2 = stdout.find("2. Sequence").unwrap();
    let roc1_plot = stdout.find("ROC: |z| > 3  [").unwrap();
    assert!(sec1 < roc1_plot && roc1_plot < sec2);
}

#[test]
fn unsupported_sequence_fails_with_exit_code_2() {
    let output = run(&["transform", "triangle", "1", "--no-plot"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported sequence type 'triangle'"), "{stderr}");
}

#[test]
fn wrong_parameter_count_fails() {
    let output = run(&["transform", "sum_exponential", "2", "--no-plot"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("takes 2 parameter(s), got 1"));
}

#[test]
fn transform_with_negative_pole() {
    let output = run(&["transform", "exponential", "-0.5", "--no-plot"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("1. Sequence: (-0.5)^n u[n]"));
    assert!(stdout.contains("Z-transform: z/(z + 0.5)"));
    assert!(stdout.contains("ROC: |z| > 0.5"));
}

#[test]
fn pole_on_unit_circle_abort_policy_exits_3() {
    let output = run(&["transform", "exponential", "1", "--magnitude", "--singular", "abort", "--no-plot"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("singular sample at angle"));
}

#[test]
fn pole_on_unit_circle_is_skipped_by_default() {
    let output = run(&["transform", "exponential", "1", "--phase", "--no-plot"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Note: 2 sample(s) on a pole"), "{stdout}");
}

#[test]
fn roc_command_parses_and_reports_radius() {
    let output = run(&["roc", "|z| > max(2, 3)", "--no-plot"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "ROC: |z| > max(2, 3)\nRadius: 3\n");
}

#[test]
fn malformed_roc_is_rejected() {
    let output = run(&["roc", "|z| > max(2, three)", "--no-plot"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("malformed ROC description"));
}

#[test]
fn svg_and_exports_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let svg_dir = dir.path().join("figs");
    let json = dir.path().join("report.json");
    let csv = dir.path().join("response.csv");

    let output = zt()
        .args(["demo", "--svg-dir"])
        .arg(&svg_dir)
        .arg("--export-json")
        .arg(&json)
        .arg("--export-csv")
        .arg(&csv)
        .output()
        .expect("Failed to run zt");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    for name in [
        "section1_roc.svg",
        "section2_roc.svg",
        "section3_roc.svg",
        "section3_response.svg",
        "section4_roc.svg",
        "section4_response.svg",
    ] {
        assert!(svg_dir.join(name).exists(), "missing {name}");
    }

    let report: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(report["tool"], "zt");
    assert_eq!(report["sections"].as_array().unwrap().len(), 4);
    assert_eq!(report["sections"][1]["roc"], "|z| > max(2, 3)");

    let rows = std::fs::read_to_string(&csv).unwrap().lines().count();
    // Header plus 500 samples for each of sections 3 and 4.
    assert_eq!(rows, 1 + 2 * 500);
}

#[test]
fn verbose_flag_may_precede_the_subcommand() {
    let output = run(&["-v", "roc", "|z| > 1", "--no-plot"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "ROC: |z| > 1\nRadius: 1\n");

    let output = run(&["-vv", "transform", "exponential", "0.5", "--no-plot"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Z-transform: z/(z - 0.5)"));
}

#[test]
fn negative_zero_pole_prints_as_zero() {
    let output = run(&["transform", "exponential", "-0", "--no-plot"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Sequence: 0^n u[n]"), "{stdout}");
    assert!(stdout.contains("Z-transform: z/(z - 0)"), "{stdout}");
}

#[test]
fn replot_reads_an_exported_report() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("report.json");
    let svg_dir = dir.path().join("figs");

    let first = zt().args(["demo", "--no-plot", "--export-json"]).arg(&json).output().unwrap();
    assert!(first.status.success());

    let again = zt().arg("replot").arg(&json).arg("--svg-dir").arg(&svg_dir).output().unwrap();
    assert!(again.status.success(), "{}", String::from_utf8_lossy(&again.stderr));
    assert_eq!(again.stdout, first.stdout);
    assert!(svg_dir.join("section1_roc.svg").exists());
    assert!(svg_dir.join("section4_response.svg").exists());
}
