//! Read/write the JSON run report.
//!
//! The report is the portable record of a run:
//! - per section: sequence, transform text, ROC (text and structured), poles
//! - the sampled response grid when one was computed
//!
//! The schema is defined by `ReportFile`.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::app::pipeline::SectionOutput;
use crate::domain::{ResponseToggles, Roc, SequenceKind};
use crate::error::AppError;
use crate::response::SampledResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<SectionRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRecord {
    pub index: usize,
    pub sequence: String,
    pub kind: SequenceKind,
    pub params: Vec<f64>,
    pub transform: String,
    pub roc: String,
    pub roc_form: Roc,
    pub radius: f64,
    /// Poles as `[re, im]` pairs.
    pub poles: Vec<Complex64>,
    pub response: Option<ResponseRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub theta: Vec<f64>,
    pub magnitude: Vec<f64>,
    pub phase: Vec<f64>,
    /// Grid angles that landed on a pole.
    pub singular: Vec<f64>,
    pub show_magnitude: bool,
    pub show_phase: bool,
}

impl ResponseRecord {
    pub fn toggles(&self) -> ResponseToggles {
        ResponseToggles {
            show_magnitude: self.show_magnitude,
            show_phase: self.show_phase,
        }
    }

    /// Rebuild the complex samples from their polar form.
    pub fn to_samples(&self) -> SampledResponse {
        SampledResponse {
            theta: self.theta.clone(),
            values: self
                .magnitude
                .iter()
                .zip(&self.phase)
                .map(|(&r, &phi)| Complex64::from_polar(r, phi))
                .collect(),
            singular: self.singular.clone(),
        }
    }
}

impl ReportFile {
    pub fn from_sections(sections: &[SectionOutput]) -> Self {
        Self {
            tool: "zt".to_string(),
            generated_at: Utc::now(),
            sections: sections.iter().map(SectionRecord::from_output).collect(),
        }
    }
}

impl SectionRecord {
    fn from_output(out: &SectionOutput) -> Self {
        Self {
            index: out.index,
            sequence: out.spec.describe(),
            kind: out.spec.kind(),
            params: out.spec.params().to_vec(),
            transform: out.transform.to_string(),
            roc: out.roc.to_string(),
            roc_form: out.roc,
            radius: out.roc.radius(),
            poles: out.transform.poles(),
            response: out.response.as_ref().map(|r| ResponseRecord {
                theta: r.theta.clone(),
                magnitude: r.magnitude(),
                phase: r.phase(),
                singular: r.singular.clone(),
                show_magnitude: out.toggles.show_magnitude,
                show_phase: out.toggles.show_phase,
            }),
        }
    }
}

/// Write the JSON run report.
pub fn write_report_json(path: &Path, sections: &[SectionOutput]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create report JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &ReportFile::from_sections(sections))
        .map_err(|e| AppError::new(2, format!("Failed to write report JSON: {e}")))?;

    Ok(())
}

/// Read a JSON run report.
pub fn read_report_json(path: &Path) -> Result<ReportFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open report JSON '{}': {e}", path.display())))?;
    let report: ReportFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid report JSON: {e}")))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::{build_section, demo_sections, plot_section};
    use crate::domain::SingularPolicy;
    use crate::plot::NullSink;

    #[test]
    fn report_keeps_sections_and_responses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let mut outs = Vec::new();
        for (i, section) in demo_sections().iter().enumerate() {
            let mut out = build_section(i + 1, section);
            plot_section(&mut out, SingularPolicy::Skip, &mut NullSink).unwrap();
            outs.push(out);
        }
        write_report_json(&path, &outs).unwrap();

        let report = read_report_json(&path).unwrap();
        assert_eq!(report.tool, "zt");
        assert_eq!(report.sections.len(), 4);

        let second = &report.sections[1];
        assert_eq!(second.kind, SequenceKind::SumExponential);
        assert_eq!(second.roc, "|z| > max(2, 3)");
        assert_eq!(second.roc_form, Roc::ExteriorOfMax { r1: 2.0, r2: 3.0 });
        assert_eq!(second.radius, 3.0);
        assert!(second.response.is_none());

        let fourth = report.sections[3].response.as_ref().unwrap();
        assert_eq!(fourth.theta.len(), fourth.magnitude.len());
        assert_eq!(report.sections[3].poles.len(), 2);
        assert_eq!(fourth.toggles(), ResponseToggles::BOTH);

        let original = outs[3].response.as_ref().unwrap();
        let rebuilt = fourth.to_samples();
        assert_eq!(rebuilt.theta, original.theta);
        for (a, b) in rebuilt.values.iter().zip(&original.values) {
            assert!((a - b).norm() < 1e-9 * (1.0 + b.norm()));
        }
    }

    #[test]
    fn missing_report_is_an_input_error() {
        let err = read_report_json(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
