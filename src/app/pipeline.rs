//! Per-section workflow shared by `zt demo` and `zt transform`, plus the
//! `zt replot` path for saved reports.
//!
//! build (transform + ROC) -> print (caller) -> ROC circle -> frequency response
//!
//! Building is pure; plotting goes through a `FigureSink` so the same code
//! serves terminal, SVG and `--no-plot` runs.

use std::f64::consts::FRAC_PI_4;

use tracing::info;

use crate::domain::{ResponseToggles, Roc, Section, SequenceSpec, SingularPolicy};
use crate::error::AppError;
use crate::io::SectionRecord;
use crate::plot::FigureSink;
use crate::response::{SampledResponse, evaluate, response_figure};
use crate::roc::plot_roc;
use crate::transform::{Transform, build};

/// Everything computed for one section.
#[derive(Debug, Clone)]
pub struct SectionOutput {
    /// 1-based position in the run.
    pub index: usize,
    pub spec: SequenceSpec,
    pub toggles: ResponseToggles,
    pub transform: Transform,
    pub roc: Roc,
    /// Present when at least one response curve was requested.
    pub response: Option<SampledResponse>,
}

impl SectionOutput {
    /// File-safe name for this section's figures.
    pub fn slug(&self) -> String {
        format!("section{}", self.index)
    }
}

/// The four classic examples: two unstable exponentials (no response plot),
/// a decaying exponential and a sampled sinusoid.
pub fn demo_sections() -> Vec<Section> {
    vec![
        Section {
            spec: SequenceSpec::exponential(3.0).with_label("3^n u[n]"),
            toggles: ResponseToggles::NONE,
        },
        Section {
            spec: SequenceSpec::sum_exponential(2.0, 3.0).with_label("2^n*u[n] + 3^n*u[n]"),
            toggles: ResponseToggles::NONE,
        },
        Section {
            spec: SequenceSpec::exponential((-0.2f64).exp()).with_label("e^(-0.2n)*u[n]"),
            toggles: ResponseToggles::BOTH,
        },
        Section {
            spec: SequenceSpec::sinusoidal(FRAC_PI_4).with_label("sin(πn/4)u[n]"),
            toggles: ResponseToggles::BOTH,
        },
    ]
}

/// Compute the transform and ROC for a section.
pub fn build_section(index: usize, section: &Section) -> SectionOutput {
    let (transform, roc) = build(&section.spec);
    info!(index, sequence = %section.spec.describe(), "built section");
    SectionOutput {
        index,
        spec: section.spec.clone(),
        toggles: section.toggles,
        transform,
        roc,
        response: None,
    }
}

/// Show the ROC circle, then sample and show the requested response curves.
pub fn plot_section(out: &mut SectionOutput, policy: SingularPolicy, sink: &mut dyn FigureSink) -> Result<(), AppError> {
    let slug = out.slug();
    plot_roc(&slug, &out.roc, sink)?;
    out.response = evaluate(&slug, &out.transform, out.toggles, policy, sink)?;
    Ok(())
}

/// Show a saved section again: its ROC circle, then the stored response.
pub fn replot_record(record: &SectionRecord, sink: &mut dyn FigureSink) -> Result<(), AppError> {
    let slug = format!("section{}", record.index);
    plot_roc(&slug, &record.roc_form, sink)?;
    if let Some(response) = &record.response {
        if let Some(fig) = response_figure(&slug, &response.to_samples(), response.toggles()) {
            sink.show(&fig)?;
        }
    }
    Ok(())
}
