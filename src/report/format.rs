//! Formatted terminal output.
//!
//! We keep formatting code in one place so output changes are localized (the
//! integration tests compare stdout line by line).

use crate::app::pipeline::SectionOutput;
use crate::io::SectionRecord;

/// The three-line block printed for each section, preceded by a blank line.
///
/// ```text
///
/// 1. Sequence: 3^n u[n]
/// Z-transform: z/(z - 3)
/// ROC: |z| > 3
/// ```
pub fn format_section(out: &SectionOutput) -> String {
    section_block(out.index, &out.spec.describe(), &out.transform.to_string(), &out.roc.to_string())
}

/// Same block for a section read back from a JSON report.
pub fn format_record(record: &SectionRecord) -> String {
    section_block(record.index, &record.sequence, &record.transform, &record.roc)
}

fn section_block(index: usize, sequence: &str, transform: &str, roc: &str) -> String {
    format!("\n{index}. Sequence: {sequence}\nZ-transform: {transform}\nROC: {roc}")
}

/// Summary printed by `zt roc`.
pub fn format_roc_summary(text: &str, radius: f64) -> String {
    format!("ROC: {}\nRadius: {radius}", text.trim())
}

/// One line per singular sample, for sections that hit a pole.
pub fn format_singular_note(out: &SectionOutput) -> Option<String> {
    let response = out.response.as_ref()?;
    if response.singular.is_empty() {
        return None;
    }
    let angles: Vec<String> = response.singular.iter().map(|t| format!("{t:.6}")).collect();
    Some(format!(
        "Note: {} sample(s) on a pole at θ = [{}] rad",
        angles.len(),
        angles.join(", ")
    ))
}
