//! Export sampled responses to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.
//! Sections without a sampled response contribute no rows.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::app::pipeline::SectionOutput;
use crate::error::AppError;

/// Write `section,theta,re,im,magnitude,phase` rows for every sampled section.
pub fn write_response_csv(path: &Path, sections: &[SectionOutput]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;

    // Header
    writeln!(file, "section,theta,re,im,magnitude,phase")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for out in sections {
        let Some(response) = &out.response else {
            continue;
        };
        for (&theta, v) in response.theta.iter().zip(&response.values) {
            writeln!(
                file,
                "{},{:.10},{:.10},{:.10},{:.10},{:.10}",
                out.index,
                theta,
                v.re,
                v.im,
                v.norm(),
                v.arg(),
            )
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
        }
    }

    Ok(())
}
