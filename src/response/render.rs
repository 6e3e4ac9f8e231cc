//! Magnitude/phase figures.

use tracing::info;

use crate::domain::{ResponseToggles, SingularPolicy};
use crate::error::AppError;
use crate::plot::{Figure, FigureSink, Panel};
use crate::response::sample::{SampledResponse, sample_response};
use crate::transform::Transform;

const X_LABEL: &str = "Frequency (radians)";

fn magnitude_panel(samples: &SampledResponse) -> Panel {
    Panel::new("Magnitude Response", X_LABEL, "Magnitude")
        .with_points(samples.theta.iter().copied().zip(samples.magnitude()).collect())
}

fn phase_panel(samples: &SampledResponse) -> Panel {
    Panel::new("Phase Response", X_LABEL, "Phase (radians)")
        .with_points(samples.theta.iter().copied().zip(samples.phase()).collect())
}

/// Build the response figure for the requested curves.
///
/// Magnitude is stacked above phase when both are requested; `None` when
/// neither is.
pub fn response_figure(slug: &str, samples: &SampledResponse, toggles: ResponseToggles) -> Option<Figure> {
    let slug = format!("{slug}_response");
    let fig = match (toggles.show_magnitude, toggles.show_phase) {
        (true, true) => Figure::new(slug, (800, 800))
            .with_panel(magnitude_panel(samples))
            .with_panel(phase_panel(samples)),
        (true, false) => Figure::new(slug, (400, 400)).with_panel(magnitude_panel(samples)),
        (false, true) => Figure::new(slug, (600, 400)).with_panel(phase_panel(samples)),
        (false, false) => return None,
    };
    Some(fig)
}

/// Sample `transform` on the unit circle and show the requested curves.
///
/// With both toggles off nothing is sampled or shown and `Ok(None)` is
/// returned. Otherwise the samples are returned for export.
pub fn evaluate(
    slug: &str,
    transform: &Transform,
    toggles: ResponseToggles,
    policy: SingularPolicy,
    sink: &mut dyn FigureSink,
) -> Result<Option<SampledResponse>, AppError> {
    if !toggles.any() {
        return Ok(None);
    }

    let samples = sample_response(transform, policy)?;
    if let Some(fig) = response_figure(slug, &samples, toggles) {
        info!(
            slug = %fig.slug,
            panels = fig.panels.len(),
            skipped = samples.singular.len(),
            "plotting frequency response"
        );
        sink.show(&fig)?;
    }
    Ok(Some(samples))
}
