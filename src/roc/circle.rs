//! ROC boundary circle.

use tracing::info;

use crate::domain::Roc;
use crate::error::AppError;
use crate::math::full_turn;
use crate::plot::{Figure, FigureSink, LineStyle, Panel};
use crate::roc::parse_roc;

/// Number of angles used to trace the boundary.
pub const ROC_POINTS: usize = 100;

/// Points `(r cos θ, r sin θ)` for evenly spaced θ over `[0, 2π]`.
pub fn roc_circle(radius: f64) -> Vec<(f64, f64)> {
    full_turn(ROC_POINTS)
        .into_iter()
        .map(|theta| (radius * theta.cos(), radius * theta.sin()))
        .collect()
}

/// Figure for a boundary of `radius`, titled with the ROC text.
pub fn roc_figure(slug: &str, radius: f64, description: &str) -> Figure {
    Figure::new(format!("{slug}_roc"), (400, 400)).with_panel(
        Panel::new(format!("ROC: {description}"), "Re(z)", "Im(z)")
            .with_points(roc_circle(radius))
            .with_style(LineStyle::Dashed)
            .with_legend("ROC Boundary")
            .with_equal_aspect(),
    )
}

/// Show the boundary circle of a structured ROC.
pub fn plot_roc(slug: &str, roc: &Roc, sink: &mut dyn FigureSink) -> Result<(), AppError> {
    let description = roc.to_string();
    info!(roc = %description, radius = roc.radius(), "plotting ROC");
    sink.show(&roc_figure(slug, roc.radius(), &description))
}

/// Parse a textual ROC description and show its boundary circle.
///
/// Returns the parsed radius.
pub fn plot_roc_text(slug: &str, text: &str, sink: &mut dyn FigureSink) -> Result<f64, AppError> {
    let radius = parse_roc(text)?;
    info!(roc = text, radius, "plotting ROC");
    sink.show(&roc_figure(slug, radius, text.trim()))?;
    Ok(radius)
}
