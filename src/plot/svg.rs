//! Plotters-powered SVG rendering of a `Figure`.
//!
//! Panels are stacked vertically in one SVG document, each with its own caption,
//! mesh (grid), axis descriptions and, when set, a legend entry.

use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use crate::plot::figure::{Figure, LineStyle, Panel};

const CURVE_COLOR: RGBColor = RGBColor(31, 119, 180);
const DASHED_COLOR: RGBColor = RED;

/// Draw `figure` into an SVG file at `path`.
pub fn write_svg(figure: &Figure, path: &Path) -> Result<(), Box<dyn Error>> {
    let root = SVGBackend::new(path, figure.size).into_drawing_area();
    root.fill(&WHITE)?;

    let rows = figure.panels.len().max(1);
    let areas = root.split_evenly((rows, 1));
    for (area, panel) in areas.iter().zip(&figure.panels) {
        draw_panel(area, panel)?;
    }

    root.present()?;
    Ok(())
}

fn draw_panel(area: &DrawingArea<SVGBackend<'_>, Shift>, panel: &Panel) -> Result<(), Box<dyn Error>> {
    let Some((x0, x1, y0, y1)) = panel.bounds() else {
        return Ok(());
    };

    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 16))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(50)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_desc(panel.x_label.as_str())
        .y_desc(panel.y_label.as_str())
        .x_labels(7)
        .y_labels(7)
        .draw()?;

    let finite: Vec<(f64, f64)> = panel
        .points
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();

    let color = match panel.style {
        LineStyle::Solid => CURVE_COLOR,
        LineStyle::Dashed => DASHED_COLOR,
    };
    let series = match panel.style {
        LineStyle::Solid => chart.draw_series(LineSeries::new(finite, color.stroke_width(2)))?,
        LineStyle::Dashed => chart.draw_series(DashedLineSeries::new(finite, 8, 5, color.stroke_width(2)))?,
    };

    if let Some(legend) = &panel.legend {
        series
            .label(legend.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    Ok(())
}
