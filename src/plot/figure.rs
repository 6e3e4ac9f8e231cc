//! Backend-neutral figure description.
//!
//! A `Figure` is plain data: the ROC and response modules build one, and a
//! `FigureSink` decides how to show it (terminal text, SVG file, or nothing).

/// Stroke style of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// One set of axes with a single curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Optional legend entry for the curve.
    pub legend: Option<String>,
    pub points: Vec<(f64, f64)>,
    pub style: LineStyle,
    /// Use the same scale on both axes (circles stay circles).
    pub equal_aspect: bool,
}

impl Panel {
    pub fn new(title: impl Into<String>, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            legend: None,
            points: Vec::new(),
            style: LineStyle::Solid,
            equal_aspect: false,
        }
    }

    pub fn with_points(mut self, points: Vec<(f64, f64)>) -> Self {
        self.points = points;
        self
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = Some(legend.into());
        self
    }

    pub fn with_equal_aspect(mut self) -> Self {
        self.equal_aspect = true;
        self
    }

    /// Data bounds `(x0, x1, y0, y1)`, padded by 5% and never degenerate.
    ///
    /// Returns `None` when the panel has no finite points.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut x0 = f64::INFINITY;
        let mut x1 = f64::NEG_INFINITY;
        let mut y0 = f64::INFINITY;
        let mut y1 = f64::NEG_INFINITY;
        for &(x, y) in &self.points {
            if !(x.is_finite() && y.is_finite()) {
                continue;
            }
            x0 = x0.min(x);
            x1 = x1.max(x);
            y0 = y0.min(y);
            y1 = y1.max(y);
        }
        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) {
            return None;
        }

        if self.equal_aspect {
            let (cx, cy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
            let half = ((x1 - x0).max(y1 - y0) / 2.0).max(1e-12);
            x0 = cx - half;
            x1 = cx + half;
            y0 = cy - half;
            y1 = cy + half;
        }

        let (x0, x1) = pad_range(x0, x1, 0.05);
        let (y0, y1) = pad_range(y0, y1, 0.05);
        Some((x0, x1, y0, y1))
    }
}

/// A titled stack of panels, drawn top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Short file-safe name (used for SVG file names).
    pub slug: String,
    /// Canvas size in pixels for image backends.
    pub size: (u32, u32),
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn new(slug: impl Into<String>, size: (u32, u32)) -> Self {
        Self {
            slug: slug.into(),
            size,
            panels: Vec::new(),
        }
    }

    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}
