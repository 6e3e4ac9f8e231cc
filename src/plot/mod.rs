//! Figures and the places they can be shown.
//!
//! - `figure`: backend-neutral figure/panel description
//! - `ascii`: fixed-grid terminal rendering
//! - `svg`: Plotters SVG rendering
//!
//! `FigureSink` is the seam between the components that build figures and the
//! backend chosen on the command line.

use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::domain::PlotTarget;
use crate::error::AppError;

pub mod ascii;
pub mod figure;
pub mod svg;

pub use figure::{Figure, LineStyle, Panel};

/// Something that can show a figure.
pub trait FigureSink {
    fn show(&mut self, figure: &Figure) -> Result<(), AppError>;
}

/// Prints ASCII plots to a writer (stdout in the binary).
pub struct TerminalSink<W: Write> {
    out: W,
    width: usize,
    height: usize,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, width: usize, height: usize) -> Self {
        Self { out, width, height }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FigureSink for TerminalSink<W> {
    fn show(&mut self, figure: &Figure) -> Result<(), AppError> {
        let text = ascii::render_figure(figure, self.width, self.height);
        writeln!(self.out, "{text}").map_err(|e| AppError::new(4, format!("Failed to write plot: {e}")))
    }
}

/// Writes one SVG file per figure into a directory.
pub struct SvgSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl SvgSink {
    pub fn new(dir: PathBuf) -> Result<Self, AppError> {
        std::fs::create_dir_all(&dir)
            .map_err(|e| AppError::new(2, format!("Failed to create SVG dir '{}': {e}", dir.display())))?;
        Ok(Self {
            dir,
            written: Vec::new(),
        })
    }

    /// Files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl FigureSink for SvgSink {
    fn show(&mut self, figure: &Figure) -> Result<(), AppError> {
        let path = self.dir.join(format!("{}.svg", figure.slug));
        svg::write_svg(figure, &path)
            .map_err(|e| AppError::new(4, format!("Failed to render '{}': {e}", path.display())))?;
        info!(path = %path.display(), "wrote figure");
        self.written.push(path);
        Ok(())
    }
}

/// Discards figures (`--no-plot`).
pub struct NullSink;

impl FigureSink for NullSink {
    fn show(&mut self, _figure: &Figure) -> Result<(), AppError> {
        Ok(())
    }
}

/// Build the sink for a configured plot target, writing terminal plots to stdout.
pub fn sink_for(target: &PlotTarget) -> Result<Box<dyn FigureSink>, AppError> {
    Ok(match target {
        PlotTarget::Off => Box::new(NullSink),
        PlotTarget::Terminal { width, height } => Box::new(TerminalSink::new(std::io::stdout(), *width, *height)),
        PlotTarget::Svg { dir } => Box::new(SvgSink::new(dir.clone())?),
    })
}

/// Test sink that records every figure it is shown.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub shown: Vec<Figure>,
}

#[cfg(test)]
impl FigureSink for RecordingSink {
    fn show(&mut self, figure: &Figure) -> Result<(), AppError> {
        self.shown.push(figure.clone());
        Ok(())
    }
}
