//! ASCII plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - curve: `*` (dashed curves alternate two cells on, two off)
//! - axes through the origin, when in range: `.`

use crate::plot::figure::{Figure, LineStyle, Panel};

const CURVE: char = '*';
const AXIS: char = '.';

/// Render every panel of a figure, top to bottom.
pub fn render_figure(figure: &Figure, width: usize, height: usize) -> String {
    figure
        .panels
        .iter()
        .map(|panel| render_panel(panel, width, height))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a single panel.
pub fn render_panel(panel: &Panel, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let mut out = String::new();
    out.push_str(&panel.title);
    if let Some(legend) = &panel.legend {
        out.push_str(&format!("  [{} {legend}]", legend_glyph(panel.style)));
    }
    out.push('\n');

    let Some((x_min, x_max, y_min, y_max)) = panel.bounds() else {
        out.push_str("(no finite points to plot)\n");
        return out;
    };

    out.push_str(&format!(
        "x: {} [{x_min:.3}, {x_max:.3}] | y: {} [{y_min:.3}, {y_max:.3}]\n",
        panel.x_label, panel.y_label
    ));

    let mut grid = vec![vec![' '; width]; height];

    // Axes first so the curve can overwrite them.
    if x_min < 0.0 && x_max > 0.0 {
        let x = map_x(0.0, x_min, x_max, width);
        for row in grid.iter_mut() {
            row[x] = AXIS;
        }
    }
    if y_min < 0.0 && y_max > 0.0 {
        let y = map_y(0.0, y_min, y_max, height);
        grid[y].fill(AXIS);
    }

    draw_curve(&mut grid, &panel.points, panel.style, (x_min, x_max), (y_min, y_max));

    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }

    out
}

fn legend_glyph(style: LineStyle) -> &'static str {
    match style {
        LineStyle::Solid => "***",
        LineStyle::Dashed => "* *",
    }
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(
    grid: &mut [Vec<char>],
    points: &[(f64, f64)],
    style: LineStyle,
    (x_min, x_max): (f64, f64),
    (y_min, y_max): (f64, f64),
) {
    let height = grid.len();
    let width = grid[0].len();
    let mut pen = Pen { style, step: 0 };

    let mut prev = None;
    for &(x, y) in points {
        if !(x.is_finite() && y.is_finite()) {
            prev = None;
            continue;
        }
        let cx = map_x(x, x_min, x_max, width);
        let cy = map_y(y, y_min, y_max, height);
        match prev {
            Some((x0, y0)) => draw_line(grid, &mut pen, x0, y0, cx, cy),
            None => pen.plot(grid, cx as isize, cy as isize),
        }
        prev = Some((cx, cy));
    }
}

/// Tracks the dash phase along a polyline (2 cells on, 2 off).
struct Pen {
    style: LineStyle,
    step: usize,
}

impl Pen {
    fn plot(&mut self, grid: &mut [Vec<char>], x: isize, y: isize) {
        let on = match self.style {
            LineStyle::Solid => true,
            LineStyle::Dashed => self.step % 4 < 2,
        };
        self.step += 1;
        if on && y >= 0 && (y as usize) < grid.len() && x >= 0 && (x as usize) < grid[0].len() {
            grid[y as usize][x as usize] = CURVE;
        }
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], pen: &mut Pen, x0: usize, y0: usize, x1: usize, y1: usize) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        pen.plot(grid, x0, y0);

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
