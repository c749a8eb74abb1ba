use std::path::Path;

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::color::emotion_palette;
use crate::data::filter::{emotion_indices, filtered_indices, Mode};
use crate::data::model::{Emotion, TrialTable, EMOTIONS};

// ---------------------------------------------------------------------------
// Grid geometry and scatter styling
// ---------------------------------------------------------------------------

/// Valence/arousal ratings live in [-AXIS_BOUND, AXIS_BOUND] on both axes.
pub const AXIS_BOUND: f64 = 4.5;

/// Density reads through overplotting: big, almost-transparent markers.
const POINT_ALPHA: f64 = 0.1;
const POINT_RADIUS: i32 = 9;

// 2×3 grid of near-square cells plus a supertitle strip.
const CELL_WIDTH: u32 = 650;
const CELL_HEIGHT: u32 = 670;
const TITLE_HEIGHT: u32 = 50;

const ZERO_LINE: RGBColor = RGBColor(160, 160, 160);

// ---------------------------------------------------------------------------
// Faceted scatter grid
// ---------------------------------------------------------------------------

/// Render one 2×3 scatter grid for the given mode and save it as a PNG.
///
/// One subplot per emotion category in fixed order; the sixth cell is left
/// blank. Categories with no matching rows render as empty axes. The backend
/// is flushed before returning so sequential renders never share state.
pub fn render_grid(table: &TrialTable, mode: Mode, path: &Path) -> Result<()> {
    let size = (3 * CELL_WIDTH, 2 * CELL_HEIGHT + TITLE_HEIGHT);
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)
        .with_context(|| format!("preparing '{}'", path.display()))?;

    let grid = root.titled(&format!("mode: {mode}"), ("sans-serif", 36))?;
    let cells = grid.split_evenly((2, 3));

    let rows = filtered_indices(table, mode);
    let palette = emotion_palette();
    for ((emotion, cell), colour) in EMOTIONS.iter().zip(&cells).zip(&palette) {
        scatter_cell(table, &rows, *emotion, cell, *colour)
            .with_context(|| format!("drawing '{}' subplot", emotion.name()))?;
    }
    // cells[5] stays blank

    root.present()
        .with_context(|| format!("writing '{}'", path.display()))?;
    Ok(())
}

/// Draw one per-emotion subplot: fixed bounds, zero-reference lines, scatter.
fn scatter_cell(
    table: &TrialTable,
    rows: &[usize],
    emotion: Emotion,
    cell: &DrawingArea<BitMapBackend<'_>, Shift>,
    colour: RGBColor,
) -> Result<()> {
    let mut chart = ChartBuilder::on(cell)
        .caption(emotion.name(), ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-AXIS_BOUND..AXIS_BOUND, -AXIS_BOUND..AXIS_BOUND)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("valence")
        .y_desc("arousal")
        .draw()?;

    // Zero-reference lines at valence = 0 and arousal = 0.
    chart.draw_series(LineSeries::new(
        vec![(-AXIS_BOUND, 0.0), (AXIS_BOUND, 0.0)],
        &ZERO_LINE,
    ))?;
    chart.draw_series(LineSeries::new(
        vec![(0.0, -AXIS_BOUND), (0.0, AXIS_BOUND)],
        &ZERO_LINE,
    ))?;

    let points = emotion_indices(table, rows, emotion);
    chart.draw_series(points.iter().map(|&i| {
        let t = &table.trials[i];
        Circle::new(
            (t.valence, t.arousal),
            POINT_RADIUS,
            colour.mix(POINT_ALPHA).filled(),
        )
    }))?;

    Ok(())
}
