//! Cell rectangle computation.
//!
//! Splits a content rect into one rect per (row, column) pair:
//! - Fixed series take their size first
//! - Weighted series share what is left in proportion to their weight
//! - Spacing is carved out of each cell, half on every side, and never
//!   consumes layout space of its own

use cellgrid_core::{Point, Rect};
use log::debug;

use crate::axis::{AxisModel, WeightSum};

/// Offset and untrimmed size of one row or column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    /// Offset from the content origin
    pub start: f32,
    /// Provisional size, spacing not yet removed
    pub size: f32,
}

/// Row-major cell rects for a whole grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellRects {
    rows: usize,
    cols: usize,
    rects: Vec<Rect>,
}

impl CellRects {
    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Rect of the cell at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Rect> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.rects.get(row * self.cols + col).copied()
    }

    /// Iterate `(row, col, rect)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Rect)> + '_ {
        let cols = self.cols.max(1);
        self.rects
            .iter()
            .enumerate()
            .map(move |(i, rect)| (i / cols, i % cols, *rect))
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// True when no cells were computed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}

/// Compute track offsets and sizes along one axis.
#[must_use]
pub fn compute_tracks(axis: &AxisModel, available: f32, policy: WeightSum) -> Vec<Track> {
    let fixed_total = axis.min_size_sum() as f32;
    let unallocated = (available - fixed_total).max(0.0);

    let mut weight_sum = axis.weight_sum(policy);
    if weight_sum <= f64::from(f32::EPSILON) {
        debug!(
            "{} weights sum to {weight_sum}, dividing by 1 instead",
            axis.axis()
        );
        weight_sum = 1.0;
    }

    let mut tracks = Vec::with_capacity(axis.len());
    let mut position = 0.0;
    for series in axis.iter() {
        let size = series.provisional_size(unallocated, weight_sum);
        tracks.push(Track {
            start: position,
            size,
        });
        position += size;
    }
    tracks
}

/// Compute every cell rect of a grid over `content`.
#[must_use]
pub fn compute_cells(
    rows: &AxisModel,
    cols: &AxisModel,
    content: Rect,
    spacing: Point,
    policy: WeightSum,
) -> CellRects {
    let row_tracks = compute_tracks(rows, content.height, policy);
    let col_tracks = compute_tracks(cols, content.width, policy);

    let half = Point::new(spacing.x / 2.0, spacing.y / 2.0);
    let mut rects = Vec::with_capacity(row_tracks.len() * col_tracks.len());

    for row in &row_tracks {
        let y = content.y + row.start + half.y;
        let height = (row.size - spacing.y).max(0.0);
        for col in &col_tracks {
            rects.push(Rect::new(
                content.x + col.start + half.x,
                y,
                (col.size - spacing.x).max(0.0),
                height,
            ));
        }
    }

    CellRects {
        rows: row_tracks.len(),
        cols: col_tracks.len(),
        rects,
    }
}
