//! Item placement records and their resolution to rects.

use cellgrid_core::{Axis, Rect};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::anchor::Anchor;
use crate::axis::{resolve_index, wrap_index, AxisModel};
use crate::error::{GridError, Result};
use crate::solver::CellRects;

/// A cell address as given by the caller.
///
/// Negative indices count from the last row or column and are kept that way,
/// so `Cell::new(-1, 0)` follows the last row when the grid grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Row index
    pub row: isize,
    /// Column index
    pub col: isize,
}

impl Cell {
    /// Create a cell address.
    #[must_use]
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }
}

/// A concrete, ordered range of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSpan {
    /// Top-left cell as (row, col)
    pub start: (usize, usize),
    /// Bottom-right cell as (row, col), inclusive
    pub end: (usize, usize),
}

impl CellSpan {
    /// Does this span cover `(row, col)`?
    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.start.0 && row <= self.end.0 && col >= self.start.1 && col <= self.end.1
    }

    /// Number of rows covered.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.end.0 - self.start.0 + 1
    }

    /// Number of columns covered.
    #[must_use]
    pub const fn col_count(&self) -> usize {
        self.end.1 - self.start.1 + 1
    }
}

/// Placement record stored for every managed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridItem {
    /// First cell, raw
    pub start: Cell,
    /// Last cell, raw and inclusive
    pub end: Cell,
    /// Width limit, 0 = fill
    pub max_width: u32,
    /// Height limit, 0 = fill
    pub max_height: u32,
    /// Alignment when smaller than the span
    pub anchor: Anchor,
}

fn wrap_on(axis: Axis, index: isize, len: usize) -> usize {
    if resolve_index(index, len).is_none() {
        debug!("{axis} index {index} no longer fits {len} {axis}(s), wrapping");
    }
    wrap_index(index, len)
}

fn clamp_extent(extent: f32, max: u32) -> f32 {
    if max > 0 && (max as f32) < extent {
        max as f32
    } else {
        extent
    }
}

impl GridItem {
    /// Concrete span on a grid of `rows` x `cols`.
    ///
    /// Indices wrap onto the current axis length, so records stay valid after
    /// the grid shrinks underneath them.
    #[must_use]
    pub fn span(&self, rows: usize, cols: usize) -> CellSpan {
        let r1 = wrap_on(Axis::Row, self.start.row, rows);
        let r2 = wrap_on(Axis::Row, self.end.row, rows);
        let c1 = wrap_on(Axis::Column, self.start.col, cols);
        let c2 = wrap_on(Axis::Column, self.end.col, cols);
        CellSpan {
            start: (r1.min(r2), c1.min(c2)),
            end: (r1.max(r2), c1.max(c2)),
        }
    }

    /// Final float rect for this item, before snapping to the host's integer
    /// grid. `None` only when `cells` is empty.
    #[must_use]
    pub fn resolve(&self, cells: &CellRects) -> Option<Rect> {
        let span = self.span(cells.rows(), cells.cols());
        let first = cells.get(span.start.0, span.start.1)?;
        let last = cells.get(span.end.0, span.end.1)?;
        let bounds = first.span_to(&last);

        let width = clamp_extent(bounds.width, self.max_width);
        let height = clamp_extent(bounds.height, self.max_height);
        let offset = self.anchor.offset(bounds, width, height);

        Some(Rect::new(
            bounds.x + offset.x,
            bounds.y + offset.y,
            width,
            height,
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum End {
    Cell(Cell),
    Span { rows: usize, cols: usize },
}

/// Request to place an item, validated into a [`GridItem`] by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    start: Cell,
    end: Option<End>,
    max_width: u32,
    max_height: u32,
    anchor: Anchor,
}

impl Placement {
    /// Place in a single cell.
    #[must_use]
    pub const fn cell(row: isize, col: isize) -> Self {
        Self {
            start: Cell::new(row, col),
            end: None,
            max_width: 0,
            max_height: 0,
            anchor: Anchor::Nw,
        }
    }

    /// Extend to `(row, col)`, inclusive.
    #[must_use]
    pub const fn to(mut self, row: isize, col: isize) -> Self {
        self.end = Some(End::Cell(Cell::new(row, col)));
        self
    }

    /// Cover `rows` x `cols` cells starting at the first cell.
    #[must_use]
    pub const fn span(mut self, rows: usize, cols: usize) -> Self {
        self.end = Some(End::Span { rows, cols });
        self
    }

    /// Limit the item's size; 0 leaves that dimension unconstrained.
    #[must_use]
    pub const fn max_size(mut self, width: u32, height: u32) -> Self {
        self.max_width = width;
        self.max_height = height;
        self
    }

    /// Set the anchor.
    #[must_use]
    pub const fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Validate against the current axes and build the stored record.
    ///
    /// Non-negative ranges given back to front are swapped. Ranges using
    /// tail-relative indices are stored as given and ordered when resolved.
    pub fn into_item(self, rows: &AxisModel, cols: &AxisModel) -> Result<GridItem> {
        rows.resolve(self.start.row)?;
        cols.resolve(self.start.col)?;

        let end = match self.end {
            None => self.start,
            Some(End::Cell(cell)) => {
                rows.resolve(cell.row)?;
                cols.resolve(cell.col)?;
                cell
            }
            Some(End::Span {
                rows: row_span,
                cols: col_span,
            }) => Cell::new(
                span_end(rows, self.start.row, row_span)?,
                span_end(cols, self.start.col, col_span)?,
            ),
        };

        let (start_row, end_row) = ordered(self.start.row, end.row);
        let (start_col, end_col) = ordered(self.start.col, end.col);

        Ok(GridItem {
            start: Cell::new(start_row, start_col),
            end: Cell::new(end_row, end_col),
            max_width: self.max_width,
            max_height: self.max_height,
            anchor: self.anchor,
        })
    }
}

impl From<(isize, isize)> for Placement {
    fn from((row, col): (isize, isize)) -> Self {
        Self::cell(row, col)
    }
}

fn span_end(axis: &AxisModel, start: isize, span: usize) -> Result<isize> {
    if span == 0 {
        return Err(GridError::invalid(format!(
            "{} span must cover at least 1 cell",
            axis.axis()
        )));
    }
    let first = axis.resolve(start)?;
    let out_of_range = || GridError::IndexOutOfRange {
        axis: axis.axis(),
        index: isize::try_from(first.saturating_add(span - 1)).unwrap_or(isize::MAX),
        len: axis.len(),
    };
    if first.saturating_add(span - 1) >= axis.len() {
        return Err(out_of_range());
    }
    let extra = isize::try_from(span - 1).map_err(|_| out_of_range())?;
    Ok(start + extra)
}

fn ordered(start: isize, end: isize) -> (isize, isize) {
    if start >= 0 && end >= 0 && start > end {
        (end, start)
    } else {
        (start, end)
    }
}
