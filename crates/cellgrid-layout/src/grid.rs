//! Grid orchestration: axes, item registry and host write-back.

use cellgrid_core::{Axis, ItemGeometry, Point, Rect, Surface};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::axis::{check_capacity, AxisModel, Series, SeriesUpdate, WeightSum};
use crate::error::{GridError, Result};
use crate::placement::{CellSpan, GridItem, Placement};
use crate::solver::{compute_cells, CellRects};

/// Construction options beyond the axis counts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridOptions {
    /// Horizontal and vertical space between cells
    pub spacing: Point,
    /// Space between the container edge and the outer cells
    pub padding: Point,
    /// Which weights divide the unallocated space
    pub weight_sum: WeightSum,
}

impl GridOptions {
    /// Create default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set spacing.
    #[must_use]
    pub const fn spacing(mut self, spacing: Point) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set padding.
    #[must_use]
    pub const fn padding(mut self, padding: Point) -> Self {
        self.padding = padding;
        self
    }

    /// Set the weight-sum policy.
    #[must_use]
    pub const fn weight_sum(mut self, weight_sum: WeightSum) -> Self {
        self.weight_sum = weight_sum;
        self
    }
}

/// New length for an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resize {
    /// Exactly this many series
    To(usize),
    /// Add (or, when negative, remove) this many series
    By(isize),
}

impl Resize {
    fn target(self, current: usize) -> usize {
        match self {
            Self::To(len) => len,
            Self::By(delta) if delta >= 0 => current.saturating_add(delta.unsigned_abs()),
            Self::By(delta) => current.saturating_sub(delta.unsigned_abs()),
        }
    }
}

/// Partial update of grid-wide settings. Unset fields are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridUpdate {
    /// Row count change
    pub rows: Option<Resize>,
    /// Column count change
    pub cols: Option<Resize>,
    /// New padding
    pub padding: Option<Point>,
    /// New spacing
    pub spacing: Option<Point>,
}

impl GridUpdate {
    /// Create an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row count.
    #[must_use]
    pub const fn rows(mut self, rows: usize) -> Self {
        self.rows = Some(Resize::To(rows));
        self
    }

    /// Set the column count.
    #[must_use]
    pub const fn cols(mut self, cols: usize) -> Self {
        self.cols = Some(Resize::To(cols));
        self
    }

    /// Add or remove rows at the tail.
    #[must_use]
    pub const fn add_rows(mut self, delta: isize) -> Self {
        self.rows = Some(Resize::By(delta));
        self
    }

    /// Add or remove columns at the tail.
    #[must_use]
    pub const fn add_cols(mut self, delta: isize) -> Self {
        self.cols = Some(Resize::By(delta));
        self
    }

    /// Set padding.
    #[must_use]
    pub const fn padding(mut self, padding: Point) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Set spacing.
    #[must_use]
    pub const fn spacing(mut self, spacing: Point) -> Self {
        self.spacing = Some(spacing);
        self
    }
}

/// Snapshot of a grid's settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfiguration {
    /// Row count
    pub rows: usize,
    /// Column count
    pub cols: usize,
    /// Row series in order
    pub row_series: Vec<Series>,
    /// Column series in order
    pub col_series: Vec<Series>,
    /// Spacing between cells
    pub spacing: Point,
    /// Padding inside the container
    pub padding: Point,
    /// Weight-sum policy
    pub weight_sum: WeightSum,
}

fn check_point(field: &'static str, point: Point) -> Result<Point> {
    GridError::check_non_negative(field, point.x)?;
    GridError::check_non_negative(field, point.y)?;
    Ok(point)
}

/// Lays out host items in a table of weighted rows and columns.
///
/// Every mutating call validates first, then updates state and redraws. A
/// failed call changes nothing.
pub struct Grid<S: Surface> {
    surface: S,
    target: S::Id,
    rows: AxisModel,
    cols: AxisModel,
    spacing: Point,
    padding: Point,
    weight_sum: WeightSum,
    items: Vec<(S::Id, GridItem)>,
}

impl<S: Surface> Grid<S> {
    /// Create a grid over `target` with `cols` columns and `rows` rows.
    pub fn new(surface: S, target: S::Id, cols: usize, rows: usize) -> Result<Self> {
        Self::with_options(surface, target, cols, rows, GridOptions::default())
    }

    /// Create a grid with explicit spacing, padding and weight policy.
    pub fn with_options(
        surface: S,
        target: S::Id,
        cols: usize,
        rows: usize,
        options: GridOptions,
    ) -> Result<Self> {
        let rows = AxisModel::new(Axis::Row, rows)?;
        let cols = AxisModel::new(Axis::Column, cols)?;
        let spacing = check_point("spacing", options.spacing)?;
        let padding = check_point("padding", options.padding)?;
        Ok(Self {
            surface,
            target,
            rows,
            cols,
            spacing,
            padding,
            weight_sum: options.weight_sum,
            items: Vec::new(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Container the grid scales to.
    pub const fn target(&self) -> &S::Id {
        &self.target
    }

    /// Host surface.
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Host surface, mutably. Changes take effect on the next redraw.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols.len()
    }

    /// Space between cells.
    pub const fn spacing(&self) -> Point {
        self.spacing
    }

    /// Space between the container edge and the outer cells.
    pub const fn padding(&self) -> Point {
        self.padding
    }

    /// Weight-sum policy.
    pub const fn weight_sum(&self) -> WeightSum {
        self.weight_sum
    }

    /// Weight of every row.
    pub fn row_weights(&self) -> Vec<f32> {
        self.rows.weights()
    }

    /// Weight of every column.
    pub fn col_weights(&self) -> Vec<f32> {
        self.cols.weights()
    }

    /// Row series at `index`.
    pub fn row_configuration(&self, index: isize) -> Result<Series> {
        self.rows.get(index)
    }

    /// Column series at `index`.
    pub fn col_configuration(&self, index: isize) -> Result<Series> {
        self.cols.get(index)
    }

    /// Snapshot of all settings.
    pub fn configuration(&self) -> GridConfiguration {
        GridConfiguration {
            rows: self.rows(),
            cols: self.cols(),
            row_series: self.rows.series().to_vec(),
            col_series: self.cols.series().to_vec(),
            spacing: self.spacing,
            padding: self.padding,
            weight_sum: self.weight_sum,
        }
    }

    /// Number of managed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no items are managed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Managed items in placement order.
    pub fn items(&self) -> impl Iterator<Item = (&S::Id, &GridItem)> {
        self.items.iter().map(|(id, item)| (id, item))
    }

    /// Stored record of `item`.
    pub fn item(&self, item: &S::Id) -> Option<&GridItem> {
        self.position_of(item).map(|idx| &self.items[idx].1)
    }

    /// Current cells covered by `item`.
    pub fn coords(&self, item: &S::Id) -> Option<CellSpan> {
        self.item(item)
            .map(|record| record.span(self.rows(), self.cols()))
    }

    /// Item covering `(row, col)`; the most recently placed one wins when
    /// several overlap.
    pub fn item_at(&self, row: isize, col: isize) -> Result<Option<&S::Id>> {
        let row = self.rows.resolve(row)?;
        let col = self.cols.resolve(col)?;
        let (rows, cols) = (self.rows(), self.cols());
        Ok(self
            .items
            .iter()
            .rev()
            .find(|(_, item)| item.span(rows, cols).contains(row, col))
            .map(|(id, _)| id))
    }

    /// Items whose first cell is in `row`, ordered by column.
    pub fn items_in_row(&self, row: isize) -> Result<Vec<&S::Id>> {
        let row = self.rows.resolve(row)?;
        let (rows, cols) = (self.rows(), self.cols());
        let mut found: Vec<(usize, &S::Id)> = self
            .items
            .iter()
            .filter_map(|(id, item)| {
                let span = item.span(rows, cols);
                (span.start.0 == row).then_some((span.start.1, id))
            })
            .collect();
        found.sort_by_key(|(col, _)| *col);
        Ok(found.into_iter().map(|(_, id)| id).collect())
    }

    /// Container rect reduced by padding.
    pub fn content_rect(&self) -> Rect {
        self.surface.content_rect(&self.target).inset(self.padding)
    }

    /// Cell rects for the container's current size.
    pub fn cell_rects(&self) -> CellRects {
        compute_cells(
            &self.rows,
            &self.cols,
            self.content_rect(),
            self.spacing,
            self.weight_sum,
        )
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Manage `item` at `placement`, replacing any earlier placement.
    pub fn place(&mut self, item: S::Id, placement: impl Into<Placement>) -> Result<()> {
        let placement: Placement = placement.into();
        let record = placement.into_item(&self.rows, &self.cols)?;
        if let Some(idx) = self.position_of(&item) {
            self.items.remove(idx);
        }
        self.items.push((item, record));
        self.redraw();
        Ok(())
    }

    /// Update row/column counts, padding or spacing.
    ///
    /// Shrinking is not checked against placed items; their indices wrap
    /// onto the smaller axis at the next redraw.
    pub fn configure(&mut self, update: GridUpdate) -> Result<()> {
        let rows = update.rows.map(|r| r.target(self.rows()));
        let cols = update.cols.map(|c| c.target(self.cols()));
        if rows == Some(0) {
            return Err(GridError::invalid("requires at least 1 row"));
        }
        if cols == Some(0) {
            return Err(GridError::invalid("requires at least 1 column"));
        }
        if let Some(len) = rows {
            check_capacity(Axis::Row, len)?;
        }
        if let Some(len) = cols {
            check_capacity(Axis::Column, len)?;
        }
        let padding = update
            .padding
            .map(|p| check_point("padding", p))
            .transpose()?;
        let spacing = update
            .spacing
            .map(|s| check_point("spacing", s))
            .transpose()?;

        if let Some(len) = rows {
            self.rows.set_len(len)?;
        }
        if let Some(len) = cols {
            self.cols.set_len(len)?;
        }
        if let Some(padding) = padding {
            self.padding = padding;
        }
        if let Some(spacing) = spacing {
            self.spacing = spacing;
        }
        self.redraw();
        Ok(())
    }

    /// Update one row's series.
    pub fn configure_row(&mut self, index: isize, update: SeriesUpdate) -> Result<Series> {
        self.configure_series(Axis::Row, index, update)
    }

    /// Update one column's series.
    pub fn configure_col(&mut self, index: isize, update: SeriesUpdate) -> Result<Series> {
        self.configure_series(Axis::Column, index, update)
    }

    /// Update one series on `axis`.
    pub fn configure_series(
        &mut self,
        axis: Axis,
        index: isize,
        update: SeriesUpdate,
    ) -> Result<Series> {
        let model = match axis {
            Axis::Row => &mut self.rows,
            Axis::Column => &mut self.cols,
        };
        let series = model.configure(index, update)?;
        self.redraw();
        Ok(series)
    }

    /// Switch the weight-sum policy.
    pub fn set_weight_sum(&mut self, weight_sum: WeightSum) {
        self.weight_sum = weight_sum;
        self.redraw();
    }

    /// Stop managing every item. Their last geometry stays as written.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Stop managing `item` and return its record.
    pub fn clear_item(&mut self, item: &S::Id) -> Option<GridItem> {
        let idx = self.position_of(item)?;
        Some(self.items.remove(idx).1)
    }

    /// Recompute every cell and write every managed item's geometry.
    ///
    /// Returns the number of items written. Suitable as a resize callback.
    pub fn redraw(&mut self) -> usize {
        let cells = self.cell_rects();
        debug!(
            "redraw {:?}: {}x{} cells, {} item(s)",
            self.target,
            cells.rows(),
            cells.cols(),
            self.items.len()
        );

        let mut written = 0;
        for (id, item) in &self.items {
            let Some(rect) = item.resolve(&cells) else {
                continue;
            };
            let geometry = ItemGeometry::from_rect(rect);
            trace!("{id:?} -> {geometry:?}");
            self.surface.set_item_geometry(id, geometry);
            written += 1;
        }
        written
    }

    fn position_of(&self, item: &S::Id) -> Option<usize> {
        self.items.iter().position(|(id, _)| id == item)
    }
}

impl<S: Surface> fmt::Debug for Grid<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("target", &self.target)
            .field("rows", &self.rows.len())
            .field("cols", &self.cols.len())
            .field("spacing", &self.spacing)
            .field("padding", &self.padding)
            .field("weight_sum", &self.weight_sum)
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anchor::Anchor;
    use crate::axis::SeriesPolicy;
    use cellgrid_core::RecordingSurface;

    type TestGrid = Grid<RecordingSurface<&'static str>>;

    fn grid(cols: usize, rows: usize, side: f32) -> TestGrid {
        let surface = RecordingSurface::with_container("win", Rect::new(0.0, 0.0, side, side));
        Grid::new(surface, "win", cols, rows).unwrap()
    }

    fn written(grid: &TestGrid, item: &'static str) -> ItemGeometry {
        grid.surface().geometry(&item).unwrap()
    }

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[test]
    fn test_grid_new() {
        let g = grid(3, 2, 100.0);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.rows(), 2);
        assert_eq!(g.spacing(), Point::ORIGIN);
        assert_eq!(g.padding(), Point::ORIGIN);
        assert_eq!(g.target(), &"win");
        assert!(g.is_empty());
    }

    #[test]
    fn test_grid_new_rejects_zero_axes() {
        let surface = RecordingSurface::<&str>::new();
        let err = Grid::new(surface.clone(), "win", 0, 1).unwrap_err();
        assert!(matches!(err, GridError::InvalidArgument(_)));
        let err = Grid::new(surface, "win", 1, 0).unwrap_err();
        assert!(matches!(err, GridError::InvalidArgument(_)));
    }

    #[test]
    fn test_grid_with_options_rejects_negative_padding() {
        let surface = RecordingSurface::<&str>::new();
        let options = GridOptions::new().padding(Point::new(-1.0, 0.0));
        let err = Grid::with_options(surface, "win", 1, 1, options).unwrap_err();
        assert!(matches!(
            err,
            GridError::NegativeValue {
                field: "padding",
                ..
            }
        ));
    }

    #[test]
    fn test_cell_rects_follow_padding() {
        let surface = RecordingSurface::with_container("win", Rect::new(0.0, 0.0, 120.0, 60.0));
        let options = GridOptions::new().padding(Point::new(10.0, 5.0));
        let g = Grid::with_options(surface, "win", 2, 1, options).unwrap();
        let cells = g.cell_rects();
        assert_eq!((cells.rows(), cells.cols()), (1, 2));
        assert_eq!(cells.get(0, 0), Some(Rect::new(10.0, 5.0, 50.0, 50.0)));
        assert_eq!(cells.get(0, 1), Some(Rect::new(60.0, 5.0, 50.0, 50.0)));
    }

    // =========================================================================
    // Placement Tests
    // =========================================================================

    #[test]
    fn test_place_writes_geometry() {
        let mut g = grid(2, 2, 100.0);
        g.place("a", (1, 0)).unwrap();
        assert_eq!(written(&g, "a"), ItemGeometry::new(0, 50, 50, 50));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn test_place_replaces_record() {
        let mut g = grid(2, 2, 100.0);
        g.place("a", (0, 0)).unwrap();
        g.place("a", (1, 1)).unwrap();
        assert_eq!(g.len(), 1);
        assert_eq!(g.item_at(0, 0).unwrap(), None);
        assert_eq!(g.item_at(1, 1).unwrap(), Some(&"a"));
        assert_eq!(written(&g, "a"), ItemGeometry::new(50, 50, 50, 50));
    }

    #[test]
    fn test_place_invalid_leaves_state() {
        let mut g = grid(2, 2, 100.0);
        g.place("a", (0, 0)).unwrap();
        let writes = g.surface().writes();
        assert!(g.place("a", (5, 0)).is_err());
        assert_eq!(g.coords(&"a").unwrap().start, (0, 0));
        assert_eq!(g.surface().writes(), writes);
    }

    #[test]
    fn test_place_with_padding_and_spacing() {
        let surface = RecordingSurface::with_container("win", Rect::new(0.0, 0.0, 120.0, 120.0));
        let options = GridOptions::new()
            .padding(Point::splat(10.0))
            .spacing(Point::splat(4.0));
        let mut g = Grid::with_options(surface, "win", 2, 2, options).unwrap();
        g.place("a", (0, 1)).unwrap();
        // content 10..110, columns of 50, inset by 2 on each side
        assert_eq!(written(&g, "a"), ItemGeometry::new(62, 12, 46, 46));
    }

    #[test]
    fn test_place_anchor_and_max_size() {
        let mut g = grid(1, 1, 100.0);
        g.place(
            "a",
            Placement::cell(0, 0).max_size(10, 10).anchor(Anchor::C),
        )
        .unwrap();
        assert_eq!(written(&g, "a"), ItemGeometry::new(45, 45, 10, 10));
    }

    // =========================================================================
    // Query Tests
    // =========================================================================

    #[test]
    fn test_item_at_out_of_range() {
        let g = grid(2, 2, 100.0);
        assert!(matches!(
            g.item_at(2, 0),
            Err(GridError::IndexOutOfRange {
                axis: Axis::Row,
                ..
            })
        ));
        assert!(matches!(
            g.item_at(0, -3),
            Err(GridError::IndexOutOfRange {
                axis: Axis::Column,
                ..
            })
        ));
        assert_eq!(g.item_at(1, 1).unwrap(), None);
    }

    #[test]
    fn test_item_at_prefers_latest_overlap() {
        let mut g = grid(3, 3, 90.0);
        g.place("wide", Placement::cell(0, 0).to(2, 2)).unwrap();
        g.place("small", (1, 1)).unwrap();
        assert_eq!(g.item_at(1, 1).unwrap(), Some(&"small"));
        assert_eq!(g.item_at(0, 0).unwrap(), Some(&"wide"));
        g.place("wide", Placement::cell(0, 0).to(2, 2)).unwrap();
        assert_eq!(g.item_at(1, 1).unwrap(), Some(&"wide"));
    }

    #[test]
    fn test_items_in_row() {
        let mut g = grid(3, 2, 90.0);
        g.place("c", (0, 2)).unwrap();
        g.place("a", (0, 0)).unwrap();
        g.place("b", (1, 1)).unwrap();
        assert_eq!(g.items_in_row(0).unwrap(), vec![&"a", &"c"]);
        assert_eq!(g.items_in_row(-1).unwrap(), vec![&"b"]);
        assert!(g.items_in_row(2).is_err());
    }

    #[test]
    fn test_items_iterates_in_placement_order() {
        let mut g = grid(2, 2, 100.0);
        g.place("x", (0, 0)).unwrap();
        g.place("y", (1, 1)).unwrap();
        let ids: Vec<_> = g.items().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["x", "y"]);
        assert_eq!(g.item(&"y").unwrap().start.row, 1);
        assert!(g.item(&"z").is_none());
    }

    // =========================================================================
    // Configuration Tests
    // =========================================================================

    #[test]
    fn test_configure_grows_columns() {
        let mut g = grid(3, 1, 100.0);
        g.configure(GridUpdate::new().add_cols(2)).unwrap();
        assert_eq!(g.cols(), 5);
        for idx in 3..5 {
            assert_eq!(g.col_configuration(idx).unwrap(), Series::DEFAULT);
        }
    }

    #[test]
    fn test_configure_rejects_zero_and_keeps_state() {
        let mut g = grid(3, 3, 100.0);
        let err = g
            .configure(
                GridUpdate::new()
                    .cols(5)
                    .add_rows(-3)
                    .spacing(Point::splat(2.0)),
            )
            .unwrap_err();
        assert!(matches!(err, GridError::InvalidArgument(_)));
        assert_eq!(g.cols(), 3);
        assert_eq!(g.rows(), 3);
        assert_eq!(g.spacing(), Point::ORIGIN);
    }

    #[test]
    fn test_configure_rejects_unallocatable_growth() {
        let mut g = grid(2, 2, 100.0);
        let err = g
            .configure(GridUpdate::new().add_rows(1).add_cols(isize::MAX))
            .unwrap_err();
        assert!(matches!(err, GridError::InvalidArgument(_)));
        assert_eq!(g.rows(), 2);
        assert_eq!(g.cols(), 2);
    }

    #[test]
    fn test_configure_rejects_negative_spacing() {
        let mut g = grid(2, 2, 100.0);
        let err = g
            .configure(GridUpdate::new().rows(4).spacing(Point::new(0.0, -2.0)))
            .unwrap_err();
        assert!(matches!(err, GridError::NegativeValue { .. }));
        assert_eq!(g.rows(), 2);
    }

    #[test]
    fn test_configure_row_out_of_range() {
        let mut g = grid(3, 3, 100.0);
        let before = g.configuration();
        let err = g
            .configure_row(10, SeriesUpdate::new().weight(2.0))
            .unwrap_err();
        assert!(matches!(err, GridError::IndexOutOfRange { index: 10, .. }));
        assert_eq!(g.configuration(), before);
    }

    #[test]
    fn test_configure_cols_with_f32_max_weights() {
        let mut g = grid(2, 1, 100.0);
        g.configure_col(0, SeriesUpdate::new().weight(f32::MAX)).unwrap();
        g.configure_col(1, SeriesUpdate::new().weight(f32::MAX)).unwrap();
        g.place("a", (0, 1)).unwrap();
        assert_eq!(written(&g, "a"), ItemGeometry::new(50, 0, 50, 100));
    }

    #[test]
    fn test_configure_col_redraws() {
        let mut g = grid(2, 1, 100.0);
        g.place("a", (0, 1)).unwrap();
        g.configure_col(0, SeriesUpdate::new().size(80).policy(SeriesPolicy::Fixed))
            .unwrap();
        assert_eq!(written(&g, "a"), ItemGeometry::new(80, 0, 20, 100));
    }

    #[test]
    fn test_configuration_snapshot() {
        let mut g = grid(2, 3, 100.0);
        g.configure_row(1, SeriesUpdate::new().weight(3.0)).unwrap();
        let config = g.configuration();
        assert_eq!(config.rows, 3);
        assert_eq!(config.cols, 2);
        assert_eq!(config.row_series[1].weight, 3.0);
        assert_eq!(g.row_weights(), vec![1.0, 3.0, 1.0]);
        assert_eq!(g.col_weights(), vec![1.0, 1.0]);

        let json = serde_json::to_string(&config).unwrap();
        let back: GridConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_set_weight_sum_redraws() {
        let mut g = grid(3, 1, 350.0);
        g.configure_col(0, SeriesUpdate::new().size(50).policy(SeriesPolicy::Fixed))
            .unwrap();
        g.place("a", (0, 1)).unwrap();
        assert_eq!(written(&g, "a").width, 150);
        g.set_weight_sum(WeightSum::All);
        assert_eq!(g.weight_sum(), WeightSum::All);
        assert_eq!(written(&g, "a").width, 100);
    }

    // =========================================================================
    // Clear / Redraw Tests
    // =========================================================================

    #[test]
    fn test_clear_item_keeps_geometry() {
        let mut g = grid(2, 2, 100.0);
        g.place("a", (0, 0)).unwrap();
        let record = g.clear_item(&"a").unwrap();
        assert_eq!(record.start.row, 0);
        assert!(g.clear_item(&"a").is_none());
        assert_eq!(written(&g, "a"), ItemGeometry::new(0, 0, 50, 50));
        assert_eq!(g.redraw(), 0);
    }

    #[test]
    fn test_clear_all() {
        let mut g = grid(2, 2, 100.0);
        g.place("a", (0, 0)).unwrap();
        g.place("b", (1, 1)).unwrap();
        g.clear();
        assert!(g.is_empty());
        assert_eq!(g.item_at(0, 0).unwrap(), None);
    }

    #[test]
    fn test_redraw_follows_container_resize() {
        let mut g = grid(2, 2, 100.0);
        g.place("a", (1, 1)).unwrap();
        g.surface_mut()
            .set_container("win", Rect::new(0.0, 0.0, 200.0, 300.0));
        assert_eq!(g.redraw(), 1);
        assert_eq!(written(&g, "a"), ItemGeometry::new(100, 150, 100, 150));
    }

    #[test]
    fn test_grid_debug() {
        let g = grid(2, 2, 100.0);
        let debug = format!("{g:?}");
        assert!(debug.contains("Grid"));
        assert!(debug.contains("win"));
    }
}
