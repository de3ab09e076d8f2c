#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
//! Layout engine for cellgrid.
//!
//! Positions host items in a table of weighted rows and columns:
//!
//! - **Axes**: each row and column is a [`Series`] with a weight, an
//!   optional fixed size and a [`SeriesPolicy`]
//! - **Cells**: [`compute_cells`] splits the container's content rect into
//!   one rect per (row, column)
//! - **Items**: a [`GridItem`] covers one cell or a span, optionally capped
//!   in size and aligned by an [`Anchor`]
//! - **Grid**: [`Grid`] owns both axes and the item registry, and writes
//!   every item's geometry back through a [`cellgrid_core::Surface`]
//!
//! # Example
//!
//! ```
//! use cellgrid_core::{ItemGeometry, Rect, RecordingSurface};
//! use cellgrid_layout::{Anchor, Grid, Placement, SeriesUpdate};
//!
//! let surface = RecordingSurface::with_container("window", Rect::new(0.0, 0.0, 400.0, 400.0));
//! let mut grid = Grid::new(surface, "window", 2, 4)?;
//! grid.configure_row(1, SeriesUpdate::new().weight(3.0))?;
//! grid.place("header", Placement::cell(0, 0).to(0, -1))?;
//! grid.place("footer", Placement::cell(-1, 0).span(1, 2).anchor(Anchor::C))?;
//!
//! assert_eq!(
//!     grid.surface().geometry(&"header"),
//!     Some(ItemGeometry::new(0, 0, 400, 66))
//! );
//! # Ok::<(), cellgrid_layout::GridError>(())
//! ```

mod anchor;
mod axis;
mod error;
mod grid;
mod placement;
mod solver;

pub use anchor::{Align, Anchor};
pub use axis::{
    resolve_index, wrap_index, AxisModel, Series, SeriesPolicy, SeriesUpdate, WeightSum, MAX_SERIES,
};
pub use error::{GridError, Result};
pub use grid::{Grid, GridConfiguration, GridOptions, GridUpdate, Resize};
pub use placement::{Cell, CellSpan, GridItem, Placement};
pub use solver::{compute_cells, compute_tracks, CellRects, Track};
