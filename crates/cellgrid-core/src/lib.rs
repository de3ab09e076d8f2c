//! Core types for the cellgrid layout engine.
//!
//! This crate provides the types shared between the engine and its host:
//! - Geometric primitives: [`Point`], [`Rect`], [`ItemGeometry`]
//! - Axis selector: [`Axis`]
//! - Host capability: [`Surface`], with the in-memory [`RecordingSurface`]

mod axis;
mod geometry;
mod surface;

pub use axis::Axis;
pub use geometry::{ItemGeometry, Point, Rect};
pub use surface::{RecordingSurface, Surface};
