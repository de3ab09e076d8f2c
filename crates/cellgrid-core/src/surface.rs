//! Host surface capability.
//!
//! The layout engine never talks to a UI toolkit directly. It reads the
//! container rect and writes item geometry through [`Surface`], which the
//! embedding application implements over its own widget store.

use crate::geometry::{ItemGeometry, Rect};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

/// Read/write access to the host's geometry store.
pub trait Surface {
    /// Identity of containers and items on this surface.
    type Id: Clone + Eq + Debug;

    /// Position and size of `target` in the coordinate space items are
    /// positioned in.
    fn content_rect(&self, target: &Self::Id) -> Rect;

    /// Apply computed geometry to `item`.
    fn set_item_geometry(&mut self, item: &Self::Id, geometry: ItemGeometry);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    type Id = S::Id;

    fn content_rect(&self, target: &Self::Id) -> Rect {
        (**self).content_rect(target)
    }

    fn set_item_geometry(&mut self, item: &Self::Id, geometry: ItemGeometry) {
        (**self).set_item_geometry(item, geometry);
    }
}

/// Shared handle, for hosts that keep their own reference to the store.
///
/// Panics if the surface is already mutably borrowed while the grid writes,
/// which cannot happen under a single-threaded callback model.
impl<S: Surface> Surface for Rc<RefCell<S>> {
    type Id = S::Id;

    fn content_rect(&self, target: &Self::Id) -> Rect {
        self.borrow().content_rect(target)
    }

    fn set_item_geometry(&mut self, item: &Self::Id, geometry: ItemGeometry) {
        self.borrow_mut().set_item_geometry(item, geometry);
    }
}

/// In-memory surface that stores container rects and records every write.
#[derive(Debug, Clone)]
pub struct RecordingSurface<Id> {
    containers: HashMap<Id, Rect>,
    geometry: HashMap<Id, ItemGeometry>,
    writes: usize,
}

impl<Id> Default for RecordingSurface<Id> {
    fn default() -> Self {
        Self {
            containers: HashMap::new(),
            geometry: HashMap::new(),
            writes: 0,
        }
    }
}

impl<Id: Clone + Eq + Hash + Debug> RecordingSurface<Id> {
    /// Create an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a surface with a single container.
    #[must_use]
    pub fn with_container(target: Id, rect: Rect) -> Self {
        let mut surface = Self::new();
        surface.set_container(target, rect);
        surface
    }

    /// Set or resize a container.
    pub fn set_container(&mut self, target: Id, rect: Rect) {
        self.containers.insert(target, rect);
    }

    /// Last geometry written for `item`.
    #[must_use]
    pub fn geometry(&self, item: &Id) -> Option<ItemGeometry> {
        self.geometry.get(item).copied()
    }

    /// Number of `set_item_geometry` calls so far.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }

    /// Forget every recorded write.
    pub fn reset(&mut self) {
        self.geometry.clear();
        self.writes = 0;
    }
}

impl<Id: Clone + Eq + Hash + Debug> Surface for RecordingSurface<Id> {
    type Id = Id;

    /// Unknown containers report an empty rect.
    fn content_rect(&self, target: &Id) -> Rect {
        self.containers.get(target).copied().unwrap_or_default()
    }

    fn set_item_geometry(&mut self, item: &Id, geometry: ItemGeometry) {
        self.writes += 1;
        self.geometry.insert(item.clone(), geometry);
    }
}
