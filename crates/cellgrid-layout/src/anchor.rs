//! Compass anchors for items smaller than their cell.

use cellgrid_core::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::GridError;

/// Position along one axis inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    /// Flush with the leading edge
    Start,
    /// Centered
    Center,
    /// Flush with the trailing edge
    End,
}

impl Align {
    /// Offset of an item of `item` extent inside a cell of `cell` extent.
    #[must_use]
    pub fn offset(self, cell: f32, item: f32) -> f32 {
        match self {
            Self::Start => 0.0,
            Self::Center => (cell - item) / 2.0,
            Self::End => cell - item,
        }
    }
}

/// Where an item sits in its cell or span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Top center
    N,
    /// Top right
    Ne,
    /// Middle right
    E,
    /// Bottom right
    Se,
    /// Bottom center
    S,
    /// Bottom left
    Sw,
    /// Middle left
    W,
    /// Top left
    #[default]
    Nw,
    /// Center
    C,
}

impl Anchor {
    /// All anchors, clockwise from north with center last.
    pub const ALL: [Self; 9] = [
        Self::N,
        Self::Ne,
        Self::E,
        Self::Se,
        Self::S,
        Self::Sw,
        Self::W,
        Self::Nw,
        Self::C,
    ];

    /// Horizontal and vertical alignment.
    #[must_use]
    pub const fn aligns(self) -> (Align, Align) {
        match self {
            Self::N => (Align::Center, Align::Start),
            Self::Ne => (Align::End, Align::Start),
            Self::E => (Align::End, Align::Center),
            Self::Se => (Align::End, Align::End),
            Self::S => (Align::Center, Align::End),
            Self::Sw => (Align::Start, Align::End),
            Self::W => (Align::Start, Align::Center),
            Self::Nw => (Align::Start, Align::Start),
            Self::C => (Align::Center, Align::Center),
        }
    }

    /// Offset of an item of `width` x `height` from the origin of `bounds`.
    #[must_use]
    pub fn offset(self, bounds: Rect, width: f32, height: f32) -> Point {
        let (horizontal, vertical) = self.aligns();
        Point::new(
            horizontal.offset(bounds.width, width),
            vertical.offset(bounds.height, height),
        )
    }

    /// Compass name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::Ne => "ne",
            Self::E => "e",
            Self::Se => "se",
            Self::S => "s",
            Self::Sw => "sw",
            Self::W => "w",
            Self::Nw => "nw",
            Self::C => "c",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Anchor {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if name == "center" {
            return Ok(Self::C);
        }
        Self::ALL
            .into_iter()
            .find(|anchor| anchor.as_str() == name)
            .ok_or_else(|| GridError::invalid(format!("unknown anchor '{s}'")))
    }
}
