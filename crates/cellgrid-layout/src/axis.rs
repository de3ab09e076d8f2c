//! Per-axis sizing records.
//!
//! A grid has one [`AxisModel`] for its rows and one for its columns. Each
//! entry is a [`Series`] describing how that row or column claims space:
//! either a fixed size, or a weighted share of whatever the fixed series
//! leave over.

use cellgrid_core::Axis;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// How a series claims space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeriesPolicy {
    /// Use `size` when it is non-zero, otherwise a weighted share
    #[default]
    Sized,
    /// Always use `size`, even when it is zero
    Fixed,
}

/// Which weights count towards an axis' weight total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeightSum {
    /// Only series that actually receive a weighted share. A fixed series
    /// never dilutes its weighted neighbours.
    #[default]
    Distributing,
    /// Every series' weight, fixed or not. Weighted series then leave part
    /// of the unallocated space unused whenever a fixed series has weight.
    All,
}

/// Sizing record for a single row or column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Share of the unallocated space (0 or more)
    pub weight: f32,
    /// Fixed size in layout units, 0 = none
    pub size: u32,
    /// Sizing policy
    pub policy: SeriesPolicy,
}

impl Series {
    /// Weight 1, no fixed size.
    pub const DEFAULT: Self = Self {
        weight: 1.0,
        size: 0,
        policy: SeriesPolicy::Sized,
    };

    /// Create a weighted series.
    #[must_use]
    pub const fn weighted(weight: f32) -> Self {
        Self {
            weight,
            ..Self::DEFAULT
        }
    }

    /// Create a fixed-size series.
    #[must_use]
    pub const fn fixed(size: u32) -> Self {
        Self {
            size,
            policy: SeriesPolicy::Fixed,
            ..Self::DEFAULT
        }
    }

    /// True when this series takes a weighted share instead of its size.
    #[must_use]
    pub fn distributes_by_weight(&self) -> bool {
        self.size == 0 && self.policy == SeriesPolicy::Sized
    }

    /// Size before spacing is removed, given the axis' unallocated space
    /// and weight total.
    ///
    /// The share is taken as `unallocated * (weight / weight_sum)` in `f64`,
    /// so weights near `f32::MAX` still split the space proportionally.
    #[must_use]
    pub fn provisional_size(&self, unallocated: f32, weight_sum: f64) -> f32 {
        if self.distributes_by_weight() {
            (f64::from(unallocated) * (f64::from(self.weight) / weight_sum)) as f32
        } else {
            self.size as f32
        }
    }
}

impl Default for Series {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Partial update for a [`Series`]. Unset fields are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesUpdate {
    /// New weight
    pub weight: Option<f32>,
    /// New fixed size
    pub size: Option<u32>,
    /// New policy
    pub policy: Option<SeriesPolicy>,
}

impl SeriesUpdate {
    /// Create an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight.
    #[must_use]
    pub const fn weight(mut self, weight: f32) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Set the fixed size.
    #[must_use]
    pub const fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the policy.
    #[must_use]
    pub const fn policy(mut self, policy: SeriesPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Check the update without applying it.
    ///
    /// Negative or non-finite weights are rejected rather than clamped.
    pub fn validate(&self) -> Result<()> {
        if let Some(weight) = self.weight {
            GridError::check_non_negative("weight", weight)?;
        }
        Ok(())
    }

    fn apply(&self, series: &mut Series) {
        if let Some(weight) = self.weight {
            series.weight = weight;
        }
        if let Some(size) = self.size {
            series.size = size;
        }
        if let Some(policy) = self.policy {
            series.policy = policy;
        }
    }
}

/// Resolve a possibly tail-relative index against `len`.
///
/// `-1` is the last entry, `-len` the first. Anything outside
/// `-len..len` is `None`.
#[must_use]
pub fn resolve_index(index: isize, len: usize) -> Option<usize> {
    let len_signed = isize::try_from(len).ok()?;
    let resolved = if index < 0 { index + len_signed } else { index };
    (0..len_signed).contains(&resolved).then_some(resolved as usize)
}

/// Wrap any index onto `0..len`.
///
/// Unlike [`resolve_index`] this never fails, which lets stale records keep
/// resolving after their axis shrinks.
#[must_use]
pub fn wrap_index(index: isize, len: usize) -> usize {
    let len_signed = isize::try_from(len.max(1)).unwrap_or(isize::MAX);
    index.rem_euclid(len_signed) as usize
}

/// Longest axis an [`AxisModel`] will allocate.
pub const MAX_SERIES: usize = isize::MAX as usize / std::mem::size_of::<Series>();

/// Reject lengths no `Vec<Series>` could hold.
pub(crate) fn check_capacity(axis: Axis, len: usize) -> Result<usize> {
    if len > MAX_SERIES {
        return Err(GridError::invalid(format!(
            "{len} {axis}s exceed the limit of {MAX_SERIES}"
        )));
    }
    Ok(len)
}

/// Ordered series of one axis. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisModel {
    axis: Axis,
    series: Vec<Series>,
}

impl AxisModel {
    /// Create an axis with `len` default series.
    pub fn new(axis: Axis, len: usize) -> Result<Self> {
        if len < 1 {
            return Err(GridError::invalid(format!("requires at least 1 {axis}")));
        }
        check_capacity(axis, len)?;
        Ok(Self {
            axis,
            series: vec![Series::DEFAULT; len],
        })
    }

    /// Which axis this model sizes.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Number of series, at least 1.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// All series in order.
    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Iterate the series in order.
    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    /// Weight of every series in order.
    #[must_use]
    pub fn weights(&self) -> Vec<f32> {
        self.series.iter().map(|s| s.weight).collect()
    }

    /// Resolve `index` (negative counts from the tail) or fail.
    pub fn resolve(&self, index: isize) -> Result<usize> {
        resolve_index(index, self.len()).ok_or(GridError::IndexOutOfRange {
            axis: self.axis,
            index,
            len: self.len(),
        })
    }

    /// Wrap `index` onto the current length.
    #[must_use]
    pub fn wrap(&self, index: isize) -> usize {
        wrap_index(index, self.len())
    }

    /// Copy of the series at `index`.
    pub fn get(&self, index: isize) -> Result<Series> {
        let idx = self.resolve(index)?;
        Ok(self.series[idx])
    }

    /// Grow by `delta` default series, or shrink from the tail when negative.
    pub fn resize(&mut self, delta: isize) -> Result<()> {
        let target = if delta >= 0 {
            self.len().saturating_add(delta.unsigned_abs())
        } else {
            self.len().saturating_sub(delta.unsigned_abs())
        };
        self.set_len(target)
    }

    /// Grow or shrink to exactly `len` series.
    pub fn set_len(&mut self, len: usize) -> Result<()> {
        if len < 1 {
            return Err(GridError::invalid(format!(
                "cannot shrink below 1 {}",
                self.axis
            )));
        }
        check_capacity(self.axis, len)?;
        if let Some(extra) = len.checked_sub(self.series.len()) {
            self.series.try_reserve_exact(extra).map_err(|err| {
                GridError::invalid(format!("cannot grow to {len} {}s: {err}", self.axis))
            })?;
        }
        self.series.resize(len, Series::DEFAULT);
        Ok(())
    }

    /// Apply `update` to the series at `index` and return the new value.
    pub fn configure(&mut self, index: isize, update: SeriesUpdate) -> Result<Series> {
        let idx = self.resolve(index)?;
        update.validate()?;
        let series = &mut self.series[idx];
        update.apply(series);
        Ok(*series)
    }

    /// Weight total used to divide unallocated space.
    ///
    /// Summed in `f64`: every weight is a finite `f32`, so the total stays
    /// finite for any realistic axis length.
    #[must_use]
    pub fn weight_sum(&self, policy: WeightSum) -> f64 {
        self.series
            .iter()
            .filter(|s| policy == WeightSum::All || s.distributes_by_weight())
            .map(|s| f64::from(s.weight))
            .sum()
    }

    /// Sum of every series' fixed size.
    #[must_use]
    pub fn min_size_sum(&self) -> u64 {
        self.series.iter().map(|s| u64::from(s.size)).sum()
    }
}
