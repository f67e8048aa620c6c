//! Axis-aligned boxes of ratings addressed to a workflow node.

use std::fmt::Display;

use super::axis::{Axis, AXIS_COUNT};
use super::interval::Interval;
use super::lineage::LineageId;
use crate::workflow::Label;

/// One interval per axis, in [`Axis::ALL`] order.
pub type Region = [Interval; AXIS_COUNT];

/// A hyperrectangle of ratings plus the label it is currently routed to.
///
/// # Invariants
///
/// - Every axis holds a non-empty interval; this is guaranteed by
///   [`Interval`] itself, so an empty box can never be represented.
/// - Boxes are values: splitting produces new boxes and never mutates the
///   original.
/// - `lineage` is diagnostic only and does not take part in any routing or
///   partitioning decision.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartRange {
    ranges: Region,
    label: Label,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    lineage: Option<LineageId>,
}

impl PartRange {
    pub fn new(ranges: Region, label: Label) -> Self {
        Self {
            ranges,
            label,
            lineage: None,
        }
    }

    /// Builds a box with the same interval on every axis.
    pub fn uniform(interval: Interval, label: Label) -> Self {
        Self::new([interval; AXIS_COUNT], label)
    }

    pub fn ranges(&self) -> &Region {
        &self.ranges
    }

    #[inline]
    pub fn interval(&self, axis: Axis) -> Interval {
        self.ranges[axis.index()]
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn lineage(&self) -> Option<LineageId> {
        self.lineage
    }

    /// Copy of this box readdressed to `label`.
    pub fn with_label(&self, label: Label) -> Self {
        Self::new(self.ranges, label)
    }

    /// Copy of this box with `axis` replaced by `interval`.
    pub fn with_interval(&self, axis: Axis, interval: Interval) -> Self {
        let mut ranges = self.ranges;
        ranges[axis.index()] = interval;
        Self::new(ranges, self.label.clone())
    }

    pub fn with_lineage(mut self, lineage: LineageId) -> Self {
        self.lineage = Some(lineage);
        self
    }

    /// Number of integer points in the box.
    pub fn volume(&self) -> u128 {
        self.ranges
            .iter()
            .map(Interval::count)
            .product()
    }

    /// Per-axis intersection with `other`, or `None` if any axis is disjoint.
    pub fn overlap(&self, other: &PartRange) -> Option<Region> {
        let mut region = self.ranges;
        for axis in Axis::ALL {
            region[axis.index()] = self.interval(axis).intersection(&other.interval(axis))?;
        }
        Some(region)
    }

    pub fn is_disjoint(&self, other: &PartRange) -> bool {
        !Axis::ALL
            .iter()
            .all(|&axis| self.interval(axis).overlaps(&other.interval(axis)))
    }

    /// Returns true if every point of `other` lies inside this box.
    pub fn covers(&self, other: &PartRange) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| self.interval(axis).covers(&other.interval(axis)))
    }

    pub fn contains_point(&self, point: &[i64; AXIS_COUNT]) -> bool {
        Axis::ALL
            .iter()
            .all(|&axis| self.interval(axis).contains(point[axis.index()]))
    }
}

impl Display for PartRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, axis) in Axis::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{}", axis, self.interval(*axis))?;
        }
        write!(f, "}} -> {}", self.label)
    }
}
