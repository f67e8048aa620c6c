//! Rating space: intervals, axes, and the boxes built from them.
//!
//! A [`PartRange`] is the unit every later stage works on. It is created once
//! for the full domain and then only ever split into smaller, independent
//! copies.

mod axis;
mod interval;
mod lineage;
mod part_range;

pub use axis::{Axis, AXIS_COUNT};
pub use interval::Interval;
pub use lineage::{LineageEntry, LineageId, LineageLog};
pub use part_range::{PartRange, Region};
