//! Pairwise reconciliation of two overlapping boxes.

use crate::space::{Axis, Interval, PartRange, Region};

/// How a pivot box relates to another box still waiting in the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconcile {
    /// No shared points; keep scanning.
    Disjoint,
    /// Every point of the pivot is also in the other box.
    PivotInside,
    /// Every point of the other box is also in the pivot.
    OtherInside,
    /// Partial overlap: the pivot minus the other box, as disjoint slabs.
    Split(Vec<PartRange>),
}

/// Compares `pivot` against `other` and, on partial overlap, carves the shared
/// region out of `pivot`.
pub fn reconcile(pivot: &PartRange, other: &PartRange) -> Reconcile {
    let Some(overlap) = pivot.overlap(other) else {
        return Reconcile::Disjoint;
    };
    if pivot.ranges() == &overlap {
        return Reconcile::PivotInside;
    }
    if other.ranges() == &overlap {
        return Reconcile::OtherInside;
    }
    Reconcile::Split(carve(pivot, &overlap))
}

/// Splits `pivot` into the slabs lying outside `overlap`.
///
/// Axis by axis, the part of the current core below the overlap and the part
/// above it are emitted as slabs and the core is narrowed to the overlap on
/// that axis. After the last axis the core is exactly `overlap`, which is left
/// out: it stays covered by the box the overlap was computed against. The
/// slabs are pairwise disjoint and, together with `overlap`, recreate `pivot`.
pub fn carve(pivot: &PartRange, overlap: &Region) -> Vec<PartRange> {
    let mut slabs = Vec::with_capacity(2 * Axis::ALL.len());
    let mut core = pivot.clone();

    for axis in Axis::ALL {
        let current = core.interval(axis);
        let shared = overlap[axis.index()];
        let lower = shared
            .min()
            .checked_sub(1)
            .and_then(|last| Interval::try_new(current.min(), last));
        if let Some(lower) = lower {
            slabs.push(core.with_interval(axis, lower));
        }
        let upper = shared
            .max()
            .checked_add(1)
            .and_then(|first| Interval::try_new(first, current.max()));
        if let Some(upper) = upper {
            slabs.push(core.with_interval(axis, upper));
        }
        core = core.with_interval(axis, shared);
    }

    debug_assert_eq!(core.ranges(), overlap);
    slabs
}
