//! Disjoint partitioning of possibly overlapping boxes.
//!
//! [`partition`] turns any collection of boxes into pairwise-disjoint boxes
//! covering exactly the same points, so that their volumes can simply be
//! summed.
//!
//! The algorithm is queue based. The front box becomes the *pivot* and is
//! compared with every box still queued:
//!
//! 1. **Disjoint**: keep scanning.
//! 2. **Pivot inside the other box**: drop the pivot; its points are still queued.
//! 3. **Other box inside the pivot**: drop the other box and keep scanning.
//! 4. **Partial overlap**: replace the pivot by the slabs of it that lie outside
//!    the other box, appended to the back of the queue, and move to the next pivot.
//!
//! A pivot that survives the whole scan overlaps nothing left in the queue and
//! becomes a keeper. Queued boxes only ever shrink, so a keeper stays disjoint
//! from everything kept after it.
//!
//! Every non-keeper step strictly reduces the total volume held in the queue,
//! which bounds the number of steps.

mod subtract;

use std::collections::VecDeque;

use crate::space::PartRange;
use tracing::{debug, trace};

pub use subtract::{carve, reconcile, Reconcile};

/// Counters describing one [`partition_with_stats`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionStats {
    /// Boxes handed in.
    pub inputs: usize,
    /// Pivots replaced by their outside slabs.
    pub splits: usize,
    /// Pivots dropped because another queued box contained them.
    pub discarded: usize,
    /// Queued boxes dropped because a pivot contained them.
    pub absorbed: usize,
    /// Boxes returned.
    pub keepers: usize,
}

/// Returns pairwise-disjoint boxes covering exactly the points of `boxes`.
///
/// Labels are carried along from the input but play no part in the result.
pub fn partition<I>(boxes: I) -> Vec<PartRange>
where
    I: IntoIterator<Item = PartRange>,
{
    partition_with_stats(boxes).0
}

/// Like [`partition`], also reporting what the run did.
pub fn partition_with_stats<I>(boxes: I) -> (Vec<PartRange>, PartitionStats)
where
    I: IntoIterator<Item = PartRange>,
{
    let mut queue: VecDeque<PartRange> = boxes.into_iter().collect();
    let mut stats = PartitionStats {
        inputs: queue.len(),
        ..PartitionStats::default()
    };
    let mut keepers = Vec::new();

    'pivots: while let Some(pivot) = queue.pop_front() {
        let mut i = 0;
        while i < queue.len() {
            match reconcile(&pivot, &queue[i]) {
                Reconcile::Disjoint => i += 1,
                Reconcile::PivotInside => {
                    trace!(pivot = %pivot, other = %queue[i], "pivot covered, discarding");
                    stats.discarded += 1;
                    continue 'pivots;
                }
                Reconcile::OtherInside => {
                    if let Some(other) = queue.remove(i) {
                        trace!(pivot = %pivot, other = %other, "other covered, removing");
                    }
                    stats.absorbed += 1;
                }
                Reconcile::Split(slabs) => {
                    trace!(pivot = %pivot, other = %queue[i], slabs = slabs.len(), "pivot split");
                    stats.splits += 1;
                    queue.extend(slabs);
                    continue 'pivots;
                }
            }
        }
        trace!(part = %pivot, "keeper");
        keepers.push(pivot);
    }

    stats.keepers = keepers.len();
    debug_assert!(is_pairwise_disjoint(&keepers), "partition produced overlapping boxes");
    debug!(
        inputs = stats.inputs,
        splits = stats.splits,
        discarded = stats.discarded,
        absorbed = stats.absorbed,
        keepers = stats.keepers,
        "partition finished"
    );
    (keepers, stats)
}

/// Returns true if no two boxes share a point.
pub fn is_pairwise_disjoint(boxes: &[PartRange]) -> bool {
    boxes
        .iter()
        .enumerate()
        .all(|(i, a)| boxes[i + 1..].iter().all(|b| a.is_disjoint(b)))
}
