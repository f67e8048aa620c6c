//! Point counting over disjoint boxes.

use crate::space::PartRange;

/// Sums the volumes of `boxes`.
///
/// The boxes must already be pairwise disjoint (see
/// [`partition`](crate::partition::partition)); overlapping input is counted
/// more than once.
pub fn total_volume<'a, I>(boxes: I) -> u128
where
    I: IntoIterator<Item = &'a PartRange>,
{
    boxes.into_iter().map(PartRange::volume).sum()
}
