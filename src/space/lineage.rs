//! Append-only record of how boxes were split from one another.
//!
//! The log exists for trace output only. Boxes refer to their entry by
//! [`LineageId`]; nothing in the executor or partitioner reads it back.

use std::fmt::Display;

use super::part_range::{PartRange, Region};
use crate::workflow::Label;

/// Index of a box in a [`LineageLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineageId(usize);

impl LineageId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for LineageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineageEntry {
    pub region: Region,
    pub label: Label,
    pub parent: Option<LineageId>,
}

#[derive(Debug, Clone, Default)]
pub struct LineageLog {
    entries: Vec<LineageEntry>,
}

impl LineageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `part` with the given parent and returns its id.
    pub fn record(&mut self, part: &PartRange, parent: Option<LineageId>) -> LineageId {
        let id = LineageId(self.entries.len());
        self.entries.push(LineageEntry {
            region: *part.ranges(),
            label: part.label().clone(),
            parent,
        });
        id
    }

    pub fn get(&self, id: LineageId) -> Option<&LineageEntry> {
        self.entries.get(id.0)
    }

    /// Walks from `id` back to the seed box.
    pub fn ancestry(&self, id: LineageId) -> impl Iterator<Item = (LineageId, &LineageEntry)> + '_ {
        let mut next = Some(id);
        std::iter::from_fn(move || {
            let current = next?;
            let entry = self.get(current)?;
            next = entry.parent;
            Some((current, entry))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::Interval;

    #[test]
    fn test_ancestry_walks_back_to_seed() {
        let mut log = LineageLog::new();
        let seed = PartRange::uniform(Interval::new(1, 10), Label::node("in"));
        let root = log.record(&seed, None);
        let child = log.record(&seed.with_label(Label::node("px")), Some(root));
        let leaf = log.record(&seed.with_label(Label::Accept), Some(child));

        let labels: Vec<String> = log
            .ancestry(leaf)
            .map(|(_, entry)| entry.label.to_string())
            .collect();
        assert_eq!(labels, vec!["A", "px", "in"]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_unknown_id_yields_nothing() {
        let log = LineageLog::new();
        assert!(log.is_empty());
        assert_eq!(log.ancestry(LineageId(3)).count(), 0);
    }
}
