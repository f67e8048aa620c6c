//! Configuration for an evaluation run.

use crate::space::{Interval, PartRange, Region, AXIS_COUNT};
use crate::workflow::Label;

/// Conventional name of the entry workflow.
pub const DEFAULT_ENTRY: &str = "in";

/// Default traversal budget multiplier (visits per workflow in the graph).
pub const DEFAULT_BUDGET_FACTOR: usize = 10;

/// Lowest and highest rating on every axis of the default domain.
pub const DEFAULT_RATING_RANGE: Interval = Interval::new(1, 4000);

/// Controls the domain, entry point, and safety limits of an evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Legal ratings per axis; the seed box covers all of it.
    pub domain: Region,
    /// Workflow every seed box starts at.
    pub entry: String,
    /// Traversal ceiling per path = `budget_factor` × workflow count.
    pub budget_factor: usize,
    /// Record every split into a lineage log for trace output.
    pub record_lineage: bool,
}

impl EngineConfig {
    /// Config whose domain uses `interval` on every axis.
    pub fn with_uniform_domain(interval: Interval) -> Self {
        Self {
            domain: [interval; AXIS_COUNT],
            ..Self::default()
        }
    }

    /// Box covering the whole domain, addressed to the entry workflow.
    pub fn seed(&self) -> PartRange {
        PartRange::new(self.domain, Label::node(self.entry.clone()))
    }

    /// Number of points in the domain.
    pub fn domain_volume(&self) -> u128 {
        self.domain.iter().map(Interval::count).product()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            domain: [DEFAULT_RATING_RANGE; AXIS_COUNT],
            entry: DEFAULT_ENTRY.to_string(),
            budget_factor: DEFAULT_BUDGET_FACTOR,
            record_lineage: false,
        }
    }
}
