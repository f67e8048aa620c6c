//! End-to-end evaluation: build graph, execute seed, partition, count.

use std::fmt::Display;

use crate::config::EngineConfig;
use crate::error::Error;
use crate::executor::{ExecutionError, SymbolicExecutor};
use crate::partition::partition;
use crate::space::{LineageLog, PartRange};
use crate::volume::total_volume;
use crate::workflow::{WorkflowDef, WorkflowGraph};
use tracing::{debug, info_span};

/// Point counts per terminal outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub accepted: u128,
    pub rejected: u128,
}

impl Tally {
    pub fn total(&self) -> u128 {
        self.accepted + self.rejected
    }
}

impl Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, " Good: {:>16}", self.accepted)?;
        writeln!(f, "  Bad: {:>16}", self.rejected)?;
        write!(f, "Total: {:>16}", self.total())
    }
}

/// Result of one evaluation.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub tally: Tally,
    /// Disjoint accepted boxes.
    pub accepted: Vec<PartRange>,
    /// Disjoint rejected boxes.
    pub rejected: Vec<PartRange>,
    /// Split history; empty unless [`EngineConfig::record_lineage`] is set.
    pub lineage: LineageLog,
}

/// Runs workflow graphs against the configured domain.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validates `workflows` and evaluates them from the configured entry.
    ///
    /// # Errors
    ///
    /// `Error::Graph` if the definitions do not form a valid graph, and
    /// `Error::Execution` if routing fails.
    pub fn evaluate<I>(&self, workflows: I) -> Result<Evaluation, Error>
    where
        I: IntoIterator<Item = WorkflowDef>,
    {
        let graph = WorkflowGraph::build(&self.config.entry, workflows)?;
        Ok(self.evaluate_graph(&graph)?)
    }

    /// Evaluates an already validated graph over the whole domain.
    ///
    /// The seed box starts at the graph's own entry workflow.
    pub fn evaluate_graph(&self, graph: &WorkflowGraph) -> Result<Evaluation, ExecutionError> {
        let span = info_span!("evaluate", entry = %graph.entry().name);
        let _guard = span.enter();

        let seed = PartRange::new(self.config.domain, graph.entry_label());
        let execution = SymbolicExecutor::new(graph, self.config.budget_factor)
            .with_lineage(self.config.record_lineage)
            .execute(seed)?;
        let (accepted, rejected, lineage) = execution.into_parts();

        let accepted = partition(accepted);
        let rejected = partition(rejected);
        let tally = Tally {
            accepted: total_volume(&accepted),
            rejected: total_volume(&rejected),
        };
        let domain_volume = self.config.domain_volume();
        debug_assert_eq!(tally.total(), domain_volume, "terminal boxes must cover the domain");
        debug!(
            domain = %domain_volume,
            accepted = %tally.accepted,
            rejected = %tally.rejected,
            accepted_boxes = accepted.len(),
            rejected_boxes = rejected.len(),
            "evaluation finished"
        );

        Ok(Evaluation {
            tally,
            accepted,
            rejected,
            lineage,
        })
    }

    /// Number of points in the domain the workflows accept.
    pub fn count_accepted<I>(&self, workflows: I) -> Result<u128, Error>
    where
        I: IntoIterator<Item = WorkflowDef>,
    {
        Ok(self.evaluate(workflows)?.tally.accepted)
    }
}
