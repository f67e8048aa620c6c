//! Symbolic range executor.
//!
//! Pushes whole boxes of ratings through the workflow graph instead of single
//! points. At each workflow a box is split rule by rule into a matching part,
//! which is readdressed to the rule's target, and a remainder, which moves on
//! to the next rule. Every split replaces a box with disjoint pieces whose
//! union is the original, so the terminal boxes produced for a seed cover the
//! seed exactly once.
//!
//! The traversal runs on an explicit depth-first worklist. Each work item
//! carries the number of workflows its path has visited so far; a path longer
//! than the traversal budget aborts with
//! [`ExecutionError::TraversalBudgetExceeded`].
//!
//! # Module Structure
//!
//! - [`split`] - Rule and workflow splitting of a single box
//! - [`error`] - Execution failures

pub mod error;
pub mod split;

use crate::space::{Axis, LineageLog, PartRange, AXIS_COUNT};
use crate::workflow::{Label, Terminal, WorkflowGraph};
use tracing::{debug, trace};

pub use error::ExecutionError;
pub use split::{apply_rule, route_workflow};

/// Terminal boxes produced by one execution, split by outcome.
#[derive(Debug, Clone, Default)]
pub struct Execution {
    accepted: Vec<PartRange>,
    rejected: Vec<PartRange>,
    lineage: LineageLog,
}

impl Execution {
    pub fn accepted(&self) -> &[PartRange] {
        &self.accepted
    }

    pub fn rejected(&self) -> &[PartRange] {
        &self.rejected
    }

    /// Split history, empty unless lineage recording was enabled.
    pub fn lineage(&self) -> &LineageLog {
        &self.lineage
    }

    pub fn into_parts(self) -> (Vec<PartRange>, Vec<PartRange>, LineageLog) {
        (self.accepted, self.rejected, self.lineage)
    }

    fn emit(&mut self, terminal: Terminal, part: PartRange) {
        match terminal {
            Terminal::Accept => {
                trace!(part = %part, "accepted");
                self.accepted.push(part);
            }
            Terminal::Reject => {
                trace!(part = %part, "rejected");
                self.rejected.push(part);
            }
        }
    }
}

struct WorkItem {
    part: PartRange,
    visits: usize,
}

/// Evaluates boxes against a read-only [`WorkflowGraph`].
///
/// The graph is borrowed, so several executors may share one graph.
#[derive(Debug, Clone)]
pub struct SymbolicExecutor<'g> {
    graph: &'g WorkflowGraph,
    budget: usize,
    record_lineage: bool,
}

impl<'g> SymbolicExecutor<'g> {
    /// Creates an executor whose traversal budget is `budget_factor` times the
    /// number of workflows in `graph`.
    pub fn new(graph: &'g WorkflowGraph, budget_factor: usize) -> Self {
        Self {
            graph,
            budget: graph.traversal_budget(budget_factor),
            record_lineage: false,
        }
    }

    /// Enables or disables recording of split history.
    pub fn with_lineage(mut self, record: bool) -> Self {
        self.record_lineage = record;
        self
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Splits `seed` until every piece is addressed to a terminal.
    ///
    /// A seed that is already terminal is emitted unchanged.
    ///
    /// # Errors
    ///
    /// - `UnknownNode` if a box is addressed to a workflow the graph lacks
    /// - `TraversalBudgetExceeded` if one path visits more workflows than the budget
    /// - `UnroutedRemainder` if a workflow fails to route part of a box
    pub fn execute(&self, seed: PartRange) -> Result<Execution, ExecutionError> {
        let mut execution = Execution::default();
        let seed = if self.record_lineage {
            let id = execution.lineage.record(&seed, None);
            seed.with_lineage(id)
        } else {
            seed
        };
        let seed_volume = seed.volume();

        let mut stack = vec![WorkItem {
            part: seed,
            visits: 0,
        }];

        while let Some(WorkItem { part, visits }) = stack.pop() {
            if let Some(terminal) = part.label().terminal() {
                execution.emit(terminal, part);
                continue;
            }

            let workflow = self
                .graph
                .lookup_label(part.label())
                .ok_or_else(|| ExecutionError::UnknownNode(part.label().to_string()))?;

            let visits = visits + 1;
            if visits > self.budget {
                return Err(ExecutionError::TraversalBudgetExceeded {
                    node: workflow.name.clone(),
                    visits,
                    budget: self.budget,
                });
            }

            let routed = route_workflow(workflow, &part)?;
            trace!(
                node = %workflow.name,
                part = %part,
                pieces = routed.len(),
                visits,
                "workflow applied"
            );

            // Reversed so the first rule's piece is explored first.
            for child in routed.into_iter().rev() {
                let child = if self.record_lineage {
                    let id = execution.lineage.record(&child, part.lineage());
                    child.with_lineage(id)
                } else {
                    child
                };
                stack.push(WorkItem {
                    part: child,
                    visits,
                });
            }
        }

        debug!(
            seed_volume = %seed_volume,
            accepted = execution.accepted.len(),
            rejected = execution.rejected.len(),
            "execution finished"
        );
        Ok(execution)
    }

    /// Routes one concrete point from the entry workflow to a terminal.
    ///
    /// # Errors
    ///
    /// Same conditions as [`execute`](Self::execute), applied to the single
    /// path the point takes.
    pub fn route_point(&self, point: &[i64; AXIS_COUNT]) -> Result<Terminal, ExecutionError> {
        let mut label = self.graph.entry_label();
        let mut visits = 0;

        loop {
            let workflow = match &label {
                Label::Accept => return Ok(Terminal::Accept),
                Label::Reject => return Ok(Terminal::Reject),
                Label::Node(name) => self
                    .graph
                    .lookup(name)
                    .ok_or_else(|| ExecutionError::UnknownNode(name.clone()))?,
            };

            visits += 1;
            if visits > self.budget {
                return Err(ExecutionError::TraversalBudgetExceeded {
                    node: workflow.name.clone(),
                    visits,
                    budget: self.budget,
                });
            }

            let rule = workflow
                .rules
                .iter()
                .find(|rule| rule.matches(point[rule.axis.index()]))
                .ok_or_else(|| ExecutionError::UnroutedRemainder {
                    node: workflow.name.clone(),
                    rule_index: workflow.rules.len().saturating_sub(1),
                    axis: workflow.rules.last().map_or(Axis::X, |r| r.axis),
                })?;
            label = rule.target.clone();
        }
    }
}
