use super::error::GraphValidationError;
use super::rule::{Label, WorkflowDef, ACCEPT, REJECT};
use petgraph::algo::{is_cyclic_directed, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::HashMap;
use std::fmt::Display;
use tracing::{debug, warn};

/// Validated routing graph: workflow nodes linked by their rule targets.
///
/// # Invariants
///
/// - Every workflow has at least one rule and only its last rule is `Always`
/// - Every non-terminal target names a workflow in the graph
/// - Workflow names are unique and never `A` or `R`
/// - The entry workflow exists
///
/// Cycles are not rejected here. They are reported by [`has_cycle`](Self::has_cycle)
/// and bounded at execution time by the traversal budget.
///
/// Edges run from a workflow to each workflow one of its rules targets; the
/// edge weight is the rule index. Terminal targets have no graph node.
#[derive(Debug, Clone)]
pub struct WorkflowGraph {
    graph: DiGraph<WorkflowDef, usize>,
    node_by_name: HashMap<String, NodeIndex>,
    entry: NodeIndex,
    cyclic: bool,
}

impl WorkflowGraph {
    /// Validates `workflows` and links them into a graph rooted at `entry`.
    ///
    /// # Errors
    ///
    /// Returns the first [`GraphValidationError`] found, checking each
    /// workflow's own rules in definition order before any targets are
    /// resolved.
    pub fn build<I>(entry: &str, workflows: I) -> Result<Self, GraphValidationError>
    where
        I: IntoIterator<Item = WorkflowDef>,
    {
        let mut graph: DiGraph<WorkflowDef, usize> = DiGraph::new();
        let mut node_by_name = HashMap::new();

        for workflow in workflows {
            validate_rules(&workflow)?;
            if workflow.name == ACCEPT || workflow.name == REJECT {
                return Err(GraphValidationError::ReservedName(workflow.name));
            }
            if node_by_name.contains_key(&workflow.name) {
                return Err(GraphValidationError::DuplicateNode(workflow.name));
            }
            let name = workflow.name.clone();
            let node = graph.add_node(workflow);
            node_by_name.insert(name, node);
        }

        let mut edges = Vec::new();
        for node in graph.node_indices() {
            let workflow = &graph[node];
            for (rule_index, rule) in workflow.rules.iter().enumerate() {
                if let Label::Node(target) = &rule.target {
                    let target_node = node_by_name.get(target).copied().ok_or_else(|| {
                        GraphValidationError::DanglingTarget {
                            node: workflow.name.clone(),
                            rule_index,
                            target: target.clone(),
                        }
                    })?;
                    edges.push((node, target_node, rule_index));
                }
            }
        }
        for (from, to, rule_index) in edges {
            graph.add_edge(from, to, rule_index);
        }

        let entry = node_by_name
            .get(entry)
            .copied()
            .ok_or_else(|| GraphValidationError::UnknownEntry(entry.to_string()))?;

        let cyclic = is_cyclic_directed(&graph);
        if cyclic {
            warn!(
                workflows = graph.node_count(),
                "workflow graph contains a cycle; execution is bounded by the traversal budget"
            );
        }
        debug!(
            workflows = graph.node_count(),
            links = graph.edge_count(),
            entry = %graph[entry].name,
            "workflow graph built"
        );

        Ok(Self {
            graph,
            node_by_name,
            entry,
            cyclic,
        })
    }

    /// Returns the workflow named `name`, or `None` if there is none.
    pub fn lookup(&self, name: &str) -> Option<&WorkflowDef> {
        self.node_by_name.get(name).map(|&node| &self.graph[node])
    }

    /// Resolves a label to its workflow; terminals never resolve.
    pub fn lookup_label(&self, label: &Label) -> Option<&WorkflowDef> {
        match label {
            Label::Node(name) => self.lookup(name),
            Label::Accept | Label::Reject => None,
        }
    }

    pub fn entry(&self) -> &WorkflowDef {
        &self.graph[self.entry]
    }

    pub fn entry_label(&self) -> Label {
        Label::node(self.entry().name.clone())
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn has_cycle(&self) -> bool {
        self.cyclic
    }

    /// Iterates over every workflow in definition order.
    pub fn workflows(&self) -> impl Iterator<Item = &WorkflowDef> {
        self.graph.node_weights()
    }

    /// Workflows in topological order, or `None` if the graph is cyclic.
    pub fn topo_order(&self) -> Option<Vec<&WorkflowDef>> {
        toposort(&self.graph, None)
            .ok()
            .map(|order| order.into_iter().map(|node| &self.graph[node]).collect())
    }

    /// Names of the workflows that route directly into `name`.
    pub fn callers(&self, name: &str) -> Vec<&str> {
        let Some(&node) = self.node_by_name.get(name) else {
            return Vec::new();
        };
        let mut callers: Vec<&str> = self
            .graph
            .neighbors_directed(node, Direction::Incoming)
            .map(|caller| self.graph[caller].name.as_str())
            .collect();
        callers.sort_unstable();
        callers.dedup();
        callers
    }

    /// Ceiling on workflow visits along one routing path.
    pub fn traversal_budget(&self, factor: usize) -> usize {
        factor.saturating_mul(self.node_count().max(1))
    }
}

fn validate_rules(workflow: &WorkflowDef) -> Result<(), GraphValidationError> {
    let Some(last) = workflow.rules.len().checked_sub(1) else {
        return Err(GraphValidationError::EmptyWorkflow {
            node: workflow.name.clone(),
        });
    };
    if let Some(rule_index) = workflow.rules[..last].iter().position(|r| r.is_always()) {
        return Err(GraphValidationError::FallbackNotLast {
            node: workflow.name.clone(),
            rule_index,
        });
    }
    if !workflow.rules[last].is_always() {
        return Err(GraphValidationError::MissingFallback {
            node: workflow.name.clone(),
            rule_index: last,
        });
    }
    Ok(())
}

impl Display for WorkflowGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "WorkflowGraph {{")?;
        writeln!(f, "  Entry: {}", self.entry().name)?;
        writeln!(f, "  Workflows: {}", self.node_count())?;
        writeln!(f, "  Links: {}", self.link_count())?;
        for workflow in self.workflows() {
            writeln!(f, "    {}", workflow)?;
        }
        write!(f, "}}")
    }
}
