use thiserror::Error;

/// Reasons a set of workflow definitions cannot form a routable graph.
///
/// All of these are detected eagerly by
/// [`WorkflowGraph::build`](super::WorkflowGraph::build).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphValidationError {
    #[error("Workflow '{node}' has no rules")]
    EmptyWorkflow { node: String },

    #[error("Workflow '{node}' does not end in an unconditional rule (last rule index {rule_index})")]
    MissingFallback { node: String, rule_index: usize },

    #[error("Workflow '{node}' has an unconditional rule at index {rule_index} before its last rule")]
    FallbackNotLast { node: String, rule_index: usize },

    #[error("Workflow '{node}' rule {rule_index} targets unknown workflow '{target}'")]
    DanglingTarget {
        node: String,
        rule_index: usize,
        target: String,
    },

    #[error("Workflow name defined more than once: {0}")]
    DuplicateNode(String),

    #[error("Workflow name collides with a reserved terminal label: {0}")]
    ReservedName(String),

    #[error("Entry workflow is not defined: {0}")]
    UnknownEntry(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangling_target_display_names_context() {
        let e = GraphValidationError::DanglingTarget {
            node: "px".to_string(),
            rule_index: 1,
            target: "zz".to_string(),
        };
        assert_eq!(e.to_string(), "Workflow 'px' rule 1 targets unknown workflow 'zz'");
    }

    #[test]
    fn test_duplicate_node_display() {
        let e = GraphValidationError::DuplicateNode("in".to_string());
        assert_eq!(e.to_string(), "Workflow name defined more than once: in");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            GraphValidationError::ReservedName("A".to_string()),
            GraphValidationError::ReservedName("A".to_string())
        );
        assert_ne!(
            GraphValidationError::ReservedName("A".to_string()),
            GraphValidationError::UnknownEntry("A".to_string())
        );
    }
}
