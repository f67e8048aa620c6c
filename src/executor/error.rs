use crate::space::Axis;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("Traversal budget exceeded at workflow '{node}': {visits} visits on one path (budget {budget})")]
    TraversalBudgetExceeded {
        node: String,
        visits: usize,
        budget: usize,
    },

    #[error("Box addressed to unknown workflow: {0}")]
    UnknownNode(String),

    #[error("Workflow '{node}' left part of the box unrouted after rule {rule_index} on axis {axis}")]
    UnroutedRemainder {
        node: String,
        rule_index: usize,
        axis: Axis,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_exceeded_display() {
        let e = ExecutionError::TraversalBudgetExceeded {
            node: "loop".to_string(),
            visits: 21,
            budget: 20,
        };
        assert_eq!(
            e.to_string(),
            "Traversal budget exceeded at workflow 'loop': 21 visits on one path (budget 20)"
        );
    }

    #[test]
    fn test_unrouted_remainder_display_names_axis() {
        let e = ExecutionError::UnroutedRemainder {
            node: "px".to_string(),
            rule_index: 2,
            axis: Axis::M,
        };
        assert!(e.to_string().contains("on axis m"));
    }
}
