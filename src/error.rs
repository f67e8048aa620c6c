use crate::executor::ExecutionError;
use crate::workflow::GraphValidationError;
use thiserror::Error;

/// Any failure of an end-to-end evaluation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid workflow graph: {0}")]
    Graph(#[from] GraphValidationError),

    #[error("Execution failed: {0}")]
    Execution(#[from] ExecutionError),
}
