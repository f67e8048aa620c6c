//! Workflow definitions and the validated routing graph built from them.

pub mod error;
mod graph;
mod rule;

pub use error::GraphValidationError;
pub use graph::WorkflowGraph;
pub use rule::{Comparator, Label, Rule, Terminal, WorkflowDef, ACCEPT, REJECT};
