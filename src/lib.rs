//! rangeflow - counting the inputs a workflow graph accepts, by interval arithmetic.
//!
//! A workflow graph routes 4-dimensional integer ratings through ordered
//! comparison rules until they reach `A` (accept) or `R` (reject). Instead of
//! enumerating points, the whole rating domain is pushed through the graph as
//! boxes that split at every comparison; the accepted boxes are then made
//! pairwise disjoint and their volumes summed.
//!
//! ```
//! use rangeflow::{Axis, Engine, EngineConfig, Interval, Label, Rule, WorkflowDef};
//!
//! let engine = Engine::new(EngineConfig::with_uniform_domain(Interval::new(1, 10)));
//! let workflows = vec![WorkflowDef::new(
//!     "in",
//!     vec![
//!         Rule::less_than(Axis::X, 5, Label::Accept),
//!         Rule::always(Label::Reject),
//!     ],
//! )];
//! let accepted = engine.count_accepted(workflows).unwrap();
//! assert_eq!(accepted, 4 * 10 * 10 * 10);
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod executor;
pub mod partition;
pub mod space;
pub mod volume;
pub mod workflow;

pub use config::EngineConfig;
pub use driver::{Engine, Evaluation, Tally};
pub use error::Error;
pub use executor::{Execution, ExecutionError, SymbolicExecutor};
pub use partition::partition;
pub use space::{Axis, Interval, PartRange};
pub use volume::total_volume;
pub use workflow::{GraphValidationError, Label, Rule, Terminal, WorkflowDef, WorkflowGraph};
