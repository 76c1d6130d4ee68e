//! Construction helpers: the workflow builder and the state-enum macro.

mod error;
mod macros;
mod workflow;

pub use error::BuildError;
pub use workflow::WorkflowBuilder;
