//! Workflow definitions and the runtime handles they bind.

mod definition;
mod item;

pub use definition::Workflow;
pub use item::WorkflowItem;
