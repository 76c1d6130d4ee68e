//! Build errors for the workflow builder.

use thiserror::Error;

/// Errors that can occur when building a workflow definition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Default state not specified. Call .default_state(state) before .build()")]
    MissingDefaultState,

    #[error("State '{identifier}' is not a member of the workflow's enumeration")]
    UnknownState { identifier: String },

    #[error("Duplicate transition from '{from}' to '{to}'")]
    DuplicateTransition { from: String, to: String },
}
