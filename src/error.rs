//! Runtime error taxonomy.

use crate::core::{ConstraintErrors, TriggerError};
use thiserror::Error;

/// Errors surfaced by workflow operations.
///
/// Lookup failures (`UnknownState`, `NoTransition`) indicate a
/// configuration or programmer defect and should not be presented to end
/// users as guard violations; `Rejected` carries the guard aggregate and
/// is the only data-validation outcome. Every failure is terminal for
/// that attempt — there are no retries in the engine.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The identifier is not a member of the workflow's state
    /// enumeration.
    #[error("unknown state '{identifier}'")]
    UnknownState { identifier: String },

    /// No transition is indexed between the two states.
    #[error("no transition from '{from}' to '{to}'")]
    NoTransition { from: String, to: String },

    /// The transition's constraints do not currently hold. No trigger
    /// ran and the entity's recorded state is untouched.
    #[error(transparent)]
    Rejected(#[from] ConstraintErrors),

    /// A trigger failed. Later triggers did not run and the entity's
    /// recorded state is untouched; effects of earlier triggers stand.
    #[error("trigger failed during '{action}': {source}")]
    Trigger {
        action: String,
        #[source]
        source: TriggerError,
    },
}
