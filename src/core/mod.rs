//! Core engine types: failure values, constraints, actions, states.
//!
//! Guard evaluation here is functional — it returns an optional failure
//! aggregate instead of raising — so the layers above can compose results
//! freely. Only the commit boundary turns a present aggregate into a
//! propagated error.

mod action;
mod constraint;
mod error;
mod state;

pub use action::{Action, Trigger, TriggerError};
pub use constraint::{resolve_constraints, AnyOf, BoxedConstraint, Constraint, Guard};
pub use error::{ConstraintError, ConstraintErrors, ConstraintViolation};
pub use state::{State, StatefulEntity};
