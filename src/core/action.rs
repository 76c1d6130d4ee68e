//! Actions: named bundles of guard constraints and side-effecting
//! triggers attached to transitions.

use crate::core::constraint::{resolve_constraints, BoxedConstraint, Constraint};
use crate::core::error::ConstraintErrors;
use std::fmt;

/// Error signalled by a trigger, carried through [`commit`] without
/// reinterpretation.
///
/// [`commit`]: crate::workflow::WorkflowItem::commit
pub type TriggerError = Box<dyn std::error::Error + Send + Sync>;

/// A side-effecting operation run upon a successful transition, before
/// the entity's recorded state is updated.
pub type Trigger<E, C> = Box<dyn Fn(&mut E, &C) -> Result<(), TriggerError> + Send + Sync>;

/// A named, reusable bundle of constraints and triggers — the work and
/// guards for moving along one edge of the transition graph.
///
/// Actions are immutable once constructed and compare equal by
/// identifier. The same action may label multiple transitions.
///
/// # Example
///
/// ```rust
/// use trellis::core::{Action, ConstraintError, Guard};
///
/// struct Article { reviewed: bool }
/// struct Ctx;
///
/// let publish = Action::new("publish")
///     .constraint(Guard::new(|article: &Article, _: &Ctx| {
///         if article.reviewed {
///             Ok(())
///         } else {
///             Err(ConstraintError::new("unreviewed", "the article was never reviewed"))
///         }
///     }))
///     .trigger(|_article: &mut Article, _: &Ctx| {
///         // notify subscribers, etc.
///         Ok(())
///     });
///
/// assert!(publish.check_constraints(&Article { reviewed: true }, &Ctx).is_none());
/// assert!(publish.check_constraints(&Article { reviewed: false }, &Ctx).is_some());
/// ```
pub struct Action<E, C> {
    identifier: String,
    constraints: Vec<BoxedConstraint<E, C>>,
    triggers: Vec<Trigger<E, C>>,
}

impl<E, C> Action<E, C> {
    /// Create an action with no constraints (always passes) and no
    /// triggers.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            constraints: Vec::new(),
            triggers: Vec::new(),
        }
    }

    /// Append a constraint. Constraints are evaluated in the order they
    /// were added.
    pub fn constraint(mut self, constraint: impl Constraint<E, C> + 'static) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }

    /// Append a trigger. Triggers run in the order they were added.
    pub fn trigger<F>(mut self, trigger: F) -> Self
    where
        F: Fn(&mut E, &C) -> Result<(), TriggerError> + Send + Sync + 'static,
    {
        self.triggers.push(Box::new(trigger));
        self
    }

    /// The action's identifier, used for diagnostics and equality.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Evaluate every constraint against the entity and context.
    ///
    /// Returns `None` when all constraints hold; an empty constraint
    /// list passes without any evaluation. Pure with respect to the
    /// entity: no trigger runs here.
    pub fn check_constraints(&self, entity: &E, context: &C) -> Option<ConstraintErrors> {
        if self.constraints.is_empty() {
            return None;
        }
        resolve_constraints(&self.constraints, entity, context)
    }

    /// The triggers, in declared order.
    pub fn triggers(&self) -> &[Trigger<E, C>] {
        &self.triggers
    }
}

impl<E, C> PartialEq for Action<E, C> {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl<E, C> Eq for Action<E, C> {}

impl<E, C> fmt::Debug for Action<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("identifier", &self.identifier)
            .field("constraints", &self.constraints.len())
            .field("triggers", &self.triggers.len())
            .finish()
    }
}
