//! Constraints and their combinators.
//!
//! A constraint validates an entity against a caller-supplied context and
//! either passes or signals a failure. [`resolve_constraints`] aggregates
//! a whole list without short-circuiting so every violated guard is
//! reported at once; [`AnyOf`] provides alternation.

use crate::core::error::{ConstraintError, ConstraintErrors, ConstraintViolation};

/// A guard over an entity and a context.
///
/// A plain constraint signals exactly one failure per invocation.
/// Constraints that wrap nested combinators may signal an aggregate,
/// which the aggregation layer flattens.
pub trait Constraint<E, C>: Send + Sync {
    /// Validate the entity. `Ok(())` means the constraint holds.
    ///
    /// Must not mutate the entity or perform the transition's work;
    /// evaluation is advisory and may run many times per commit attempt.
    fn validate(&self, entity: &E, context: &C) -> Result<(), ConstraintViolation>;
}

/// Boxed constraint, the form actions and combinators store.
pub type BoxedConstraint<E, C> = Box<dyn Constraint<E, C>>;

/// Closure-backed constraint.
///
/// # Example
///
/// ```rust
/// use trellis::core::{Constraint, ConstraintError, Guard};
///
/// struct Document { locked: bool }
/// struct Ctx;
///
/// let unlocked = Guard::new(|doc: &Document, _ctx: &Ctx| {
///     if doc.locked {
///         Err(ConstraintError::new("locked", "the document is locked"))
///     } else {
///         Ok(())
///     }
/// });
///
/// assert!(unlocked.validate(&Document { locked: false }, &Ctx).is_ok());
/// assert!(unlocked.validate(&Document { locked: true }, &Ctx).is_err());
/// ```
pub struct Guard<E, C> {
    check: Box<dyn Fn(&E, &C) -> Result<(), ConstraintError> + Send + Sync>,
}

impl<E, C> Guard<E, C> {
    /// Create a constraint from a check function signalling at most one
    /// failure.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&E, &C) -> Result<(), ConstraintError> + Send + Sync + 'static,
    {
        Self {
            check: Box::new(check),
        }
    }
}

impl<E, C> Constraint<E, C> for Guard<E, C> {
    fn validate(&self, entity: &E, context: &C) -> Result<(), ConstraintViolation> {
        (self.check)(entity, context).map_err(ConstraintViolation::from)
    }
}

/// Run every constraint in order and collect all failures.
///
/// Never short-circuits: a failing constraint does not stop evaluation of
/// the ones after it. Aggregates signalled by nested combinators are
/// flattened into the running list. Returns `None` when nothing failed.
pub fn resolve_constraints<E, C>(
    constraints: &[BoxedConstraint<E, C>],
    entity: &E,
    context: &C,
) -> Option<ConstraintErrors> {
    let mut errors = Vec::new();
    for constraint in constraints {
        match constraint.validate(entity, context) {
            Ok(()) => {}
            Err(ConstraintViolation::Single(error)) => errors.push(error),
            Err(ConstraintViolation::Aggregate(aggregate)) => errors.extend(aggregate),
        }
    }
    ConstraintErrors::from_errors(errors)
}

/// Alternation over constraints: passes on the first alternative that
/// holds.
///
/// Short-circuits on success only. On total failure it signals an
/// aggregate of every collected failure, so the caller sees why each
/// alternative was rejected. An `AnyOf` with no alternatives passes,
/// consistent with an action whose constraint list is empty.
pub struct AnyOf<E, C> {
    alternatives: Vec<BoxedConstraint<E, C>>,
}

impl<E, C> AnyOf<E, C> {
    pub fn new(alternatives: Vec<BoxedConstraint<E, C>>) -> Self {
        Self { alternatives }
    }
}

impl<E, C> Constraint<E, C> for AnyOf<E, C> {
    fn validate(&self, entity: &E, context: &C) -> Result<(), ConstraintViolation> {
        let mut errors = Vec::new();
        for alternative in &self.alternatives {
            match alternative.validate(entity, context) {
                Ok(()) => return Ok(()),
                Err(ConstraintViolation::Single(error)) => errors.push(error),
                Err(ConstraintViolation::Aggregate(aggregate)) => errors.extend(aggregate),
            }
        }
        match ConstraintErrors::from_errors(errors) {
            Some(aggregate) => Err(aggregate.into()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entity;
    struct Ctx;

    fn passing() -> BoxedConstraint<Entity, Ctx> {
        Box::new(Guard::new(|_: &Entity, _: &Ctx| Ok(())))
    }

    fn failing(name: &'static str) -> BoxedConstraint<Entity, Ctx> {
        Box::new(Guard::new(move |_: &Entity, _: &Ctx| {
            Err(ConstraintError::new(name, "rejected"))
        }))
    }

    #[test]
    fn resolve_reports_every_failure_in_order() {
        let constraints = vec![failing("c1"), passing(), failing("c3")];

        let errors = resolve_constraints(&constraints, &Entity, &Ctx).unwrap();
        let names: Vec<&str> = errors.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["c1", "c3"]);
    }

    #[test]
    fn resolve_returns_none_when_all_pass() {
        let constraints = vec![passing(), passing()];
        assert!(resolve_constraints(&constraints, &Entity, &Ctx).is_none());
    }

    #[test]
    fn resolve_flattens_nested_aggregates() {
        let nested: BoxedConstraint<Entity, Ctx> =
            Box::new(AnyOf::new(vec![failing("a"), failing("b")]));
        let constraints = vec![nested, failing("c")];

        let errors = resolve_constraints(&constraints, &Entity, &Ctx).unwrap();
        let names: Vec<&str> = errors.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn any_of_passes_on_first_success() {
        let or = AnyOf::new(vec![failing("c1"), passing(), failing("never-reached")]);
        assert!(or.validate(&Entity, &Ctx).is_ok());
    }

    #[test]
    fn any_of_aggregates_when_every_alternative_fails() {
        let or = AnyOf::new(vec![failing("c1"), failing("c2")]);

        match or.validate(&Entity, &Ctx) {
            Err(ConstraintViolation::Aggregate(errors)) => {
                let names: Vec<&str> = errors.iter().map(|e| e.name()).collect();
                assert_eq!(names, vec!["c1", "c2"]);
            }
            other => panic!("expected an aggregate, got {other:?}"),
        }
    }

    #[test]
    fn any_of_short_circuits_on_success() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let calls = Arc::new(AtomicUsize::new(0));
        let counted = calls.clone();
        let spy: BoxedConstraint<Entity, Ctx> = Box::new(Guard::new(move |_: &Entity, _: &Ctx| {
            counted.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }));
        let never = calls.clone();
        let unreached: BoxedConstraint<Entity, Ctx> =
            Box::new(Guard::new(move |_: &Entity, _: &Ctx| {
                never.fetch_add(100, Ordering::SeqCst);
                Ok(())
            }));

        let or = AnyOf::new(vec![spy, unreached]);
        or.validate(&Entity, &Ctx).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn any_of_without_alternatives_passes() {
        let or: AnyOf<Entity, Ctx> = AnyOf::new(Vec::new());
        assert!(or.validate(&Entity, &Ctx).is_ok());
    }
}
