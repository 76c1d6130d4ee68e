//! The transition index: a frozen directed graph over states.

use crate::core::State;
use crate::error::WorkflowError;
use crate::graph::transition::Transition;
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

/// Directed-graph index over states, built once from an ordered sequence
/// of transitions and immutable afterwards.
///
/// Keyed by origin, then target. At most one transition is retained per
/// (origin, target) pair: a later duplicate replaces the earlier one in
/// place, so the last-supplied action wins while the pair keeps its
/// original position in iteration order. Definitions that want
/// duplicates rejected instead use
/// [`WorkflowBuilder::deny_duplicate_edges`](crate::builder::WorkflowBuilder::deny_duplicate_edges).
pub struct TransitionIndex<S: State, E, C> {
    edges: HashMap<S, Vec<Transition<S, E, C>>>,
}

impl<S: State, E, C> TransitionIndex<S, E, C> {
    /// Build the index. Bucket order follows the order transitions were
    /// supplied.
    pub fn new(transitions: impl IntoIterator<Item = Transition<S, E, C>>) -> Self {
        let mut edges: HashMap<S, Vec<Transition<S, E, C>>> = HashMap::new();
        for transition in transitions {
            let bucket = edges.entry(transition.origin().clone()).or_default();
            match bucket
                .iter_mut()
                .find(|existing| existing.target() == transition.target())
            {
                Some(existing) => {
                    trace!(
                        origin = transition.origin().identifier(),
                        target = transition.target().identifier(),
                        replaced = existing.action().identifier(),
                        by = transition.action().identifier(),
                        "duplicate transition overwritten at construction"
                    );
                    *existing = transition;
                }
                None => bucket.push(transition),
            }
        }
        Self { edges }
    }

    /// Lazily enumerate the transitions out of `origin` whose action
    /// constraints currently pass, in supply order.
    ///
    /// Advisory only: the entity or context may change between this
    /// listing and a later commit attempt, which re-checks on its own.
    pub fn available<'a>(
        &'a self,
        origin: &S,
        entity: &'a E,
        context: &'a C,
    ) -> impl Iterator<Item = &'a Transition<S, E, C>> + 'a {
        self.edges
            .get(origin)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter(move |transition| {
                transition
                    .action()
                    .check_constraints(entity, context)
                    .is_none()
            })
    }

    /// Exact lookup of the transition between two states.
    ///
    /// A miss is a configuration/programmer error, not a guard
    /// violation.
    pub fn find(&self, origin: &S, target: &S) -> Result<&Transition<S, E, C>, WorkflowError> {
        self.edges
            .get(origin)
            .and_then(|bucket| {
                bucket
                    .iter()
                    .find(|transition| transition.target() == target)
            })
            .ok_or_else(|| WorkflowError::NoTransition {
                from: origin.identifier().to_string(),
                to: target.identifier().to_string(),
            })
    }

    /// Total number of indexed transitions.
    pub fn len(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<S: State, E, C> fmt::Debug for TransitionIndex<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionIndex")
            .field("edges", &self.edges)
            .finish()
    }
}
