//! Directed, action-labeled edges between states.

use crate::core::{Action, State};
use std::fmt;
use std::sync::Arc;

/// An immutable directed edge: move from `origin` to `target` by
/// performing `action`.
///
/// Directionality matters — a transition from A to B does not imply one
/// from B to A. The action sits behind an `Arc` so one action may label
/// several transitions.
pub struct Transition<S, E, C> {
    action: Arc<Action<E, C>>,
    origin: S,
    target: S,
}

impl<S: State, E, C> Transition<S, E, C> {
    pub fn new(action: impl Into<Arc<Action<E, C>>>, origin: S, target: S) -> Self {
        Self {
            action: action.into(),
            origin,
            target,
        }
    }

    pub fn action(&self) -> &Action<E, C> {
        &self.action
    }

    pub fn origin(&self) -> &S {
        &self.origin
    }

    pub fn target(&self) -> &S {
        &self.target
    }
}

impl<S: State, E, C> Clone for Transition<S, E, C> {
    fn clone(&self) -> Self {
        Self {
            action: Arc::clone(&self.action),
            origin: self.origin.clone(),
            target: self.target.clone(),
        }
    }
}

impl<S: State, E, C> PartialEq for Transition<S, E, C> {
    fn eq(&self, other: &Self) -> bool {
        self.action == other.action && self.origin == other.origin && self.target == other.target
    }
}

impl<S: State, E, C> fmt::Debug for Transition<S, E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("action", &self.action.identifier())
            .field("origin", &self.origin)
            .field("target", &self.target)
            .finish()
    }
}
