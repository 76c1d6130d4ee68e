//! Builder for constructing workflow definitions.

use crate::builder::error::BuildError;
use crate::core::{Action, State};
use crate::graph::{Transition, TransitionIndex};
use crate::workflow::Workflow;
use std::sync::Arc;

/// Builder for workflow definitions with a fluent API.
///
/// Validates at build time that the default state and every transition
/// endpoint belong to the state enumeration. By default a later
/// (origin, target) duplicate silently replaces the earlier one, like
/// the index itself; call [`deny_duplicate_edges`] to reject duplicates
/// instead.
///
/// [`deny_duplicate_edges`]: WorkflowBuilder::deny_duplicate_edges
///
/// # Example
///
/// ```rust
/// use trellis::builder::WorkflowBuilder;
/// use trellis::core::Action;
/// use trellis::workflow_states;
///
/// workflow_states! {
///     pub enum OrderState {
///         Pending,
///         Shipped,
///         Delivered,
///     }
/// }
///
/// struct Order;
///
/// let workflow = WorkflowBuilder::<OrderState, Order, ()>::new()
///     .default_state(OrderState::Pending)
///     .transition(Action::new("ship"), OrderState::Pending, OrderState::Shipped)
///     .transition(Action::new("deliver"), OrderState::Shipped, OrderState::Delivered)
///     .build()
///     .unwrap();
///
/// assert_eq!(workflow.transitions().len(), 2);
/// ```
pub struct WorkflowBuilder<S: State, E, C> {
    default_state: Option<S>,
    transitions: Vec<Transition<S, E, C>>,
    deny_duplicates: bool,
}

impl<S: State, E, C> WorkflowBuilder<S, E, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            default_state: None,
            transitions: Vec::new(),
            deny_duplicates: false,
        }
    }

    /// Set the default state (required).
    pub fn default_state(mut self, state: S) -> Self {
        self.default_state = Some(state);
        self
    }

    /// Add a transition from its parts. The action may be shared: pass
    /// an `Arc<Action<_, _>>` to label several transitions with one
    /// action.
    pub fn transition(mut self, action: impl Into<Arc<Action<E, C>>>, origin: S, target: S) -> Self {
        self.transitions.push(Transition::new(action, origin, target));
        self
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E, C>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, E, C>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Reject duplicate (origin, target) pairs at build time instead of
    /// letting the last one win.
    pub fn deny_duplicate_edges(mut self) -> Self {
        self.deny_duplicates = true;
        self
    }

    /// Build the workflow definition.
    pub fn build(self) -> Result<Workflow<S, E, C>, BuildError> {
        let default_state = self.default_state.ok_or(BuildError::MissingDefaultState)?;

        let enumeration = S::enumeration();
        if !enumeration.contains(&default_state) {
            return Err(BuildError::UnknownState {
                identifier: default_state.identifier().to_string(),
            });
        }

        for transition in &self.transitions {
            for endpoint in [transition.origin(), transition.target()] {
                if !enumeration.contains(endpoint) {
                    return Err(BuildError::UnknownState {
                        identifier: endpoint.identifier().to_string(),
                    });
                }
            }
        }

        if self.deny_duplicates {
            for (i, transition) in self.transitions.iter().enumerate() {
                let duplicated = self.transitions[..i].iter().any(|earlier| {
                    earlier.origin() == transition.origin()
                        && earlier.target() == transition.target()
                });
                if duplicated {
                    return Err(BuildError::DuplicateTransition {
                        from: transition.origin().identifier().to_string(),
                        to: transition.target().identifier().to_string(),
                    });
                }
            }
        }

        Ok(Workflow::from_parts(
            default_state,
            TransitionIndex::new(self.transitions),
        ))
    }
}

impl<S: State, E, C> Default for WorkflowBuilder<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Stage {
        New,
        Active,
        Done,
        // Deliberately left out of the declared enumeration below.
        Hidden,
    }

    impl State for Stage {
        fn identifier(&self) -> &str {
            match self {
                Self::New => "New",
                Self::Active => "Active",
                Self::Done => "Done",
                Self::Hidden => "Hidden",
            }
        }

        fn enumeration() -> &'static [Self] {
            &[Self::New, Self::Active, Self::Done]
        }
    }

    struct Entity;
    struct Ctx;

    #[test]
    fn builder_requires_a_default_state() {
        let result = WorkflowBuilder::<Stage, Entity, Ctx>::new().build();
        assert_eq!(result.unwrap_err(), BuildError::MissingDefaultState);
    }

    #[test]
    fn builder_rejects_a_default_outside_the_enumeration() {
        let result = WorkflowBuilder::<Stage, Entity, Ctx>::new()
            .default_state(Stage::Hidden)
            .build();
        assert_eq!(
            result.unwrap_err(),
            BuildError::UnknownState {
                identifier: "Hidden".to_string()
            }
        );
    }

    #[test]
    fn builder_rejects_endpoints_outside_the_enumeration() {
        let result = WorkflowBuilder::<Stage, Entity, Ctx>::new()
            .default_state(Stage::New)
            .transition(Action::new("vanish"), Stage::New, Stage::Hidden)
            .build();
        assert!(matches!(result, Err(BuildError::UnknownState { .. })));
    }

    #[test]
    fn duplicates_pass_by_default_with_last_wins() {
        let workflow = WorkflowBuilder::<Stage, Entity, Ctx>::new()
            .default_state(Stage::New)
            .transition(Action::new("first"), Stage::New, Stage::Active)
            .transition(Action::new("second"), Stage::New, Stage::Active)
            .build()
            .unwrap();

        assert_eq!(workflow.transitions().len(), 1);
        let transition = workflow
            .transitions()
            .find(&Stage::New, &Stage::Active)
            .unwrap();
        assert_eq!(transition.action().identifier(), "second");
    }

    #[test]
    fn strict_mode_rejects_duplicates() {
        let result = WorkflowBuilder::<Stage, Entity, Ctx>::new()
            .default_state(Stage::New)
            .deny_duplicate_edges()
            .transition(Action::new("first"), Stage::New, Stage::Active)
            .transition(Action::new("second"), Stage::New, Stage::Active)
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateTransition {
                from: "New".to_string(),
                to: "Active".to_string()
            }
        );
    }

    #[test]
    fn fluent_api_builds_a_workflow() {
        let workflow = WorkflowBuilder::<Stage, Entity, Ctx>::new()
            .default_state(Stage::New)
            .transition(Action::new("activate"), Stage::New, Stage::Active)
            .transition(Action::new("close"), Stage::Active, Stage::Done)
            .build()
            .unwrap();

        assert_eq!(workflow.default_state(), &Stage::New);
        assert_eq!(workflow.transitions().len(), 2);
    }
}
