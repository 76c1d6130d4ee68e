//! Workflow definitions.

use crate::core::{State, StatefulEntity};
use crate::error::WorkflowError;
use crate::graph::{Transition, TransitionIndex};
use crate::workflow::item::WorkflowItem;

/// A workflow definition: a closed state enumeration (carried by `S`), a
/// frozen transition index, and a default state.
///
/// Immutable after construction and intended to be built once and shared
/// across many entities. Binding it to an entity and context yields an
/// ephemeral [`WorkflowItem`].
///
/// # Example
///
/// ```rust
/// use trellis::core::{Action, StatefulEntity};
/// use trellis::graph::Transition;
/// use trellis::workflow::Workflow;
/// use trellis::workflow_states;
///
/// workflow_states! {
///     pub enum DoorState {
///         Closed,
///         Open,
///     }
/// }
///
/// struct Door { state: Option<String> }
///
/// impl StatefulEntity for Door {
///     fn workflow_state(&self) -> Option<&str> {
///         self.state.as_deref()
///     }
///     fn set_workflow_state(&mut self, identifier: &str) {
///         self.state = Some(identifier.to_string());
///     }
/// }
///
/// let workflow: Workflow<DoorState, Door, ()> = Workflow::new(
///     DoorState::Closed,
///     vec![
///         Transition::new(Action::new("open"), DoorState::Closed, DoorState::Open),
///         Transition::new(Action::new("close"), DoorState::Open, DoorState::Closed),
///     ],
/// )
/// .unwrap();
///
/// let mut door = Door { state: None };
/// let mut item = workflow.bind(&mut door, &());
/// assert_eq!(item.current_state().unwrap(), DoorState::Closed);
/// item.commit("Open").unwrap();
/// assert_eq!(door.state.as_deref(), Some("Open"));
/// ```
pub struct Workflow<S: State, E, C> {
    transitions: TransitionIndex<S, E, C>,
    default_state: S,
}

impl<S: State, E, C> Workflow<S, E, C> {
    /// Build a definition from a default state and an ordered list of
    /// transitions.
    ///
    /// Fails with [`WorkflowError::UnknownState`] if the default is not
    /// a member of the state enumeration.
    pub fn new(default_state: S, transitions: Vec<Transition<S, E, C>>) -> Result<Self, WorkflowError> {
        if !S::enumeration().contains(&default_state) {
            return Err(WorkflowError::UnknownState {
                identifier: default_state.identifier().to_string(),
            });
        }
        Ok(Self::from_parts(
            default_state,
            TransitionIndex::new(transitions),
        ))
    }

    pub(crate) fn from_parts(default_state: S, transitions: TransitionIndex<S, E, C>) -> Self {
        Self {
            transitions,
            default_state,
        }
    }

    /// Resolve a state identifier against the closed enumeration.
    pub fn state(&self, identifier: &str) -> Result<S, WorkflowError> {
        S::enumeration()
            .iter()
            .find(|state| state.identifier() == identifier)
            .cloned()
            .ok_or_else(|| WorkflowError::UnknownState {
                identifier: identifier.to_string(),
            })
    }

    /// Resolve an optional identifier; absent or empty maps to the
    /// default state.
    pub fn state_or_default(&self, identifier: Option<&str>) -> Result<S, WorkflowError> {
        match identifier {
            None => Ok(self.default_state.clone()),
            Some("") => Ok(self.default_state.clone()),
            Some(identifier) => self.state(identifier),
        }
    }

    /// The definition's default state.
    pub fn default_state(&self) -> &S {
        &self.default_state
    }

    /// The frozen transition index.
    pub fn transitions(&self) -> &TransitionIndex<S, E, C> {
        &self.transitions
    }

    /// Bind the definition to an entity and context. Pure: nothing is
    /// read or written until the item is used.
    pub fn bind<'a>(&'a self, entity: &'a mut E, context: &'a C) -> WorkflowItem<'a, S, E, C>
    where
        E: StatefulEntity,
    {
        WorkflowItem::new(self, entity, context)
    }
}

impl<S: State, E, C> std::fmt::Debug for Workflow<S, E, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workflow")
            .field("transitions", &self.transitions)
            .field("default_state", &self.default_state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Phase {
        Start,
        Finish,
    }

    impl State for Phase {
        fn identifier(&self) -> &str {
            match self {
                Self::Start => "Start",
                Self::Finish => "Finish",
            }
        }

        fn enumeration() -> &'static [Self] {
            &[Self::Start, Self::Finish]
        }
    }

    struct Entity;
    struct Ctx;

    fn workflow() -> Workflow<Phase, Entity, Ctx> {
        Workflow::new(
            Phase::Start,
            vec![Transition::new(
                Action::new("finish"),
                Phase::Start,
                Phase::Finish,
            )],
        )
        .unwrap()
    }

    #[test]
    fn resolves_known_identifiers() {
        let workflow = workflow();
        assert_eq!(workflow.state("Finish").unwrap(), Phase::Finish);
    }

    #[test]
    fn unknown_identifier_is_a_lookup_error() {
        let workflow = workflow();
        let error = workflow.state("Missing").unwrap_err();
        assert!(matches!(error, WorkflowError::UnknownState { .. }));
    }

    #[test]
    fn absent_and_empty_map_to_the_default() {
        let workflow = workflow();
        assert_eq!(workflow.state_or_default(None).unwrap(), Phase::Start);
        assert_eq!(workflow.state_or_default(Some("")).unwrap(), Phase::Start);
        assert_eq!(
            workflow.state_or_default(Some("Finish")).unwrap(),
            Phase::Finish
        );
    }
}
