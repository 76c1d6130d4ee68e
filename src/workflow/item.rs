//! The runtime handle binding a workflow to one entity and context.

use crate::core::{State, StatefulEntity};
use crate::error::WorkflowError;
use crate::graph::Transition;
use crate::workflow::definition::Workflow;
use tracing::{debug, trace};

/// Ephemeral binding of {workflow, entity, context}.
///
/// Owns no state of its own — the durable state lives on the entity, and
/// every method re-reads it fresh, so an item can never go stale within
/// a correctly serialized caller. Create one per logical operation and
/// discard it; construction is free.
///
/// The engine performs no locking: concurrent `commit` calls on the same
/// entity are a check-then-act race the caller must prevent by
/// serializing commits per entity.
pub struct WorkflowItem<'a, S: State, E: StatefulEntity, C> {
    workflow: &'a Workflow<S, E, C>,
    entity: &'a mut E,
    context: &'a C,
}

impl<'a, S: State, E: StatefulEntity, C> WorkflowItem<'a, S, E, C> {
    pub(crate) fn new(workflow: &'a Workflow<S, E, C>, entity: &'a mut E, context: &'a C) -> Self {
        Self {
            workflow,
            entity,
            context,
        }
    }

    /// The entity's current state: its recorded identifier resolved
    /// against the enumeration, or the workflow's default when the
    /// entity records nothing (or an empty identifier).
    pub fn current_state(&self) -> Result<S, WorkflowError> {
        self.workflow
            .state_or_default(self.entity.workflow_state())
    }

    /// The transitions currently available out of the entity's state, in
    /// definition order.
    ///
    /// Recomputed from the entity on every call — never cached — and
    /// advisory only: availability may change before a later commit,
    /// which re-checks guards itself.
    pub fn available_transitions(&self) -> Result<Vec<&Transition<S, E, C>>, WorkflowError> {
        let current = self.current_state()?;
        Ok(self
            .workflow
            .transitions()
            .available(&current, &*self.entity, self.context)
            .collect())
    }

    /// Execute the guarded transition from the current state to
    /// `target_identifier`.
    ///
    /// In order: resolve the target, look up the transition, re-check
    /// its constraints against the current entity and context, run its
    /// triggers in declared order, and only then write the target
    /// identifier onto the entity.
    ///
    /// On a guard failure ([`WorkflowError::Rejected`]) no trigger runs
    /// and the recorded state is untouched. On a trigger failure
    /// ([`WorkflowError::Trigger`]) later triggers and the state write
    /// are skipped, but effects of triggers that already ran stand —
    /// the engine does not undo side effects.
    pub fn commit(&mut self, target_identifier: &str) -> Result<(), WorkflowError> {
        let workflow = self.workflow;
        let target = workflow.state(target_identifier)?;
        let current = self.current_state()?;
        let transition = workflow.transitions().find(&current, &target)?;
        let action = transition.action();

        if let Some(errors) = action.check_constraints(&*self.entity, self.context) {
            debug!(
                action = action.identifier(),
                from = current.identifier(),
                to = target.identifier(),
                failures = errors.len(),
                "transition rejected by constraints"
            );
            return Err(WorkflowError::Rejected(errors));
        }

        for (position, trigger) in action.triggers().iter().enumerate() {
            trace!(
                action = action.identifier(),
                position,
                "running trigger"
            );
            trigger(&mut *self.entity, self.context).map_err(|source| WorkflowError::Trigger {
                action: action.identifier().to_string(),
                source,
            })?;
        }

        self.entity.set_workflow_state(target.identifier());
        debug!(
            action = action.identifier(),
            from = current.identifier(),
            to = target.identifier(),
            "transition committed"
        );
        Ok(())
    }
}
