//! Trellis: a guarded-transition workflow engine.
//!
//! A [`Workflow`] attaches a closed set of named states to an arbitrary
//! host entity and governs movement between them through guarded
//! transitions: a transition fires only if all of its constraints hold
//! against the entity and a caller-supplied context. On success the
//! transition's triggers run in order, then the entity's recorded state
//! is updated.
//!
//! # Core concepts
//!
//! - **Constraint**: a predicate over (entity, context) that either
//!   passes or signals a named failure. Evaluation aggregates *all*
//!   failures instead of stopping at the first; [`core::AnyOf`] provides
//!   alternation.
//! - **Action**: a named bundle of constraints and side-effecting
//!   triggers labeling one edge.
//! - **Workflow / WorkflowItem**: the shared, immutable definition and
//!   the ephemeral per-call binding to one entity and context.
//!
//! The engine is fully synchronous and performs no locking; callers
//! serialize commits per entity. On a mid-commit failure the entity's
//! recorded state is untouched, but triggers that already ran are not
//! undone.
//!
//! # Example
//!
//! ```rust
//! use trellis::builder::WorkflowBuilder;
//! use trellis::core::{Action, ConstraintError, Guard, StatefulEntity};
//! use trellis::workflow_states;
//!
//! workflow_states! {
//!     pub enum PostState {
//!         Draft,
//!         Published,
//!     }
//! }
//!
//! struct Post {
//!     state: Option<String>,
//!     body: String,
//! }
//!
//! impl StatefulEntity for Post {
//!     fn workflow_state(&self) -> Option<&str> {
//!         self.state.as_deref()
//!     }
//!     fn set_workflow_state(&mut self, identifier: &str) {
//!         self.state = Some(identifier.to_string());
//!     }
//! }
//!
//! struct Session {
//!     can_publish: bool,
//! }
//!
//! let workflow = WorkflowBuilder::<PostState, Post, Session>::new()
//!     .default_state(PostState::Draft)
//!     .transition(
//!         Action::new("publish").constraint(Guard::new(|_: &Post, session: &Session| {
//!             if session.can_publish {
//!                 Ok(())
//!             } else {
//!                 Err(ConstraintError::new("forbidden", "session may not publish"))
//!             }
//!         })),
//!         PostState::Draft,
//!         PostState::Published,
//!     )
//!     .build()
//!     .unwrap();
//!
//! let mut post = Post { state: None, body: "hello".to_string() };
//! let session = Session { can_publish: true };
//!
//! let mut item = workflow.bind(&mut post, &session);
//! assert_eq!(item.current_state().unwrap(), PostState::Draft);
//! item.commit("Published").unwrap();
//! assert_eq!(post.state.as_deref(), Some("Published"));
//! # let _ = post.body;
//! ```

pub mod builder;
pub mod core;
pub mod error;
pub mod graph;
pub mod workflow;

// Re-export the common surface.
pub use crate::builder::{BuildError, WorkflowBuilder};
pub use crate::core::{
    resolve_constraints, Action, AnyOf, BoxedConstraint, Constraint, ConstraintError,
    ConstraintErrors, ConstraintViolation, Guard, State, StatefulEntity, Trigger, TriggerError,
};
pub use crate::error::WorkflowError;
pub use crate::graph::{Transition, TransitionIndex};
pub use crate::workflow::{Workflow, WorkflowItem};
