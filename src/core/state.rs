//! States and the host-entity contract.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// A state drawn from one workflow definition's closed enumeration.
///
/// Implement this on a fieldless enum — one enum per workflow — so states
/// compare by discriminant on the hot path and the type system rules out
/// cross-workflow comparison. The [`workflow_states!`](crate::workflow_states)
/// macro generates conforming impls.
///
/// # Example
///
/// ```rust
/// use trellis::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum ReviewState {
///     Draft,
///     Published,
/// }
///
/// impl State for ReviewState {
///     fn identifier(&self) -> &str {
///         match self {
///             Self::Draft => "Draft",
///             Self::Published => "Published",
///         }
///     }
///
///     fn enumeration() -> &'static [Self] {
///         &[Self::Draft, Self::Published]
///     }
/// }
///
/// assert_eq!(ReviewState::Draft.identifier(), "Draft");
/// assert_eq!(ReviewState::enumeration().len(), 2);
/// ```
pub trait State:
    Clone
    + PartialEq
    + Eq
    + Hash
    + Debug
    + Serialize
    + for<'de> Deserialize<'de>
    + Send
    + Sync
    + 'static
{
    /// The state's identifier, as recorded on entities and used for
    /// resolution and diagnostics.
    fn identifier(&self) -> &str;

    /// The closed, ordered enumeration this state belongs to.
    fn enumeration() -> &'static [Self];
}

/// The narrow contract a host entity must expose: a readable/writable
/// "current workflow state identifier" slot.
///
/// The engine never defines or inspects the rest of the entity's shape.
/// How the slot persists (database column, file, plain field) is the
/// host's business.
pub trait StatefulEntity {
    /// The currently recorded state identifier, if any.
    fn workflow_state(&self) -> Option<&str>;

    /// Record a new state identifier.
    fn set_workflow_state(&mut self, identifier: &str);
}
