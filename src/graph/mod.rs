//! The transition graph: action-labeled directed edges and the frozen
//! index over them.

mod index;
mod transition;

pub use index::TransitionIndex;
pub use transition::Transition;
