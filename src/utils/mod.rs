//! Small, independently testable primitives consumed by the graph algorithms.
//!
//! - [`Queue`] - FIFO queue used by breadth-first search
//! - [`slice_by`] - splits a sequence into runs that start where a predicate holds

mod queue;
mod slice;

pub use queue::Queue;
pub use slice::slice_by;
