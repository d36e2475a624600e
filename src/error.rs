use thiserror::Error;

macro_rules! invalid_argument {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidArgument($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidArgument(format!($fmt, $($arg)*))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every variant describes a caller error. The library validates its inputs eagerly, so when
/// an error is returned no graph or search state has been modified.
///
/// # Error Categories
///
/// - [`Error::InvalidArgument`] - A structurally invalid argument, such as a zero vertex count
///   or a visit order that is not a permutation of the vertices
/// - [`Error::OutOfRange`] - A vertex index outside `[0, vertex_count)`
/// - [`Error::EmptyQueue`] - A dequeue from an empty [`Queue`](crate::utils::Queue)
///
/// # Examples
///
/// ```rust
/// use graphical::{Digraph, Error};
///
/// match Digraph::new(0) {
///     Err(Error::InvalidArgument(message)) => println!("rejected: {message}"),
///     Err(e) => println!("other error: {e}"),
///     Ok(_) => unreachable!(),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was structurally invalid.
    ///
    /// Raised when a graph is constructed with zero vertices, or when an explicit
    /// depth-first visit order has the wrong length or repeats a vertex.
    #[error("Invalid argument - {0}")]
    InvalidArgument(String),

    /// A vertex index was outside the graph.
    ///
    /// # Fields
    ///
    /// * `vertex` - The offending vertex index
    /// * `vertex_count` - The number of vertices in the graph
    #[error("Vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    OutOfRange {
        /// The vertex index that was rejected
        vertex: usize,
        /// The vertex count of the graph it was checked against
        vertex_count: usize,
    },

    /// Attempted to dequeue from an empty queue.
    #[error("Attempted to dequeue from an empty queue")]
    EmptyQueue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_macro() {
        let err = invalid_argument!("vertex count must be positive");
        assert_eq!(
            err,
            Error::InvalidArgument("vertex count must be positive".to_string())
        );

        let err = invalid_argument!("expected {} vertices, got {}", 3, 2);
        assert_eq!(err.to_string(), "Invalid argument - expected 3 vertices, got 2");
    }

    #[test]
    fn test_out_of_range_display() {
        let err = Error::OutOfRange {
            vertex: 9,
            vertex_count: 4,
        };
        assert_eq!(
            err.to_string(),
            "Vertex 9 is out of range for a graph with 4 vertices"
        );
    }
}
