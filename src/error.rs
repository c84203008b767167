use thiserror::Error;

/// Error types for `DynArray` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynArrayError {
    /// Index is beyond the current array length
    #[error("Index out of bounds: index {index} is beyond array length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the array
        length: usize,
    },
    /// Removal was attempted while no live elements exist
    #[error("Underflow: pop on an empty array")]
    Empty,
    /// The global allocator could not provide the requested block
    #[error("Allocation failed: the allocator returned null for {bytes} bytes")]
    AllocationFailed {
        /// Size of the failed request in bytes
        bytes: usize,
    },
    /// The requested element count cannot be laid out in memory
    #[error("Capacity overflow: {requested} elements exceed the maximum allocation size")]
    CapacityOverflow {
        /// Element count that was requested
        requested: usize,
    },
}
