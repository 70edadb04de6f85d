use std::collections::TryReserveError;

use thiserror::Error;

/// Errors reported by the fallible operations of a [`PriorityHeap`].
///
/// [`PriorityHeap`]: crate::PriorityHeap
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// The operation needs at least one live entry.
    ///
    /// The panicking variants (`pop`, `peek`, `front`) treat this as a
    /// contract violation.
    #[error("operation requires a non-empty priority heap")]
    Empty,
    #[error("failed to allocate storage for {requested} entries: {source}")]
    ResourceExhaustion {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("capacity overflow while growing a heap of capacity {0}")]
    CapacityOverflow(usize),
}
