use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum HeapError {
    #[error("heap is empty")]
    EmptyHeap,
    /// The buffer could not be grown to `requested` slots. The heap is unchanged.
    #[error("failed to grow heap buffer to {requested} slots")]
    AllocationFailure { requested: usize },
}

impl HeapError {
    pub(crate) fn allocation(requested: usize, e: TryReserveError) -> Self {
        log::debug!("reservation of {} slots failed: {}", requested, e);
        HeapError::AllocationFailure { requested }
    }
}

pub type Result<T> = core::result::Result<T, HeapError>;
