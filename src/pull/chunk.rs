//! Fixed-size batch extraction.

use std::error;
use std::fmt;

/// A `next_chunk` request that could not be filled.
///
/// Holds the `k < n` elements that were available, so nothing is lost.
#[derive(Clone, PartialEq, Eq)]
pub struct PartialChunk<T> {
    requested: usize,
    items: Vec<T>,
}

impl<T> PartialChunk<T> {
    pub(crate) fn new(requested: usize, items: Vec<T>) -> Self {
        debug_assert!(items.len() < requested);
        Self { requested, items }
    }

    /// Chunk size that was asked for.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Number of elements that were missing.
    pub fn missing(&self) -> usize {
        self.requested - self.items.len()
    }

    /// Elements that were available.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Take ownership of the available elements.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T: fmt::Debug> fmt::Debug for PartialChunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialChunk")
            .field("requested", &self.requested)
            .field("items", &self.items)
            .finish()
    }
}

impl<T> fmt::Display for PartialChunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "requested a chunk of {} elements but only {} were available",
            self.requested,
            self.items.len()
        )
    }
}

impl<T: fmt::Debug> error::Error for PartialChunk<T> {}
