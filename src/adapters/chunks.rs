//! Batching adapters: fixed-size chunks, predicate-delimited runs and
//! sliding windows.

use std::collections::VecDeque;
use std::fmt;

use crate::pull::{FusedPull, Pull};
use crate::size_hint::SizeHint;

/// Handle returned by [`Pull::chunks`].
///
/// Yields `Vec`s of exactly `size` elements. Once upstream cannot fill a
/// chunk, the handle is done and the leftover elements are kept aside.
#[derive(Debug, Clone)]
pub struct Chunks<I: Pull> {
    iter: I,
    size: usize,
    remainder: Vec<I::Item>,
    done: bool,
}

impl<I: Pull> Chunks<I> {
    pub(crate) fn new(iter: I, size: usize) -> Self {
        debug_assert!(size != 0);
        Self {
            iter,
            size,
            remainder: Vec::new(),
            done: false,
        }
    }

    /// Chunk size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Elements left over after the last full chunk; empty until exhausted.
    pub fn remainder(&self) -> &[I::Item] {
        &self.remainder
    }

    /// Take the leftover elements.
    pub fn into_remainder(self) -> Vec<I::Item> {
        self.remainder
    }
}

impl<I: Pull> Pull for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if self.done {
            return None;
        }
        match self.iter.next_chunk(self.size) {
            Ok(chunk) => Some(chunk),
            Err(partial) => {
                self.done = true;
                self.remainder = partial.into_items();
                None
            }
        }
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            SizeHint::EMPTY
        } else {
            self.iter.size_hint().div_floor(self.size)
        }
    }
}

impl<I: Pull> FusedPull for Chunks<I> {}

/// Handle returned by [`Pull::chunk_by`].
///
/// A run continues while `same_group(last_in_run, next)` holds. The element
/// that breaks a run is held back as the start of the next one.
pub struct ChunkBy<I: Pull, P> {
    iter: I,
    same_group: P,
    pending: Option<I::Item>,
}

impl<I: Pull, P> ChunkBy<I, P> {
    pub(crate) fn new(iter: I, same_group: P) -> Self {
        Self {
            iter,
            same_group,
            pending: None,
        }
    }
}

impl<I, P> fmt::Debug for ChunkBy<I, P>
where
    I: Pull + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkBy")
            .field("iter", &self.iter)
            .field("pending", &self.pending)
            .finish()
    }
}

impl<I, P> Clone for ChunkBy<I, P>
where
    I: Pull + Clone,
    I::Item: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            same_group: self.same_group.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl<I, P> Pull for ChunkBy<I, P>
where
    I: Pull,
    P: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let first = match self.pending.take() {
            Some(x) => x,
            None => self.iter.next()?,
        };
        let mut run = vec![first];
        while let Some(next) = self.iter.next() {
            let same_group = &mut self.same_group;
            if run.last().map_or(true, |last| same_group(last, &next)) {
                run.push(next);
            } else {
                self.pending = Some(next);
                break;
            }
        }
        Some(run)
    }

    fn size_hint(&self) -> SizeHint {
        let hint = self
            .iter
            .size_hint()
            .add_count(usize::from(self.pending.is_some()));
        SizeHint::new(usize::from(hint.lower > 0), hint.upper)
    }
}

/// Handle returned by [`Pull::map_windows`].
///
/// The window buffer is the only storage; it is rotated in place and handed
/// to the closure as a contiguous slice.
pub struct MapWindows<I: Pull, F> {
    iter: I,
    size: usize,
    f: F,
    window: VecDeque<I::Item>,
}

impl<I: Pull, F> MapWindows<I, F> {
    pub(crate) fn new(iter: I, size: usize, f: F) -> Self {
        debug_assert!(size != 0);
        Self {
            iter,
            size,
            f,
            window: VecDeque::with_capacity(size),
        }
    }
}

impl<I, F> fmt::Debug for MapWindows<I, F>
where
    I: Pull + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapWindows")
            .field("iter", &self.iter)
            .field("size", &self.size)
            .field("window", &self.window)
            .finish()
    }
}

impl<B, I, F> Pull for MapWindows<I, F>
where
    I: Pull,
    F: FnMut(&[I::Item]) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        if self.window.len() == self.size {
            let x = self.iter.next()?;
            self.window.pop_front();
            self.window.push_back(x);
        } else {
            while self.window.len() < self.size {
                let x = self.iter.next()?;
                self.window.push_back(x);
            }
        }
        Some((self.f)(self.window.make_contiguous()))
    }

    fn size_hint(&self) -> SizeHint {
        let hint = self.iter.size_hint();
        if self.window.len() == self.size {
            hint
        } else {
            // Until the first window is full, `missing - 1` elements yield nothing.
            let missing = self.size - self.window.len();
            hint.skip(missing - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::pull::Pull;
    use crate::size_hint::SizeHint;
    use crate::sources::{from_vec, range};

    #[test]
    fn test_chunks_keeps_remainder() {
        let mut p = range(0, 7).chunks(3);
        assert_eq!(p.size_hint(), SizeHint::exact(2));
        assert_eq!(p.next(), Some(vec![0, 1, 2]));
        assert_eq!(p.next(), Some(vec![3, 4, 5]));
        assert_eq!(p.next(), None);
        assert_eq!(p.next(), None);
        assert_eq!(p.remainder(), &[6]);
        assert_eq!(p.into_remainder(), vec![6]);
    }

    #[test]
    fn test_try_chunks_rejects_zero() {
        assert!(range(0, 7).try_chunks(0).is_err());
    }

    #[test]
    fn test_chunk_by_runs() {
        let runs: Vec<Vec<i32>> = from_vec(vec![1, 2, 3, 7, 8, 10])
            .chunk_by(|a, b| a + 1 == *b)
            .collect();
        assert_eq!(runs, vec![vec![1, 2, 3], vec![7, 8], vec![10]]);
    }

    #[test]
    fn test_map_windows_pairs() {
        let diffs: Vec<i32> = from_vec(vec![1, 4, 9, 16])
            .map_windows(2, |w| w[1] - w[0])
            .collect();
        assert_eq!(diffs, vec![3, 5, 7]);
    }

    #[test]
    fn test_map_windows_size_hint() {
        let mut p = range(0, 5).map_windows(3, |w| w.iter().sum::<i32>());
        assert_eq!(p.size_hint(), SizeHint::exact(3));
        assert_eq!(p.next(), Some(3));
        assert_eq!(p.size_hint(), SizeHint::exact(2));
    }

    #[test]
    fn test_map_windows_longer_than_input() {
        let mut p = range(0, 2).map_windows(3, |w| w.len());
        assert_eq!(p.size_hint(), SizeHint::EMPTY);
        assert_eq!(p.next(), None);
    }
}
