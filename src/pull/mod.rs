//! The pull contract
//!
//! [`Pull`] is the single "produce next, or signal exhaustion" operation
//! every source and adapter implements. All adapter constructors and
//! terminal consumers are provided methods on the trait, so a pipeline is a
//! builder chain: each adapter method consumes its receiver and returns a new
//! handle that owns it.
//!
//! Optional capabilities live in separate traits:
//! - [`PullBack`]: produce from the back (reversal, back-to-front dedup)
//! - [`ExactSizePull`]: exact remaining count
//! - [`FusedPull`]: exhaustion is permanent

mod chunk;
mod collect;
mod double_ended;

pub use chunk::PartialChunk;
pub use collect::{FromPull, IntoPull};
pub use double_ended::{ExactSizePull, FusedPull, PullBack};

use std::cmp::Ordering;
use std::hash::Hash;
use std::num::NonZeroUsize;

use crate::adapters::{
    Chain, ChunkBy, Chunks, Cloned, Copied, Cycle, DeUnique, DeUniqueBy, Enumerate, Filter,
    FilterMap, FlatMap, Flatten, Fuse, Inspect, IntersperseWith, Intersperse, IntoStd, Map,
    MapWhile, MapWindows, Peekable, Rev, Scan, Skip, SkipWhile, StepBy, Take, TakeWhile, Traced,
    Unique, UniqueBy, Zip,
};
use crate::control::{ControlFlow, Try};
use crate::size_hint::SizeHint;
use crate::Error;

/// A single-owner, stateful cursor over a sequence.
///
/// Calling [`Pull::next`] is the only way to advance. After `next` has
/// returned `None` once, whether later calls keep returning `None` is up to
/// the implementation; wrap a handle in [`Pull::fuse`] to make exhaustion
/// permanent.
pub trait Pull {
    /// Element type.
    type Item;

    /// Advance and return the next element, or `None` when exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Bounds on the number of elements still producible.
    ///
    /// The default `(0, None)` is correct for every handle.
    fn size_hint(&self) -> SizeHint {
        SizeHint::unknown()
    }

    // --- positional terminals ---

    /// Discard `n` elements.
    ///
    /// On failure the payload is how many of the `n` steps could not be
    /// taken because the handle ran dry.
    fn advance_by(&mut self, n: usize) -> Result<(), NonZeroUsize> {
        for taken in 0..n {
            if self.next().is_none() {
                return NonZeroUsize::new(n - taken).map_or(Ok(()), Err);
            }
        }
        Ok(())
    }

    /// The `n`th (zero-based) element from the current position.
    ///
    /// Never rewinds: calling `nth(1)` twice skips one element, yields one,
    /// then skips one more and yields the one after.
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.advance_by(n).ok()?;
        self.next()
    }

    /// Pull exactly `n` elements into a buffer.
    ///
    /// If fewer than `n` remain, the ones that were available come back
    /// inside [`PartialChunk`]. `n == 0` always succeeds.
    fn next_chunk(&mut self, n: usize) -> Result<Vec<Self::Item>, PartialChunk<Self::Item>> {
        let mut items = Vec::with_capacity(self.size_hint().lower.min(n));
        while items.len() < n {
            match self.next() {
                Some(x) => items.push(x),
                None => return Err(PartialChunk::new(n, items)),
            }
        }
        Ok(items)
    }

    /// Consume the handle, counting elements.
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.fold(0, |count, _| count + 1)
    }

    /// Consume the handle, returning the final element.
    fn last(self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.fold(None, |_, x| Some(x))
    }

    // --- adapters ---

    /// Yield the first element, then every `step`th one after it.
    ///
    /// # Panics
    ///
    /// Panics when `step` is zero; see [`Pull::try_step_by`].
    fn step_by(self, step: usize) -> StepBy<Self>
    where
        Self: Sized,
    {
        assert!(step != 0, "step_by: step must be non-zero");
        StepBy::new(self, step)
    }

    /// [`Pull::step_by`] that reports a zero step as an error.
    fn try_step_by(self, step: usize) -> Result<StepBy<Self>, Error>
    where
        Self: Sized,
    {
        if step == 0 {
            return Err(Error::ZeroSize { what: "step" });
        }
        Ok(StepBy::new(self, step))
    }

    /// Exhaust `self`, then continue with `other`.
    fn chain<U>(self, other: U) -> Chain<Self, U::IntoPull>
    where
        Self: Sized,
        U: IntoPull<Item = Self::Item>,
    {
        Chain::new(self, other.into_pull())
    }

    /// Walk two handles in lockstep; the shorter one decides the length.
    fn zip<U>(self, other: U) -> Zip<Self, U::IntoPull>
    where
        Self: Sized,
        U: IntoPull,
    {
        Zip::new(self, other.into_pull())
    }

    /// Place a copy of `separator` between consecutive elements.
    fn intersperse(self, separator: Self::Item) -> Intersperse<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        Intersperse::new(self, separator)
    }

    /// Place a freshly computed separator between consecutive elements.
    fn intersperse_with<G>(self, separator: G) -> IntersperseWith<Self, G>
    where
        Self: Sized,
        G: FnMut() -> Self::Item,
    {
        IntersperseWith::new(self, separator)
    }

    /// Transform every element.
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        Map::new(self, f)
    }

    /// Keep only elements matching `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Transform and filter in one step; `None` drops the element.
    fn filter_map<B, F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        FilterMap::new(self, f)
    }

    /// Pair each element with its zero-based position.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Add a one-element lookahead buffer.
    fn peekable(self) -> Peekable<Self>
    where
        Self: Sized,
    {
        Peekable::new(self)
    }

    /// Discard elements while `predicate` holds, then pass everything through.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// Yield elements while `predicate` holds; the first failure ends the handle.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Transform elements until `f` first returns `None`.
    fn map_while<B, P>(self, predicate: P) -> MapWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(Self::Item) -> Option<B>,
    {
        MapWhile::new(self, predicate)
    }

    /// Discard the first `n` elements.
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, n)
    }

    /// Yield at most `n` elements.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, n)
    }

    /// Thread mutable state through the sequence; `None` from `f` ends it.
    fn scan<St, B, F>(self, initial_state: St, f: F) -> Scan<Self, St, F>
    where
        Self: Sized,
        F: FnMut(&mut St, Self::Item) -> Option<B>,
    {
        Scan::new(self, initial_state, f)
    }

    /// Map each element to a handle and yield all of their elements in turn.
    fn flat_map<U, F>(self, f: F) -> FlatMap<Self, U, F>
    where
        Self: Sized,
        U: IntoPull,
        F: FnMut(Self::Item) -> U,
    {
        FlatMap::new(self, f)
    }

    /// Yield the elements of nested handles in turn.
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: IntoPull,
    {
        Flatten::new(self)
    }

    /// Make exhaustion permanent.
    fn fuse(self) -> Fuse<Self>
    where
        Self: Sized,
    {
        Fuse::new(self)
    }

    /// Call `f` with a reference to each element as it passes.
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item),
    {
        Inspect::new(self, f)
    }

    /// Reverse the direction of a double-ended handle.
    fn rev(self) -> Rev<Self>
    where
        Self: Sized + PullBack,
    {
        Rev::new(self)
    }

    /// Copy out of a handle over references.
    fn copied<'a, T>(self) -> Copied<Self>
    where
        Self: Sized + Pull<Item = &'a T>,
        T: 'a + Copy,
    {
        Copied::new(self)
    }

    /// Clone out of a handle over references.
    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Sized + Pull<Item = &'a T>,
        T: 'a + Clone,
    {
        Cloned::new(self)
    }

    /// Repeat the sequence endlessly by restarting from a saved clone.
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized + Clone,
    {
        Cycle::new(self)
    }

    /// Yield each distinct element the first time it appears.
    ///
    /// Every distinct element is remembered for the adapter's lifetime, so
    /// memory grows with the number of distinct elements seen.
    fn unique(self) -> Unique<Self>
    where
        Self: Sized,
        Self::Item: Eq + Hash + Clone,
    {
        Unique::new(self)
    }

    /// Yield the first element for each distinct key.
    ///
    /// Every distinct key is remembered for the adapter's lifetime.
    fn unique_by<K, F>(self, key: F) -> UniqueBy<Self, K, F>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        UniqueBy::new(self, key)
    }

    /// [`Pull::unique`] that also deduplicates when pulled from the back.
    ///
    /// Both ends share one seen-set, so reversing yields distinct elements in
    /// reverse order of last occurrence.
    fn de_unique(self) -> DeUnique<Self>
    where
        Self: Sized,
        Self::Item: Eq + Hash + Clone,
    {
        DeUnique::new(self)
    }

    /// [`Pull::unique_by`] that also deduplicates when pulled from the back.
    fn de_unique_by<K, F>(self, key: F) -> DeUniqueBy<Self, K, F>
    where
        Self: Sized,
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        DeUniqueBy::new(self, key)
    }

    /// Group elements into vectors of exactly `size`.
    ///
    /// An incomplete trailing group is kept aside; see [`Chunks::into_remainder`].
    ///
    /// # Panics
    ///
    /// Panics when `size` is zero; see [`Pull::try_chunks`].
    fn chunks(self, size: usize) -> Chunks<Self>
    where
        Self: Sized,
    {
        assert!(size != 0, "chunks: size must be non-zero");
        Chunks::new(self, size)
    }

    /// [`Pull::chunks`] that reports a zero size as an error.
    fn try_chunks(self, size: usize) -> Result<Chunks<Self>, Error>
    where
        Self: Sized,
    {
        if size == 0 {
            return Err(Error::ZeroSize { what: "chunk size" });
        }
        Ok(Chunks::new(self, size))
    }

    /// Group runs of consecutive elements for which `same_group(prev, next)` holds.
    fn chunk_by<P>(self, same_group: P) -> ChunkBy<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        ChunkBy::new(self, same_group)
    }

    /// Call `f` on every sliding window of `size` consecutive elements.
    ///
    /// # Panics
    ///
    /// Panics when `size` is zero; see [`Pull::try_map_windows`].
    fn map_windows<B, F>(self, size: usize, f: F) -> MapWindows<Self, F>
    where
        Self: Sized,
        F: FnMut(&[Self::Item]) -> B,
    {
        assert!(size != 0, "map_windows: window size must be non-zero");
        MapWindows::new(self, size, f)
    }

    /// [`Pull::map_windows`] that reports a zero size as an error.
    fn try_map_windows<B, F>(self, size: usize, f: F) -> Result<MapWindows<Self, F>, Error>
    where
        Self: Sized,
        F: FnMut(&[Self::Item]) -> B,
    {
        if size == 0 {
            return Err(Error::ZeroSize { what: "window size" });
        }
        Ok(MapWindows::new(self, size, f))
    }

    /// Emit `tracing` events for every pull under `label`.
    fn traced(self, label: &'static str) -> Traced<Self>
    where
        Self: Sized,
    {
        Traced::new(self, label)
    }

    /// Borrow the handle so an adapter chain can be built without consuming it.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Bridge into a `std::iter::Iterator`.
    fn into_std(self) -> IntoStd<Self>
    where
        Self: Sized,
    {
        IntoStd::new(self)
    }

    // --- folds ---

    /// Fold every element into an accumulator, left to right.
    fn fold<B, F>(mut self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Some(x) = self.next() {
            acc = f(acc, x);
        }
        acc
    }

    /// Fold while `f` keeps returning the keep-going variant.
    ///
    /// On the first stop-early result the residual is returned and the
    /// handle is left positioned right after the element that caused it.
    fn try_fold<B, F, R>(&mut self, init: B, mut f: F) -> R
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> R,
        R: Try<Output = B>,
    {
        let mut acc = init;
        while let Some(x) = self.next() {
            acc = tri!(f(acc, x));
        }
        R::from_output(acc)
    }

    /// Call `f` on every element.
    fn for_each<F>(self, mut f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        self.fold((), |(), x| f(x));
    }

    /// Call `f` on elements until it first stops early.
    fn try_for_each<F, R>(&mut self, mut f: F) -> R
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
        R: Try<Output = ()>,
    {
        self.try_fold((), |(), x| f(x))
    }

    /// Fold using the first element as the initial accumulator.
    fn reduce<F>(mut self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        let first = self.next()?;
        Some(self.fold(first, f))
    }

    /// [`Pull::reduce`] with a short-circuiting step.
    ///
    /// `Ok(None)` for an empty handle, `Err(residual)` when `f` stopped early.
    fn try_reduce<F, R>(&mut self, mut f: F) -> Result<Option<Self::Item>, R::Residual>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item) -> R,
        R: Try<Output = Self::Item>,
    {
        let first = match self.next() {
            Some(x) => x,
            None => return Ok(None),
        };
        self.try_fold(first, |acc, x| f(acc, x).branch())
            .into_result()
            .map(Some)
    }

    // --- searches ---

    /// `true` if every element matches; stops at the first mismatch.
    fn all<F>(&mut self, mut f: F) -> bool
    where
        Self: Sized,
        F: FnMut(Self::Item) -> bool,
    {
        self.try_fold((), |(), x| {
            if f(x) {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_continue()
    }

    /// `true` if any element matches; stops at the first match.
    fn any<F>(&mut self, mut f: F) -> bool
    where
        Self: Sized,
        F: FnMut(Self::Item) -> bool,
    {
        self.try_fold((), |(), x| {
            if f(x) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_break()
    }

    /// First element matching `predicate`.
    fn find<P>(&mut self, mut predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.try_fold((), |(), x| {
            if predicate(&x) {
                ControlFlow::Break(x)
            } else {
                ControlFlow::Continue(())
            }
        })
        .break_value()
    }

    /// First `Some` produced by `f`.
    fn find_map<B, F>(&mut self, mut f: F) -> Option<B>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        self.try_fold((), |(), x| match f(x) {
            Some(b) => ControlFlow::Break(b),
            None => ControlFlow::Continue(()),
        })
        .break_value()
    }

    /// [`Pull::find`] with a fallible predicate.
    ///
    /// `Ok(Some(x))` on a match, `Ok(None)` when exhausted without one, and
    /// `Err(residual)` as soon as the predicate stops early.
    fn try_find<F, R>(&mut self, mut f: F) -> Result<Option<Self::Item>, R::Residual>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> R,
        R: Try<Output = bool>,
    {
        let flow = self.try_fold((), |(), x| match f(&x).branch() {
            ControlFlow::Continue(false) => ControlFlow::Continue(()),
            ControlFlow::Continue(true) => ControlFlow::Break(Ok(x)),
            ControlFlow::Break(residual) => ControlFlow::Break(Err(residual)),
        });
        match flow {
            ControlFlow::Continue(()) => Ok(None),
            ControlFlow::Break(found) => found.map(Some),
        }
    }

    /// Zero-based index of the first element matching `predicate`.
    fn position<P>(&mut self, mut predicate: P) -> Option<usize>
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        self.try_fold(0usize, |i, x| {
            if predicate(x) {
                ControlFlow::Break(i)
            } else {
                ControlFlow::Continue(i + 1)
            }
        })
        .break_value()
    }

    /// Index (counted from the front) of the last element matching `predicate`.
    fn rposition<P>(&mut self, mut predicate: P) -> Option<usize>
    where
        Self: Sized + PullBack + ExactSizePull,
        P: FnMut(Self::Item) -> bool,
    {
        let n = self.len();
        self.try_rfold(n, |i, x| {
            let i = i - 1;
            if predicate(x) {
                ControlFlow::Break(i)
            } else {
                ControlFlow::Continue(i)
            }
        })
        .break_value()
    }

    // --- partitioning ---

    /// Split into two collections by `f`: matches first, the rest second.
    fn partition<B, F>(self, mut f: F) -> (B, B)
    where
        Self: Sized,
        B: Default + Extend<Self::Item>,
        F: FnMut(&Self::Item) -> bool,
    {
        let mut left = B::default();
        let mut right = B::default();
        self.for_each(|x| {
            if f(&x) {
                left.extend(Some(x));
            } else {
                right.extend(Some(x));
            }
        });
        (left, right)
    }

    /// `true` if all matches of `predicate` precede all non-matches.
    fn is_partitioned<P>(mut self, mut predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        self.all(&mut predicate) || !self.any(predicate)
    }

    /// Split a handle of pairs into two collections.
    fn unzip<A, B, FromA, FromB>(self) -> (FromA, FromB)
    where
        Self: Sized + Pull<Item = (A, B)>,
        FromA: Default + Extend<A>,
        FromB: Default + Extend<B>,
    {
        let mut left = FromA::default();
        let mut right = FromB::default();
        self.for_each(|(a, b)| {
            left.extend(Some(a));
            right.extend(Some(b));
        });
        (left, right)
    }

    /// Materialize into any [`FromPull`] collection.
    fn collect<B>(self) -> B
    where
        Self: Sized,
        B: FromPull<Self::Item>,
    {
        B::from_pull(self)
    }

    // --- numeric ---

    /// Add up the elements.
    fn sum<S>(self) -> S
    where
        Self: Sized,
        S: std::iter::Sum<Self::Item>,
    {
        S::sum(self.into_std())
    }

    /// Multiply the elements.
    fn product<P>(self) -> P
    where
        Self: Sized,
        P: std::iter::Product<Self::Item>,
    {
        P::product(self.into_std())
    }

    /// Largest element; the last one wins ties.
    fn max(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.max_by(Ord::cmp)
    }

    /// Smallest element; the first one wins ties.
    fn min(self) -> Option<Self::Item>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        self.min_by(Ord::cmp)
    }

    /// Largest element according to `compare`.
    fn max_by<F>(self, mut compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.reduce(|a, b| match compare(&a, &b) {
            Ordering::Greater => a,
            _ => b,
        })
    }

    /// Smallest element according to `compare`.
    fn min_by<F>(self, mut compare: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.reduce(|a, b| match compare(&a, &b) {
            Ordering::Greater => b,
            _ => a,
        })
    }

    /// Element with the largest key.
    fn max_by_key<B, F>(self, mut f: F) -> Option<Self::Item>
    where
        Self: Sized,
        B: Ord,
        F: FnMut(&Self::Item) -> B,
    {
        self.map(|x| (f(&x), x))
            .max_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, x)| x)
    }

    /// Element with the smallest key.
    fn min_by_key<B, F>(self, mut f: F) -> Option<Self::Item>
    where
        Self: Sized,
        B: Ord,
        F: FnMut(&Self::Item) -> B,
    {
        self.map(|x| (f(&x), x))
            .min_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(_, x)| x)
    }

    // --- comparison ---

    /// Lexicographic comparison with another sequence.
    fn cmp<I>(self, other: I) -> Ordering
    where
        Self: Sized,
        I: IntoPull<Item = Self::Item>,
        Self::Item: Ord,
    {
        self.cmp_by(other, |a, b| a.cmp(&b))
    }

    /// Lexicographic comparison using `cmp` for element pairs.
    fn cmp_by<I, F>(mut self, other: I, mut cmp: F) -> Ordering
    where
        Self: Sized,
        I: IntoPull,
        F: FnMut(Self::Item, I::Item) -> Ordering,
    {
        let mut other = other.into_pull();
        loop {
            let x = match self.next() {
                None => {
                    return if other.next().is_none() {
                        Ordering::Equal
                    } else {
                        Ordering::Less
                    }
                }
                Some(x) => x,
            };
            let y = match other.next() {
                None => return Ordering::Greater,
                Some(y) => y,
            };
            match cmp(x, y) {
                Ordering::Equal => {}
                non_eq => return non_eq,
            }
        }
    }

    /// Lexicographic comparison of partially ordered elements.
    fn partial_cmp<I>(self, other: I) -> Option<Ordering>
    where
        Self: Sized,
        I: IntoPull,
        Self::Item: PartialOrd<I::Item>,
    {
        self.partial_cmp_by(other, |a, b| a.partial_cmp(&b))
    }

    /// Lexicographic partial comparison using `partial_cmp` for element pairs.
    fn partial_cmp_by<I, F>(mut self, other: I, mut partial_cmp: F) -> Option<Ordering>
    where
        Self: Sized,
        I: IntoPull,
        F: FnMut(Self::Item, I::Item) -> Option<Ordering>,
    {
        let mut other = other.into_pull();
        loop {
            let x = match self.next() {
                None => {
                    return if other.next().is_none() {
                        Some(Ordering::Equal)
                    } else {
                        Some(Ordering::Less)
                    }
                }
                Some(x) => x,
            };
            let y = match other.next() {
                None => return Some(Ordering::Greater),
                Some(y) => y,
            };
            match partial_cmp(x, y) {
                Some(Ordering::Equal) => {}
                non_eq => return non_eq,
            }
        }
    }

    /// Element-wise equality with another sequence.
    fn eq<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoPull,
        Self::Item: PartialEq<I::Item>,
    {
        self.eq_by(other, |a, b| a == b)
    }

    /// Element-wise equality using `eq` for element pairs.
    fn eq_by<I, F>(mut self, other: I, mut eq: F) -> bool
    where
        Self: Sized,
        I: IntoPull,
        F: FnMut(Self::Item, I::Item) -> bool,
    {
        let mut other = other.into_pull();
        loop {
            let x = match self.next() {
                None => return other.next().is_none(),
                Some(x) => x,
            };
            let y = match other.next() {
                None => return false,
                Some(y) => y,
            };
            if !eq(x, y) {
                return false;
            }
        }
    }

    /// Negation of [`Pull::eq`].
    fn ne<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoPull,
        Self::Item: PartialEq<I::Item>,
    {
        !self.eq(other)
    }

    /// Lexicographically less than `other`.
    fn lt<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoPull,
        Self::Item: PartialOrd<I::Item>,
    {
        self.partial_cmp(other) == Some(Ordering::Less)
    }

    /// Lexicographically less than or equal to `other`.
    fn le<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoPull,
        Self::Item: PartialOrd<I::Item>,
    {
        matches!(
            self.partial_cmp(other),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    /// Lexicographically greater than `other`.
    fn gt<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoPull,
        Self::Item: PartialOrd<I::Item>,
    {
        self.partial_cmp(other) == Some(Ordering::Greater)
    }

    /// Lexicographically greater than or equal to `other`.
    fn ge<I>(self, other: I) -> bool
    where
        Self: Sized,
        I: IntoPull,
        Self::Item: PartialOrd<I::Item>,
    {
        matches!(
            self.partial_cmp(other),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }

    /// `true` if the elements are in non-decreasing order.
    fn is_sorted(self) -> bool
    where
        Self: Sized,
        Self::Item: PartialOrd,
    {
        self.is_sorted_by(|a, b| a <= b)
    }

    /// `true` if `in_order(prev, next)` holds for every neighbouring pair.
    fn is_sorted_by<F>(mut self, mut in_order: F) -> bool
    where
        Self: Sized,
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        let mut last = match self.next() {
            Some(x) => x,
            None => return true,
        };
        self.all(|current| {
            if !in_order(&last, &current) {
                return false;
            }
            last = current;
            true
        })
    }

    /// `true` if the keys extracted by `f` are in non-decreasing order.
    fn is_sorted_by_key<K, F>(self, f: F) -> bool
    where
        Self: Sized,
        F: FnMut(Self::Item) -> K,
        K: PartialOrd,
    {
        self.map(f).is_sorted()
    }
}

impl<P: Pull + ?Sized> Pull for &mut P {
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        (**self).next()
    }

    fn size_hint(&self) -> SizeHint {
        (**self).size_hint()
    }

    fn advance_by(&mut self, n: usize) -> Result<(), NonZeroUsize> {
        (**self).advance_by(n)
    }

    fn nth(&mut self, n: usize) -> Option<P::Item> {
        (**self).nth(n)
    }
}

impl<P: Pull + ?Sized> Pull for Box<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        (**self).next()
    }

    fn size_hint(&self) -> SizeHint {
        (**self).size_hint()
    }

    fn advance_by(&mut self, n: usize) -> Result<(), NonZeroUsize> {
        (**self).advance_by(n)
    }

    fn nth(&mut self, n: usize) -> Option<P::Item> {
        (**self).nth(n)
    }
}

/// A type-erased handle, for pipelines whose concrete type differs by branch.
pub type BoxPull<'a, T> = Box<dyn Pull<Item = T> + 'a>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{from_vec, range};

    #[test]
    fn test_advance_by_reports_missing_steps() {
        let mut p = from_vec(vec![1, 2, 3, 4]);
        assert_eq!(p.advance_by(2), Ok(()));
        assert_eq!(p.next(), Some(3));
        assert_eq!(p.advance_by(0), Ok(()));
        assert_eq!(p.advance_by(100), Err(NonZeroUsize::new(99).unwrap()));
    }

    #[test]
    fn test_nth_never_rewinds() {
        let mut p = range(1, 4);
        assert_eq!(p.nth(1), Some(2));
        assert_eq!(p.nth(1), None);
        assert_eq!(p.nth(10), None);
    }

    #[test]
    fn test_next_chunk_partial_then_empty() {
        let mut p = from_vec(vec![1, 2, 3]);
        assert_eq!(p.next_chunk(2), Ok(vec![1, 2]));
        assert_eq!(p.next_chunk(2).unwrap_err().into_items(), vec![3]);
        assert_eq!(p.next_chunk(2).unwrap_err().into_items(), Vec::<i32>::new());
        assert_eq!(p.next_chunk(0), Ok(vec![]));
    }

    #[test]
    fn test_try_fold_preserves_remainder() {
        let mut p = from_vec(vec![10i8, 20, 30, 100, 40, 50]);
        let sum = p.try_fold(0i8, |acc, x| acc.checked_add(x));
        assert_eq!(sum, None);
        assert_eq!(p.len(), 2);
        assert_eq!(p.next(), Some(40));
    }

    #[test]
    fn test_try_fold_break_payload() {
        let triangular = range(1i8, 30).try_fold(0i8, |acc, x| match acc.checked_add(x) {
            Some(sum) => ControlFlow::Continue(sum),
            None => ControlFlow::Break(acc),
        });
        assert_eq!(triangular, ControlFlow::Break(120));

        let triangular = range(1u64, 30).try_fold(0u64, |acc, x| match acc.checked_add(x) {
            Some(sum) => ControlFlow::Continue(sum),
            None => ControlFlow::Break(acc),
        });
        assert_eq!(triangular, ControlFlow::Continue(435));
    }

    #[test]
    fn test_boxed_handles_are_pull() {
        let mut p: BoxPull<'_, i32> = Box::new(from_vec(vec![1, 2]).map(|x| x * 10));
        assert_eq!(p.next(), Some(10));
        assert_eq!(p.size_hint(), SizeHint::exact(1));
    }

    #[test]
    fn test_by_ref_leaves_rest() {
        let mut p = from_vec(vec![1, 2, 3, 4]);
        let firsts: Vec<i32> = p.by_ref().take(2).collect();
        assert_eq!(firsts, vec![1, 2]);
        assert_eq!(p.collect::<Vec<_>>(), vec![3, 4]);
    }
}
