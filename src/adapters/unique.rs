//! First-sighting deduplication.
//!
//! Every adapter here keeps a set of the keys it has already yielded. The
//! set only grows, so memory is proportional to the number of distinct keys
//! seen over the adapter's lifetime.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::pull::{FusedPull, Pull, PullBack};
use crate::size_hint::SizeHint;

/// Predicate that accepts an element the first time it is seen, cloning it
/// into `seen` only when it is new.
fn unseen<T>(seen: &mut HashSet<T>) -> impl FnMut(&T) -> bool + '_
where
    T: Eq + Hash + Clone,
{
    move |x| {
        if seen.contains(x) {
            false
        } else {
            seen.insert(x.clone());
            true
        }
    }
}

/// Predicate that accepts an element the first time its key is seen.
fn unseen_key<'a, T, K, F>(seen: &'a mut HashSet<K>, key: &'a mut F) -> impl FnMut(&T) -> bool + 'a
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
    T: 'a,
{
    move |x| seen.insert(key(x))
}

/// While nothing has been seen, the first upstream element is always new.
fn dedup_hint(nothing_seen: bool, upstream: SizeHint) -> SizeHint {
    let lower = usize::from(nothing_seen && upstream.lower > 0);
    SizeHint::new(lower, upstream.upper)
}

/// Handle returned by [`Pull::unique`].
#[derive(Debug, Clone)]
pub struct Unique<I: Pull> {
    iter: I,
    seen: HashSet<I::Item>,
}

impl<I: Pull> Unique<I>
where
    I::Item: Eq + Hash + Clone,
{
    pub(crate) fn new(iter: I) -> Self {
        Self {
            iter,
            seen: HashSet::new(),
        }
    }
}

impl<I: Pull> Pull for Unique<I>
where
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.iter.find(unseen(&mut self.seen))
    }

    fn size_hint(&self) -> SizeHint {
        dedup_hint(self.seen.is_empty(), self.iter.size_hint())
    }
}

impl<I: FusedPull> FusedPull for Unique<I> where I::Item: Eq + Hash + Clone {}

/// Handle returned by [`Pull::unique_by`].
#[derive(Clone)]
pub struct UniqueBy<I, K, F> {
    iter: I,
    seen: HashSet<K>,
    key: F,
}

impl<I, K, F> UniqueBy<I, K, F> {
    pub(crate) fn new(iter: I, key: F) -> Self {
        Self {
            iter,
            seen: HashSet::new(),
            key,
        }
    }
}

impl<I: fmt::Debug, K: fmt::Debug, F> fmt::Debug for UniqueBy<I, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniqueBy")
            .field("iter", &self.iter)
            .field("seen", &self.seen)
            .finish()
    }
}

impl<I, K, F> Pull for UniqueBy<I, K, F>
where
    I: Pull,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.iter.find(unseen_key(&mut self.seen, &mut self.key))
    }

    fn size_hint(&self) -> SizeHint {
        dedup_hint(self.seen.is_empty(), self.iter.size_hint())
    }
}

impl<I, K, F> FusedPull for UniqueBy<I, K, F>
where
    I: FusedPull,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
}

/// Handle returned by [`Pull::de_unique`].
///
/// Front and back pulls share one seen-set: an element is yielded by
/// whichever end reaches it first.
#[derive(Debug, Clone)]
pub struct DeUnique<I: Pull> {
    iter: I,
    seen: HashSet<I::Item>,
}

impl<I: Pull> DeUnique<I>
where
    I::Item: Eq + Hash + Clone,
{
    pub(crate) fn new(iter: I) -> Self {
        Self {
            iter,
            seen: HashSet::new(),
        }
    }
}

impl<I: Pull> Pull for DeUnique<I>
where
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.iter.find(unseen(&mut self.seen))
    }

    fn size_hint(&self) -> SizeHint {
        dedup_hint(self.seen.is_empty(), self.iter.size_hint())
    }
}

impl<I: PullBack> PullBack for DeUnique<I>
where
    I::Item: Eq + Hash + Clone,
{
    fn next_back(&mut self) -> Option<I::Item> {
        self.iter.rfind(unseen(&mut self.seen))
    }
}

impl<I: FusedPull> FusedPull for DeUnique<I> where I::Item: Eq + Hash + Clone {}

/// Handle returned by [`Pull::de_unique_by`].
#[derive(Clone)]
pub struct DeUniqueBy<I, K, F> {
    iter: I,
    seen: HashSet<K>,
    key: F,
}

impl<I, K, F> DeUniqueBy<I, K, F> {
    pub(crate) fn new(iter: I, key: F) -> Self {
        Self {
            iter,
            seen: HashSet::new(),
            key,
        }
    }
}

impl<I: fmt::Debug, K: fmt::Debug, F> fmt::Debug for DeUniqueBy<I, K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeUniqueBy")
            .field("iter", &self.iter)
            .field("seen", &self.seen)
            .finish()
    }
}

impl<I, K, F> Pull for DeUniqueBy<I, K, F>
where
    I: Pull,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.iter.find(unseen_key(&mut self.seen, &mut self.key))
    }

    fn size_hint(&self) -> SizeHint {
        dedup_hint(self.seen.is_empty(), self.iter.size_hint())
    }
}

impl<I, K, F> PullBack for DeUniqueBy<I, K, F>
where
    I: PullBack,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    fn next_back(&mut self) -> Option<I::Item> {
        self.iter.rfind(unseen_key(&mut self.seen, &mut self.key))
    }
}

impl<I, K, F> FusedPull for DeUniqueBy<I, K, F>
where
    I: FusedPull,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
}

#[cfg(test)]
mod tests {
    use crate::pull::{Pull, PullBack};
    use crate::size_hint::SizeHint;
    use crate::sources::from_vec;

    const SAMPLE: [i32; 7] = [10, 20, 30, 20, 40, 10, 50];

    #[test]
    fn test_unique_keeps_first_seen_order() {
        let got: Vec<i32> = from_vec(SAMPLE.to_vec()).unique().collect();
        assert_eq!(got, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_de_unique_reversed_orders_by_last_occurrence() {
        let got: Vec<i32> = from_vec(SAMPLE.to_vec()).de_unique().rev().collect();
        assert_eq!(got, vec![50, 10, 40, 20, 30]);
    }

    #[test]
    fn test_de_unique_ends_share_seen_set() {
        let mut p = from_vec(vec![1, 2, 1]).de_unique();
        assert_eq!(p.next_back(), Some(1));
        assert_eq!(p.next(), Some(2));
        assert_eq!(p.next(), None);
    }

    #[test]
    fn test_unique_by_key() {
        let words = vec!["apple", "avocado", "banana", "blueberry", "cherry"];
        let got: Vec<&str> = from_vec(words).unique_by(|w| w.as_bytes()[0]).collect();
        assert_eq!(got, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_de_unique_by_reversed() {
        let words = vec!["apple", "avocado", "banana", "blueberry"];
        let got: Vec<&str> = from_vec(words)
            .de_unique_by(|w| w.as_bytes()[0])
            .rev()
            .collect();
        assert_eq!(got, vec!["blueberry", "avocado"]);
    }

    #[test]
    fn test_unique_size_hint() {
        let mut p = from_vec(vec![1, 1, 1]).unique();
        assert_eq!(p.size_hint(), SizeHint::new(1, Some(3)));
        p.next();
        assert_eq!(p.size_hint(), SizeHint::new(0, Some(2)));
    }
}
