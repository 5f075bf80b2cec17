use std::fmt;

use crate::pull::{FusedPull, Pull, PullBack};
use crate::size_hint::SizeHint;

/// Handle returned by [`Pull::filter`].
///
/// Discarded elements are still pulled from upstream, so an upstream
/// [`Pull::inspect`] sees every one of them.
#[derive(Clone)]
pub struct Filter<I, P> {
    iter: I,
    predicate: P,
}

impl<I, P> Filter<I, P> {
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        Self { iter, predicate }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for Filter<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("iter", &self.iter).finish()
    }
}

impl<I, P> Pull for Filter<I, P>
where
    I: Pull,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.find(&mut self.predicate)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint().filtered()
    }

    fn count(self) -> usize {
        let mut predicate = self.predicate;
        self.iter.fold(0, |n, x| n + usize::from(predicate(&x)))
    }
}

impl<I, P> PullBack for Filter<I, P>
where
    I: PullBack,
    P: FnMut(&I::Item) -> bool,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.iter.rfind(&mut self.predicate)
    }
}

impl<I, P> FusedPull for Filter<I, P>
where
    I: FusedPull,
    P: FnMut(&I::Item) -> bool,
{
}

/// Handle returned by [`Pull::filter_map`].
#[derive(Clone)]
pub struct FilterMap<I, F> {
    iter: I,
    f: F,
}

impl<I, F> FilterMap<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        Self { iter, f }
    }
}

impl<I: fmt::Debug, F> fmt::Debug for FilterMap<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterMap").field("iter", &self.iter).finish()
    }
}

impl<B, I, F> Pull for FilterMap<I, F>
where
    I: Pull,
    F: FnMut(I::Item) -> Option<B>,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.iter.find_map(&mut self.f)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint().filtered()
    }
}

impl<B, I, F> PullBack for FilterMap<I, F>
where
    I: PullBack,
    F: FnMut(I::Item) -> Option<B>,
{
    fn next_back(&mut self) -> Option<B> {
        while let Some(x) = self.iter.next_back() {
            if let Some(y) = (self.f)(x) {
                return Some(y);
            }
        }
        None
    }
}

impl<B, I, F> FusedPull for FilterMap<I, F>
where
    I: FusedPull,
    F: FnMut(I::Item) -> Option<B>,
{
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::pull::{Pull, PullBack};
    use crate::size_hint::SizeHint;
    use crate::sources::from_vec;

    #[test]
    fn test_filter_inspects_discarded_elements() {
        let seen = Cell::new(0);
        let kept: Vec<i32> = from_vec(vec![1, 2, 3, 4, 5])
            .inspect(|_| seen.set(seen.get() + 1))
            .filter(|x| x % 2 == 0)
            .collect();
        assert_eq!(kept, vec![2, 4]);
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn test_filter_size_hint_drops_lower() {
        let p = from_vec(vec![1, 2, 3]).filter(|_| true);
        assert_eq!(p.size_hint(), SizeHint::new(0, Some(3)));
        assert_eq!(p.count(), 3);
    }

    #[test]
    fn test_filter_map_back() {
        let mut p = from_vec(vec!["1", "two", "3", "four"]).filter_map(|s| s.parse::<u8>().ok());
        assert_eq!(p.next_back(), Some(3));
        assert_eq!(p.next_back(), Some(1));
        assert_eq!(p.next_back(), None);
    }
}
