//! Capability bridges and trivial sources.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::pull::{ExactSizePull, FusedPull, Pull, PullBack};
use crate::size_hint::SizeHint;

/// A type that can hand out its elements one at a time.
///
/// This is the single capability an external type needs to take part in a
/// pipeline; wrap it with [`from_producer`].
pub trait Producer {
    /// Element type.
    type Item;

    /// Produce the next element, or `None` when there is nothing more.
    fn produce_next(&mut self) -> Option<Self::Item>;

    /// Bounds on the remaining elements; unknown unless overridden.
    fn size_hint(&self) -> SizeHint {
        SizeHint::unknown()
    }
}

/// Handle returned by [`from_producer`].
#[derive(Debug, Clone)]
pub struct ProducerSource<P> {
    producer: P,
}

/// Adapt a [`Producer`] into a handle.
pub fn from_producer<P: Producer>(producer: P) -> ProducerSource<P> {
    ProducerSource { producer }
}

impl<P> ProducerSource<P> {
    /// Give back the wrapped producer.
    pub fn into_inner(self) -> P {
        self.producer
    }
}

impl<P: Producer> Pull for ProducerSource<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        self.producer.produce_next()
    }

    fn size_hint(&self) -> SizeHint {
        self.producer.size_hint()
    }
}

/// Handle returned by [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

/// Build a handle whose pulls call `f`.
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn { f }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish()
    }
}

impl<T, F> Pull for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        (self.f)()
    }
}

/// Handle returned by [`from_std`].
#[derive(Debug, Clone)]
pub struct FromStd<I> {
    iter: I,
}

/// Adapt any `std::iter::IntoIterator`.
pub fn from_std<I: IntoIterator>(iter: I) -> FromStd<I::IntoIter> {
    FromStd {
        iter: iter.into_iter(),
    }
}

impl<I: Iterator> Pull for FromStd<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint().into()
    }

    fn nth(&mut self, n: usize) -> Option<I::Item> {
        self.iter.nth(n)
    }
}

impl<I: DoubleEndedIterator> PullBack for FromStd<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        self.iter.next_back()
    }
}

impl<I: ExactSizeIterator> ExactSizePull for FromStd<I> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<I: FusedIterator> FusedPull for FromStd<I> {}

/// Handle returned by [`empty`].
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

/// A handle that is exhausted from the start.
pub fn empty<T>() -> Empty<T> {
    Empty {
        _marker: PhantomData,
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> Pull for Empty<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        None
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::EMPTY
    }
}

impl<T> PullBack for Empty<T> {
    fn next_back(&mut self) -> Option<T> {
        None
    }
}

impl<T> ExactSizePull for Empty<T> {}

impl<T> FusedPull for Empty<T> {}

/// Handle returned by [`once`].
#[derive(Debug, Clone)]
pub struct Once<T> {
    inner: Option<T>,
}

/// A handle yielding `value` exactly once.
pub fn once<T>(value: T) -> Once<T> {
    Once { inner: Some(value) }
}

impl<T> Pull for Once<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(usize::from(self.inner.is_some()))
    }
}

impl<T> PullBack for Once<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.take()
    }
}

impl<T> ExactSizePull for Once<T> {}

impl<T> FusedPull for Once<T> {}

/// Handle returned by [`repeat`].
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    element: T,
}

/// An endless handle yielding clones of `element`.
pub fn repeat<T: Clone>(element: T) -> Repeat<T> {
    Repeat { element }
}

impl<T: Clone> Pull for Repeat<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        Some(self.element.clone())
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::INFINITE
    }

    fn advance_by(&mut self, _n: usize) -> Result<(), std::num::NonZeroUsize> {
        Ok(())
    }

    fn nth(&mut self, _n: usize) -> Option<T> {
        Some(self.element.clone())
    }
}

impl<T: Clone> PullBack for Repeat<T> {
    fn next_back(&mut self) -> Option<T> {
        Some(self.element.clone())
    }
}

impl<T: Clone> FusedPull for Repeat<T> {}

/// Handle returned by [`repeat_n`].
#[derive(Debug, Clone)]
pub struct RepeatN<T> {
    element: Option<T>,
    count: usize,
}

/// A handle yielding `element` exactly `n` times; the last one is moved,
/// not cloned.
pub fn repeat_n<T: Clone>(element: T, n: usize) -> RepeatN<T> {
    RepeatN {
        element: (n > 0).then_some(element),
        count: n,
    }
}

impl<T: Clone> Pull for RepeatN<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.count {
            0 => None,
            1 => {
                self.count = 0;
                self.element.take()
            }
            _ => {
                self.count -= 1;
                self.element.clone()
            }
        }
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.count)
    }
}

impl<T: Clone> PullBack for RepeatN<T> {
    fn next_back(&mut self) -> Option<T> {
        self.next()
    }
}

impl<T: Clone> ExactSizePull for RepeatN<T> {}

impl<T: Clone> FusedPull for RepeatN<T> {}

/// Handle returned by [`successors`].
#[derive(Clone)]
pub struct Successors<T, F> {
    next: Option<T>,
    succ: F,
}

/// Start from `first` and derive each following element from the previous
/// one, stopping at the first `None`.
pub fn successors<T, F>(first: Option<T>, succ: F) -> Successors<T, F>
where
    F: FnMut(&T) -> Option<T>,
{
    Successors { next: first, succ }
}

impl<T: fmt::Debug, F> fmt::Debug for Successors<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Successors")
            .field("next", &self.next)
            .finish()
    }
}

impl<T, F> Pull for Successors<T, F>
where
    F: FnMut(&T) -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.next.take()?;
        self.next = (self.succ)(&item);
        Some(item)
    }

    fn size_hint(&self) -> SizeHint {
        if self.next.is_some() {
            SizeHint::at_least(1)
        } else {
            SizeHint::EMPTY
        }
    }
}

impl<T, F> FusedPull for Successors<T, F> where F: FnMut(&T) -> Option<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown(u32);

    impl Producer for Countdown {
        type Item = u32;

        fn produce_next(&mut self) -> Option<u32> {
            if self.0 == 0 {
                return None;
            }
            self.0 -= 1;
            Some(self.0)
        }

        fn size_hint(&self) -> SizeHint {
            SizeHint::exact(self.0 as usize)
        }
    }

    #[test]
    fn test_producer_bridge() {
        let p = from_producer(Countdown(3));
        assert_eq!(p.size_hint(), SizeHint::exact(3));
        assert_eq!(p.map(|x| x * 2).collect::<Vec<_>>(), vec![4, 2, 0]);
    }

    #[test]
    fn test_from_std_keeps_capabilities() {
        let mut p = from_std(vec!['a', 'b', 'c']);
        assert_eq!(p.len(), 3);
        assert_eq!(p.next_back(), Some('c'));
    }

    #[test]
    fn test_repeat_n_moves_last() {
        let got: Vec<String> = repeat_n(String::from("ab"), 3).collect();
        assert_eq!(got, vec!["ab", "ab", "ab"]);
        assert_eq!(repeat_n(1, 0).next(), None);
    }

    #[test]
    fn test_successors_powers_of_ten() {
        let powers: Vec<u16> = successors(Some(1u16), |n| n.checked_mul(10)).collect();
        assert_eq!(powers, vec![1, 10, 100, 1_000, 10_000]);
    }

    #[test]
    fn test_once_and_empty() {
        let got: Vec<i32> = once(1).chain(empty()).chain(once(2)).collect();
        assert_eq!(got, vec![1, 2]);
    }
}
