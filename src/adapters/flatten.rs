use std::fmt;

use crate::adapters::{Fuse, Map};
use crate::pull::{FusedPull, IntoPull, Pull, PullBack};
use crate::size_hint::SizeHint;

/// Front and back inner handles around a fused outer handle.
///
/// Each inner handle is drained completely before the next outer element
/// is pulled.
#[derive(Clone, Debug)]
struct FlattenCore<I, U> {
    iter: Fuse<I>,
    front: Option<U>,
    back: Option<U>,
}

impl<I: Pull, U> FlattenCore<I, U> {
    fn new(iter: I) -> Self {
        Self {
            iter: iter.fuse(),
            front: None,
            back: None,
        }
    }
}

impl<I, U> FlattenCore<I, U>
where
    I: Pull,
    I::Item: IntoPull<IntoPull = U, Item = U::Item>,
    U: Pull,
{
    fn next(&mut self) -> Option<U::Item> {
        loop {
            if let Some(inner) = &mut self.front {
                match inner.next() {
                    None => self.front = None,
                    item => return item,
                }
            }
            match self.iter.next() {
                Some(inner) => self.front = Some(inner.into_pull()),
                None => return self.back.as_mut()?.next(),
            }
        }
    }

    fn size_hint(&self) -> SizeHint {
        let front = self.front.as_ref().map_or(SizeHint::EMPTY, Pull::size_hint);
        let back = self.back.as_ref().map_or(SizeHint::EMPTY, Pull::size_hint);
        let inner = front.add(back);
        match self.iter.size_hint() {
            SizeHint::EMPTY => inner,
            _ => SizeHint::at_least(inner.lower),
        }
    }
}

impl<I, U> FlattenCore<I, U>
where
    I: PullBack,
    I::Item: IntoPull<IntoPull = U, Item = U::Item>,
    U: PullBack,
{
    fn next_back(&mut self) -> Option<U::Item> {
        loop {
            if let Some(inner) = &mut self.back {
                match inner.next_back() {
                    None => self.back = None,
                    item => return item,
                }
            }
            match self.iter.next_back() {
                Some(inner) => self.back = Some(inner.into_pull()),
                None => return self.front.as_mut()?.next_back(),
            }
        }
    }
}

/// Handle returned by [`Pull::flatten`].
pub struct Flatten<I>
where
    I: Pull,
    I::Item: IntoPull,
{
    inner: FlattenCore<I, <I::Item as IntoPull>::IntoPull>,
}

impl<I> Flatten<I>
where
    I: Pull,
    I::Item: IntoPull,
{
    pub(crate) fn new(iter: I) -> Self {
        Self {
            inner: FlattenCore::new(iter),
        }
    }
}

impl<I> fmt::Debug for Flatten<I>
where
    I: Pull + fmt::Debug,
    I::Item: IntoPull,
    <I::Item as IntoPull>::IntoPull: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flatten").field("inner", &self.inner).finish()
    }
}

impl<I> Clone for Flatten<I>
where
    I: Pull + Clone,
    I::Item: IntoPull,
    <I::Item as IntoPull>::IntoPull: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<I, U> Pull for Flatten<I>
where
    I: Pull,
    I::Item: IntoPull<IntoPull = U, Item = U::Item>,
    U: Pull,
{
    type Item = U::Item;

    #[inline]
    fn next(&mut self) -> Option<U::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

impl<I, U> PullBack for Flatten<I>
where
    I: PullBack,
    I::Item: IntoPull<IntoPull = U, Item = U::Item>,
    U: PullBack,
{
    #[inline]
    fn next_back(&mut self) -> Option<U::Item> {
        self.inner.next_back()
    }
}

impl<I, U> FusedPull for Flatten<I>
where
    I: Pull,
    I::Item: IntoPull<IntoPull = U, Item = U::Item>,
    U: FusedPull,
{
}

/// Handle returned by [`Pull::flat_map`].
pub struct FlatMap<I, U: IntoPull, F> {
    inner: FlattenCore<Map<I, F>, U::IntoPull>,
}

impl<I, U, F> FlatMap<I, U, F>
where
    I: Pull,
    U: IntoPull,
    F: FnMut(I::Item) -> U,
{
    pub(crate) fn new(iter: I, f: F) -> Self {
        Self {
            inner: FlattenCore::new(iter.map(f)),
        }
    }
}

impl<I, U, F> fmt::Debug for FlatMap<I, U, F>
where
    I: fmt::Debug,
    U: IntoPull,
    U::IntoPull: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlatMap").field("inner", &self.inner).finish()
    }
}

impl<I, U, F> Clone for FlatMap<I, U, F>
where
    I: Clone,
    U: IntoPull,
    U::IntoPull: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<I, U, F> Pull for FlatMap<I, U, F>
where
    I: Pull,
    U: IntoPull,
    F: FnMut(I::Item) -> U,
{
    type Item = U::Item;

    #[inline]
    fn next(&mut self) -> Option<U::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

impl<I, U, F> PullBack for FlatMap<I, U, F>
where
    I: PullBack,
    U: IntoPull,
    U::IntoPull: PullBack,
    F: FnMut(I::Item) -> U,
{
    #[inline]
    fn next_back(&mut self) -> Option<U::Item> {
        self.inner.next_back()
    }
}

impl<I, U, F> FusedPull for FlatMap<I, U, F>
where
    I: Pull,
    U: IntoPull,
    U::IntoPull: FusedPull,
    F: FnMut(I::Item) -> U,
{
}
