use crate::pull::{ExactSizePull, FusedPull, Pull, PullBack};
use crate::size_hint::SizeHint;

/// Handle returned by [`Pull::fuse`].
///
/// The upstream is dropped on its first `None`, so it is never touched again.
#[derive(Debug, Clone)]
pub struct Fuse<I> {
    iter: Option<I>,
}

impl<I> Fuse<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter: Some(iter) }
    }

    /// `true` once the upstream has reported exhaustion.
    pub fn is_done(&self) -> bool {
        self.iter.is_none()
    }
}

impl<I: Pull> Pull for Fuse<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let item = self.iter.as_mut()?.next();
        if item.is_none() {
            self.iter = None;
        }
        item
    }

    fn size_hint(&self) -> SizeHint {
        match &self.iter {
            Some(iter) => iter.size_hint(),
            None => SizeHint::EMPTY,
        }
    }

    fn nth(&mut self, n: usize) -> Option<I::Item> {
        let item = self.iter.as_mut()?.nth(n);
        if item.is_none() {
            self.iter = None;
        }
        item
    }
}

impl<I: PullBack> PullBack for Fuse<I> {
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        let item = self.iter.as_mut()?.next_back();
        if item.is_none() {
            self.iter = None;
        }
        item
    }
}

impl<I: ExactSizePull> ExactSizePull for Fuse<I> {}

impl<I: Pull> FusedPull for Fuse<I> {}
