//! Optional capabilities layered on the pull contract.

use std::num::NonZeroUsize;

use crate::control::{ControlFlow, Try};
use crate::pull::Pull;

/// A handle that can also produce elements from the back.
///
/// Front and back pulls meet in the middle: no element is produced twice,
/// and once both ends have met both directions report exhaustion.
pub trait PullBack: Pull {
    /// Remove and return an element from the back, or `None` when exhausted.
    fn next_back(&mut self) -> Option<Self::Item>;

    /// Discard `n` elements from the back.
    ///
    /// On failure the payload is how many of the `n` steps could not be taken.
    fn advance_back_by(&mut self, n: usize) -> Result<(), NonZeroUsize> {
        for taken in 0..n {
            if self.next_back().is_none() {
                return NonZeroUsize::new(n - taken).map_or(Ok(()), Err);
            }
        }
        Ok(())
    }

    /// The `n`th element counted from the back (zero-based).
    ///
    /// Like [`Pull::nth`], repeated calls keep moving towards the front.
    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        self.advance_back_by(n).ok()?;
        self.next_back()
    }

    /// Back-to-front [`Pull::try_fold`].
    fn try_rfold<B, F, R>(&mut self, init: B, mut f: F) -> R
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> R,
        R: Try<Output = B>,
    {
        let mut acc = init;
        while let Some(x) = self.next_back() {
            acc = tri!(f(acc, x));
        }
        R::from_output(acc)
    }

    /// Back-to-front [`Pull::fold`].
    fn rfold<B, F>(mut self, init: B, mut f: F) -> B
    where
        Self: Sized,
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        while let Some(x) = self.next_back() {
            acc = f(acc, x);
        }
        acc
    }

    /// Search from the back for the first element matching `predicate`.
    fn rfind<P>(&mut self, mut predicate: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        self.try_rfold((), |(), x| {
            if predicate(&x) {
                ControlFlow::Break(x)
            } else {
                ControlFlow::Continue(())
            }
        })
        .break_value()
    }
}

/// A handle that knows exactly how many elements remain.
pub trait ExactSizePull: Pull {
    /// Exact remaining count.
    fn len(&self) -> usize {
        let hint = self.size_hint();
        debug_assert_eq!(hint.upper, Some(hint.lower));
        hint.lower
    }

    /// `true` when nothing remains.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Marker: once `next` returns `None`, every later call returns `None` too.
pub trait FusedPull: Pull {}

impl<P: PullBack + ?Sized> PullBack for &mut P {
    fn next_back(&mut self) -> Option<P::Item> {
        (**self).next_back()
    }

    fn advance_back_by(&mut self, n: usize) -> Result<(), NonZeroUsize> {
        (**self).advance_back_by(n)
    }

    fn nth_back(&mut self, n: usize) -> Option<P::Item> {
        (**self).nth_back(n)
    }
}

impl<P: PullBack + ?Sized> PullBack for Box<P> {
    fn next_back(&mut self) -> Option<P::Item> {
        (**self).next_back()
    }

    fn advance_back_by(&mut self, n: usize) -> Result<(), NonZeroUsize> {
        (**self).advance_back_by(n)
    }

    fn nth_back(&mut self, n: usize) -> Option<P::Item> {
        (**self).nth_back(n)
    }
}

impl<P: ExactSizePull + ?Sized> ExactSizePull for &mut P {
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<P: ExactSizePull + ?Sized> ExactSizePull for Box<P> {
    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<P: FusedPull + ?Sized> FusedPull for &mut P {}

impl<P: FusedPull + ?Sized> FusedPull for Box<P> {}
