use std::fmt;
use std::mem;

use crate::pull::{ExactSizePull, FusedPull, Pull, PullBack};
use crate::size_hint::SizeHint;

/// Handle returned by [`Pull::skip`].
///
/// The skip happens lazily on the first pull.
#[derive(Debug, Clone)]
pub struct Skip<I> {
    iter: I,
    n: usize,
}

impl<I> Skip<I> {
    pub(crate) fn new(iter: I, n: usize) -> Self {
        Self { iter, n }
    }
}

impl<I: Pull> Pull for Skip<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        if self.n > 0 {
            self.iter.nth(mem::take(&mut self.n))
        } else {
            self.iter.next()
        }
    }

    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint().skip(self.n)
    }

    fn nth(&mut self, n: usize) -> Option<I::Item> {
        if self.n > 0 {
            let skip = mem::take(&mut self.n);
            let n = match skip.checked_add(n) {
                Some(total) => total,
                None => {
                    self.iter.nth(skip - 1)?;
                    n
                }
            };
            self.iter.nth(n)
        } else {
            self.iter.nth(n)
        }
    }
}

impl<I> PullBack for Skip<I>
where
    I: PullBack + ExactSizePull,
{
    fn next_back(&mut self) -> Option<I::Item> {
        if self.len() > 0 {
            self.iter.next_back()
        } else {
            None
        }
    }
}

impl<I: ExactSizePull> ExactSizePull for Skip<I> {}

impl<I: FusedPull> FusedPull for Skip<I> {}

/// Handle returned by [`Pull::skip_while`].
///
/// Once the predicate has failed, it is never consulted again.
#[derive(Clone)]
pub struct SkipWhile<I, P> {
    iter: I,
    flag: bool,
    predicate: P,
}

impl<I, P> SkipWhile<I, P> {
    pub(crate) fn new(iter: I, predicate: P) -> Self {
        Self {
            iter,
            flag: false,
            predicate,
        }
    }
}

impl<I: fmt::Debug, P> fmt::Debug for SkipWhile<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipWhile")
            .field("iter", &self.iter)
            .field("flag", &self.flag)
            .finish()
    }
}

impl<I, P> Pull for SkipWhile<I, P>
where
    I: Pull,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.flag {
            return self.iter.next();
        }
        let flag = &mut self.flag;
        let predicate = &mut self.predicate;
        self.iter.find(move |x| {
            if *flag || !predicate(x) {
                *flag = true;
                true
            } else {
                false
            }
        })
    }

    fn size_hint(&self) -> SizeHint {
        let hint = self.iter.size_hint();
        if self.flag {
            hint
        } else {
            hint.filtered()
        }
    }
}

impl<I, P> FusedPull for SkipWhile<I, P>
where
    I: FusedPull,
    P: FnMut(&I::Item) -> bool,
{
}
