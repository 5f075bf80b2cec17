use std::fmt;

use crate::adapters::Peekable;
use crate::pull::{FusedPull, Pull};
use crate::size_hint::SizeHint;

/// Separator bookkeeping shared by both intersperse flavours.
///
/// `needs_sep` is set after every real element; a separator is emitted only
/// when it is set and the lookahead shows another real element.
struct Gaps<I: Pull> {
    iter: Peekable<I>,
    needs_sep: bool,
}

impl<I> fmt::Debug for Gaps<I>
where
    I: Pull + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gaps")
            .field("iter", &self.iter)
            .field("needs_sep", &self.needs_sep)
            .finish()
    }
}

impl<I> Clone for Gaps<I>
where
    I: Pull + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            needs_sep: self.needs_sep,
        }
    }
}

impl<I: Pull> Gaps<I> {
    fn new(iter: I) -> Self {
        Self {
            iter: iter.peekable(),
            needs_sep: false,
        }
    }

    fn next_with(&mut self, separator: impl FnOnce() -> I::Item) -> Option<I::Item> {
        if self.needs_sep && self.iter.peek().is_some() {
            self.needs_sep = false;
            Some(separator())
        } else {
            self.needs_sep = true;
            self.iter.next()
        }
    }

    fn size_hint(&self) -> SizeHint {
        let hint = self.iter.size_hint();
        if self.needs_sep {
            // Every remaining element is preceded by a separator.
            hint.scale(2)
        } else {
            SizeHint::new(
                hint.lower.saturating_add(hint.lower.saturating_sub(1)),
                hint.upper
                    .and_then(|upper| upper.checked_add(upper.saturating_sub(1))),
            )
        }
    }
}

/// Handle returned by [`Pull::intersperse`].
#[derive(Debug, Clone)]
pub struct Intersperse<I: Pull>
where
    I::Item: Clone,
{
    gaps: Gaps<I>,
    separator: I::Item,
}

impl<I: Pull> Intersperse<I>
where
    I::Item: Clone,
{
    pub(crate) fn new(iter: I, separator: I::Item) -> Self {
        Self {
            gaps: Gaps::new(iter),
            separator,
        }
    }
}

impl<I: Pull> Pull for Intersperse<I>
where
    I::Item: Clone,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let separator = &self.separator;
        self.gaps.next_with(|| separator.clone())
    }

    fn size_hint(&self) -> SizeHint {
        self.gaps.size_hint()
    }
}

impl<I: FusedPull> FusedPull for Intersperse<I> where I::Item: Clone {}

/// Handle returned by [`Pull::intersperse_with`].
pub struct IntersperseWith<I: Pull, G> {
    gaps: Gaps<I>,
    separator: G,
}

impl<I: Pull, G> IntersperseWith<I, G> {
    pub(crate) fn new(iter: I, separator: G) -> Self {
        Self {
            gaps: Gaps::new(iter),
            separator,
        }
    }
}

impl<I, G> fmt::Debug for IntersperseWith<I, G>
where
    I: Pull + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntersperseWith")
            .field("gaps", &self.gaps)
            .finish()
    }
}

impl<I, G> Clone for IntersperseWith<I, G>
where
    I: Pull + Clone,
    I::Item: Clone,
    G: Clone,
{
    fn clone(&self) -> Self {
        Self {
            gaps: self.gaps.clone(),
            separator: self.separator.clone(),
        }
    }
}

impl<I, G> Pull for IntersperseWith<I, G>
where
    I: Pull,
    G: FnMut() -> I::Item,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let separator = &mut self.separator;
        self.gaps.next_with(separator)
    }

    fn size_hint(&self) -> SizeHint {
        self.gaps.size_hint()
    }
}

impl<I, G> FusedPull for IntersperseWith<I, G>
where
    I: FusedPull,
    G: FnMut() -> I::Item,
{
}
