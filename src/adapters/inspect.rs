use std::fmt;

use crate::pull::{ExactSizePull, FusedPull, Pull, PullBack};
use crate::size_hint::SizeHint;

/// Handle returned by [`Pull::inspect`].
///
/// A panic inside the callback propagates to whoever pulled.
#[derive(Clone)]
pub struct Inspect<I, F> {
    iter: I,
    f: F,
}

impl<I, F> Inspect<I, F> {
    pub(crate) fn new(iter: I, f: F) -> Self {
        Self { iter, f }
    }

    #[inline]
    fn observe<T>(f: &mut F, item: Option<T>) -> Option<T>
    where
        F: FnMut(&T),
    {
        if let Some(x) = &item {
            f(x);
        }
        item
    }
}

impl<I: fmt::Debug, F> fmt::Debug for Inspect<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspect").field("iter", &self.iter).finish()
    }
}

impl<I, F> Pull for Inspect<I, F>
where
    I: Pull,
    F: FnMut(&I::Item),
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let next = self.iter.next();
        Self::observe(&mut self.f, next)
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint()
    }
}

impl<I, F> PullBack for Inspect<I, F>
where
    I: PullBack,
    F: FnMut(&I::Item),
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        let next = self.iter.next_back();
        Self::observe(&mut self.f, next)
    }
}

impl<I, F> ExactSizePull for Inspect<I, F>
where
    I: ExactSizePull,
    F: FnMut(&I::Item),
{
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<I, F> FusedPull for Inspect<I, F>
where
    I: FusedPull,
    F: FnMut(&I::Item),
{
}

#[cfg(test)]
mod tests {
    use crate::pull::{Pull, PullBack};
    use crate::sources::from_vec;

    #[test]
    fn test_inspect_sees_both_ends() {
        let mut log = Vec::new();
        {
            let mut p = from_vec(vec!['a', 'b', 'c']).inspect(|c| log.push(*c));
            assert_eq!(p.next_back(), Some('c'));
            assert_eq!(p.next(), Some('a'));
        }
        assert_eq!(log, vec!['c', 'a']);
    }
}
