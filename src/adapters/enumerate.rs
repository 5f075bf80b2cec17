use crate::pull::{ExactSizePull, FusedPull, Pull, PullBack};
use crate::size_hint::SizeHint;

/// Handle returned by [`Pull::enumerate`] and
/// [`enumerate_from`](crate::sources::enumerate_from).
#[derive(Debug, Clone)]
pub struct Enumerate<I> {
    iter: I,
    count: usize,
}

impl<I> Enumerate<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter, count: 0 }
    }

    /// Position the next front element will be tagged with.
    pub fn position(&self) -> usize {
        self.count
    }
}

impl<I: Pull> Pull for Enumerate<I> {
    type Item = (usize, I::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.iter.next()?;
        let i = self.count;
        self.count += 1;
        Some((i, x))
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let x = self.iter.nth(n)?;
        let i = self.count + n;
        self.count = i + 1;
        Some((i, x))
    }

    fn count(self) -> usize {
        self.iter.count()
    }
}

impl<I> PullBack for Enumerate<I>
where
    I: PullBack + ExactSizePull,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let x = self.iter.next_back()?;
        let len = self.iter.len();
        Some((self.count + len, x))
    }
}

impl<I: ExactSizePull> ExactSizePull for Enumerate<I> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<I: FusedPull> FusedPull for Enumerate<I> {}

#[cfg(test)]
mod tests {
    use crate::pull::{Pull, PullBack};
    use crate::sources::from_vec;

    #[test]
    fn test_enumerate_positions_from_both_ends() {
        let mut p = from_vec(vec!['a', 'b', 'c', 'd']).enumerate();
        assert_eq!(p.next(), Some((0, 'a')));
        assert_eq!(p.next_back(), Some((3, 'd')));
        assert_eq!(p.nth(1), Some((2, 'c')));
        assert_eq!(p.next(), None);
    }
}
