use crate::pull::{ExactSizePull, FusedPull, Pull, PullBack};
use crate::size_hint::SizeHint;

/// Handle returned by [`Pull::cloned`].
#[derive(Debug, Clone)]
pub struct Cloned<I> {
    iter: I,
}

impl<I> Cloned<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<'a, I, T> Pull for Cloned<I>
where
    I: Pull<Item = &'a T>,
    T: 'a + Clone,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next().cloned()
    }

    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint()
    }
}

impl<'a, I, T> PullBack for Cloned<I>
where
    I: PullBack<Item = &'a T>,
    T: 'a + Clone,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back().cloned()
    }
}

impl<'a, I, T> ExactSizePull for Cloned<I>
where
    I: ExactSizePull<Item = &'a T>,
    T: 'a + Clone,
{
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<'a, I, T> FusedPull for Cloned<I>
where
    I: FusedPull<Item = &'a T>,
    T: 'a + Clone,
{
}

/// Handle returned by [`Pull::copied`].
#[derive(Debug, Clone)]
pub struct Copied<I> {
    iter: I,
}

impl<I> Copied<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<'a, I, T> Pull for Copied<I>
where
    I: Pull<Item = &'a T>,
    T: 'a + Copy,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next().copied()
    }

    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint()
    }
}

impl<'a, I, T> PullBack for Copied<I>
where
    I: PullBack<Item = &'a T>,
    T: 'a + Copy,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back().copied()
    }
}

impl<'a, I, T> ExactSizePull for Copied<I>
where
    I: ExactSizePull<Item = &'a T>,
    T: 'a + Copy,
{
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<'a, I, T> FusedPull for Copied<I>
where
    I: FusedPull<Item = &'a T>,
    T: 'a + Copy,
{
}

#[cfg(test)]
mod tests {
    use crate::pull::{Pull, PullBack};
    use crate::sources::from_slice;

    #[test]
    fn test_cloned_owns_elements() {
        let names = vec![String::from("ada"), String::from("grace")];
        let mut p = from_slice(&names).cloned();
        assert_eq!(p.next_back(), Some(String::from("grace")));
        assert_eq!(p.next(), Some(String::from("ada")));
    }

    #[test]
    fn test_copied_sums() {
        let data = [3u32, 4, 5];
        let total: u32 = from_slice(&data).copied().sum();
        assert_eq!(total, 12);
    }
}
