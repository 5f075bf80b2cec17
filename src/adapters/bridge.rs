use std::iter::FusedIterator;

use crate::pull::{ExactSizePull, FusedPull, Pull, PullBack};

/// Handle returned by [`Pull::into_std`]: a `std::iter::Iterator` view.
///
/// Lets a pipeline feed `for` loops and std consumers such as
/// `Iterator::sum`.
#[derive(Debug, Clone)]
pub struct IntoStd<P> {
    pull: P,
}

impl<P> IntoStd<P> {
    pub(crate) fn new(pull: P) -> Self {
        Self { pull }
    }

    /// Recover the underlying handle.
    pub fn into_inner(self) -> P {
        self.pull
    }
}

impl<P: Pull> Iterator for IntoStd<P> {
    type Item = P::Item;

    #[inline]
    fn next(&mut self) -> Option<P::Item> {
        self.pull.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pull.size_hint().into_tuple()
    }
}

impl<P: PullBack> DoubleEndedIterator for IntoStd<P> {
    #[inline]
    fn next_back(&mut self) -> Option<P::Item> {
        self.pull.next_back()
    }
}

impl<P: ExactSizePull> ExactSizeIterator for IntoStd<P> {
    fn len(&self) -> usize {
        self.pull.len()
    }
}

impl<P: FusedPull> FusedIterator for IntoStd<P> {}

#[cfg(test)]
mod tests {
    use crate::pull::Pull;
    use crate::sources::range;

    #[test]
    fn test_into_std_feeds_for_loops() {
        let mut seen = Vec::new();
        for x in range(0, 3).map(|x| x * 10).into_std().rev() {
            seen.push(x);
        }
        assert_eq!(seen, vec![20, 10, 0]);
    }
}
