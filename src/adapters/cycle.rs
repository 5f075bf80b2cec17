use crate::pull::{FusedPull, Pull};
use crate::size_hint::SizeHint;

/// Handle returned by [`Pull::cycle`].
///
/// Restarts from a clone of the original handle instead of buffering
/// elements. An empty upstream gives an empty cycle.
#[derive(Debug, Clone)]
pub struct Cycle<I> {
    orig: I,
    iter: I,
}

impl<I: Clone> Cycle<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self {
            orig: iter.clone(),
            iter,
        }
    }
}

impl<I> Pull for Cycle<I>
where
    I: Pull + Clone,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        match self.iter.next() {
            None => {
                self.iter = self.orig.clone();
                self.iter.next()
            }
            y => y,
        }
    }

    fn size_hint(&self) -> SizeHint {
        match self.orig.size_hint() {
            SizeHint::EMPTY => SizeHint::EMPTY,
            SizeHint { lower: 0, .. } => SizeHint::unknown(),
            _ => SizeHint::INFINITE,
        }
    }
}

impl<I> FusedPull for Cycle<I> where I: Pull + Clone {}

#[cfg(test)]
mod tests {
    use crate::pull::Pull;
    use crate::sources::{empty, from_vec};
    use crate::size_hint::SizeHint;

    #[test]
    fn test_cycle_repeats() {
        let got: Vec<u8> = from_vec(vec![1u8, 2]).cycle().take(5).collect();
        assert_eq!(got, vec![1, 2, 1, 2, 1]);
    }

    #[test]
    fn test_cycle_of_empty_is_empty() {
        let mut p = empty::<u8>().cycle();
        assert_eq!(p.size_hint(), SizeHint::EMPTY);
        assert_eq!(p.next(), None);
    }
}
