use crate::pull::{FusedPull, Pull, PullBack};
use crate::size_hint::SizeHint;

/// Handle returned by [`Pull::chain`].
///
/// Each half is dropped the first time it reports exhaustion, so the first
/// half is never pulled again once the second has started.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    a: Option<A>,
    b: Option<B>,
}

impl<A, B> Chain<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Self {
            a: Some(a),
            b: Some(b),
        }
    }
}

impl<A, B> Pull for Chain<A, B>
where
    A: Pull,
    B: Pull<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn next(&mut self) -> Option<A::Item> {
        if let Some(a) = &mut self.a {
            match a.next() {
                None => self.a = None,
                item => return item,
            }
        }
        self.b.as_mut()?.next()
    }

    fn size_hint(&self) -> SizeHint {
        match (&self.a, &self.b) {
            (Some(a), Some(b)) => a.size_hint().add(b.size_hint()),
            (Some(a), None) => a.size_hint(),
            (None, Some(b)) => b.size_hint(),
            (None, None) => SizeHint::EMPTY,
        }
    }

    fn count(self) -> usize {
        let a_count = self.a.map_or(0, Pull::count);
        let b_count = self.b.map_or(0, Pull::count);
        a_count.saturating_add(b_count)
    }

    fn fold<Acc, F>(self, init: Acc, mut f: F) -> Acc
    where
        F: FnMut(Acc, A::Item) -> Acc,
    {
        let mut acc = init;
        if let Some(a) = self.a {
            acc = a.fold(acc, &mut f);
        }
        if let Some(b) = self.b {
            acc = b.fold(acc, f);
        }
        acc
    }

    fn last(self) -> Option<A::Item> {
        let a_last = self.a.and_then(Pull::last);
        let b_last = self.b.and_then(Pull::last);
        b_last.or(a_last)
    }
}

impl<A, B> PullBack for Chain<A, B>
where
    A: PullBack,
    B: PullBack<Item = A::Item>,
{
    #[inline]
    fn next_back(&mut self) -> Option<A::Item> {
        if let Some(b) = &mut self.b {
            match b.next_back() {
                None => self.b = None,
                item => return item,
            }
        }
        self.a.as_mut()?.next_back()
    }
}

impl<A, B> FusedPull for Chain<A, B>
where
    A: FusedPull,
    B: FusedPull<Item = A::Item>,
{
}

#[cfg(test)]
mod tests {
    use crate::pull::{Pull, PullBack};
    use crate::size_hint::SizeHint;
    use crate::sources::{empty, from_vec, range};

    #[test]
    fn test_chain_exhausts_first_half_first() {
        let got: Vec<i32> = from_vec(vec![1, 2]).chain(vec![3]).collect();
        assert_eq!(got, vec![1, 2, 3]);
    }

    #[test]
    fn test_chain_meets_in_the_middle() {
        let mut p = range(0, 2).chain(range(10, 12));
        assert_eq!(p.next_back(), Some(11));
        assert_eq!(p.next(), Some(0));
        assert_eq!(p.next_back(), Some(10));
        assert_eq!(p.next_back(), Some(1));
        assert_eq!(p.next(), None);
        assert_eq!(p.next_back(), None);
    }

    #[test]
    fn test_chain_size_hint_saturates() {
        let p = range(0, usize::MAX).chain(range(0, 5usize));
        assert_eq!(p.size_hint(), SizeHint::new(usize::MAX, None));
    }

    #[test]
    fn test_chain_count_and_last() {
        assert_eq!(range(0, 3).chain(range(3, 5)).count(), 5);
        assert_eq!(range(0, 3).chain(range(3, 3)).last(), Some(2));
    }

    /// Endless source whose `count` answers without pulling.
    struct Saturated;

    impl Pull for Saturated {
        type Item = ();

        fn next(&mut self) -> Option<()> {
            Some(())
        }

        fn size_hint(&self) -> SizeHint {
            SizeHint::INFINITE
        }

        fn count(self) -> usize {
            usize::MAX
        }
    }

    #[test]
    fn test_chain_count_saturates() {
        assert_eq!(Saturated.chain(Saturated).count(), usize::MAX);
        assert_eq!(Saturated.chain(empty::<()>()).count(), usize::MAX);
    }
}
