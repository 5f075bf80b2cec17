use crate::pull::{ExactSizePull, FusedPull, Pull, PullBack};
use crate::size_hint::SizeHint;

/// Handle returned by [`Pull::zip`].
///
/// The left side is pulled first. When it is already exhausted the right
/// side is not touched; when only the right side runs out, the left
/// element pulled in that round is dropped.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A, B> Zip<A, B> {
    pub(crate) fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    /// Give back both sides.
    pub fn into_parts(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A, B> Pull for Zip<A, B>
where
    A: Pull,
    B: Pull,
{
    type Item = (A::Item, B::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.a.next()?;
        let y = self.b.next()?;
        Some((x, y))
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        self.a.size_hint().min(self.b.size_hint())
    }
}

impl<A, B> PullBack for Zip<A, B>
where
    A: PullBack + ExactSizePull,
    B: PullBack + ExactSizePull,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let a_len = self.a.len();
        let b_len = self.b.len();
        // Trim the longer side so both ends line up.
        if a_len > b_len {
            for _ in 0..a_len - b_len {
                self.a.next_back();
            }
        } else {
            for _ in 0..b_len - a_len {
                self.b.next_back();
            }
        }
        // A side whose `len` was wrong can run dry first; report exhaustion.
        match (self.a.next_back(), self.b.next_back()) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }
}

impl<A, B> ExactSizePull for Zip<A, B>
where
    A: ExactSizePull,
    B: ExactSizePull,
{
}

impl<A, B> FusedPull for Zip<A, B>
where
    A: FusedPull,
    B: FusedPull,
{
}
