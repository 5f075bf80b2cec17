use crate::pull::{ExactSizePull, Pull, PullBack};
use crate::size_hint::SizeHint;

/// Handle returned by [`Pull::step_by`].
///
/// Always yields the first upstream element, then every `step`th one.
#[derive(Debug, Clone)]
pub struct StepBy<I> {
    iter: I,
    step_minus_one: usize,
    first_take: bool,
}

impl<I> StepBy<I> {
    pub(crate) fn new(iter: I, step: usize) -> Self {
        debug_assert!(step != 0);
        Self {
            iter,
            step_minus_one: step - 1,
            first_take: true,
        }
    }

    /// Upstream elements consumed per yield after the first.
    fn stride(&self) -> usize {
        self.step_minus_one + 1
    }
}

impl<I: Pull> Pull for StepBy<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        let gap = if self.first_take {
            0
        } else {
            self.step_minus_one
        };
        self.first_take = false;
        self.iter.nth(gap)
    }

    fn size_hint(&self) -> SizeHint {
        let stride = self.stride();
        let first = move |n: usize| if n == 0 { 0 } else { 1 + (n - 1) / stride };
        let other = move |n: usize| n / stride;
        let hint = self.iter.size_hint();
        if self.first_take {
            SizeHint::new(first(hint.lower), hint.upper.map(first))
        } else {
            SizeHint::new(other(hint.lower), hint.upper.map(other))
        }
    }
}

impl<I> StepBy<I>
where
    I: ExactSizePull,
{
    /// How many trailing upstream elements to discard before the last
    /// element this handle would yield from the front.
    fn next_back_index(&self) -> usize {
        let rem = self.iter.len() % self.stride();
        if self.first_take {
            if rem == 0 {
                self.step_minus_one
            } else {
                rem - 1
            }
        } else {
            rem
        }
    }
}

impl<I> PullBack for StepBy<I>
where
    I: PullBack + ExactSizePull,
{
    #[inline]
    fn next_back(&mut self) -> Option<I::Item> {
        let index = self.next_back_index();
        self.iter.nth_back(index)
    }
}

impl<I: ExactSizePull> ExactSizePull for StepBy<I> {}
