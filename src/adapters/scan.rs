use std::fmt;

use crate::pull::{FusedPull, Pull};
use crate::size_hint::SizeHint;

/// Handle returned by [`Pull::scan`].
///
/// Once the step function returns `None` the handle is done for good, even
/// if upstream still has elements.
#[derive(Clone)]
pub struct Scan<I, St, F> {
    iter: I,
    state: St,
    f: F,
    done: bool,
}

impl<I, St, F> Scan<I, St, F> {
    pub(crate) fn new(iter: I, state: St, f: F) -> Self {
        Self {
            iter,
            state,
            f,
            done: false,
        }
    }

    /// Current state value.
    pub fn state(&self) -> &St {
        &self.state
    }
}

impl<I: fmt::Debug, St: fmt::Debug, F> fmt::Debug for Scan<I, St, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scan")
            .field("iter", &self.iter)
            .field("state", &self.state)
            .field("done", &self.done)
            .finish()
    }
}

impl<B, I, St, F> Pull for Scan<I, St, F>
where
    I: Pull,
    F: FnMut(&mut St, I::Item) -> Option<B>,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        if self.done {
            return None;
        }
        let out = self.iter.next().and_then(|x| (self.f)(&mut self.state, x));
        if out.is_none() {
            self.done = true;
        }
        out
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            SizeHint::EMPTY
        } else {
            self.iter.size_hint().filtered()
        }
    }
}

impl<B, I, St, F> FusedPull for Scan<I, St, F>
where
    I: Pull,
    F: FnMut(&mut St, I::Item) -> Option<B>,
{
}

#[cfg(test)]
mod tests {
    use crate::pull::Pull;
    use crate::sources::{from_vec, range};

    #[test]
    fn test_scan_running_total() {
        let totals: Vec<i32> = range(1, 5)
            .scan(0, |acc, x| {
                *acc += x;
                Some(*acc)
            })
            .collect();
        assert_eq!(totals, vec![1, 3, 6, 10]);
    }

    #[test]
    fn test_scan_stays_done_after_early_stop() {
        let mut p = from_vec(vec![1, 2, -1, 4]).scan((), |_, x| if x > 0 { Some(x) } else { None });
        assert_eq!(p.next(), Some(1));
        assert_eq!(p.next(), Some(2));
        assert_eq!(p.next(), None);
        assert_eq!(p.next(), None);
    }
}
