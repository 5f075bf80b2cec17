use tracing::{debug, trace};

use crate::pull::{ExactSizePull, FusedPull, Pull, PullBack};
use crate::size_hint::SizeHint;

/// Handle returned by [`Pull::traced`].
///
/// Logs every pull at `trace` level and a one-line summary at `debug`
/// level the first time upstream reports exhaustion.
#[derive(Debug, Clone)]
pub struct Traced<I> {
    iter: I,
    label: &'static str,
    yielded: usize,
    reported: bool,
}

impl<I> Traced<I> {
    pub(crate) fn new(iter: I, label: &'static str) -> Self {
        Self {
            iter,
            label,
            yielded: 0,
            reported: false,
        }
    }

    /// Elements that have passed through so far.
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    fn record<T>(&mut self, item: Option<T>, end: &'static str) -> Option<T> {
        match item {
            Some(x) => {
                self.yielded += 1;
                trace!(label = self.label, end, index = self.yielded - 1, "pulled element");
                Some(x)
            }
            None => {
                if !self.reported {
                    self.reported = true;
                    debug!(label = self.label, end, yielded = self.yielded, "exhausted");
                }
                None
            }
        }
    }
}

impl<I: Pull> Pull for Traced<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.iter.next();
        self.record(item, "front")
    }

    fn size_hint(&self) -> SizeHint {
        self.iter.size_hint()
    }
}

impl<I: PullBack> PullBack for Traced<I> {
    fn next_back(&mut self) -> Option<I::Item> {
        let item = self.iter.next_back();
        self.record(item, "back")
    }
}

impl<I: ExactSizePull> ExactSizePull for Traced<I> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<I: FusedPull> FusedPull for Traced<I> {}

#[cfg(test)]
mod tests {
    use crate::pull::Pull;
    use crate::sources::range;

    #[test]
    fn test_traced_is_transparent() {
        let mut p = range(0, 3).traced("digits");
        let got: Vec<i32> = p.by_ref().collect();
        assert_eq!(got, vec![0, 1, 2]);
        assert_eq!(p.yielded(), 3);
        assert_eq!(p.next(), None);
    }
}
