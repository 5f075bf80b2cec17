//! Integer range sources.
//!
//! Internally every range is kept as an inclusive `[front, back]` pair plus
//! an `exhausted` flag, so stepping never has to compute a value past
//! `T::MAX` or before `T::MIN`.

use std::fmt;
use std::ops;

use crate::pull::{ExactSizePull, FusedPull, IntoPull, Pull, PullBack};
use crate::size_hint::SizeHint;

mod sealed {
    pub trait Sealed {}
}

/// Integer types a [`RangeSource`] can walk.
///
/// Implemented for every primitive integer type.
pub trait Step: Copy + Ord + fmt::Debug + sealed::Sealed {
    /// Number of successor steps from `start` to `end`, or `None` if it does
    /// not fit in `usize`. Zero when `start >= end`.
    fn steps_between(start: Self, end: Self) -> Option<usize>;

    /// `self + n`, or `None` on overflow.
    fn forward(self, n: usize) -> Option<Self>;

    /// `self - n`, or `None` on overflow.
    fn backward(self, n: usize) -> Option<Self>;
}

macro_rules! step_integer {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Step for $t {
            #[inline]
            fn steps_between(start: Self, end: Self) -> Option<usize> {
                if start >= end {
                    return Some(0);
                }
                usize::try_from((end as $u).wrapping_sub(start as $u)).ok()
            }

            #[inline]
            fn forward(self, n: usize) -> Option<Self> {
                let n = <$u>::try_from(n).ok()?;
                // The wrapped sum lands below `self` exactly when it overflowed.
                let next = (self as $u).wrapping_add(n) as $t;
                (next >= self).then_some(next)
            }

            #[inline]
            fn backward(self, n: usize) -> Option<Self> {
                let n = <$u>::try_from(n).ok()?;
                let prev = (self as $u).wrapping_sub(n) as $t;
                (prev <= self).then_some(prev)
            }
        }
    )*};
}

step_integer! {
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
    i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize,
}

/// Whether the end bound belongs to the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    /// `start..end`
    Exclusive,
    /// `start..=end`
    Inclusive,
}

/// Handle returned by [`range`], [`range_inclusive`] and [`range_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSource<T> {
    front: T,
    back: T,
    exhausted: bool,
}

/// Integers from `start` up to but excluding `end`.
pub fn range<T: Step>(start: T, end: T) -> RangeSource<T> {
    range_with(start, end, RangeKind::Exclusive)
}

/// Integers from `start` up to and including `end`.
pub fn range_inclusive<T: Step>(start: T, end: T) -> RangeSource<T> {
    range_with(start, end, RangeKind::Inclusive)
}

/// Integers from `start` to `end`, with the end bound chosen by `kind`.
///
/// The range is empty when `start > end`, or when `start == end` and the
/// end is excluded.
pub fn range_with<T: Step>(start: T, end: T, kind: RangeKind) -> RangeSource<T> {
    let back = match kind {
        RangeKind::Inclusive => Some(end),
        RangeKind::Exclusive if start < end => end.backward(1),
        RangeKind::Exclusive => None,
    };
    match back {
        Some(back) if start <= back => RangeSource {
            front: start,
            back,
            exhausted: false,
        },
        _ => RangeSource {
            front: start,
            back: start,
            exhausted: true,
        },
    }
}

impl<T: Step> RangeSource<T> {
    /// `true` once every element has been produced.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl<T: Step> Pull for RangeSource<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }
        let x = self.front;
        match x.forward(1) {
            Some(next) if x < self.back => self.front = next,
            _ => self.exhausted = true,
        }
        Some(x)
    }

    fn size_hint(&self) -> SizeHint {
        if self.exhausted {
            return SizeHint::EMPTY;
        }
        match T::steps_between(self.front, self.back).and_then(|n| n.checked_add(1)) {
            Some(n) => SizeHint::exact(n),
            None => SizeHint::at_least(usize::MAX),
        }
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        if self.exhausted {
            return None;
        }
        match self.front.forward(n) {
            Some(x) if x <= self.back => {
                self.front = x;
                self.next()
            }
            _ => {
                self.front = self.back;
                self.exhausted = true;
                None
            }
        }
    }

    fn last(self) -> Option<T> {
        (!self.exhausted).then_some(self.back)
    }
}

impl<T: Step> PullBack for RangeSource<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.exhausted {
            return None;
        }
        let x = self.back;
        match x.backward(1) {
            Some(prev) if self.front < x => self.back = prev,
            _ => self.exhausted = true,
        }
        Some(x)
    }

    fn nth_back(&mut self, n: usize) -> Option<T> {
        if self.exhausted {
            return None;
        }
        match self.back.backward(n) {
            Some(x) if x >= self.front => {
                self.back = x;
                self.next_back()
            }
            _ => {
                self.back = self.front;
                self.exhausted = true;
                None
            }
        }
    }
}

/// Exact for every range whose length fits in `usize`; longer ranges report
/// `usize::MAX`.
impl<T: Step> ExactSizePull for RangeSource<T> {
    fn len(&self) -> usize {
        self.size_hint().lower
    }
}

impl<T: Step> FusedPull for RangeSource<T> {}

impl<T: Step> IntoPull for ops::Range<T> {
    type Item = T;
    type IntoPull = RangeSource<T>;

    fn into_pull(self) -> RangeSource<T> {
        range(self.start, self.end)
    }
}

impl<T: Step> IntoPull for ops::RangeInclusive<T> {
    type Item = T;
    type IntoPull = RangeSource<T>;

    fn into_pull(self) -> RangeSource<T> {
        let (start, end) = self.into_inner();
        range_inclusive(start, end)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0, 5, RangeKind::Exclusive, 5 ; "exclusive")]
    #[test_case(0, 5, RangeKind::Inclusive, 6 ; "inclusive")]
    #[test_case(5, 5, RangeKind::Exclusive, 0 ; "empty exclusive")]
    #[test_case(5, 5, RangeKind::Inclusive, 1 ; "single inclusive")]
    #[test_case(6, 5, RangeKind::Inclusive, 0 ; "reversed bounds")]
    fn test_range_len(start: i32, end: i32, kind: RangeKind, len: usize) {
        let p = range_with(start, end, kind);
        assert_eq!(p.size_hint(), SizeHint::exact(len));
        assert_eq!(p.count(), len);
    }

    #[test]
    fn test_inclusive_range_stops_at_max() {
        let got: Vec<u8> = range_inclusive(250u8, u8::MAX).collect();
        assert_eq!(got, vec![250, 251, 252, 253, 254, 255]);
        let mut p = range_inclusive(i8::MIN, i8::MIN + 1);
        assert_eq!(p.next_back(), Some(-127));
        assert_eq!(p.next_back(), Some(i8::MIN));
        assert_eq!(p.next_back(), None);
        assert_eq!(p.next(), None);
    }

    #[test]
    fn test_signed_span_counts() {
        assert_eq!(range(i8::MIN, i8::MAX).len(), 255);
        assert_eq!(range_inclusive(i64::MIN, i64::MAX).size_hint().lower, usize::MAX);
        assert_eq!(range_inclusive(0u128, u128::MAX).size_hint().upper, None);
    }

    #[test]
    fn test_nth_jumps_without_overflow() {
        let mut p = range(-3i16, 10);
        assert_eq!(p.nth(4), Some(1));
        assert_eq!(p.nth(100), None);
        assert!(p.is_exhausted());
        let mut p = range_inclusive(u8::MAX - 2, u8::MAX);
        assert_eq!(p.nth(300), None);
    }

    #[test]
    fn test_step_helpers() {
        assert_eq!(100i8.forward(27), Some(127));
        assert_eq!(100i8.forward(28), None);
        assert_eq!((-100i8).forward(200), Some(100));
        assert_eq!((-100i8).backward(28), Some(-128));
        assert_eq!((-100i8).backward(29), None);
        assert_eq!(u16::steps_between(10, 3), Some(0));
    }

    #[test]
    fn test_std_ranges_into_pull() {
        let total: u32 = (1..=4u32).into_pull().sum();
        assert_eq!(total, 10);
        let back: Vec<u8> = (0..3u8).into_pull().rev().collect();
        assert_eq!(back, vec![2, 1, 0]);
    }
}
