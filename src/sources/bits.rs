//! Bit-set sources backed by `bitvec`.
//!
//! [`bits`] walks every position; [`ones`] and [`zeros`] jump straight to
//! the next set or clear bit using the word-level scans of `BitSlice`.

use bitvec::prelude::*;

use crate::pull::{ExactSizePull, FusedPull, Pull, PullBack};
use crate::size_hint::SizeHint;

/// Handle returned by [`bits`] and [`bits_from_bytes`]: `(offset, bit)`
/// pairs.
#[derive(Debug, Clone)]
pub struct Bits<'a, T: BitStore = usize, O: BitOrder = Lsb0> {
    slice: &'a BitSlice<T, O>,
    front: usize,
    back: usize,
}

/// Every bit of `slice` together with its offset.
pub fn bits<T: BitStore, O: BitOrder>(slice: &BitSlice<T, O>) -> Bits<'_, T, O> {
    Bits {
        slice,
        front: 0,
        back: slice.len(),
    }
}

/// Bits of `bytes`, most significant bit of each byte first.
///
/// ```
/// use pullchain::prelude::*;
/// use pullchain::sources::bits_from_bytes;
///
/// let set: Vec<usize> = bits_from_bytes(&[0b1000_0001])
///     .filter(|&(_, b)| b)
///     .map(|(i, _)| i)
///     .collect();
/// assert_eq!(set, vec![0, 7]);
/// ```
pub fn bits_from_bytes(bytes: &[u8]) -> Bits<'_, u8, Msb0> {
    bits(bytes.view_bits::<Msb0>())
}

impl<'a, T: BitStore, O: BitOrder> Pull for Bits<'a, T, O> {
    type Item = (usize, bool);

    #[inline]
    fn next(&mut self) -> Option<(usize, bool)> {
        if self.front == self.back {
            return None;
        }
        let i = self.front;
        self.front += 1;
        Some((i, self.slice[i]))
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.back - self.front)
    }

    fn nth(&mut self, n: usize) -> Option<(usize, bool)> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<'a, T: BitStore, O: BitOrder> PullBack for Bits<'a, T, O> {
    #[inline]
    fn next_back(&mut self) -> Option<(usize, bool)> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some((self.back, self.slice[self.back]))
    }
}

impl<'a, T: BitStore, O: BitOrder> ExactSizePull for Bits<'a, T, O> {}

impl<'a, T: BitStore, O: BitOrder> FusedPull for Bits<'a, T, O> {}

/// Offsets in `[front, back)` holding `want`.
#[derive(Debug, Clone)]
struct Scan<'a, T: BitStore, O: BitOrder> {
    slice: &'a BitSlice<T, O>,
    front: usize,
    back: usize,
}

impl<'a, T: BitStore, O: BitOrder> Scan<'a, T, O> {
    fn new(slice: &'a BitSlice<T, O>) -> Self {
        Self {
            slice,
            front: 0,
            back: slice.len(),
        }
    }

    fn rest(&self) -> &'a BitSlice<T, O> {
        &self.slice[self.front..self.back]
    }

    fn next(&mut self, want: bool) -> Option<usize> {
        let rest = self.rest();
        let hit = if want { rest.first_one() } else { rest.first_zero() };
        match hit {
            Some(i) => {
                let at = self.front + i;
                self.front = at + 1;
                Some(at)
            }
            None => {
                self.front = self.back;
                None
            }
        }
    }

    fn next_back(&mut self, want: bool) -> Option<usize> {
        let rest = self.rest();
        let hit = if want { rest.last_one() } else { rest.last_zero() };
        match hit {
            Some(i) => {
                let at = self.front + i;
                self.back = at;
                Some(at)
            }
            None => {
                self.back = self.front;
                None
            }
        }
    }

    fn len(&self, want: bool) -> usize {
        let rest = self.rest();
        if want {
            rest.count_ones()
        } else {
            rest.count_zeros()
        }
    }
}

macro_rules! position_source {
    ($(#[$doc:meta])* $name:ident, $ctor:ident, $want:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name<'a, T: BitStore = usize, O: BitOrder = Lsb0> {
            scan: Scan<'a, T, O>,
        }

        $(#[$doc])*
        pub fn $ctor<T: BitStore, O: BitOrder>(slice: &BitSlice<T, O>) -> $name<'_, T, O> {
            $name {
                scan: Scan::new(slice),
            }
        }

        impl<'a, T: BitStore, O: BitOrder> Pull for $name<'a, T, O> {
            type Item = usize;

            #[inline]
            fn next(&mut self) -> Option<usize> {
                self.scan.next($want)
            }

            fn size_hint(&self) -> SizeHint {
                SizeHint::exact(self.scan.len($want))
            }
        }

        impl<'a, T: BitStore, O: BitOrder> PullBack for $name<'a, T, O> {
            #[inline]
            fn next_back(&mut self) -> Option<usize> {
                self.scan.next_back($want)
            }
        }

        impl<'a, T: BitStore, O: BitOrder> ExactSizePull for $name<'a, T, O> {}

        impl<'a, T: BitStore, O: BitOrder> FusedPull for $name<'a, T, O> {}
    };
}

position_source!(
    /// Offsets of the set bits.
    Ones,
    ones,
    true
);
position_source!(
    /// Offsets of the clear bits.
    Zeros,
    zeros,
    false
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_walk_both_ends() {
        let bv = bitvec![0, 1, 1, 0];
        let mut p = bits(&bv);
        assert_eq!(p.len(), 4);
        assert_eq!(p.next(), Some((0, false)));
        assert_eq!(p.next_back(), Some((3, false)));
        assert_eq!(p.collect::<Vec<_>>(), vec![(1, true), (2, true)]);
    }

    #[test]
    fn test_ones_and_zeros_partition_offsets() {
        let bv = bitvec![1, 0, 0, 1, 1, 0, 1];
        assert_eq!(ones(&bv).collect::<Vec<_>>(), vec![0, 3, 4, 6]);
        assert_eq!(zeros(&bv).collect::<Vec<_>>(), vec![1, 2, 5]);
        assert_eq!(zeros(&bv).len(), 3);
    }

    #[test]
    fn test_ones_from_back_meets_front() {
        let bv = bitvec![1, 1, 0, 1];
        let mut p = ones(&bv);
        assert_eq!(p.next_back(), Some(3));
        assert_eq!(p.next(), Some(0));
        assert_eq!(p.size_hint(), SizeHint::exact(1));
        assert_eq!(p.next_back(), Some(1));
        assert_eq!(p.next(), None);
        assert_eq!(p.next_back(), None);
    }

    #[test]
    fn test_bytes_are_msb_first() {
        let got: Vec<usize> = ones(0b0100_0000u8.view_bits::<Msb0>()).collect();
        assert_eq!(got, vec![1]);
        assert_eq!(bits_from_bytes(&[0xFF, 0x00]).filter(|&(_, b)| b).count(), 8);
    }
}
