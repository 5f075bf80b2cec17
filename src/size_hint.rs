//! Remaining-length bookkeeping
//!
//! Every handle reports a [`SizeHint`]: a lower bound that is never larger
//! than the number of elements still producible, and an optional upper bound
//! that is never smaller. Adapters derive their own hint from the upstream
//! hint using the helpers below.

use std::fmt;

/// Bounds on the remaining length of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeHint {
    /// Elements that are guaranteed to still be produced.
    pub lower: usize,
    /// Elements that can at most still be produced; `None` when unknown or
    /// larger than `usize::MAX`.
    pub upper: Option<usize>,
}

impl SizeHint {
    /// Hint for a sequence with nothing left.
    pub const EMPTY: SizeHint = SizeHint {
        lower: 0,
        upper: Some(0),
    };

    /// Hint for a sequence that never ends.
    pub const INFINITE: SizeHint = SizeHint {
        lower: usize::MAX,
        upper: None,
    };

    /// Build a hint from explicit bounds.
    pub const fn new(lower: usize, upper: Option<usize>) -> Self {
        Self { lower, upper }
    }

    /// Hint that knows the remaining count exactly.
    pub const fn exact(n: usize) -> Self {
        Self {
            lower: n,
            upper: Some(n),
        }
    }

    /// The always-correct hint `(0, None)`.
    pub const fn unknown() -> Self {
        Self {
            lower: 0,
            upper: None,
        }
    }

    /// Hint with a lower bound and no known upper bound.
    pub const fn at_least(lower: usize) -> Self {
        Self { lower, upper: None }
    }

    /// Exact count, if both bounds agree.
    pub fn exact_len(&self) -> Option<usize> {
        match self.upper {
            Some(upper) if upper == self.lower => Some(upper),
            _ => None,
        }
    }

    /// Whether `n` remaining elements is consistent with these bounds.
    pub fn admits(&self, n: usize) -> bool {
        n >= self.lower && self.upper.map_or(true, |upper| n <= upper)
    }

    /// Sum of two independent sequences (e.g. `chain`).
    ///
    /// The lower bound saturates; the upper bound becomes unknown on overflow.
    pub fn add(self, other: SizeHint) -> SizeHint {
        let lower = self.lower.saturating_add(other.lower);
        let upper = match (self.upper, other.upper) {
            (Some(a), Some(b)) => a.checked_add(b),
            _ => None,
        };
        SizeHint { lower, upper }
    }

    /// Add a fixed number of already-buffered elements.
    pub fn add_count(self, n: usize) -> SizeHint {
        self.add(SizeHint::exact(n))
    }

    /// Shortest of two sequences walked in lockstep (e.g. `zip`).
    pub fn min(self, other: SizeHint) -> SizeHint {
        let lower = self.lower.min(other.lower);
        let upper = match (self.upper, other.upper) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        };
        SizeHint { lower, upper }
    }

    /// Cap both bounds at `n` (e.g. `take`).
    pub fn cap(self, n: usize) -> SizeHint {
        let lower = self.lower.min(n);
        let upper = match self.upper {
            Some(upper) if upper < n => Some(upper),
            _ => Some(n),
        };
        SizeHint { lower, upper }
    }

    /// Drop the first `n` elements (e.g. `skip`).
    pub fn skip(self, n: usize) -> SizeHint {
        SizeHint {
            lower: self.lower.saturating_sub(n),
            upper: self.upper.map(|upper| upper.saturating_sub(n)),
        }
    }

    /// Any number of elements may be discarded (e.g. `filter`).
    pub fn filtered(self) -> SizeHint {
        SizeHint {
            lower: 0,
            upper: self.upper,
        }
    }

    /// Each remaining element becomes exactly `factor` elements.
    pub fn scale(self, factor: usize) -> SizeHint {
        SizeHint {
            lower: self.lower.saturating_mul(factor),
            upper: self.upper.and_then(|upper| upper.checked_mul(factor)),
        }
    }

    /// Groups of `size` elements, discarding any incomplete trailing group.
    pub fn div_floor(self, size: usize) -> SizeHint {
        debug_assert!(size > 0);
        SizeHint {
            lower: self.lower / size,
            upper: self.upper.map(|upper| upper / size),
        }
    }

    /// Convert to the `(lower, upper)` tuple shape used by `std`.
    pub fn into_tuple(self) -> (usize, Option<usize>) {
        (self.lower, self.upper)
    }
}

impl Default for SizeHint {
    fn default() -> Self {
        SizeHint::unknown()
    }
}

impl From<(usize, Option<usize>)> for SizeHint {
    fn from((lower, upper): (usize, Option<usize>)) -> Self {
        SizeHint { lower, upper }
    }
}

impl From<SizeHint> for (usize, Option<usize>) {
    fn from(hint: SizeHint) -> Self {
        hint.into_tuple()
    }
}

impl fmt::Display for SizeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper {
            Some(upper) => write!(f, "[{}, {}]", self.lower, upper),
            None => write!(f, "[{}, ∞)", self.lower),
        }
    }
}
