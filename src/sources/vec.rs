//! In-memory sequence sources.
//!
//! All three are double-ended and exact-size; `advance_by` and its back
//! counterpart skip in constant time.

use std::num::NonZeroUsize;

use crate::pull::{ExactSizePull, FusedPull, IntoPull, Pull, PullBack};
use crate::size_hint::SizeHint;

/// Owned source over a `Vec`.
#[derive(Debug, Clone)]
pub struct VecSource<T> {
    inner: std::vec::IntoIter<T>,
}

/// Borrowed source over a slice, yielding references.
#[derive(Debug, Clone)]
pub struct SliceSource<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

/// Owned source over a fixed-size array.
#[derive(Debug, Clone)]
pub struct ArraySource<T, const N: usize> {
    inner: std::array::IntoIter<T, N>,
}

/// Take ownership of `items` and yield them left to right.
pub fn from_vec<T>(items: Vec<T>) -> VecSource<T> {
    VecSource {
        inner: items.into_iter(),
    }
}

/// Yield references to the elements of `items`.
pub fn from_slice<T>(items: &[T]) -> SliceSource<'_, T> {
    SliceSource {
        inner: items.iter(),
    }
}

/// Take ownership of an array and yield its elements.
pub fn from_array<T, const N: usize>(items: [T; N]) -> ArraySource<T, N> {
    ArraySource {
        inner: items.into_iter(),
    }
}

impl<T> VecSource<T> {
    /// Elements not yet produced from either end.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<'a, T> SliceSource<'a, T> {
    /// Elements not yet produced from either end.
    pub fn as_slice(&self) -> &'a [T] {
        self.inner.as_slice()
    }
}

impl<T, const N: usize> ArraySource<T, N> {
    /// Elements not yet produced from either end.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

macro_rules! indexed_source {
    ($name:ident < $($gen:tt),* > => $item:ty) => {
        impl<$($gen),*> Pull for $name<$($gen),*> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<$item> {
                self.inner.next()
            }

            #[inline]
            fn size_hint(&self) -> SizeHint {
                SizeHint::exact(self.inner.len())
            }

            fn advance_by(&mut self, n: usize) -> Result<(), NonZeroUsize> {
                let step = n.min(self.inner.len());
                if step > 0 {
                    self.inner.nth(step - 1);
                }
                NonZeroUsize::new(n - step).map_or(Ok(()), Err)
            }

            fn nth(&mut self, n: usize) -> Option<$item> {
                self.inner.nth(n)
            }

            fn count(self) -> usize {
                self.inner.len()
            }

            fn last(mut self) -> Option<$item> {
                self.inner.next_back()
            }
        }

        impl<$($gen),*> PullBack for $name<$($gen),*> {
            #[inline]
            fn next_back(&mut self) -> Option<$item> {
                self.inner.next_back()
            }

            fn advance_back_by(&mut self, n: usize) -> Result<(), NonZeroUsize> {
                let step = n.min(self.inner.len());
                if step > 0 {
                    self.inner.nth_back(step - 1);
                }
                NonZeroUsize::new(n - step).map_or(Ok(()), Err)
            }

            fn nth_back(&mut self, n: usize) -> Option<$item> {
                self.inner.nth_back(n)
            }
        }

        impl<$($gen),*> ExactSizePull for $name<$($gen),*> {
            fn len(&self) -> usize {
                self.inner.len()
            }
        }

        impl<$($gen),*> FusedPull for $name<$($gen),*> {}
    };
}

indexed_source!(VecSource<T> => T);
indexed_source!(SliceSource<'a, T> => &'a T);

// Const generics do not fit the macro's parameter list.
impl<T, const N: usize> Pull for ArraySource<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> SizeHint {
        SizeHint::exact(self.inner.len())
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        self.inner.nth(n)
    }
}

impl<T, const N: usize> PullBack for ArraySource<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }

    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.inner.nth_back(n)
    }
}

impl<T, const N: usize> ExactSizePull for ArraySource<T, N> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T, const N: usize> FusedPull for ArraySource<T, N> {}

impl<T> IntoPull for Vec<T> {
    type Item = T;
    type IntoPull = VecSource<T>;

    fn into_pull(self) -> VecSource<T> {
        from_vec(self)
    }
}

impl<'a, T> IntoPull for &'a [T] {
    type Item = &'a T;
    type IntoPull = SliceSource<'a, T>;

    fn into_pull(self) -> SliceSource<'a, T> {
        from_slice(self)
    }
}

impl<'a, T> IntoPull for &'a Vec<T> {
    type Item = &'a T;
    type IntoPull = SliceSource<'a, T>;

    fn into_pull(self) -> SliceSource<'a, T> {
        from_slice(self)
    }
}

impl<T, const N: usize> IntoPull for [T; N] {
    type Item = T;
    type IntoPull = ArraySource<T, N>;

    fn into_pull(self) -> ArraySource<T, N> {
        from_array(self)
    }
}
