//! Short-circuit signalling for the try-family of terminals
//!
//! A step function returns a value implementing [`Try`]; the terminal calls
//! [`Try::branch`] after each element and stops at the first
//! [`ControlFlow::Break`], leaving unseen elements in the handle.

use std::fmt;

/// Whether a traversal should stop early or go on as usual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlFlow<B, C = ()> {
    /// Keep going, carrying the partial accumulator.
    Continue(C),
    /// Stop now, carrying the short-circuit payload.
    Break(B),
}

impl<B, C> ControlFlow<B, C> {
    /// `true` for the `Break` variant.
    pub fn is_break(&self) -> bool {
        matches!(self, ControlFlow::Break(_))
    }

    /// `true` for the `Continue` variant.
    pub fn is_continue(&self) -> bool {
        matches!(self, ControlFlow::Continue(_))
    }

    /// The `Break` payload, if any.
    pub fn break_value(self) -> Option<B> {
        match self {
            ControlFlow::Break(b) => Some(b),
            ControlFlow::Continue(_) => None,
        }
    }

    /// The `Continue` payload, if any.
    pub fn continue_value(self) -> Option<C> {
        match self {
            ControlFlow::Continue(c) => Some(c),
            ControlFlow::Break(_) => None,
        }
    }

    /// Transform the `Break` payload.
    pub fn map_break<T, F>(self, f: F) -> ControlFlow<T, C>
    where
        F: FnOnce(B) -> T,
    {
        match self {
            ControlFlow::Continue(c) => ControlFlow::Continue(c),
            ControlFlow::Break(b) => ControlFlow::Break(f(b)),
        }
    }

    /// Transform the `Continue` payload.
    pub fn map_continue<T, F>(self, f: F) -> ControlFlow<B, T>
    where
        F: FnOnce(C) -> T,
    {
        match self {
            ControlFlow::Continue(c) => ControlFlow::Continue(f(c)),
            ControlFlow::Break(b) => ControlFlow::Break(b),
        }
    }

    /// `Continue(c)` becomes `Ok(c)`, `Break(b)` becomes `Err(b)`.
    pub fn into_result(self) -> Result<C, B> {
        match self {
            ControlFlow::Continue(c) => Ok(c),
            ControlFlow::Break(b) => Err(b),
        }
    }
}

impl<C> ControlFlow<(), C> {
    /// Continue with the checked value, or break with no payload.
    ///
    /// Handy for checked arithmetic: `ControlFlow::from_checked(acc.checked_add(x))`.
    pub fn from_checked(value: Option<C>) -> Self {
        match value {
            Some(c) => ControlFlow::Continue(c),
            None => ControlFlow::Break(()),
        }
    }
}

impl<B, C> From<Result<C, B>> for ControlFlow<B, C> {
    fn from(result: Result<C, B>) -> Self {
        match result {
            Ok(c) => ControlFlow::Continue(c),
            Err(b) => ControlFlow::Break(b),
        }
    }
}

impl<B: fmt::Display, C: fmt::Display> fmt::Display for ControlFlow<B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlFlow::Continue(c) => write!(f, "Continue({})", c),
            ControlFlow::Break(b) => write!(f, "Break({})", b),
        }
    }
}

/// Types a short-circuiting step function may return.
///
/// `Output` is what the traversal keeps going with; `Residual` is what is
/// handed back to the caller when it stops early.
pub trait Try: Sized {
    /// Value carried on the keep-going path.
    type Output;
    /// Value carried on the stop-early path.
    type Residual;

    /// Wrap a keep-going value.
    fn from_output(output: Self::Output) -> Self;

    /// Wrap a stop-early value.
    fn from_residual(residual: Self::Residual) -> Self;

    /// Split into the two paths.
    fn branch(self) -> ControlFlow<Self::Residual, Self::Output>;
}

impl<T> Try for Option<T> {
    type Output = T;
    type Residual = ();

    #[inline]
    fn from_output(output: T) -> Self {
        Some(output)
    }

    #[inline]
    fn from_residual(_: ()) -> Self {
        None
    }

    #[inline]
    fn branch(self) -> ControlFlow<(), T> {
        match self {
            Some(v) => ControlFlow::Continue(v),
            None => ControlFlow::Break(()),
        }
    }
}

impl<T, E> Try for Result<T, E> {
    type Output = T;
    type Residual = E;

    #[inline]
    fn from_output(output: T) -> Self {
        Ok(output)
    }

    #[inline]
    fn from_residual(residual: E) -> Self {
        Err(residual)
    }

    #[inline]
    fn branch(self) -> ControlFlow<E, T> {
        match self {
            Ok(v) => ControlFlow::Continue(v),
            Err(e) => ControlFlow::Break(e),
        }
    }
}

impl<B, C> Try for ControlFlow<B, C> {
    type Output = C;
    type Residual = B;

    #[inline]
    fn from_output(output: C) -> Self {
        ControlFlow::Continue(output)
    }

    #[inline]
    fn from_residual(residual: B) -> Self {
        ControlFlow::Break(residual)
    }

    #[inline]
    fn branch(self) -> ControlFlow<B, C> {
        self
    }
}

/// `?` for [`Try`] values: unwrap the output or return the rewrapped residual.
macro_rules! tri {
    ($e:expr) => {
        match $crate::control::Try::branch($e) {
            $crate::control::ControlFlow::Continue(output) => output,
            $crate::control::ControlFlow::Break(residual) => {
                return $crate::control::Try::from_residual(residual)
            }
        }
    };
}
