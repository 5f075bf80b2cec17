//! # Lazy pull-based sequence composition
//!
//! This library builds pipelines over sequences without materializing
//! intermediate collections. Everything is driven by one operation,
//! [`Pull::next`]: a terminal consumer calls it on the head of the chain and
//! the call ripples down through the adapters until a source produces an
//! element or reports exhaustion.
//!
//! ## Building blocks
//!
//! 1. **Sources** ([`sources`]): in-memory sequences, integer ranges, push
//!    queues fed by another thread, text decoded by code point or by byte,
//!    bit sets, and any type exposing a single "produce next" capability
//! 2. **Adapters** ([`adapters`]): map, filter, scan, take/skip, step-by,
//!    chain, zip, intersperse, unique, peekable, fuse, windows and more, each
//!    taking ownership of its upstream
//! 3. **Terminals** (provided methods on [`Pull`]): folds, searches,
//!    comparisons and collection, including short-circuiting `try_*`
//!    variants that leave unseen elements in place
//!
//! Optional capabilities are separate traits: [`PullBack`] for
//! back-to-front production, [`ExactSizePull`] for exact lengths and
//! [`FusedPull`] for permanent exhaustion.
//!
//! ## Usage Example
//!
//! ```
//! use pullchain::prelude::*;
//! use pullchain::sources::from_vec;
//!
//! let words = from_vec(vec!["to", "be", "or", "not", "to", "be"]);
//! let line: String = words.unique().intersperse(" ").collect();
//! assert_eq!(line, "to be or not");
//! ```
//!
//! Short-circuiting keeps the remainder:
//!
//! ```
//! use pullchain::prelude::*;
//! use pullchain::sources::from_vec;
//!
//! let mut p = from_vec(vec![10i8, 20, 30, 100, 40, 50]);
//! assert_eq!(p.try_fold(0i8, |acc, x| acc.checked_add(x)), None);
//! assert_eq!(p.collect::<Vec<_>>(), vec![40, 50]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::should_implement_trait)]

#[macro_use]
pub mod control; // Short-circuit signalling and the `tri!` helper
pub mod adapters; // Transformation adapters
pub mod config; // Queue and decoder settings
pub mod pull; // The pull contract and terminals
pub mod size_hint; // Remaining-length bookkeeping
pub mod sources; // Leaf handles

pub use config::{Capacity, ConfigError, DecodeConfig, Malformed, QueueConfig};
pub use control::{ControlFlow, Try};
pub use pull::{
    BoxPull, ExactSizePull, FromPull, FusedPull, IntoPull, PartialChunk, Pull, PullBack,
};
pub use size_hint::SizeHint;
pub use sources::{DecodeError, DecodeErrorKind};

use thiserror::Error;

/// Everything needed to call adapter and terminal methods.
pub mod prelude {
    pub use crate::control::{ControlFlow, Try};
    pub use crate::pull::{ExactSizePull, FromPull, FusedPull, IntoPull, Pull, PullBack};
    pub use crate::size_hint::SizeHint;
}

/// Errors reported by fallible constructors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A step, chunk or window argument was zero
    #[error("{what} must be non-zero")]
    ZeroSize {
        /// Which argument was zero
        what: &'static str,
    },

    /// Input bytes were not valid at the requested granularity
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A source configuration was rejected
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Build an owned, double-ended source from a list of values.
///
/// ```
/// use pullchain::prelude::*;
///
/// let total: i32 = pullchain::from_elements![1, 2, 3].sum();
/// assert_eq!(total, 6);
/// ```
#[macro_export]
macro_rules! from_elements {
    ($($x:expr),* $(,)?) => {
        $crate::sources::from_vec(::std::vec![$($x),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::ZeroSize { what: "step" };
        assert_eq!(err.to_string(), "step must be non-zero");
        let err: Error = ConfigError::ZeroCapacity.into();
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn test_from_elements_macro() {
        let mut p = from_elements!['x', 'y',];
        assert_eq!(p.next_back(), Some('y'));
        assert_eq!(p.len(), 1);
    }
}
