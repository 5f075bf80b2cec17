//! Leaf handles
//!
//! One entry point per source kind:
//!
//! | Source | Entry point |
//! |---|---|
//! | In-memory sequence | [`from_vec`], [`from_slice`], [`from_elements!`](crate::from_elements) |
//! | Integer range | [`range`], [`range_inclusive`], [`range_with`] |
//! | Push queue | [`channel`], [`from_receiver`] |
//! | Text | [`from_text`], [`decode`], [`utf8_decoder`] |
//! | Capability bridge | [`from_producer`], [`from_fn`], [`from_std`] |
//! | Bit sets | [`bits`], [`ones`], [`zeros`], [`bits_from_bytes`] |
//! | Trivial | [`empty`], [`once`], [`repeat`], [`repeat_n`], [`successors`] |
//!
//! [`enumerate_from`] pairs construction with index tagging.

mod bits;
mod channel;
mod func;
mod range;
mod text;
mod vec;

pub use bits::{bits, bits_from_bytes, ones, zeros, Bits, Ones, Zeros};
pub use channel::{channel, from_receiver, ChannelSource};
pub use func::{
    empty, from_fn, from_producer, from_std, once, repeat, repeat_n, successors, Empty, FromFn,
    FromStd, Once, Producer, ProducerSource, Repeat, RepeatN, Successors,
};
pub use range::{range, range_inclusive, range_with, RangeKind, RangeSource, Step};
pub use text::{
    decode, from_text, utf8_decoder, DecodeError, DecodeErrorKind, TextSource, TextUnit,
    Utf8Decoder,
};
pub use vec::{from_array, from_slice, from_vec, ArraySource, SliceSource, VecSource};

use crate::adapters::Enumerate;
use crate::pull::IntoPull;

/// Build a handle from anything convertible and tag each element with its
/// zero-based position.
///
/// ```
/// use pullchain::prelude::*;
/// use pullchain::sources::enumerate_from;
///
/// let tagged: Vec<(usize, char)> = enumerate_from(vec!['a', 'b']).collect();
/// assert_eq!(tagged, vec![(0, 'a'), (1, 'b')]);
/// ```
pub fn enumerate_from<S: IntoPull>(source: S) -> Enumerate<S::IntoPull> {
    Enumerate::new(source.into_pull())
}
