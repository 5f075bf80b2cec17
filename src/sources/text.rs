//! Text sources: UTF-8 bytes decoded one unit per pull.
//!
//! The granularity is picked by the unit type: `char` yields Unicode scalar
//! values, `u8` yields raw bytes. [`decode`] checks a whole buffer up front;
//! [`Utf8Decoder`] works on any byte handle and reports malformed input at
//! the pull that reaches it.

use std::marker::PhantomData;

use thiserror::Error;
use tracing::{debug, warn};

use crate::adapters::Peekable;
use crate::config::{DecodeConfig, Malformed};
use crate::pull::{ExactSizePull, FusedPull, IntoPull, Pull, PullBack};
use crate::size_hint::SizeHint;
use crate::sources::from_slice;

/// What was wrong with a malformed UTF-8 sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    /// A byte that cannot start a sequence.
    #[error("invalid lead byte")]
    InvalidLead,
    /// Input ended in the middle of a sequence.
    #[error("truncated sequence")]
    Truncated,
    /// A byte that cannot continue the current sequence.
    #[error("invalid continuation byte")]
    InvalidContinuation,
    /// A longer encoding than the scalar value needs.
    #[error("overlong encoding")]
    Overlong,
    /// An encoded UTF-16 surrogate half.
    #[error("encoded surrogate")]
    Surrogate,
    /// A value above U+10FFFF.
    #[error("code point out of range")]
    OutOfRange,
}

/// Malformed UTF-8 found at byte `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("malformed UTF-8 at byte {offset}: {kind}")]
pub struct DecodeError {
    /// Offset of the first byte of the malformed sequence.
    pub offset: usize,
    /// Failure class.
    pub kind: DecodeErrorKind,
}

/// Pull one scalar value off `input`.
///
/// On failure the maximal invalid prefix is consumed and its length is
/// returned with the kind; the byte that broke the sequence stays in
/// `input`.
fn decode_scalar<I>(input: &mut Peekable<I>) -> Option<Result<(char, usize), (DecodeErrorKind, usize)>>
where
    I: Pull<Item = u8>,
{
    use DecodeErrorKind::*;

    let lead = input.next()?;
    // (sequence width, payload bits of the lead, allowed second-byte range)
    let (width, init, lo, hi) = match lead {
        0x00..=0x7F => return Some(Ok((char::from(lead), 1))),
        0x80..=0xBF | 0xF8..=0xFF => return Some(Err((InvalidLead, 1))),
        0xC0 | 0xC1 => return Some(Err((Overlong, 1))),
        0xF5..=0xF7 => return Some(Err((OutOfRange, 1))),
        0xC2..=0xDF => (2, lead & 0x1F, 0x80, 0xBF),
        0xE0 => (3, lead & 0x0F, 0xA0, 0xBF),
        0xED => (3, lead & 0x0F, 0x80, 0x9F),
        0xE1..=0xEC | 0xEE | 0xEF => (3, lead & 0x0F, 0x80, 0xBF),
        0xF0 => (4, lead & 0x07, 0x90, 0xBF),
        0xF1..=0xF3 => (4, lead & 0x07, 0x80, 0xBF),
        0xF4 => (4, lead & 0x07, 0x80, 0x8F),
    };

    let mut code = u32::from(init);
    for i in 1..width {
        let (lo, hi) = if i == 1 { (lo, hi) } else { (0x80, 0xBF) };
        let b = match input.peek() {
            Some(&b) => b,
            None => return Some(Err((Truncated, i))),
        };
        if !(lo..=hi).contains(&b) {
            // A plain continuation byte rejected only by the narrowed range
            // tells us which rule the lead broke.
            let kind = match lead {
                0xE0 | 0xF0 if i == 1 && (0x80..=0xBF).contains(&b) => Overlong,
                0xED if i == 1 && (0x80..=0xBF).contains(&b) => Surrogate,
                0xF4 if i == 1 && (0x80..=0xBF).contains(&b) => OutOfRange,
                _ => InvalidContinuation,
            };
            return Some(Err((kind, i)));
        }
        input.next();
        code = (code << 6) | u32::from(b & 0x3F);
    }
    Some(char::from_u32(code).map(|c| (c, width)).ok_or((InvalidContinuation, width)))
}

fn validate_utf8(bytes: &[u8]) -> Result<(), DecodeError> {
    let mut input = from_slice(bytes).copied().peekable();
    let mut offset = 0;
    while let Some(step) = decode_scalar(&mut input) {
        match step {
            Ok((_, width)) => offset += width,
            Err((kind, _)) => return Err(DecodeError { offset, kind }),
        }
    }
    Ok(())
}

/// Sequence width announced by a lead byte of valid UTF-8.
fn utf8_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for char {}
    impl Sealed for u8 {}
}

/// Decoding granularity of a [`TextSource`]: `char` or `u8`.
pub trait TextUnit: Copy + sealed::Sealed {
    /// Check that `bytes` can be split into units.
    fn validate(bytes: &[u8]) -> Result<(), DecodeError>;

    /// First unit of `bytes` and its width in bytes.
    fn decode_first(bytes: &[u8]) -> Option<(Self, usize)>;

    /// Last unit of `bytes` and its width in bytes.
    fn decode_last(bytes: &[u8]) -> Option<(Self, usize)>;

    /// Bounds on the number of units in `n` valid bytes.
    fn units_in(n: usize) -> SizeHint;
}

impl TextUnit for u8 {
    fn validate(_bytes: &[u8]) -> Result<(), DecodeError> {
        Ok(())
    }

    fn decode_first(bytes: &[u8]) -> Option<(u8, usize)> {
        bytes.first().map(|&b| (b, 1))
    }

    fn decode_last(bytes: &[u8]) -> Option<(u8, usize)> {
        bytes.last().map(|&b| (b, 1))
    }

    fn units_in(n: usize) -> SizeHint {
        SizeHint::exact(n)
    }
}

impl TextUnit for char {
    fn validate(bytes: &[u8]) -> Result<(), DecodeError> {
        validate_utf8(bytes)
    }

    fn decode_first(bytes: &[u8]) -> Option<(char, usize)> {
        let width = utf8_width(*bytes.first()?);
        let unit = bytes.get(..width)?;
        let c = std::str::from_utf8(unit).ok()?.chars().next()?;
        Some((c, width))
    }

    fn decode_last(bytes: &[u8]) -> Option<(char, usize)> {
        let tail = &bytes[bytes.len().saturating_sub(4)..];
        let start = tail.iter().rposition(|&b| b & 0xC0 != 0x80)?;
        let unit = &tail[start..];
        let c = std::str::from_utf8(unit).ok()?.chars().next()?;
        Some((c, unit.len()))
    }

    fn units_in(n: usize) -> SizeHint {
        SizeHint::new(n / 4 + usize::from(n % 4 != 0), Some(n))
    }
}

/// Handle returned by [`from_text`] and [`decode`].
///
/// Double-ended; the two ends never cross a unit boundary.
#[derive(Debug, Clone)]
pub struct TextSource<'a, U> {
    bytes: &'a [u8],
    front: usize,
    back: usize,
    _unit: PhantomData<U>,
}

impl<'a, U: TextUnit> TextSource<'a, U> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            front: 0,
            back: bytes.len(),
            _unit: PhantomData,
        }
    }

    /// Bytes not yet produced from either end.
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.bytes[self.front..self.back]
    }

    /// Byte offset of the next front unit.
    pub fn offset(&self) -> usize {
        self.front
    }
}

/// Split `text` into units of type `U`.
///
/// ```
/// use pullchain::prelude::*;
/// use pullchain::sources::from_text;
///
/// assert_eq!(from_text::<char>("héllo").count(), 5);
/// assert_eq!(from_text::<u8>("héllo").count(), 6);
/// ```
pub fn from_text<U: TextUnit>(text: &str) -> TextSource<'_, U> {
    TextSource::new(text.as_bytes())
}

/// Check `bytes` and split them into units of type `U`.
///
/// With `U = char` malformed UTF-8 is rejected here, before any pull; raw
/// bytes are always accepted.
pub fn decode<U: TextUnit>(bytes: &[u8]) -> Result<TextSource<'_, U>, DecodeError> {
    U::validate(bytes)?;
    Ok(TextSource::new(bytes))
}

impl<'a, U: TextUnit> Pull for TextSource<'a, U> {
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        let (unit, width) = U::decode_first(self.as_bytes())?;
        self.front += width;
        Some(unit)
    }

    fn size_hint(&self) -> SizeHint {
        U::units_in(self.back - self.front)
    }
}

impl<'a, U: TextUnit> PullBack for TextSource<'a, U> {
    #[inline]
    fn next_back(&mut self) -> Option<U> {
        let (unit, width) = U::decode_last(self.as_bytes())?;
        self.back -= width;
        Some(unit)
    }
}

impl<'a> ExactSizePull for TextSource<'a, u8> {}

impl<'a, U: TextUnit> FusedPull for TextSource<'a, U> {}

/// Lazy UTF-8 decoder over any byte handle; see [`utf8_decoder`].
#[derive(Debug, Clone)]
pub struct Utf8Decoder<I: Pull<Item = u8>> {
    input: Peekable<I>,
    config: DecodeConfig,
    offset: usize,
    replaced: usize,
    done: bool,
}

/// Decode `bytes` one scalar value per pull.
///
/// Each malformed sequence is handled per `config`: with
/// [`Malformed::Stop`] the error is yielded and the decoder is exhausted
/// afterwards; with [`Malformed::Replace`] U+FFFD is yielded in its place.
///
/// ```
/// use pullchain::prelude::*;
/// use pullchain::sources::utf8_decoder;
/// use pullchain::DecodeConfig;
///
/// let text: String = utf8_decoder(vec![b'o', 0xFF, b'k'], DecodeConfig::lossy())
///     .map(|r| r.unwrap())
///     .collect();
/// assert_eq!(text, "o\u{FFFD}k");
/// ```
pub fn utf8_decoder<S>(bytes: S, config: DecodeConfig) -> Utf8Decoder<S::IntoPull>
where
    S: IntoPull<Item = u8>,
{
    Utf8Decoder {
        input: bytes.into_pull().peekable(),
        config,
        offset: 0,
        replaced: 0,
        done: false,
    }
}

impl<I: Pull<Item = u8>> Utf8Decoder<I> {
    /// Bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Malformed sequences replaced so far.
    pub fn replaced(&self) -> usize {
        self.replaced
    }
}

impl<I: Pull<Item = u8>> Pull for Utf8Decoder<I> {
    type Item = Result<char, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let start = self.offset;
        let step = match decode_scalar(&mut self.input) {
            Some(step) => step,
            None => {
                self.done = true;
                return None;
            }
        };
        match step {
            Ok((c, width)) => {
                self.offset += width;
                Some(Ok(c))
            }
            Err((kind, consumed)) => {
                self.offset += consumed;
                match self.config.on_malformed {
                    Malformed::Stop => {
                        debug!(offset = start, %kind, "rejecting malformed UTF-8");
                        self.done = true;
                        Some(Err(DecodeError {
                            offset: start,
                            kind,
                        }))
                    }
                    Malformed::Replace => {
                        warn!(offset = start, %kind, "replacing malformed UTF-8 with U+FFFD");
                        self.replaced += 1;
                        Some(Ok(char::REPLACEMENT_CHARACTER))
                    }
                }
            }
        }
    }

    fn size_hint(&self) -> SizeHint {
        if self.done {
            return SizeHint::EMPTY;
        }
        let hint = self.input.size_hint();
        let lower = match self.config.on_malformed {
            // One error may end the stream early.
            Malformed::Stop => usize::from(hint.lower > 0),
            Malformed::Replace => hint.lower / 4 + usize::from(hint.lower % 4 != 0),
        };
        SizeHint::new(lower, hint.upper)
    }
}

impl<I: Pull<Item = u8>> FusedPull for Utf8Decoder<I> {}
