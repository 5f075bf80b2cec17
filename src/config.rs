//! Construction-time settings for the sources that need them
//!
//! Plain structs with `with_*` builders and a `validate` step, so a bad
//! setting is reported as [`ConfigError`] before any element is pulled.

use thiserror::Error;

/// Errors raised by invalid source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A bounded queue was asked for with room for zero elements.
    #[error("bounded queue capacity must be > 0 (use a rendezvous queue for hand-off)")]
    ZeroCapacity,
}

/// How many elements a push queue may buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capacity {
    /// No limit; senders never block.
    #[default]
    Unbounded,
    /// At most `n` buffered elements; senders block when full.
    Bounded(usize),
    /// No buffer; every send waits for a matching receive.
    Rendezvous,
}

/// Settings for [`channel`](crate::sources::channel).
#[derive(Debug, Clone, Default)]
pub struct QueueConfig {
    /// Buffering policy.
    pub capacity: Capacity,
}

impl QueueConfig {
    /// Queue without a size limit.
    pub fn unbounded() -> Self {
        Self {
            capacity: Capacity::Unbounded,
        }
    }

    /// Queue buffering at most `n` elements.
    pub fn bounded(n: usize) -> Self {
        Self {
            capacity: Capacity::Bounded(n),
        }
    }

    /// Zero-capacity hand-off queue.
    pub fn rendezvous() -> Self {
        Self {
            capacity: Capacity::Rendezvous,
        }
    }

    /// Replace the buffering policy.
    pub fn with_capacity(mut self, capacity: Capacity) -> Self {
        self.capacity = capacity;
        self
    }

    /// Reject settings that cannot describe a working queue.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.capacity {
            Capacity::Bounded(0) => Err(ConfigError::ZeroCapacity),
            _ => Ok(()),
        }
    }
}

/// What a UTF-8 decoder does with a malformed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Malformed {
    /// Yield the error once, then report exhaustion.
    #[default]
    Stop,
    /// Yield U+FFFD in place of the maximal invalid subpart and continue.
    Replace,
}

/// Settings for [`Utf8Decoder`](crate::sources::Utf8Decoder).
#[derive(Debug, Clone, Default)]
pub struct DecodeConfig {
    /// Malformed-input policy.
    pub on_malformed: Malformed,
}

impl DecodeConfig {
    /// Stop at the first malformed sequence.
    pub fn strict() -> Self {
        Self {
            on_malformed: Malformed::Stop,
        }
    }

    /// Substitute U+FFFD for malformed sequences.
    pub fn lossy() -> Self {
        Self {
            on_malformed: Malformed::Replace,
        }
    }

    /// Replace the malformed-input policy.
    pub fn with_on_malformed(mut self, on_malformed: Malformed) -> Self {
        self.on_malformed = on_malformed;
        self
    }
}
