//! Push-queue source: the one concurrency boundary of the library.
//!
//! A producer thread sends into a crossbeam channel; the consumer drains it
//! through a pipeline. Dropping every [`Sender`] is the only close signal.

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;
use tracing::debug;

use crate::config::{Capacity, ConfigError, QueueConfig};
use crate::pull::{FusedPull, IntoPull, Pull};
use crate::size_hint::SizeHint;

/// Handle over the receiving end of a push queue.
///
/// [`Pull::next`] blocks until an element arrives or every sender has been
/// dropped. Disconnection is permanent: from then on every pull returns
/// `None` without touching the queue.
#[derive(Debug)]
pub struct ChannelSource<T> {
    rx: Receiver<T>,
    closed: bool,
    received: usize,
}

/// Create a push queue and the handle draining it.
///
/// ```
/// use pullchain::prelude::*;
/// use pullchain::sources::channel;
/// use pullchain::QueueConfig;
///
/// let (tx, rx) = channel(QueueConfig::bounded(4)).unwrap();
/// std::thread::spawn(move || {
///     for i in 0..10 {
///         tx.send(i).unwrap();
///     }
/// });
/// assert_eq!(rx.sum::<i32>(), 45);
/// ```
pub fn channel<T>(config: QueueConfig) -> Result<(Sender<T>, ChannelSource<T>), ConfigError> {
    config.validate()?;
    let (tx, rx) = match config.capacity {
        Capacity::Unbounded => crossbeam_channel::unbounded(),
        Capacity::Bounded(n) => crossbeam_channel::bounded(n),
        Capacity::Rendezvous => crossbeam_channel::bounded(0),
    };
    Ok((tx, from_receiver(rx)))
}

/// Adapt an existing crossbeam receiver.
pub fn from_receiver<T>(rx: Receiver<T>) -> ChannelSource<T> {
    ChannelSource {
        rx,
        closed: false,
        received: 0,
    }
}

impl<T> ChannelSource<T> {
    /// `true` once disconnection has been observed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Elements received so far.
    pub fn received(&self) -> usize {
        self.received
    }

    /// Non-blocking pull: `None` if nothing is buffered right now or the
    /// queue is closed. Use [`ChannelSource::is_closed`] to tell them apart.
    pub fn try_next(&mut self) -> Option<T> {
        if self.closed {
            return None;
        }
        match self.rx.try_recv() {
            Ok(x) => Some(self.accept(x)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.close();
                None
            }
        }
    }

    /// Pull, giving up after `timeout`.
    ///
    /// Like [`ChannelSource::try_next`], `None` covers both "nothing arrived
    /// in time" and "closed".
    pub fn next_timeout(&mut self, timeout: Duration) -> Option<T> {
        if self.closed {
            return None;
        }
        match self.rx.recv_timeout(timeout) {
            Ok(x) => Some(self.accept(x)),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => {
                self.close();
                None
            }
        }
    }

    fn accept(&mut self, x: T) -> T {
        self.received += 1;
        x
    }

    fn close(&mut self) {
        self.closed = true;
        debug!(received = self.received, "push source disconnected");
    }
}

impl<T> Pull for ChannelSource<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.closed {
            return None;
        }
        match self.rx.recv() {
            Ok(x) => Some(self.accept(x)),
            Err(_) => {
                self.close();
                None
            }
        }
    }

    /// Buffered elements are a lower bound. No upper bound is reported until
    /// a pull has observed disconnection, even if every sender is already
    /// gone: the receiver cannot tell that without consuming an element.
    fn size_hint(&self) -> SizeHint {
        if self.closed {
            SizeHint::EMPTY
        } else {
            SizeHint::at_least(self.rx.len())
        }
    }
}

impl<T> FusedPull for ChannelSource<T> {}

impl<T> IntoPull for Receiver<T> {
    type Item = T;
    type IntoPull = ChannelSource<T>;

    fn into_pull(self) -> ChannelSource<T> {
        from_receiver(self)
    }
}
