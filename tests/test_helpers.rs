//! Test helper sources shared by the integration tests

#![allow(dead_code)]
use std::cell::Cell;
use std::rc::Rc;

use pullchain::{Pull, PullBack, SizeHint};

/// Source that is deliberately not fused: it alternates between an element
/// and `None`, `rounds` times, then stays exhausted.
#[derive(Debug, Clone)]
pub struct Oscillator {
    calls: usize,
    rounds: usize,
}

pub fn oscillator(rounds: usize) -> Oscillator {
    Oscillator { calls: 0, rounds }
}

impl Pull for Oscillator {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let call = self.calls;
        self.calls += 1;
        if call / 2 >= self.rounds || call % 2 == 1 {
            None
        } else {
            Some(call / 2)
        }
    }
}

/// Wraps a handle and counts how many times it was pulled, from either end.
#[derive(Debug, Clone)]
pub struct Counted<P> {
    inner: P,
    pulls: Rc<Cell<usize>>,
}

/// Wrap `inner`; the returned counter can be read after the handle has been
/// moved into a pipeline.
pub fn counted<P: Pull>(inner: P) -> (Counted<P>, Rc<Cell<usize>>) {
    let pulls = Rc::new(Cell::new(0));
    (
        Counted {
            inner,
            pulls: Rc::clone(&pulls),
        },
        pulls,
    )
}

impl<P: Pull> Pull for Counted<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        self.pulls.set(self.pulls.get() + 1);
        self.inner.next()
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint()
    }
}

impl<P: PullBack> PullBack for Counted<P> {
    fn next_back(&mut self) -> Option<P::Item> {
        self.pulls.set(self.pulls.get() + 1);
        self.inner.next_back()
    }
}

/// Source reporting no size information at all, over `items`.
#[derive(Debug, Clone)]
pub struct Opaque<T> {
    items: std::vec::IntoIter<T>,
}

pub fn opaque<T>(items: Vec<T>) -> Opaque<T> {
    Opaque {
        items: items.into_iter(),
    }
}

impl<T> Pull for Opaque<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.items.next()
    }
}

/// Deterministic pseudo-random values for bench-like tests.
pub fn lcg_values(seed: u64, n: usize) -> Vec<u64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            state >> 33
        })
        .collect()
}
