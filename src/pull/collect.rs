//! Conversions into handles and materialization out of them.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::control::Try;
use crate::pull::Pull;
use crate::size_hint::SizeHint;

/// Anything that can be turned into a handle.
///
/// Every [`Pull`] converts into itself, so adapter methods accept either.
pub trait IntoPull {
    /// Element type of the resulting handle.
    type Item;
    /// The handle produced.
    type IntoPull: Pull<Item = Self::Item>;

    /// Convert into a handle.
    fn into_pull(self) -> Self::IntoPull;
}

impl<P: Pull> IntoPull for P {
    type Item = P::Item;
    type IntoPull = P;

    #[inline]
    fn into_pull(self) -> P {
        self
    }
}

/// Collections that can be built by draining a handle.
///
/// Implementations reserve space from the handle's lower size bound.
pub trait FromPull<A>: Sized {
    /// Drain `pull` into a new collection.
    fn from_pull<P: IntoPull<Item = A>>(pull: P) -> Self;
}

impl<T> FromPull<T> for Vec<T> {
    fn from_pull<P: IntoPull<Item = T>>(pull: P) -> Self {
        let mut pull = pull.into_pull();
        let mut items = Vec::with_capacity(pull.size_hint().lower);
        while let Some(x) = pull.next() {
            if items.len() == items.capacity() {
                items.reserve(pull.size_hint().lower.saturating_add(1));
            }
            items.push(x);
        }
        items
    }
}

impl<T> FromPull<T> for Box<[T]> {
    fn from_pull<P: IntoPull<Item = T>>(pull: P) -> Self {
        Vec::from_pull(pull).into_boxed_slice()
    }
}

impl<T> FromPull<T> for VecDeque<T> {
    fn from_pull<P: IntoPull<Item = T>>(pull: P) -> Self {
        VecDeque::from(Vec::from_pull(pull))
    }
}

impl FromPull<char> for String {
    fn from_pull<P: IntoPull<Item = char>>(pull: P) -> Self {
        let mut pull = pull.into_pull();
        let mut out = String::with_capacity(pull.size_hint().lower);
        while let Some(c) = pull.next() {
            out.push(c);
        }
        out
    }
}

impl<'a> FromPull<&'a str> for String {
    fn from_pull<P: IntoPull<Item = &'a str>>(pull: P) -> Self {
        let mut pull = pull.into_pull();
        let mut out = String::new();
        while let Some(s) = pull.next() {
            out.push_str(s);
        }
        out
    }
}

impl FromPull<String> for String {
    fn from_pull<P: IntoPull<Item = String>>(pull: P) -> Self {
        let mut pull = pull.into_pull();
        let mut out = String::new();
        while let Some(s) = pull.next() {
            out.push_str(&s);
        }
        out
    }
}

impl<T, S> FromPull<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_pull<P: IntoPull<Item = T>>(pull: P) -> Self {
        let mut pull = pull.into_pull();
        let mut set = HashSet::with_capacity_and_hasher(pull.size_hint().lower, S::default());
        while let Some(x) = pull.next() {
            set.insert(x);
        }
        set
    }
}

impl<K, V, S> FromPull<(K, V)> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_pull<P: IntoPull<Item = (K, V)>>(pull: P) -> Self {
        let mut pull = pull.into_pull();
        let mut map = HashMap::with_capacity_and_hasher(pull.size_hint().lower, S::default());
        while let Some((k, v)) = pull.next() {
            map.insert(k, v);
        }
        map
    }
}

impl<T: Ord> FromPull<T> for BTreeSet<T> {
    fn from_pull<P: IntoPull<Item = T>>(pull: P) -> Self {
        let mut pull = pull.into_pull();
        let mut set = BTreeSet::new();
        while let Some(x) = pull.next() {
            set.insert(x);
        }
        set
    }
}

impl<K: Ord, V> FromPull<(K, V)> for BTreeMap<K, V> {
    fn from_pull<P: IntoPull<Item = (K, V)>>(pull: P) -> Self {
        let mut pull = pull.into_pull();
        let mut map = BTreeMap::new();
        while let Some((k, v)) = pull.next() {
            map.insert(k, v);
        }
        map
    }
}

impl FromPull<()> for () {
    fn from_pull<P: IntoPull<Item = ()>>(pull: P) -> Self {
        let mut pull = pull.into_pull();
        while pull.next().is_some() {}
    }
}

impl<A, E, V> FromPull<Result<A, E>> for Result<V, E>
where
    V: FromPull<A>,
{
    /// Collects until the first `Err`, which is returned instead.
    fn from_pull<P: IntoPull<Item = Result<A, E>>>(pull: P) -> Self {
        let mut residual = None;
        let value = V::from_pull(Shunt {
            pull: pull.into_pull(),
            residual: &mut residual,
        });
        match residual {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}

impl<A, V> FromPull<Option<A>> for Option<V>
where
    V: FromPull<A>,
{
    /// Collects until the first `None`, which is returned instead.
    fn from_pull<P: IntoPull<Item = Option<A>>>(pull: P) -> Self {
        let mut residual = None;
        let value = V::from_pull(Shunt {
            pull: pull.into_pull(),
            residual: &mut residual,
        });
        match residual {
            Some(()) => None,
            None => Some(value),
        }
    }
}

/// Yields the outputs of `Try` elements, parking the first residual aside.
struct Shunt<'a, P, R> {
    pull: P,
    residual: &'a mut Option<R>,
}

impl<P, R> Pull for Shunt<'_, P, R>
where
    P: Pull,
    P::Item: Try<Residual = R>,
{
    type Item = <P::Item as Try>::Output;

    fn next(&mut self) -> Option<Self::Item> {
        if self.residual.is_some() {
            return None;
        }
        match self.pull.next()?.branch() {
            crate::control::ControlFlow::Continue(output) => Some(output),
            crate::control::ControlFlow::Break(residual) => {
                *self.residual = Some(residual);
                None
            }
        }
    }

    fn size_hint(&self) -> SizeHint {
        if self.residual.is_some() {
            SizeHint::EMPTY
        } else {
            self.pull.size_hint().filtered()
        }
    }
}
