//! Transformation adapters
//!
//! Each adapter owns exactly one upstream handle (two for [`Chain`] and
//! [`Zip`]) and is itself a [`Pull`](crate::Pull). Adapters are built through
//! the provided methods on [`Pull`](crate::Pull); constructors are not public.
//!
//! Adapters holding closures implement `Debug` by printing only their
//! upstream, and `Clone` whenever every field is `Clone`.

mod bridge;
mod chain;
mod chunks;
mod cloned;
mod cycle;
mod enumerate;
mod filter;
mod flatten;
mod fuse;
mod inspect;
mod intersperse;
mod map;
mod peekable;
mod rev;
mod scan;
mod skip;
mod step_by;
mod take;
mod traced;
mod unique;
mod zip;

pub use bridge::IntoStd;
pub use chain::Chain;
pub use chunks::{ChunkBy, Chunks, MapWindows};
pub use cloned::{Cloned, Copied};
pub use cycle::Cycle;
pub use enumerate::Enumerate;
pub use filter::{Filter, FilterMap};
pub use flatten::{FlatMap, Flatten};
pub use fuse::Fuse;
pub use inspect::Inspect;
pub use intersperse::{Intersperse, IntersperseWith};
pub use map::{Map, MapWhile};
pub use peekable::Peekable;
pub use rev::Rev;
pub use scan::Scan;
pub use skip::{Skip, SkipWhile};
pub use step_by::StepBy;
pub use take::{Take, TakeWhile};
pub use traced::Traced;
pub use unique::{DeUnique, DeUniqueBy, Unique, UniqueBy};
pub use zip::Zip;
