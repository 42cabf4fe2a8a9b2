//! Loadable state
//!
//! [`LoadableSlice`] is the shared state machine. With the `native` feature,
//! [`RemoteStore`] drives one from an async [`Source`].

mod error;
mod slice;

#[cfg(feature = "native")]
mod remote;
#[cfg(feature = "native")]
mod sources;

pub use error::{LoadError, LoadErrorKind, COUNTIES_FALLBACK, STATS_FALLBACK};
pub use slice::{LoadToken, LoadableSlice};

#[cfg(feature = "native")]
pub use remote::{RemoteStore, SliceReader, Source};
#[cfg(feature = "native")]
pub use sources::{CountiesSource, IndicatorSource};
