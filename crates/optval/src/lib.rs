//! A value that is either present or absent.
//!
//! [`Opt`] is a closed sum type with two variants, [`Opt::Present`] and [`Opt::Absent`], and a
//! small algebra of projections over it: [`map`](Opt::map), [`flat_map`](Opt::flat_map),
//! [`filter`](Opt::filter) and lazy fallback resolution through
//! [`get_or_else`](Opt::get_or_else) and [`or_else`](Opt::or_else).
//!
//! Instances are built with the free constructors:
//!
//! - [`present`] always wraps its argument, including `false`, `0` and `""`.
//! - [`absent`] always produces the empty variant.
//! - [`from_value`] applies the *truthy* rule: empty text, `false`, numeric zero and null-like
//!   values route to [`Opt::Absent`], everything else to [`Opt::Present`].
//!
//! ```
//! use optval::{from_value, present, absent};
//!
//! let len = from_value("").map(|s: &str| s.len() as i64).get_or_else(|| -1);
//! assert_eq!(len, -1);
//!
//! let shout = from_value("hi")
//!     .flat_map(|s| if s.len() > 1 { present(s.to_uppercase()) } else { absent() })
//!     .get_or_null();
//! assert_eq!(shout.as_deref(), Some("HI"));
//! ```
//!
//! The truthy rule treats meaningful values such as `0` and `false` as absent. Use [`present`]
//! when such values must survive, or classify through a [`TruthyConfig`] that narrows the rule.

#[macro_use]
extern crate tracing;

pub mod config;
pub use config::{TruthyConfig, from_value_with};

pub mod error;
pub use error::{EmptyValueError, ExtractConfigError};

mod fmt;

pub mod lazy;
pub use lazy::{Lazy, lazy};

mod opt;
pub use opt::Opt;

pub mod truthy;
pub use truthy::{Falsy, Truthy};

/// Wraps `value` in [`Opt::Present`], whatever the value is.
#[inline]
pub const fn present<T>(value: T) -> Opt<T> {
    Opt::Present(value)
}

/// Returns [`Opt::Absent`].
#[inline]
pub const fn absent<T>() -> Opt<T> {
    Opt::Absent
}

/// Routes `value` to [`Opt::Absent`] when it is falsy, and to [`Opt::Present`] otherwise.
///
/// See [`Truthy`] for what counts as falsy for each type.
#[inline]
pub fn from_value<T: Truthy>(value: T) -> Opt<T> {
    if value.is_falsy() { absent() } else { present(value) }
}
