//! Deferred computations for fallback arguments.
//!
//! Every fallback parameter on [`Opt`](crate::Opt) is generic over [`FnOnce`], so plain closures
//! work directly. [`Lazy`] is the boxed form, for when a thunk has to be stored or passed around
//! before it is used.

/// A boxed zero-argument computation that runs at most once, when called.
pub type Lazy<'a, T> = Box<dyn FnOnce() -> T + 'a>;

/// Defers an already computed `value`.
///
/// ```
/// use optval::{absent, lazy};
///
/// assert_eq!(absent().get_or_else(lazy(2)), 2);
/// ```
#[inline]
pub fn lazy<'a, T: 'a>(value: T) -> Lazy<'a, T> {
    Box::new(move || value)
}
