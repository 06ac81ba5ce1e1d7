//! The [`Opt`] type and its operations.

use crate::{EmptyValueError, Truthy, fmt::PayloadDisplay};
use serde::Serialize;
use std::fmt;

/// A value that is either present or absent.
///
/// The variant is fixed at construction: every operation below is a projection into a new
/// instance or a raw value, and the payload is never mutated in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "an `Opt` does nothing unless it is resolved"]
pub enum Opt<T> {
    /// Holds exactly one value.
    Present(T),
    /// Holds nothing.
    Absent,
}

impl<T> Default for Opt<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Opt<T> {
    /// Wraps `value` unconditionally. Same as [`present`](crate::present).
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Same as [`absent`](crate::absent).
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Returns `true` if there is no value.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if there is a value. Always the negation of [`is_empty`](Self::is_empty).
    #[inline]
    pub const fn is_defined(&self) -> bool {
        !self.is_empty()
    }

    /// Borrows the payload, leaving `self` untouched.
    #[inline]
    pub const fn as_ref(&self) -> Opt<&T> {
        match self {
            Self::Present(value) => Opt::Present(value),
            Self::Absent => Opt::Absent,
        }
    }

    /// Returns the payload, or the result of `fallback` if absent.
    ///
    /// `fallback` is only called when there is no value.
    #[inline]
    pub fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Present(value) => value,
            Self::Absent => fallback(),
        }
    }

    /// Returns the payload, or `None` if absent.
    #[inline]
    pub fn get_or_null(self) -> Option<T> {
        self.into_option()
    }

    /// Returns the payload.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyValueError`] if there is no value. Check [`is_defined`](Self::is_defined)
    /// first, or use [`get_or_else`](Self::get_or_else) or [`get_or_null`](Self::get_or_null)
    /// to avoid the failure.
    #[inline]
    pub fn get(self) -> Result<T, EmptyValueError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => {
                trace!("attempted to get the value of an absent `Opt`");
                Err(EmptyValueError)
            }
        }
    }

    /// Returns `self` if present, otherwise the instance produced by `fallback`.
    ///
    /// `fallback` is only called when there is no value.
    #[inline]
    pub fn or_else<F>(self, fallback: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => fallback(),
        }
    }

    /// Applies `f` to the payload and wraps the result. `f` is not called if absent.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Opt<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Present(value) => Opt::Present(f(value)),
            Self::Absent => Opt::Absent,
        }
    }

    /// Applies `f` to the payload and returns its result as is, without re-wrapping.
    /// `f` is not called if absent.
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Opt<U>
    where
        F: FnOnce(T) -> Opt<U>,
    {
        match self {
            Self::Present(value) => f(value),
            Self::Absent => Opt::Absent,
        }
    }

    /// Keeps the payload only if `predicate` holds for it.
    /// `predicate` is not called if absent.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Present(value) => {
                if predicate(&value) {
                    Self::Present(value)
                } else {
                    Self::Absent
                }
            }
            Self::Absent => Self::Absent,
        }
    }

    /// Converts into the standard [`Option`]. Same as [`From`].
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }
}

impl<T: Truthy> Opt<T> {
    /// Same as [`from_value`](crate::from_value).
    #[inline]
    pub fn from_value(value: T) -> Self {
        crate::from_value(value)
    }
}

impl<T: Serialize> Opt<T> {
    /// Renders `Present(<json>)` or `Absent`.
    ///
    /// Integer-valued floats print without a fraction: `present(1.0)` renders as `Present(1)`
    /// and `present(-0.0)` as `Present(0)`.
    ///
    /// Meant for debugging and readable assertions; the output is not a serialization format.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl<T: Serialize> fmt::Display for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(f, "Present({})", PayloadDisplay::new(value)),
            Self::Absent => f.write_str("Absent"),
        }
    }
}

impl<T> From<Option<T>> for Opt<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Opt<T>> for Option<T> {
    #[inline]
    fn from(value: Opt<T>) -> Self {
        value.into_option()
    }
}
