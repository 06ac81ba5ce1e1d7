//! The emptiness predicate used by [`from_value`](crate::from_value).
//!
//! A value is *falsy* when it is empty text, `false`, numeric zero, or a null-like absence.
//! Every other value is truthy, including empty collections and `NaN`.
//!
//! This conflates "no value" with "a value that happens to be falsy": `from_value(0)` is
//! absent even though `0` is often meaningful. [`TruthyConfig`](crate::TruthyConfig) can narrow
//! the rule per [`Falsy`] kind.

use serde::{Deserialize, Serialize};
use std::{borrow::Cow, rc::Rc, sync::Arc};

/// Why a value is considered falsy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Falsy {
    /// Text of length zero.
    EmptyText,
    /// The boolean `false`.
    False,
    /// Numeric zero, either sign.
    Zero,
    /// A null-like absence such as `None`, `()` or JSON `null`.
    Null,
}

impl Falsy {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 4] = [Self::EmptyText, Self::False, Self::Zero, Self::Null];
}

/// Types that can be classified by the emptiness predicate.
pub trait Truthy {
    /// Returns the reason this value is falsy, or `None` if it is truthy.
    fn falsy_kind(&self) -> Option<Falsy>;

    /// Returns `true` if this value is falsy.
    #[inline]
    fn is_falsy(&self) -> bool {
        self.falsy_kind().is_some()
    }
}

impl Truthy for str {
    #[inline]
    fn falsy_kind(&self) -> Option<Falsy> {
        self.is_empty().then_some(Falsy::EmptyText)
    }
}

impl Truthy for String {
    #[inline]
    fn falsy_kind(&self) -> Option<Falsy> {
        self.as_str().falsy_kind()
    }
}

impl Truthy for Cow<'_, str> {
    #[inline]
    fn falsy_kind(&self) -> Option<Falsy> {
        (**self).falsy_kind()
    }
}

impl Truthy for bool {
    #[inline]
    fn falsy_kind(&self) -> Option<Falsy> {
        (!*self).then_some(Falsy::False)
    }
}

macro_rules! impl_truthy_num {
    ($zero:literal => $($t:ty),+ $(,)?) => {$(
        impl Truthy for $t {
            #[inline]
            fn falsy_kind(&self) -> Option<Falsy> {
                (*self == $zero).then_some(Falsy::Zero)
            }
        }
    )+};
}

impl_truthy_num!(0 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
// `-0.0 == 0.0`, and `NaN` never compares equal to zero.
impl_truthy_num!(0.0 => f32, f64);

impl Truthy for () {
    #[inline]
    fn falsy_kind(&self) -> Option<Falsy> {
        Some(Falsy::Null)
    }
}

impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn falsy_kind(&self) -> Option<Falsy> {
        match self {
            Some(value) => value.falsy_kind(),
            None => Some(Falsy::Null),
        }
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn falsy_kind(&self) -> Option<Falsy> {
        None
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn falsy_kind(&self) -> Option<Falsy> {
        None
    }
}

impl Truthy for serde_json::Value {
    fn falsy_kind(&self) -> Option<Falsy> {
        match self {
            Self::Null => Some(Falsy::Null),
            Self::Bool(b) => b.falsy_kind(),
            Self::Number(n) => n.as_f64().and_then(|n| n.falsy_kind()),
            Self::String(s) => s.falsy_kind(),
            Self::Array(_) | Self::Object(_) => None,
        }
    }
}

macro_rules! impl_truthy_deref {
    ($([$($gen:tt)*] $t:ty),+ $(,)?) => {$(
        impl<$($gen)*> Truthy for $t {
            #[inline]
            fn falsy_kind(&self) -> Option<Falsy> {
                (**self).falsy_kind()
            }
        }
    )+};
}

impl_truthy_deref! {
    [T: Truthy + ?Sized] &T,
    [T: Truthy + ?Sized] &mut T,
    [T: Truthy + ?Sized] Box<T>,
    [T: Truthy + ?Sized] Rc<T>,
    [T: Truthy + ?Sized] Arc<T>,
}
