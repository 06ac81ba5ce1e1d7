//! Payload rendering for [`Opt`](crate::Opt)'s `Display` implementation.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Largest integer a float holds exactly, `2^53`.
const MAX_SAFE_FLOAT_INT: f64 = 9_007_199_254_740_992.0;

/// Wrapper that implements [`Display`](fmt::Display) for a payload by rendering it as JSON.
///
/// Integer-valued floats are written without a fraction, so `1.0` renders as `1` and `-0.0` as
/// `0`, matching how JSON text written by a JavaScript engine looks. This applies to floats
/// whose magnitude is below `2^53`; larger floats keep serde_json's exponent form.
pub(crate) struct PayloadDisplay<'a, T: ?Sized> {
    /// The payload to display.
    value: &'a T,
}

impl<'a, T: Serialize + ?Sized> PayloadDisplay<'a, T> {
    /// Creates a new [`Display`](fmt::Display) wrapper for the given payload.
    #[inline]
    pub(crate) fn new(value: &'a T) -> Self {
        Self { value }
    }
}

impl<T: Serialize + ?Sized> fmt::Display for PayloadDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Ok(mut value) = serde_json::to_value(self.value) {
            trim_integral_floats(&mut value);
            return write!(f, "{value}");
        }
        // `Value` can't hold everything the text serializer can, e.g. `u128` above `u64::MAX`.
        match serde_json::to_string(self.value) {
            Ok(json) => f.write_str(&json),
            // JSON has no representation for it, same as `NaN` or a non-string map key.
            Err(err) => {
                debug!(%err, "payload is not representable as JSON");
                f.write_str("null")
            }
        }
    }
}

/// Rewrites every integer-valued float in `value` as an integer.
fn trim_integral_floats(value: &mut Value) {
    match value {
        Value::Number(n) if n.is_f64() => {
            if let Some(x) = n.as_f64()
                && x.fract() == 0.0
                && x.abs() < MAX_SAFE_FLOAT_INT
            {
                *value = Value::from(x as i64);
            }
        }
        Value::Array(values) => values.iter_mut().for_each(trim_integral_floats),
        Value::Object(map) => map.values_mut().for_each(trim_integral_floats),
        _ => {}
    }
}
