//! Configuration of the emptiness policy.
//!
//! The default [`TruthyConfig`] is the plain truthy rule used by
//! [`from_value`](crate::from_value). Each [`Falsy`] kind can be switched off so that, for
//! example, `0` stays present.
//!
//! The crate never reads files or the environment itself. Callers pick the source and hand it
//! over as a figment [`Provider`]:
//!
//! ```
//! use figment::providers::Serialized;
//! use optval::TruthyConfig;
//!
//! let config = TruthyConfig::from_provider(Serialized::defaults(TruthyConfig::strict())).unwrap();
//! assert_eq!(config, TruthyConfig::strict());
//! ```

use crate::{ExtractConfigError, Falsy, Opt, Truthy, absent, present};
use figment::{Figment, Provider};
use serde::{Deserialize, Serialize};

/// Which falsy values route to [`Opt::Absent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TruthyConfig {
    /// Route empty text to absent.
    pub empty_text_is_absent: bool,
    /// Route `false` to absent.
    pub false_is_absent: bool,
    /// Route numeric zero to absent.
    pub zero_is_absent: bool,
    /// Route null-like values to absent.
    pub null_is_absent: bool,
}

impl Default for TruthyConfig {
    fn default() -> Self {
        Self {
            empty_text_is_absent: true,
            false_is_absent: true,
            zero_is_absent: true,
            null_is_absent: true,
        }
    }
}

impl TruthyConfig {
    /// A policy under which only null-like values are absent.
    pub const fn strict() -> Self {
        Self {
            empty_text_is_absent: false,
            false_is_absent: false,
            zero_is_absent: false,
            null_is_absent: true,
        }
    }

    /// Extracts a config from `provider`. Keys missing from `provider` keep their defaults.
    ///
    /// # Errors
    ///
    /// Fails if `provider` cannot produce its data or holds a value of the wrong type.
    pub fn from_provider<T: Provider>(provider: T) -> Result<Self, ExtractConfigError> {
        let figment = Figment::from(provider);
        let config = figment.extract::<Self>()?;
        debug!(?config, "extracted truthy config");
        Ok(config)
    }

    /// Returns `true` if values of the given falsy kind route to absent.
    pub const fn treats_as_absent(&self, kind: Falsy) -> bool {
        match kind {
            Falsy::EmptyText => self.empty_text_is_absent,
            Falsy::False => self.false_is_absent,
            Falsy::Zero => self.zero_is_absent,
            Falsy::Null => self.null_is_absent,
        }
    }

    /// Routes `value` to absent if it is falsy in a way this policy treats as absent.
    pub fn classify<T: Truthy>(&self, value: T) -> Opt<T> {
        match value.falsy_kind() {
            Some(kind) if self.treats_as_absent(kind) => {
                trace!(?kind, "classified falsy value as absent");
                absent()
            }
            Some(kind) => {
                trace!(?kind, "policy keeps falsy value present");
                present(value)
            }
            None => present(value),
        }
    }
}

/// Same as [`from_value`](crate::from_value), under the given policy.
#[inline]
pub fn from_value_with<T: Truthy>(config: &TruthyConfig, value: T) -> Opt<T> {
    config.classify(value)
}
