//! Error types.

/// Returned by [`Opt::get`](crate::Opt::get) when there is no value to get.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("no value to get")]
pub struct EmptyValueError;

/// Failed to extract a [`TruthyConfig`](crate::TruthyConfig) from a figment provider.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("failed to extract optval config: {0}")]
pub struct ExtractConfigError(#[from] pub figment::Error);
