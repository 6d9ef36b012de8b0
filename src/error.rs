//! Error types shared by the dispatch stages and their adapters.

use thiserror::Error;

/// Failures surfaced by the dispatch core and its input adapters.
///
/// An empty selection or a one-stop route is not an error; those are valid
/// outcomes reported through the returned values.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Malformed input schema or invalid configuration.
    #[error("configuration error in `{field}`: {reason}")]
    Configuration {
        /// Offending field, column, or configuration key.
        field: String,
        /// Human-readable description of the fault.
        reason: String,
    },

    /// A city referenced during route planning is not in the distance table.
    #[error("city `{city}` is not present in the distance table")]
    Lookup {
        /// The unknown city identifier.
        city: String,
    },

    /// Reading an input or configuration source failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DispatchError {
    /// Shorthand for a [`DispatchError::Configuration`].
    pub fn config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`DispatchError::Lookup`].
    pub fn lookup(city: impl Into<String>) -> Self {
        Self::Lookup { city: city.into() }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DispatchError>;
