// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Errors returned when a filter cannot be constructed.

/// Convenience alias for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// An error returned by a Bloom filter constructor.
///
/// Only construction can fail. Once a filter exists, every operation on it succeeds.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A sizing input was out of range, or the inputs together produce a degenerate
    /// bit array.
    #[error("invalid parameter `{name}` = {value}: expected {expected}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The value that was provided or derived.
        value: String,
        /// What the value should have been.
        expected: &'static str,
    },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, value: impl ToString, expected: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            expected,
        }
    }
}
