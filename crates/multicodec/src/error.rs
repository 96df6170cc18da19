// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors created by this library
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A multitrait error
    #[error(transparent)]
    Multitrait(#[from] multitrait::Error),
    /// The name is not in the codec table
    #[error("Invalid codec name: {0}")]
    InvalidName(String),
}
