// SPDX-License-Identifier: Apache-2.0

/// Errors created by this library
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A multibase error
    #[error(transparent)]
    Multibase(#[from] multibase::Error),
    /// A multicodec error
    #[error(transparent)]
    Multicodec(#[from] multicodec::Error),
    /// A multitrait error
    #[error(transparent)]
    Multitrait(#[from] multitrait::Error),

    /// A length prefix claims more bytes than remain
    #[error("Insufficient bytes: needed {needed}, only {remaining} remain")]
    Insufficient {
        /// the declared length
        needed: usize,
        /// the bytes actually available
        remaining: usize,
    },
    /// A custom error for callback functions
    #[error("Custom error: {0}")]
    Custom(String),
}

impl Error {
    /// create a custom error
    pub fn custom(s: &str) -> Self {
        Error::Custom(s.to_string())
    }
}
