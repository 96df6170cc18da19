// SPDX-License-Identifier: Apache-2.0
use multicodec::Codec;

/// Errors created by this library
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A multicodec error
    #[error(transparent)]
    Multicodec(#[from] multicodec::Error),
    /// A multitrait error
    #[error(transparent)]
    Multitrait(#[from] multitrait::Error),
    /// A multiutil error
    #[error(transparent)]
    Multiutil(#[from] multiutil::Error),

    /// The hash function is not in the registry
    #[error("Unsupported hash function: {0}")]
    UnsupportedHash(Codec),
}
