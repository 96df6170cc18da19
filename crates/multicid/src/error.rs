// SPDX-License-Identifier: Apache-2.0
use multicodec::Codec;

/// Errors created by this library
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Cid error
    #[error(transparent)]
    Cid(#[from] CidError),

    /// A multibase error
    #[error(transparent)]
    Multibase(#[from] multibase::Error),
    /// A multicodec error
    #[error(transparent)]
    Multicodec(#[from] multicodec::Error),
    /// A multihash error
    #[error(transparent)]
    Multihash(#[from] multihash::Error),
    /// A multiutil error
    #[error(transparent)]
    Multiutil(#[from] multiutil::Error),
}

/// Cid errors created by this library
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CidError {
    /// A field is truncated, a declared length overruns the input or the version is unknown
    #[error("Malformed CID: {0}")]
    Malformed(String),
    /// A v0 CID must be dag-pb over a 32 byte sha2-256 digest
    #[error("Invalid v0 CID: {codec} content with a {hash} hash of {len} bytes")]
    InvalidV0 {
        /// the requested content codec
        codec: Codec,
        /// the requested hash function
        hash: Codec,
        /// the digest length
        len: usize,
    },
    /// Missing the multihash
    #[error("Missing multihash")]
    MissingHash,
    /// Missing the content codec
    #[error("Missing target codec")]
    MissingTargetCodec,
}

impl CidError {
    pub(crate) fn malformed(e: impl ToString) -> Error {
        CidError::Malformed(e.to_string()).into()
    }
}
