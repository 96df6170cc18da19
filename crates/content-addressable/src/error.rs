// SPDX-License-Identifier: Apache-2.0
use multicid::Cid;
use multicodec::Codec;

/// Errors created by this library
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Codec error
    #[error(transparent)]
    Codec(#[from] CodecError),
    /// Block error
    #[error(transparent)]
    Block(#[from] BlockError),

    /// A multicid error
    #[error(transparent)]
    Multicid(#[from] multicid::Error),
    /// A multicodec error
    #[error(transparent)]
    Multicodec(#[from] multicodec::Error),
    /// A multihash error
    #[error(transparent)]
    Multihash(#[from] multihash::Error),
}

/// Errors from encoding and decoding content
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CodecError {
    /// The codec is not in the registry
    #[error("Unsupported codec: {0}")]
    UnsupportedCodec(Codec),
    /// The bytes are not a valid encoding
    #[error("Decode error: {0}")]
    Decode(String),
    /// The bytes are a valid encoding but not the canonical one
    #[error("Non-canonical encoding: {0}")]
    NonCanonical(String),
    /// The value cannot be represented by the codec
    #[error("Unrepresentable value: {0}")]
    Unrepresentable(String),
}

impl CodecError {
    pub(crate) fn decode(e: impl ToString) -> Error {
        CodecError::Decode(e.to_string()).into()
    }

    pub(crate) fn non_canonical(e: impl ToString) -> Error {
        CodecError::NonCanonical(e.to_string()).into()
    }

    pub(crate) fn unrepresentable(e: impl ToString) -> Error {
        CodecError::Unrepresentable(e.to_string()).into()
    }
}

/// Errors from verifying a block against its Cid
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BlockError {
    /// The recomputed digest differs from the Cid's digest
    #[error("Hash mismatch for {cid}")]
    HashMismatch {
        /// the claimed Cid
        cid: Cid,
    },
    /// The Cid names a different codec than the one decoding the bytes
    #[error("Codec mismatch: cid names {expected}, decoding with {actual}")]
    CodecMismatch {
        /// the codec named by the Cid
        expected: Codec,
        /// the codec given
        actual: Codec,
    },
}
