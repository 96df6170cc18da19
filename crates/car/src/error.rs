// SPDX-License-Identifier: Apache-2.0

/// Errors created by this library
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Container error
    #[error(transparent)]
    Car(#[from] CarError),
    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A content-addressable error
    #[error(transparent)]
    ContentAddressable(#[from] content_addressable::Error),
    /// A multicid error
    #[error(transparent)]
    Multicid(#[from] multicid::Error),
}

/// Container format errors
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CarError {
    /// The header frame is missing, does not decode or has the wrong version
    #[error("Malformed header: {0}")]
    MalformedHeader(String),
    /// The input ended inside a frame
    #[error("Truncated record")]
    TruncatedRecord,
    /// The writer is closed
    #[error("Write after close")]
    WriteAfterClose,
    /// A frame declares more bytes than the reader accepts
    #[error("Frame of {size} bytes exceeds the {max} byte limit")]
    FrameTooLarge {
        /// the declared frame size
        size: u64,
        /// the configured limit
        max: u64,
    },
    /// A frame length is not a valid unsigned varint
    #[error("Invalid frame length: {0}")]
    InvalidVarint(String),
}

impl CarError {
    pub(crate) fn malformed_header(e: impl ToString) -> Error {
        CarError::MalformedHeader(e.to_string()).into()
    }
}
