// SPDX-License-Identifier: Apache-2.0

/// Errors created by this library
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The varint was truncated, overflowed or was not minimally encoded
    #[error(transparent)]
    UnsignedVarintDecode(#[from] unsigned_varint::decode::Error),
    /// The decoded value does not fit in the target type
    #[error("Varint value {0} is out of range")]
    OutOfRange(u64),
}
