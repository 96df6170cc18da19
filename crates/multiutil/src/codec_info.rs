// SPDX-License-Identifier: Apache-2.0
use multicodec::Codec;

/// Trait for types that are identified by a multicodec
pub trait CodecInfo {
    /// The codec values of this type are identified with by default
    fn preferred_codec() -> Codec;

    /// The codec of this value
    fn codec(&self) -> Codec;
}
