// SPDX-License-Identifier: Apache-2.0
use crate::Error;
use multibase::Base;

/// Length of a naked (legacy) base58btc encoded sha2-256 multihash
const LEGACY_LEN: usize = 46;

/// Prefix shared by every naked (legacy) base58btc encoded sha2-256 multihash
const LEGACY_PREFIX: &str = "Qm";

/// Trait for the strategy a [crate::BaseEncoded] uses to go to and from text
pub trait BaseEncoder {
    /// The encoding this strategy generates, given the value type's preferred encoding
    fn preferred_encoding(base: Base) -> Base;

    /// Encode the bytes as text
    fn to_base_encoded(base: Base, b: &[u8]) -> String;

    /// Decode the text, returning the detected encoding and the bytes
    fn from_base_encoded(s: &str) -> Result<(Base, Vec<u8>), Error>;
}

/// Encoder for multibase prefixed strings
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MultibaseEncoder;

impl BaseEncoder for MultibaseEncoder {
    fn preferred_encoding(base: Base) -> Base {
        base
    }

    fn to_base_encoded(base: Base, b: &[u8]) -> String {
        multibase::encode(base, b)
    }

    fn from_base_encoded(s: &str) -> Result<(Base, Vec<u8>), Error> {
        Ok(multibase::decode(s)?)
    }
}

/// Encoder for naked base58btc strings without a multibase prefix
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Base58Encoder;

impl BaseEncoder for Base58Encoder {
    fn preferred_encoding(_base: Base) -> Base {
        Base::Base58Btc
    }

    fn to_base_encoded(_base: Base, b: &[u8]) -> String {
        Base::Base58Btc.encode(b)
    }

    fn from_base_encoded(s: &str) -> Result<(Base, Vec<u8>), Error> {
        Ok((Base::Base58Btc, Base::Base58Btc.decode(s)?))
    }
}

/// Encoder that accepts both naked legacy base58btc strings and multibase strings but always
/// generates multibase strings (i.e. liberal in what we accept, strict in what we generate).
///
/// A string is naked legacy base58btc when it is exactly 46 characters long and begins with
/// `Qm`, the shape of every base58btc encoded sha2-256 multihash.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DetectedEncoder;

impl DetectedEncoder {
    /// true if the string has the naked legacy shape
    pub fn is_legacy(s: &str) -> bool {
        s.len() == LEGACY_LEN && s.starts_with(LEGACY_PREFIX)
    }
}

impl BaseEncoder for DetectedEncoder {
    fn preferred_encoding(base: Base) -> Base {
        base
    }

    fn to_base_encoded(base: Base, b: &[u8]) -> String {
        MultibaseEncoder::to_base_encoded(base, b)
    }

    fn from_base_encoded(s: &str) -> Result<(Base, Vec<u8>), Error> {
        if Self::is_legacy(s) {
            Base58Encoder::from_base_encoded(s)
        } else {
            MultibaseEncoder::from_base_encoded(s)
        }
    }
}
