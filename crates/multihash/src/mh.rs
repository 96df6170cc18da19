// SPDX-License-Identifier: Apache-2.0
use crate::{Error, Hasher};
use core::fmt;
use multibase::Base;
use multicodec::Codec;
use multitrait::TryDecodeFrom;
use multiutil::{BaseEncoded, CodecInfo, EncodingInfo, Varbytes, VarbytesIter};

/// the multicodec sigil for multihash
pub const SIGIL: Codec = Codec::Multihash;

/// a multibase encoded Multihash
pub type EncodedMultihash = BaseEncoded<Multihash>;

/// A self-describing digest: the hash function's multicodec followed by the varint length
/// prefixed digest bytes. Values are immutable once built.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Multihash {
    /// hash function codec
    pub(crate) codec: Codec,
    /// the digest
    pub(crate) hash: Vec<u8>,
}

impl Multihash {
    /// The digest bytes
    pub fn digest(&self) -> &[u8] {
        &self.hash
    }

    /// Number of bytes in the binary form
    pub fn encoded_len(&self) -> usize {
        let v: Vec<u8> = self.codec.into();
        v.len() + VarbytesIter::from(self.hash.as_slice()).count()
    }
}

impl CodecInfo for Multihash {
    /// Return that we are a Multihash object
    fn preferred_codec() -> Codec {
        SIGIL
    }

    /// Return the hash function codec
    fn codec(&self) -> Codec {
        self.codec
    }
}

impl EncodingInfo for Multihash {
    fn preferred_encoding() -> Base {
        Base::Base16Lower
    }

    fn encoding(&self) -> Base {
        Self::preferred_encoding()
    }
}

impl From<&Multihash> for Vec<u8> {
    fn from(mh: &Multihash) -> Vec<u8> {
        let mut v: Vec<u8> = mh.codec.into();
        v.extend(VarbytesIter::from(&mh.hash));
        v
    }
}

impl From<Multihash> for Vec<u8> {
    fn from(mh: Multihash) -> Vec<u8> {
        (&mh).into()
    }
}

impl<'a> TryFrom<&'a [u8]> for Multihash {
    type Error = Error;

    fn try_from(s: &'a [u8]) -> Result<Self, Self::Error> {
        let (mh, _) = Self::try_decode_from(s)?;
        Ok(mh)
    }
}

impl<'a> TryDecodeFrom<'a> for Multihash {
    type Error = Error;

    fn try_decode_from(bytes: &'a [u8]) -> Result<(Self, &'a [u8]), Self::Error> {
        // decode the hash function codec
        let (codec, ptr) = Codec::try_decode_from(bytes)?;
        // decode the digest
        let (hash, ptr) = Varbytes::try_decode_from(ptr)?;
        Ok((
            Self {
                codec,
                hash: hash.to_inner(),
            },
            ptr,
        ))
    }
}

impl fmt::Debug for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} - {}", self.codec, hex::encode(&self.hash))
    }
}

impl fmt::Display for Multihash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let encoded = EncodedMultihash::new(self.encoding(), self.clone());
        write!(f, "{}", encoded)
    }
}

/// Multihash builder, either hashing data or wrapping an existing digest
#[derive(Clone, Debug)]
pub struct Builder {
    codec: Codec,
    hash: Vec<u8>,
    base_encoding: Option<Base>,
}

impl Builder {
    /// hash the data with the given hash function
    pub fn new_from_bytes(hasher: &dyn Hasher, data: &[u8]) -> Self {
        Self {
            codec: hasher.codec(),
            hash: hasher.digest(data),
            base_encoding: None,
        }
    }

    /// wrap a digest that was computed elsewhere
    pub fn new_from_digest(codec: Codec, digest: &[u8]) -> Self {
        Self {
            codec,
            hash: digest.to_vec(),
            base_encoding: None,
        }
    }

    /// set the base encoding codec
    pub fn with_base_encoding(mut self, base: Base) -> Self {
        self.base_encoding = Some(base);
        self
    }

    /// build a base encoded multihash
    pub fn build_encoded(&self) -> EncodedMultihash {
        EncodedMultihash::new(
            self.base_encoding
                .unwrap_or_else(Multihash::preferred_encoding),
            self.build(),
        )
    }

    /// build the [Multihash]
    pub fn build(&self) -> Multihash {
        Multihash {
            codec: self.codec,
            hash: self.hash.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Registry;
    use test_log::test;
    use tracing::{span, Level};

    const HELLO_SHA2_256: &str =
        "1220b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";

    #[test]
    fn test_binary_form() {
        let _s = span!(Level::INFO, "test_binary_form").entered();
        let r = Registry::default();
        let mh = Builder::new_from_bytes(r.get(Codec::Sha2256).unwrap(), b"hello world").build();
        let v: Vec<u8> = mh.clone().into();
        assert_eq!(HELLO_SHA2_256, hex::encode(&v));
        assert_eq!(34, mh.encoded_len());
        assert_eq!(mh, Multihash::try_from(v.as_slice()).unwrap());
    }

    #[test]
    fn test_decode_leaves_remainder() {
        let _s = span!(Level::INFO, "test_decode_leaves_remainder").entered();
        let mut v = hex::decode(HELLO_SHA2_256).unwrap();
        v.extend_from_slice(b"tail");
        let (mh, ptr) = Multihash::try_decode_from(&v).unwrap();
        assert_eq!(Codec::Sha2256, mh.codec());
        assert_eq!(32, mh.digest().len());
        assert_eq!(b"tail", ptr);
    }

    #[test]
    fn test_truncated_digest() {
        let _s = span!(Level::INFO, "test_truncated_digest").entered();
        let v = hex::decode(HELLO_SHA2_256).unwrap();
        assert!(matches!(
            Multihash::try_from(&v[..20]),
            Err(Error::Multiutil(multiutil::Error::Insufficient {
                needed: 32,
                remaining: 18
            }))
        ));
    }

    #[test]
    fn test_unknown_hash_codec() {
        let _s = span!(Level::INFO, "test_unknown_hash_codec").entered();
        // keccak-256 parses and keeps its code, hashing with it is up to a registry
        let mh = Multihash::try_from(&[0x1bu8, 0x01, 0x00][..]).unwrap();
        assert_eq!(Codec::Unknown(0x1b), mh.codec());
        assert_eq!(vec![0x1bu8, 0x01, 0x00], Vec::from(&mh));
        assert!(matches!(
            crate::Registry::default().verify(&mh, b""),
            Err(Error::UnsupportedHash(c)) if c.code() == 0x1b
        ));
        // a non-minimal code varint is still rejected
        assert!(matches!(
            Multihash::try_from(&[0x80u8, 0x00, 0x01, 0x00][..]),
            Err(Error::Multicodec(_))
        ));
    }

    #[test]
    fn test_encoded_round_trip() {
        let _s = span!(Level::INFO, "test_encoded_round_trip").entered();
        let mh = Builder::new_from_digest(Codec::Identity, b"abc")
            .with_base_encoding(Base::Base58Btc)
            .build_encoded();
        let s = mh.to_string();
        assert!(s.starts_with('z'));
        assert_eq!(mh, EncodedMultihash::try_from(s.as_str()).unwrap());
    }

    #[test]
    fn test_display() {
        let _s = span!(Level::INFO, "test_display").entered();
        let mh = Builder::new_from_digest(Codec::Identity, b"abc").build();
        assert_eq!("f0003616263", mh.to_string());
    }
}
