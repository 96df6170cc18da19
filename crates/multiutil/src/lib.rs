// SPDX-License-Identifier: Apache-2.0
//! multiutil
#![warn(missing_docs)]
#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]

/// BaseEncoded smart pointer
pub mod base_encoded;
pub use base_encoded::BaseEncoded;

/// BaseEncoder trait and impls
pub mod base_encoder;
pub use base_encoder::{Base58Encoder, BaseEncoder, DetectedEncoder, MultibaseEncoder};

/// Base related utility functions / types
pub mod base_util;
pub use base_util::{base_name, BaseIter};

/// CodecInfo trait
pub mod codec_info;
pub use codec_info::CodecInfo;

/// EncodingInfo trait
pub mod encoding_info;
pub use encoding_info::EncodingInfo;

/// Errors generated from the implementations
pub mod error;
pub use error::Error;

/// Varbytes type for varint length prefixed byte strings
pub mod varbytes;
pub use varbytes::{EncodedVarbytes, Varbytes, VarbytesIter};

/// one-stop shop for all exported symbols
pub mod prelude {
    pub use super::{
        base_encoded::*, base_encoder::*, base_util::*, codec_info::*, encoding_info::*, error::*,
        varbytes::*,
    };

    /// re-exports
    pub use multibase::Base;
    pub use multicodec::Codec;
}

#[cfg(test)]
mod test {
    use super::prelude::*;
    use test_log::test;
    use tracing::{span, Level};

    #[derive(Clone, Debug, PartialEq)]
    struct Digest([u8; 2]);
    type EncodedDigest = BaseEncoded<Digest>;
    type Base58EncodedDigest = BaseEncoded<Digest, Base58Encoder>;
    type DetectedDigest = BaseEncoded<Digest, DetectedEncoder>;

    impl Digest {
        pub fn encoded_default() -> EncodedDigest {
            EncodedDigest::new(Self::preferred_encoding(), Self::default())
        }

        pub fn first(&self) -> u8 {
            self.0[0]
        }
    }

    impl Default for Digest {
        fn default() -> Self {
            Self([0x42, 0xAA])
        }
    }

    impl EncodingInfo for Digest {
        fn preferred_encoding() -> Base {
            Base::Base16Lower
        }

        fn encoding(&self) -> Base {
            Self::preferred_encoding()
        }
    }

    impl CodecInfo for Digest {
        fn preferred_codec() -> Codec {
            Codec::Identity
        }

        fn codec(&self) -> Codec {
            Self::preferred_codec()
        }
    }

    impl<'a> TryFrom<&'a [u8]> for Digest {
        type Error = Error;

        fn try_from(s: &'a [u8]) -> Result<Self, Error> {
            match s {
                [a, b] => Ok(Self([*a, *b])),
                _ => Err(Error::custom("digest must be exactly two bytes")),
            }
        }
    }

    impl From<Digest> for Vec<u8> {
        fn from(d: Digest) -> Vec<u8> {
            d.0.to_vec()
        }
    }

    #[test]
    fn test_display() {
        let _s = span!(Level::INFO, "test_display").entered();
        assert_eq!("f42aa".to_string(), Digest::encoded_default().to_string());
    }

    #[test]
    fn test_legacy_display() {
        let _s = span!(Level::INFO, "test_legacy_display").entered();
        let d = Base58EncodedDigest::new(Base::Base32Lower, Digest::default());
        assert_eq!(Base::Base58Btc, d.encoding());
        assert_eq!("65F".to_string(), d.to_string());
    }

    #[test]
    fn test_string_round_trip() {
        let _s = span!(Level::INFO, "test_string_round_trip").entered();
        for base in BaseIter::default() {
            let d1 = EncodedDigest::new(base, Digest::default());
            let s = d1.to_string();
            let d2 = EncodedDigest::try_from(s.as_str()).unwrap();
            assert_eq!(d1, d2);
            assert_eq!(base, d2.encoding());
        }
    }

    #[test]
    fn test_detected_always_generates_multibase() {
        let _s = span!(Level::INFO, "test_detected_always_generates_multibase").entered();
        let d = DetectedDigest::new(Base::Base58Btc, Digest::default());
        assert_eq!("z65F", d.to_string());
    }

    #[test]
    fn test_wrong_length_rejected() {
        let _s = span!(Level::INFO, "test_wrong_length_rejected").entered();
        assert!(EncodedDigest::try_from("f42aa00").is_err());
    }

    #[test]
    fn test_smart_pointer() {
        let _s = span!(Level::INFO, "test_smart_pointer").entered();
        let d = Digest::encoded_default();
        assert_eq!(0x42, d.first());
        assert_eq!(Codec::Identity, d.codec());
    }
}
