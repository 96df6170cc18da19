// SPDX-License-Identifier: Apache-2.0
//! Serde support for [Multihash]: multibase text for human readable formats and the binary
//! form otherwise.
use crate::{EncodedMultihash, Multihash};
use core::fmt;
use serde::{
    de::{Error as DeError, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

impl Serialize for Multihash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            let v: Vec<u8> = self.into();
            serializer.serialize_bytes(&v)
        }
    }
}

struct MultihashVisitor;

impl<'de> Visitor<'de> for MultihashVisitor {
    type Value = Multihash;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a multibase encoded multihash or multihash bytes")
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: DeError,
    {
        EncodedMultihash::try_from(s)
            .map(|emh| emh.to_inner())
            .map_err(E::custom)
    }

    fn visit_bytes<E>(self, b: &[u8]) -> Result<Self::Value, E>
    where
        E: DeError,
    {
        Multihash::try_from(b).map_err(E::custom)
    }

    fn visit_byte_buf<E>(self, b: Vec<u8>) -> Result<Self::Value, E>
    where
        E: DeError,
    {
        self.visit_bytes(&b)
    }
}

impl<'de> Deserialize<'de> for Multihash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(MultihashVisitor)
        } else {
            deserializer.deserialize_bytes(MultihashVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Multihash, Registry};
    use multicodec::Codec;
    use test_log::test;
    use tracing::{span, Level};

    fn hello() -> Multihash {
        Registry::default()
            .hash(Codec::Sha2256, b"hello world")
            .unwrap()
    }

    #[test]
    fn test_serde_json() {
        let _s = span!(Level::INFO, "test_serde_json").entered();
        let mh = hello();
        let s = serde_json::to_string(&mh).unwrap();
        assert_eq!(
            "\"f1220b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9\"",
            s
        );
        assert_eq!(mh, serde_json::from_str::<Multihash>(&s).unwrap());
    }

    #[test]
    fn test_serde_cbor() {
        let _s = span!(Level::INFO, "test_serde_cbor").entered();
        let mh = hello();
        let v = serde_cbor::to_vec(&mh).unwrap();
        assert_eq!(&[0x58, 0x22, 0x12, 0x20], &v[..4]);
        assert_eq!(mh, serde_cbor::from_slice::<Multihash>(&v).unwrap());
    }
}
