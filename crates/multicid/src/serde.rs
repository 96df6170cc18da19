// SPDX-License-Identifier: Apache-2.0
//! Serde support for [Cid]: the text form for human readable formats and the binary form
//! otherwise.
use crate::Cid;
use core::fmt;
use serde::{
    de::{Error as DeError, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

impl Serialize for Cid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_string())
        } else {
            serializer.serialize_bytes(&self.to_bytes())
        }
    }
}

struct CidVisitor;

impl<'de> Visitor<'de> for CidVisitor {
    type Value = Cid;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a cid string or cid bytes")
    }

    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
    where
        E: DeError,
    {
        Cid::try_from(s).map_err(E::custom)
    }

    fn visit_bytes<E>(self, b: &[u8]) -> Result<Self::Value, E>
    where
        E: DeError,
    {
        Cid::try_from(b).map_err(E::custom)
    }

    fn visit_byte_buf<E>(self, b: Vec<u8>) -> Result<Self::Value, E>
    where
        E: DeError,
    {
        self.visit_bytes(&b)
    }
}

impl<'de> Deserialize<'de> for Cid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(CidVisitor)
        } else {
            deserializer.deserialize_bytes(CidVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{cid, Cid, Version};
    use multicodec::Codec;
    use multihash::Registry;
    use test_log::test;
    use tracing::{span, Level};

    fn hello() -> Cid {
        let hash = Registry::default()
            .hash(Codec::Sha2256, b"hello world")
            .unwrap();
        cid::Builder::new(Version::V1)
            .with_target_codec(Codec::Raw)
            .with_hash(&hash)
            .try_build()
            .unwrap()
    }

    #[test]
    fn test_serde_json() {
        let _s = span!(Level::INFO, "test_serde_json").entered();
        let cid = hello();
        let s = serde_json::to_string(&cid).unwrap();
        assert_eq!(
            "\"bafkreifzjut3te2nhyekklss27nh3k72ysco7y32koao5eei66wof36n5e\"",
            s
        );
        assert_eq!(cid, serde_json::from_str::<Cid>(&s).unwrap());
    }

    #[test]
    fn test_serde_cbor() {
        let _s = span!(Level::INFO, "test_serde_cbor").entered();
        let cid = hello();
        let v = serde_cbor::to_vec(&cid).unwrap();
        // cbor byte string of 36 bytes
        assert_eq!(&[0x58, 0x24, 0x01, 0x55, 0x12, 0x20], &v[..6]);
        assert_eq!(cid, serde_cbor::from_slice::<Cid>(&v).unwrap());
    }

    #[test]
    fn test_serde_json_v0() {
        let _s = span!(Level::INFO, "test_serde_json_v0").entered();
        let s = "\"QmaozNR7DZHQK1ZcU9p7QdrshMvXqWK6gpu5rmrkPdT3L4\"";
        let cid: Cid = serde_json::from_str(s).unwrap();
        assert_eq!(Version::V0, cid.version());
        assert_eq!(s, serde_json::to_string(&cid).unwrap());
    }

    #[test]
    fn test_serde_json_invalid() {
        let _s = span!(Level::INFO, "test_serde_json_invalid").entered();
        assert!(serde_json::from_str::<Cid>("\"bafy\"").is_err());
    }
}
