// SPDX-License-Identifier: Apache-2.0
use crate::{CodecError, Error, Ipld};
use core::fmt;
use multicid::Cid;
use multicodec::Codec;
use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

mod cbor;

/// Canonical CBOR with links
pub mod dag_cbor;
pub use dag_cbor::DagCbor;

/// Canonical JSON with links
pub mod dag_json;
pub use dag_json::DagJson;

/// Opaque bytes
pub mod raw;
pub use raw::Raw;

/// A content codec turns [Ipld] values into their one canonical byte encoding and back
pub trait ContentCodec: Send + Sync {
    /// The multicodec naming this content format
    fn codec(&self) -> Codec;

    /// Encode the value, failing if the codec cannot represent it
    fn encode(&self, value: &Ipld) -> Result<Vec<u8>, Error>;

    /// Decode the bytes, failing if they are malformed or not canonical
    fn decode(&self, bytes: &[u8]) -> Result<Ipld, Error>;

    /// Every Cid embedded in the value
    fn links(&self, value: &Ipld) -> BTreeSet<Cid> {
        value.links()
    }
}

/// The set of content codecs a caller trusts, keyed by multicodec. [Registry::new] is empty and
/// [Registry::default] holds raw, dag-cbor and dag-json.
#[derive(Clone)]
pub struct Registry {
    codecs: BTreeMap<Codec, Arc<dyn ContentCodec>>,
}

impl Registry {
    /// An empty registry
    pub fn new() -> Self {
        Self {
            codecs: BTreeMap::new(),
        }
    }

    /// Add a codec, replacing any previous one with the same multicodec
    pub fn with_codec<C: ContentCodec + 'static>(mut self, codec: C) -> Self {
        self.codecs.insert(codec.codec(), Arc::new(codec));
        self
    }

    /// Remove a codec
    pub fn without(mut self, codec: Codec) -> Self {
        self.codecs.remove(&codec);
        self
    }

    /// true if the codec is registered
    pub fn contains(&self, codec: Codec) -> bool {
        self.codecs.contains_key(&codec)
    }

    /// The registered codecs in ascending order
    pub fn codecs(&self) -> impl Iterator<Item = Codec> + '_ {
        self.codecs.keys().copied()
    }

    /// Look up a codec
    pub fn get(&self, codec: Codec) -> Result<&dyn ContentCodec, Error> {
        self.codecs
            .get(&codec)
            .map(|c| &**c)
            .ok_or_else(|| CodecError::UnsupportedCodec(codec).into())
    }

    /// Encode the value with the named codec
    pub fn encode(&self, codec: Codec, value: &Ipld) -> Result<Vec<u8>, Error> {
        self.get(codec)?.encode(value)
    }

    /// Decode the bytes with the named codec
    pub fn decode(&self, codec: Codec, bytes: &[u8]) -> Result<Ipld, Error> {
        self.get(codec)?.decode(bytes)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
            .with_codec(Raw)
            .with_codec(DagCbor)
            .with_codec(DagJson)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.codecs.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;
    use tracing::{span, Level};

    #[test]
    fn test_default() {
        let _s = span!(Level::INFO, "test_default").entered();
        let codecs = Registry::default();
        assert_eq!(
            vec![Codec::Raw, Codec::DagCbor, Codec::DagJson],
            codecs.codecs().collect::<Vec<_>>()
        );
        assert_eq!(Codec::DagJson, codecs.get(Codec::DagJson).unwrap().codec());
    }

    #[test]
    fn test_unsupported() {
        let _s = span!(Level::INFO, "test_unsupported").entered();
        let codecs = Registry::default().without(Codec::DagCbor);
        assert!(!codecs.contains(Codec::DagCbor));
        assert!(matches!(
            codecs.decode(Codec::DagCbor, &[0xf6]),
            Err(Error::Codec(CodecError::UnsupportedCodec(Codec::DagCbor)))
        ));
        assert!(matches!(
            Registry::new().get(Codec::Raw),
            Err(Error::Codec(CodecError::UnsupportedCodec(Codec::Raw)))
        ));
    }

    #[test]
    fn test_encode_decode() {
        let _s = span!(Level::INFO, "test_encode_decode").entered();
        let codecs = Registry::default();
        let v = Ipld::from([("a", Ipld::from(1u8))]);
        let b = codecs.encode(Codec::DagJson, &v).unwrap();
        assert_eq!(b"{\"a\":1}".to_vec(), b);
        assert_eq!(v, codecs.decode(Codec::DagJson, &b).unwrap());
    }
}
