// SPDX-License-Identifier: Apache-2.0
use crate::{codec::Registry, BlockError, ContentCodec, Error, Ipld};
use multicid::{cid, Cid, Version};
use multihash::{mh, Hasher, Registry as Hashers};
use multiutil::CodecInfo;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// A content addressed block: a Cid, the canonical bytes it addresses and the decoded value.
///
/// Blocks only come from [Block::encode], which derives the Cid from the value, or from
/// [Block::create] and [Block::verify], which check untrusted bytes against a claimed Cid. Either
/// way the digest of the bytes matches the Cid, the Cid names the codec that produced the bytes
/// and the value is what those bytes decode to.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    cid: Cid,
    data: Vec<u8>,
    value: Ipld,
}

impl Block {
    /// Encode the value with the codec and address the bytes with a v1 Cid over the hasher's
    /// digest
    pub fn encode(value: Ipld, codec: &dyn ContentCodec, hasher: &dyn Hasher) -> Result<Self, Error> {
        let data = codec.encode(&value)?;
        let hash = mh::Builder::new_from_bytes(hasher, &data).build();
        let cid = cid::Builder::new(Version::V1)
            .with_target_codec(codec.codec())
            .with_hash(&hash)
            .try_build()?;
        trace!("encoded block {} ({} bytes)", cid, data.len());
        Ok(Self { cid, data, value })
    }

    /// Check untrusted bytes against the claimed Cid and decode them. The digest is recomputed
    /// with the hasher, the Cid's codec must be the given codec and the bytes must decode.
    pub fn create(
        cid: Cid,
        data: Vec<u8>,
        codec: &dyn ContentCodec,
        hasher: &dyn Hasher,
    ) -> Result<Self, Error> {
        if !hasher.verify(cid.hash(), &data) {
            debug!("hash mismatch for {}", cid);
            return Err(BlockError::HashMismatch { cid }.into());
        }
        if cid.target_codec() != codec.codec() {
            debug!("codec mismatch for {}", cid);
            return Err(BlockError::CodecMismatch {
                expected: cid.target_codec(),
                actual: codec.codec(),
            }
            .into());
        }
        let value = codec.decode(&data)?;
        Ok(Self { cid, data, value })
    }

    /// [Block::create] with the codec and hash function the Cid names, looked up in the trusted
    /// registries
    pub fn verify(
        cid: Cid,
        data: Vec<u8>,
        codecs: &Registry,
        hashers: &Hashers,
    ) -> Result<Self, Error> {
        let codec = codecs.get(cid.target_codec())?;
        let hasher = hashers.get(cid.hash().codec())?;
        Self::create(cid, data, codec, hasher)
    }

    /// Decode bytes without any Cid or verification. Never use this to accept bytes from an
    /// untrusted source as authentic.
    pub fn decode_only(data: &[u8], codec: &dyn ContentCodec) -> Result<Ipld, Error> {
        codec.decode(data)
    }

    /// The Cid
    pub fn cid(&self) -> &Cid {
        &self.cid
    }

    /// The canonical bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The decoded value
    pub fn value(&self) -> &Ipld {
        &self.value
    }

    /// Every Cid the value links to
    pub fn links(&self) -> BTreeSet<Cid> {
        self.value.links()
    }

    /// Split into the Cid, the bytes and the value
    pub fn into_parts(self) -> (Cid, Vec<u8>, Ipld) {
        (self.cid, self.data, self.value)
    }
}
