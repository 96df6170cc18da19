// SPDX-License-Identifier: Apache-2.0
use crate::{
    hasher::{Blake3Hasher, DigestHasher, IdentityHasher},
    Error, Hasher, Multihash,
};
use core::fmt;
use multicodec::Codec;
use std::{collections::BTreeMap, sync::Arc};
use tracing::{debug, trace};

/// The set of hash functions a caller trusts, keyed by multicodec. Nothing is registered
/// implicitly: [Registry::new] is empty and [Registry::default] holds the built-in hashers.
#[derive(Clone)]
pub struct Registry {
    hashers: BTreeMap<Codec, Arc<dyn Hasher>>,
}

impl Registry {
    /// An empty registry
    pub fn new() -> Self {
        Self {
            hashers: BTreeMap::new(),
        }
    }

    /// Add a hash function, replacing any previous one with the same codec
    pub fn with_hasher<H: Hasher + 'static>(mut self, hasher: H) -> Self {
        self.hashers.insert(hasher.codec(), Arc::new(hasher));
        self
    }

    /// Remove a hash function
    pub fn without(mut self, codec: Codec) -> Self {
        self.hashers.remove(&codec);
        self
    }

    /// true if the hash function is registered
    pub fn contains(&self, codec: Codec) -> bool {
        self.hashers.contains_key(&codec)
    }

    /// The registered hash function codecs in ascending order
    pub fn codecs(&self) -> impl Iterator<Item = Codec> + '_ {
        self.hashers.keys().copied()
    }

    /// Look up a hash function
    pub fn get(&self, codec: Codec) -> Result<&dyn Hasher, Error> {
        self.hashers
            .get(&codec)
            .map(|h| &**h)
            .ok_or(Error::UnsupportedHash(codec))
    }

    /// Hash the data with the named hash function
    pub fn hash(&self, codec: Codec, data: &[u8]) -> Result<Multihash, Error> {
        let hasher = self.get(codec)?;
        trace!("hashing {} bytes with {}", data.len(), codec);
        Ok(Multihash {
            codec,
            hash: hasher.digest(data),
        })
    }

    /// Recompute the digest of the data with the multihash's hash function and compare
    pub fn verify(&self, mh: &Multihash, data: &[u8]) -> Result<bool, Error> {
        let ok = self.get(mh.codec)?.verify(mh, data);
        if !ok {
            debug!("{} digest mismatch over {} bytes", mh.codec, data.len());
        }
        Ok(ok)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
            .with_hasher(IdentityHasher)
            .with_hasher(DigestHasher::<sha1::Sha1>::new(Codec::Sha1))
            .with_hasher(DigestHasher::<sha2::Sha256>::new(Codec::Sha2256))
            .with_hasher(DigestHasher::<sha2::Sha384>::new(Codec::Sha2384))
            .with_hasher(DigestHasher::<sha2::Sha512>::new(Codec::Sha2512))
            .with_hasher(DigestHasher::<sha3::Sha3_224>::new(Codec::Sha3224))
            .with_hasher(DigestHasher::<sha3::Sha3_256>::new(Codec::Sha3256))
            .with_hasher(DigestHasher::<sha3::Sha3_384>::new(Codec::Sha3384))
            .with_hasher(DigestHasher::<sha3::Sha3_512>::new(Codec::Sha3512))
            .with_hasher(DigestHasher::<blake2::Blake2b<typenum::U32>>::new(
                Codec::Blake2B256,
            ))
            .with_hasher(DigestHasher::<blake2::Blake2b512>::new(Codec::Blake2B512))
            .with_hasher(DigestHasher::<blake2::Blake2s256>::new(Codec::Blake2S256))
            .with_hasher(Blake3Hasher)
            .with_hasher(DigestHasher::<md5::Md5>::new(Codec::Md5))
            .with_hasher(DigestHasher::<ripemd::Ripemd160>::new(Codec::Ripemd160))
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.hashers.keys()).finish()
    }
}
