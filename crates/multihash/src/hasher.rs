// SPDX-License-Identifier: Apache-2.0
use crate::Multihash;
use core::marker::PhantomData;
use digest::Digest;
use multicodec::Codec;

/// A hash function identified by its multicodec
pub trait Hasher: Send + Sync {
    /// The multicodec of the hash function
    fn codec(&self) -> Codec;

    /// The fixed digest length in bytes or `None` if the length follows the input
    fn digest_len(&self) -> Option<usize>;

    /// Hash the data
    fn digest(&self, data: &[u8]) -> Vec<u8>;

    /// Recompute the digest of the data and compare it to the multihash. Not constant time.
    fn verify(&self, mh: &Multihash, data: &[u8]) -> bool {
        mh.codec == self.codec() && mh.hash == self.digest(data)
    }
}

/// Adapts any RustCrypto [Digest] into a [Hasher]
pub struct DigestHasher<D> {
    codec: Codec,
    _d: PhantomData<fn() -> D>,
}

impl<D: Digest> DigestHasher<D> {
    /// Bind the digest implementation to its multicodec
    pub fn new(codec: Codec) -> Self {
        Self {
            codec,
            _d: PhantomData,
        }
    }
}

impl<D: Digest> Hasher for DigestHasher<D> {
    fn codec(&self) -> Codec {
        self.codec
    }

    fn digest_len(&self) -> Option<usize> {
        Some(<D as Digest>::output_size())
    }

    fn digest(&self, data: &[u8]) -> Vec<u8> {
        D::digest(data).to_vec()
    }
}

/// BLAKE3 with the default 32 byte output
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake3Hasher;

impl Hasher for Blake3Hasher {
    fn codec(&self) -> Codec {
        Codec::Blake3
    }

    fn digest_len(&self) -> Option<usize> {
        Some(blake3::OUT_LEN)
    }

    fn digest(&self, data: &[u8]) -> Vec<u8> {
        blake3::hash(data).as_bytes().to_vec()
    }
}

/// The identity "hash": the digest is the data itself
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityHasher;

impl Hasher for IdentityHasher {
    fn codec(&self) -> Codec {
        Codec::Identity
    }

    fn digest_len(&self) -> Option<usize> {
        None
    }

    fn digest(&self, data: &[u8]) -> Vec<u8> {
        data.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;
    use tracing::{span, Level};

    #[test]
    fn test_sha2_256() {
        let _s = span!(Level::INFO, "test_sha2_256").entered();
        let h = DigestHasher::<sha2::Sha256>::new(Codec::Sha2256);
        assert_eq!(Some(32), h.digest_len());
        assert_eq!(
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
            hex::encode(h.digest(b"hello world"))
        );
    }

    #[test]
    fn test_blake3() {
        let _s = span!(Level::INFO, "test_blake3").entered();
        assert_eq!(
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262",
            hex::encode(Blake3Hasher.digest(b""))
        );
    }

    #[test]
    fn test_identity() {
        let _s = span!(Level::INFO, "test_identity").entered();
        assert_eq!(None, IdentityHasher.digest_len());
        assert_eq!(b"abc".to_vec(), IdentityHasher.digest(b"abc"));
    }

    #[test]
    fn test_verify_checks_codec() {
        let _s = span!(Level::INFO, "test_verify_checks_codec").entered();
        let sha = DigestHasher::<sha2::Sha256>::new(Codec::Sha2256);
        let mh = crate::mh::Builder::new_from_digest(Codec::Sha3256, &sha.digest(b"abc")).build();
        assert!(!sha.verify(&mh, b"abc"));
    }
}
