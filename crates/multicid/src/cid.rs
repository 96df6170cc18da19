// SPDX-License-Identifier: Apache-2.0
use crate::{error::CidError, Error};
use core::{fmt, str::FromStr};
use multibase::Base;
use multicodec::Codec;
use multihash::Multihash;
use multitrait::TryDecodeFrom;
use multiutil::{Base58Encoder, BaseEncoded, BaseEncoder, CodecInfo, DetectedEncoder, EncodingInfo};

/// the Cidv1 multicodec sigil, which is also the version varint of the binary form
pub const SIGIL: Codec = Codec::Cidv1;

/// the only content codec a v0 Cid may carry
pub const V0_CODEC: Codec = Codec::DagPb;

/// the only hash function a v0 Cid may carry
pub const V0_HASH: Codec = Codec::Sha2256;

/// the digest length of a v0 Cid
pub const V0_DIGEST_LEN: usize = 32;

/// the first two bytes of every v0 Cid: sha2-256 code and 32 byte digest length
const V0_LEAD: [u8; 2] = [0x12, 0x20];

/// a multibase encoded Cid that can decode from any number of encodings, including naked legacy
/// base58btc, but always encodes as multibase
pub type EncodedCid = BaseEncoded<Cid, DetectedEncoder>;

/// The Cid format versions
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Version {
    /// legacy: a bare sha2-256 multihash addressing dag-pb content
    V0,
    /// general: explicit version, content codec and multihash
    V1,
}

impl From<Version> for u64 {
    fn from(v: Version) -> u64 {
        match v {
            Version::V0 => 0,
            Version::V1 => 1,
        }
    }
}

/// A content identifier: a reference to a byte sequence by its content codec and multihash.
///
/// The variants are closed; equality, ordering and hashing are structural over the fields. A v0
/// and a v1 Cid never compare equal even when they carry the same multihash, use
/// [Cid::into_v1] to normalize explicitly.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cid {
    /// legacy v0 Cid
    V0(Multihash),
    /// v1 Cid
    V1 {
        /// the codec of the addressed content
        target_codec: Codec,
        /// the multihash of the addressed content
        hash: Multihash,
    },
}

impl Cid {
    /// The format version
    pub fn version(&self) -> Version {
        match self {
            Cid::V0(_) => Version::V0,
            Cid::V1 { .. } => Version::V1,
        }
    }

    /// The codec of the addressed content
    pub fn target_codec(&self) -> Codec {
        match self {
            Cid::V0(_) => V0_CODEC,
            Cid::V1 { target_codec, .. } => *target_codec,
        }
    }

    /// The multihash of the addressed content
    pub fn hash(&self) -> &Multihash {
        match self {
            Cid::V0(hash) => hash,
            Cid::V1 { hash, .. } => hash,
        }
    }

    /// The v1 Cid addressing the same content
    pub fn into_v1(self) -> Self {
        match self {
            Cid::V0(hash) => Cid::V1 {
                target_codec: V0_CODEC,
                hash,
            },
            v1 => v1,
        }
    }

    /// The binary form
    pub fn to_bytes(&self) -> Vec<u8> {
        self.into()
    }

    /// Create an encoded Cid with the default encoding
    pub fn to_encoded(self) -> EncodedCid {
        EncodedCid::new(self.encoding(), self)
    }

    /// Create an encoded Cid with a specific encoding
    pub fn to_encoded_with(self, encoding: Base) -> EncodedCid {
        EncodedCid::new(encoding, self)
    }

    fn check_v0(codec: Codec, hash: &Multihash) -> Result<(), Error> {
        if codec != V0_CODEC || hash.codec() != V0_HASH || hash.digest().len() != V0_DIGEST_LEN {
            return Err(CidError::InvalidV0 {
                codec,
                hash: hash.codec(),
                len: hash.digest().len(),
            }
            .into());
        }
        Ok(())
    }
}

impl CodecInfo for Cid {
    fn preferred_codec() -> Codec {
        SIGIL
    }

    fn codec(&self) -> Codec {
        Self::preferred_codec()
    }
}

impl EncodingInfo for Cid {
    fn preferred_encoding() -> Base {
        Base::Base32Lower
    }

    fn encoding(&self) -> Base {
        match self {
            Cid::V0(_) => Base::Base58Btc,
            Cid::V1 { .. } => Self::preferred_encoding(),
        }
    }
}

impl From<&Cid> for Vec<u8> {
    fn from(cid: &Cid) -> Vec<u8> {
        match cid {
            Cid::V0(hash) => hash.into(),
            Cid::V1 { target_codec, hash } => {
                let mut v: Vec<u8> = SIGIL.into();
                v.append(&mut (*target_codec).into());
                v.append(&mut hash.into());
                v
            }
        }
    }
}

impl From<Cid> for Vec<u8> {
    fn from(cid: Cid) -> Vec<u8> {
        (&cid).into()
    }
}

impl<'a> TryFrom<&'a [u8]> for Cid {
    type Error = Error;

    fn try_from(s: &'a [u8]) -> Result<Self, Self::Error> {
        let (cid, ptr) = Self::try_decode_from(s)?;
        if !ptr.is_empty() {
            return Err(CidError::malformed(format!(
                "{} trailing bytes",
                ptr.len()
            )));
        }
        Ok(cid)
    }
}

impl<'a> TryDecodeFrom<'a> for Cid {
    type Error = Error;

    fn try_decode_from(bytes: &'a [u8]) -> Result<(Self, &'a [u8]), Self::Error> {
        // the legacy shape is a bare sha2-256 multihash
        if bytes.starts_with(&V0_LEAD) {
            let (hash, ptr) = Multihash::try_decode_from(bytes).map_err(CidError::malformed)?;
            return Ok((Cid::V0(hash), ptr));
        }
        // decode the version
        let (version, ptr) = u64::try_decode_from(bytes).map_err(CidError::malformed)?;
        if version != u64::from(Version::V1) {
            return Err(CidError::malformed(format!("unsupported version {}", version)));
        }
        // decode the content codec
        let (code, ptr) = u64::try_decode_from(ptr).map_err(CidError::malformed)?;
        let target_codec = Codec::from(code);
        // decode the multihash
        let (hash, ptr) = Multihash::try_decode_from(ptr).map_err(CidError::malformed)?;
        Ok((Cid::V1 { target_codec, hash }, ptr))
    }
}

impl<'a> TryFrom<&'a str> for Cid {
    type Error = Error;

    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        if DetectedEncoder::is_legacy(s) {
            let (_, v) = Base58Encoder::from_base_encoded(s)?;
            return match Self::try_from(v.as_slice())? {
                cid @ Cid::V0(_) => Ok(cid),
                Cid::V1 { .. } => Err(CidError::malformed("naked base58 string is not a v0 cid")),
            };
        }
        let (_, v) = multibase::decode(s)?;
        Self::try_from(v.as_slice())
    }
}

impl FromStr for Cid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl fmt::Debug for Cid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cid::V0(hash) => write!(f, "{:?} - {:?} - {:?}", Version::V0, V0_CODEC, hash),
            Cid::V1 { target_codec, hash } => {
                write!(f, "{:?} - {:?} - {:?}", SIGIL, target_codec, hash)
            }
        }
    }
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let v: Vec<u8> = self.into();
        match self {
            Cid::V0(_) => write!(f, "{}", Base58Encoder::to_base_encoded(Base::Base58Btc, &v)),
            Cid::V1 { .. } => write!(f, "{}", multibase::encode(self.encoding(), &v)),
        }
    }
}

/// Builder for [Cid] values
#[derive(Clone, Debug)]
pub struct Builder {
    version: Version,
    target_codec: Option<Codec>,
    hash: Option<Multihash>,
    base_encoding: Option<Base>,
}

impl Builder {
    /// start building a Cid of the given version
    pub fn new(version: Version) -> Self {
        Self {
            version,
            target_codec: None,
            hash: None,
            base_encoding: None,
        }
    }

    /// set the codec of the addressed content
    pub fn with_target_codec(mut self, codec: Codec) -> Self {
        self.target_codec = Some(codec);
        self
    }

    /// set the multihash of the addressed content
    pub fn with_hash(mut self, hash: &Multihash) -> Self {
        self.hash = Some(hash.clone());
        self
    }

    /// set the base encoding used by [Builder::try_build_encoded]
    pub fn with_base_encoding(mut self, base: Base) -> Self {
        self.base_encoding = Some(base);
        self
    }

    /// build a base encoded Cid
    pub fn try_build_encoded(self) -> Result<EncodedCid, Error> {
        let base = self.base_encoding;
        let cid = self.try_build()?;
        Ok(EncodedCid::new(base.unwrap_or_else(|| cid.encoding()), cid))
    }

    /// build the Cid, a v0 Cid must be dag-pb over a 32 byte sha2-256 digest
    pub fn try_build(self) -> Result<Cid, Error> {
        let hash = self.hash.ok_or(CidError::MissingHash)?;
        match self.version {
            Version::V0 => {
                Cid::check_v0(self.target_codec.unwrap_or(V0_CODEC), &hash)?;
                Ok(Cid::V0(hash))
            }
            Version::V1 => Ok(Cid::V1 {
                target_codec: self.target_codec.ok_or(CidError::MissingTargetCodec)?,
                hash,
            }),
        }
    }
}
