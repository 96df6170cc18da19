// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::Error;
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};
use multitrait::{EncodeInto, TryDecodeFrom};

macro_rules! build_codec_enum {
    ( $( $(#[$attr:meta])* $name:literal => $code:literal => $codec:ident, )* ) => {
        /// A multicodec code. The named variants are the part of the multicodec table this
        /// library gives names to; every other code is carried as [Codec::Unknown]. Equality,
        /// ordering and hashing all go by [Codec::code], so `Unknown(0x55)` equals `Raw`.
        #[derive(Clone, Copy, Debug)]
        #[non_exhaustive]
        pub enum Codec {
            $( $(#[$attr])* $codec, )*
            /// a code without a name in this library's table
            Unknown(u64),
        }

        impl Codec {
            /// The numeric multicodec code
            pub const fn code(&self) -> u64 {
                match self {
                    $( Self::$codec => $code, )*
                    Self::Unknown(code) => *code,
                }
            }

            /// The canonical multicodec table name, "unknown" for unnamed codes
            pub const fn name(&self) -> &'static str {
                match self.normalized() {
                    $( Self::$codec => $name, )*
                    Self::Unknown(_) => "unknown",
                }
            }

            /// True when the code has a name in the table
            pub const fn is_known(&self) -> bool {
                !matches!(self.normalized(), Self::Unknown(_))
            }

            /// Map an `Unknown` holding a named code to the named variant
            const fn normalized(&self) -> Self {
                match self {
                    Self::Unknown(code) => Self::from_code(*code),
                    other => *other,
                }
            }

            const fn from_code(code: u64) -> Self {
                match code {
                    $( $code => Self::$codec, )*
                    _ => Self::Unknown(code),
                }
            }
        }

        impl From<u64> for Codec {
            fn from(code: u64) -> Self {
                Self::from_code(code)
            }
        }

        impl FromStr for Codec {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $name => Ok(Self::$codec), )*
                    _ => Err(Error::InvalidName(s.to_string())),
                }
            }
        }
    };
}

build_codec_enum! {
    /// raw binary, also the identity hash function
    "identity" => 0x00 => Identity,
    /// CIDv1
    "cidv1" => 0x01 => Cidv1,
    /// CIDv2
    "cidv2" => 0x02 => Cidv2,
    /// CIDv3
    "cidv3" => 0x03 => Cidv3,
    /// SHA1 hash
    "sha1" => 0x11 => Sha1,
    /// SHA2-256 hash
    "sha2-256" => 0x12 => Sha2256,
    /// SHA2-512 hash
    "sha2-512" => 0x13 => Sha2512,
    /// SHA3-512 hash
    "sha3-512" => 0x14 => Sha3512,
    /// SHA3-384 hash
    "sha3-384" => 0x15 => Sha3384,
    /// SHA3-256 hash
    "sha3-256" => 0x16 => Sha3256,
    /// SHA3-224 hash
    "sha3-224" => 0x17 => Sha3224,
    /// BLAKE3 hash
    "blake3" => 0x1e => Blake3,
    /// SHA2-384 hash
    "sha2-384" => 0x20 => Sha2384,
    /// self-describing multihash
    "multihash" => 0x31 => Multihash,
    /// CBOR
    "cbor" => 0x51 => Cbor,
    /// raw binary
    "raw" => 0x55 => Raw,
    /// MerkleDAG protobuf
    "dag-pb" => 0x70 => DagPb,
    /// MerkleDAG cbor
    "dag-cbor" => 0x71 => DagCbor,
    /// libp2p public key
    "libp2p-key" => 0x72 => Libp2pKey,
    /// raw git object
    "git-raw" => 0x78 => GitRaw,
    /// MD5 hash
    "md5" => 0xd5 => Md5,
    /// MerkleDAG json
    "dag-json" => 0x0129 => DagJson,
    /// JSON (UTF-8-encoded)
    "json" => 0x0200 => Json,
    /// Content Addressable aRchive
    "car" => 0x0202 => Car,
    /// RIPEMD-160 hash
    "ripemd-160" => 0x1053 => Ripemd160,
    /// BLAKE2b-256 hash
    "blake2b-256" => 0xb220 => Blake2B256,
    /// BLAKE2b-512 hash
    "blake2b-512" => 0xb240 => Blake2B512,
    /// BLAKE2s-256 hash
    "blake2s-256" => 0xb260 => Blake2S256,
}

impl PartialEq for Codec {
    fn eq(&self, other: &Self) -> bool {
        self.code() == other.code()
    }
}

impl Eq for Codec {}

impl Hash for Codec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code().hash(state);
    }
}

impl PartialOrd for Codec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Codec {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code().cmp(&other.code())
    }
}

impl From<Codec> for u64 {
    fn from(codec: Codec) -> u64 {
        codec.code()
    }
}

impl From<Codec> for Vec<u8> {
    fn from(codec: Codec) -> Vec<u8> {
        codec.encode_into()
    }
}

impl EncodeInto for Codec {
    fn encode_into(&self) -> Vec<u8> {
        self.code().encode_into()
    }
}

impl<'a> TryFrom<&'a [u8]> for Codec {
    type Error = Error;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        let (codec, _) = Self::try_decode_from(bytes)?;
        Ok(codec)
    }
}

impl<'a> TryDecodeFrom<'a> for Codec {
    type Error = Error;

    fn try_decode_from(bytes: &'a [u8]) -> Result<(Self, &'a [u8]), Self::Error> {
        let (code, ptr) = u64::try_decode_from(bytes)?;
        Ok((Self::from(code), ptr))
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.normalized() {
            Self::Unknown(code) => write!(f, "0x{:x}", code),
            named => write!(f, "{}", named.name()),
        }
    }
}
