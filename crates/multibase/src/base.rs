// SPDX-License-Identifier: MIT
use crate::{encoding::*, error::*};
use data_encoding::{
    BASE32, BASE32HEX, BASE32HEX_NOPAD, BASE32_NOPAD, BASE64, BASE64URL, BASE64URL_NOPAD,
    BASE64_NOPAD, HEXLOWER, HEXUPPER,
};

macro_rules! build_base_enum {
    ( $(#[$attr:meta] $code:literal => $base:ident,)* ) => {
        /// List of types currently supported in the multibase spec.
        ///
        /// Not all base types are supported by this library.
        #[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Ord, PartialOrd)]
        pub enum Base {
            $( #[$attr] $base, )*
        }

        impl Base {
            /// Every supported base, in code table order.
            pub const ALL: &'static [Base] = &[ $( Base::$base, )* ];

            /// Convert a code to a base.
            pub fn from_code(code: char) -> Result<Self> {
                match code {
                    $( $code => Ok(Self::$base), )*
                    _ => Err(Error::UnknownBase(code)),
                }
            }

            /// Get the code corresponding to the base algorithm.
            pub fn code(&self) -> char {
                match self {
                    $( Self::$base => $code, )*
                }
            }

            /// Encode the given byte slice to base string, without the code prefix.
            pub fn encode<I: AsRef<[u8]>>(&self, input: I) -> String {
                let input = input.as_ref();
                match self {
                    $( Self::$base => $base::encode(input), )*
                }
            }

            /// Decode the base string, which must not carry the code prefix.
            pub fn decode<I: AsRef<str>>(&self, input: I) -> Result<Vec<u8>> {
                let input = input.as_ref();
                match self {
                    $( Self::$base => $base::decode(input), )*
                }
            }
        }

        $(
            #[allow(dead_code)]
            struct $base;
        )*
    }
}

build_base_enum! {
    /// Base2 (alphabet: 01).
    '0' => Base2,
    /// Base8 (alphabet: 01234567).
    '7' => Base8,
    /// Base10 (alphabet: 0123456789).
    '9' => Base10,
    /// Base16 lower hexadecimal (alphabet: 0123456789abcdef).
    'f' => Base16Lower,
    /// Base16 upper hexadecimal (alphabet: 0123456789ABCDEF).
    'F' => Base16Upper,
    /// Base32, rfc4648 no padding (alphabet: abcdefghijklmnopqrstuvwxyz234567).
    'b' => Base32Lower,
    /// Base32, rfc4648 no padding (alphabet: ABCDEFGHIJKLMNOPQRSTUVWXYZ234567).
    'B' => Base32Upper,
    /// Base32, rfc4648 with padding (alphabet: abcdefghijklmnopqrstuvwxyz234567).
    'c' => Base32PadLower,
    /// Base32, rfc4648 with padding (alphabet: ABCDEFGHIJKLMNOPQRSTUVWXYZ234567).
    'C' => Base32PadUpper,
    /// Base32hex, rfc4648 no padding (alphabet: 0123456789abcdefghijklmnopqrstuv).
    'v' => Base32HexLower,
    /// Base32hex, rfc4648 no padding (alphabet: 0123456789ABCDEFGHIJKLMNOPQRSTUV).
    'V' => Base32HexUpper,
    /// Base32hex, rfc4648 with padding (alphabet: 0123456789abcdefghijklmnopqrstuv).
    't' => Base32HexPadLower,
    /// Base32hex, rfc4648 with padding (alphabet: 0123456789ABCDEFGHIJKLMNOPQRSTUV).
    'T' => Base32HexPadUpper,
    /// z-base-32 (used by Tahoe-LAFS) (alphabet: ybndrfg8ejkmcpqxot1uwisza345h769).
    'h' => Base32Z,
    /// Base36, [0-9a-z] no padding (alphabet: 0123456789abcdefghijklmnopqrstuvwxyz).
    'k' => Base36Lower,
    /// Base36, [0-9A-Z] no padding (alphabet: 0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ).
    'K' => Base36Upper,
    /// Base58 flicker (alphabet: 123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ).
    'Z' => Base58Flickr,
    /// Base58 bitcoin (alphabet: 123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz).
    'z' => Base58Btc,
    /// Base64, rfc4648 no padding (alphabet: ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/).
    'm' => Base64,
    /// Base64, rfc4648 with padding (alphabet: ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/).
    'M' => Base64Pad,
    /// Base64 url, rfc4648 no padding (alphabet: ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_).
    'u' => Base64Url,
    /// Base64 url, rfc4648 with padding (alphabet: ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_).
    'U' => Base64UrlPad,
    /// Base256 emoji, one emoji per byte (alphabet: 🚀🪐☄🛰🌌...).
    '🚀' => Base256Emoji,
}

macro_rules! derive_data_encoding {
    ($($type:ident => $encoding:expr;)*) => {
        $(
            impl $type {
                fn encode(input: &[u8]) -> String {
                    $encoding.encode(input)
                }

                fn decode(input: &str) -> Result<Vec<u8>> {
                    Ok($encoding.decode(input.as_bytes())?)
                }
            }
        )*
    };
}

macro_rules! derive_base_x {
    ($($type:ident => $alphabet:expr;)*) => {
        $(
            impl $type {
                fn encode(input: &[u8]) -> String {
                    base_x::encode($alphabet, input)
                }

                fn decode(input: &str) -> Result<Vec<u8>> {
                    Ok(base_x::decode($alphabet, input)?)
                }
            }
        )*
    };
}

derive_data_encoding! {
    Base2 => BASE2;
    Base8 => BASE8;
    Base16Lower => HEXLOWER;
    Base16Upper => HEXUPPER;
    Base32Lower => BASE32_NOPAD_LOWER;
    Base32Upper => BASE32_NOPAD;
    Base32PadLower => BASE32_PAD_LOWER;
    Base32PadUpper => BASE32;
    Base32HexLower => BASE32HEX_NOPAD_LOWER;
    Base32HexUpper => BASE32HEX_NOPAD;
    Base32HexPadLower => BASE32HEX_PAD_LOWER;
    Base32HexPadUpper => BASE32HEX;
    Base32Z => BASE32Z;
    Base64 => BASE64_NOPAD;
    Base64Pad => BASE64;
    Base64Url => BASE64URL_NOPAD;
    Base64UrlPad => BASE64URL;
}

derive_base_x! {
    Base10 => BASE10;
    Base36Lower => BASE36_LOWER;
    Base36Upper => BASE36_UPPER;
    Base58Flickr => BASE58_FLICKR;
    Base58Btc => BASE58_BITCOIN;
}

impl Base256Emoji {
    fn encode(input: &[u8]) -> String {
        <base256emoji::Emoji as base256emoji::Base>::encode(input)
    }

    fn decode(input: &str) -> Result<Vec<u8>> {
        Ok(<base256emoji::Emoji as base256emoji::Base>::decode(input)?)
    }
}
