// SPDX-License-Identifier: Apache-2.0
use crate::Error;
use unsigned_varint::decode;

/// Trait for types that decode themselves from the front of a byte slice, returning the
/// unconsumed remainder
pub trait TryDecodeFrom<'a>: Sized {
    /// The error type returned
    type Error;

    /// try to decode a value from the front of the slice
    fn try_decode_from(bytes: &'a [u8]) -> Result<(Self, &'a [u8]), Self::Error>;
}

impl<'a> TryDecodeFrom<'a> for bool {
    type Error = Error;

    fn try_decode_from(bytes: &'a [u8]) -> Result<(Self, &'a [u8]), Self::Error> {
        let (v, ptr) = u8::try_decode_from(bytes)?;
        match v {
            0 => Ok((false, ptr)),
            1 => Ok((true, ptr)),
            _ => Err(Error::OutOfRange(u64::from(v))),
        }
    }
}

macro_rules! impl_try_decode_from {
    ($($t:ident),* $(,)?) => {
        $(
            impl<'a> TryDecodeFrom<'a> for $t {
                type Error = Error;

                fn try_decode_from(bytes: &'a [u8]) -> Result<(Self, &'a [u8]), Self::Error> {
                    Ok(decode::$t(bytes)?)
                }
            }
        )*
    };
}

impl_try_decode_from!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EncodeInto;
    use test_log::test;
    use tracing::{span, Level};

    #[test]
    fn test_decode_leaves_remainder() {
        let _s = span!(Level::INFO, "test_decode_leaves_remainder").entered();
        let (v, ptr) = u64::try_decode_from(&[0xe8, 0x07, 0xaa]).unwrap();
        assert_eq!(1000, v);
        assert_eq!(&[0xaa], ptr);
    }

    #[test]
    fn test_round_trip() {
        let _s = span!(Level::INFO, "test_round_trip").entered();
        for v in [0u64, 1, 127, 128, 300, 0x0129, 0xb220, u64::from(u32::MAX), u64::MAX] {
            let buf = v.encode_into();
            let (d, ptr) = u64::try_decode_from(&buf).unwrap();
            assert_eq!(v, d);
            assert!(ptr.is_empty());
        }
    }

    #[test]
    fn test_truncated() {
        let _s = span!(Level::INFO, "test_truncated").entered();
        assert!(u64::try_decode_from(&[0x80]).is_err());
        assert!(u64::try_decode_from(&[]).is_err());
    }

    #[test]
    fn test_not_minimal() {
        let _s = span!(Level::INFO, "test_not_minimal").entered();
        assert!(u64::try_decode_from(&[0x81, 0x00]).is_err());
    }

    #[test]
    fn test_bool() {
        let _s = span!(Level::INFO, "test_bool").entered();
        assert!(bool::try_decode_from(&[0x01]).unwrap().0);
        assert!(matches!(
            bool::try_decode_from(&[0x02]),
            Err(Error::OutOfRange(2))
        ));
    }
}
