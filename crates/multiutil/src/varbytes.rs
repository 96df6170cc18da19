// SPDX-License-Identifier: Apache-2.0
use crate::{BaseEncoded, EncodingInfo, Error};
use core::{fmt, ops};
use multibase::Base;
use multitrait::prelude::{EncodeInto, TryDecodeFrom};
use std::collections::VecDeque;

/// Bytes that encode as an unsigned varint length followed by the bytes themselves
#[derive(Clone, Default, Eq, PartialEq)]
pub struct Varbytes(pub Vec<u8>);

/// type alias for a Varbytes base encoded to/from string
pub type EncodedVarbytes = BaseEncoded<Varbytes>;

impl Varbytes {
    /// create an encoded varbytes
    pub fn encoded_new(base: Base, v: Vec<u8>) -> EncodedVarbytes {
        BaseEncoded::new(base, Varbytes(v))
    }

    /// consume self and return inner vec
    pub fn to_inner(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Debug for Varbytes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.encode_into().as_slice())
    }
}

impl ops::Deref for Varbytes {
    type Target = Vec<u8>;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl EncodingInfo for Varbytes {
    fn preferred_encoding() -> Base {
        Base::Base16Lower
    }

    fn encoding(&self) -> Base {
        Base::Base16Lower
    }
}

impl From<&Varbytes> for Vec<u8> {
    fn from(vb: &Varbytes) -> Vec<u8> {
        vb.encode_into()
    }
}

impl From<Varbytes> for Vec<u8> {
    fn from(vb: Varbytes) -> Vec<u8> {
        vb.encode_into()
    }
}

impl EncodeInto for Varbytes {
    fn encode_into(&self) -> Vec<u8> {
        let mut v = self.0.len().encode_into();
        v.append(&mut self.0.clone());
        v
    }
}

impl<'a> TryFrom<&'a [u8]> for Varbytes {
    type Error = Error;

    fn try_from(s: &'a [u8]) -> Result<Self, Error> {
        let (v, _) = Self::try_decode_from(s)?;
        Ok(v)
    }
}

impl<'a> TryDecodeFrom<'a> for Varbytes {
    type Error = Error;

    fn try_decode_from(bytes: &'a [u8]) -> Result<(Self, &'a [u8]), Self::Error> {
        let (len, ptr) = usize::try_decode_from(bytes)?;
        if ptr.len() < len {
            return Err(Error::Insufficient {
                needed: len,
                remaining: ptr.len(),
            });
        }
        let (v, ptr) = ptr.split_at(len);
        Ok((Self(v.to_vec()), ptr))
    }
}

/// The copy-free Varbytes encoding iterator
pub struct VarbytesIter<'a> {
    slice: &'a [u8],
    state: VarbytesIterState,
}

/// The state of the iterator
#[derive(Clone)]
enum VarbytesIterState {
    /// The length of the slice encoded as an unsigned varint
    Length(VecDeque<u8>),
    /// The index into the slice
    Bytes(usize),
    /// The end of the slice
    End,
}

impl<'a> From<&'a Vec<u8>> for VarbytesIter<'a> {
    fn from(v: &'a Vec<u8>) -> Self {
        Self::from(v.as_slice())
    }
}

impl<'a> From<&'a [u8]> for VarbytesIter<'a> {
    fn from(v: &'a [u8]) -> Self {
        let mut length = VecDeque::new();
        length.extend(&v.len().encode_into());
        Self {
            slice: v,
            state: VarbytesIterState::Length(length),
        }
    }
}

impl Iterator for VarbytesIter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            VarbytesIterState::Length(length) => {
                if length.is_empty() {
                    self.state = VarbytesIterState::Bytes(0);
                    return self.next();
                }
                length.pop_front()
            }
            VarbytesIterState::Bytes(index) => {
                if *index >= self.slice.len() {
                    self.state = VarbytesIterState::End;
                    return None;
                }
                let byte = self.slice[*index];
                *index += 1;
                Some(byte)
            }
            VarbytesIterState::End => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;
    use tracing::{span, Level};

    #[test]
    fn test_empty_frame() {
        let _s = span!(Level::INFO, "test_empty_frame").entered();
        let v: Vec<u8> = Varbytes::default().into();
        assert_eq!(vec![0x00], v);
        let (d, ptr) = Varbytes::try_decode_from(&v).unwrap();
        assert!(d.is_empty());
        assert!(ptr.is_empty());
    }

    #[test]
    fn test_frame_prefix() {
        let _s = span!(Level::INFO, "test_frame_prefix").entered();
        let v: Vec<u8> = Varbytes(vec![7; 300]).into();
        assert_eq!(&[0xac, 0x02], &v[..2]);
        assert_eq!(302, v.len());
        assert_eq!(vec![7; 300], Varbytes::try_from(v.as_slice()).unwrap().to_inner());
    }

    #[test]
    fn test_decode_leaves_remainder() {
        let _s = span!(Level::INFO, "test_decode_leaves_remainder").entered();
        let (v, ptr) = Varbytes::try_decode_from(&[0x02, 0xaa, 0xbb, 0xcc]).unwrap();
        assert_eq!(vec![0xaa, 0xbb], v.to_inner());
        assert_eq!(&[0xcc], ptr);
    }

    #[test]
    fn test_decode_insufficient() {
        let _s = span!(Level::INFO, "test_decode_insufficient").entered();
        assert!(matches!(
            Varbytes::try_decode_from(&[0x05, 0xaa, 0xbb]),
            Err(Error::Insufficient {
                needed: 5,
                remaining: 2
            })
        ));
    }

    #[test]
    fn test_decode_truncated_length() {
        let _s = span!(Level::INFO, "test_decode_truncated_length").entered();
        assert!(matches!(
            Varbytes::try_decode_from(&[0x80]),
            Err(Error::Multitrait(_))
        ));
    }

    #[test]
    fn test_encoded_display() {
        let _s = span!(Level::INFO, "test_encoded_display").entered();
        let v = Varbytes::encoded_new(Base::Base16Lower, vec![0xde, 0xad]);
        assert_eq!("f02dead", v.to_string());
        assert_eq!(v, EncodedVarbytes::try_from("f02dead").unwrap());
    }

    #[test]
    fn test_iterator_matches_encoding() {
        let _s = span!(Level::INFO, "test_iterator_matches_encoding").entered();
        let v = vec![1; 1000];
        let iterated: Vec<u8> = VarbytesIter::from(&v).collect();
        assert_eq!(&[0xe8, 0x07], &iterated[..2]);
        assert_eq!(Varbytes(v).encode_into(), iterated);
    }
}
