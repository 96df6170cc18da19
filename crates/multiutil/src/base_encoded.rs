// SPDX-License-Identifier: Apache-2.0
use crate::{BaseEncoder, EncodingInfo, Error, MultibaseEncoder};
use core::{fmt, marker::PhantomData, ops};
use multibase::Base;

/// Smart pointer that pairs a value with the multibase encoding used to render it as text. The
/// `Enc` strategy decides how the text is produced and parsed.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BaseEncoded<T, Enc = MultibaseEncoder> {
    base: Base,
    t: T,
    _e: PhantomData<Enc>,
}

impl<T, Enc> BaseEncoded<T, Enc>
where
    Enc: BaseEncoder,
{
    /// wrap a value with the given encoding
    pub fn new(base: Base, t: T) -> Self {
        Self {
            base: Enc::preferred_encoding(base),
            t,
            _e: PhantomData,
        }
    }

    /// consume self and return the inner value
    pub fn to_inner(self) -> T {
        self.t
    }
}

impl<T, Enc> EncodingInfo for BaseEncoded<T, Enc>
where
    T: EncodingInfo,
    Enc: BaseEncoder,
{
    fn preferred_encoding() -> Base {
        Enc::preferred_encoding(T::preferred_encoding())
    }

    fn encoding(&self) -> Base {
        self.base
    }
}

impl<T, Enc> From<T> for BaseEncoded<T, Enc>
where
    T: EncodingInfo,
    Enc: BaseEncoder,
{
    fn from(t: T) -> Self {
        let base = t.encoding();
        Self::new(base, t)
    }
}

impl<T, Enc> ops::Deref for BaseEncoded<T, Enc> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.t
    }
}

impl<T, Enc> fmt::Display for BaseEncoded<T, Enc>
where
    T: Clone + Into<Vec<u8>>,
    Enc: BaseEncoder,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let v: Vec<u8> = self.t.clone().into();
        write!(f, "{}", Enc::to_base_encoded(self.base, &v))
    }
}

impl<'a, T, Enc> TryFrom<&'a str> for BaseEncoded<T, Enc>
where
    T: for<'b> TryFrom<&'b [u8]>,
    Enc: BaseEncoder,
{
    type Error = Error;

    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        let (base, v) = Enc::from_base_encoded(s)?;
        let t = T::try_from(v.as_slice())
            .map_err(|_| Error::custom("base decoded bytes are not a valid value"))?;
        Ok(Self::new(base, t))
    }
}
