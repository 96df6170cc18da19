// SPDX-License-Identifier: Apache-2.0
use unsigned_varint::encode;

/// Trait for types that encode themselves into their compact binary form
pub trait EncodeInto {
    /// encode self into a fresh byte vector
    fn encode_into(&self) -> Vec<u8>;
}

impl EncodeInto for bool {
    fn encode_into(&self) -> Vec<u8> {
        u8::from(*self).encode_into()
    }
}

macro_rules! impl_encode_into {
    ($($t:ident, $buf:ident);* $(;)?) => {
        $(
            impl EncodeInto for $t {
                fn encode_into(&self) -> Vec<u8> {
                    let mut buf = encode::$buf();
                    encode::$t(*self, &mut buf).to_vec()
                }
            }
        )*
    };
}

impl_encode_into! {
    u8, u8_buffer;
    u16, u16_buffer;
    u32, u32_buffer;
    u64, u64_buffer;
    u128, u128_buffer;
    usize, usize_buffer;
}
