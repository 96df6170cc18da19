// SPDX-License-Identifier: MIT
use data_encoding::Encoding;
use data_encoding_macro::new_encoding;

// Base2 (alphabet: 01)
pub(crate) const BASE2: Encoding = new_encoding! {
    symbols: "01",
};

// Base8 (alphabet: 0-7)
pub(crate) const BASE8: Encoding = new_encoding! {
    symbols: "01234567",
};

// Base10 (alphabet: 0-9)
pub(crate) const BASE10: &str = "0123456789";

// Base32, rfc4648 with no padding (alphabet: a-z 2-7)
pub(crate) const BASE32_NOPAD_LOWER: Encoding = new_encoding! {
    symbols: "abcdefghijklmnopqrstuvwxyz234567",
};

// Base32, rfc4648 with padding (alphabet: a-z 2-7)
pub(crate) const BASE32_PAD_LOWER: Encoding = new_encoding! {
    symbols: "abcdefghijklmnopqrstuvwxyz234567",
    padding: '=',
};

// Base32hex, rfc4648 with no padding (alphabet: 0-9 a-v)
pub(crate) const BASE32HEX_NOPAD_LOWER: Encoding = new_encoding! {
    symbols: "0123456789abcdefghijklmnopqrstuv",
};

// Base32hex, rfc4648 with padding (alphabet: 0-9 a-v)
pub(crate) const BASE32HEX_PAD_LOWER: Encoding = new_encoding! {
    symbols: "0123456789abcdefghijklmnopqrstuv",
    padding: '=',
};

// z-base-32 (used by Tahoe-LAFS)
pub(crate) const BASE32Z: Encoding = new_encoding! {
    symbols: "ybndrfg8ejkmcpqxot1uwisza345h769",
};

// Base36, [0-9a-z] no padding
pub(crate) const BASE36_LOWER: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

// Base36, [0-9A-Z] no padding
pub(crate) const BASE36_UPPER: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// Base58 flicker
pub(crate) const BASE58_FLICKR: &str = "123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ";

// Base58 bitcoin
pub(crate) const BASE58_BITCOIN: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
