// SPDX-License-Identifier: Apache-2.0
//! multitrait
#![warn(missing_docs)]
#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]

/// Errors generated from the implementations
pub mod error;
pub use error::Error;

/// EncodeInto trait
pub mod enc_into;
pub use enc_into::EncodeInto;

/// TryDecodeFrom trait
pub mod try_decode_from;
pub use try_decode_from::TryDecodeFrom;

/// one-stop shop for all exported symbols
pub mod prelude {
    pub use super::{enc_into::*, try_decode_from::*};
}
