// SPDX-License-Identifier: MIT OR Apache-2.0
//! multicodec
#![warn(missing_docs)]
#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]

/// Errors generated from the implementations
pub mod error;
pub use error::Error;

/// The codec table
pub mod codec;
pub use codec::Codec;

/// one-stop shop for all exported symbols
pub mod prelude {
    pub use super::{codec::*, error::*};
}
