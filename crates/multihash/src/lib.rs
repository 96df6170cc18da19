// SPDX-License-Identifier: Apache-2.0
//! multihash
#![warn(missing_docs)]
#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]

/// Errors produced by this library
pub mod error;
pub use error::Error;

/// Hash function implementations
pub mod hasher;
pub use hasher::{DigestHasher, Hasher};

/// Multihash type and builder
pub mod mh;
pub use mh::{EncodedMultihash, Multihash};

/// Explicit set of trusted hash functions
pub mod registry;
pub use registry::Registry;

/// Serde serialization
#[cfg(feature = "serde")]
pub mod serde;

/// one-stop shop for all exported symbols
pub mod prelude {
    pub use super::{error::*, hasher::*, mh::*, registry::*};

    /// re-exports
    pub use multibase::Base;
    pub use multicodec::Codec;
}
