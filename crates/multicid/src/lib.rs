// SPDX-License-Identifier: Apache-2.0
//! multicid
#![warn(missing_docs)]
#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]

/// Errors produced by this library
pub mod error;
pub use error::{CidError, Error};

/// Content identifier
pub mod cid;
pub use cid::{Cid, EncodedCid, Version};

/// Serde serialization
#[cfg(feature = "serde")]
pub mod serde;

/// one-stop shop for all exported symbols
pub mod prelude {
    pub use super::{cid::*, error::*};

    /// re-exports
    pub use multibase::Base;
    pub use multicodec::Codec;
    pub use multihash::{mh, Multihash};
}
