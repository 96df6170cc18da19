// SPDX-License-Identifier: Apache-2.0

//! content-addressable
#![warn(missing_docs)]
#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]

/// Errors produced by this library
pub mod error;
pub use error::{BlockError, CodecError, Error};

/// The value model shared by every codec
pub mod ipld;
pub use ipld::Ipld;

/// Content codecs and the registry of trusted codecs
pub mod codec;
pub use codec::{ContentCodec, DagCbor, DagJson, Raw, Registry};

/// Verified content addressed blocks
pub mod block;
pub use block::Block;

/// Prelude convenience
pub mod prelude {
    pub use super::*;
    /// re-exports
    pub use multicid::{cid, Cid, EncodedCid, Version};
    pub use multicodec::Codec;
    pub use multihash::{Hasher, Multihash, Registry as Hashers};
}
