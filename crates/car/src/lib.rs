// SPDX-License-Identifier: Apache-2.0
//! car
#![warn(missing_docs)]
#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]

/// Errors produced by this library
pub mod error;
pub use error::{CarError, Error};

/// The container header
pub mod header;
pub use header::{CarHeader, CAR_VERSION};

/// Streaming container reader
pub mod reader;
pub use reader::{Reader, Record};

/// Streaming container writer
pub mod writer;
pub use writer::Writer;

/// one-stop shop for all exported symbols
pub mod prelude {
    pub use super::{error::*, header::*, reader::Reader, reader::Record, writer::Writer};

    /// re-exports
    pub use content_addressable::{prelude::Codec, Block, Ipld, Registry as Codecs};
    pub use multicid::Cid;
    pub use multihash::Registry as Hashers;
}
