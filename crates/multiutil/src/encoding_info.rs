// SPDX-License-Identifier: Apache-2.0
use multibase::Base;

/// Trait for types that know which multibase encoding they prefer when rendered as text
pub trait EncodingInfo {
    /// The encoding new values of this type use by default
    fn preferred_encoding() -> Base;

    /// The encoding this value uses
    fn encoding(&self) -> Base;
}
