// SPDX-License-Identifier: Apache-2.0
use crate::{CodecError, ContentCodec, Error, Ipld};
use multicid::Cid;
use multicodec::Codec;
use std::collections::BTreeSet;

/// The raw codec: the block bytes are the value
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Raw;

impl ContentCodec for Raw {
    fn codec(&self) -> Codec {
        Codec::Raw
    }

    fn encode(&self, value: &Ipld) -> Result<Vec<u8>, Error> {
        match value {
            Ipld::Bytes(b) => Ok(b.clone()),
            v => Err(CodecError::unrepresentable(format!(
                "raw encodes bytes, not {}",
                v.kind()
            ))),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<Ipld, Error> {
        Ok(Ipld::Bytes(bytes.to_vec()))
    }

    fn links(&self, _value: &Ipld) -> BTreeSet<Cid> {
        BTreeSet::new()
    }
}
