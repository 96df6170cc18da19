// SPDX-License-Identifier: Apache-2.0
use super::cbor;
use crate::{CodecError, ContentCodec, Error, Ipld};
use ciborium::value::{Integer, Value};
use multicid::Cid;
use multicodec::Codec;
use std::collections::BTreeMap;
use tracing::trace;

pub use super::cbor::{CID_TAG, MAX_DEPTH};

/// Canonical CBOR with links.
///
/// Every value has exactly one encoding: heads use the shortest form, lengths are definite,
/// floats are always 64-bit, map keys are text strings sorted by their encoded bytes and Cids
/// are tag 42 over a byte string holding a zero byte and the binary Cid.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DagCbor;

impl ContentCodec for DagCbor {
    fn codec(&self) -> Codec {
        Codec::DagCbor
    }

    fn encode(&self, value: &Ipld) -> Result<Vec<u8>, Error> {
        let out = cbor::encode_value(&to_value(value)?)?;
        trace!("dag-cbor encoded {} bytes", out.len());
        Ok(out)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Ipld, Error> {
        from_value(cbor::decode_value(bytes)?)
    }
}

fn to_value(value: &Ipld) -> Result<Value, Error> {
    Ok(match value {
        Ipld::Null => Value::Null,
        Ipld::Bool(b) => Value::Bool(*b),
        Ipld::Integer(i) => Value::Integer(Integer::try_from(*i).map_err(|_| {
            CodecError::unrepresentable(format!("integer {} out of cbor range", i))
        })?),
        Ipld::Float(f) => Value::Float(*f),
        Ipld::String(s) => Value::Text(s.clone()),
        Ipld::Bytes(b) => Value::Bytes(b.clone()),
        Ipld::List(l) => Value::Array(l.iter().map(to_value).collect::<Result<_, _>>()?),
        Ipld::Map(m) => Value::Map(
            m.iter()
                .map(|(k, v)| Ok((Value::Text(k.clone()), to_value(v)?)))
                .collect::<Result<_, Error>>()?,
        ),
        Ipld::Link(cid) => {
            let mut b = vec![0x00];
            b.extend_from_slice(&cid.to_bytes());
            Value::Tag(CID_TAG, Box::new(Value::Bytes(b)))
        }
    })
}

fn from_value(value: Value) -> Result<Ipld, Error> {
    Ok(match value {
        Value::Null => Ipld::Null,
        Value::Bool(b) => Ipld::Bool(b),
        Value::Integer(i) => Ipld::Integer(i128::from(i)),
        Value::Float(f) => Ipld::Float(f),
        Value::Text(s) => Ipld::String(s),
        Value::Bytes(b) => Ipld::Bytes(b),
        Value::Array(l) => Ipld::List(l.into_iter().map(from_value).collect::<Result<_, _>>()?),
        Value::Map(entries) => {
            let mut m = BTreeMap::new();
            for (k, v) in entries {
                let Value::Text(k) = k else {
                    return Err(CodecError::decode("map keys must be strings"));
                };
                m.insert(k, from_value(v)?);
            }
            Ipld::Map(m)
        }
        Value::Tag(CID_TAG, inner) => match *inner {
            Value::Bytes(b) => match b.split_first() {
                Some((0x00, cid)) => Ipld::Link(Cid::try_from(cid).map_err(CodecError::decode)?),
                _ => return Err(CodecError::decode("cid bytes must start with a zero byte")),
            },
            _ => return Err(CodecError::decode("cid tag must wrap a byte string")),
        },
        other => return Err(CodecError::decode(format!("unsupported value {:?}", other))),
    })
}
