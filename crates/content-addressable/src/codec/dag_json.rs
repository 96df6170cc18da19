// SPDX-License-Identifier: Apache-2.0
use crate::{CodecError, ContentCodec, Error, Ipld};
use multibase::Base;
use multicid::Cid;
use multicodec::Codec;
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use tracing::trace;

/// The reserved key of the link and bytes forms
pub const RESERVED_KEY: &str = "/";

const BYTES_KEY: &str = "bytes";

/// Canonical JSON with links.
///
/// Links are `{"/":"<cid>"}` with the Cid in its default text form and byte strings are
/// `{"/":{"bytes":"<base64 without padding>"}}`. Output has no whitespace and map keys sorted by
/// their UTF-8 bytes. Integers are printed without a fraction or exponent and must fit in
/// `i64::MIN..=u64::MAX`. Floats are printed as the shortest text that parses back to the same
/// double and always carry a fraction or exponent so they stay floats; NaN and the infinities
/// are not representable. Decoding parses the text then re-encodes it, any difference from the
/// input is a non-canonical encoding.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DagJson;

impl ContentCodec for DagJson {
    fn codec(&self) -> Codec {
        Codec::DagJson
    }

    fn encode(&self, value: &Ipld) -> Result<Vec<u8>, Error> {
        let mut out = String::new();
        write_value(value, &mut out)?;
        trace!("dag-json encoded {} bytes", out.len());
        Ok(out.into_bytes())
    }

    fn decode(&self, bytes: &[u8]) -> Result<Ipld, Error> {
        let json: Value = serde_json::from_slice(bytes).map_err(CodecError::decode)?;
        let value = from_json(json)?;
        if self.encode(&value)? != bytes {
            return Err(CodecError::non_canonical("dag-json is not in canonical form"));
        }
        Ok(value)
    }
}

fn write_str(s: &str, out: &mut String) -> Result<(), Error> {
    out.push_str(&serde_json::to_string(s).map_err(CodecError::unrepresentable)?);
    Ok(())
}

fn write_reserved(out: &mut String) {
    out.push_str("{\"/\":");
}

fn write_value(value: &Ipld, out: &mut String) -> Result<(), Error> {
    match value {
        Ipld::Null => out.push_str("null"),
        Ipld::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Ipld::Integer(i) => {
            if *i < i128::from(i64::MIN) || *i > i128::from(u64::MAX) {
                return Err(CodecError::unrepresentable(format!(
                    "integer {} out of dag-json range",
                    i
                )));
            }
            out.push_str(&i.to_string());
        }
        Ipld::Float(f) => {
            if !f.is_finite() {
                return Err(CodecError::unrepresentable(format!("float {}", f)));
            }
            // shortest round trip form, always with a fraction or an exponent
            out.push_str(&format!("{:?}", f));
        }
        Ipld::String(s) => write_str(s, out)?,
        Ipld::Bytes(b) => {
            write_reserved(out);
            out.push_str("{\"bytes\":");
            write_str(&Base::Base64.encode(b), out)?;
            out.push_str("}}");
        }
        Ipld::List(l) => {
            out.push('[');
            for (i, v) in l.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(v, out)?;
            }
            out.push(']');
        }
        Ipld::Map(m) => {
            if m.len() == 1 && m.contains_key(RESERVED_KEY) {
                return Err(CodecError::unrepresentable(
                    "a map with the single key \"/\" collides with the link form",
                ));
            }
            out.push('{');
            // BTreeMap<String, _> iterates in UTF-8 byte order
            for (i, (k, v)) in m.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_str(k, out)?;
                out.push(':');
                write_value(v, out)?;
            }
            out.push('}');
        }
        Ipld::Link(cid) => {
            write_reserved(out);
            write_str(&cid.to_string(), out)?;
            out.push('}');
        }
    }
    Ok(())
}

fn from_number(n: Number) -> Result<Ipld, Error> {
    if let Some(u) = n.as_u64() {
        Ok(Ipld::Integer(i128::from(u)))
    } else if let Some(i) = n.as_i64() {
        Ok(Ipld::Integer(i128::from(i)))
    } else {
        n.as_f64()
            .map(Ipld::Float)
            .ok_or_else(|| CodecError::decode(format!("unsupported number {}", n)))
    }
}

fn from_reserved(value: Value) -> Result<Ipld, Error> {
    match value {
        Value::String(s) => Ok(Ipld::Link(
            Cid::try_from(s.as_str()).map_err(CodecError::decode)?,
        )),
        Value::Object(mut m) if m.len() == 1 => match m.remove(BYTES_KEY) {
            Some(Value::String(s)) => Ok(Ipld::Bytes(
                Base::Base64.decode(s).map_err(CodecError::decode)?,
            )),
            _ => Err(CodecError::decode("invalid bytes form")),
        },
        _ => Err(CodecError::decode("invalid reserved \"/\" form")),
    }
}

fn from_object(mut m: Map<String, Value>) -> Result<Ipld, Error> {
    if m.len() == 1 {
        if let Some(v) = m.remove(RESERVED_KEY) {
            return from_reserved(v);
        }
    }
    let mut map = BTreeMap::new();
    for (k, v) in m {
        map.insert(k, from_json(v)?);
    }
    Ok(Ipld::Map(map))
}

fn from_json(json: Value) -> Result<Ipld, Error> {
    match json {
        Value::Null => Ok(Ipld::Null),
        Value::Bool(b) => Ok(Ipld::Bool(b)),
        Value::Number(n) => from_number(n),
        Value::String(s) => Ok(Ipld::String(s)),
        Value::Array(a) => Ok(Ipld::List(
            a.into_iter().map(from_json).collect::<Result<_, _>>()?,
        )),
        Value::Object(m) => from_object(m),
    }
}
