// SPDX-License-Identifier: Apache-2.0
//! Strict canonical CBOR over [ciborium::value::Value].
//!
//! Heads use the shortest form, lengths are definite, floats are 64-bit and finite, map entries
//! are ordered by their encoded key bytes and tag 42 is the only tag.
use crate::{CodecError, Error};
use ciborium::value::{Integer, Value};

/// The CBOR tag marking a Cid link
pub const CID_TAG: u64 = 42;

/// Nesting limit on decode
pub const MAX_DEPTH: usize = 256;

const MAJOR_UINT: u8 = 0;
const MAJOR_NINT: u8 = 1;
const MAJOR_BYTES: u8 = 2;
const MAJOR_TEXT: u8 = 3;
const MAJOR_ARRAY: u8 = 4;
const MAJOR_MAP: u8 = 5;
const MAJOR_TAG: u8 = 6;
const MAJOR_SIMPLE: u8 = 7;

const FALSE: u8 = 0xf4;
const TRUE: u8 = 0xf5;
const NULL: u8 = 0xf6;
const FLOAT64: u8 = 0xfb;

pub(crate) fn encode_value(val: &Value) -> Result<Vec<u8>, Error> {
    let mut out = Vec::new();
    enc_value(val, &mut out)?;
    Ok(out)
}

pub(crate) fn decode_value(bytes: &[u8]) -> Result<Value, Error> {
    let mut idx = 0usize;
    let v = dec_value(bytes, &mut idx, 0)?;
    if idx != bytes.len() {
        return Err(CodecError::decode(format!(
            "{} trailing bytes",
            bytes.len() - idx
        )));
    }
    Ok(v)
}

fn enc_value(v: &Value, out: &mut Vec<u8>) -> Result<(), Error> {
    match v {
        Value::Bool(b) => out.push(if *b { TRUE } else { FALSE }),
        Value::Null => out.push(NULL),
        Value::Integer(n) => enc_int(i128::from(*n), out)?,
        Value::Float(f) => {
            if !f.is_finite() {
                return Err(CodecError::unrepresentable(format!("float {}", f)));
            }
            out.push(FLOAT64);
            out.extend_from_slice(&f.to_be_bytes());
        }
        Value::Text(s) => {
            write_major(MAJOR_TEXT, s.len() as u64, out);
            out.extend_from_slice(s.as_bytes());
        }
        Value::Bytes(b) => {
            write_major(MAJOR_BYTES, b.len() as u64, out);
            out.extend_from_slice(b);
        }
        Value::Array(items) => {
            write_major(MAJOR_ARRAY, items.len() as u64, out);
            for it in items {
                enc_value(it, out)?;
            }
        }
        Value::Map(entries) => {
            let mut buf: Vec<(Vec<u8>, &Value)> = Vec::with_capacity(entries.len());
            for (k, v) in entries {
                let mut kb = Vec::new();
                enc_value(k, &mut kb)?;
                buf.push((kb, v));
            }
            // bytewise on the encoded key, so shorter text keys come first
            buf.sort_by(|a, b| a.0.cmp(&b.0));
            if buf.windows(2).any(|w| w[0].0 == w[1].0) {
                return Err(CodecError::unrepresentable("duplicate map key"));
            }
            write_major(MAJOR_MAP, buf.len() as u64, out);
            for (kb, v) in buf {
                out.extend_from_slice(&kb);
                enc_value(v, out)?;
            }
        }
        Value::Tag(CID_TAG, inner) => {
            write_major(MAJOR_TAG, CID_TAG, out);
            enc_value(inner, out)?;
        }
        Value::Tag(tag, _) => {
            return Err(CodecError::unrepresentable(format!("tag {}", tag)));
        }
        _ => return Err(CodecError::unrepresentable("unsupported simple value")),
    }
    Ok(())
}

fn enc_int(n: i128, out: &mut Vec<u8>) -> Result<(), Error> {
    let (major, m) = if n >= 0 {
        (MAJOR_UINT, u64::try_from(n))
    } else {
        (MAJOR_NINT, u64::try_from(-1 - n))
    };
    let m = m.map_err(|_| CodecError::unrepresentable(format!("integer {} out of range", n)))?;
    write_major(major, m, out);
    Ok(())
}

fn write_major(major: u8, n: u64, out: &mut Vec<u8>) {
    let m = major << 5;
    match n {
        0..=23 => out.push(m | n as u8),
        24..=0xff => {
            out.push(m | 24);
            out.push(n as u8);
        }
        0x100..=0xffff => {
            out.push(m | 25);
            out.extend_from_slice(&(n as u16).to_be_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(m | 26);
            out.extend_from_slice(&(n as u32).to_be_bytes());
        }
        _ => {
            out.push(m | 27);
            out.extend_from_slice(&n.to_be_bytes());
        }
    }
}

fn need(bytes: &[u8], idx: usize, n: u64) -> Result<usize, Error> {
    let remaining = bytes.len() - idx;
    match usize::try_from(n) {
        Ok(n) if n <= remaining => Ok(n),
        _ => Err(CodecError::decode(format!(
            "need {} bytes, {} remaining",
            n, remaining
        ))),
    }
}

fn take<'a>(bytes: &'a [u8], idx: &mut usize, n: u64) -> Result<&'a [u8], Error> {
    let n = need(bytes, *idx, n)?;
    let s = &bytes[*idx..*idx + n];
    *idx += n;
    Ok(s)
}

fn read_uint(bytes: &[u8], idx: &mut usize, nbytes: u64) -> Result<u64, Error> {
    Ok(take(bytes, idx, nbytes)?
        .iter()
        .fold(0u64, |n, b| (n << 8) | u64::from(*b)))
}

/// the argument of a head, rejecting any head longer than needed
fn read_arg(bytes: &[u8], idx: &mut usize, major: u8, info: u8) -> Result<u64, Error> {
    let (n, min) = match info {
        0..=23 => return Ok(u64::from(info)),
        24 => (read_uint(bytes, idx, 1)?, 24),
        25 => (read_uint(bytes, idx, 2)?, 0x100),
        26 => (read_uint(bytes, idx, 4)?, 0x1_0000),
        27 => (read_uint(bytes, idx, 8)?, 0x1_0000_0000),
        31 if (MAJOR_BYTES..=MAJOR_MAP).contains(&major) => {
            return Err(CodecError::non_canonical("indefinite length"))
        }
        _ => {
            return Err(CodecError::decode(format!(
                "invalid additional info {} for major type {}",
                info, major
            )))
        }
    };
    if n < min {
        return Err(CodecError::non_canonical(format!(
            "{} encoded in a longer head than needed",
            n
        )));
    }
    Ok(n)
}

fn dec_value(bytes: &[u8], idx: &mut usize, depth: usize) -> Result<Value, Error> {
    if depth > MAX_DEPTH {
        return Err(CodecError::decode("nesting too deep"));
    }
    let b0 = take(bytes, idx, 1)?[0];
    let (major, info) = (b0 >> 5, b0 & 0x1f);
    if major == MAJOR_SIMPLE {
        return dec_simple(bytes, idx, info);
    }
    let n = read_arg(bytes, idx, major, info)?;
    match major {
        MAJOR_UINT => Ok(Value::Integer(Integer::from(n))),
        MAJOR_NINT => {
            let i = Integer::try_from(-1 - i128::from(n)).map_err(CodecError::decode)?;
            Ok(Value::Integer(i))
        }
        MAJOR_BYTES => Ok(Value::Bytes(take(bytes, idx, n)?.to_vec())),
        MAJOR_TEXT => {
            let s = std::str::from_utf8(take(bytes, idx, n)?).map_err(CodecError::decode)?;
            Ok(Value::Text(s.to_string()))
        }
        MAJOR_ARRAY => {
            let mut items = Vec::new();
            for _ in 0..n {
                items.push(dec_value(bytes, idx, depth + 1)?);
            }
            Ok(Value::Array(items))
        }
        MAJOR_MAP => {
            let mut entries = Vec::new();
            let mut last_key: Option<&[u8]> = None;
            for _ in 0..n {
                let key_start = *idx;
                let k = dec_value(bytes, idx, depth + 1)?;
                let kb = &bytes[key_start..*idx];
                if let Some(prev) = last_key {
                    if kb == prev {
                        return Err(CodecError::non_canonical("duplicate map key"));
                    }
                    if kb < prev {
                        return Err(CodecError::non_canonical("map keys out of order"));
                    }
                }
                last_key = Some(kb);
                let v = dec_value(bytes, idx, depth + 1)?;
                entries.push((k, v));
            }
            Ok(Value::Map(entries))
        }
        MAJOR_TAG if n == CID_TAG => {
            let inner = dec_value(bytes, idx, depth + 1)?;
            Ok(Value::Tag(n, Box::new(inner)))
        }
        MAJOR_TAG => Err(CodecError::decode(format!("unsupported tag {}", n))),
        _ => Err(CodecError::decode(format!("invalid major type {}", major))),
    }
}

fn dec_simple(bytes: &[u8], idx: &mut usize, info: u8) -> Result<Value, Error> {
    match info {
        20 => Ok(Value::Bool(false)),
        21 => Ok(Value::Bool(true)),
        22 => Ok(Value::Null),
        25 | 26 => Err(CodecError::non_canonical("floats must be 64-bit")),
        27 => {
            let f = f64::from_bits(read_uint(bytes, idx, 8)?);
            if !f.is_finite() {
                return Err(CodecError::decode(format!("float {}", f)));
            }
            Ok(Value::Float(f))
        }
        31 => Err(CodecError::decode("unexpected break")),
        _ => Err(CodecError::decode(format!("unsupported simple value {}", info))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;
    use tracing::{span, Level};

    fn enc(v: &Value) -> String {
        hex::encode(encode_value(v).unwrap())
    }

    #[test]
    fn test_key_order_by_encoding() {
        let _s = span!(Level::INFO, "test_key_order_by_encoding").entered();
        // integer keys sort ahead of text, shorter text ahead of longer
        let v = Value::Map(vec![
            (Value::Text("bb".into()), Value::Null),
            (Value::Text("c".into()), Value::Null),
            (Value::Integer(Integer::from(1u8)), Value::Null),
        ]);
        assert_eq!("a301f66163f6626262f6", enc(&v));
        assert_eq!(
            Value::Map(vec![
                (Value::Integer(Integer::from(1u8)), Value::Null),
                (Value::Text("c".into()), Value::Null),
                (Value::Text("bb".into()), Value::Null),
            ]),
            decode_value(&hex::decode("a301f66163f6626262f6").unwrap()).unwrap()
        );
    }

    #[test]
    fn test_encode_rejections() {
        let _s = span!(Level::INFO, "test_encode_rejections").entered();
        let dup = Value::Map(vec![
            (Value::Text("a".into()), Value::Null),
            (Value::Text("a".into()), Value::Bool(true)),
        ]);
        let tagged = Value::Tag(1, Box::new(Value::Integer(Integer::from(0u8))));
        for v in [dup, tagged, Value::Float(f64::NAN)] {
            assert!(matches!(
                encode_value(&v),
                Err(Error::Codec(CodecError::Unrepresentable(_)))
            ));
        }
    }

    #[test]
    fn test_negative_extreme() {
        let _s = span!(Level::INFO, "test_negative_extreme").entered();
        let v = decode_value(&hex::decode("3bffffffffffffffff").unwrap()).unwrap();
        assert_eq!(
            Value::Integer(Integer::try_from(-(1i128 << 64)).unwrap()),
            v
        );
        assert_eq!("3bffffffffffffffff", enc(&v));
    }
}
