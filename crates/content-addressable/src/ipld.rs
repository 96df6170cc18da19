// SPDX-License-Identifier: Apache-2.0
use multicid::Cid;
use std::collections::{BTreeMap, BTreeSet};

/// The data model every content codec encodes and decodes.
///
/// Integers are carried as `i128` so the full CBOR range `-(2^64)..=2^64-1` fits. Floats are
/// IEEE-754 doubles; codecs refuse to encode NaN and the infinities. Map keys are strings and a
/// [BTreeMap] keeps them in a stable order, each codec applies its own canonical key order.
#[derive(Clone, Debug, PartialEq)]
pub enum Ipld {
    /// null
    Null,
    /// boolean
    Bool(bool),
    /// integer
    Integer(i128),
    /// floating point
    Float(f64),
    /// UTF-8 string
    String(String),
    /// byte string
    Bytes(Vec<u8>),
    /// ordered list
    List(Vec<Ipld>),
    /// string keyed map
    Map(BTreeMap<String, Ipld>),
    /// link to another block
    Link(Cid),
}

impl Ipld {
    /// The name of the kind of value, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Ipld::Null => "null",
            Ipld::Bool(_) => "bool",
            Ipld::Integer(_) => "integer",
            Ipld::Float(_) => "float",
            Ipld::String(_) => "string",
            Ipld::Bytes(_) => "bytes",
            Ipld::List(_) => "list",
            Ipld::Map(_) => "map",
            Ipld::Link(_) => "link",
        }
    }

    /// Look up a map entry
    pub fn get(&self, key: &str) -> Option<&Ipld> {
        match self {
            Ipld::Map(m) => m.get(key),
            _ => None,
        }
    }

    /// Every Cid embedded anywhere in the value
    pub fn links(&self) -> BTreeSet<Cid> {
        let mut links = BTreeSet::new();
        self.collect_links(&mut links);
        links
    }

    fn collect_links(&self, links: &mut BTreeSet<Cid>) {
        match self {
            Ipld::Link(cid) => {
                links.insert(cid.clone());
            }
            Ipld::List(l) => l.iter().for_each(|v| v.collect_links(links)),
            Ipld::Map(m) => m.values().for_each(|v| v.collect_links(links)),
            _ => {}
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Ipld {
                fn from(i: $t) -> Self {
                    Ipld::Integer(i.into())
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<bool> for Ipld {
    fn from(b: bool) -> Self {
        Ipld::Bool(b)
    }
}

impl From<f64> for Ipld {
    fn from(f: f64) -> Self {
        Ipld::Float(f)
    }
}

impl From<&str> for Ipld {
    fn from(s: &str) -> Self {
        Ipld::String(s.to_string())
    }
}

impl From<String> for Ipld {
    fn from(s: String) -> Self {
        Ipld::String(s)
    }
}

impl From<&[u8]> for Ipld {
    fn from(b: &[u8]) -> Self {
        Ipld::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for Ipld {
    fn from(b: Vec<u8>) -> Self {
        Ipld::Bytes(b)
    }
}

impl From<Vec<Ipld>> for Ipld {
    fn from(l: Vec<Ipld>) -> Self {
        Ipld::List(l)
    }
}

impl From<BTreeMap<String, Ipld>> for Ipld {
    fn from(m: BTreeMap<String, Ipld>) -> Self {
        Ipld::Map(m)
    }
}

impl From<Cid> for Ipld {
    fn from(cid: Cid) -> Self {
        Ipld::Link(cid)
    }
}

impl<const N: usize> From<[(&str, Ipld); N]> for Ipld {
    fn from(entries: [(&str, Ipld); N]) -> Self {
        Ipld::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multicid::{cid, Version};
    use multicodec::Codec;
    use multihash::Registry;
    use test_log::test;
    use tracing::{span, Level};

    fn link(data: &[u8]) -> Cid {
        let hash = Registry::default().hash(Codec::Sha2256, data).unwrap();
        cid::Builder::new(Version::V1)
            .with_target_codec(Codec::Raw)
            .with_hash(&hash)
            .try_build()
            .unwrap()
    }

    #[test]
    fn test_links_nested() {
        let _s = span!(Level::INFO, "test_links_nested").entered();
        let a = link(b"a");
        let b = link(b"b");
        let v = Ipld::from([
            ("x", Ipld::from(a.clone())),
            (
                "y",
                Ipld::List(vec![
                    Ipld::from(1u8),
                    Ipld::from([("z", Ipld::from(b.clone()))]),
                    Ipld::from(a.clone()),
                ]),
            ),
        ]);
        let links = v.links();
        assert_eq!(2, links.len());
        assert!(links.contains(&a));
        assert!(links.contains(&b));
    }

    #[test]
    fn test_no_links() {
        let _s = span!(Level::INFO, "test_no_links").entered();
        let v = Ipld::List(vec![Ipld::Null, Ipld::from("a"), Ipld::from(&b"b"[..])]);
        assert!(v.links().is_empty());
    }

    #[test]
    fn test_from() {
        let _s = span!(Level::INFO, "test_from").entered();
        assert_eq!(Ipld::Integer(-1), Ipld::from(-1i32));
        assert_eq!(Ipld::Integer(u64::MAX as i128), Ipld::from(u64::MAX));
        assert_eq!(Ipld::Bytes(vec![1, 2]), Ipld::from(vec![1u8, 2]));
        assert_eq!(Some(&Ipld::Bool(true)), Ipld::from([("t", Ipld::from(true))]).get("t"));
        assert_eq!("link", Ipld::from(link(b"c")).kind());
    }
}
