// SPDX-License-Identifier: Apache-2.0
use crate::{CarError, Error};
use content_addressable::{ContentCodec, DagCbor, Ipld};
use multicid::Cid;

/// The only container format version
pub const CAR_VERSION: u64 = 1;

const ROOTS: &str = "roots";
const VERSION: &str = "version";

/// The container header: the format version and the declared roots. Roots are advisory, they
/// need not be present in the container.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CarHeader {
    version: u64,
    roots: Vec<Cid>,
}

impl CarHeader {
    /// A version 1 header
    pub fn new(roots: Vec<Cid>) -> Self {
        Self {
            version: CAR_VERSION,
            roots,
        }
    }

    /// The format version
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The declared roots in order
    pub fn roots(&self) -> &[Cid] {
        &self.roots
    }

    /// The dag-cbor encoding `{"roots": [..], "version": 1}`
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let roots = self.roots.iter().cloned().map(Ipld::Link).collect();
        let header = Ipld::from([
            (ROOTS, Ipld::List(roots)),
            (VERSION, Ipld::from(self.version)),
        ]);
        Ok(DagCbor.encode(&header)?)
    }
}

impl<'a> TryFrom<&'a [u8]> for CarHeader {
    type Error = Error;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        let header = DagCbor.decode(bytes).map_err(CarError::malformed_header)?;
        match header.get(VERSION) {
            Some(Ipld::Integer(v)) if *v == i128::from(CAR_VERSION) => {}
            Some(Ipld::Integer(v)) => {
                return Err(CarError::malformed_header(format!(
                    "unsupported version {}",
                    v
                )))
            }
            _ => return Err(CarError::malformed_header("missing version")),
        }
        let roots = match header.get(ROOTS) {
            Some(Ipld::List(roots)) => roots
                .iter()
                .map(|r| match r {
                    Ipld::Link(cid) => Ok(cid.clone()),
                    other => Err(CarError::malformed_header(format!(
                        "root is a {}, not a link",
                        other.kind()
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?,
            _ => return Err(CarError::malformed_header("missing roots")),
        };
        Ok(Self::new(roots))
    }
}
