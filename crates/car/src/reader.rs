// SPDX-License-Identifier: Apache-2.0
use crate::{CarError, CarHeader, Error};
use content_addressable::{Block, Registry as Codecs};
use multicid::Cid;
use multihash::Registry as Hashers;
use multitrait::TryDecodeFrom;
use std::io::ErrorKind;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, info, trace};

/// The default limit on the declared size of a frame
pub const DEFAULT_MAX_FRAME_SIZE: u64 = 32 * 1024 * 1024;

/// The longest unsigned varint encoding of a u64
const MAX_VARINT_LEN: usize = 10;

/// One stored block as read from the container. The bytes are not verified against the Cid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// the claimed Cid
    pub cid: Cid,
    /// the block bytes
    pub data: Vec<u8>,
}

/// Streaming, single pass container reader.
///
/// Records come back in stream order. The reader does not verify anything, route records through
/// [Reader::next_block] or [Block::verify] to get authenticated blocks. After the end of the
/// stream or the first error every further pull returns `Ok(None)`.
#[derive(Debug)]
pub struct Reader<R> {
    source: R,
    header: CarHeader,
    max_frame_size: u64,
    frames: usize,
    done: bool,
}

impl<R: AsyncRead + Unpin> Reader<R> {
    /// Read the header with the default limits
    pub async fn open(source: R) -> Result<Self, Error> {
        Builder::new(source).try_build().await
    }

    /// The container header
    pub fn header(&self) -> &CarHeader {
        &self.header
    }

    /// The declared roots
    pub fn roots(&self) -> &[Cid] {
        self.header.roots()
    }

    /// Pull the next record, `Ok(None)` at a clean end of stream
    pub async fn next_record(&mut self) -> Result<Option<Record>, Error> {
        if self.done {
            return Ok(None);
        }
        match self.read_record().await {
            Ok(Some(record)) => Ok(Some(record)),
            Ok(None) => {
                self.done = true;
                info!("car: end of container after {} records", self.frames);
                Ok(None)
            }
            Err(e) => {
                self.done = true;
                debug!("car: aborted after {} records: {}", self.frames, e);
                Err(e)
            }
        }
    }

    /// Pull the next record and verify it with the trusted codecs and hash functions
    pub async fn next_block(
        &mut self,
        codecs: &Codecs,
        hashers: &Hashers,
    ) -> Result<Option<Block>, Error> {
        let Some(Record { cid, data }) = self.next_record().await? else {
            return Ok(None);
        };
        match Block::verify(cid, data, codecs, hashers) {
            Ok(block) => Ok(Some(block)),
            Err(e) => {
                self.done = true;
                Err(e.into())
            }
        }
    }

    /// Release the source
    pub fn into_inner(self) -> R {
        self.source
    }

    async fn read_record(&mut self) -> Result<Option<Record>, Error> {
        let Some(frame) = read_frame(&mut self.source, self.max_frame_size).await? else {
            return Ok(None);
        };
        let (cid, data) = Cid::try_decode_from(frame.as_slice())?;
        self.frames += 1;
        trace!(
            "car: read frame {} for {} ({} bytes)",
            self.frames,
            cid,
            frame.len()
        );
        Ok(Some(Record {
            cid,
            data: data.to_vec(),
        }))
    }
}

/// read a frame length, `None` if the source ends before the first byte
async fn read_varint<R: AsyncRead + Unpin>(source: &mut R) -> Result<Option<u64>, Error> {
    let mut buf = [0u8; MAX_VARINT_LEN];
    let mut len = 0;
    loop {
        let b = match source.read_u8().await {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                if len == 0 {
                    return Ok(None);
                }
                return Err(CarError::TruncatedRecord.into());
            }
            Err(e) => return Err(e.into()),
        };
        buf[len] = b;
        len += 1;
        if b & 0x80 == 0 {
            break;
        }
        if len == MAX_VARINT_LEN {
            return Err(CarError::InvalidVarint("too long".to_string()).into());
        }
    }
    let (n, _) = u64::try_decode_from(&buf[..len])
        .map_err(|e| CarError::InvalidVarint(e.to_string()))?;
    Ok(Some(n))
}

/// read one length prefixed frame, `None` at a clean end of stream
async fn read_frame<R: AsyncRead + Unpin>(
    source: &mut R,
    max: u64,
) -> Result<Option<Vec<u8>>, Error> {
    let Some(size) = read_varint(source).await? else {
        return Ok(None);
    };
    if size > max {
        return Err(CarError::FrameTooLarge { size, max }.into());
    }
    let len = usize::try_from(size).map_err(|_| CarError::FrameTooLarge { size, max })?;
    let mut frame = vec![0u8; len];
    match source.read_exact(&mut frame).await {
        Ok(_) => Ok(Some(frame)),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(CarError::TruncatedRecord.into()),
        Err(e) => Err(e.into()),
    }
}

/// Builder for a [Reader]
#[derive(Clone, Debug)]
pub struct Builder<R> {
    source: R,
    max_frame_size: u64,
}

impl<R: AsyncRead + Unpin> Builder<R> {
    /// Create a new reader builder
    pub fn new(source: R) -> Self {
        Self {
            source,
            max_frame_size: DEFAULT_MAX_FRAME_SIZE,
        }
    }

    /// Set the limit on the declared size of any frame, including the header
    pub fn with_max_frame_size(mut self, max: u64) -> Self {
        self.max_frame_size = max;
        self
    }

    /// Read and decode the header frame and return the reader
    pub async fn try_build(mut self) -> Result<Reader<R>, Error> {
        let frame = read_frame(&mut self.source, self.max_frame_size)
            .await?
            .ok_or_else(|| CarError::malformed_header("empty container"))?;
        let header = CarHeader::try_from(frame.as_slice())?;
        info!("car: opened reader with {} roots", header.roots().len());
        Ok(Reader {
            source: self.source,
            header,
            max_frame_size: self.max_frame_size,
            frames: 0,
            done: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_addressable::CodecError;
    use multicodec::Codec;
    use multiutil::CodecInfo;
    use test_log::test;
    use tracing::{span, Level};

    const EMPTY: &str = "11a265726f6f7473806776657273696f6e01";

    fn bytes(hex: &str) -> Vec<u8> {
        hex::decode(hex).unwrap()
    }

    #[test(tokio::test)]
    async fn test_empty_container() {
        let _s = span!(Level::INFO, "test_empty_container").entered();
        let b = bytes(EMPTY);
        let mut r = Reader::open(b.as_slice()).await.unwrap();
        assert!(r.roots().is_empty());
        assert_eq!(None, r.next_record().await.unwrap());
        assert_eq!(None, r.next_record().await.unwrap());
    }

    #[test(tokio::test)]
    async fn test_no_header() {
        let _s = span!(Level::INFO, "test_no_header").entered();
        assert!(matches!(
            Reader::open(&[0u8; 0][..]).await,
            Err(Error::Car(CarError::MalformedHeader(_)))
        ));
        // zero length header frame
        assert!(matches!(
            Reader::open(&[0x00u8][..]).await,
            Err(Error::Car(CarError::MalformedHeader(_)))
        ));
    }

    #[test(tokio::test)]
    async fn test_truncated_header() {
        let _s = span!(Level::INFO, "test_truncated_header").entered();
        let b = bytes(EMPTY);
        for k in 1..b.len() {
            assert!(matches!(
                Reader::open(&b[..k]).await,
                Err(Error::Car(CarError::TruncatedRecord))
            ));
        }
        // inside a multi-byte length varint
        assert!(matches!(
            Reader::open(&[0x80u8][..]).await,
            Err(Error::Car(CarError::TruncatedRecord))
        ));
    }

    #[test(tokio::test)]
    async fn test_frame_limit() {
        let _s = span!(Level::INFO, "test_frame_limit").entered();
        let b = bytes(EMPTY);
        assert!(matches!(
            Builder::new(b.as_slice())
                .with_max_frame_size(16)
                .try_build()
                .await,
            Err(Error::Car(CarError::FrameTooLarge { size: 17, max: 16 }))
        ));

        // a record declaring far more than the limit fails before allocating
        let mut b = bytes(EMPTY);
        b.extend_from_slice(&[0xff, 0xff, 0xff, 0xff, 0x0f]);
        let mut r = Reader::open(b.as_slice()).await.unwrap();
        assert!(matches!(
            r.next_record().await,
            Err(Error::Car(CarError::FrameTooLarge { .. }))
        ));
        assert_eq!(None, r.next_record().await.unwrap());
    }

    #[test(tokio::test)]
    async fn test_invalid_varint() {
        let _s = span!(Level::INFO, "test_invalid_varint").entered();
        // non-minimal zero
        assert!(matches!(
            Reader::open(&[0x80u8, 0x00][..]).await,
            Err(Error::Car(CarError::InvalidVarint(_)))
        ));
        let too_long = [0xffu8; MAX_VARINT_LEN];
        assert!(matches!(
            Reader::open(&too_long[..]).await,
            Err(Error::Car(CarError::InvalidVarint(_)))
        ));
    }

    #[test(tokio::test)]
    async fn test_bad_record_cid() {
        let _s = span!(Level::INFO, "test_bad_record_cid").entered();
        let mut b = bytes(EMPTY);
        b.extend_from_slice(&[0x02, 0x01, 0x55]);
        let mut r = Reader::open(b.as_slice()).await.unwrap();
        assert!(matches!(r.next_record().await, Err(Error::Multicid(_))));
        assert_eq!(None, r.next_record().await.unwrap());
    }

    #[test(tokio::test)]
    async fn test_into_inner() {
        let _s = span!(Level::INFO, "test_into_inner").entered();
        let mut b = bytes(EMPTY);
        b.push(0x80);
        let r = Reader::open(b.as_slice()).await.unwrap();
        assert_eq!(&[0x80u8][..], r.into_inner());
    }

    /// frame holding a v1 Cid with the given codec and hash codes, a 32 byte digest and data
    fn frame(codec: &[u8], hash: &[u8], fill: u8, data: &[u8]) -> Vec<u8> {
        let mut body = vec![0x01];
        body.extend_from_slice(codec);
        body.extend_from_slice(hash);
        body.push(0x20);
        body.extend_from_slice(&[fill; 32]);
        body.extend_from_slice(data);
        let mut f = vec![u8::try_from(body.len()).unwrap()];
        f.extend_from_slice(&body);
        f
    }

    #[test(tokio::test)]
    async fn test_records_with_unregistered_codes() {
        let _s = span!(Level::INFO, "test_records_with_unregistered_codes").entered();
        let mut b = bytes(EMPTY);
        // dag-jose content under sha2-256
        b.extend_from_slice(&frame(&[0x85, 0x01], &[0x12], 0xab, b"payload"));
        // raw content under keccak-256
        b.extend_from_slice(&frame(&[0x55], &[0x1b], 0xcd, b"other"));

        let mut r = Reader::open(b.as_slice()).await.unwrap();
        let first = r.next_record().await.unwrap().unwrap();
        assert_eq!(0x85, first.cid.target_codec().code());
        assert!(!first.cid.target_codec().is_known());
        assert_eq!(b"payload", first.data.as_slice());
        let second = r.next_record().await.unwrap().unwrap();
        assert_eq!(Codec::Raw, second.cid.target_codec());
        assert_eq!(0x1b, second.cid.hash().codec().code());
        assert_eq!(b"other", second.data.as_slice());
        assert_eq!(None, r.next_record().await.unwrap());

        // the Cids survive a round trip through their binary form
        assert_eq!(first.cid, Cid::try_from(first.cid.to_bytes().as_slice()).unwrap());

        // trust is decided by the registries when verifying
        let codecs = Codecs::default();
        let hashers = Hashers::default();
        assert!(matches!(
            Block::verify(first.cid, first.data, &codecs, &hashers),
            Err(content_addressable::Error::Codec(CodecError::UnsupportedCodec(c))) if c.code() == 0x85
        ));
        assert!(matches!(
            Block::verify(second.cid, second.data, &codecs, &hashers),
            Err(content_addressable::Error::Multihash(multihash::Error::UnsupportedHash(c))) if c.code() == 0x1b
        ));

        let mut r = Reader::open(b.as_slice()).await.unwrap();
        assert!(matches!(
            r.next_block(&codecs, &hashers).await,
            Err(Error::ContentAddressable(_))
        ));
    }
}
