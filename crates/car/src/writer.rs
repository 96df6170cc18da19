// SPDX-License-Identifier: Apache-2.0
use crate::{CarError, CarHeader, Error};
use content_addressable::Block;
use multicid::Cid;
use multitrait::EncodeInto;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, trace};

/// Streaming container writer. The header is written when the writer is built, after that each
/// [Writer::put] appends one frame in call order. [Writer::close] flushes and shuts down the
/// sink, any further put or close fails with [CarError::WriteAfterClose]. A failed put or close
/// leaves the writer closed.
#[derive(Debug)]
pub struct Writer<W> {
    sink: Option<W>,
    header: CarHeader,
    frames: usize,
}

impl<W: AsyncWrite + Unpin> Writer<W> {
    /// Write the header declaring the roots and return the open writer
    pub async fn create(sink: W, roots: Vec<Cid>) -> Result<Self, Error> {
        Builder::new(sink).with_roots(roots).try_build().await
    }

    /// The header written to the sink
    pub fn header(&self) -> &CarHeader {
        &self.header
    }

    /// The declared roots
    pub fn roots(&self) -> &[Cid] {
        self.header.roots()
    }

    /// The number of blocks written so far
    pub fn len(&self) -> usize {
        self.frames
    }

    /// true if no blocks have been written
    pub fn is_empty(&self) -> bool {
        self.frames == 0
    }

    /// true once the writer is closed or a write failed
    pub fn is_closed(&self) -> bool {
        self.sink.is_none()
    }

    /// Append a block. Blocks are neither deduplicated nor checked against the roots.
    pub async fn put(&mut self, block: &Block) -> Result<(), Error> {
        self.put_raw(block.cid(), block.data()).await
    }

    /// Append a frame from a Cid and the bytes it addresses without verifying them. Use it to
    /// copy records that were already verified. A failed write may leave a partial frame in the
    /// sink, so the writer gives the sink up and every later put or close fails with
    /// [CarError::WriteAfterClose].
    pub async fn put_raw(&mut self, cid: &Cid, data: &[u8]) -> Result<(), Error> {
        let mut sink = self.sink.take().ok_or(CarError::WriteAfterClose)?;
        let cid_bytes = cid.to_bytes();
        let len = cid_bytes.len() + data.len();
        let mut head = len.encode_into();
        head.extend_from_slice(&cid_bytes);
        if let Err(e) = write_frame(&mut sink, &head, data).await {
            debug!("car: writer failed on frame {}: {}", self.frames + 1, e);
            return Err(e.into());
        }
        self.sink = Some(sink);
        self.frames += 1;
        trace!("car: wrote frame {} for {} ({} bytes)", self.frames, cid, len);
        Ok(())
    }

    /// Flush and shut down the sink and hand it back
    pub async fn close(&mut self) -> Result<W, Error> {
        let mut sink = self.sink.take().ok_or(CarError::WriteAfterClose)?;
        sink.flush().await?;
        sink.shutdown().await?;
        info!("car: closed writer after {} blocks", self.frames);
        Ok(sink)
    }
}

async fn write_frame<W: AsyncWrite + Unpin>(
    sink: &mut W,
    head: &[u8],
    data: &[u8],
) -> std::io::Result<()> {
    sink.write_all(head).await?;
    sink.write_all(data).await
}

/// Builder for a [Writer]
#[derive(Clone, Debug)]
pub struct Builder<W> {
    sink: W,
    roots: Vec<Cid>,
}

impl<W: AsyncWrite + Unpin> Builder<W> {
    /// Create a new writer builder
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            roots: Vec::new(),
        }
    }

    /// Set the roots, the order is kept
    pub fn with_roots(mut self, roots: Vec<Cid>) -> Self {
        self.roots = roots;
        self
    }

    /// Add one root
    pub fn with_root(mut self, root: &Cid) -> Self {
        self.roots.push(root.clone());
        self
    }

    /// Write the header frame and return the open writer
    pub async fn try_build(mut self) -> Result<Writer<W>, Error> {
        let header = CarHeader::new(self.roots);
        let bytes = header.to_bytes()?;
        self.sink.write_all(&bytes.len().encode_into()).await?;
        self.sink.write_all(&bytes).await?;
        info!(
            "car: created writer with {} roots ({} byte header)",
            header.roots().len(),
            bytes.len()
        );
        Ok(Writer {
            sink: Some(self.sink),
            header,
            frames: 0,
        })
    }
}
