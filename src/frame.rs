use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, BufReader};

use log::trace;

use crate::error::ExchangeError;

/// The length prefix counts itself: a frame is `payload.len() + 2` bytes
/// total, and the prefix holds that total, little-endian.
pub const HEADER_LEN: usize = 2;

/// Largest payload the 2-byte prefix can describe.
pub const MAX_PAYLOAD: usize = u16::MAX as usize - HEADER_LEN;

/// Builds one sendable buffer: header immediately followed by payload.
pub fn encode_frame(payload: &[u8]) -> Result<Vec<u8>, ExchangeError> {
    if payload.len() > MAX_PAYLOAD {
        return Err(ExchangeError::PayloadTooLarge { len: payload.len() });
    }

    let total = (payload.len() + HEADER_LEN) as u16;
    let mut buf = Vec::with_capacity(payload.len() + HEADER_LEN);
    buf.extend_from_slice(&total.to_le_bytes());
    buf.extend_from_slice(payload);

    Ok(buf)
}

pub struct FrameReader<R> {
    reader: BufReader<R>,
}

impl<R: AsyncRead + Unpin> FrameReader<R> {
    pub fn new(reader: R) -> FrameReader<R> {
        let reader = BufReader::new(reader);
        Self { reader }
    }

    /// Reads one complete frame, looping over partial reads until the
    /// declared payload length has arrived. A peer close before that
    /// point is a broken connection.
    pub async fn read_frame(&mut self) -> Result<Vec<u8>, ExchangeError> {
        let mut header = [0u8; HEADER_LEN];
        self.reader.read_exact(&mut header).await.map_err(broken)?;

        let total = u16::from_le_bytes(header) as usize;
        trace!("frame header declares {} bytes", total);

        // A declared total under 2 can't even cover the header; the
        // payload is empty.
        let mut payload = vec![0u8; total.saturating_sub(HEADER_LEN)];
        self.reader.read_exact(&mut payload).await.map_err(broken)?;

        Ok(payload)
    }
}

fn broken(source: io::Error) -> ExchangeError {
    ExchangeError::ConnectionBroken { source }
}
