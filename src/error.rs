use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::frame::MAX_PAYLOAD;

#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Peer closed (or the stream failed) before the declared payload
    /// length was fully received.
    #[error("socket connection broken")]
    ConnectionBroken {
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The 2-byte length prefix caps payloads at MAX_PAYLOAD bytes.
    #[error("payload of {len} bytes exceeds the {MAX_PAYLOAD} byte frame limit")]
    PayloadTooLarge { len: usize },
}
