use std::path::PathBuf;

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use log::{debug, info};

use crate::error::ExchangeError;
use crate::frame::{encode_frame, FrameReader};

/// Everything one exchange needs, passed in explicitly.
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    pub host: String,
    pub port: u16,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Performs one request/response exchange: sends the input file as a
/// single frame, reads one frame back, and writes its payload to the
/// output file. Returns the number of payload bytes written.
///
/// The input is read before the connection is opened, so a missing file
/// never touches the network, and the output file is only created once
/// the full response has arrived.
pub async fn run(config: &ExchangeConfig) -> Result<usize, ExchangeError> {
    let payload = fs::read(&config.input)
        .await
        .map_err(|source| ExchangeError::FileRead {
            path: config.input.clone(),
            source,
        })?;
    let request = encode_frame(&payload)?;
    debug!("framed {} bytes from {}", payload.len(), config.input.display());

    let addr = format!("{}:{}", config.host, config.port);
    let mut stream = TcpStream::connect(&addr)
        .await
        .map_err(|source| ExchangeError::Connect {
            addr: addr.clone(),
            source,
        })?;
    debug!("connected to {addr}");

    stream
        .write_all(&request)
        .await
        .map_err(|source| ExchangeError::ConnectionBroken { source })?;

    let mut reader = FrameReader::new(stream);
    let response = reader.read_frame().await?;
    // one exchange per connection; close before touching the filesystem
    drop(reader);
    info!("received {} byte response", response.len());

    fs::write(&config.output, &response)
        .await
        .map_err(|source| ExchangeError::FileWrite {
            path: config.output.clone(),
            source,
        })?;

    Ok(response.len())
}
