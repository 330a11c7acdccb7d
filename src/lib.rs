pub mod client;
pub mod error;
pub mod frame;

pub use client::{run, ExchangeConfig};
pub use error::ExchangeError;
pub use frame::{encode_frame, FrameReader, HEADER_LEN, MAX_PAYLOAD};
