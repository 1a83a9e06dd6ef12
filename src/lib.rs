//! bufinput
//!
//! Chunked byte input for binary decoders.
//!
//! `bufinput` hands a decoder its input one [`Buffer`] at a time, whatever
//! the bytes come from:
//!
//! - an in-memory array (wrapped as-is, no copy)
//! - a file or other seekable channel (one read per buffer)
//! - any sequential reader (filled into a reusable buffer)
//!
//! The crate intentionally:
//! - does NOT parse or validate the bytes it hands out
//! - does NOT read more than one buffer ahead
//! - does NOT spawn threads or prefetch
//!
//! It only does one thing: **source → buffers**
//!
//! # Sync
//!
//! ```no_run
//! use std::fs::File;
//! use bufinput::{buffer_input, BufferInput, InputError};
//!
//! fn main() -> Result<(), InputError> {
//!     let file = File::open("data.bin")?;
//!     let mut input = buffer_input(file)?;
//!
//!     while let Some(buffer) = input.next()? {
//!         println!("buffer {} bytes", buffer.len());
//!     }
//!     input.close()
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use bufinput::{buffer_stream, InputConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead + Unpin>(reader: R) -> Result<(), bufinput::InputError> {
//!     let mut stream = buffer_stream(reader, InputConfig::default())?;
//!
//!     while let Some(buffer) = stream.next().await {
//!         println!("buffer {}", buffer?.len());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod error;
mod input;
mod source;

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface
//

pub use buffer::Buffer;
pub use config::{DEFAULT_BUFFER_SIZE, DEFAULT_MAX_IDLE_READS, InputConfig};
pub use error::InputError;
pub use input::{
    ArrayInput, BufferInput, Buffers, ChannelInput, InputSelector, SelectedInput, StreamInput,
    buffer_input,
};
pub use source::{ByteSource, PositionedSource, ReadOutcome, ReaderSource, SourceKind};

#[cfg(feature = "async-io")]
pub use async_stream::{AsyncStreamInput, buffer_stream};
