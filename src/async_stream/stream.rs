//! Async stream adapter for buffer input.
//!
//! The async counterpart of [`StreamInput`](crate::StreamInput): each item
//! is filled to `buffer_size` bytes, or fewer when the reader ends.
//!
//! # Example
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
//!         let buffer = buffer?;
//!         println!("Buffer: {} bytes", buffer.len());
//!     }
//!     Ok(())
//! }
//! ```

use std::io::{self, ErrorKind};
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::BytesMut;
use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::buffer::Buffer;
use crate::config::InputConfig;
use crate::error::InputError;

pin_project! {
    /// A stream that yields buffers from an async reader.
    ///
    /// This uses `futures_io::AsyncRead` which is runtime-agnostic.
    /// Works with tokio, async-std, smol, or any futures-compatible runtime.
    ///
    /// Bytes already read are kept across `Poll::Pending` and across errors,
    /// so no data is lost when a poll does not complete a buffer. Once the
    /// reader ends, the stream yields `None` forever.
    pub struct AsyncStreamInput<R> {
        #[pin]
        reader: R,
        buffer: BytesMut,
        cursor: usize,
        buffer_size: usize,
        reached_eof: bool,
    }
}

impl<R> AsyncStreamInput<R> {
    /// Creates a stream with the default configuration.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: BytesMut::new(),
            cursor: 0,
            buffer_size: InputConfig::default().buffer_size(),
            reached_eof: false,
        }
    }

    /// Returns a reference to the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Unwraps the reader. Bytes read but not yet yielded are discarded.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Returns true once the reader has signaled end-of-data.
    pub fn reached_eof(&self) -> bool {
        self.reached_eof
    }
}

impl<R: AsyncRead> Stream for AsyncStreamInput<R> {
    type Item = Result<Buffer, InputError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.reached_eof {
            return Poll::Ready(None);
        }

        let size = *this.buffer_size;
        if this.buffer.len() < size {
            let missing = size - this.buffer.len();
            this.buffer.reserve(missing);
            this.buffer.resize(size, 0);
        }

        while *this.cursor < size {
            let cursor = *this.cursor;
            match this
                .reader
                .as_mut()
                .poll_read(cx, &mut this.buffer[cursor..size])
            {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) if e.kind() == ErrorKind::Interrupted => continue,
                Poll::Ready(Err(e)) => return Poll::Ready(Some(Err(InputError::Io(e)))),
                Poll::Ready(Ok(0)) => {
                    *this.reached_eof = true;
                    break;
                }
                Poll::Ready(Ok(n)) if n > size - cursor => {
                    return Poll::Ready(Some(Err(InputError::Io(io::Error::new(
                        ErrorKind::InvalidData,
                        "reader reported more bytes than requested",
                    )))));
                }
                Poll::Ready(Ok(n)) => *this.cursor += n,
            }
        }

        if *this.cursor == 0 {
            return Poll::Ready(None);
        }

        this.buffer.truncate(*this.cursor);
        *this.cursor = 0;
        Poll::Ready(Some(Ok(Buffer::new(this.buffer.split().freeze()))))
    }
}

/// Creates a buffer stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
///
/// # Runtime Compatibility
///
/// For tokio users, you can use `tokio_util::compat` to convert
/// `tokio::io::AsyncRead` to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use bufinput::{buffer_stream, InputConfig};
///
/// let tokio_reader = tokio::fs::File::open("file").await?;
/// let stream = buffer_stream(tokio_reader.compat(), InputConfig::default())?;
/// ```
///
/// # Errors
///
/// Returns [`InputError::InvalidArgument`] if the configuration is invalid.
pub fn buffer_stream<R: AsyncRead>(
    reader: R,
    config: InputConfig,
) -> Result<AsyncStreamInput<R>, InputError> {
    config.validate()?;

    let mut stream = AsyncStreamInput::new(reader);
    stream.buffer_size = config.buffer_size();
    Ok(stream)
}
