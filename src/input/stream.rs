//! Sequential input - fills a reusable backing buffer from a [`ByteSource`].
//!
//! Each call to `next()` keeps reading until the buffer holds `buffer_size`
//! bytes or the source ends, so the decoder sees full buffers no matter how
//! the source fragments its reads.
//!
//! # Example
//!
//! ```
//! use bufinput::{BufferInput, InputConfig, StreamInput};
//!
//! let source: &[u8] = &[1, 2, 3, 4, 5, 6, 7];
//! let mut input = StreamInput::with_config(source, InputConfig::new(4)?)?;
//!
//! assert_eq!(&input.next()?.unwrap()[..], &[1, 2, 3, 4]);
//! assert_eq!(&input.next()?.unwrap()[..], &[5, 6, 7]);
//! assert!(input.next()?.is_none());
//! # Ok::<(), bufinput::InputError>(())
//! ```

use std::io;
use std::thread;

use bytes::BytesMut;

use crate::buffer::Buffer;
use crate::config::InputConfig;
use crate::error::InputError;
use crate::source::{ByteSource, ReadOutcome};

use super::BufferInput;

/// A [`BufferInput`] over a sequential [`ByteSource`].
///
/// The backing buffer is allocated on the first read and reused afterwards:
/// every returned [`Buffer`] is split off the same allocation, which is
/// reclaimed for the next chunk once the caller has dropped the previous
/// buffers. Bytes a live buffer can observe are never overwritten.
///
/// Bytes read before an I/O error are kept, and the next call resumes filling
/// the same chunk.
pub struct StreamInput<S: ByteSource> {
    source: Option<S>,
    buffer: BytesMut,
    cursor: usize,
    buffer_size: usize,
    max_idle_reads: usize,
    reached_eof: bool,
}

impl<S: ByteSource> StreamInput<S> {
    /// Creates an input with the default configuration.
    pub fn new(source: S) -> Self {
        let config = InputConfig::default();
        Self {
            source: Some(source),
            buffer: BytesMut::new(),
            cursor: 0,
            buffer_size: config.buffer_size(),
            max_idle_reads: config.max_idle_reads(),
            reached_eof: false,
        }
    }

    /// Creates an input with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidArgument`] if the configuration is invalid.
    pub fn with_config(source: S, config: InputConfig) -> Result<Self, InputError> {
        config.validate()?;

        let mut input = Self::new(source);
        input.buffer_size = config.buffer_size();
        input.max_idle_reads = config.max_idle_reads();
        Ok(input)
    }

    /// Replaces the source and clears end-of-data.
    ///
    /// Returns the previous source without closing it, or `None` if it was
    /// already closed. Unreturned bytes of the previous source are discarded.
    pub fn reset(&mut self, source: S) -> Option<S> {
        self.buffer.clear();
        self.cursor = 0;
        self.reached_eof = false;
        self.source.replace(source)
    }

    /// Unwraps the source without closing it.
    ///
    /// Returns `None` if the input was closed.
    pub fn into_inner(mut self) -> Option<S> {
        self.source.take()
    }

    /// Returns the capacity of each produced buffer.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Returns true once the source has signaled end-of-data.
    pub fn reached_eof(&self) -> bool {
        self.reached_eof
    }
}

impl<S: ByteSource> BufferInput for StreamInput<S> {
    fn next(&mut self) -> Result<Option<Buffer>, InputError> {
        if self.reached_eof {
            return Ok(None);
        }

        let source = self.source.as_mut().ok_or(InputError::Closed)?;
        let size = self.buffer_size;

        if self.buffer.len() < size {
            // Reclaims the previous allocation when no buffer still refers to it
            self.buffer.reserve(size - self.buffer.len());
            self.buffer.resize(size, 0);
        }

        let mut idle = 0;
        while self.cursor < size {
            match source.read_into(&mut self.buffer[self.cursor..size])? {
                ReadOutcome::End => {
                    self.reached_eof = true;
                    break;
                }
                ReadOutcome::Read(0) => {
                    idle += 1;
                    if idle >= self.max_idle_reads {
                        if self.cursor == 0 {
                            return Err(InputError::Stalled { attempts: idle });
                        }
                        break;
                    }
                    thread::yield_now();
                }
                ReadOutcome::Read(n) if n > size - self.cursor => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        "source reported more bytes than requested",
                    )
                    .into());
                }
                ReadOutcome::Read(n) => {
                    idle = 0;
                    self.cursor += n;
                }
            }
        }

        if self.cursor == 0 {
            return Ok(None);
        }

        self.buffer.truncate(self.cursor);
        self.cursor = 0;
        Ok(Some(Buffer::new(self.buffer.split().freeze())))
    }

    fn close(&mut self) -> Result<(), InputError> {
        match self.source.take() {
            Some(mut source) => source.close().map_err(InputError::Release),
            None => Ok(()),
        }
    }
}

impl<S: ByteSource> Drop for StreamInput<S> {
    fn drop(&mut self) {
        if let Some(mut source) = self.source.take() {
            let _ = source.close();
        }
    }
}

impl<S: ByteSource> std::fmt::Debug for StreamInput<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamInput")
            .field("buffer_size", &self.buffer_size)
            .field("cursor", &self.cursor)
            .field("reached_eof", &self.reached_eof)
            .field("closed", &self.source.is_none())
            .finish()
    }
}
