//! Positioned input - one read per buffer from a seekable channel.

use std::io::ErrorKind;

use bytes::BytesMut;

use crate::buffer::Buffer;
use crate::config::InputConfig;
use crate::error::InputError;
use crate::source::PositionedSource;

use super::BufferInput;

/// A [`BufferInput`] over a [`PositionedSource`] such as a [`std::fs::File`].
///
/// Every `next()` allocates a fresh buffer of `buffer_size` bytes and issues
/// a single read from the channel's current position into it, relying on the
/// channel for read coalescing. Buffers may therefore be shorter than
/// `buffer_size` before the end is reached. A zero-byte read is end-of-data.
///
/// # Example
///
/// ```no_run
/// use std::fs::File;
/// use bufinput::{BufferInput, ChannelInput};
///
/// let mut input = ChannelInput::new(File::open("data.bin")?);
/// while let Some(buffer) = input.next()? {
///     println!("{} bytes", buffer.len());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct ChannelInput<C: PositionedSource> {
    channel: Option<C>,
    buffer_size: usize,
    reached_eof: bool,
}

impl<C: PositionedSource> ChannelInput<C> {
    /// Creates an input with the default configuration.
    pub fn new(channel: C) -> Self {
        Self {
            channel: Some(channel),
            buffer_size: InputConfig::default().buffer_size(),
            reached_eof: false,
        }
    }

    /// Creates an input with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidArgument`] if the configuration is invalid.
    pub fn with_config(channel: C, config: InputConfig) -> Result<Self, InputError> {
        config.validate()?;

        let mut input = Self::new(channel);
        input.buffer_size = config.buffer_size();
        Ok(input)
    }

    /// Returns the channel's current position.
    pub fn position(&mut self) -> Result<u64, InputError> {
        let channel = self.channel.as_mut().ok_or(InputError::Closed)?;
        Ok(channel.stream_position()?)
    }

    /// Unwraps the channel without closing it.
    ///
    /// Returns `None` if the input was closed.
    pub fn into_inner(mut self) -> Option<C> {
        self.channel.take()
    }

    /// Returns true once the channel has reported no more bytes.
    pub fn reached_eof(&self) -> bool {
        self.reached_eof
    }
}

impl<C: PositionedSource> BufferInput for ChannelInput<C> {
    fn next(&mut self) -> Result<Option<Buffer>, InputError> {
        if self.reached_eof {
            return Ok(None);
        }

        let channel = self.channel.as_mut().ok_or(InputError::Closed)?;
        let mut buffer = BytesMut::zeroed(self.buffer_size);

        let n = loop {
            match channel.read(&mut buffer) {
                Ok(n) => break n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        };

        if n == 0 {
            self.reached_eof = true;
            return Ok(None);
        }

        buffer.truncate(n);
        Ok(Some(Buffer::new(buffer.freeze())))
    }

    fn close(&mut self) -> Result<(), InputError> {
        match self.channel.take() {
            Some(mut channel) => channel.close().map_err(InputError::Release),
            None => Ok(()),
        }
    }
}

impl<C: PositionedSource> Drop for ChannelInput<C> {
    fn drop(&mut self) {
        if let Some(mut channel) = self.channel.take() {
            let _ = channel.close();
        }
    }
}

impl<C: PositionedSource> std::fmt::Debug for ChannelInput<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelInput")
            .field("buffer_size", &self.buffer_size)
            .field("reached_eof", &self.reached_eof)
            .field("closed", &self.channel.is_none())
            .finish()
    }
}
