//! Input selection - picks the cheapest input for a byte source.

use crate::buffer::Buffer;
use crate::config::InputConfig;
use crate::error::InputError;
use crate::source::{ByteSource, PositionedSource, SourceKind};

use super::{ArrayInput, BufferInput, ChannelInput, StreamInput};

/// Chooses a [`BufferInput`] for a [`ByteSource`] based on its capabilities.
///
/// The decision is made once, at construction:
///
/// 1. Resident bytes are wrapped without copying ([`ArrayInput`]).
/// 2. Seekable channels are read one buffer per call ([`ChannelInput`]).
/// 3. Everything else is read sequentially into a reusable buffer
///    ([`StreamInput`]).
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use bufinput::{BufferInput, InputConfig, InputSelector, SelectedInput};
///
/// let selector = InputSelector::new(InputConfig::new(4096)?);
/// let mut input = selector.select(Cursor::new(vec![1u8, 2, 3]))?;
///
/// assert!(matches!(input, SelectedInput::Array(_)));
/// assert_eq!(&input.next()?.unwrap()[..], &[1, 2, 3]);
/// # Ok::<(), bufinput::InputError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSelector {
    config: InputConfig,
}

impl InputSelector {
    /// Creates a selector applying `config` to the inputs it builds.
    pub fn new(config: InputConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration applied to selected inputs.
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Builds the input for `source`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidArgument`] if the configuration is invalid.
    /// Probing the source never fails.
    pub fn select<S: ByteSource>(&self, source: S) -> Result<SelectedInput<S>, InputError> {
        self.config.validate()?;

        let input = match source.into_kind() {
            SourceKind::Resident(data) => {
                log::debug!("selected array input over {} resident bytes", data.len());
                SelectedInput::Array(ArrayInput::new(data))
            }
            SourceKind::Positioned(channel) => {
                log::debug!("selected channel input");
                SelectedInput::Channel(ChannelInput::with_config(channel, self.config)?)
            }
            SourceKind::Sequential(source) => {
                log::debug!(
                    "selected stream input with {} byte buffer",
                    self.config.buffer_size()
                );
                SelectedInput::Stream(StreamInput::with_config(source, self.config)?)
            }
        };

        Ok(input)
    }
}

/// Builds the input for `source` with the default configuration.
///
/// # Example
///
/// ```
/// use bufinput::{buffer_input, BufferInput};
///
/// let data: &[u8] = b"sequential bytes";
/// let chunks: Vec<_> = buffer_input(data)?.buffers().collect::<Result<_, _>>()?;
/// assert_eq!(chunks.len(), 1);
/// # Ok::<(), bufinput::InputError>(())
/// ```
pub fn buffer_input<S: ByteSource>(source: S) -> Result<SelectedInput<S>, InputError> {
    InputSelector::default().select(source)
}

/// The input chosen by an [`InputSelector`].
///
/// Callers normally use it through [`BufferInput`] without caring which
/// variant was picked.
pub enum SelectedInput<S: ByteSource> {
    /// Zero-copy input over resident bytes.
    Array(ArrayInput),
    /// One read per buffer from a seekable channel.
    Channel(ChannelInput<Box<dyn PositionedSource + Send>>),
    /// Sequential reads into a reusable buffer.
    Stream(StreamInput<S>),
}

impl<S: ByteSource> std::fmt::Debug for SelectedInput<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectedInput::Array(input) => f.debug_tuple("Array").field(input).finish(),
            SelectedInput::Channel(input) => f.debug_tuple("Channel").field(input).finish(),
            SelectedInput::Stream(input) => f.debug_tuple("Stream").field(input).finish(),
        }
    }
}

impl<S: ByteSource> BufferInput for SelectedInput<S> {
    fn next(&mut self) -> Result<Option<Buffer>, InputError> {
        match self {
            SelectedInput::Array(input) => input.next(),
            SelectedInput::Channel(input) => input.next(),
            SelectedInput::Stream(input) => input.next(),
        }
    }

    fn close(&mut self) -> Result<(), InputError> {
        match self {
            SelectedInput::Array(input) => input.close(),
            SelectedInput::Channel(input) => input.close(),
            SelectedInput::Stream(input) => input.close(),
        }
    }
}
