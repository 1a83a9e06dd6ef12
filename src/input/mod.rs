//! Buffer inputs: one `next()` interface over every kind of byte source.
//!
//! - [`BufferInput`] - The contract the decoder pulls buffers through
//! - [`ArrayInput`] - Zero-copy input over resident bytes
//! - [`StreamInput`] - Fills a reusable buffer from a sequential [`ByteSource`]
//! - [`ChannelInput`] - One read per buffer from a [`PositionedSource`]
//! - [`InputSelector`] - Picks the cheapest of the above for a source
//! - [`Buffers`] - Iterator front end over any [`BufferInput`]
//!
//! [`ByteSource`]: crate::ByteSource
//! [`PositionedSource`]: crate::PositionedSource

mod array;
mod channel;
mod iter;
mod select;
mod stream;

pub use array::ArrayInput;
pub use channel::ChannelInput;
pub use iter::Buffers;
pub use select::{InputSelector, SelectedInput, buffer_input};
pub use stream::StreamInput;

use crate::buffer::Buffer;
use crate::error::InputError;

/// A source of buffers for a decoder.
///
/// Each call to [`next`](BufferInput::next) returns one buffer, or `Ok(None)`
/// once the source is exhausted. End-of-data is terminal: every later call
/// returns `Ok(None)` without touching the source. An `Err` is not
/// end-of-data; the call may be retried.
///
/// [`close`](BufferInput::close) releases the underlying source. It releases
/// at most once; later calls return `Ok(())`. Dropping an input that was never
/// closed releases the source as well, discarding any release error.
///
/// # Example
///
/// ```
/// use bufinput::{buffer_input, BufferInput};
///
/// let mut input = buffer_input(std::io::Cursor::new(vec![1u8, 2, 3]))?;
///
/// while let Some(buffer) = input.next()? {
///     println!("{} bytes", buffer.len());
/// }
/// input.close()?;
/// # Ok::<(), bufinput::InputError>(())
/// ```
pub trait BufferInput {
    /// Returns the next buffer, or `Ok(None)` at end-of-data.
    fn next(&mut self) -> Result<Option<Buffer>, InputError>;

    /// Releases the underlying source.
    fn close(&mut self) -> Result<(), InputError>;

    /// Turns this input into an iterator of buffers.
    fn buffers(self) -> Buffers<Self>
    where
        Self: Sized,
    {
        Buffers::new(self)
    }
}

impl<I: BufferInput + ?Sized> BufferInput for Box<I> {
    fn next(&mut self) -> Result<Option<Buffer>, InputError> {
        (**self).next()
    }

    fn close(&mut self) -> Result<(), InputError> {
        (**self).close()
    }
}

impl<I: BufferInput + ?Sized> BufferInput for &mut I {
    fn next(&mut self) -> Result<Option<Buffer>, InputError> {
        (**self).next()
    }

    fn close(&mut self) -> Result<(), InputError> {
        (**self).close()
    }
}
