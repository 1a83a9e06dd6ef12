//! Byte sources and their capabilities.
//!
//! - [`ByteSource`] - Sequential source with an optional capability probe
//! - [`PositionedSource`] - Seekable source read from its current position
//! - [`SourceKind`] - Answer of the capability probe
//! - [`ReaderSource`] - Adapter turning any [`std::io::Read`] into a [`ByteSource`]
//!
//! The selector never reaches into a source's internals. A source that can
//! lend its storage without copying says so through [`ByteSource::into_kind`];
//! everything else is read sequentially.

mod impls;

use std::io::{self, Read, Seek};

use bytes::Bytes;

pub use impls::ReaderSource;

/// Result of a single sequential read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// `n` bytes were written to the front of the buffer.
    ///
    /// `Read(0)` means nothing was available yet; the source has not ended.
    Read(usize),

    /// The source has no further bytes.
    End,
}

/// A sequential source of bytes.
///
/// # Example
///
/// ```
/// use std::io;
/// use bufinput::{ByteSource, ReadOutcome};
///
/// struct Countdown(u8);
///
/// impl ByteSource for Countdown {
///     fn read_into(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome> {
///         if self.0 == 0 {
///             return Ok(ReadOutcome::End);
///         }
///         buf[0] = self.0;
///         self.0 -= 1;
///         Ok(ReadOutcome::Read(1))
///     }
/// }
/// ```
pub trait ByteSource {
    /// Reads up to `buf.len()` bytes into the front of `buf`.
    ///
    /// Implementations must never report more bytes than `buf.len()`.
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome>;

    /// Releases the source.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Reports the cheapest way to consume this source.
    ///
    /// The default answers [`SourceKind::Sequential`]. Sources backed by a
    /// fully materialized byte array answer [`SourceKind::Resident`] with a
    /// zero-copy view of their unread window; file-like sources answer
    /// [`SourceKind::Positioned`]. Probing must not fail: a source unable to
    /// lend its storage falls back to `Sequential(self)`.
    fn into_kind(self) -> SourceKind<Self>
    where
        Self: Sized,
    {
        SourceKind::Sequential(self)
    }
}

/// How a [`ByteSource`] can be consumed.
pub enum SourceKind<S> {
    /// The unread bytes are resident in memory and can be shared as-is.
    Resident(Bytes),

    /// The source is a seekable channel read from its current position.
    /// The channel must be `Send`.
    Positioned(Box<dyn PositionedSource + Send>),

    /// No structure beyond sequential reads.
    Sequential(S),
}

impl<S> std::fmt::Debug for SourceKind<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Resident(data) => write!(f, "Resident({} bytes)", data.len()),
            SourceKind::Positioned(_) => f.write_str("Positioned"),
            SourceKind::Sequential(_) => f.write_str("Sequential"),
        }
    }
}

/// A seekable channel, read from its current position.
///
/// Reads follow the [`std::io::Read`] contract: `Ok(0)` for a non-empty
/// buffer means no more bytes at the current position.
pub trait PositionedSource: Read + Seek {
    /// Releases the channel.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<P: PositionedSource + ?Sized> PositionedSource for Box<P> {
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}
