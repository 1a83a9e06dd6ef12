//! [`ByteSource`] and [`PositionedSource`] implementations for std types.

use std::fs::File;
use std::io::{self, Cursor, ErrorKind, Read};
use std::net::{Shutdown, TcpStream};

use bytes::Bytes;

use super::{ByteSource, PositionedSource, ReadOutcome, SourceKind};

/// Maps one [`Read::read`] call onto a [`ReadOutcome`].
///
/// `Ok(0)` on a non-empty buffer is end-of-data; `Interrupted` is an empty,
/// non-terminal read.
fn read_std<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<ReadOutcome> {
    match reader.read(buf) {
        Ok(0) if !buf.is_empty() => Ok(ReadOutcome::End),
        Ok(n) => Ok(ReadOutcome::Read(n)),
        Err(e) if e.kind() == ErrorKind::Interrupted => Ok(ReadOutcome::Read(0)),
        Err(e) => Err(e),
    }
}

/// Start of the unread window of a cursor, if it lies within `len`.
fn unread_start<T>(cursor: &Cursor<T>, len: usize) -> Option<usize> {
    usize::try_from(cursor.position())
        .ok()
        .filter(|&pos| pos <= len)
}

/// A socket the peer already tore down has nothing left to release.
fn ignore_not_connected(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == ErrorKind::NotConnected => Ok(()),
        other => other,
    }
}

/// A [`ByteSource`] over any [`std::io::Read`].
///
/// Always consumed sequentially.
///
/// # Example
///
/// ```
/// use std::io::Read;
/// use bufinput::{buffer_input, BufferInput, ReaderSource};
///
/// let reader = std::io::repeat(7).take(10);
/// let mut input = buffer_input(ReaderSource::new(reader))?;
/// let buffer = input.next()?.unwrap();
/// assert_eq!(&buffer[..], &[7; 10]);
/// # Ok::<(), bufinput::InputError>(())
/// ```
#[derive(Debug)]
pub struct ReaderSource<R> {
    inner: R,
}

impl<R: Read> ReaderSource<R> {
    /// Wraps a reader.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns a reference to the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns a mutable reference to the wrapped reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwraps the reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome> {
        read_std(&mut self.inner, buf)
    }
}

impl ByteSource for &[u8] {
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome> {
        read_std(self, buf)
    }
}

impl ByteSource for Cursor<Bytes> {
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome> {
        read_std(self, buf)
    }

    fn into_kind(self) -> SourceKind<Self> {
        match unread_start(&self, self.get_ref().len()) {
            Some(start) => SourceKind::Resident(self.get_ref().slice(start..)),
            None => {
                log::trace!("cursor positioned past its end, reading sequentially");
                SourceKind::Sequential(self)
            }
        }
    }
}

impl ByteSource for Cursor<Vec<u8>> {
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome> {
        read_std(self, buf)
    }

    fn into_kind(self) -> SourceKind<Self> {
        match unread_start(&self, self.get_ref().len()) {
            // Bytes takes over the Vec allocation
            Some(start) => SourceKind::Resident(Bytes::from(self.into_inner()).slice(start..)),
            None => {
                log::trace!("cursor positioned past its end, reading sequentially");
                SourceKind::Sequential(self)
            }
        }
    }
}

impl ByteSource for Cursor<&'static [u8]> {
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome> {
        read_std(self, buf)
    }

    fn into_kind(self) -> SourceKind<Self> {
        match unread_start(&self, self.get_ref().len()) {
            Some(start) => {
                let data: &'static [u8] = *self.get_ref();
                SourceKind::Resident(Bytes::from_static(&data[start..]))
            }
            None => {
                log::trace!("cursor positioned past its end, reading sequentially");
                SourceKind::Sequential(self)
            }
        }
    }
}

impl ByteSource for File {
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome> {
        read_std(self, buf)
    }

    fn into_kind(self) -> SourceKind<Self> {
        SourceKind::Positioned(Box::new(self))
    }
}

impl ByteSource for TcpStream {
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome> {
        read_std(self, buf)
    }

    fn close(&mut self) -> io::Result<()> {
        ignore_not_connected(self.shutdown(Shutdown::Read))
    }
}

impl ByteSource for io::Stdin {
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome> {
        read_std(self, buf)
    }
}

impl PositionedSource for File {}

impl<T: AsRef<[u8]>> PositionedSource for Cursor<T> {}
