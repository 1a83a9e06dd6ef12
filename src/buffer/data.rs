//! The Buffer type - one chunk of input handed to the decoder.

use std::fmt;
use std::ops::Deref;

use bytes::Bytes;

use crate::error::InputError;

/// An immutable span of bytes produced by a [`BufferInput`](crate::BufferInput).
///
/// A `Buffer` is a window `[start, start + len)` over shared backing storage.
/// Slicing narrows the window without copying; the original buffer stays
/// valid and unchanged. Clones share the same storage.
///
/// # Example
///
/// ```
/// use bufinput::Buffer;
///
/// let buffer = Buffer::new(&b"hello world"[..]);
/// let word = buffer.slice(6, 5)?;
///
/// assert_eq!(&word[..], b"world");
/// assert_eq!(buffer.len(), 11);
/// # Ok::<(), bufinput::InputError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Buffer {
    data: Bytes,
}

impl Buffer {
    /// Creates a buffer over the given storage.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Creates an empty buffer.
    pub const fn empty() -> Self {
        Self { data: Bytes::new() }
    }

    /// Returns a buffer sharing this one's storage, narrowed to
    /// `[offset, offset + length)` relative to this buffer.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidArgument`] if the window does not fit.
    pub fn slice(&self, offset: usize, length: usize) -> Result<Self, InputError> {
        let end = offset
            .checked_add(length)
            .filter(|&end| end <= self.data.len())
            .ok_or(InputError::InvalidArgument {
                message: "slice window exceeds buffer bounds",
            })?;

        Ok(Self {
            data: self.data.slice(offset..end),
        })
    }

    /// Returns the length of the buffer.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the bytes as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns a reference to the underlying [`Bytes`] handle.
    pub fn bytes(&self) -> &Bytes {
        &self.data
    }

    /// Returns a pointer to the first byte of the window.
    ///
    /// Two buffers whose windows start at the same address observe the same
    /// backing storage.
    pub fn as_ptr(&self) -> *const u8 {
        self.data.as_ptr()
    }

    /// Consumes the buffer and returns the underlying data.
    pub fn into_bytes(self) -> Bytes {
        self.data
    }
}

impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Bytes> for Buffer {
    fn from(data: Bytes) -> Self {
        Self::new(data)
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&'static [u8]> for Buffer {
    fn from(data: &'static [u8]) -> Self {
        Self::new(Bytes::from_static(data))
    }
}

impl From<Buffer> for Bytes {
    fn from(buffer: Buffer) -> Self {
        buffer.data
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buffer({} bytes)", self.len())
    }
}
