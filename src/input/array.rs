//! Zero-copy input over bytes already resident in memory.

use bytes::Bytes;

use crate::buffer::Buffer;
use crate::error::InputError;

use super::BufferInput;

/// A [`BufferInput`] over an in-memory byte array.
///
/// The first `next()` returns the whole window as one buffer sharing the
/// caller's storage; every later call returns end-of-data. `close()` is a
/// no-op since nothing external is held.
///
/// # Example
///
/// ```
/// use bufinput::{ArrayInput, BufferInput};
/// use bytes::Bytes;
///
/// let data = Bytes::from_static(&[10, 20, 30, 40, 50]);
/// let mut input = ArrayInput::with_window(data, 1, 3)?;
///
/// assert_eq!(&input.next()?.unwrap()[..], &[20, 30, 40]);
/// assert!(input.next()?.is_none());
/// # Ok::<(), bufinput::InputError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArrayInput {
    data: Option<Bytes>,
}

impl ArrayInput {
    /// Creates an input yielding all of `data`.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: Some(data.into()),
        }
    }

    /// Creates an input yielding `data[offset..offset + length]`.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidArgument`] if the window does not fit.
    pub fn with_window(
        data: impl Into<Bytes>,
        offset: usize,
        length: usize,
    ) -> Result<Self, InputError> {
        let data = data.into();
        let end = offset
            .checked_add(length)
            .filter(|&end| end <= data.len())
            .ok_or(InputError::InvalidArgument {
                message: "array window exceeds array bounds",
            })?;

        Ok(Self {
            data: Some(data.slice(offset..end)),
        })
    }

    /// Replaces the data, re-arming the input.
    ///
    /// Returns the previous data if it had not been consumed yet.
    pub fn reset(&mut self, data: impl Into<Bytes>) -> Option<Bytes> {
        self.data.replace(data.into())
    }

    /// Returns true once the data has been handed out.
    pub fn is_exhausted(&self) -> bool {
        self.data.as_ref().is_none_or(Bytes::is_empty)
    }
}

impl BufferInput for ArrayInput {
    fn next(&mut self) -> Result<Option<Buffer>, InputError> {
        Ok(self
            .data
            .take()
            .filter(|data| !data.is_empty())
            .map(Buffer::from))
    }

    fn close(&mut self) -> Result<(), InputError> {
        Ok(())
    }
}

impl From<Bytes> for ArrayInput {
    fn from(data: Bytes) -> Self {
        Self::new(data)
    }
}

impl From<Vec<u8>> for ArrayInput {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&'static [u8]> for ArrayInput {
    fn from(data: &'static [u8]) -> Self {
        Self::new(Bytes::from_static(data))
    }
}
