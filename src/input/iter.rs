//! Iterator front end over a [`BufferInput`].

use std::iter::FusedIterator;

use crate::buffer::Buffer;
use crate::error::InputError;

use super::BufferInput;

/// An iterator that yields buffers from a [`BufferInput`].
///
/// Stops at end-of-data and closes the input, yielding the release error as
/// a final item if closing fails. The first error also ends iteration; the
/// input is then released when the iterator is dropped.
///
/// # Example
///
/// ```
/// use bufinput::{buffer_input, BufferInput};
///
/// let data: &[u8] = &[0u8; 20_000];
/// let mut total = 0;
/// for buffer in buffer_input(data)?.buffers() {
///     total += buffer?.len();
/// }
/// assert_eq!(total, 20_000);
/// # Ok::<(), bufinput::InputError>(())
/// ```
#[derive(Debug)]
pub struct Buffers<I> {
    input: I,
    finished: bool,
}

impl<I: BufferInput> Buffers<I> {
    pub(crate) fn new(input: I) -> Self {
        Self {
            input,
            finished: false,
        }
    }

    /// Returns a reference to the wrapped input.
    pub fn get_ref(&self) -> &I {
        &self.input
    }

    /// Unwraps the input.
    pub fn into_inner(self) -> I {
        self.input
    }
}

impl<I: BufferInput> Iterator for Buffers<I> {
    type Item = Result<Buffer, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.input.next() {
            Ok(Some(buffer)) => Some(Ok(buffer)),
            Ok(None) => {
                self.finished = true;
                self.input.close().err().map(Err)
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<I: BufferInput> FusedIterator for Buffers<I> {}
