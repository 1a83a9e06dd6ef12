//! Error types for bufinput.

use std::fmt;

/// Errors that can occur while producing or releasing buffers.
#[derive(Debug)]
pub enum InputError {
    /// Reading from or positioning the underlying source failed.
    ///
    /// The input does not treat this as end-of-data; calling `next()` again
    /// retries if the source supports it.
    Io(std::io::Error),

    /// Invalid construction argument (configuration or array window).
    InvalidArgument {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// Releasing the underlying source failed.
    ///
    /// The source has still been dropped when this is returned.
    Release(std::io::Error),

    /// The source kept returning empty reads without signaling end-of-data.
    Stalled {
        /// Number of consecutive empty reads observed.
        attempts: usize,
    },

    /// The input was used after `close()`.
    Closed,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io(e) => write!(f, "io error: {}", e),
            InputError::InvalidArgument { message } => {
                write!(f, "invalid argument: {}", message)
            }
            InputError::Release(e) => write!(f, "failed to release source: {}", e),
            InputError::Stalled { attempts } => {
                write!(f, "source stalled: {} empty reads without data", attempts)
            }
            InputError::Closed => write!(f, "input is closed"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) | InputError::Release(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        InputError::Io(e)
    }
}
