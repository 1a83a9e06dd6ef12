//! Configuration for buffer inputs.
//!
//! - [`InputConfig`] - Backing buffer capacity and idle-read tolerance
//!
//! # Example
//!
//! ```
//! use bufinput::InputConfig;
//!
//! // Custom chunk capacity
//! let config = InputConfig::new(64 * 1024)?;
//!
//! // Builder pattern
//! let config = InputConfig::default()
//!     .with_buffer_size(4096)
//!     .with_max_idle_reads(4);
//! config.validate()?;
//!
//! # Ok::<(), bufinput::InputError>(())
//! ```

use crate::error::InputError;

/// Default capacity of the backing buffer (8 KiB).
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024;

/// Default number of consecutive empty reads tolerated within one `next()`.
pub const DEFAULT_MAX_IDLE_READS: usize = 16;

/// Configuration for buffer inputs.
///
/// - `buffer_size` - Upper bound on the length of each produced buffer
/// - `max_idle_reads` - How many consecutive zero-length, non-terminal reads a
///   sequential input tolerates before giving up on the current `next()` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputConfig {
    buffer_size: usize,
    max_idle_reads: usize,
}

impl InputConfig {
    /// Creates a new configuration with the given buffer capacity.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidArgument`] if `buffer_size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bufinput::InputConfig;
    ///
    /// let config = InputConfig::new(4096)?;
    /// assert_eq!(config.buffer_size(), 4096);
    /// # Ok::<(), bufinput::InputError>(())
    /// ```
    pub fn new(buffer_size: usize) -> Result<Self, InputError> {
        let config = Self {
            buffer_size,
            max_idle_reads: DEFAULT_MAX_IDLE_READS,
        };
        config.validate()?;
        Ok(config)
    }

    /// Sets the backing buffer capacity.
    ///
    /// Note: This does not validate the configuration. Use [`InputConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Sets the number of consecutive empty reads tolerated per `next()` call.
    ///
    /// Note: This does not validate the configuration.
    pub fn with_max_idle_reads(mut self, attempts: usize) -> Self {
        self.max_idle_reads = attempts;
        self
    }

    /// Returns the backing buffer capacity.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Returns the idle-read cap.
    pub fn max_idle_reads(&self) -> usize {
        self.max_idle_reads
    }

    /// Validates the current configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use bufinput::InputConfig;
    ///
    /// let config = InputConfig::default().with_buffer_size(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), InputError> {
        if self.buffer_size == 0 {
            return Err(InputError::InvalidArgument {
                message: "buffer_size must be non-zero",
            });
        }

        if self.max_idle_reads == 0 {
            return Err(InputError::InvalidArgument {
                message: "max_idle_reads must be non-zero",
            });
        }

        Ok(())
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            max_idle_reads: DEFAULT_MAX_IDLE_READS,
        }
    }
}
