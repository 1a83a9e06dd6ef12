//! Async streaming support for buffer input.
//!
//! This module provides asynchronous buffer input using the `futures-io::AsyncRead`
//! trait, making it runtime-agnostic and compatible with tokio, async-std,
//! smol, and other async runtimes.
//!
//! - [`AsyncStreamInput`] - Stream of buffers filled from an async reader
//! - [`buffer_stream`] - Creates an [`AsyncStreamInput`] with a configuration
//!
//! This module requires the `async-io` feature to be enabled.

mod stream;

pub use stream::{AsyncStreamInput, buffer_stream};
