//! Buffer type.
//!
//! - [`Buffer`] - Immutable, cheaply cloneable span of bytes with zero-copy slicing

mod data;

pub use data::Buffer;
