//! Async file input example.
//!
//! Demonstrates feeding a tokio file through the runtime-agnostic
//! buffer stream via `tokio_util::compat`.
//!
//! Run with:
//!     cargo run --example async_tokio --features async-io -- /path/to/file

use std::env;

use bufinput::{InputConfig, buffer_stream};
use futures_util::StreamExt;
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    let file = tokio::fs::File::open(&path).await?;
    let mut stream = buffer_stream(file.compat(), InputConfig::new(16 * 1024)?)?;

    let mut total_buffers = 0;
    let mut total_bytes = 0;

    while let Some(buffer) = stream.next().await {
        let buffer = buffer?;
        total_buffers += 1;
        total_bytes += buffer.len();
    }

    println!("{}: {} buffers, {} bytes", path, total_buffers, total_bytes);
    Ok(())
}
