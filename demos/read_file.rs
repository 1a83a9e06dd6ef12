//! File input example.
//!
//! Run with:
//!     cargo run --example read_file -- /path/to/file

use std::env;
use std::fs::File;

use bufinput::{BufferInput, InputConfig, InputSelector, SelectedInput};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Reading file: {}\n", path);

    let file = File::open(&path)?;
    let metadata = file.metadata()?;
    println!("File size: {} bytes\n", metadata.len());

    // Larger buffers for file input
    let config = InputConfig::new(64 * 1024)?;
    let mut input = InputSelector::new(config).select(file)?;

    let strategy = match &input {
        SelectedInput::Array(_) => "array",
        SelectedInput::Channel(_) => "channel",
        SelectedInput::Stream(_) => "stream",
    };
    println!("Selected {} input\n", strategy);

    let mut total_buffers = 0;
    let mut total_bytes = 0;

    while let Some(buffer) = input.next()? {
        total_buffers += 1;
        total_bytes += buffer.len();
        println!("Buffer {}: len={:>8}", total_buffers, buffer.len());
    }
    input.close()?;

    println!("\nTotal: {} buffers, {} bytes", total_buffers, total_bytes);
    if total_buffers > 0 {
        println!("Average buffer size: {} bytes", total_bytes / total_buffers);
    }

    Ok(())
}
