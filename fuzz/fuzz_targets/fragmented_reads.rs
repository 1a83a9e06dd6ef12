#![no_main]

use std::io;

use bufinput::{BufferInput, ByteSource, InputConfig, InputSelector, ReadOutcome};
use libfuzzer_sys::fuzz_target;

/// Source that splits its data into reads sized by the fuzzer.
struct Fragmented<'a> {
    data: &'a [u8],
    sizes: &'a [u8],
    step: usize,
}

impl ByteSource for Fragmented<'_> {
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome> {
        if self.data.is_empty() {
            return Ok(ReadOutcome::End);
        }
        let size = self.sizes.get(self.step % self.sizes.len().max(1)).copied();
        self.step += 1;

        // a zero size is an empty, non-terminal read
        let n = usize::from(size.unwrap_or(u8::MAX))
            .min(buf.len())
            .min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(ReadOutcome::Read(n))
    }
}

fuzz_target!(|input: (u16, Vec<u8>, Vec<u8>)| {
    let (buffer_size, sizes, data) = input;
    if !sizes.is_empty() && sizes.iter().all(|&s| s == 0) {
        return;
    }
    let buffer_size = usize::from(buffer_size).max(1);

    // keep the idle cap above the longest run of zero sizes
    let config = InputConfig::new(buffer_size)
        .unwrap()
        .with_max_idle_reads(sizes.len() + 1);

    let source = Fragmented {
        data: &data,
        sizes: &sizes,
        step: 0,
    };
    let mut input = InputSelector::new(config).select(source).unwrap();

    // Verify: buffers concatenate to the source, only the last may be short
    let mut joined = Vec::with_capacity(data.len());
    let mut short_seen = false;
    while let Some(buffer) = input.next().unwrap() {
        assert!(!buffer.is_empty());
        assert!(buffer.len() <= buffer_size);
        assert!(!short_seen, "short buffer before end of data");
        short_seen = buffer.len() < buffer_size;
        joined.extend_from_slice(&buffer);
    }
    assert_eq!(joined, data);

    // Verify: end-of-data is terminal
    for _ in 0..3 {
        assert!(input.next().unwrap().is_none());
    }
    input.close().unwrap();
});
