// Integration tests for buffer inputs
// Tests cover: selection, zero-copy, fragmentation, end-of-data, release semantics

use std::cell::Cell;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, Cursor, Write};
use std::rc::Rc;

use bufinput::{
    ArrayInput, Buffer, BufferInput, ByteSource, InputConfig, InputError, InputSelector,
    ReadOutcome, ReaderSource, SelectedInput, StreamInput, buffer_input,
};
use bytes::Bytes;

// ============================================================================
// Test Sources
// ============================================================================

/// A sequential source that answers reads according to a script.
struct ScriptedSource {
    data: VecDeque<u8>,
    script: VecDeque<Step>,
    closes: Rc<Cell<usize>>,
    fail_close: bool,
}

#[derive(Clone, Copy)]
enum Step {
    /// Deliver up to this many bytes.
    Bytes(usize),
    /// Deliver nothing, without ending.
    Empty,
    /// Signal end-of-data.
    End,
    /// Fail the read.
    Fail,
}

impl ScriptedSource {
    fn new(data: &[u8], script: &[Step]) -> Self {
        Self {
            data: data.iter().copied().collect(),
            script: script.iter().copied().collect(),
            closes: Rc::new(Cell::new(0)),
            fail_close: false,
        }
    }

    fn failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }
}

impl ByteSource for ScriptedSource {
    fn read_into(&mut self, buf: &mut [u8]) -> io::Result<ReadOutcome> {
        match self.script.pop_front().unwrap_or(Step::End) {
            Step::Bytes(n) => {
                let k = n.min(buf.len()).min(self.data.len());
                for (slot, byte) in buf.iter_mut().zip(self.data.drain(..k)) {
                    *slot = byte;
                }
                // the rest of this fragment arrives with the next read
                if k < n && !self.data.is_empty() {
                    self.script.push_front(Step::Bytes(n - k));
                }
                Ok(ReadOutcome::Read(k))
            }
            Step::Empty => Ok(ReadOutcome::Read(0)),
            Step::End => Ok(ReadOutcome::End),
            Step::Fail => Err(io::Error::other("read failed")),
        }
    }

    fn close(&mut self) -> io::Result<()> {
        self.closes.set(self.closes.get() + 1);
        if self.fail_close {
            return Err(io::Error::other("release failed"));
        }
        Ok(())
    }
}

fn drain<I: BufferInput>(input: &mut I) -> Vec<Buffer> {
    let mut buffers = Vec::new();
    while let Some(buffer) = input.next().expect("next() should succeed") {
        buffers.push(buffer);
    }
    buffers
}

fn concat(buffers: &[Buffer]) -> Vec<u8> {
    buffers.iter().flat_map(|b| b.iter().copied()).collect()
}

// ============================================================================
// Direct Array Input
// ============================================================================

#[test]
fn test_array_window_scenario() {
    let data = Bytes::from(vec![10u8, 20, 30, 40, 50]);
    let mut input = ArrayInput::with_window(data.clone(), 1, 3).unwrap();

    let buffer = input.next().unwrap().expect("first call yields the window");
    assert_eq!(&buffer[..], &[20, 30, 40]);
    assert_eq!(
        buffer.as_ptr(),
        data.as_ptr().wrapping_add(1),
        "Window must share the array's storage"
    );

    assert!(input.next().unwrap().is_none());
    assert!(input.close().is_ok());
}

#[test]
fn test_resident_sources_are_not_copied() {
    for offset in [0usize, 5, 17, 63, 64] {
        let data: Vec<u8> = (0..64).collect();
        let ptr = data.as_ptr();

        let mut cursor = Cursor::new(data);
        cursor.set_position(offset as u64);

        let mut input = buffer_input(cursor).unwrap();
        assert!(matches!(input, SelectedInput::Array(_)));

        let buffers = drain(&mut input);
        let expected: Vec<u8> = (offset as u8..64).collect();
        assert_eq!(concat(&buffers), expected);

        match buffers.as_slice() {
            [] => assert_eq!(offset, 64, "Only an empty window yields nothing"),
            [only] => assert_eq!(only.as_ptr(), ptr.wrapping_add(offset)),
            _ => panic!("resident input must yield a single buffer"),
        }
    }
}

// ============================================================================
// Sequential Input
// ============================================================================

#[test]
fn test_short_read_then_end_mid_chunk() {
    let source = ScriptedSource::new(&[1, 2, 3, 4, 5, 6, 7], &[Step::Bytes(3), Step::End]);
    let mut input = StreamInput::with_config(source, InputConfig::new(4).unwrap()).unwrap();

    let buffer = input.next().unwrap().unwrap();
    assert_eq!(buffer.len(), 3, "End mid-chunk yields a short buffer");
    assert_eq!(&buffer[..], &[1, 2, 3]);
    assert!(input.next().unwrap().is_none());
}

#[test]
fn test_fragmented_reads_reproduce_stream() {
    let data: Vec<u8> = (0..1 + 17 + 8192).map(|i| (i * 7 + 13) as u8).collect();
    let script = [
        Step::Bytes(1),
        Step::Empty,
        Step::Bytes(17),
        Step::Bytes(8192),
        Step::End,
    ];

    for size in [1, 4, 17, 100, 8192, 10_000] {
        let source = ScriptedSource::new(&data, &script);
        let config = InputConfig::new(size).unwrap();
        let mut input = InputSelector::new(config).select(source).unwrap();
        assert!(matches!(input, SelectedInput::Stream(_)));

        let buffers = drain(&mut input);
        assert_eq!(concat(&buffers), data, "buffer size {}", size);

        // every buffer but the last is full
        for buffer in &buffers[..buffers.len() - 1] {
            assert_eq!(buffer.len(), size);
        }
    }
}

#[test]
fn test_end_of_data_is_terminal() {
    let source = ScriptedSource::new(b"abc", &[Step::Bytes(3)]);
    let mut input = StreamInput::new(source);

    assert_eq!(&input.next().unwrap().unwrap()[..], b"abc");
    for _ in 0..3 {
        assert!(input.next().unwrap().is_none());
    }
}

#[test]
fn test_empty_source_ends_immediately() {
    let source = ScriptedSource::new(&[], &[Step::End]);
    let mut input = buffer_input(source).unwrap();
    assert!(input.next().unwrap().is_none());

    let empty: &[u8] = &[];
    let mut input = buffer_input(ReaderSource::new(empty)).unwrap();
    assert!(input.next().unwrap().is_none());

    let mut input = buffer_input(Cursor::new(Vec::<u8>::new())).unwrap();
    assert!(input.next().unwrap().is_none());
}

#[test]
fn test_empty_reads_are_retried_not_terminal() {
    let source = ScriptedSource::new(
        b"xy",
        &[Step::Empty, Step::Empty, Step::Bytes(1), Step::Empty, Step::Bytes(1)],
    );
    let mut input = StreamInput::with_config(source, InputConfig::new(2).unwrap()).unwrap();

    assert_eq!(&input.next().unwrap().unwrap()[..], b"xy");
    assert!(!input.reached_eof());
}

#[test]
fn test_endless_empty_reads_do_not_spin_forever() {
    let script = [Step::Empty; 64];
    let source = ScriptedSource::new(b"", &script);
    let config = InputConfig::new(8).unwrap().with_max_idle_reads(8);
    let mut input = StreamInput::with_config(source, config).unwrap();

    assert!(matches!(
        input.next(),
        Err(InputError::Stalled { attempts: 8 })
    ));
}

// ============================================================================
// Release Semantics
// ============================================================================

#[test]
fn test_close_releases_once() {
    let source = ScriptedSource::new(b"abc", &[]);
    let closes = Rc::clone(&source.closes);
    let mut input = buffer_input(source).unwrap();

    input.close().unwrap();
    input.close().unwrap();
    drop(input);

    assert_eq!(closes.get(), 1);
}

#[test]
fn test_release_failure_is_surfaced_once() {
    let source = ScriptedSource::new(b"abc", &[]).failing_close();
    let closes = Rc::clone(&source.closes);
    let mut input = StreamInput::new(source);

    assert!(matches!(input.close(), Err(InputError::Release(_))));
    assert!(input.close().is_ok(), "Source is already released");
    assert!(matches!(input.next(), Err(InputError::Closed)));
    assert_eq!(closes.get(), 1);
}

#[test]
fn test_close_after_read_error_releases_once() {
    let source = ScriptedSource::new(b"abc", &[Step::Bytes(1), Step::Fail]).failing_close();
    let closes = Rc::clone(&source.closes);
    let mut input = StreamInput::with_config(source, InputConfig::new(4).unwrap()).unwrap();

    assert!(matches!(input.next(), Err(InputError::Io(_))));
    assert!(!input.reached_eof());

    assert!(matches!(input.close(), Err(InputError::Release(_))));
    assert!(input.close().is_ok());
    drop(input);

    assert_eq!(closes.get(), 1);
}

#[test]
fn test_drop_releases_unclosed_input() {
    let source = ScriptedSource::new(b"abc", &[Step::Bytes(1)]);
    let closes = Rc::clone(&source.closes);

    let mut input = StreamInput::new(source);
    input.next().unwrap();
    drop(input);

    assert_eq!(closes.get(), 1);
}

#[test]
fn test_into_inner_does_not_release() {
    let source = ScriptedSource::new(b"abc", &[]);
    let closes = Rc::clone(&source.closes);

    let input = StreamInput::new(source);
    let source = input.into_inner().expect("not closed");
    assert_eq!(closes.get(), 0);
    drop(source);
}

#[test]
fn test_buffers_iterator_closes_at_end() {
    let source = ScriptedSource::new(&[9; 10], &[Step::Bytes(10)]);
    let closes = Rc::clone(&source.closes);

    let total: usize = buffer_input(source)
        .unwrap()
        .buffers()
        .map(|b| b.unwrap().len())
        .sum();

    assert_eq!(total, 10);
    assert_eq!(closes.get(), 1);
}

#[test]
fn test_buffers_iterator_yields_release_error() {
    let source = ScriptedSource::new(&[9; 4], &[Step::Bytes(4)]).failing_close();
    let items: Vec<_> = StreamInput::new(source).buffers().collect();

    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    assert!(matches!(items[1], Err(InputError::Release(_))));
}

// ============================================================================
// File Input
// ============================================================================

#[test]
fn test_file_selects_channel_input() {
    let path = std::env::temp_dir().join(format!("bufinput-test-{}.bin", std::process::id()));
    let data: Vec<u8> = (0..20_000).map(|i| (i % 251) as u8).collect();
    File::create(&path).unwrap().write_all(&data).unwrap();

    let file = File::open(&path).unwrap();
    let mut input = InputSelector::new(InputConfig::new(4096).unwrap())
        .select(file)
        .unwrap();
    assert!(matches!(input, SelectedInput::Channel(_)));

    let buffers = drain(&mut input);
    assert!(buffers.iter().all(|b| b.len() <= 4096));
    assert_eq!(concat(&buffers), data);
    assert!(input.next().unwrap().is_none());
    input.close().unwrap();

    std::fs::remove_file(&path).unwrap();
}

// ============================================================================
// Trait Objects
// ============================================================================

#[test]
fn test_decoder_uses_any_input_uniformly() {
    let data: &'static [u8] = b"the same bytes three ways";
    let inputs: Vec<Box<dyn BufferInput>> = vec![
        Box::new(buffer_input(Cursor::new(data)).unwrap()),
        Box::new(buffer_input(ReaderSource::new(data)).unwrap()),
        Box::new(ArrayInput::from(data)),
    ];

    for mut input in inputs {
        assert_eq!(concat(&drain(&mut input)), data);
        input.close().unwrap();
    }
}
