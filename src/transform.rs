//! Streaming transform coordination.
//!
//! Codecs come in two shapes. Chunk-local codecs implement [`Transform`] and
//! are fed one chunk at a time, carrying only a bounded amount of state
//! across chunk boundaries. Codecs whose output depends on the whole payload
//! implement [`WholeTransform`] and can only be streamed through [`Collect`],
//! which buffers the entire source and applies the codec once at the end.

use crate::{pipe, Error};
use log::debug;
use std::{
    io::{self, Read, Write},
    mem, thread,
};

pub const CHUNK_SIZE: usize = 64 * 1024;

/// Number of chunks buffered between the producer thread and the caller.
pub const PIPE_DEPTH: usize = 4;

pub trait Transform: Send {
    fn update(&mut self, chunk: &[u8], output: &mut Vec<u8>) -> Result<(), Error>;

    /// Called once after the last chunk.
    fn finish(&mut self, output: &mut Vec<u8>) -> Result<(), Error>;
}

pub trait WholeTransform: Send {
    fn apply(&self, input: &[u8]) -> Result<Vec<u8>, Error>;
}

impl<F> WholeTransform for F
where
    F: Fn(&[u8]) -> Result<Vec<u8>, Error> + Send,
{
    fn apply(&self, input: &[u8]) -> Result<Vec<u8>, Error> {
        self(input)
    }
}

pub struct Collect<T> {
    inner: T,
    buffer: Vec<u8>,
}

impl<T: WholeTransform> Collect<T> {
    pub fn new(inner: T) -> Self {
        Self { inner, buffer: Vec::new() }
    }
}

impl<T: WholeTransform> Transform for Collect<T> {
    fn update(&mut self, chunk: &[u8], _output: &mut Vec<u8>) -> Result<(), Error> {
        self.buffer.extend_from_slice(chunk);
        Ok(())
    }

    fn finish(&mut self, output: &mut Vec<u8>) -> Result<(), Error> {
        let buffer = mem::take(&mut self.buffer);
        output.extend(self.inner.apply(&buffer)?);
        Ok(())
    }
}

/// Runs `transform` over an in-memory buffer as a single chunk.
pub fn apply_all(transform: &mut dyn Transform, input: &[u8]) -> Result<Vec<u8>, Error> {
    let mut output = Vec::new();
    transform.update(input, &mut output)?;
    transform.finish(&mut output)?;
    Ok(output)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Coordinator {
    chunk_size: usize,
    depth: usize,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl Coordinator {
    pub const fn new() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            depth: PIPE_DEPTH,
        }
    }

    pub fn with_chunk_size(self, chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
            ..self
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Reads `source` to exhaustion through `transform` into `sink`, stopping
    /// at the first failure on either side. Returns the number of bytes read.
    pub fn run(&self, source: &mut dyn Read, transform: &mut dyn Transform, sink: &mut dyn Write) -> Result<u64, Error> {
        let mut chunk = vec![0u8; self.chunk_size];
        let mut output = Vec::new();
        let mut total = 0u64;
        let mut chunks = 0usize;
        loop {
            let read = match source.read(&mut chunk) {
                Ok(0) => break,
                Ok(read) => read,
                Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
                Err(error) => return Err(Error::source_read(error)),
            };
            total += read as u64;
            chunks += 1;
            transform.update(&chunk[..read], &mut output)?;
            self.drain(&mut output, sink)?;
        }
        transform.finish(&mut output)?;
        self.drain(&mut output, sink)?;
        sink.flush().map_err(Error::sink)?;
        debug!("transformed {} bytes read in {} chunks", total, chunks);
        Ok(total)
    }

    fn drain(&self, output: &mut Vec<u8>, sink: &mut dyn Write) -> Result<(), Error> {
        for piece in output.chunks(self.chunk_size) {
            sink.write_all(piece).map_err(Error::sink)?;
        }
        output.clear();
        Ok(())
    }

    /// Runs the transform on a producer thread and collects its output on
    /// the calling thread through a bounded pipe.
    pub fn collect(&self, mut source: Box<dyn Read + Send>, mut transform: Box<dyn Transform>) -> Result<Vec<u8>, Error> {
        let (mut writer, reader) = pipe::pipe(self.depth);
        thread::scope(|scope| {
            let producer = scope.spawn(move || self.run(&mut *source, &mut *transform, &mut writer));
            let mut output = Vec::new();
            reader.drain_into(&mut output);
            match producer.join() {
                Ok(result) => result.map(|_| output),
                Err(_) => Err(Error::sink(io::Error::new(io::ErrorKind::Other, "transform thread panicked"))),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_all, Collect, Coordinator, Transform};
    use crate::Error;
    use std::{
        io::{self, Cursor, Read, Write},
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
    };

    struct Uppercase;

    impl Transform for Uppercase {
        fn update(&mut self, chunk: &[u8], output: &mut Vec<u8>) -> Result<(), Error> {
            output.extend(chunk.iter().map(u8::to_ascii_uppercase));
            Ok(())
        }

        fn finish(&mut self, output: &mut Vec<u8>) -> Result<(), Error> {
            output.push(b'.');
            Ok(())
        }
    }

    struct Reject;

    impl Transform for Reject {
        fn update(&mut self, chunk: &[u8], _output: &mut Vec<u8>) -> Result<(), Error> {
            Err(Error::UnsupportedCharacter {
                character: char::from(chunk[0]),
                index: 0,
            })
        }

        fn finish(&mut self, _output: &mut Vec<u8>) -> Result<(), Error> {
            Ok(())
        }
    }

    struct FailingReader {
        remaining: usize,
        reads: Arc<AtomicUsize>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "source gone"));
            }
            let read = self.remaining.min(buffer.len());
            buffer[..read].fill(b'a');
            self.remaining -= read;
            Ok(read)
        }
    }

    struct InterruptedReader {
        inner: Cursor<Vec<u8>>,
        interrupted: bool,
    }

    impl Read for InterruptedReader {
        fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }
            self.inner.read(buffer)
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buffer: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn run() {
        let mut output = Vec::new();
        let read = Coordinator::new()
            .with_chunk_size(2)
            .run(&mut Cursor::new(b"hello"), &mut Uppercase, &mut output)
            .unwrap();
        assert_eq!(read, 5);
        assert_eq!(output, b"HELLO.");
    }

    #[test]
    fn empty_source() {
        let mut output = Vec::new();
        let read = Coordinator::new().run(&mut io::empty(), &mut Uppercase, &mut output).unwrap();
        assert_eq!(read, 0);
        assert_eq!(output, b".");
    }

    #[test]
    fn interrupted_read_is_retried() {
        let mut source = InterruptedReader {
            inner: Cursor::new(b"abc".to_vec()),
            interrupted: false,
        };
        let mut output = Vec::new();
        Coordinator::new().run(&mut source, &mut Uppercase, &mut output).unwrap();
        assert_eq!(output, b"ABC.");
    }

    #[test]
    fn source_read_error() {
        let reads = Arc::new(AtomicUsize::new(0));
        let mut source = FailingReader {
            remaining: 10,
            reads: reads.clone(),
        };
        let mut output = Vec::new();
        let result = Coordinator::new().with_chunk_size(4).run(&mut source, &mut Uppercase, &mut output);
        match result {
            Err(Error::SourceRead(error)) => assert_eq!(error.kind(), io::ErrorKind::ConnectionReset),
            other => panic!("unexpected result {:?}", other),
        }
        assert_eq!(reads.load(Ordering::SeqCst), 4);
        assert_eq!(output, b"AAAAAAAAAA");
    }

    #[test]
    fn sink_error() {
        let result = Coordinator::new().run(&mut Cursor::new(b"abc"), &mut Uppercase, &mut FailingWriter);
        match result {
            Err(Error::Sink(error)) => assert_eq!(error.to_string(), "disk full"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn first_failure_wins() {
        let reads = Arc::new(AtomicUsize::new(0));
        let mut source = FailingReader {
            remaining: 100,
            reads: reads.clone(),
        };
        let result = Coordinator::new()
            .with_chunk_size(8)
            .run(&mut source, &mut Reject, &mut FailingWriter);
        assert_eq!(result, Err(Error::UnsupportedCharacter { character: 'a', index: 0 }));
        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn collect_applies_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let transform = Collect::new(move |input: &[u8]| -> Result<Vec<u8>, Error> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(input.iter().rev().copied().collect())
        });
        let output = Coordinator::new()
            .with_chunk_size(3)
            .collect(Box::new(Cursor::new(b"abcdefgh".to_vec())), Box::new(transform))
            .unwrap();
        assert_eq!(output, b"hgfedcba");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn collect_through_pipe() {
        let input: Vec<u8> = (0..10_000u32).map(|index| b'a' + (index % 26) as u8).collect();
        let expected = apply_all(&mut Uppercase, &input).unwrap();
        for chunk_size in [1, 7, 64, 4096] {
            let output = Coordinator::new()
                .with_chunk_size(chunk_size)
                .collect(Box::new(Cursor::new(input.clone())), Box::new(Uppercase))
                .unwrap();
            assert_eq!(output, expected, "chunk size {}", chunk_size);
        }
    }

    #[test]
    fn collect_source_read_error() {
        let source = FailingReader {
            remaining: 3,
            reads: Arc::new(AtomicUsize::new(0)),
        };
        let result = Coordinator::new().collect(Box::new(source), Box::new(Uppercase));
        assert!(matches!(result, Err(Error::SourceRead(_))));
    }

    #[test]
    fn chunk_size_is_at_least_one() {
        assert_eq!(Coordinator::new().with_chunk_size(0).chunk_size(), 1);
    }
}
