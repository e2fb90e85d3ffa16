use std::{
    io::{self, Write},
    sync::mpsc::{sync_channel, Receiver, SyncSender},
};

/// Bounded in-process pipe carrying byte chunks from one writer to one reader.
///
/// At most `depth` chunks are in flight; the writer blocks until the reader
/// catches up.
pub fn pipe(depth: usize) -> (PipeWriter, PipeReader) {
    let (sender, receiver) = sync_channel(depth);
    (PipeWriter { sender }, PipeReader { receiver })
}

pub struct PipeWriter {
    sender: SyncSender<Vec<u8>>,
}

impl Write for PipeWriter {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        if buffer.is_empty() {
            return Ok(0);
        }
        self.sender
            .send(buffer.to_vec())
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "pipe reader closed"))?;
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Yields chunks until every writer has been dropped.
pub struct PipeReader {
    receiver: Receiver<Vec<u8>>,
}

impl PipeReader {
    pub fn drain_into(self, output: &mut Vec<u8>) {
        for chunk in self {
            output.extend_from_slice(&chunk);
        }
    }
}

impl Iterator for PipeReader {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        self.receiver.recv().ok()
    }
}
