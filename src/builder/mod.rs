//! Chainable encode/decode builders.
//!
//! A builder owns its input, the result of the last operation and a sticky
//! error slot. Once the slot is set every further operation is a no-op and
//! the error is reported unchanged.

mod decoder;
mod encoder;

pub use decoder::Decoder;
pub use encoder::Encoder;

use crate::{codec::Codec, transform::Coordinator, Error};
use log::debug;
use std::{io::Read, mem};

enum Input {
    Empty,
    Buffer(Vec<u8>),
    Stream(Box<dyn Read + Send>),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Direction {
    Encode,
    Decode,
}

struct State {
    input: Input,
    result: Option<Vec<u8>>,
    error: Option<Error>,
    coordinator: Coordinator,
}

impl State {
    fn new(input: Input) -> Self {
        Self {
            input,
            result: None,
            error: None,
            coordinator: Coordinator::new(),
        }
    }

    fn with_input(mut self, input: Input) -> Self {
        if self.error.is_none() {
            self.input = input;
            self.result = None;
        }
        self
    }

    fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.coordinator = self.coordinator.with_chunk_size(chunk_size);
        self
    }

    fn apply(mut self, codec: Codec, direction: Direction) -> Self {
        if self.error.is_some() {
            return self;
        }
        let buffered = |input: &[u8]| match direction {
            Direction::Encode => codec.encode(input),
            Direction::Decode => codec.decode(input),
        };
        let result = match mem::replace(&mut self.input, Input::Empty) {
            Input::Buffer(buffer) => buffered(&buffer),
            Input::Stream(source) => {
                let transform = match direction {
                    Direction::Encode => codec.encoder(),
                    Direction::Decode => codec.decoder(),
                };
                self.coordinator.collect(source, transform)
            }
            Input::Empty => match self.result.take() {
                Some(previous) => buffered(&previous),
                None => Ok(Vec::new()),
            },
        };
        match result {
            Ok(output) => self.result = Some(output),
            Err(error) => {
                debug!("{:?} {} failed: {}", direction, codec, error);
                self.result = None;
                self.error = Some(error);
            }
        }
        self
    }

    fn bytes(&self) -> &[u8] {
        self.result.as_deref().unwrap_or_default()
    }

    fn into_result(self) -> Result<Vec<u8>, Error> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.result.unwrap_or_default()),
        }
    }
}
