use super::{Direction, Input, State};
use crate::{codec::Codec, Error};
use std::io::Read;

/// Encodes text, bytes or a stream with one or more codecs in sequence.
///
/// ```
/// use textcodec::{Codec, Encoder};
///
/// let encoded = Encoder::from_text("hello world").encode(Codec::Base58).to_text();
/// assert_eq!(encoded, "StV1DL6CwTryKyV");
/// ```
pub struct Encoder {
    state: State,
}

impl Encoder {
    pub fn new() -> Self {
        Self {
            state: State::new(Input::Empty),
        }
    }

    pub fn from_text(text: impl AsRef<str>) -> Self {
        Self::from_bytes(text.as_ref().as_bytes())
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            state: State::new(Input::Buffer(bytes.into())),
        }
    }

    pub fn from_source(source: impl Read + Send + 'static) -> Self {
        Self {
            state: State::new(Input::Stream(Box::new(source))),
        }
    }

    pub fn with_text(self, text: impl AsRef<str>) -> Self {
        self.with_bytes(text.as_ref().as_bytes())
    }

    pub fn with_bytes(self, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            state: self.state.with_input(Input::Buffer(bytes.into())),
        }
    }

    pub fn with_source(self, source: impl Read + Send + 'static) -> Self {
        Self {
            state: self.state.with_input(Input::Stream(Box::new(source))),
        }
    }

    pub fn with_chunk_size(self, chunk_size: usize) -> Self {
        Self {
            state: self.state.with_chunk_size(chunk_size),
        }
    }

    pub fn encode(self, codec: Codec) -> Self {
        Self {
            state: self.state.apply(codec, Direction::Encode),
        }
    }

    pub fn by_base58(self) -> Self {
        self.encode(Codec::Base58)
    }

    pub fn by_base58_check(self) -> Self {
        self.encode(Codec::Base58Check)
    }

    pub fn by_base62(self) -> Self {
        self.encode(Codec::Base62)
    }

    pub fn by_base64(self) -> Self {
        self.encode(Codec::Base64)
    }

    pub fn by_hex(self) -> Self {
        self.encode(Codec::Hex)
    }

    pub fn by_morse(self) -> Self {
        self.encode(Codec::Morse)
    }

    pub fn by_unicode(self) -> Self {
        self.encode(Codec::Unicode)
    }

    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(self.state.bytes()).into_owned()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.state.bytes().to_vec()
    }

    pub fn error(&self) -> Option<&Error> {
        self.state.error.as_ref()
    }

    pub fn into_result(self) -> Result<Vec<u8>, Error> {
        self.state.into_result()
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
