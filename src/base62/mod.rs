//! Base62 with digits, then upper case, then lower case letters.
//!
//! Runs of leading zero bytes are written as the `0` symbol followed by the
//! run length, so `[0x00; 4]` encodes to `"04"`.

use crate::{
    base_positional::{self, Alphabet, LeadingZeros},
    Error,
};

pub const ALPHABET: Alphabet<62> = match Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub type Encoder<'a> = base_positional::Encoder<'a, 62>;
pub type Decoder<'a> = base_positional::Decoder<'a, 62>;

pub const ENCODER: Encoder = Encoder::new(&ALPHABET, LeadingZeros::RunLength);
pub const DECODER: Decoder = Decoder::new(&ALPHABET, LeadingZeros::RunLength);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    ENCODER.encode(input)
}

pub fn encode_to_vec(input: impl AsRef<[u8]>) -> Vec<u8> {
    ENCODER.encode_to_vec(input)
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    DECODER.decode(input)
}
