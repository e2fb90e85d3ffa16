use super::{ALPHABET, LEADING_ZEROS};
use crate::Error;

pub type Decoder<'a> = crate::base_positional::Decoder<'a, 58>;

pub const DECODER: Decoder = Decoder::new(&ALPHABET, LEADING_ZEROS);

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    DECODER.decode(input)
}
