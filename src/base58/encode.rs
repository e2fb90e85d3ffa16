use super::{ALPHABET, LEADING_ZEROS};

pub type Encoder<'a> = crate::base_positional::Encoder<'a, 58>;

pub const ENCODER: Encoder = Encoder::new(&ALPHABET, LEADING_ZEROS);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    ENCODER.encode(input)
}

pub fn encode_to_vec(input: impl AsRef<[u8]>) -> Vec<u8> {
    ENCODER.encode_to_vec(input)
}
