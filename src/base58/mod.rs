pub mod decode;
pub mod encode;
pub use crate::base_positional::{Alphabet, LeadingZeros};

pub use decode::{decode, Decoder, DECODER};
pub use encode::{encode, encode_to_vec, Encoder, ENCODER};

pub const ALPHABET: Alphabet<58> = match Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub const LEADING_ZEROS: LeadingZeros = LeadingZeros::Repeat;
