//! Bit-packing codecs over alphabets of `2^bits` symbols, padded with `=`.

pub mod decode;
pub mod encode;

pub use crate::base_common::Alphabet;
pub use decode::Decoder;
pub use encode::Encoder;

const PADDING: u8 = b'=';
