use crate::{
    base_binary,
    transform::apply_all,
    Error,
};

pub use crate::base_common::Alphabet;

pub const ALPHABET: Alphabet<64> = match Alphabet::new(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub type Encoder = base_binary::Encoder<'static, 64>;
pub type Decoder = base_binary::Decoder<'static, 64>;

pub const fn encoder() -> Encoder {
    Encoder::new(&ALPHABET, 6)
}

pub const fn decoder() -> Decoder {
    Decoder::new(&ALPHABET, 6)
}

pub fn encode_to_vec(input: impl AsRef<[u8]>) -> Vec<u8> {
    apply_all(&mut encoder(), input.as_ref()).unwrap_or_default()
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    encode_to_vec(input).into_iter().map(char::from).collect()
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    apply_all(&mut decoder(), input.as_ref())
}
