use crate::{
    transform::{apply_all, Transform},
    Error,
};

const TABLE: &[u8; 16] = b"0123456789abcdef";

pub(crate) const fn value(character: u8) -> Option<u8> {
    match character {
        b'A'..=b'F' => Some(character - b'A' + 10),
        b'a'..=b'f' => Some(character - b'a' + 10),
        b'0'..=b'9' => Some(character - b'0'),
        _ => None,
    }
}

fn push_digits(input: &[u8], output: &mut Vec<u8>) {
    output.reserve(input.len() * 2);
    for byte in input {
        output.push(TABLE[(byte >> 4) as usize]);
        output.push(TABLE[(byte & 0x0F) as usize]);
    }
}

#[derive(Default)]
pub struct Encoder;

impl Transform for Encoder {
    fn update(&mut self, chunk: &[u8], output: &mut Vec<u8>) -> Result<(), Error> {
        push_digits(chunk, output);
        Ok(())
    }

    fn finish(&mut self, _output: &mut Vec<u8>) -> Result<(), Error> {
        Ok(())
    }
}

/// Accepts both cases; a digit left over at the end is an error.
#[derive(Default)]
pub struct Decoder {
    high: Option<u8>,
    index: usize,
}

impl Transform for Decoder {
    fn update(&mut self, chunk: &[u8], output: &mut Vec<u8>) -> Result<(), Error> {
        for (offset, &character) in chunk.iter().enumerate() {
            let nibble = value(character).ok_or_else(|| Error::unsupported_character(chunk, offset).offset(self.index))?;
            match self.high.take() {
                Some(high) => output.push(high << 4 | nibble),
                None => self.high = Some(nibble),
            }
        }
        self.index += chunk.len();
        Ok(())
    }

    fn finish(&mut self, _output: &mut Vec<u8>) -> Result<(), Error> {
        match self.high {
            Some(_) => Err(Error::OddLength),
            None => Ok(()),
        }
    }
}

pub fn encode_to_vec(input: impl AsRef<[u8]>) -> Vec<u8> {
    let mut output = Vec::new();
    push_digits(input.as_ref(), &mut output);
    output
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    encode_to_vec(input).into_iter().map(char::from).collect()
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    apply_all(&mut Decoder::default(), input.as_ref())
}
