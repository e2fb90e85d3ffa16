//! `\uXXXX` escaping of UTF-8 text, with UTF-16 surrogate pairs for
//! characters outside the basic multilingual plane.

use crate::{
    hex,
    transform::{apply_all, Transform},
    Error,
};
use std::mem;

const DIGITS: &[u8; 16] = b"0123456789abcdef";
const ESCAPE_LEN: usize = 6;

fn push_escape(unit: u16, output: &mut Vec<u8>) {
    output.extend_from_slice(b"\\u");
    for shift in [12, 8, 4, 0] {
        output.push(DIGITS[((unit >> shift) & 0x0F) as usize]);
    }
}

fn parse_escape(escape: &[u8]) -> Option<u16> {
    match escape {
        [b'\\', b'u', digits @ ..] if digits.len() == 4 => digits
            .iter()
            .try_fold(0u16, |unit, &digit| Some((unit << 4) | hex::value(digit)? as u16)),
        _ => None,
    }
}

fn push_char(character: char, output: &mut Vec<u8>) {
    let mut buffer = [0u8; 4];
    output.extend_from_slice(character.encode_utf8(&mut buffer).as_bytes());
}

/// Joins the carried-over bytes with `chunk` only when something was carried.
fn join<'a>(pending: &mut Vec<u8>, chunk: &'a [u8], joined: &'a mut Vec<u8>) -> &'a [u8] {
    if pending.is_empty() {
        chunk
    } else {
        pending.extend_from_slice(chunk);
        *joined = mem::take(pending);
        joined.as_slice()
    }
}

#[derive(Default)]
pub struct Encoder {
    pending: Vec<u8>,
    consumed: usize,
}

impl Transform for Encoder {
    fn update(&mut self, chunk: &[u8], output: &mut Vec<u8>) -> Result<(), Error> {
        let mut joined = Vec::new();
        let data = join(&mut self.pending, chunk, &mut joined);
        let valid = match std::str::from_utf8(data) {
            Ok(_) => data.len(),
            Err(error) => match error.error_len() {
                Some(_) => return Err(Error::InvalidUtf8 { index: self.consumed + error.valid_up_to() }),
                None => error.valid_up_to(),
            },
        };
        let text = std::str::from_utf8(&data[..valid]).map_err(|_| Error::InvalidUtf8 { index: self.consumed })?;
        let mut units = [0u16; 2];
        for character in text.chars() {
            for &unit in character.encode_utf16(&mut units).iter() {
                push_escape(unit, output);
            }
        }
        self.consumed += valid;
        self.pending = data[valid..].to_vec();
        Ok(())
    }

    fn finish(&mut self, _output: &mut Vec<u8>) -> Result<(), Error> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidUtf8 { index: self.consumed })
        }
    }
}

/// Bytes outside escapes are copied through unchanged.
#[derive(Default)]
pub struct Decoder {
    pending: Vec<u8>,
    position: usize,
    high: Option<(u16, usize)>,
}

impl Decoder {
    fn unit(&mut self, unit: u16, index: usize, output: &mut Vec<u8>) -> Result<(), Error> {
        let code_point = match (self.high.take(), unit) {
            (Some((high, _)), 0xDC00..=0xDFFF) => 0x10000 + (((high - 0xD800) as u32) << 10) + (unit - 0xDC00) as u32,
            (Some((_, high_index)), _) => return Err(Error::InvalidEscape { index: high_index }),
            (None, 0xD800..=0xDBFF) => {
                self.high = Some((unit, index));
                return Ok(());
            }
            (None, 0xDC00..=0xDFFF) => return Err(Error::InvalidEscape { index }),
            (None, unit) => unit as u32,
        };
        let character = char::from_u32(code_point).ok_or(Error::InvalidEscape { index })?;
        push_char(character, output);
        Ok(())
    }
}

impl Transform for Decoder {
    fn update(&mut self, chunk: &[u8], output: &mut Vec<u8>) -> Result<(), Error> {
        let mut joined = Vec::new();
        let data = join(&mut self.pending, chunk, &mut joined);
        let mut offset = 0;
        while offset < data.len() {
            let index = self.position + offset;
            if data[offset] != b'\\' {
                if let Some((_, high_index)) = self.high {
                    return Err(Error::InvalidEscape { index: high_index });
                }
                output.push(data[offset]);
                offset += 1;
                continue;
            }
            if data.len() - offset < ESCAPE_LEN {
                break;
            }
            let unit = parse_escape(&data[offset..offset + ESCAPE_LEN]).ok_or(Error::InvalidEscape { index })?;
            self.unit(unit, index, output)?;
            offset += ESCAPE_LEN;
        }
        self.pending = data[offset..].to_vec();
        self.position += offset;
        Ok(())
    }

    fn finish(&mut self, _output: &mut Vec<u8>) -> Result<(), Error> {
        if let Some((_, index)) = self.high {
            return Err(Error::InvalidEscape { index });
        }
        if !self.pending.is_empty() {
            return Err(Error::InvalidEscape { index: self.position });
        }
        Ok(())
    }
}

pub fn encode_to_vec(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    apply_all(&mut Encoder::default(), input.as_ref())
}

pub fn encode(input: impl AsRef<[u8]>) -> Result<String, Error> {
    Ok(encode_to_vec(input)?.into_iter().map(char::from).collect())
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    apply_all(&mut Decoder::default(), input.as_ref())
}
