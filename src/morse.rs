//! International morse code. Letters are case-insensitive on encode and
//! decode to lower case; tokens are separated by a single space and a space
//! in the input is written as `/`.

use crate::{
    transform::{apply_all, Transform},
    Error,
};

const TABLE: [(u8, &str); 54] = [
    (b'a', ".-"),
    (b'b', "-..."),
    (b'c', "-.-."),
    (b'd', "-.."),
    (b'e', "."),
    (b'f', "..-."),
    (b'g', "--."),
    (b'h', "...."),
    (b'i', ".."),
    (b'j', ".---"),
    (b'k', "-.-"),
    (b'l', ".-.."),
    (b'm', "--"),
    (b'n', "-."),
    (b'o', "---"),
    (b'p', ".--."),
    (b'q', "--.-"),
    (b'r', ".-."),
    (b's', "..."),
    (b't', "-"),
    (b'u', "..-"),
    (b'v', "...-"),
    (b'w', ".--"),
    (b'x', "-..-"),
    (b'y', "-.--"),
    (b'z', "--.."),
    (b'0', "-----"),
    (b'1', ".----"),
    (b'2', "..---"),
    (b'3', "...--"),
    (b'4', "....-"),
    (b'5', "....."),
    (b'6', "-...."),
    (b'7', "--..."),
    (b'8', "---.."),
    (b'9', "----."),
    (b'.', ".-.-.-"),
    (b',', "--..--"),
    (b'?', "..--.."),
    (b'\'', ".----."),
    (b'!', "-.-.--"),
    (b'/', "-..-."),
    (b'(', "-.--."),
    (b')', "-.--.-"),
    (b'&', ".-..."),
    (b':', "---..."),
    (b';', "-.-.-."),
    (b'=', "-...-"),
    (b'+', ".-.-."),
    (b'-', "-....-"),
    (b'_', "..--.-"),
    (b'"', ".-..-."),
    (b'$', "...-..-"),
    (b'@', ".--.-."),
];

const WORD_SEPARATOR: &[u8] = b"/";

/// Longest code in the table.
const MAX_TOKEN_LEN: usize = 7;

fn code(character: u8) -> Option<&'static str> {
    let character = character.to_ascii_lowercase();
    TABLE.iter().find(|(letter, _)| *letter == character).map(|(_, code)| *code)
}

fn letter(token: &[u8]) -> Option<u8> {
    TABLE.iter().find(|(_, code)| code.as_bytes() == token).map(|(letter, _)| *letter)
}

#[derive(Default)]
pub struct Encoder {
    started: bool,
    index: usize,
}

impl Transform for Encoder {
    fn update(&mut self, chunk: &[u8], output: &mut Vec<u8>) -> Result<(), Error> {
        for (offset, &character) in chunk.iter().enumerate() {
            let token = match character {
                b' ' => WORD_SEPARATOR,
                _ => code(character)
                    .ok_or_else(|| Error::unsupported_character(chunk, offset).offset(self.index))?
                    .as_bytes(),
            };
            if self.started {
                output.push(b' ');
            }
            output.extend_from_slice(token);
            self.started = true;
        }
        self.index += chunk.len();
        Ok(())
    }

    fn finish(&mut self, _output: &mut Vec<u8>) -> Result<(), Error> {
        Ok(())
    }
}

/// Splits on any ASCII whitespace; a token may straddle chunks.
#[derive(Default)]
pub struct Decoder {
    token: Vec<u8>,
    start: usize,
    index: usize,
}

impl Decoder {
    fn invalid_token(&self) -> Error {
        Error::InvalidMorseToken {
            token: String::from_utf8_lossy(&self.token).into_owned(),
            index: self.start,
        }
    }

    fn flush(&mut self, output: &mut Vec<u8>) -> Result<(), Error> {
        if self.token.is_empty() {
            return Ok(());
        }
        let character = match self.token.as_slice() {
            WORD_SEPARATOR => b' ',
            token => letter(token).ok_or_else(|| self.invalid_token())?,
        };
        output.push(character);
        self.token.clear();
        Ok(())
    }
}

impl Transform for Decoder {
    fn update(&mut self, chunk: &[u8], output: &mut Vec<u8>) -> Result<(), Error> {
        for (offset, &character) in chunk.iter().enumerate() {
            if character.is_ascii_whitespace() {
                self.flush(output)?;
                continue;
            }
            if self.token.is_empty() {
                self.start = self.index + offset;
            }
            self.token.push(character);
            if self.token.len() > MAX_TOKEN_LEN {
                return Err(self.invalid_token());
            }
        }
        self.index += chunk.len();
        Ok(())
    }

    fn finish(&mut self, output: &mut Vec<u8>) -> Result<(), Error> {
        self.flush(output)
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

#[cfg(test)]
mod tests {
    use super::{Decoder, Encoder, TABLE};
    use crate::{transform::Coordinator, Error};
    use std::io::Cursor;

    #[test]
    fn table_is_a_bijection() {
        for (index, (letter, code)) in TABLE.iter().enumerate() {
            assert!(code.len() <= super::MAX_TOKEN_LEN);
            for (other_letter, other_code) in &TABLE[index + 1..] {
                assert_ne!(letter, other_letter);
                assert_ne!(code, other_code);
            }
        }
    }

    #[test]
    fn encode() {
        assert_eq!(super::encode("SOS"), Ok("... --- ...".to_string()));
        assert_eq!(super::encode("hi there"), Ok(".... .. / - .... . .-. .".to_string()));
        assert_eq!(super::encode(""), Ok(String::new()));
        assert_eq!(super::encode("a/b"), Ok(".- -..-. -...".to_string()));
        assert_eq!(super::encode("a~"), Err(Error::UnsupportedCharacter { character: '~', index: 1 }));
    }

    #[test]
    fn decode() {
        assert_eq!(super::decode("... --- ..."), Ok(b"sos".to_vec()));
        assert_eq!(super::decode(".... ..  /\n- .... . .-. .\n"), Ok(b"hi there".to_vec()));
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(
            super::decode("... ..--..-- ..."),
            Err(Error::InvalidMorseToken {
                token: "..--..--".to_string(),
                index: 4
            })
        );
        assert_eq!(
            super::decode(".- .-.-"),
            Err(Error::InvalidMorseToken {
                token: ".-.-".to_string(),
                index: 3
            })
        );
    }

    #[test]
    fn streaming() {
        let input = b"The quick brown fox jumps over the lazy dog 0123456789";
        let expected = super::encode_to_vec(input).unwrap();
        for chunk_size in [1, 2, 3, 5, 64] {
            let mut encoded = Vec::new();
            Coordinator::new()
                .with_chunk_size(chunk_size)
                .run(&mut Cursor::new(input), &mut Encoder::default(), &mut encoded)
                .unwrap();
            assert_eq!(encoded, expected);

            let mut decoded = Vec::new();
            Coordinator::new()
                .with_chunk_size(chunk_size)
                .run(&mut Cursor::new(&encoded), &mut Decoder::default(), &mut decoded)
                .unwrap();
            assert_eq!(decoded, input.to_ascii_lowercase());
        }
    }
}
