use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

/// Ordered digit symbols of a base together with the inverse symbol table.
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < N {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { index, character });
            }
            if let Some(first) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    pub fn encode(&self, digit: usize) -> u8 {
        self.encode[digit]
    }

    pub fn decode(&self, character: u8) -> Option<u8> {
        self.decode.get(character as usize).copied().flatten()
    }

    pub fn contains(&self, character: u8) -> bool {
        self.decode(character).is_some()
    }

    /// Symbol of digit value zero.
    pub fn zero(&self) -> u8 {
        self.encode[0]
    }

    pub const fn len(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, Error};

    #[test]
    fn new() {
        let alphabet = Alphabet::new(b"xyz").unwrap();
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.zero(), b'x');
        assert_eq!(alphabet.encode(2), b'z');
        assert_eq!(alphabet.decode(b'y'), Some(1));
        assert_eq!(alphabet.decode(b'a'), None);
        assert_eq!(alphabet.decode(0xff), None);
        assert!(alphabet.contains(b'z'));
    }

    #[test]
    fn rejects_invalid_characters() {
        assert_eq!(
            Alphabet::new(b"abca").err(),
            Some(Error::DuplicateCharacter {
                character: 'a',
                first: 0,
                second: 3
            })
        );
        assert_eq!(
            Alphabet::new(&[b'a', 0xc3]).err(),
            Some(Error::NonAsciiCharacter { character: 0xc3, index: 1 })
        );
    }
}
