use super::{Alphabet, PADDING};
use crate::{transform::Transform, Error};

/// Padding symbols are skipped wherever they appear.
pub struct Decoder<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
    bits: usize,
    accumulator: usize,
    pending: usize,
    index: usize,
}

impl<'a, const N: usize> Decoder<'a, N> {
    pub const fn new(alphabet: &'a Alphabet<N>, bits: usize) -> Self {
        assert!(alphabet.len() == (1 << bits));
        Self {
            alphabet,
            bits,
            accumulator: 0,
            pending: 0,
            index: 0,
        }
    }
}

impl<const N: usize> Transform for Decoder<'_, N> {
    fn update(&mut self, chunk: &[u8], output: &mut Vec<u8>) -> Result<(), Error> {
        for (offset, &character) in chunk.iter().enumerate() {
            if character == PADDING {
                continue;
            }
            let digit = self
                .alphabet
                .decode(character)
                .ok_or_else(|| Error::unsupported_character(chunk, offset).offset(self.index))?;
            self.accumulator = (self.accumulator << self.bits) | (digit as usize);
            self.pending += self.bits;
            if self.pending >= 8 {
                self.pending -= 8;
                output.push((self.accumulator >> self.pending) as u8);
                self.accumulator &= (1 << self.pending) - 1;
            }
        }
        self.index += chunk.len();
        Ok(())
    }

    fn finish(&mut self, _output: &mut Vec<u8>) -> Result<(), Error> {
        if self.pending >= self.bits || self.accumulator != 0 {
            return Err(Error::InvalidLength);
        }
        Ok(())
    }
}
