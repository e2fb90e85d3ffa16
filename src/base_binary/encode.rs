use super::{Alphabet, PADDING};
use crate::{transform::Transform, Error};

pub struct Encoder<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
    bits: usize,
    accumulator: usize,
    pending: usize,
    written: usize,
}

impl<'a, const N: usize> Encoder<'a, N> {
    pub const fn new(alphabet: &'a Alphabet<N>, bits: usize) -> Self {
        assert!(alphabet.len() == (1 << bits));
        Self {
            alphabet,
            bits,
            accumulator: 0,
            pending: 0,
            written: 0,
        }
    }

    fn push(&mut self, digit: usize, output: &mut Vec<u8>) {
        output.push(self.alphabet.encode(digit));
        self.written += 1;
    }
}

impl<const N: usize> Transform for Encoder<'_, N> {
    fn update(&mut self, chunk: &[u8], output: &mut Vec<u8>) -> Result<(), Error> {
        output.reserve(chunk.len() * 8 / self.bits + 1);
        for &value in chunk {
            self.accumulator = (self.accumulator << 8) | (value as usize);
            self.pending += 8;
            while self.pending >= self.bits {
                self.pending -= self.bits;
                self.push(self.accumulator >> self.pending, output);
                self.accumulator &= (1 << self.pending) - 1;
            }
        }
        Ok(())
    }

    fn finish(&mut self, output: &mut Vec<u8>) -> Result<(), Error> {
        if self.pending > 0 {
            self.push(self.accumulator << (self.bits - self.pending), output);
            self.accumulator = 0;
            self.pending = 0;
        }
        while (self.written * self.bits) % 8 != 0 {
            output.push(PADDING);
            self.written += 1;
        }
        Ok(())
    }
}
