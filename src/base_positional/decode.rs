use super::{block, Alphabet, LeadingZeros, Limbs};
use crate::Error;

pub struct Decoder<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
    zeros: LeadingZeros,
    digits: usize,
}

impl<'a, const N: usize> Decoder<'a, N> {
    pub const fn new(alphabet: &'a Alphabet<N>, zeros: LeadingZeros) -> Self {
        let (_, digits) = block(N);
        Self { alphabet, zeros, digits }
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let digits = input
            .iter()
            .enumerate()
            .map(|(index, &character)| {
                self.alphabet
                    .decode(character)
                    .ok_or_else(|| Error::unsupported_character(input, index))
            })
            .collect::<Result<Vec<u8>, Error>>()?;

        let (zeros, start) = self.zeros.decode::<N>(&digits)?;

        let mut value = Limbs::default();
        for block in digits[start..].chunks(self.digits) {
            let (multiplier, addend) = block.iter().fold((1u32, 0u32), |(multiplier, addend), &digit| {
                (multiplier * N as u32, addend * N as u32 + digit as u32)
            });
            value.mul_add(multiplier, addend);
        }

        let mut output = vec![0u8; zeros];
        output.extend(value.to_be_bytes());
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Alphabet, LeadingZeros};
    use super::Decoder;
    use crate::Error;

    const OCTAL: Alphabet<8> = match Alphabet::new(b"01234567") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    };

    #[test]
    fn rejects_before_decoding() {
        let decoder = Decoder::new(&OCTAL, LeadingZeros::Repeat);
        assert_eq!(decoder.decode(""), Ok(vec![]));
        assert_eq!(decoder.decode("777"), Ok(vec![0x01, 0xff]));
        assert_eq!(
            decoder.decode("0x18"),
            Err(Error::UnsupportedCharacter { character: 'x', index: 1 })
        );
        assert_eq!(
            decoder.decode("17→"),
            Err(Error::UnsupportedCharacter { character: '→', index: 2 })
        );
    }
}
