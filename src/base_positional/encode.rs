use super::{block, Alphabet, LeadingZeros, Limbs};

pub struct Encoder<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
    zeros: LeadingZeros,
    power: u32,
    digits: usize,
}

impl<'a, const N: usize> Encoder<'a, N> {
    pub const fn new(alphabet: &'a Alphabet<N>, zeros: LeadingZeros) -> Self {
        let (power, digits) = block(N);
        Self {
            alphabet,
            zeros,
            power,
            digits,
        }
    }

    pub fn encode_to_vec(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let input = input.as_ref();
        let zeros = input.iter().take_while(|&&byte| byte == 0).count();
        let mut value = Limbs::from_be_bytes(&input[zeros..]);

        // Least significant digit first, `self.digits` at a time.
        let mut digits = Vec::with_capacity((input.len() - zeros) * 8 / 5 + self.digits);
        while !value.is_zero() {
            let mut remainder = value.div_rem(self.power);
            for _ in 0..self.digits {
                digits.push((remainder % N as u32) as u8);
                remainder /= N as u32;
            }
        }
        while digits.last() == Some(&0) {
            digits.pop();
        }

        let mut output = Vec::with_capacity(2 * zeros + digits.len());
        self.zeros.encode(self.alphabet, zeros, &mut output);
        output.extend(digits.iter().rev().map(|&digit| self.alphabet.encode(digit as usize)));
        output
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        self.encode_to_vec(input).into_iter().map(char::from).collect()
    }
}
