//! Conversion between bytes and the digits of an arbitrary base, reading the
//! bytes as one big-endian unsigned integer.
//!
//! Leading zero bytes carry no numeric weight, so they are counted apart from
//! the value and written with the zero symbol of the alphabet.

pub mod decode;
pub mod encode;
pub mod limbs;

pub use crate::base_common::Alphabet;
pub use decode::Decoder;
pub use encode::Encoder;
pub use limbs::Limbs;

use crate::Error;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LeadingZeros {
    /// One zero symbol per zero byte.
    Repeat,
    /// A zero symbol followed by the symbol of the run length, for runs of
    /// at most `N - 1` zero bytes.
    RunLength,
}

impl LeadingZeros {
    fn encode<const N: usize>(self, alphabet: &Alphabet<N>, count: usize, output: &mut Vec<u8>) {
        match self {
            Self::Repeat => output.resize(output.len() + count, alphabet.zero()),
            Self::RunLength => {
                let mut remaining = count;
                while remaining > 0 {
                    let run = remaining.min(N - 1);
                    output.push(alphabet.zero());
                    output.push(alphabet.encode(run));
                    remaining -= run;
                }
            }
        }
    }

    /// Returns the number of zero bytes and the number of digits they occupy.
    /// Only the canonical run-length form is accepted: every run but the last
    /// is full.
    fn decode<const N: usize>(self, digits: &[u8]) -> Result<(usize, usize), Error> {
        match self {
            Self::Repeat => {
                let count = digits.iter().take_while(|&&digit| digit == 0).count();
                Ok((count, count))
            }
            Self::RunLength => {
                let mut index = 0;
                let mut count = 0;
                let mut full = true;
                while digits.get(index) == Some(&0) {
                    match digits.get(index + 1) {
                        Some(&run) if run > 0 && full => {
                            count += run as usize;
                            full = run as usize == N - 1;
                        }
                        _ => return Err(Error::MalformedZeroRun { index }),
                    }
                    index += 2;
                }
                Ok((count, index))
            }
        }
    }
}

/// Largest power of `base` that fits a limb, with its exponent.
const fn block(base: usize) -> (u32, usize) {
    let mut power: u64 = 1;
    let mut digits = 0;
    while power * (base as u64) <= u32::MAX as u64 {
        power *= base as u64;
        digits += 1;
    }
    (power as u32, digits)
}

#[cfg(test)]
mod tests {
    use super::{block, Alphabet, Decoder, Encoder, LeadingZeros};
    use crate::Error;

    const DECIMAL: Alphabet<10> = match Alphabet::new(b"0123456789") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build alphabet"),
    };

    #[test]
    fn block_fits_limb() {
        assert_eq!(block(58), (656_356_768, 5));
        assert_eq!(block(62), (916_132_832, 5));
        assert_eq!(block(10), (1_000_000_000, 9));
        assert_eq!(block(2), (1 << 31, 31));
    }

    #[test]
    fn decimal() {
        let encoder = Encoder::new(&DECIMAL, LeadingZeros::Repeat);
        let decoder = Decoder::new(&DECIMAL, LeadingZeros::Repeat);
        assert_eq!(encoder.encode([0x01, 0x00]), "256");
        assert_eq!(encoder.encode([0x00, 0x04, 0xd2]), "01234");
        assert_eq!(encoder.encode(u64::MAX.to_be_bytes()), "18446744073709551615");
        assert_eq!(decoder.decode("18446744073709551615"), Ok(u64::MAX.to_be_bytes().to_vec()));
        assert_eq!(decoder.decode("001"), Ok(vec![0x00, 0x00, 0x01]));
    }

    #[test]
    fn run_length() {
        let encoder = Encoder::new(&DECIMAL, LeadingZeros::RunLength);
        let decoder = Decoder::new(&DECIMAL, LeadingZeros::RunLength);
        assert_eq!(encoder.encode([0x00; 3]), "03");
        assert_eq!(encoder.encode([0x00; 20]), "090902");
        assert_eq!(encoder.encode([0x00, 0x07]), "017");
        assert_eq!(decoder.decode("090902"), Ok(vec![0x00; 20]));
        assert_eq!(decoder.decode("017"), Ok(vec![0x00, 0x07]));
        assert_eq!(decoder.decode("0"), Err(Error::MalformedZeroRun { index: 0 }));
        assert_eq!(decoder.decode("0300"), Err(Error::MalformedZeroRun { index: 2 }));
        assert_eq!(decoder.decode("0309"), Err(Error::MalformedZeroRun { index: 2 }));
        assert_eq!(decoder.decode("09090307"), Err(Error::MalformedZeroRun { index: 6 }));
    }
}
