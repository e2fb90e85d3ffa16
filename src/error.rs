use std::{error, fmt, io, sync::Arc};

#[derive(Clone, Debug)]
pub enum Error {
    UnsupportedCharacter { character: char, index: usize },
    OddLength,
    InvalidLength,
    MalformedZeroRun { index: usize },
    MissingChecksum,
    InvalidChecksum { checksum: [u8; 4], expected: [u8; 4] },
    InvalidMorseToken { token: String, index: usize },
    InvalidUtf8 { index: usize },
    InvalidEscape { index: usize },
    SourceRead(Arc<io::Error>),
    Sink(Arc<io::Error>),
}

impl Error {
    pub fn source_read(error: io::Error) -> Self {
        Self::SourceRead(Arc::new(error))
    }

    pub fn sink(error: io::Error) -> Self {
        Self::Sink(Arc::new(error))
    }

    /// Reports the symbol starting at `index`, decoding it as UTF-8 when possible.
    pub fn unsupported_character(input: &[u8], index: usize) -> Self {
        let end = input.len().min(index + 4);
        let character = (index + 1..=end)
            .find_map(|end| std::str::from_utf8(&input[index..end]).ok())
            .and_then(|text| text.chars().next())
            .unwrap_or_else(|| char::from(input[index]));
        Self::UnsupportedCharacter { character, index }
    }

    /// Moves a reported position forward by `by` bytes, for errors found
    /// inside a chunk of a longer stream.
    pub fn offset(self, by: usize) -> Self {
        match self {
            Self::UnsupportedCharacter { character, index } => Self::UnsupportedCharacter {
                character,
                index: index + by,
            },
            Self::MalformedZeroRun { index } => Self::MalformedZeroRun { index: index + by },
            Self::InvalidMorseToken { token, index } => Self::InvalidMorseToken { token, index: index + by },
            Self::InvalidUtf8 { index } => Self::InvalidUtf8 { index: index + by },
            Self::InvalidEscape { index } => Self::InvalidEscape { index: index + by },
            error => error,
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::SourceRead(left), Self::SourceRead(right)) | (Self::Sink(left), Self::Sink(right)) => Arc::ptr_eq(left, right),
            (Self::UnsupportedCharacter { character: a, index: i }, Self::UnsupportedCharacter { character: b, index: j }) => a == b && i == j,
            (Self::MalformedZeroRun { index: i }, Self::MalformedZeroRun { index: j })
            | (Self::InvalidUtf8 { index: i }, Self::InvalidUtf8 { index: j })
            | (Self::InvalidEscape { index: i }, Self::InvalidEscape { index: j }) => i == j,
            (Self::InvalidChecksum { checksum: a, expected: b }, Self::InvalidChecksum { checksum: c, expected: d }) => a == c && b == d,
            (Self::InvalidMorseToken { token: a, index: i }, Self::InvalidMorseToken { token: b, index: j }) => a == b && i == j,
            (Self::OddLength, Self::OddLength) | (Self::InvalidLength, Self::InvalidLength) | (Self::MissingChecksum, Self::MissingChecksum) => true,
            _ => false,
        }
    }
}

struct HexSlice<'a>(&'a [u8]);

impl fmt::Display for HexSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedCharacter { character, index } => {
                write!(f, "Unsupported character {:?} at index {}", character, index)
            }
            Self::OddLength => write!(f, "Odd number of digits"),
            Self::InvalidLength => write!(f, "Invalid input length"),
            Self::MalformedZeroRun { index } => write!(f, "Malformed zero run at index {}", index),
            Self::MissingChecksum => write!(f, "Missing checksum"),
            Self::InvalidChecksum { checksum, expected } => write!(
                f,
                "Invalid checksum '{}' ({} expected)",
                HexSlice(checksum),
                HexSlice(expected)
            ),
            Self::InvalidMorseToken { token, index } => write!(f, "Invalid morse token {:?} at index {}", token, index),
            Self::InvalidUtf8 { index } => write!(f, "Invalid utf8 sequence at index {}", index),
            Self::InvalidEscape { index } => write!(f, "Invalid escape sequence at index {}", index),
            Self::SourceRead(error) => write!(f, "Could not read source: {}", error),
            Self::Sink(error) => write!(f, "Could not write output: {}", error),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::SourceRead(error) | Self::Sink(error) => Some(error.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn unsupported_character() {
        let input = "ab!".as_bytes();
        assert!(matches!(
            Error::unsupported_character(input, 2),
            Error::UnsupportedCharacter { character: '!', index: 2 }
        ));
        let input = "aé".as_bytes();
        assert!(matches!(
            Error::unsupported_character(input, 1),
            Error::UnsupportedCharacter { character: 'é', index: 1 }
        ));
        assert!(matches!(
            Error::unsupported_character(&[0xff], 0),
            Error::UnsupportedCharacter { character: 'ÿ', index: 0 }
        ));
    }

    #[test]
    fn display() {
        let error = Error::InvalidChecksum {
            checksum: [0x00, 0x01, 0x02, 0x03],
            expected: [0xaa, 0xbb, 0xcc, 0xdd],
        };
        assert_eq!(error.to_string(), "Invalid checksum '00010203' (aabbccdd expected)");
        assert_eq!(
            Error::UnsupportedCharacter { character: '!', index: 7 }.to_string(),
            "Unsupported character '!' at index 7"
        );
    }
}
