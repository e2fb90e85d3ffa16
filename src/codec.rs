use crate::{
    base58, base58_check, base62, base64, hex, morse,
    transform::{apply_all, Collect, Transform},
    unicode, Error,
};
use std::{fmt, str::FromStr};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Codec {
    Base58,
    Base58Check,
    Base62,
    Base64,
    Hex,
    Morse,
    Unicode,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownCodec(pub String);

impl fmt::Display for UnknownCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"Unknown codec "{}""#, self.0)
    }
}

impl std::error::Error for UnknownCodec {}

fn encode_base58(input: &[u8]) -> Result<Vec<u8>, Error> {
    Ok(base58::encode_to_vec(input))
}

fn encode_base58_check(input: &[u8]) -> Result<Vec<u8>, Error> {
    Ok(base58_check::encode_to_vec(input))
}

fn encode_base62(input: &[u8]) -> Result<Vec<u8>, Error> {
    Ok(base62::encode_to_vec(input))
}

fn decode_base58(input: &[u8]) -> Result<Vec<u8>, Error> {
    base58::decode(input)
}

fn decode_base58_check(input: &[u8]) -> Result<Vec<u8>, Error> {
    base58_check::decode(input)
}

fn decode_base62(input: &[u8]) -> Result<Vec<u8>, Error> {
    base62::decode(input)
}

type WholeFn = fn(&[u8]) -> Result<Vec<u8>, Error>;

impl Codec {
    pub const ALL: [Codec; 7] = [
        Codec::Base58,
        Codec::Base58Check,
        Codec::Base62,
        Codec::Base64,
        Codec::Hex,
        Codec::Morse,
        Codec::Unicode,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Codec::Base58 => "base58",
            Codec::Base58Check => "base58check",
            Codec::Base62 => "base62",
            Codec::Base64 => "base64",
            Codec::Hex => "hex",
            Codec::Morse => "morse",
            Codec::Unicode => "unicode",
        }
    }

    /// Whether output for each byte depends only on a bounded window of input.
    /// The positional codecs depend on the whole payload.
    pub fn is_chunk_local(self) -> bool {
        self.whole_encoder().is_none()
    }

    fn whole_encoder(self) -> Option<WholeFn> {
        match self {
            Codec::Base58 => Some(encode_base58),
            Codec::Base58Check => Some(encode_base58_check),
            Codec::Base62 => Some(encode_base62),
            _ => None,
        }
    }

    fn whole_decoder(self) -> Option<WholeFn> {
        match self {
            Codec::Base58 => Some(decode_base58),
            Codec::Base58Check => Some(decode_base58_check),
            Codec::Base62 => Some(decode_base62),
            _ => None,
        }
    }

    /// Streaming encoder. Whole-payload codecs are wrapped in [`Collect`].
    pub fn encoder(self) -> Box<dyn Transform> {
        if let Some(encode) = self.whole_encoder() {
            return Box::new(Collect::new(encode));
        }
        match self {
            Codec::Base64 => Box::new(base64::encoder()),
            Codec::Hex => Box::new(hex::Encoder),
            Codec::Morse => Box::new(morse::Encoder::default()),
            _ => Box::new(unicode::Encoder::default()),
        }
    }

    pub fn decoder(self) -> Box<dyn Transform> {
        if let Some(decode) = self.whole_decoder() {
            return Box::new(Collect::new(decode));
        }
        match self {
            Codec::Base64 => Box::new(base64::decoder()),
            Codec::Hex => Box::new(hex::Decoder::default()),
            Codec::Morse => Box::new(morse::Decoder::default()),
            _ => Box::new(unicode::Decoder::default()),
        }
    }

    pub fn encode(self, input: &[u8]) -> Result<Vec<u8>, Error> {
        match self.whole_encoder() {
            Some(encode) => encode(input),
            None => apply_all(self.encoder().as_mut(), input),
        }
    }

    pub fn decode(self, input: &[u8]) -> Result<Vec<u8>, Error> {
        match self.whole_decoder() {
            Some(decode) => decode(input),
            None => apply_all(self.decoder().as_mut(), input),
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Codec {
    type Err = UnknownCodec;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Codec::ALL
            .iter()
            .copied()
            .find(|codec| codec.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownCodec(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Codec;
    use crate::transform::Coordinator;
    use proptest::prelude::*;
    use std::io::Cursor;

    /// Morse only carries its own table and folds case, unicode needs text.
    fn printable(payload: &[u8]) -> Vec<u8> {
        payload.iter().map(|byte| b"abcdefghijklmnopqrstuvwxyz0123456789 "[*byte as usize % 37]).collect()
    }

    fn input_for(codec: Codec, payload: &[u8]) -> Vec<u8> {
        match codec {
            Codec::Morse | Codec::Unicode => printable(payload),
            _ => payload.to_vec(),
        }
    }

    /// Zero prefix followed by arbitrary bytes.
    fn arb_payload() -> impl Strategy<Value = Vec<u8>> {
        (0usize..200, prop::collection::vec(any::<u8>(), 0..300)).prop_map(|(zeros, rest)| {
            let mut payload = vec![0x00; zeros];
            payload.extend(rest);
            payload
        })
    }

    fn arb_chunk_size() -> impl Strategy<Value = usize> {
        prop_oneof![1usize..9, Just(64 * 1024)]
    }

    #[test]
    fn names() {
        for codec in Codec::ALL {
            assert_eq!(codec.name().parse::<Codec>(), Ok(codec));
            assert_eq!(codec.to_string(), codec.name());
        }
        assert_eq!("BASE58".parse::<Codec>(), Ok(Codec::Base58));
        assert!("base32".parse::<Codec>().is_err());
    }

    #[test]
    fn chunk_locality() {
        assert!(!Codec::Base58.is_chunk_local());
        assert!(!Codec::Base58Check.is_chunk_local());
        assert!(!Codec::Base62.is_chunk_local());
        assert!(Codec::Base64.is_chunk_local());
        assert!(Codec::Hex.is_chunk_local());
        assert!(Codec::Morse.is_chunk_local());
        assert!(Codec::Unicode.is_chunk_local());
    }

    #[test]
    fn empty_input() {
        for codec in [Codec::Base58, Codec::Base62, Codec::Base64, Codec::Hex, Codec::Morse, Codec::Unicode] {
            assert_eq!(codec.encode(b""), Ok(vec![]), "codec {}", codec);
            assert_eq!(codec.decode(b""), Ok(vec![]), "codec {}", codec);
        }
    }

    proptest! {
        #[test]
        fn round_trip(payload in arb_payload()) {
            for codec in Codec::ALL {
                let input = input_for(codec, &payload);
                let encoded = codec.encode(&input).unwrap();
                prop_assert_eq!(codec.decode(&encoded), Ok(input), "codec {}", codec);
            }
        }

        #[test]
        fn streaming_matches_buffered(payload in arb_payload(), chunk_size in arb_chunk_size()) {
            let coordinator = Coordinator::new().with_chunk_size(chunk_size);
            for codec in Codec::ALL {
                let input = input_for(codec, &payload);
                let expected = codec.encode(&input).unwrap();
                let encoded = coordinator
                    .collect(Box::new(Cursor::new(input.clone())), codec.encoder())
                    .unwrap();
                prop_assert_eq!(&encoded, &expected, "codec {}", codec);
                let decoded = coordinator
                    .collect(Box::new(Cursor::new(encoded)), codec.decoder())
                    .unwrap();
                prop_assert_eq!(decoded, input, "codec {}", codec);
            }
        }
    }
}
