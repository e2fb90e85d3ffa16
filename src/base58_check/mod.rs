//! Base58 with a trailing four byte double SHA-256 checksum.

mod checksum;

use crate::{base58, Error};
use checksum::compute_checksum;

pub fn encode_to_vec(input: impl AsRef<[u8]>) -> Vec<u8> {
    let mut input = input.as_ref().to_vec();
    let checksum = compute_checksum(&input);
    input.extend_from_slice(&checksum);
    base58::encode_to_vec(input)
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    encode_to_vec(input).into_iter().map(char::from).collect()
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    let mut output = base58::decode(input)?;
    if output.len() < 4 {
        return Err(Error::MissingChecksum);
    }
    let payload_len = output.len() - 4;
    let expected = compute_checksum(&output[..payload_len]);
    if output[payload_len..] != expected {
        let mut checksum = [0u8; 4];
        checksum.copy_from_slice(&output[payload_len..]);
        return Err(Error::InvalidChecksum { checksum, expected });
    }
    output.truncate(payload_len);
    Ok(output)
}
