use sha2::{Digest, Sha256};

/// First four bytes of the double SHA-256 of `buffer`.
pub fn compute_checksum(buffer: impl AsRef<[u8]>) -> [u8; 4] {
    let hash = Sha256::digest(&Sha256::digest(buffer.as_ref()));
    let mut checksum = [0u8; 4];
    checksum.copy_from_slice(&hash[..4]);
    checksum
}
