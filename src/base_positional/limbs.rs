/// Arbitrary precision unsigned integer stored as little-endian 32 bit limbs.
///
/// The representation is kept normalized: the most significant limb is never
/// zero, so zero is the empty vector.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Limbs {
    limbs: Vec<u32>,
}

impl Limbs {
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut limbs: Vec<u32> = bytes
            .rchunks(4)
            .map(|chunk| chunk.iter().fold(0u32, |limb, &byte| (limb << 8) | byte as u32))
            .collect();
        while limbs.last() == Some(&0) {
            limbs.pop();
        }
        Self { limbs }
    }

    /// Minimal big-endian serialization; zero serializes to no bytes.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.limbs.len() * 4);
        for limb in self.limbs.iter().rev() {
            bytes.extend_from_slice(&limb.to_be_bytes());
        }
        let zeros = bytes.iter().take_while(|&&byte| byte == 0).count();
        bytes.drain(..zeros);
        bytes
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// `self = self * multiplier + addend`
    pub fn mul_add(&mut self, multiplier: u32, addend: u32) {
        let mut carry = addend as u64;
        for limb in &mut self.limbs {
            let value = (*limb as u64) * (multiplier as u64) + carry;
            *limb = value as u32;
            carry = value >> 32;
        }
        if carry > 0 {
            self.limbs.push(carry as u32);
        }
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    /// `self = self / divisor`, returning the remainder.
    pub fn div_rem(&mut self, divisor: u32) -> u32 {
        assert!(divisor != 0, "division by zero");
        let mut remainder = 0u64;
        for limb in self.limbs.iter_mut().rev() {
            let value = (remainder << 32) | (*limb as u64);
            *limb = (value / divisor as u64) as u32;
            remainder = value % divisor as u64;
        }
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        remainder as u32
    }
}
