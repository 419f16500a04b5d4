//! Nullable random: deterministic entropy for mnemonic generation.

use rand::{CryptoRng, RngCore};

/// A deterministic entropy source for testing.
///
/// Repeats a configured byte pattern forever. It is marked [`CryptoRng`] so it
/// can stand in wherever real entropy is required; never use it outside tests.
pub struct NullEntropy {
    pattern: Vec<u8>,
    position: usize,
}

impl NullEntropy {
    /// Create with a byte pattern that is cycled through in order.
    ///
    /// An empty pattern behaves like [`NullEntropy::zeroed`].
    pub fn new(pattern: Vec<u8>) -> Self {
        let pattern = if pattern.is_empty() { vec![0] } else { pattern };
        Self {
            pattern,
            position: 0,
        }
    }

    /// Create a source that yields only zero bytes.
    pub fn zeroed() -> Self {
        Self::new(vec![0])
    }

    /// Create a source that yields `value` for every byte.
    pub fn constant(value: u8) -> Self {
        Self::new(vec![value])
    }
}

impl RngCore for NullEntropy {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.pattern[self.position];
            self.position = (self.position + 1) % self.pattern.len();
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for NullEntropy {}
