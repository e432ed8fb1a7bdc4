//! Configuration for systematic Reed-Solomon encoding

/// Shape of a Reed-Solomon code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncoderConfig {
    /// Number of parity symbols appended to each message
    pub parity_symbols: usize,
    /// Exponent of the first generator root; roots are
    /// `primitive^first .. primitive^(first + parity_symbols - 1)`
    pub first_root_exponent: u32,
}

impl EncoderConfig {
    /// Config with roots starting at `primitive^0`, as QR codes use
    pub fn new(parity_symbols: usize) -> Self {
        Self {
            parity_symbols,
            first_root_exponent: 0,
        }
    }

    /// Start the roots at `primitive^exponent` instead (PDF417 uses 1)
    pub fn with_first_root_exponent(mut self, exponent: u32) -> Self {
        self.first_root_exponent = exponent;
        self
    }

    /// Exponents of every generator root, reduced modulo the group order
    pub fn root_exponents(&self, group_order: u32) -> impl Iterator<Item = u32> {
        let first = u64::from(self.first_root_exponent);
        let modulus = u64::from(group_order.max(1));
        (0..self.parity_symbols as u64).map(move |i| ((first + i) % modulus) as u32)
    }
}
