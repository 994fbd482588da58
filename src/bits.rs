/// Join a most-significant-bit-first bit sequence into an integer.
///
/// For a full 32-entry sequence the first bit lands in bit 31; shorter
/// sequences come out right-aligned.
pub fn join_bits(bits: &[u8]) -> u32 {
    bits.iter().fold(0, |acc, &b| (acc << 1) | u32::from(b))
}

/// Parallel match/mask bit sequences built up one field character at a time.
#[derive(Debug, Default, Clone)]
pub struct BitAccumulator {
    match_bits: Vec<u8>,
    mask_bits: Vec<u8>,
}

impl BitAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `'0'` and `'1'` are fixed opcode bits; anything else is a field
    /// placeholder and becomes a wildcard (mask bit 0).
    pub fn push_char(&mut self, ch: char) {
        let (m, k) = match ch {
            '0' => (0, 1),
            '1' => (1, 1),
            _ => (0, 0),
        };
        self.match_bits.push(m);
        self.mask_bits.push(k);
    }

    /// Number of bits collected so far.
    pub fn len(&self) -> usize {
        self.match_bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.match_bits.is_empty()
    }

    pub fn match_value(&self) -> u32 {
        join_bits(&self.match_bits)
    }

    pub fn mask_value(&self) -> u32 {
        join_bits(&self.mask_bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_msb_first() {
        let mut bits = vec![1u8];
        bits.extend(std::iter::repeat(0).take(31));
        assert_eq!(join_bits(&bits), 0x8000_0000);
        assert_eq!(join_bits(&[]), 0);
        assert_eq!(join_bits(&[1, 0, 1, 1]), 0b1011);
    }

    #[test]
    fn push_classifies_chars() {
        let mut acc = BitAccumulator::new();
        for ch in "10R_".chars() {
            acc.push_char(ch);
        }
        assert_eq!(acc.len(), 4);
        assert_eq!(acc.match_value(), 0b1000);
        assert_eq!(acc.mask_value(), 0b1100);
    }
}
