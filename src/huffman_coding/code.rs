use std::fmt::{Display, Formatter};

/// A single Huffman code: an ordered run of bits, packed MSB-first.
///
/// Bits past `len` in the last byte are always zero, so two codes with the same bits compare
/// and hash equal no matter how they were built.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bits: Vec<u8>,
    len: usize,
}

impl Code {
    /// An empty code.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a code of `len` bits from a zero-padded record. Padding bits are dropped.
    /// Returns None if the record is too short to hold `len` bits.
    pub fn from_padded(padded: &[u8], len: usize) -> Option<Self> {
        let used = (len + 7) / 8;
        if padded.len() < used {
            return None;
        }
        let mut bits = padded[..used].to_vec();
        if len % 8 != 0 {
            if let Some(last) = bits.last_mut() {
                *last &= 0xff << (8 - len % 8);
            }
        }
        Some(Self { bits, len })
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.bits.push(0);
        }
        if bit {
            self.bits[self.len / 8] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }

    /// Copy of this code with one more bit appended.
    pub fn with(&self, bit: bool) -> Self {
        let mut next = self.clone();
        next.push(bit);
        next
    }

    /// Bit at position `idx` (0 is the first bit).
    pub fn bit(&self, idx: usize) -> bool {
        self.bits[idx / 8] & (0x80 >> (idx % 8)) != 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reset to the empty code, keeping the allocation.
    pub fn clear(&mut self) {
        self.bits.clear();
        self.len = 0;
    }

    /// The packed bits, ceil(len / 8) bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// The packed bits zero-padded out to `width` bytes.
    pub fn padded(&self, width: usize) -> Vec<u8> {
        let mut out = self.bits.clone();
        out.resize(width.max(out.len()), 0);
        out
    }

    /// True if every bit of self matches the start of other (equal codes included).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len && (0..self.len).all(|i| self.bit(i) == other.bit(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.bit(i))
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for bit in self.iter() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn code_of(s: &str) -> Code {
    let mut code = Code::new();
    s.chars().for_each(|c| code.push(c == '1'));
    code
}

#[cfg(test)]
mod test {
    use super::{code_of, Code};

    #[test]
    fn push_and_display_test() {
        let code = code_of("1000000011");
        assert_eq!(code.len(), 10);
        assert_eq!(code.as_bytes(), &[0b1000_0000, 0b1100_0000]);
        assert_eq!(code.to_string(), "1000000011");
    }

    #[test]
    fn from_padded_drops_padding_test() {
        // Garbage in the padding bits must not leak into the code.
        let code = Code::from_padded(&[0b0101_1111, 0xff], 3).unwrap();
        assert_eq!(code, code_of("010"));
        assert_eq!(Code::from_padded(&[0xff], 9), None);
    }

    #[test]
    fn padded_test() {
        assert_eq!(code_of("11").padded(3), vec![0b1100_0000, 0, 0]);
    }

    #[test]
    fn prefix_test() {
        assert!(code_of("01").is_prefix_of(&code_of("010")));
        assert!(code_of("010").is_prefix_of(&code_of("010")));
        assert!(!code_of("011").is_prefix_of(&code_of("010")));
        assert!(!code_of("0101").is_prefix_of(&code_of("010")));
    }

    #[test]
    fn clear_test() {
        let mut code = code_of("111");
        code.clear();
        assert!(code.is_empty());
        code.push(false);
        assert_eq!(code, code_of("0"));
    }
}
