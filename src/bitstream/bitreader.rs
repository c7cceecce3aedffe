//! BitReader: reads a packed bitstream produced by BitWriter.
//!
//! The reader is bounded by an explicit bit count rather than the buffer length, since the
//! last byte of a payload is usually padded.
//!

const BIT_MASK: u8 = 0xff;

/// Reads bits MSB-first from a borrowed byte buffer.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
    bits_left: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader that yields at most `bit_len` bits. A count larger than the
    /// buffer holds is clamped to the buffer.
    pub fn new(buffer: &'a [u8], bit_len: usize) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
            bits_left: bit_len.min(buffer.len() * 8),
        }
    }

    /// Creates a BitReader over every bit of the buffer.
    pub fn from_bytes(buffer: &'a [u8]) -> Self {
        Self::new(buffer, buffer.len() * 8)
    }

    /// Return bit as Option<usize> (1 or 0), or None if the bit count is exhausted
    pub fn bit(&mut self) -> Option<usize> {
        if self.bits_left == 0 {
            return None;
        }
        let bit =
            (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        self.bits_left -= 1;
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Return Option<usize> of the next n bits, or None if fewer than n bits are left. Nothing
    /// is consumed when None is returned.
    pub fn bint(&mut self, mut n: usize) -> Option<usize> {
        if n > self.bits_left || n > usize::BITS as usize {
            return None;
        }
        let mut result = 0_usize;
        // Whole bytes can be taken directly when we are on a byte boundary.
        while n >= 8 && self.bit_index == 0 {
            result = result << 8 | self.buffer[self.cursor] as usize;
            self.cursor += 1;
            self.bits_left -= 8;
            n -= 8;
        }
        while n > 0 {
            result = result << 1 | self.bit()?;
            n -= 1;
        }
        Some(result)
    }

    /// Returns a byte as an Option<u8>, or None if there is no more data to read. This is
    /// a convenience function, and calls bint(8).
    pub fn byte(&mut self) -> Option<u8> {
        self.bint(8).map(|byte| byte as u8)
    }

    /// Returns a big-endian 32 bit word, or None if there is no more data to read.
    pub fn word(&mut self) -> Option<u32> {
        self.bint(32).map(|word| word as u32)
    }

    /// Returns an Option<Vec<u8>> of n bytes, or None if fewer than n bytes are left.
    pub fn bytes(&mut self, n: usize) -> Option<Vec<u8>> {
        if n.checked_mul(8)? > self.bits_left {
            return None;
        }
        let mut result: Vec<u8> = Vec::with_capacity(n);
        for _ in 0..n {
            result.push(self.byte()?);
        }
        Some(result)
    }

    /// The unread part of the buffer, starting at the next whole byte.
    pub fn tail(&self) -> &'a [u8] {
        let start = if self.bit_index == 0 {
            self.cursor
        } else {
            self.cursor + 1
        };
        &self.buffer[start.min(self.buffer.len())..]
    }

    /// Number of bits still available.
    pub fn remaining(&self) -> usize {
        self.bits_left
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;
    use crate::bitstream::bitwriter::BitWriter;

    #[test]
    fn basic_test() {
        let x = [0b10000001_u8];
        let mut br = BitReader::from_bytes(&x);
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn bounded_test() {
        // Only three bits are real, the rest is padding.
        let x = [0b1010_0000_u8];
        let mut br = BitReader::new(&x, 3);
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.bool_bit(), None);
        assert_eq!(br.remaining(), 0);
    }

    #[test]
    fn clamped_to_buffer_test() {
        let x = [0xff_u8];
        let br = BitReader::new(&x, 100);
        assert_eq!(br.remaining(), 8);
    }

    #[test]
    fn bint_test() {
        let x = [0b00011011];
        let mut br = BitReader::from_bytes(&x);
        assert_eq!(br.bint(5), Some(3));
        assert_eq!(br.bint(1), Some(0));
        assert_eq!(br.bint(2), Some(3));
        assert_eq!(br.bint(1), None);
    }

    #[test]
    fn bint_short_does_not_consume_test() {
        let x = [0xab, 0xcd];
        let mut br = BitReader::from_bytes(&x);
        assert_eq!(br.word(), None);
        assert_eq!(br.bint(16), Some(0xabcd));
    }

    #[test]
    fn word_test() {
        let x = [0x00, 0x00, 0x01, 0x02, 0x7f];
        let mut br = BitReader::from_bytes(&x);
        assert_eq!(br.word(), Some(258));
        assert_eq!(br.byte(), Some(0x7f));
        assert_eq!(br.byte(), None);
    }

    #[test]
    fn bytes_and_loc_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::from_bytes(x);
        assert_eq!(br.bytes(5), Some("Hello".as_bytes().to_vec()));
        br.bit();
        assert_eq!(br.loc(), "[5.1]");
        assert_eq!(br.tail(), " world!".as_bytes());
        assert_eq!(br.bytes(100), None);
    }

    #[test]
    fn writer_reader_symmetry_test() {
        let bits: Vec<bool> = (0..45_u32).map(|i| (i * 7 + i / 3) % 5 < 2).collect();
        let mut bw = BitWriter::new(8);
        bits.iter().for_each(|&b| bw.out_bit(b));
        let len = bw.bits_written() as usize;
        let buf = bw.finish();
        assert_eq!(buf.len(), 6);

        let mut br = BitReader::new(&buf, len);
        let mut back = vec![];
        while let Some(b) = br.bool_bit() {
            back.push(b);
        }
        assert_eq!(back, bits);
    }
}
