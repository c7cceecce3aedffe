use log::error;

use crate::huffman_coding::code::Code;

/// Packs bits MSB-first into a byte buffer. The first bit written lands in the highest order
/// bit of the first byte. Call finish() to pad the last byte with zeros and take the buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    output: Vec<u8>,
    queue: u64,
    q_bits: u8,
}

impl BitWriter {
    /// Create a new BitWriter with an output buffer of the size specified (in bytes).
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
        }
    }

    /// Internal bitstream write function common to all out.XX functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Puts a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.queue <<= 1;
        self.queue |= bit as u64;
        self.q_bits += 1;
        self.write_stream();
    }

    /// Puts the low `depth` bits of `data` on the stream, most significant first. Depth is
    /// 0-32.
    pub fn out_bits(&mut self, data: u32, depth: u8) {
        if depth == 0 {
            return;
        }
        debug_assert!(depth <= 32, "out_bits depth {} is over 32", depth);
        if depth > 32 {
            error!("Asked to write {} bits from a 32 bit word.", depth);
            return;
        }
        self.queue <<= depth; //shift queue by bit length
        self.queue |= data as u64 & ((1_u64 << depth) - 1); //add data portion to queue
        self.q_bits += depth; //update depth of queue bits
        self.write_stream();
    }

    /// Puts a byte on the stream.
    pub fn out8(&mut self, data: u8) {
        self.out_bits(data as u32, 8);
    }

    /// Puts a 32 bit big-endian word on the stream.
    pub fn out32(&mut self, data: u32) {
        self.out_bits(data, 32);
    }

    /// Puts every bit of a Huffman code on the stream, first bit first.
    pub fn out_code(&mut self, code: &Code) {
        let full = code.len() / 8;
        let rem = code.len() % 8;
        code.as_bytes()
            .iter()
            .take(full)
            .for_each(|&byte| self.out8(byte));
        if rem > 0 {
            let last = code.as_bytes()[full];
            self.out_bits((last >> (8 - rem)) as u32, rem as u8);
        }
    }

    /// Number of bits written so far, not counting padding.
    pub fn bits_written(&self) -> u64 {
        self.output.len() as u64 * 8 + self.q_bits as u64
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits.
    fn flush(&mut self) {
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits += 8 - self.q_bits;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitWriter queue.");
            }
        }
    }

    /// Pads the final byte and returns the packed buffer.
    pub fn finish(mut self) -> Vec<u8> {
        self.flush();
        self.output
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        let bits = self.bits_written();
        format!("[{}.{}]", bits / 8, bits % 8)
    }
}
