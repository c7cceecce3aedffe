//! Byte layout of a compressed file. All integers are 32 bit big-endian and must be
//! non-negative.
//!
//! ```text
//! int32   symbol count
//! int32   max code byte length
//! repeat symbol count times:
//!     byte    symbol
//!     int32   code bit length
//!     byte[max code byte length]  code bits, MSB-first, zero-padded
//! int32   message bit length
//! byte[]  payload, ceil(message bit length / 8) bytes
//! ```

use log::{debug, trace, warn};

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::{HuffError, Result};
use crate::huffman_coding::code::Code;
use crate::huffman_coding::code_table::CodeTable;

/// Largest value an int32 field may hold.
const INT32_MAX: u32 = i32::MAX as u32;
/// There are only 256 byte values.
const MAX_SYMBOLS: u32 = 256;

/// One code table entry as stored in the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeRecord {
    pub symbol: u8,
    pub code: Code,
}

/// Everything one encode call produces and one decode call consumes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    pub records: Vec<CodeRecord>,
    pub max_code_byte_len: u32,
    pub message_bit_len: u32,
    pub payload: Vec<u8>,
}

impl Container {
    /// Container holding nothing, the result of encoding empty input.
    pub fn empty() -> Self {
        Self {
            records: vec![],
            max_code_byte_len: 0,
            message_bit_len: 0,
            payload: vec![],
        }
    }

    /// Assemble a container from a code table and a packed payload. Records follow the
    /// table's ascending symbol order.
    pub fn new(table: &CodeTable, message_bit_len: u32, payload: Vec<u8>) -> Self {
        Self {
            records: table
                .iter()
                .map(|(symbol, code)| CodeRecord {
                    symbol,
                    code: code.clone(),
                })
                .collect(),
            max_code_byte_len: table.max_code_byte_len() as u32,
            message_bit_len,
            payload,
        }
    }

    /// Bytes each code record takes on disk: max_code_byte_len, widened to fit the longest
    /// code if a record holds more than that.
    pub fn record_width(&self) -> usize {
        self.records
            .iter()
            .map(|record| (record.code.len() + 7) / 8)
            .fold(self.max_code_byte_len as usize, usize::max)
    }

    /// Size of the header in bytes, including the message bit length field.
    pub fn header_len(&self) -> usize {
        12 + self.records.len() * (5 + self.record_width())
    }

    /// Serialize to the on-disk layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        debug_assert!(
            self.records.len() <= MAX_SYMBOLS as usize,
            "{} code records, at most {} fit",
            self.records.len(),
            MAX_SYMBOLS
        );
        let width = self.record_width();
        let mut bw = BitWriter::new(self.header_len() + self.payload.len());
        bw.out32(self.records.len() as u32);
        bw.out32(width as u32);
        for record in &self.records {
            bw.out8(record.symbol);
            bw.out32(record.code.len() as u32);
            record
                .code
                .padded(width)
                .iter()
                .take(width)
                .for_each(|&byte| bw.out8(byte));
        }
        bw.out32(self.message_bit_len);
        trace!("Header written, payload starts at {}.", bw.loc());
        self.payload.iter().for_each(|&byte| bw.out8(byte));
        bw.finish()
    }

    /// Parse the on-disk layout. This checks the shape of the file only; whether the code
    /// table makes sense is checked when the decoding table is built.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut br = BitReader::from_bytes(data);

        let symbol_count = read_int32(&mut br, "symbol count")?;
        if symbol_count > MAX_SYMBOLS {
            return Err(HuffError::MalformedHeader(format!(
                "{} symbols listed, at most {} are possible",
                symbol_count, MAX_SYMBOLS
            )));
        }
        let max_code_byte_len = read_int32(&mut br, "max code byte length")?;
        debug!(
            "Header lists {} symbols with {} byte code records.",
            symbol_count, max_code_byte_len
        );

        let mut records = Vec::with_capacity(symbol_count as usize);
        for i in 0..symbol_count {
            let symbol = br.byte().ok_or_else(|| header_ends(&format!("symbol {}", i)))?;
            let bit_len = read_int32(&mut br, "code bit length")? as usize;
            if bit_len == 0 || bit_len > max_code_byte_len as usize * 8 {
                return Err(HuffError::MalformedHeader(format!(
                    "code for symbol {} is {} bits, records hold 1 to {}",
                    symbol,
                    bit_len,
                    max_code_byte_len as usize * 8
                )));
            }
            let padded = br
                .bytes(max_code_byte_len as usize)
                .ok_or_else(|| header_ends(&format!("code for symbol {}", symbol)))?;
            // The length check above guarantees the record is wide enough.
            let code = Code::from_padded(&padded, bit_len)
                .ok_or_else(|| header_ends(&format!("code for symbol {}", symbol)))?;
            records.push(CodeRecord { symbol, code });
        }

        let message_bit_len = read_int32(&mut br, "message bit length")?;
        let needed = (message_bit_len as usize + 7) / 8;
        let tail = br.tail();
        if tail.len() < needed {
            return Err(HuffError::TruncatedPayload(format!(
                "{} bits need {} payload bytes, found {}",
                message_bit_len,
                needed,
                tail.len()
            )));
        }
        if tail.len() > needed {
            warn!(
                "Ignoring {} bytes after the end of the payload.",
                tail.len() - needed
            );
        }

        Ok(Self {
            records,
            max_code_byte_len,
            message_bit_len,
            payload: tail[..needed].to_vec(),
        })
    }
}

fn header_ends(what: &str) -> HuffError {
    HuffError::MalformedHeader(format!("header ends before {}", what))
}

/// Read one int32 field, rejecting negative values.
fn read_int32(br: &mut BitReader<'_>, what: &str) -> Result<u32> {
    let value = br.word().ok_or_else(|| header_ends(what))?;
    if value > INT32_MAX {
        return Err(HuffError::MalformedHeader(format!(
            "{} is negative ({})",
            what, value as i32
        )));
    }
    Ok(value)
}
