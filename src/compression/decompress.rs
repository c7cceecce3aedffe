use std::fs;
use std::path::Path;

use log::{debug, info, trace};
use rustc_hash::FxHashMap;

use super::compress::ratio;
use super::container::Container;
use crate::bitstream::bitreader::BitReader;
use crate::error::{HuffError, Result};
use crate::huffman_coding::code::Code;

/// Build the code → symbol lookup from the header records. Fails if two records share a
/// code or a symbol, or if one code is a prefix of another.
pub fn decoding_table(container: &Container) -> Result<FxHashMap<Code, u8>> {
    let mut table: FxHashMap<Code, u8> = FxHashMap::default();
    let mut seen = [false; 256];

    for record in &container.records {
        if seen[record.symbol as usize] {
            return Err(HuffError::MalformedHeader(format!(
                "symbol {} is listed twice",
                record.symbol
            )));
        }
        seen[record.symbol as usize] = true;
        if let Some(other) = table.insert(record.code.clone(), record.symbol) {
            return Err(HuffError::MalformedHeader(format!(
                "symbols {} and {} share the code {}",
                other, record.symbol, record.code
            )));
        }
    }

    // No code may be the start of a longer one.
    for record in &container.records {
        let mut prefix = Code::new();
        for bit in record.code.iter().take(record.code.len().saturating_sub(1)) {
            prefix.push(bit);
            if let Some(&other) = table.get(&prefix) {
                return Err(HuffError::MalformedHeader(format!(
                    "code {} of symbol {} is a prefix of code {} of symbol {}",
                    prefix, other, record.code, record.symbol
                )));
            }
        }
    }
    debug!("Decoding table holds {} codes.", table.len());
    Ok(table)
}

/// Decode a container back to the original bytes. Either all of the message comes back or
/// an error does.
pub fn decode(container: &Container) -> Result<Vec<u8>> {
    let needed = (container.message_bit_len as usize + 7) / 8;
    if container.payload.len() < needed {
        return Err(HuffError::TruncatedPayload(format!(
            "{} bits need {} payload bytes, found {}",
            container.message_bit_len,
            needed,
            container.payload.len()
        )));
    }
    let table = decoding_table(container)?;
    let max_len = table.keys().map(Code::len).max().unwrap_or(0);

    let mut br = BitReader::new(&container.payload, container.message_bit_len as usize);
    let mut output = Vec::with_capacity(container.payload.len() * 2);
    let mut candidate = Code::new();

    while let Some(bit) = br.bool_bit() {
        candidate.push(bit);
        if let Some(&sym) = table.get(&candidate) {
            output.push(sym);
            candidate.clear();
        } else if candidate.len() >= max_len {
            return Err(HuffError::TruncatedPayload(format!(
                "bits {} before {} match no code",
                candidate,
                br.loc()
            )));
        }
    }
    if !candidate.is_empty() {
        return Err(HuffError::TruncatedPayload(format!(
            "stream ends inside a code after bits {}",
            candidate
        )));
    }
    trace!("Decoded {} symbols.", output.len());
    Ok(output)
}

/// Parse and decode the on-disk layout.
pub fn decode_from_bytes(data: &[u8]) -> Result<Vec<u8>> {
    decode(&Container::from_bytes(data)?)
}

/// Decompress the input file into the output file. The input must exist.
pub fn decompress_file(input: &Path, output: &Path) -> Result<()> {
    if !input.exists() {
        return Err(HuffError::InputNotFound(input.to_path_buf()));
    }
    let data = fs::read(input)?;
    let decoded = decode_from_bytes(&data)?;
    fs::write(output, &decoded)?;

    info!(
        "Wrote {}: {} bytes in, {} bytes out ({:.1}%).",
        output.display(),
        data.len(),
        decoded.len(),
        ratio(data.len(), decoded.len())
    );
    Ok(())
}
