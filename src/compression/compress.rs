use std::fs;
use std::path::Path;

use log::{debug, info};

use super::container::Container;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::{HuffError, Result};
use crate::huffman_coding::code::Code;
use crate::huffman_coding::huffman::build_code_table;
use crate::tools::freq_count::FrequencyTable;

/// Longest message the container's int32 bit length field can describe.
const MAX_MESSAGE_BITS: u64 = i32::MAX as u64;

/// Encode a byte slice into a container. Empty input gives an empty container.
pub fn encode(data: &[u8]) -> Result<Container> {
    if data.is_empty() {
        info!("Input is empty, writing an empty code table.");
        return Ok(Container::empty());
    }

    let freqs = FrequencyTable::from_bytes(data);
    debug!(
        "Counted {} distinct symbols in {} bytes.",
        freqs.len(),
        freqs.total()
    );
    let table = build_code_table(&freqs)?;

    // Know the size before packing anything so oversize input fails fast.
    let bits = table.total_bits(&freqs);
    if bits > MAX_MESSAGE_BITS {
        return Err(HuffError::MessageTooLong { bits });
    }

    // Index the codes by byte value for the packing loop.
    let mut lookup: Vec<Option<&Code>> = vec![None; 256];
    table
        .iter()
        .for_each(|(sym, code)| lookup[sym as usize] = Some(code));

    let mut bw = BitWriter::new((bits as usize + 7) / 8);
    for &byte in data {
        // Every input byte was counted, so every byte has a code.
        let code = lookup[byte as usize].ok_or(HuffError::EmptyAlphabetInternal)?;
        bw.out_code(code);
    }
    let message_bit_len = bw.bits_written();
    let payload = bw.finish();

    let container = Container::new(&table, message_bit_len as u32, payload);
    info!(
        "Encoded {} bytes as {} bits with {} codes. Header is {} bytes.",
        data.len(),
        message_bit_len,
        table.len(),
        container.header_len()
    );
    Ok(container)
}

/// Encode straight to the on-disk layout.
pub fn encode_to_bytes(data: &[u8]) -> Result<Vec<u8>> {
    Ok(encode(data)?.to_bytes())
}

/// Compress the input file into the output file. The input must exist.
pub fn compress_file(input: &Path, output: &Path) -> Result<()> {
    if !input.exists() {
        return Err(HuffError::InputNotFound(input.to_path_buf()));
    }
    let data = fs::read(input)?;
    let encoded = encode_to_bytes(&data)?;
    fs::write(output, &encoded)?;

    info!(
        "Wrote {}: {} bytes in, {} bytes out ({:.1}%).",
        output.display(),
        data.len(),
        encoded.len(),
        ratio(encoded.len(), data.len())
    );
    Ok(())
}

/// Output size as a percentage of input size.
pub(crate) fn ratio(out: usize, inp: usize) -> f64 {
    if inp == 0 {
        return 0.0;
    }
    out as f64 * 100.0 / inp as f64
}
