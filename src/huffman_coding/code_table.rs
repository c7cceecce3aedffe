use std::collections::BTreeMap;

use super::code::Code;
use crate::tools::freq_count::FrequencyTable;

/// Symbol to code mapping. This, not the tree it came from, is what the container stores.
/// Iteration is in ascending symbol order, which is also the header record order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, Code>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the code for a symbol, returning the previous code if there was one.
    pub fn insert(&mut self, symbol: u8, code: Code) -> Option<Code> {
        self.codes.insert(symbol, code)
    }

    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes.iter().map(|(&sym, code)| (sym, code))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Length in bits of the longest code, 0 for an empty table.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    /// Bytes needed to hold the longest code.
    pub fn max_code_byte_len(&self) -> usize {
        (self.max_code_len() + 7) / 8
    }

    /// Sum over symbols of frequency × code length. Symbols missing from the table count
    /// as zero.
    pub fn total_bits(&self, freqs: &FrequencyTable) -> u64 {
        freqs
            .iter()
            .filter_map(|(sym, count)| self.get(sym).map(|code| count * code.len() as u64))
            .sum()
    }

    /// True if no code is a prefix of (or equal to) another symbol's code.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&Code> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .skip(i + 1)
                .all(|b| !a.is_prefix_of(b) && !b.is_prefix_of(a))
        })
    }
}
