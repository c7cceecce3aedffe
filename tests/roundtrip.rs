//! Property tests for the codec.
//!
//! - decode(encode(x)) == x for any input, empty included
//! - generated code tables are prefix-free
//! - encoding is deterministic
//! - the payload length matches Σ frequency × code length

use proptest::prelude::*;

use huffcode::huffman_coding::code_table::CodeTable;
use huffcode::huffman_coding::huffman::build_code_table;
use huffcode::tools::freq_count::FrequencyTable;
use huffcode::{decode, decode_from_bytes, encode, encode_to_bytes};

/// Inputs drawn from a small alphabet, so symbols repeat and codes differ in length.
fn skewed_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![
            8 => Just(b'e'),
            4 => Just(b't'),
            2 => Just(b'a'),
            1 => any::<u8>(),
        ],
        0..2000,
    )
}

fn table_for(data: &[u8]) -> (FrequencyTable, CodeTable) {
    let freqs = FrequencyTable::from_bytes(data);
    let table = build_code_table(&freqs).unwrap();
    (freqs, table)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_round_trip(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let packed = encode_to_bytes(&data).unwrap();
        prop_assert_eq!(decode_from_bytes(&packed).unwrap(), data);
    }

    #[test]
    fn prop_round_trip_skewed(data in skewed_bytes()) {
        let container = encode(&data).unwrap();
        prop_assert_eq!(decode(&container).unwrap(), data);
    }

    #[test]
    fn prop_prefix_free(data in prop::collection::vec(any::<u8>(), 1..1024)) {
        let (_, table) = table_for(&data);
        prop_assert!(table.is_prefix_free());
        prop_assert!(table.iter().all(|(_, code)| !code.is_empty()));
    }

    #[test]
    fn prop_deterministic(data in skewed_bytes()) {
        prop_assert_eq!(encode_to_bytes(&data).unwrap(), encode_to_bytes(&data).unwrap());
    }

    #[test]
    fn prop_payload_matches_table(data in skewed_bytes().prop_filter("non-empty", |d| !d.is_empty())) {
        let (freqs, table) = table_for(&data);
        let container = encode(&data).unwrap();
        prop_assert_eq!(container.message_bit_len as u64, table.total_bits(&freqs));
        prop_assert_eq!(container.payload.len(), (container.message_bit_len as usize + 7) / 8);
        prop_assert_eq!(container.records.len(), freqs.len());
    }
}

#[test]
fn empty_input_layout() {
    let packed = encode_to_bytes(&[]).unwrap();
    // symbol count, max code bytes, message bits: all zero, no payload.
    assert_eq!(packed, vec![0; 12]);
    assert!(decode_from_bytes(&packed).unwrap().is_empty());
}

#[test]
fn single_symbol_uses_one_bit_each() {
    let container = encode(b"aaaa").unwrap();
    assert_eq!(container.message_bit_len, 4);
    assert_eq!(decode(&container).unwrap(), b"aaaa".to_vec());
}

#[test]
fn large_input_round_trip() {
    // Big enough to take the parallel frequency count.
    let data: Vec<u8> = (0..300_000_u32)
        .map(|i| match i % 10 {
            0..=5 => b' ',
            6 | 7 => (b'a' + (i % 26) as u8),
            _ => (i % 251) as u8,
        })
        .collect();
    let packed = encode_to_bytes(&data).unwrap();
    assert!(packed.len() < data.len());
    assert_eq!(decode_from_bytes(&packed).unwrap(), data);
}
