//! The compression module holds the codec and the container it reads and writes.
//!
//! Encoding happens in the following steps:
//! - Frequency count: how often each byte value occurs.
//! - Huffman coding: build the tree and read a code for every symbol off it.
//! - Bit packing: append the code of every input byte, MSB-first, padding the last byte.
//! - Container: write the code table, the message bit length and the packed payload.
//!
//! Decoding is the inverse:
//! - Parse the container and rebuild a code → symbol table from the header records.
//! - Read the payload one bit at a time, emitting a symbol whenever the bits seen so far
//!   match a code.
//!
//! Each call owns all of its state, so calls on different inputs can run side by side.
//!

pub mod compress;
pub mod container;
pub mod decompress;
