//! Huffman prefix code compressor.
//!
//! Builds an optimal prefix code from the byte frequencies of the input, then writes a
//! self-describing container: the code table followed by the bit-packed message. The code
//! table is stored explicitly, so a decoder needs nothing but the container.
//!
//! Basic usage:
//!
//! `$> huffcode encode test.txt`
//!
//! This writes encoded.bin. `huffcode decode encoded.bin` restores the original bytes into
//! output.txt.
//!
//! As a library:
//!
//! ```
//! let packed = huffcode::encode_to_bytes(b"abracadabra").unwrap();
//! assert_eq!(huffcode::decode_from_bytes(&packed).unwrap(), b"abracadabra");
//! ```
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::{compress_file, encode, encode_to_bytes};
pub use compression::container::{CodeRecord, Container};
pub use compression::decompress::{decode, decode_from_bytes, decompress_file};
pub use error::{HuffError, Result};
