//! The bitstream module forms the bit-level I/O subsystem of the codec.
//!
//! Everything is MSB-first: the first bit written occupies the highest order bit of the first
//! byte. BitWriter packs codes and the container's integer fields; BitReader reads them back
//! and is bounded by an explicit bit count so that padding in the last byte is never read
//! as data.
//!
pub mod bitreader;
pub mod bitwriter;
