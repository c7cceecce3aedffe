//! The huffman_coding module turns a frequency table into a prefix code.
//!
//! The tree is built by repeatedly merging the two cheapest nodes. Ties are settled by a
//! sequence number (leaves in ascending symbol order, then merged nodes in the order they are
//! made), so the same input always gives the same codes. Codes are read off the tree with an
//! explicit stack and kept in a CodeTable; the tree itself is dropped once the table exists.
//!

pub mod code;
pub mod code_table;
pub mod huffman;
