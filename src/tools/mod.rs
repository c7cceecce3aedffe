//! The tools module provides helpers around the codec.
//!
//! The tools are:
//! - cli: Command line interface, built with clap.
//! - freq_count: Frequency count of the input bytes.
//!
pub mod cli;
pub mod freq_count;
