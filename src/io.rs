//!
//! File input and output
//!
pub mod fasta;
pub mod pairs;
