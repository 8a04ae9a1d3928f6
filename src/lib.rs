pub mod assemble;
pub mod common;
pub mod dbg;
pub mod error;
pub mod genome;
pub mod graph;
pub mod io;
pub mod kmer;
pub mod prelude;
pub mod random_seq;
pub mod seq;
