//!
//! Read-pair file
//!
//! ```text
//! 3 1
//! GAC|GTT ACG|TTA
//! AAT|CCA
//! ```
//!
//! The first non-empty line is `k d`, followed by whitespace separated
//! `A|B` tokens on any number of lines.
//!
use crate::error::{AssemblyError, Result};
use crate::kmer::ReadPair;
use itertools::Itertools;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

///
/// Read pairs with their k and d
///
#[derive(Debug, Clone, PartialEq)]
pub struct ReadPairSet {
    pub k: usize,
    pub d: usize,
    pub pairs: Vec<ReadPair>,
}

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let invalid = || AssemblyError::InvalidParameter(format!("invalid header `{}`", line));
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        [k, d] => {
            let k = k.parse().map_err(|_| invalid())?;
            let d = d.parse().map_err(|_| invalid())?;
            Ok((k, d))
        }
        _ => Err(invalid()),
    }
}

///
/// Parse the text of a read-pair file.
///
/// The pairs are checked to be `A|B` but their length is not compared with
/// `k` here.
///
pub fn parse_read_pairs(text: &str) -> Result<ReadPairSet> {
    let mut lines = text.lines().skip_while(|line| line.trim().is_empty());
    let header = lines
        .next()
        .ok_or_else(|| AssemblyError::InvalidParameter("no `k d` header".to_owned()))?;
    let (k, d) = parse_header(header)?;
    let pairs = lines
        .flat_map(|line| line.split_whitespace())
        .map(|token| token.parse::<ReadPair>())
        .collect::<Result<Vec<_>>>()?;
    Ok(ReadPairSet { k, d, pairs })
}

///
/// Parse the read-pair file.
///
pub fn read_pairs_file<P: AsRef<Path>>(filename: P) -> Result<ReadPairSet> {
    let mut text = String::new();
    File::open(filename)?.read_to_string(&mut text)?;
    parse_read_pairs(&text)
}

///
/// Write in the read-pair file format, one pair per line.
///
pub fn write_read_pairs<W: Write>(mut writer: W, k: usize, d: usize, pairs: &[ReadPair]) -> Result<()> {
    writeln!(writer, "{} {}", k, d)?;
    if !pairs.is_empty() {
        writeln!(writer, "{}", pairs.iter().join("\n"))?;
    }
    Ok(())
}
