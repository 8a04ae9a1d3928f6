//!
//! Paired k-mers
//!
//! `KmerPair` is used for two things:
//!
//! * (k,d)-read pair: two k-mers separated by d unknown bases, `ATG|GGA`
//! * node label of the paired de Bruijn graph: two (k-1)-mers, `AT|GG`
//!
use super::veckmer::VecKmer;
use crate::error::AssemblyError;
use crate::io::fasta::sanitize_bases;
use std::str::FromStr;

/// separator of the two k-mers in the text representation
pub const PAIR_SEPARATOR: char = '|';

#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Hash, Clone)]
pub struct KmerPair {
    pub first: VecKmer,
    pub second: VecKmer,
}

/// (k,d)-read pair
pub type ReadPair = KmerPair;

/// node of the paired de Bruijn graph
pub type PairLabel = KmerPair;

impl KmerPair {
    pub fn new(first: VecKmer, second: VecKmer) -> Self {
        KmerPair { first, second }
    }
    pub fn from_bases(first: &[u8], second: &[u8]) -> Self {
        KmerPair::new(VecKmer::from_bases(first), VecKmer::from_bases(second))
    }
    /// k of the pair. Both k-mers have the same length.
    pub fn k(&self) -> usize {
        self.first.k()
    }
    /// `prefix(A)|prefix(B)`, the source node of the read pair edge
    pub fn prefix(&self) -> KmerPair {
        KmerPair::new(self.first.prefix(), self.second.prefix())
    }
    /// `suffix(A)|suffix(B)`, the target node of the read pair edge
    pub fn suffix(&self) -> KmerPair {
        KmerPair::new(self.first.suffix(), self.second.suffix())
    }
}

impl std::fmt::Display for KmerPair {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.first, PAIR_SEPARATOR, self.second)
    }
}

impl FromStr for KmerPair {
    type Err = AssemblyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| AssemblyError::InvalidReadPair {
            token: s.to_owned(),
            reason: reason.to_owned(),
        };
        let (first, second) = s
            .trim()
            .split_once(PAIR_SEPARATOR)
            .ok_or_else(|| invalid("no separator `|`"))?;
        if second.contains(PAIR_SEPARATOR) {
            return Err(invalid("more than one separator `|`"));
        }
        if first.is_empty() || second.is_empty() {
            return Err(invalid("empty k-mer"));
        }
        if first.len() != second.len() {
            return Err(invalid("k-mers have different lengths"));
        }
        Ok(KmerPair::from_bases(
            &sanitize_bases(first.as_bytes()),
            &sanitize_bases(second.as_bytes()),
        ))
    }
}
