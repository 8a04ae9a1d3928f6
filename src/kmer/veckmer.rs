//! VecKmer definitions
use crate::common::{sequence_to_string, Bases};

///
/// Kmer for any k
///
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Hash, Clone)]
pub struct VecKmer(pub Vec<u8>);

impl VecKmer {
    pub fn from_bases(bases: &[u8]) -> VecKmer {
        VecKmer(bases.to_vec())
    }
    pub fn k(&self) -> usize {
        self.0.len()
    }
    /// first k-1 bases
    ///
    /// ATCG -> ATC
    pub fn prefix(&self) -> VecKmer {
        match self.0.split_last() {
            Some((_, prefix)) => VecKmer(prefix.to_vec()),
            None => VecKmer(Vec::new()),
        }
    }
    /// last k-1 bases
    ///
    /// ATCG -> TCG
    pub fn suffix(&self) -> VecKmer {
        match self.0.split_first() {
            Some((_, suffix)) => VecKmer(suffix.to_vec()),
            None => VecKmer(Vec::new()),
        }
    }
    pub fn first(&self) -> Option<u8> {
        self.0.first().copied()
    }
    pub fn last(&self) -> Option<u8> {
        self.0.last().copied()
    }
    /// `self.suffix() == other.prefix()`
    pub fn adjacent(&self, other: &VecKmer) -> bool {
        self.k() == other.k() && self.k() > 0 && self.0[1..] == other.0[..other.k() - 1]
    }
}

impl AsRef<Bases> for VecKmer {
    fn as_ref(&self) -> &Bases {
        &self.0
    }
}

impl std::fmt::Display for VecKmer {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", sequence_to_string(&self.0))
    }
}

//
// Tests
//
