//!
//! k-mers, paired k-mers and read pair generation
//!
pub mod counter;
pub mod pair;
pub mod veckmer;

pub use pair::{KmerPair, PairLabel, ReadPair};
pub use veckmer::VecKmer;

use crate::common::{SeqStyle, StyledSequence};

///
/// All k-mers of the linear sequence
///
/// ATCGA (k=3) -> [ATC, TCG, CGA]
///
pub fn sequence_to_kmers(seq: &[u8], k: usize) -> impl Iterator<Item = VecKmer> + '_ {
    // windows(0) panics
    seq.windows(k.max(1))
        .filter(move |_| k > 0)
        .map(VecKmer::from_bases)
}

///
/// All (k,d)-read pairs of a linear sequence, sorted lexicographically.
///
/// `(seq[i..i+k], seq[i+k+d..i+2k+d])` for every valid offset `i`.
/// If the sequence is shorter than `2k+d`, no pairs are returned.
///
pub fn read_pairs(seq: &[u8], k: usize, d: usize) -> Vec<ReadPair> {
    let span = 2 * k + d;
    if k == 0 || seq.len() < span {
        return Vec::new();
    }
    let mut pairs: Vec<ReadPair> = (0..=seq.len() - span)
        .map(|i| KmerPair::from_bases(&seq[i..i + k], &seq[i + k + d..i + span]))
        .collect();
    pairs.sort();
    pairs
}

///
/// All (k,d)-read pairs of a styled sequence.
///
/// For a circular sequence, the windows wrap around the tail, so the
/// number of pairs equals the sequence length.
///
pub fn styled_read_pairs(seq: &StyledSequence, k: usize, d: usize) -> Vec<ReadPair> {
    match seq.style() {
        SeqStyle::Linear => read_pairs(seq.seq(), k, d),
        SeqStyle::Circular => {
            let bases = seq.seq();
            let n = bases.len();
            if k == 0 || n == 0 {
                return Vec::new();
            }
            let cyclic = |start: usize| -> Vec<u8> { (start..start + k).map(|j| bases[j % n]).collect() };
            let mut pairs: Vec<ReadPair> = (0..n)
                .map(|i| KmerPair::from_bases(&cyclic(i), &cyclic(i + k + d)))
                .collect();
            pairs.sort();
            pairs
        }
    }
}
