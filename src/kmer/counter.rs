//!
//! k-mer counters
//!
use crate::common::Sequence;
use crate::seq::{neighbors, reverse_complement};
use fnv::FnvHashMap as HashMap;
use fnv::FnvHashSet as HashSet;
use itertools::Itertools;

///
/// Occurrences of every k-mer in the sequence
///
pub fn frequency_table(seq: &[u8], k: usize) -> HashMap<Sequence, usize> {
    let mut h = HashMap::default();
    if k == 0 {
        return h;
    }
    for kmer in seq.windows(k) {
        *h.entry(kmer.to_vec()).or_insert(0) += 1;
    }
    h
}

/// keys with the maximum count, sorted
fn most_frequent(h: &HashMap<Sequence, usize>) -> Vec<Sequence> {
    let max = match h.values().max() {
        Some(&max) => max,
        None => return vec![],
    };
    h.iter()
        .filter(|(_, count)| **count == max)
        .map(|(kmer, _)| kmer.clone())
        .sorted()
        .collect()
}

///
/// Most frequent k-mers, sorted
///
pub fn frequent_words(seq: &[u8], k: usize) -> Vec<Sequence> {
    most_frequent(&frequency_table(seq, k))
}

///
/// k-mers forming `(window, t)`-clumps: appearing at least `t` times in
/// some substring of length `window`. Sorted.
///
/// The counts are updated while the window slides, so each k-mer is touched
/// twice.
///
pub fn find_clumps(seq: &[u8], k: usize, window: usize, t: usize) -> Vec<Sequence> {
    if k == 0 || window < k || seq.len() < window {
        return vec![];
    }
    let mut clumps: HashSet<&[u8]> = HashSet::default();
    let mut counts: HashMap<&[u8], usize> = HashMap::default();

    for kmer in seq[..window].windows(k) {
        let count = counts.entry(kmer).or_insert(0);
        *count += 1;
        if *count >= t {
            clumps.insert(kmer);
        }
    }
    for i in 1..=seq.len() - window {
        let removed = &seq[i - 1..i - 1 + k];
        if let Some(count) = counts.get_mut(removed) {
            *count -= 1;
        }
        let added = &seq[i + window - k..i + window];
        let count = counts.entry(added).or_insert(0);
        *count += 1;
        if *count >= t {
            clumps.insert(added);
        }
    }
    clumps.into_iter().map(|kmer| kmer.to_vec()).sorted().collect()
}

///
/// Most frequent k-mers with up to `d` mismatches, sorted.
///
/// If `with_reverse_complement`, occurrences of the reverse complement are
/// counted too.
///
pub fn frequent_words_with_mismatches(
    seq: &[u8],
    k: usize,
    d: usize,
    with_reverse_complement: bool,
) -> Vec<Sequence> {
    let mut h: HashMap<Sequence, usize> = HashMap::default();
    if k == 0 {
        return vec![];
    }
    for kmer in seq.windows(k) {
        for neighbor in neighbors(kmer, d) {
            *h.entry(neighbor).or_insert(0) += 1;
        }
        if with_reverse_complement {
            for neighbor in neighbors(&reverse_complement(kmer), d) {
                *h.entry(neighbor).or_insert(0) += 1;
            }
        }
    }
    most_frequent(&h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(xs: &[&str]) -> Vec<Sequence> {
        xs.iter().map(|x| x.as_bytes().to_vec()).collect()
    }

    #[test]
    fn counting() {
        let h = frequency_table(b"ATATAG", 2);
        assert_eq!(h.get(&b"AT".to_vec()), Some(&2));
        assert_eq!(h.get(&b"TA".to_vec()), Some(&2));
        assert_eq!(h.get(&b"AG".to_vec()), Some(&1));
        assert_eq!(h.len(), 3);
        assert!(frequency_table(b"AT", 3).is_empty());

        assert_eq!(
            frequent_words(b"ACGTTGCATGTCGCATGATGCATGAGAGCT", 4),
            words(&["CATG", "GCAT"])
        );
        assert!(frequent_words(b"", 4).is_empty());
    }
    #[test]
    fn clumps() {
        let s = b"CGGACTCGACAGATGTGAAGAACGACAATGTGAAGACTCGACACGACAGAGTGAAGAGAAGAGGAAACATTGTAA";
        assert_eq!(find_clumps(s, 5, 50, 4), words(&["CGACA", "GAAGA"]));
        // the only window is the whole sequence
        assert_eq!(find_clumps(b"AAAA", 2, 4, 3), words(&["AA"]));
        assert!(find_clumps(b"AAAA", 2, 5, 1).is_empty());
    }
    #[test]
    fn mismatches() {
        let s = b"ACGTTGCATGTCGCATGATGCATGAGAGCT";
        assert_eq!(
            frequent_words_with_mismatches(s, 4, 1, false),
            words(&["ATGC", "ATGT", "GATG"])
        );
        assert_eq!(
            frequent_words_with_mismatches(s, 4, 1, true),
            words(&["ACAT", "ATGT"])
        );
    }
}
