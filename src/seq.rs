//!
//! Small functions on DNA strings
//!
//! counting, GC skew, pattern matching with mismatches, reverse complement,
//! Hamming neighbors and the overlap graph of named reads.
//!
use crate::common::{Sequence, VALID_BASES};
use crate::io::fasta::NamedSeq;
use fnv::{FnvHashMap as HashMap, FnvHashSet as HashSet};
use itertools::Itertools;

/// Complement of a base. Other characters are kept.
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'C' => b'G',
        b'G' => b'C',
        b'T' => b'A',
        b'a' => b't',
        b'c' => b'g',
        b'g' => b'c',
        b't' => b'a',
        c => c,
    }
}

pub fn reverse_complement(seq: &[u8]) -> Sequence {
    seq.iter().rev().map(|&b| complement(b)).collect()
}

/// DNA into RNA, `T` into `U`
pub fn transcribe(seq: &[u8]) -> Sequence {
    seq.iter()
        .map(|&b| match b {
            b'T' => b'U',
            b't' => b'u',
            c => c,
        })
        .collect()
}

///
/// Number of `A`, `C`, `G` and `T` in this order. Case-insensitive.
///
pub fn count_nucleotides(seq: &[u8]) -> [usize; 4] {
    let mut counts = [0; 4];
    for base in seq {
        match base.to_ascii_uppercase() {
            b'A' => counts[0] += 1,
            b'C' => counts[1] += 1,
            b'G' => counts[2] += 1,
            b'T' => counts[3] += 1,
            _ => {}
        }
    }
    counts
}

///
/// Percentage of G and C among the defined bases.
///
/// `N` and other characters are ignored. `None` if there is no defined base.
///
pub fn gc_content(seq: &[u8]) -> Option<f64> {
    let [a, c, g, t] = count_nucleotides(seq);
    let total = a + c + g + t;
    if total == 0 {
        None
    } else {
        Some(100.0 * (c + g) as f64 / total as f64)
    }
}

///
/// `#G - #C` of each prefix `seq[..i]` for `i = 0..=len`
///
pub fn skew(seq: &[u8]) -> Vec<i64> {
    let mut skews = Vec::with_capacity(seq.len() + 1);
    let mut s = 0;
    skews.push(s);
    for base in seq {
        match base.to_ascii_uppercase() {
            b'G' => s += 1,
            b'C' => s -= 1,
            _ => {}
        }
        skews.push(s);
    }
    skews
}

///
/// Positions `i` where the skew of `seq[..i]` is minimum
///
pub fn minimum_skew(seq: &[u8]) -> Vec<usize> {
    let skews = skew(seq);
    let min = skews.iter().copied().min().unwrap_or(0);
    skews
        .iter()
        .positions(|&s| s == min)
        .collect()
}

///
/// Number of mismatches between the strings of the same length
///
pub fn hamming_distance(a: &[u8], b: &[u8]) -> Option<usize> {
    if a.len() != b.len() {
        return None;
    }
    Some(a.iter().zip(b.iter()).filter(|(x, y)| x != y).count())
}

/// Start positions of the (possibly overlapping) occurrences of `pattern`
pub fn pattern_positions(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return vec![];
    }
    text.windows(pattern.len())
        .positions(|w| w == pattern)
        .collect()
}

pub fn pattern_count(text: &[u8], pattern: &[u8]) -> usize {
    pattern_positions(text, pattern).len()
}

///
/// Start positions of the substrings within Hamming distance `d` from
/// `pattern`
///
pub fn approximate_matches(pattern: &[u8], text: &[u8], d: usize) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return vec![];
    }
    text.windows(pattern.len())
        .positions(|w| hamming_distance(w, pattern).map_or(false, |dist| dist <= d))
        .collect()
}

///
/// Reverse palindromes, the substrings equal to their reverse complement,
/// of length `min_len..=max_len`.
///
/// Returns `(1-based position, length)` ordered by length and position.
///
pub fn reverse_palindromes(seq: &[u8], min_len: usize, max_len: usize) -> Vec<(usize, usize)> {
    let mut ret = Vec::new();
    for len in min_len.max(1)..=max_len.min(seq.len()) {
        for (i, fragment) in seq.windows(len).enumerate() {
            if fragment == reverse_complement(fragment).as_slice() {
                ret.push((i + 1, len));
            }
        }
    }
    ret
}

///
/// All strings within Hamming distance `d` from `pattern`, including
/// itself, sorted.
///
/// Built breadth-first: the strings of distance `i+1` are one substitution
/// away from the strings of distance `i`.
///
pub fn neighbors(pattern: &[u8], d: usize) -> Vec<Sequence> {
    let mut seen: HashSet<Sequence> = HashSet::default();
    seen.insert(pattern.to_vec());
    let mut frontier = vec![pattern.to_vec()];
    for _ in 0..d.min(pattern.len()) {
        let mut next = Vec::new();
        for s in &frontier {
            for i in 0..s.len() {
                for &base in VALID_BASES.iter().filter(|&&b| b != s[i]) {
                    let mut t = s.clone();
                    t[i] = base;
                    if seen.insert(t.clone()) {
                        next.push(t);
                    }
                }
            }
        }
        frontier = next;
    }
    seen.into_iter().sorted().collect()
}

///
/// Overlap graph `O_k` of the records
///
/// An edge `(s, t)` for every pair of distinct records where the suffix of
/// length `k` of `s` equals the prefix of length `k` of `t`. Records shorter
/// than `k` have no edge. Edges are ordered by `t` and then by `s` in the
/// order of the records.
///
pub fn overlap_graph(records: &[NamedSeq], k: usize) -> Vec<(String, String)> {
    let mut by_suffix: HashMap<&[u8], Vec<usize>> = HashMap::default();
    for (i, record) in records.iter().enumerate() {
        if record.seq.len() >= k {
            let suffix = &record.seq[record.seq.len() - k..];
            by_suffix.entry(suffix).or_insert_with(Vec::new).push(i);
        }
    }

    let mut edges = Vec::new();
    for (j, target) in records.iter().enumerate() {
        if target.seq.len() < k {
            continue;
        }
        if let Some(sources) = by_suffix.get(&target.seq[..k]) {
            edges.extend(
                sources
                    .iter()
                    .filter(|&&i| i != j)
                    .map(|&i| (records[i].id.clone(), target.id.clone())),
            );
        }
    }
    edges
}
