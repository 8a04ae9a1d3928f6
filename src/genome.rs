//!
//! Genome reconstruction from the paired de Bruijn graph
//!
//! 1. balance the graph with a temporary edge if needed
//! 2. get an Eulerian circuit and cut it at the temporary edge
//! 3. spell the prefix stream and the suffix stream of the node labels
//! 4. check that both strings agree across the gap and merge them
//!
use crate::common::{sequence_to_string, SeqStyle, Sequence, StyledSequence};
use crate::dbg::PairedDbg;
use crate::error::{AssemblyError, Result};
use crate::graph::chooser::EdgeChooser;
use crate::graph::euler::eulerian_path;
use crate::kmer::PairLabel;
use log::{debug, info};

///
/// Spell the string of overlapping fragments.
///
/// The first fragment followed by the last base of every subsequent
/// fragment. Consecutive fragments are assumed to overlap by all but one
/// base.
///
/// [ATG, TGC, GCA] -> ATGCA
///
pub fn path_to_genome<T: AsRef<[u8]>>(fragments: &[T]) -> Sequence {
    let mut seq: Sequence = match fragments.first() {
        Some(first) => first.as_ref().to_vec(),
        None => return Vec::new(),
    };
    for fragment in &fragments[1..] {
        if let Some(&last) = fragment.as_ref().last() {
            seq.push(last);
        }
    }
    seq
}

///
/// Merge the prefix string and the suffix string that starts `k+d` bases
/// later.
///
/// `prefix[i] == suffix[i-(k+d)]` is required for all `i >= k+d`.
///
pub fn merge_gapped_strings(prefix: &[u8], suffix: &[u8], k: usize, d: usize) -> Result<Sequence> {
    let offset = k + d;
    if prefix.len() < offset {
        return Err(AssemblyError::UncoveredGap {
            prefix_len: prefix.len(),
            required: offset,
        });
    }
    for i in offset..prefix.len() {
        match suffix.get(i - offset) {
            Some(&suffix_base) if suffix_base == prefix[i] => {}
            suffix_base => {
                return Err(AssemblyError::GapInconsistency {
                    position: i,
                    prefix_base: prefix[i] as char,
                    suffix_base: suffix_base.map(|&b| b as char).unwrap_or('-'),
                })
            }
        }
    }
    let mut genome = Vec::with_capacity(offset + suffix.len());
    genome.extend_from_slice(&prefix[..offset]);
    genome.extend_from_slice(suffix);
    Ok(genome)
}

///
/// Spell the genome of the path of paired labels `A|B`.
///
/// The A-stream and the B-stream are spelled separately and merged
/// across the gap.
///
pub fn spell_paired_path(path: &[PairLabel], k: usize, d: usize) -> Result<Sequence> {
    let firsts: Vec<&[u8]> = path.iter().map(|label| label.first.as_ref()).collect();
    let seconds: Vec<&[u8]> = path.iter().map(|label| label.second.as_ref()).collect();
    let prefix = path_to_genome(&firsts);
    let suffix = path_to_genome(&seconds);
    debug!("prefix string: {}", sequence_to_string(&prefix));
    debug!("suffix string: {}", sequence_to_string(&suffix));
    merge_gapped_strings(&prefix, &suffix, k, d)
}

///
/// Eulerian walk over all read pairs
///
#[derive(Debug, Clone, PartialEq)]
pub struct EulerianWalk {
    /// labels of the walk.
    /// For a circular walk, the closing label is not included.
    pub labels: Vec<PairLabel>,
    /// Circular if the graph was balanced, Linear if a temporary edge was used.
    pub style: SeqStyle,
}

///
/// Find an Eulerian walk of the paired de Bruijn graph.
///
/// The graph is consumed. If the graph is nearly balanced, the returned
/// path starts at the source and ends at the sink and has one label more
/// than the number of read pairs. If the graph is balanced, the circuit
/// without its closing label is returned, i.e. one label per read pair.
///
pub fn eulerian_walk<C: EdgeChooser>(dbg: PairedDbg, chooser: &mut C) -> Result<EulerianWalk> {
    let mut graph = dbg.into_graph();
    let mut labels = eulerian_path(&mut graph, chooser)?;
    debug_assert!(graph.is_empty());

    // source and sink of a nearly balanced graph are distinct nodes
    if labels.len() != 1 && labels.first() == labels.last() {
        labels.pop();
        info!("eulerian circuit: {} labels", labels.len());
        Ok(EulerianWalk {
            labels,
            style: SeqStyle::Circular,
        })
    } else {
        info!("eulerian path: {} labels", labels.len());
        Ok(EulerianWalk {
            labels,
            style: SeqStyle::Linear,
        })
    }
}

///
/// Reconstruct the genome from the paired de Bruijn graph.
///
/// A linear genome is returned as is. For a circular genome (balanced
/// graph), the spelled string wraps around and is truncated to the number
/// of read pairs, which is a rotation of the source genome.
///
pub fn reconstruct<C: EdgeChooser>(dbg: PairedDbg, chooser: &mut C) -> Result<StyledSequence> {
    let k = dbg.k();
    let d = dbg.d();
    let walk = eulerian_walk(dbg, chooser)?;
    let mut genome = spell_paired_path(&walk.labels, k, d)?;
    if walk.style.is_circular() {
        genome.truncate(walk.labels.len());
    }
    info!("reconstructed genome: {} bases ({})", genome.len(), walk.style);
    Ok(StyledSequence::new(genome, walk.style))
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::chooser::{FirstChooser, RandomChooser};
    use crate::kmer::{read_pairs, KmerPair};

    fn labels(xs: &[&str]) -> Vec<PairLabel> {
        xs.iter().map(|x| x.parse().unwrap()).collect()
    }

    #[test]
    fn path_to_genome_test() {
        assert_eq!(
            path_to_genome(&["ACCGA", "CCGAA", "CGAAG", "GAAGC", "AAGCT"]),
            b"ACCGAAGCT".to_vec()
        );
        assert_eq!(path_to_genome(&["AT"]), b"AT".to_vec());
        let empty: [&str; 0] = [];
        assert_eq!(path_to_genome(&empty), Vec::<u8>::new());
    }
    #[test]
    fn spell_consistent_path() {
        // k=3 d=1: prefix=ACGTA suffix=AGCCA
        let path = labels(&["AC|AG", "CG|GC", "GT|CC", "TA|CA"]);
        let genome = spell_paired_path(&path, 3, 1).unwrap();
        assert_eq!(genome, b"ACGTAGCCA".to_vec());
    }
    #[test]
    fn spell_inconsistent_path() {
        // prefix=ACGTA suffix=GGCCA, prefix[4]=A but suffix[0]=G
        let path = labels(&["AC|GG", "CG|GC", "GT|CC", "TA|CA"]);
        match spell_paired_path(&path, 3, 1) {
            Err(AssemblyError::GapInconsistency {
                position,
                prefix_base,
                suffix_base,
            }) => {
                assert_eq!(position, 4);
                assert_eq!(prefix_base, 'A');
                assert_eq!(suffix_base, 'G');
            }
            r => panic!("should be inconsistent but {:?}", r),
        }
    }
    #[test]
    fn spell_uncovered_gap() {
        let path = labels(&["AC|GG", "CG|GC"]);
        assert!(matches!(
            spell_paired_path(&path, 3, 1),
            Err(AssemblyError::UncoveredGap {
                prefix_len: 3,
                required: 4
            })
        ));
    }
    #[test]
    fn reconstruct_linear_genome() {
        let genome = b"TAATGCCATGGGATGTT";
        let pairs = read_pairs(genome, 3, 0);
        for seed in 0..10 {
            let dbg = PairedDbg::from_read_pairs(3, 0, &pairs).unwrap();
            let r = reconstruct(dbg, &mut RandomChooser::from_seed(seed)).unwrap();
            assert_eq!(r, StyledSequence::linear(genome));
        }
    }
    #[test]
    fn eulerian_path_endpoints() {
        let pairs = read_pairs(b"TAATGCCATGGGATGTT", 3, 0);
        let dbg = PairedDbg::from_read_pairs(3, 0, &pairs).unwrap();
        let walk = eulerian_walk(dbg, &mut FirstChooser).unwrap();
        assert_eq!(walk.style, SeqStyle::Linear);
        assert_eq!(walk.labels.len(), pairs.len() + 1);
        assert_eq!(walk.labels.first(), Some(&KmerPair::from_bases(b"TA", b"TG")));
        assert_eq!(walk.labels.last(), Some(&KmerPair::from_bases(b"AT", b"TT")));
    }
    #[test]
    fn reconstruct_corrupted_read_pair() {
        let mut pairs = read_pairs(b"TAATGCCATGGGATGTT", 3, 0);
        // the last read pair GAT|GTT into GAC|GTT
        let i = pairs
            .iter()
            .position(|p| p.to_string() == "GAT|GTT")
            .unwrap();
        pairs[i] = "GAC|GTT".parse().unwrap();
        let dbg = PairedDbg::from_read_pairs(3, 0, &pairs).unwrap();
        let r = reconstruct(dbg, &mut FirstChooser);
        assert!(matches!(
            r,
            Err(AssemblyError::GapInconsistency {
                position: 13,
                prefix_base: 'C',
                suffix_base: 'T'
            })
        ));
    }
}
