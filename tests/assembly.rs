//!
//! test of genome reconstruction from read pairs
//!
use pairdbg::genome::reconstruct;
use pairdbg::graph::balance::balance;
use pairdbg::graph::euler::euler_circuit;
use pairdbg::io::pairs::parse_read_pairs;
use pairdbg::kmer::{read_pairs, styled_read_pairs};
use pairdbg::prelude::*;
use pairdbg::random_seq::generate;
use test_case::test_case;

#[test_case(200, 10, 4, 0 ; "l200_k10_d4_s0")]
#[test_case(200, 10, 4, 1 ; "l200_k10_d4_s1")]
#[test_case(500, 12, 0, 2 ; "l500_k12_d0_s2")]
#[test_case(300, 8, 20, 3 ; "l300_k8_d20_s3")]
fn linear_round_trip(length: usize, k: usize, d: usize, seed: u64) {
    let genome = generate(length, seed);
    let pairs = read_pairs(&genome, k, d);
    assert_eq!(pairs.len(), length - (2 * k + d) + 1);
    for traversal_seed in 0..5 {
        let r = assemble(&pairs, &AssemblyParams::new(k, d, traversal_seed)).unwrap();
        assert_eq!(r, StyledSequence::linear(&genome));
    }
}

#[test_case(200, 10, 4, 0 ; "l200_k10_d4_s0")]
#[test_case(300, 12, 7, 5 ; "l300_k12_d7_s5")]
fn circular_round_trip(length: usize, k: usize, d: usize, seed: u64) {
    let genome = StyledSequence::circular(generate(length, seed));
    let pairs = styled_read_pairs(&genome, k, d);
    assert_eq!(pairs.len(), length);
    for traversal_seed in 0..5 {
        let r = assemble(&pairs, &AssemblyParams::new(k, d, traversal_seed)).unwrap();
        assert_eq!(r.style(), SeqStyle::Circular);
        assert_eq!(r.len(), length);
        assert!(r.is_equivalent(&genome), "{} is not a rotation of {}", r, genome);
    }
}

#[test]
fn concrete_scenario() {
    let text = "3 0\n\
                TAA|TGC AAT|GCC ATG|CCA TGC|CAT GCC|ATG CCA|TGG\n\
                CAT|GGG ATG|GGA TGG|GAT GGG|ATG GGA|TGT GAT|GTT\n";
    let set = parse_read_pairs(text).unwrap();
    let mut sorted = set.pairs.clone();
    sorted.sort();
    assert_eq!(sorted, read_pairs(b"TAATGCCATGGGATGTT", 3, 0));
    for seed in 0..10 {
        let r = assemble(&set.pairs, &AssemblyParams::new(set.k, set.d, seed)).unwrap();
        assert_eq!(r.to_string(), "L:TAATGCCATGGGATGTT");
    }
}

#[test]
fn two_sources_are_malformed() {
    // two separated single-edge paths
    let pairs = vec![
        KmerPair::from_bases(b"ACG", b"TTA"),
        KmerPair::from_bases(b"GAT", b"CCA"),
    ];
    let r = assemble(&pairs, &AssemblyParams::new(3, 1, 0));
    match r {
        Err(AssemblyError::MalformedGraph {
            n_sources,
            n_sinks,
            max_imbalance,
        }) => {
            assert_eq!(n_sources, 2);
            assert_eq!(n_sinks, 2);
            assert_eq!(max_imbalance, 1);
        }
        r => panic!("should be malformed but {:?}", r),
    }
}

#[test]
fn corrupted_read_pair_is_inconsistent() {
    let mut pairs = read_pairs(b"TAATGCCATGGGATGTT", 3, 0);
    let i = pairs
        .iter()
        .position(|p| p == &KmerPair::from_bases(b"GAT", b"GTT"))
        .unwrap();
    pairs[i] = KmerPair::from_bases(b"GAC", b"GTT");
    let r = assemble(&pairs, &AssemblyParams::new(3, 0, 0));
    assert!(matches!(r, Err(AssemblyError::GapInconsistency { .. })));
    assert!(r.unwrap_err().is_graph_error());
}

#[test]
fn disconnected_cycles_are_incomplete() {
    // two circular genomes sharing no node
    let mut pairs = styled_read_pairs(&StyledSequence::circular(b"AAAACCCGGGTT"), 3, 1);
    pairs.extend(styled_read_pairs(&StyledSequence::circular(b"TTTTGGGCCCAA"), 3, 1));
    let r = assemble(&pairs, &AssemblyParams::new(3, 1, 0));
    assert!(matches!(r, Err(AssemblyError::IncompleteTraversal { .. })));
}

#[test]
fn traversal_exhausts_graph() {
    let genome = generate(150, 7);
    let pairs = read_pairs(&genome, 9, 3);
    for seed in 0..10 {
        let dbg = PairedDbg::from_read_pairs(9, 3, &pairs).unwrap();
        let mut graph = dbg.into_graph();
        let temporary_edge = balance(&mut graph).unwrap().unwrap();
        let n_edges = graph.n_edges();
        assert_eq!(n_edges, pairs.len() + 1);

        let circuit = euler_circuit(&mut graph, &mut RandomChooser::from_seed(seed)).unwrap();
        assert!(graph.is_empty());
        assert_eq!(circuit.len(), n_edges + 1);
        assert_eq!(circuit.first(), circuit.last());

        let path = temporary_edge.excise(&circuit).unwrap();
        assert_eq!(path.len(), pairs.len() + 1);
        assert_eq!(path.first(), Some(&temporary_edge.source));
        assert_eq!(path.last(), Some(&temporary_edge.sink));
    }
}

#[test]
fn reconstruct_with_injected_chooser() {
    let pairs = read_pairs(b"TAATGCCATGGGATGTT", 3, 1);
    let dbg = PairedDbg::from_read_pairs(3, 1, &pairs).unwrap();
    let r = reconstruct(dbg, &mut RandomChooser::from_seed(42)).unwrap();
    assert_eq!(r, StyledSequence::linear(b"TAATGCCATGGGATGTT"));
}
