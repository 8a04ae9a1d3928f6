//!
//! End-to-end assembly from read pairs
//!
use crate::common::{sequence_to_string, StyledSequence};
use crate::dbg::PairedDbg;
use crate::error::Result;
use crate::genome::reconstruct;
use crate::graph::balance::DegreeStats;
use crate::graph::chooser::RandomChooser;
use crate::kmer::ReadPair;
use log::info;
use serde::Serialize;

///
/// Parameters of the assembly
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssemblyParams {
    /// k-mer size of each read in a pair
    pub k: usize,
    /// number of unknown bases between the two k-mers of a pair
    pub d: usize,
    /// seed of the random choices in the Eulerian traversal
    pub seed: u64,
}

impl AssemblyParams {
    pub fn new(k: usize, d: usize, seed: u64) -> Self {
        AssemblyParams { k, d, seed }
    }
}

impl Default for AssemblyParams {
    fn default() -> Self {
        AssemblyParams::new(3, 0, 0)
    }
}

impl std::fmt::Display for AssemblyParams {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "k={} d={} seed={}", self.k, self.d, self.seed)
    }
}

///
/// Summary of an assembly run, written as JSON by the cli
///
#[derive(Debug, Clone, Serialize)]
pub struct AssemblyReport {
    pub k: usize,
    pub d: usize,
    pub seed: u64,
    pub n_read_pairs: usize,
    pub n_nodes: usize,
    pub n_edges: usize,
    pub n_sources: usize,
    pub n_sinks: usize,
    /// `L` (linear) or `C` (circular)
    pub style: String,
    pub length: usize,
    pub genome: String,
}

impl AssemblyReport {
    fn new(params: &AssemblyParams, stats: &DegreeStats, genome: &StyledSequence) -> Self {
        AssemblyReport {
            k: params.k,
            d: params.d,
            seed: params.seed,
            n_read_pairs: stats.n_edges,
            n_nodes: stats.n_nodes,
            n_edges: stats.n_edges,
            n_sources: stats.n_sources,
            n_sinks: stats.n_sinks,
            style: genome.style().to_string(),
            length: genome.len(),
            genome: sequence_to_string(genome.seq()).into_owned(),
        }
    }
    /// JSON string of the report
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

///
/// Reconstruct the genome from (k,d)-read pairs
///
pub fn assemble(pairs: &[ReadPair], params: &AssemblyParams) -> Result<StyledSequence> {
    assemble_with_report(pairs, params).map(|(genome, _)| genome)
}

///
/// Reconstruct the genome from (k,d)-read pairs, together with the summary
///
pub fn assemble_with_report(
    pairs: &[ReadPair],
    params: &AssemblyParams,
) -> Result<(StyledSequence, AssemblyReport)> {
    info!("assemble {} read pairs with {}", pairs.len(), params);
    let dbg = PairedDbg::from_read_pairs(params.k, params.d, pairs)?;
    let stats = dbg.degree_stats();
    let mut chooser = RandomChooser::from_seed(params.seed);
    let genome = reconstruct(dbg, &mut chooser)?;
    let report = AssemblyReport::new(params, &stats, &genome);
    Ok((genome, report))
}
