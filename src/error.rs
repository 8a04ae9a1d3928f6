//!
//! Error type of the assembly pipeline
//!
use thiserror::Error;

///
/// Failures of graph construction, traversal and reconstruction.
///
/// `MalformedGraph`, `IncompleteTraversal` and `GapInconsistency` are
/// determined by the input graph only, regardless of the random choices
/// made during the traversal.
///
#[derive(Error, Debug)]
pub enum AssemblyError {
    /// The graph is neither balanced nor nearly balanced
    #[error(
        "malformed graph: {n_sources} nodes with outdegree > indegree, \
         {n_sinks} nodes with indegree > outdegree, max |imbalance| = {max_imbalance}"
    )]
    MalformedGraph {
        n_sources: usize,
        n_sinks: usize,
        max_imbalance: usize,
    },

    /// Edges remain but no node of the current circuit can extend it.
    /// The graph was disconnected.
    #[error(
        "incomplete traversal: {n_remaining_edges} edges remain unreachable \
         after traversing {n_traversed_edges} edges"
    )]
    IncompleteTraversal {
        n_remaining_edges: usize,
        n_traversed_edges: usize,
    },

    /// Prefix string and suffix string disagree in the overlap window
    #[error(
        "gap inconsistency at position {position}: prefix has `{prefix_base}` \
         but suffix has `{suffix_base}`"
    )]
    GapInconsistency {
        position: usize,
        prefix_base: char,
        suffix_base: char,
    },

    /// Prefix string does not reach the start of the suffix string
    #[error("gap is not covered: prefix string has {prefix_len} bases but {required} are required")]
    UncoveredGap { prefix_len: usize, required: usize },

    #[error("k-mer size mismatch: expected k={expected} but found k={found}")]
    KmerSizeMismatch { expected: usize, found: usize },

    #[error("no read pairs are given")]
    NoReadPairs,

    #[error("invalid read pair `{token}`: {reason}")]
    InvalidReadPair { token: String, reason: String },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AssemblyError {
    /// Errors caused by the structure of the input graph
    /// (as opposed to malformed tokens or parameters).
    pub fn is_graph_error(&self) -> bool {
        matches!(
            self,
            AssemblyError::MalformedGraph { .. }
                | AssemblyError::IncompleteTraversal { .. }
                | AssemblyError::GapInconsistency { .. }
                | AssemblyError::UncoveredGap { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AssemblyError>;
