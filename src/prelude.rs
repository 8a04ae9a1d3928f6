//!
//! globally-available parts
//!
pub use crate::assemble::{assemble, AssemblyParams, AssemblyReport};
pub use crate::common::{SeqStyle, Sequence, StyledSequence};
pub use crate::dbg::PairedDbg;
pub use crate::error::{AssemblyError, Result};
pub use crate::graph::chooser::{EdgeChooser, FirstChooser, RandomChooser};
pub use crate::kmer::{KmerPair, PairLabel, ReadPair};
