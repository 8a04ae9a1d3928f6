use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pairdbg::{
    assemble::{assemble_with_report, AssemblyParams},
    common::StyledSequence,
    dbg::PairedDbg,
    io::{fasta, pairs},
    kmer::styled_read_pairs,
    random_seq, seq,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, about, version)]
struct Opts {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Reconstruct the genome from a read-pair file
    Assemble {
        /// Read-pair file: `k d` header line followed by `A|B` tokens
        pairs_file: PathBuf,
        /// Seed of the random edge choices
        #[clap(short, long, default_value_t = 0)]
        seed: u64,
        /// Print the JSON report instead of the FASTA of the genome
        #[clap(long)]
        json: bool,
    },
    /// Create (k,d)-read pairs of each record of a FASTA
    Pairs {
        /// k-mer size of the reads
        #[clap(short = 'k')]
        k: usize,
        /// Gap size between the two reads of a pair
        #[clap(short = 'd')]
        d: usize,
        /// Treat the sequences as circular
        #[clap(long)]
        circular: bool,
        /// Input FASTA filename
        fasta: PathBuf,
    },
    /// Print the paired de Bruijn graph in DOT format
    Dot {
        /// Read-pair file
        pairs_file: PathBuf,
    },
    /// Generate a random sequence in FASTA
    Generate {
        /// Length of the sequence
        #[clap(short = 'l')]
        length: usize,
        /// Seed of the random generator
        #[clap(short = 's', default_value_t = 0)]
        seed: u64,
    },
    /// Overlap graph of the FASTA records as `source target` lines
    Overlap {
        /// Length of the suffix/prefix overlap
        #[clap(short = 'k', default_value_t = 3)]
        k: usize,
        /// Input FASTA filename
        fasta: PathBuf,
    },
    /// Nucleotide counts, GC content and minimum skew of each record
    Stats {
        /// Input FASTA filename
        fasta: PathBuf,
    },
}

fn run(opts: &Opts) -> Result<()> {
    match &opts.command {
        Commands::Assemble {
            pairs_file,
            seed,
            json,
        } => {
            let set = pairs::read_pairs_file(pairs_file)
                .with_context(|| format!("failed to read {}", pairs_file.display()))?;
            let params = AssemblyParams::new(set.k, set.d, *seed);
            let (genome, report) =
                assemble_with_report(&set.pairs, &params).context("assembly failed")?;
            if *json {
                println!("{}", report.to_json()?);
            } else {
                fasta::write_seq(std::io::stdout(), &genome_id(&genome), genome.seq())?;
            }
        }
        Commands::Pairs {
            k,
            d,
            circular,
            fasta: filename,
        } => {
            let records = fasta::parse_seqs(filename)
                .with_context(|| format!("failed to read {}", filename.display()))?;
            for record in records {
                let genome = if *circular {
                    StyledSequence::circular(&record.seq)
                } else {
                    StyledSequence::linear(&record.seq)
                };
                let read_pairs = styled_read_pairs(&genome, *k, *d);
                eprintln!("# {} n_read_pairs={}", record.id, read_pairs.len());
                pairs::write_read_pairs(std::io::stdout(), *k, *d, &read_pairs)?;
            }
        }
        Commands::Dot { pairs_file } => {
            let set = pairs::read_pairs_file(pairs_file)
                .with_context(|| format!("failed to read {}", pairs_file.display()))?;
            let dbg = PairedDbg::from_read_pairs(set.k, set.d, &set.pairs)?;
            println!("{}", dbg.as_dot());
        }
        Commands::Generate { length, seed } => {
            let genome = random_seq::generate(*length, *seed);
            let id = format!("random_l{}_s{}", length, seed);
            fasta::write_seq(std::io::stdout(), &id, &genome)?;
        }
        Commands::Overlap { k, fasta: filename } => {
            let records = fasta::parse_seqs(filename)
                .with_context(|| format!("failed to read {}", filename.display()))?;
            for (source, target) in seq::overlap_graph(&records, *k) {
                println!("{} {}", source, target);
            }
        }
        Commands::Stats { fasta: filename } => {
            let records = fasta::parse_seqs(filename)
                .with_context(|| format!("failed to read {}", filename.display()))?;
            for record in records {
                let [a, c, g, t] = seq::count_nucleotides(&record.seq);
                let gc = seq::gc_content(&record.seq)
                    .map(|gc| format!("{:.6}", gc))
                    .unwrap_or_else(|| "-".to_owned());
                let skews: Vec<String> = seq::minimum_skew(&record.seq)
                    .iter()
                    .map(|i| i.to_string())
                    .collect();
                println!(
                    "{}\tA={}\tC={}\tG={}\tT={}\tgc={}\tmin_skew={}",
                    record.id,
                    a,
                    c,
                    g,
                    t,
                    gc,
                    skews.join(",")
                );
            }
        }
    }
    Ok(())
}

fn genome_id(genome: &StyledSequence) -> String {
    format!("genome_{}_{}bp", genome.style(), genome.len())
}

fn main() -> Result<()> {
    env_logger::init();
    let opts: Opts = Opts::parse();
    eprintln!("# started_at={}", chrono::Local::now());
    eprintln!("# opts={:?}", opts);
    run(&opts)?;
    eprintln!("# finished_at={}", chrono::Local::now());
    Ok(())
}
