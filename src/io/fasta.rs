//!
//! FASTA input and output with `bio::io::fasta`
//!
use crate::common::Sequence;
use bio::io::fasta;
use log::warn;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

///
/// Convert to upper-case ACGT. Anything else becomes `N` with a warning.
///
pub fn sanitize_bases(seq: &[u8]) -> Sequence {
    seq.iter()
        .enumerate()
        .map(|(i, base)| match base {
            b'A' | b'a' => b'A',
            b'C' | b'c' => b'C',
            b'G' | b'g' => b'G',
            b'T' | b't' => b'T',
            b'N' | b'n' => {
                warn!("ambiguous detected `n` in bases[{}]", i);
                b'N'
            }
            &c => {
                warn!("informal base `{}` detected in bases[{}]", c as char, i);
                b'N'
            }
        })
        .collect()
}

///
/// A named sequence read from FASTA
///
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSeq {
    pub id: String,
    pub seq: Sequence,
}

///
/// Parse all records of FASTA text, sanitizing the bases.
///
pub fn parse_seqs_from<R: Read>(reader: R) -> std::io::Result<Vec<NamedSeq>> {
    let reader = fasta::Reader::new(reader);
    let mut seqs = Vec::new();
    for result in reader.records() {
        let record = result?;
        seqs.push(NamedSeq {
            id: record.id().to_owned(),
            seq: sanitize_bases(record.seq()),
        });
    }
    Ok(seqs)
}

///
/// Parse all records of the FASTA file.
///
pub fn parse_seqs<P: AsRef<Path>>(filename: P) -> std::io::Result<Vec<NamedSeq>> {
    parse_seqs_from(File::open(filename)?)
}

///
/// Write a record in FASTA.
///
pub fn write_seq<W: Write>(writer: W, id: &str, seq: &[u8]) -> std::io::Result<()> {
    let mut writer = fasta::Writer::new(writer);
    writer.write(id, None, seq)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize() {
        assert_eq!(sanitize_bases(b"acGTnX"), b"ACGTNN".to_vec());
    }
    #[test]
    fn parse_and_write() {
        let text = b">r1 first\nACGT\nacgt\n>r2\nTTNA\n";
        let seqs = parse_seqs_from(&text[..]).unwrap();
        assert_eq!(seqs.len(), 2);
        assert_eq!(seqs[0].id, "r1");
        assert_eq!(seqs[0].seq, b"ACGTACGT".to_vec());
        assert_eq!(seqs[1].seq, b"TTNA".to_vec());

        let mut buf: Vec<u8> = Vec::new();
        write_seq(&mut buf, "g", b"ACGT").unwrap();
        let seqs = parse_seqs_from(&buf[..]).unwrap();
        assert_eq!(seqs, vec![NamedSeq { id: "g".to_owned(), seq: b"ACGT".to_vec() }]);
    }
    #[test]
    fn parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("genome.fa");
        std::fs::write(&path, ">g\nTAATGCCATGGGATGTT\n").unwrap();
        let seqs = parse_seqs(&path).unwrap();
        assert_eq!(seqs[0].seq, b"TAATGCCATGGGATGTT".to_vec());
        assert!(parse_seqs(dir.path().join("missing.fa")).is_err());
    }
}
