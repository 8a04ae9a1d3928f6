//!
//! Sequence types shared by the modules
//!
//! * `Sequence`: bases as `Vec<u8>`
//! * `SeqStyle`: circular or linear
//! * `StyledSequence`: sequence with its style, the output of assembly
//!
use std::borrow::Cow;
use std::str::FromStr;

/// Type of DNA sequence
///
/// If the style of sequence (i.e. circular or linear) matters
/// in your use case, please use `StyledSequence`.
pub type Sequence = Vec<u8>;

/// Type of Bases as array
///
/// It is used in `AsRef<Bases>` or `&Bases`
pub type Bases = [u8];

/// Convert bases into a displayable string
pub fn sequence_to_string<T: AsRef<Bases> + ?Sized>(seq: &T) -> Cow<'_, str> {
    String::from_utf8_lossy(seq.as_ref())
}

///
/// Array of valid DNA bases
///
pub const VALID_BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];

///
/// Shape of the sequence
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeqStyle {
    /// circular sequence. the tail is connected to the head.
    Circular,
    /// linear sequence
    Linear,
}

impl SeqStyle {
    /// check if this style is circular or not.
    pub fn is_circular(&self) -> bool {
        matches!(self, SeqStyle::Circular)
    }
}

impl std::fmt::Display for SeqStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SeqStyle::Circular => write!(f, "C"),
            SeqStyle::Linear => write!(f, "L"),
        }
    }
}

impl FromStr for SeqStyle {
    type Err = StyledSequenceParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(SeqStyle::Circular),
            "L" => Ok(SeqStyle::Linear),
            _ => Err(StyledSequenceParseError),
        }
    }
}

///
/// Sequence with style specified.
///
#[derive(Clone, Debug, PartialEq)]
pub struct StyledSequence {
    seq: Sequence,
    style: SeqStyle,
}

impl StyledSequence {
    /// Constructor of Styled Sequence.
    pub fn new(seq: Sequence, style: SeqStyle) -> Self {
        StyledSequence { seq, style }
    }
    /// Linear sequence from bases
    pub fn linear<T: AsRef<Bases>>(seq: T) -> Self {
        StyledSequence::new(seq.as_ref().to_vec(), SeqStyle::Linear)
    }
    /// Circular sequence from bases
    pub fn circular<T: AsRef<Bases>>(seq: T) -> Self {
        StyledSequence::new(seq.as_ref().to_vec(), SeqStyle::Circular)
    }
    pub fn seq(&self) -> &Sequence {
        &self.seq
    }
    pub fn style(&self) -> SeqStyle {
        self.style
    }
    pub fn len(&self) -> usize {
        self.seq.len()
    }
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
    pub fn into_seq(self) -> Sequence {
        self.seq
    }
    ///
    /// Check if two sequences are the same genome.
    ///
    /// Linear sequences must be identical, and a circular sequence
    /// can be any rotation of the other.
    ///
    pub fn is_equivalent(&self, other: &StyledSequence) -> bool {
        if self.style != other.style || self.len() != other.len() {
            return false;
        }
        match self.style {
            SeqStyle::Linear => self.seq == other.seq,
            SeqStyle::Circular => {
                self.is_empty() || (0..self.len()).any(|i| is_rotation_at(&self.seq, &other.seq, i))
            }
        }
    }
}

/// `b` equals `a` rotated to start at `offset`
fn is_rotation_at(a: &Bases, b: &Bases, offset: usize) -> bool {
    let (head, tail) = a.split_at(offset);
    b.starts_with(tail) && b[tail.len()..] == *head
}

impl std::fmt::Display for StyledSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.style, sequence_to_string(&self.seq))
    }
}

///
/// Error (unit type) in from_str of StyledSequence and SeqStyle
///
#[derive(Clone, Debug)]
pub struct StyledSequenceParseError;

impl FromStr for StyledSequence {
    type Err = StyledSequenceParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (style, seq) = s.split_once(':').ok_or(StyledSequenceParseError)?;
        let style = style.parse::<SeqStyle>()?;
        Ok(StyledSequence::new(seq.as_bytes().to_vec(), style))
    }
}

impl AsRef<Bases> for StyledSequence {
    fn as_ref(&self) -> &Bases {
        &self.seq
    }
}

//
// tests
//
