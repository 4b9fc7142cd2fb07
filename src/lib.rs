//! Needleman-Wunsch global alignment of character sequence pairs.
//!
//! The engine ([`NeedlemanWunsch`]) is a total function of two sequences and
//! a [`ScoringScheme`]. The [`io`] and [`batch`] modules read pairs from CSV,
//! run them through the engine and render one line per pair.

use log::{debug, trace};
use thiserror::Error;

pub mod batch;
pub mod config;
pub mod io;
pub mod matrix;
pub mod scoring;
pub mod traceback;

pub use batch::{align_pairs, run};
pub use config::Config;
pub use io::{read_pairs, read_pairs_from_path, write_alignments, SequencePair};
pub use matrix::{Direction, DirectionMatrix, DpMatrices, Grid, ScoreMatrix};
pub use scoring::{AlignmentStats, ScoringScheme};
pub use traceback::{Alignment, AlignmentOp, Traceback};

// Reference scoring scheme
pub const DEFAULT_MATCH: i32 = 1;
pub const DEFAULT_MISMATCH: i32 = -1;
pub const DEFAULT_GAP: i32 = -2;

pub const GAP_SYMBOL: char = '-';

/// Bound on the absolute value of each score accepted from the command line.
pub const SCORE_LIMIT: i64 = 1_000_000;

#[derive(Debug, Error)]
pub enum AlignerError {
    #[error("invalid input row {row}: expected 2 columns, found {columns}")]
    InvalidInputRow { row: u64, columns: usize },
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed CSV input: {0}")]
    Csv(#[from] csv::Error),
    #[error("scores of a {columns}-column alignment overflow i32 with {scheme:?}")]
    ScoreOverflow {
        columns: usize,
        scheme: ScoringScheme,
    },
}

/// Immutable character sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    data: Vec<char>,
}

impl Sequence {
    pub fn new(data: &str) -> Self {
        Self {
            data: data.chars().collect(),
        }
    }

    pub fn as_chars(&self) -> &[char] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Global aligner with a fixed scoring scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeedlemanWunsch {
    scheme: ScoringScheme,
}

impl NeedlemanWunsch {
    pub fn new(scheme: ScoringScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> &ScoringScheme {
        &self.scheme
    }

    /// Builds and fills the matrices for one pair.
    pub fn fill_matrices(&self, seq1: &Sequence, seq2: &Sequence) -> DpMatrices {
        let mut matrices = DpMatrices::new(seq1.len(), seq2.len(), &self.scheme);
        matrices.fill(seq1.as_chars(), seq2.as_chars(), &self.scheme);
        matrices
    }

    /// Aligns a pair. The scheme must pass [`ScoringScheme::check_range`]
    /// for `seq1.len() + seq2.len()` columns; use [`NeedlemanWunsch::try_align`]
    /// when the scheme or the lengths are not known to be in range.
    pub fn align(&self, seq1: &Sequence, seq2: &Sequence) -> Alignment {
        let matrices = self.fill_matrices(seq1, seq2);
        let alignment = Traceback::new(&matrices.directions, seq1.as_chars(), seq2.as_chars())
            .reconstruct_alignment(matrices.final_score());

        debug!(
            "aligned {}x{} pair: score {}, {} columns",
            seq1.len(),
            seq2.len(),
            alignment.score,
            alignment.len()
        );
        let stats = alignment.stats();
        trace!("alignment stats: {:?}, identity {:.3}", stats, stats.identity());

        alignment
    }

    pub fn align_str(&self, seq1: &str, seq2: &str) -> Alignment {
        self.align(&Sequence::new(seq1), &Sequence::new(seq2))
    }

    pub fn try_align(
        &self,
        seq1: &Sequence,
        seq2: &Sequence,
    ) -> Result<Alignment, AlignerError> {
        self.scheme.check_range(seq1.len() + seq2.len())?;
        Ok(self.align(seq1, seq2))
    }

    pub fn try_align_str(&self, seq1: &str, seq2: &str) -> Result<Alignment, AlignerError> {
        self.try_align(&Sequence::new(seq1), &Sequence::new(seq2))
    }
}

/// Aligns two strings with the reference scoring scheme.
pub fn align(seq1: &str, seq2: &str) -> Alignment {
    NeedlemanWunsch::default().align_str(seq1, seq2)
}
