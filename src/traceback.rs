use std::fmt;

use crate::matrix::{Direction, DirectionMatrix};
use crate::scoring::{AlignmentStats, ScoringScheme};
use crate::GAP_SYMBOL;

/// What a single alignment column does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentOp {
    Match,
    Mismatch,
    /// Gap in the first sequence.
    Insertion,
    /// Gap in the second sequence.
    Deletion,
}

/// One optimal global alignment and its score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    pub aligned_seq1: String,
    pub aligned_seq2: String,
    pub score: i32,
    /// Column operations as taken during the traceback, left to right.
    pub operations: Vec<AlignmentOp>,
}

impl Alignment {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned_seq1.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_seq1.is_empty()
    }

    pub fn stats(&self) -> AlignmentStats {
        self.operations
            .iter()
            .fold(AlignmentStats::default(), |mut acc, op| {
                match op {
                    AlignmentOp::Match => acc.matches += 1,
                    AlignmentOp::Mismatch => acc.mismatches += 1,
                    AlignmentOp::Insertion | AlignmentOp::Deletion => acc.gaps += 1,
                }
                acc
            })
    }

    /// Recomputes the score column by column from the recorded operations.
    pub fn rescore(&self, scheme: &ScoringScheme) -> i32 {
        self.operations
            .iter()
            .map(|op| match op {
                AlignmentOp::Match => scheme.match_score,
                AlignmentOp::Mismatch => scheme.mismatch,
                AlignmentOp::Insertion | AlignmentOp::Deletion => scheme.gap,
            })
            .sum()
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.aligned_seq1, self.aligned_seq2, self.score)
    }
}

/// Walks a filled direction matrix from `(m, n)` back to `(0, 0)`.
pub struct Traceback<'a> {
    directions: &'a DirectionMatrix,
    seq1: &'a [char],
    seq2: &'a [char],
}

impl<'a> Traceback<'a> {
    pub fn new(directions: &'a DirectionMatrix, seq1: &'a [char], seq2: &'a [char]) -> Self {
        Self {
            directions,
            seq1,
            seq2,
        }
    }

    pub fn reconstruct_alignment(&self, score: i32) -> Alignment {
        let (mut i, mut j) = (self.seq1.len(), self.seq2.len());
        let mut aligned_seq1 = Vec::with_capacity(i + j);
        let mut aligned_seq2 = Vec::with_capacity(i + j);
        let mut operations = Vec::with_capacity(i + j);

        loop {
            match self.directions.get(i, j) {
                Direction::Diagonal => {
                    let (a, b) = (self.seq1[i - 1], self.seq2[j - 1]);
                    aligned_seq1.push(a);
                    aligned_seq2.push(b);
                    operations.push(if a == b {
                        AlignmentOp::Match
                    } else {
                        AlignmentOp::Mismatch
                    });
                    i -= 1;
                    j -= 1;
                }
                Direction::Left => {
                    aligned_seq1.push(GAP_SYMBOL);
                    aligned_seq2.push(self.seq2[j - 1]);
                    operations.push(AlignmentOp::Insertion);
                    j -= 1;
                }
                Direction::Up => {
                    aligned_seq1.push(self.seq1[i - 1]);
                    aligned_seq2.push(GAP_SYMBOL);
                    operations.push(AlignmentOp::Deletion);
                    i -= 1;
                }
                Direction::None => break,
            }
        }

        // Built from the end backwards
        operations.reverse();
        Alignment {
            aligned_seq1: aligned_seq1.into_iter().rev().collect(),
            aligned_seq2: aligned_seq2.into_iter().rev().collect(),
            score,
            operations,
        }
    }
}
