use crate::{AlignerError, DEFAULT_GAP, DEFAULT_MATCH, DEFAULT_MISMATCH};

/// Match reward, mismatch penalty and linear gap penalty used by the fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringScheme {
    pub match_score: i32,
    pub mismatch: i32,
    pub gap: i32,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_score: DEFAULT_MATCH,
            mismatch: DEFAULT_MISMATCH,
            gap: DEFAULT_GAP,
        }
    }
}

impl ScoringScheme {
    pub fn new(match_score: i32, mismatch: i32, gap: i32) -> Self {
        Self {
            match_score,
            mismatch,
            gap,
        }
    }

    pub fn with_match_score(mut self, match_score: i32) -> Self {
        self.match_score = match_score;
        self
    }

    pub fn with_mismatch(mut self, mismatch: i32) -> Self {
        self.mismatch = mismatch;
        self
    }

    pub fn with_gap(mut self, gap: i32) -> Self {
        self.gap = gap;
        self
    }

    #[inline]
    pub fn substitution(&self, a: char, b: char) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch
        }
    }

    /// Score of `n` consecutive gap columns. `n` must be within the bound
    /// accepted by [`ScoringScheme::check_range`].
    #[inline]
    pub fn gaps(&self, n: usize) -> i32 {
        self.gap * n as i32
    }

    /// Largest absolute score a single column can contribute.
    pub fn max_column_score(&self) -> i64 {
        i64::from(self.match_score)
            .abs()
            .max(i64::from(self.mismatch).abs())
            .max(i64::from(self.gap).abs())
    }

    /// Fails unless every cell of an alignment with up to `columns` columns
    /// fits in an `i32`. Each fill candidate is a sum of at most `m + n`
    /// column scores, so `m + n` is the value to pass.
    pub fn check_range(&self, columns: usize) -> Result<(), AlignerError> {
        let bound = i64::try_from(columns)
            .ok()
            .and_then(|c| c.checked_mul(self.max_column_score()));
        match bound {
            Some(bound) if bound <= i64::from(i32::MAX) => Ok(()),
            _ => Err(AlignerError::ScoreOverflow {
                columns,
                scheme: *self,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentStats {
    pub matches: u32,
    pub mismatches: u32,
    pub gaps: u32,
}

impl AlignmentStats {
    pub fn columns(&self) -> u32 {
        self.matches + self.mismatches + self.gaps
    }

    /// Fraction of columns that are matches, 0.0 for an empty alignment.
    pub fn identity(&self) -> f64 {
        match self.columns() {
            0 => 0.0,
            n => self.matches as f64 / n as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scheme() {
        let scheme = ScoringScheme::default();
        assert_eq!(scheme, ScoringScheme::new(1, -1, -2));
    }

    #[test]
    fn builder_overrides() {
        let scheme = ScoringScheme::default()
            .with_match_score(2)
            .with_mismatch(-3)
            .with_gap(-1);
        assert_eq!(scheme, ScoringScheme::new(2, -3, -1));
    }

    #[test]
    fn substitution_and_columns() {
        let scheme = ScoringScheme::default();
        assert_eq!(scheme.substitution('A', 'A'), 1);
        assert_eq!(scheme.substitution('A', 'a'), -1);
        assert_eq!(scheme.gaps(3), -6);
        assert_eq!(scheme.gaps(0), 0);
    }

    #[test]
    fn range_check() {
        let scheme = ScoringScheme::default();
        assert!(scheme.check_range(0).is_ok());
        assert!(scheme.check_range(1_000_000).is_ok());
        assert_eq!(scheme.max_column_score(), 2);
        // 2 * (i32::MAX / 2 + 1) is one past i32::MAX
        assert!(scheme.check_range(i32::MAX as usize / 2).is_ok());
        assert!(scheme.check_range(i32::MAX as usize / 2 + 1).is_err());

        let huge_gap = ScoringScheme::new(1, -1, i32::MIN / 2);
        assert!(huge_gap.check_range(1).is_ok());
        assert!(matches!(
            huge_gap.check_range(2),
            Err(AlignerError::ScoreOverflow { columns: 2, .. })
        ));

        let extreme = ScoringScheme::new(i32::MIN, 0, 0);
        assert!(extreme.check_range(1).is_err());
        assert!(extreme.check_range(0).is_ok());
    }

    #[test]
    fn identity_of_empty_stats() {
        assert_eq!(AlignmentStats::default().identity(), 0.0);
        let stats = AlignmentStats {
            matches: 3,
            mismatches: 1,
            gaps: 0,
        };
        assert_eq!(stats.columns(), 4);
        assert_eq!(stats.identity(), 0.75);
    }
}
