use crate::scoring::ScoringScheme;

/// Settings for a batch run over a CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub scoring: ScoringScheme,
    /// Align pairs on the rayon pool. Output order is unchanged.
    pub parallel: bool,
    /// Skip the first row of the input.
    pub has_header: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringScheme::default(),
            parallel: false,
            has_header: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scoring(mut self, scoring: ScoringScheme) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }
}
