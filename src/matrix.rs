use crate::scoring::ScoringScheme;

/// Predecessor of a cell in the optimal path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Diagonal,
    Left,
    Up,
    /// Only at `(0, 0)`, where the traceback stops.
    #[default]
    None,
}

/// Row-major `rows x cols` grid with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy + Default> Grid<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::default(); rows * cols],
            rows,
            cols,
        }
    }
}

impl<T: Copy> Grid<T> {
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[cfg(test)]
    fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }
}

pub type ScoreMatrix = Grid<i32>;
pub type DirectionMatrix = Grid<Direction>;

/// Score and direction matrices for one sequence pair.
#[derive(Debug, Clone)]
pub struct DpMatrices {
    pub scores: ScoreMatrix,
    pub directions: DirectionMatrix,
}

impl DpMatrices {
    /// Allocates `(m + 1) x (n + 1)` matrices with the gap boundary already set.
    pub fn new(m: usize, n: usize, scheme: &ScoringScheme) -> Self {
        let mut matrices = Self {
            scores: Grid::new(m + 1, n + 1),
            directions: Grid::new(m + 1, n + 1),
        };
        matrices.initialize(scheme);
        matrices
    }

    fn initialize(&mut self, scheme: &ScoringScheme) {
        for j in 1..self.scores.cols() {
            self.scores.set(0, j, scheme.gaps(j));
            self.directions.set(0, j, Direction::Left);
        }
        for i in 1..self.scores.rows() {
            self.scores.set(i, 0, scheme.gaps(i));
            self.directions.set(i, 0, Direction::Up);
        }
        self.scores.set(0, 0, 0);
        self.directions.set(0, 0, Direction::None);
    }

    /// Fills every interior cell in row-major order.
    ///
    /// On ties the recorded direction prefers Left, then Up, then Diagonal.
    /// Which optimal alignment gets reconstructed depends on this order, so
    /// it must not change.
    pub fn fill(&mut self, seq1: &[char], seq2: &[char], scheme: &ScoringScheme) {
        debug_assert_eq!(self.scores.rows(), seq1.len() + 1);
        debug_assert_eq!(self.scores.cols(), seq2.len() + 1);

        for (i, &a) in seq1.iter().enumerate().map(|(k, c)| (k + 1, c)) {
            for (j, &b) in seq2.iter().enumerate().map(|(k, c)| (k + 1, c)) {
                let diag = self.scores.get(i - 1, j - 1) + scheme.substitution(a, b);
                let up = self.scores.get(i - 1, j) + scheme.gap;
                let left = self.scores.get(i, j - 1) + scheme.gap;

                let best = diag.max(up).max(left);
                let direction = if best == left {
                    Direction::Left
                } else if best == up {
                    Direction::Up
                } else {
                    Direction::Diagonal
                };

                self.scores.set(i, j, best);
                self.directions.set(i, j, direction);
            }
        }
    }

    /// Score of the full alignment, the bottom-right cell.
    pub fn final_score(&self) -> i32 {
        self.scores.get(self.scores.rows() - 1, self.scores.cols() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn boundary_is_gap_penalties() {
        let m = DpMatrices::new(2, 3, &ScoringScheme::default());
        assert_eq!(m.scores.row(0), &[0, -2, -4, -6]);
        assert_eq!(m.scores.get(1, 0), -2);
        assert_eq!(m.scores.get(2, 0), -4);
        assert_eq!(
            m.directions.row(0),
            &[Direction::None, Direction::Left, Direction::Left, Direction::Left]
        );
        assert_eq!(m.directions.get(1, 0), Direction::Up);
        assert_eq!(m.directions.get(2, 0), Direction::Up);
    }

    #[test]
    fn only_origin_is_terminal() {
        let seq1 = chars("ACGT");
        let seq2 = chars("AGT");
        let scheme = ScoringScheme::default();
        let mut m = DpMatrices::new(seq1.len(), seq2.len(), &scheme);
        m.fill(&seq1, &seq2, &scheme);
        for i in 0..m.directions.rows() {
            for j in 0..m.directions.cols() {
                assert_eq!(m.directions.get(i, j) == Direction::None, (i, j) == (0, 0));
            }
        }
    }

    #[test]
    fn empty_sequences_degenerate() {
        let scheme = ScoringScheme::default();
        let m = DpMatrices::new(0, 0, &scheme);
        assert_eq!(m.scores.rows(), 1);
        assert_eq!(m.scores.cols(), 1);
        assert_eq!(m.final_score(), 0);

        let m = DpMatrices::new(0, 4, &scheme);
        assert_eq!(m.final_score(), -8);
        let m = DpMatrices::new(3, 0, &scheme);
        assert_eq!(m.final_score(), -6);
    }

    #[test]
    fn fill_small_matrix() {
        let seq1 = chars("AA");
        let seq2 = chars("A");
        let scheme = ScoringScheme::default();
        let mut m = DpMatrices::new(2, 1, &scheme);
        m.fill(&seq1, &seq2, &scheme);

        assert_eq!(m.scores.row(1), &[-2, 1]);
        assert_eq!(m.scores.row(2), &[-4, -1]);
        assert_eq!(m.directions.get(1, 1), Direction::Diagonal);
        // diag and up both give -1 here
        assert_eq!(m.directions.get(2, 1), Direction::Up);
        assert_eq!(m.final_score(), -1);
    }

    #[test]
    fn left_wins_all_ties() {
        // With a zero gap and zero mismatch every candidate ties at 0.
        let scheme = ScoringScheme::new(0, 0, 0);
        let seq1 = chars("AC");
        let seq2 = chars("GT");
        let mut m = DpMatrices::new(2, 2, &scheme);
        m.fill(&seq1, &seq2, &scheme);
        for i in 1..=2 {
            for j in 1..=2 {
                assert_eq!(m.directions.get(i, j), Direction::Left);
            }
        }
    }

    #[test]
    fn up_beats_diagonal_on_tie() {
        // diag = -2 + 0, up = 0 - 2, left = -4 - 2 at (1, 1)
        let scheme = ScoringScheme::new(1, 0, -2);
        let seq1 = chars("A");
        let seq2 = chars("C");
        let mut m = DpMatrices::new(1, 1, &scheme);
        m.scores.set(0, 1, 0);
        m.scores.set(1, 0, -4);
        m.scores.set(0, 0, -2);
        m.fill(&seq1, &seq2, &scheme);
        assert_eq!(m.directions.get(1, 1), Direction::Up);
    }
}
