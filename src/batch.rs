use std::io::Write;
use std::path::Path;
use std::time::Instant;

use log::info;
use rayon::prelude::*;

use crate::config::Config;
use crate::io::{read_pairs_from_path, write_alignments, SequencePair};
use crate::traceback::Alignment;
use crate::{AlignerError, NeedlemanWunsch};

/// Aligns every pair independently. Results are in input order whether or
/// not `config.parallel` is set. Fails with [`AlignerError::ScoreOverflow`]
/// if any pair is too long for the scheme.
pub fn align_pairs(
    pairs: &[SequencePair],
    config: &Config,
) -> Result<Vec<Alignment>, AlignerError> {
    let aligner = NeedlemanWunsch::new(config.scoring);
    let align_one = |pair: &SequencePair| aligner.try_align_str(&pair.seq_1, &pair.seq_2);

    if config.parallel {
        pairs.par_iter().map(align_one).collect()
    } else {
        pairs.iter().map(align_one).collect()
    }
}

/// Reads pairs from `path`, aligns them and writes one line per pair.
/// Returns the number of pairs processed.
pub fn run<P: AsRef<Path>, W: Write>(
    path: P,
    config: &Config,
    writer: W,
) -> Result<usize, AlignerError> {
    let start_time = Instant::now();

    let pairs = read_pairs_from_path(path, config.has_header)?;
    let alignments = align_pairs(&pairs, config)?;
    write_alignments(writer, &alignments)?;

    info!(
        "aligned {} pairs in {:.2} ms (parallel: {})",
        pairs.len(),
        start_time.elapsed().as_secs_f64() * 1000.0,
        config.parallel
    );
    Ok(pairs.len())
}
