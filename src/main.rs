use std::io;
use std::path::PathBuf;

use clap::Parser;
use nw_aligner::{
    run, Config, ScoringScheme, DEFAULT_GAP, DEFAULT_MATCH, DEFAULT_MISMATCH, SCORE_LIMIT,
};

/// Global alignment of sequence pairs read from a CSV file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// CSV file with a header row followed by `seq_1,seq_2` rows
    input: PathBuf,

    #[arg(
        long,
        default_value_t = DEFAULT_MATCH,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(-SCORE_LIMIT..=SCORE_LIMIT),
    )]
    match_score: i32,

    #[arg(
        long,
        default_value_t = DEFAULT_MISMATCH,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(-SCORE_LIMIT..=SCORE_LIMIT),
    )]
    mismatch_score: i32,

    #[arg(
        long,
        default_value_t = DEFAULT_GAP,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(-SCORE_LIMIT..=SCORE_LIMIT),
    )]
    gap_penalty: i32,

    /// Align pairs on all cores
    #[arg(long)]
    parallel: bool,

    /// Treat the first row as data
    #[arg(long)]
    no_header: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = Config::new()
        .with_scoring(ScoringScheme::new(
            args.match_score,
            args.mismatch_score,
            args.gap_penalty,
        ))
        .with_parallel(args.parallel)
        .with_header(!args.no_header);

    let stdout = io::stdout();
    run(&args.input, &config, stdout.lock())?;

    Ok(())
}
