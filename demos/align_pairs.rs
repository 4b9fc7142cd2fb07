use nw_aligner::{align_pairs, Config, NeedlemanWunsch, ScoringScheme, SequencePair};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Single pair with the default scheme
    let aligner = NeedlemanWunsch::default();
    let result = aligner.try_align_str("GATTACA", "GCATGCU")?;
    println!("{result}");
    println!("Operations: {:?}", result.operations);
    println!("Stats: {:?}", result.stats());

    // Batch with a unit gap penalty, aligned in parallel
    let pairs = vec![
        SequencePair::new("GATTACA", "GCATGCU"),
        SequencePair::new("AGTACGCA", "TATGC"),
        SequencePair::new("", "ACG"),
    ];
    let config = Config::new()
        .with_scoring(ScoringScheme::default().with_gap(-1))
        .with_parallel(true);

    for (i, alignment) in align_pairs(&pairs, &config)?.iter().enumerate() {
        println!("Alignment {}: {}", i, alignment);
    }

    Ok(())
}
