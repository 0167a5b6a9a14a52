//! Verify command - run both overlap strategies on the same input and check
//! that they report the same edges.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Args;

use crate::cli::{OutputFormat, RangeArgs};
use crate::core::graph::Overlap;
use crate::core::store::SequenceStore;
use crate::overlap::{OverlapConfig, OverlapEngine, ScanStrategy};

#[derive(Args)]
pub struct VerifyArgs {
    /// Input FASTA file (optionally gzip/bgzip compressed), or '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    #[command(flatten)]
    pub range: RangeArgs,

    /// Also overlap the reverse complement of every contig
    #[arg(long)]
    pub both_strands: bool,
}

/// Outcome of comparing the two strategies
struct Comparison {
    contigs: usize,
    brute_force: usize,
    seed_filtered: usize,
    /// Edges reported by brute force only
    missing: Vec<Overlap>,
    /// Edges reported by the seed filter only
    extra: Vec<Overlap>,
}

impl Comparison {
    fn agrees(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Execute verify subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be loaded, the range is invalid, or
/// the two strategies disagree.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: VerifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = OverlapConfig::new(args.range.min_overlap, args.range.max_overlap);
    // Before the load, so a bad range is reported without reading the input
    config.validate()?;

    let mut store = SequenceStore::load(&args.input)?;
    if args.both_strands {
        store = store.with_reverse_complements();
    }

    if verbose {
        eprintln!(
            "Loaded {} contigs ({} residues)",
            store.len(),
            store.total_length()
        );
    }

    let engine = OverlapEngine::new(&store, config)?;
    let brute = engine.compute_with(ScanStrategy::BruteForce).into_overlaps();
    let seeded = engine
        .compute_with(ScanStrategy::SeedFiltered)
        .into_overlaps();

    let comparison = compare(store.len(), &brute, &seeded);

    match format {
        OutputFormat::Text => print_text_comparison(&store, &comparison),
        OutputFormat::Json => print_json_comparison(&store, &comparison)?,
        OutputFormat::Tsv => print_tsv_comparison(&comparison),
    }

    if !comparison.agrees() {
        anyhow::bail!(
            "Strategies disagree: {} edges missing from the seed-filtered scan, {} extra",
            comparison.missing.len(),
            comparison.extra.len()
        );
    }

    Ok(())
}

fn compare(contigs: usize, brute: &[Overlap], seeded: &[Overlap]) -> Comparison {
    let brute_set: HashSet<&Overlap> = brute.iter().collect();
    let seeded_set: HashSet<&Overlap> = seeded.iter().collect();

    // Inputs are in canonical order, so filtering keeps that order
    Comparison {
        contigs,
        brute_force: brute.len(),
        seed_filtered: seeded.len(),
        missing: brute
            .iter()
            .filter(|o| !seeded_set.contains(o))
            .copied()
            .collect(),
        extra: seeded
            .iter()
            .filter(|o| !brute_set.contains(o))
            .copied()
            .collect(),
    }
}

fn describe(store: &SequenceStore, overlap: &Overlap) -> String {
    let label = |id| {
        store
            .get(id)
            .map_or_else(|_| format!("#{id}"), |contig| contig.label())
    };
    format!(
        "{} -> {} ({})",
        label(overlap.source),
        label(overlap.target),
        overlap.size
    )
}

fn print_text_comparison(store: &SequenceStore, comparison: &Comparison) {
    println!("Strategy Comparison");
    println!("{}", "=".repeat(60));
    println!("  Contigs: {}", comparison.contigs);
    println!("  Brute-force overlaps: {}", comparison.brute_force);
    println!("  Seed-filtered overlaps: {}", comparison.seed_filtered);
    println!(
        "  Result: {}",
        if comparison.agrees() {
            "identical"
        } else {
            "DIFFERENT"
        }
    );

    for overlap in &comparison.missing {
        println!("  missing: {}", describe(store, overlap));
    }
    for overlap in &comparison.extra {
        println!("  extra: {}", describe(store, overlap));
    }
}

fn print_json_comparison(store: &SequenceStore, comparison: &Comparison) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "contigs": comparison.contigs,
        "brute_force": comparison.brute_force,
        "seed_filtered": comparison.seed_filtered,
        "identical": comparison.agrees(),
        "missing": comparison.missing.iter().map(|o| describe(store, o)).collect::<Vec<_>>(),
        "extra": comparison.extra.iter().map(|o| describe(store, o)).collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_comparison(comparison: &Comparison) {
    println!("contigs\tbrute_force\tseed_filtered\tidentical");
    println!(
        "{}\t{}\t{}\t{}",
        comparison.contigs,
        comparison.brute_force,
        comparison.seed_filtered,
        comparison.agrees()
    );
}
