use std::path::PathBuf;

use clap::Args;

use crate::builder::{build_overlap_graph, BuildConfig, BuildSummary};
use crate::cli::{OutputFormat, RangeArgs};
use crate::output::GraphFormat;
use crate::overlap::OverlapConfig;

#[derive(Args)]
pub struct BuildArgs {
    /// Input FASTA file (optionally gzip/bgzip compressed), or '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output graph file
    #[arg(required = true)]
    pub output: PathBuf,

    #[command(flatten)]
    pub range: RangeArgs,

    /// Compare every pair of contigs instead of using the seed index
    #[arg(long)]
    pub no_seed_filter: bool,

    /// Also overlap the reverse complement of every contig (labels become +name / -name)
    #[arg(long)]
    pub both_strands: bool,

    /// Graph file format (inferred from the output extension by default)
    #[arg(long, value_enum)]
    pub graph_format: Option<GraphFormat>,
}

/// Execute build subcommand
///
/// # Errors
///
/// Returns an error if the range is invalid, the input cannot be loaded, or
/// the graph cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: BuildArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = BuildConfig {
        overlap: OverlapConfig::new(args.range.min_overlap, args.range.max_overlap)
            .with_seed_filter(!args.no_seed_filter),
        format: args.graph_format,
        both_strands: args.both_strands,
    };

    if verbose {
        eprintln!(
            "Overlap range: {}..={} ({})",
            config.overlap.min_overlap,
            config.overlap.max_overlap,
            if config.overlap.use_seed_filter {
                "seed filtered"
            } else {
                "brute force"
            }
        );
    }

    let summary = build_overlap_graph(&args.input, &args.output, &config)?;

    match format {
        OutputFormat::Text => print_text_summary(&args, &summary),
        OutputFormat::Json => print_json_summary(&args, &summary)?,
        OutputFormat::Tsv => print_tsv_summary(&summary),
    }

    Ok(())
}

fn print_text_summary(args: &BuildArgs, summary: &BuildSummary) {
    println!("Overlap Graph");
    println!("{}", "=".repeat(60));
    println!("  Input: {}", args.input.display());
    println!("  Output: {}", args.output.display());
    println!("  Contigs: {}", summary.contigs);
    println!("  Overlaps: {}", summary.overlaps);
}

fn print_json_summary(args: &BuildArgs, summary: &BuildSummary) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "input": args.input.display().to_string(),
        "output": args.output.display().to_string(),
        "contigs": summary.contigs,
        "overlaps": summary.overlaps,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_summary(summary: &BuildSummary) {
    println!("contigs\toverlaps");
    println!("{}\t{}", summary.contigs, summary.overlaps);
}
