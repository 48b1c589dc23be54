//! Command-line driver: input handling, pair iteration and reporting.

pub mod args;

pub use args::Cli;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::align::{Algorithm, AlignmentScoring};
use crate::config::{lookup_scheme, SCORING_SCHEMES};
use crate::report::{pairwise, tabular, OutputFormat};
use crate::sequence::{clean, read_fasta, record_id};
use crate::stats::AlignmentMetrics;

/// Resolve scoring parameters from the selected scheme and any explicit
/// overrides. Explicit flags win over the scheme.
fn resolve_scoring(cli: &Cli) -> Result<AlignmentScoring> {
    let base = match &cli.scheme {
        Some(name) => match lookup_scheme(name) {
            Some(scheme) => scheme.scoring(),
            None => bail!(
                "unknown scoring scheme: {} (available: {})",
                name,
                SCORING_SCHEMES
                    .iter()
                    .map(|s| s.name)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        },
        None => AlignmentScoring::default(),
    };

    Ok(AlignmentScoring::new(
        cli.match_score.unwrap_or(base.match_score),
        cli.mismatch.unwrap_or(base.mismatch),
        cli.gap.unwrap_or(base.gap),
    ))
}

/// Run an alignment job described by the parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let total_start = Instant::now();

    let algorithm = Algorithm::from_name(&cli.algorithm)?;
    let outfmt = OutputFormat::from_name(&cli.outfmt)?;
    let scoring = resolve_scoring(&cli)?;

    if cli.verbose {
        eprintln!(
            "[INFO] {}: match={}, mismatch={}, gap={}",
            algorithm.label(),
            scoring.match_score,
            scoring.mismatch,
            scoring.gap
        );
    }

    eprintln!("Reading query & subject...");
    let queries = read_fasta(&cli.query)?;
    let subjects = read_fasta(&cli.subject)?;

    let stdout = io::stdout();
    let mut writer: Box<dyn Write> = if let Some(path) = &cli.out {
        Box::new(BufWriter::new(File::create(path)?))
    } else {
        Box::new(BufWriter::new(stdout.lock()))
    };

    let total_pairs = queries.len() * subjects.len();
    let bar = if total_pairs > 1 {
        let bar = ProgressBar::new(total_pairs as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
                .unwrap(),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let pairwise_config = pairwise::PairwiseConfig {
        algorithm: algorithm.label().to_string(),
        ..Default::default()
    };

    for query in &queries {
        let query_id = record_id(query);
        let query_seq = clean(query.seq());

        for subject in &subjects {
            let subject_id = record_id(subject);
            let subject_seq = clean(subject.seq());

            let alignment = algorithm.align(&query_seq, &subject_seq, &scoring);
            let metrics = AlignmentMetrics::from_aligned_pair(
                &alignment.aligned_query,
                &alignment.aligned_subject,
            );

            match outfmt {
                OutputFormat::Pairwise => pairwise::write_pairwise(
                    &mut writer,
                    &query_id,
                    &subject_id,
                    query_seq.len(),
                    subject_seq.len(),
                    &alignment,
                    &metrics,
                    &pairwise_config,
                )?,
                OutputFormat::Tabular => {
                    tabular::write_tabular(&mut writer, &query_id, &subject_id, &alignment, &metrics)?
                }
            }

            bar.inc(1);
        }
    }

    bar.finish_and_clear();
    writer.flush()?;

    if cli.verbose {
        eprintln!(
            "[INFO] Aligned {} pair(s) in {:.3}s",
            total_pairs,
            total_start.elapsed().as_secs_f64()
        );
    }

    Ok(())
}
