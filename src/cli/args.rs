use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pairalign")]
#[command(version = "0.1.0")]
#[command(about = "Pairwise nucleotide alignment (Needleman-Wunsch / Smith-Waterman)", long_about = None)]
pub struct Cli {
    /// Query sequences in FASTA format
    #[arg(short, long)]
    pub query: PathBuf,

    /// Subject sequences in FASTA format
    #[arg(short, long)]
    pub subject: PathBuf,

    /// Alignment algorithm: needleman-wunsch/global or smith-waterman/local
    #[arg(short, long, default_value = "needleman-wunsch")]
    pub algorithm: String,

    /// Named scoring scheme: standard, strict, lenient, blast-like
    #[arg(long)]
    pub scheme: Option<String>,

    /// Match score (overrides the scheme value)
    #[arg(long = "match")]
    pub match_score: Option<i32>,

    /// Mismatch score (overrides the scheme value)
    #[arg(long)]
    pub mismatch: Option<i32>,

    /// Gap penalty, applied once per gap character (overrides the scheme value)
    #[arg(long)]
    pub gap: Option<i32>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output format: 0/pairwise (alignment view) or 6/tabular
    #[arg(long, default_value = "0")]
    pub outfmt: String,

    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}
