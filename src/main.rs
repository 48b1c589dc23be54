use anyhow::Result;
use clap::Parser;
use pairalign::cli::{run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
