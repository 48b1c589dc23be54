//! Alignment result rendering.

pub mod pairwise;
pub mod tabular;

use anyhow::{bail, Result};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pairwise alignment view (traditional text output)
    Pairwise,
    /// Tab-separated values, one line per alignment
    Tabular,
}

impl OutputFormat {
    /// Resolve an output format name. Accepts the numeric BLAST-style
    /// codes ("0", "6") as well as the format names.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "0" | "pairwise" => Ok(OutputFormat::Pairwise),
            "6" | "tabular" => Ok(OutputFormat::Tabular),
            _ => bail!(
                "unsupported output format: {} (use 0/pairwise or 6/tabular)",
                name
            ),
        }
    }
}
