//! Command line arguments

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use tracing::metadata::LevelFilter;

#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Checks SELECT queries for syntax errors")]
pub struct Args {
    /// Queries to check. Standard input is read when no query or file is given.
    #[clap(value_name = "QUERY")]
    pub queries: Vec<String>,
    /// Read the query text from a file.
    #[clap(short = 'f', long = "file", value_hint = clap::ValueHint::FilePath, conflicts_with = "queries")]
    pub file: Option<PathBuf>,
    /// Print every token before the diagnostics.
    #[clap(long)]
    pub tokens: bool,
    /// Log scanner and validator progress.
    #[clap(long, env = "DEBUG")]
    pub debug: bool,
}

impl Args {
    pub fn log_level_filter(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        }
    }

    /// The texts to check, one per query argument.
    pub fn sources(&self) -> anyhow::Result<Vec<String>> {
        if let Some(path) = &self.file {
            let text = fs::read_to_string(path)
                .with_context(|| format!("read query file {}", path.display()))?;
            return Ok(vec![text]);
        }
        if !self.queries.is_empty() {
            return Ok(self.queries.clone());
        }
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("read stdin")?;
        Ok(vec![text])
    }
}
