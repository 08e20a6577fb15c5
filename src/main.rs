use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use args::Args;
use clap::Parser;
use soql_check::{DiagnosticSink, NullSink, Scanner, TracingSink, Validator};
use tracing::debug;
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

mod args;

const ACCEPTED: u8 = 0;
const REJECTED: u8 = 1;
const SCAN_FAILED: u8 = 2;

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.log_level_filter());
    debug!("starting soql-check with args: {args:?}");

    let sources = args.sources()?;
    let status = run(&args, &sources, &mut io::stdout().lock(), &mut io::stderr().lock())?;
    Ok(ExitCode::from(status))
}

/// Checks every source, writing tokens and diagnostics to `out` and scan
/// failures to `err`. Returns the exit status; a scan failure outranks
/// diagnostics.
fn run(
    args: &Args,
    sources: &[String],
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<u8> {
    let sink: &dyn DiagnosticSink = if args.debug { &TracingSink } else { &NullSink };

    let mut status = ACCEPTED;
    for source in sources {
        let tokens = match Scanner::with_sink(source, sink).scan_tokens() {
            Ok(tokens) => tokens,
            Err(error) => {
                writeln!(err, "error: {error}")?;
                status = SCAN_FAILED;
                continue;
            }
        };

        if args.tokens {
            for token in &tokens {
                writeln!(out, "{token}")?;
            }
        }

        let diagnostics = Validator::with_sink(sink).validate(&tokens);
        if diagnostics.is_empty() {
            debug!("query accepted");
            continue;
        }
        for diagnostic in &diagnostics {
            writeln!(out, "{diagnostic}")?;
        }
        status = status.max(REJECTED);
    }
    Ok(status)
}

fn init_logging(level_filter: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
