//! hoist-data: Lift nested `Data` fields of a JSON document to the top level
//!
//! Usage:
//!   # Read from file, output to stdout
//!   hoist-data appointment.json
//!
//!   # Read from stdin, output to stdout
//!   echo '{"Data": {"AppointmentId": "A1"}, "Status": "ok"}' | hoist-data
//!
//!   # Tolerate documents without a Data object, pretty-print to a file
//!   hoist-data --lenient --pretty input.json -o flattened.json

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{Context, Result};
use clap::Parser;
use hoist::{flatten_reader, DocumentWriter, FlattenConfig, Flattener};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hoist-data")]
#[command(about = "Lift AppointmentId, TimestampUtc and Discipline out of a nested Data object", long_about = None)]
struct Args {
    /// Input file (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Output file (use stdout if omitted)
    #[arg(long, short = 'o')]
    output: Option<String>,

    /// Pass documents without a Data object through instead of failing
    #[arg(long)]
    lenient: bool,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,

    /// Parse the input with simd-json
    #[arg(long)]
    simd: bool,

    /// Log each lifted field to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "hoist=debug" } else { "hoist=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = FlattenConfig::default();
    if args.lenient {
        config = config.lenient();
    }
    if args.pretty {
        config = config.pretty();
    }
    let flattener = Flattener::new(config);

    let reader: Box<dyn Read> = if let Some(file_path) = &args.input {
        let file = File::open(file_path).with_context(|| format!("Failed to open {}", file_path))?;
        Box::new(BufReader::new(file))
    } else {
        Box::new(std::io::stdin())
    };

    let output: Box<dyn Write> = if let Some(file_path) = &args.output {
        let file =
            File::create(file_path).with_context(|| format!("Failed to create {}", file_path))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(std::io::stdout())
    };

    let mut writer = DocumentWriter::new(output, flattener.config().output);
    flatten_reader(reader, &mut writer, &flattener, args.simd)
        .context("Failed to flatten document")?;

    Ok(())
}
