//! `meetq` CLI — find meeting slots from a JSON query document.
//!
//! ## Usage
//!
//! ```sh
//! # Query from stdin, JSON array of slots on stdout
//! echo '{"events":[],"request":{"attendees":["A"],"duration":30}}' | meetq query
//!
//! # Query a file, human-readable output
//! meetq query -i day.json --format text
//!
//! # Write pretty JSON to a file
//! meetq query -i day.json -o slots.json --format pretty
//!
//! # Validate a document without running the query
//! meetq check -i day.json
//!
//! # Show how the fallback between optional and mandatory attendees played out
//! meetq -v query -i day.json
//! ```

use std::collections::HashSet;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meeting_engine::wire::{self, SlotDto};
use meeting_engine::{AvailabilityEngine, TimeRange};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "meetq",
    version,
    about = "Find meeting slots for a day of attendee events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log query decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute available slots for a query document
    Query {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format: json, pretty, or text
        #[arg(long, default_value = "json")]
        format: String,
    },
    /// Validate a query document and summarize it
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Query {
            input,
            output,
            format,
        } => {
            let json = read_input(input.as_deref())?;
            let query = wire::decode_query(&json).context("Failed to decode query document")?;

            let slots = AvailabilityEngine::new().query(&query.events, &query.request);
            tracing::info!(events = query.events.len(), slots = slots.len(), "query finished");

            let rendered = render_slots(&slots, &format)?;
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { input } => {
            let json = read_input(input.as_deref())?;
            let query = wire::decode_query(&json).context("Failed to decode query document")?;

            let people: HashSet<&String> = query
                .events
                .iter()
                .flat_map(|event| event.attendees().iter())
                .collect();
            println!("Events:              {}", query.events.len());
            println!("People with events:  {}", people.len());
            println!(
                "Mandatory attendees: {}",
                query.request.mandatory_attendees().len()
            );
            println!(
                "Optional attendees:  {}",
                query.request.optional_attendees().len()
            );
            println!("Duration:            {} min", query.request.duration());
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "meeting_engine=debug,meetq=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Render slots in the requested output format.
///
/// - `json` — compact JSON array
/// - `pretty` — indented JSON array
/// - `text` — one `HH:MM-HH:MM (N min)` line per slot
fn render_slots(slots: &[TimeRange], format: &str) -> Result<String> {
    match format {
        "json" => wire::encode_slots(slots).context("Failed to encode slots"),
        "pretty" => {
            let dtos: Vec<SlotDto> = slots.iter().map(SlotDto::from).collect();
            Ok(serde_json::to_string_pretty(&dtos)?)
        }
        "text" => {
            if slots.is_empty() {
                return Ok("no available slots\n".to_string());
            }
            Ok(slots
                .iter()
                .map(SlotDto::from)
                .map(|s| format!("{}-{} ({} min)\n", s.start, s.end, s.duration_minutes))
                .collect())
        }
        other => anyhow::bail!(
            "Unknown output format: '{}'. Available formats: json, pretty, text",
            other
        ),
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
