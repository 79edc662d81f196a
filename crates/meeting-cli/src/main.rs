//! `find-meeting` CLI — find free meeting slots for a JSON description of a day.
//!
//! ## Usage
//!
//! ```sh
//! # Read the day from stdin, print free ranges as JSON
//! cat day.json | find-meeting
//!
//! # Read from a file, print one HH:MM-HH:MM line per range
//! find-meeting -i day.json --format text
//!
//! # Full outcome, including which optional attendees fit
//! find-meeting -i day.json --detailed
//!
//! # Exhaustive per-size pruning, cap the optional search at 12 people
//! find-meeting -i day.json --pruning per-level --max-optional 12
//! ```
//!
//! The input document looks like:
//!
//! ```json
//! {
//!   "events": [
//!     { "name": "Standup", "when": { "start": 510, "end": 540 }, "attendees": ["ana"] }
//!   ],
//!   "request": { "required_attendees": ["ana"], "optional_attendees": [], "duration": 30 }
//! }
//! ```

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use meeting_core::{find_meeting_slots, Event, MeetingRequest, PruningPolicy, QueryOptions};

#[derive(Parser)]
#[command(
    name = "find-meeting",
    version,
    about = "Find the times of day at which a meeting can be held"
)]
struct Cli {
    /// Input JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Emit the full outcome (ranges, included optional attendees, free minutes)
    #[arg(long)]
    detailed: bool,

    /// JSON file with query options; flags below override its values
    #[arg(long)]
    options: Option<String>,

    /// When to stop searching larger groups of optional attendees
    #[arg(long, value_enum)]
    pruning: Option<Pruning>,

    /// Reject requests with more optional attendees than this
    #[arg(long)]
    max_optional: Option<usize>,

    /// Enable debug logging on stderr
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Pruning {
    Cumulative,
    PerLevel,
}

impl From<Pruning> for PruningPolicy {
    fn from(value: Pruning) -> Self {
        match value {
            Pruning::Cumulative => PruningPolicy::Cumulative,
            Pruning::PerLevel => PruningPolicy::PerLevel,
        }
    }
}

/// The day being scheduled.
#[derive(Deserialize)]
struct Day {
    #[serde(default)]
    events: Vec<Event>,
    request: MeetingRequest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let options = build_options(&cli)?;
    debug!(?options, "Query options");

    let raw = read_input(cli.input.as_deref())?;
    let day: Day = serde_json::from_str(&raw).context("Failed to parse day description")?;
    debug!(
        events = day.events.len(),
        duration = day.request.duration(),
        "Loaded day"
    );

    let slots = find_meeting_slots(&day.events, &day.request, &options)
        .context("Failed to find meeting slots")?;

    let rendered = match (cli.format, cli.detailed) {
        (Format::Json, true) => serde_json::to_string_pretty(&slots)?,
        (Format::Json, false) => serde_json::to_string_pretty(&slots.ranges)?,
        (Format::Text, detailed) => {
            let mut lines: Vec<String> = slots.ranges.iter().map(ToString::to_string).collect();
            if detailed {
                let optional: Vec<&str> =
                    slots.optional_attendees.iter().map(String::as_str).collect();
                lines.push(format!("optional attendees: {}", optional.join(", ")));
                lines.push(format!("free minutes: {}", slots.free_minutes));
            }
            lines.join("\n")
        }
    };

    write_output(cli.output.as_deref(), &rendered)
}

/// Combine the `--options` file (if any) with the command-line overrides.
fn build_options(cli: &Cli) -> Result<QueryOptions> {
    let mut options = match cli.options.as_deref() {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read options file: {}", path))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse options file: {}", path))?
        }
        None => QueryOptions::default(),
    };

    if let Some(pruning) = cli.pruning {
        options = options.with_pruning(pruning.into());
    }
    if let Some(limit) = cli.max_optional {
        options = options.with_max_optional_attendees(limit);
    }

    Ok(options)
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
            println!("{}", content);
        }
    }
    Ok(())
}
