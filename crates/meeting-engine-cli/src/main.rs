//! `meet` CLI — find meeting times in a single day's calendar from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Find windows for the request in calendar.json (stdin → stdout)
//! meet query < calendar.json
//!
//! # Same, from file to file, as JSON
//! meet query -i calendar.json -o windows.json --format json
//!
//! # Free windows of at least 45 minutes shared by two people
//! meet free -i calendar.json -a alice -a bob --duration 45
//!
//! # Busy intervals of one person
//! meet busy -i calendar.json -a alice
//! ```
//!
//! The input is a JSON object with an `events` array and, for `query`, a
//! `request` object:
//!
//! ```json
//! {
//!   "events": [
//!     {"title": "Standup", "when": {"start": 540, "duration": 60}, "attendees": ["alice"]}
//!   ],
//!   "request": {"duration": 30, "attendees": ["alice"], "optional_attendees": ["bob"]}
//! }
//! ```

mod config;

use std::collections::BTreeSet;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meeting_engine::{Event, MeetingRequest, TimeRange};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, OutputFormat};

#[derive(Parser)]
#[command(
    name = "meet",
    version,
    about = "Find meeting times in a single day's calendar"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (otherwise RUST_LOG applies)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find windows that suit the request's attendees
    Query {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List the free windows shared by a group of attendees
    Free {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Attendee to include (repeatable)
        #[arg(short, long = "attendee", required = true)]
        attendees: Vec<String>,
        /// Minimum window length in minutes
        #[arg(short, long, allow_negative_numbers = true)]
        duration: Option<i32>,
        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List the busy intervals of a group of attendees
    Busy {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Attendee to include (repeatable)
        #[arg(short, long = "attendee", required = true)]
        attendees: Vec<String>,
        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

/// The calendar document read from the input.
#[derive(Deserialize)]
struct CalendarInput {
    #[serde(default)]
    events: Vec<Event>,
    request: Option<MeetingRequest>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so stdout stays machine-readable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    match cli.command {
        Commands::Query {
            input,
            output,
            format,
        } => {
            let calendar = read_calendar(input.as_deref())?;
            let request = calendar
                .request
                .context("Input has no \"request\" object to query")?;

            let windows = meeting_engine::find_meeting_times(&calendar.events, &request);
            tracing::debug!(windows = windows.len(), "query finished");

            let rendered = render(&windows, format.unwrap_or(config.format), config.pretty)?;
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Free {
            input,
            output,
            attendees,
            duration,
            format,
        } => {
            let calendar = read_calendar(input.as_deref())?;
            let group = MeetingRequest::new(attendees, duration.unwrap_or(config.default_duration))
                .context("Invalid --duration")?;

            let busy = meeting_engine::collect_busy_times(group.attendees(), &calendar.events);
            let windows = meeting_engine::find_free_windows(&busy, group.duration());

            let rendered = render(&windows, format.unwrap_or(config.format), config.pretty)?;
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Busy {
            input,
            output,
            attendees,
            format,
        } => {
            let calendar = read_calendar(input.as_deref())?;
            let group: BTreeSet<String> = attendees.into_iter().collect();

            let busy = meeting_engine::collect_busy_times(&group, &calendar.events);

            let rendered = render(&busy, format.unwrap_or(config.format), config.pretty)?;
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

fn read_calendar(path: Option<&str>) -> Result<CalendarInput> {
    let json = read_input(path)?;
    let calendar: CalendarInput =
        serde_json::from_str(&json).context("Failed to parse calendar JSON")?;
    tracing::debug!(events = calendar.events.len(), "read calendar");
    Ok(calendar)
}

/// Render ranges in the requested format, newline-terminated.
fn render(ranges: &[TimeRange], format: OutputFormat, pretty: bool) -> Result<String> {
    let mut out = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(ranges)?,
        OutputFormat::Json => serde_json::to_string(ranges)?,
        OutputFormat::Text if ranges.is_empty() => "No windows available".to_string(),
        OutputFormat::Text => ranges
            .iter()
            .map(|r| format!("{}-{} ({} min)", clock(r.start()), clock(r.end()), r.duration()))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    out.push('\n');
    Ok(out)
}

/// Format a minute offset as `HH:MM`; the end of the day prints as `24:00`.
fn clock(minute: i32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
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
