#![deny(unsafe_code)]
//! CLI binary for the lattice-walk simulator.
//!
//! Subcommands:
//! - `walk` — fixed-length walk, prints the path
//! - `seek` — target-seeking walk with an optional step limit
//! - `probability` — exact reach probability as a fraction and decimal
//! - `distance` — Manhattan distance between two lattice points

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use lattice_walk_core::{manhattan_distance, LcgParams, Position, REFERENCE_SEED};
use lattice_walk_engine::{CancelToken, WalkSession, Walker};
use lattice_walk_probability::{decimal_string, probability};
use std::process;

#[derive(Parser)]
#[command(name = "lattice-walk", about = "Lattice random walk simulator CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a fixed-length walk and print the path.
    Walk {
        /// Number of steps.
        #[arg(short, long)]
        steps: usize,

        /// Source position as comma-separated coordinates (1 to 3 of them).
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        source: Vec<i64>,

        /// Batch seed for the walk's fresh generator.
        #[arg(long, default_value_t = REFERENCE_SEED)]
        seed: u64,
    },
    /// Run a target-seeking walk until arrival or the step limit.
    Seek {
        /// Source position as comma-separated coordinates.
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        source: Vec<i64>,

        /// Target position as comma-separated coordinates.
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        target: Vec<i64>,

        /// Cancel the walk after this many steps (it is unbounded otherwise).
        #[arg(short, long)]
        limit: Option<usize>,

        /// Seed for the persistent generator.
        #[arg(long, default_value_t = REFERENCE_SEED)]
        seed: u64,
    },
    /// Compute the exact probability of reaching a destination.
    Probability {
        /// Number of steps.
        #[arg(short, long)]
        steps: u64,

        /// Source position as comma-separated coordinates.
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        source: Vec<i64>,

        /// Destination position as comma-separated coordinates.
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        destination: Vec<i64>,

        /// Fractional digits in the decimal rendering.
        #[arg(long, default_value_t = 12)]
        digits: usize,
    },
    /// Compute the Manhattan distance between two positions.
    Distance {
        /// First position as comma-separated coordinates.
        #[arg(long = "from", value_delimiter = ',', allow_hyphen_values = true)]
        from: Vec<i64>,

        /// Second position as comma-separated coordinates.
        #[arg(long = "to", value_delimiter = ',', allow_hyphen_values = true)]
        to: Vec<i64>,
    },
}

/// Parses a coordinate list into a `Position`, mapping a bad axis count to
/// an input error (exit 12) named after the offending flag. Mismatches
/// *between* two well-formed positions stay core errors (exit 10).
fn parse_position(coords: Vec<i64>, flag: &str) -> Result<Position, CliError> {
    Position::new(coords).map_err(|e| CliError::Input(format!("invalid {flag}: {e}")))
}

/// Drives a target-seeking walk, arming `cancel`-style cooperative
/// cancellation once `limit` steps have been taken (unbounded when `limit`
/// is `None`).
fn seek_session(
    walker: &mut Walker,
    source: Position,
    target: Position,
    limit: Option<usize>,
) -> Result<WalkSession, CliError> {
    let cancel = CancelToken::new();
    let mut walk = walker.target_walk_iter(source.clone(), target.clone())?;
    let mut path = vec![source.clone()];
    let reached = loop {
        if walk.current() == walk.target() {
            break true;
        }
        if limit.is_some_and(|l| path.len() - 1 >= l) {
            cancel.cancel();
        }
        if cancel.is_cancelled() {
            break false;
        }
        match walk.next() {
            Some(position) => path.push(position),
            None => break true,
        }
    };

    let steps = path.len() - 1;
    Ok(WalkSession {
        dimensionality: source.dimensionality(),
        source,
        target: Some(target),
        steps,
        reached,
        path,
    })
}

fn print_session(session: &WalkSession, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(session)?);
    } else {
        for position in &session.path {
            println!("{position}");
        }
        if !session.reached {
            eprintln!("cancelled after {} steps without reaching the target", session.steps);
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Walk {
            steps,
            source,
            seed,
        } => {
            let source = parse_position(source, "--source")?;
            let mut walker = Walker::new(LcgParams::REFERENCE, seed);
            let session = WalkSession::fixed(&mut walker, steps, source);
            print_session(&session, cli.json)?;
        }
        Command::Seek {
            source,
            target,
            limit,
            seed,
        } => {
            let source = parse_position(source, "--source")?;
            let target = parse_position(target, "--target")?;
            let mut walker = Walker::new(LcgParams::REFERENCE, seed);
            let session = seek_session(&mut walker, source, target, limit)?;
            print_session(&session, cli.json)?;
        }
        Command::Probability {
            steps,
            source,
            destination,
            digits,
        } => {
            let source = parse_position(source, "--source")?;
            let destination = parse_position(destination, "--destination")?;
            let p = probability(steps, &source, &destination)?;
            let decimal = decimal_string(&p, digits);
            if cli.json {
                let info = serde_json::json!({
                    "steps": steps,
                    "source": source.coords(),
                    "destination": destination.coords(),
                    "probability": p.to_string(),
                    "decimal": decimal,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{p} ({decimal})");
            }
        }
        Command::Distance { from, to } => {
            let from = parse_position(from, "--from")?;
            let to = parse_position(to, "--to")?;
            let distance = manhattan_distance(&from, &to)?;
            if cli.json {
                let info = serde_json::json!({
                    "from": from.coords(),
                    "to": to.coords(),
                    "distance": distance,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{distance}");
            }
        }
    }

    Ok(())
}


fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
