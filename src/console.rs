//! Line-oriented command console for driving the simulation by hand
//!
//! Reads one command per line, applies it to the dispatcher and writes a
//! short response. Bad input and rejected operations are reported and the
//! session keeps going.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::simulation::{Dispatcher, Floor, PickupOutcome};
use crate::stats::SimulationStats;

pub const HELP_TEXT: &str = "\
Commands:
  pickup <origin> <direction> <destination>   call an elevator (direction: 1 up, -1 down)
  update <elevator> <current> <destination>   force an idle elevator to a new position and target
  step [count]                                advance the simulation (default 1 step)
  status                                      show every elevator
  help                                        show this text
  quit                                        leave the console";

/// A parsed console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pickup {
        origin: Floor,
        direction: i32,
        destination: Floor,
    },
    Update {
        elevator: i64,
        current: Floor,
        destination: Floor,
    },
    Step(u32),
    Status,
    Help,
    Quit,
}

fn parse_arg<T>(word: Option<&str>, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let word = word.with_context(|| format!("missing <{}>", name))?;
    word.parse::<T>()
        .with_context(|| format!("<{}> must be a number, got '{}'", name, word))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let keyword = words.next().context("empty command")?.to_lowercase();

        let command = match keyword.as_str() {
            "pickup" => Command::Pickup {
                origin: parse_arg(words.next(), "origin")?,
                direction: parse_arg(words.next(), "direction")?,
                destination: parse_arg(words.next(), "destination")?,
            },
            "update" => Command::Update {
                elevator: parse_arg(words.next(), "elevator")?,
                current: parse_arg(words.next(), "current")?,
                destination: parse_arg(words.next(), "destination")?,
            },
            "step" => match words.next() {
                Some(count) => Command::Step(parse_arg(Some(count), "count")?),
                None => Command::Step(1),
            },
            "status" => Command::Status,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => bail!("unknown command '{}'", other),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected argument '{}'", extra);
        }

        Ok(command)
    }
}

/// Totals for one console session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands_executed: usize,
    /// Lines that could not be parsed or operations the bank refused
    pub commands_rejected: usize,
    pub steps_run: u64,
}

/// Run commands from `input` until `quit` or end of input
pub fn run_session<R, W>(
    dispatcher: &mut Dispatcher,
    stats: &mut SimulationStats,
    input: R,
    output: &mut W,
) -> Result<SessionSummary>
where
    R: BufRead,
    W: Write,
{
    let mut summary = SessionSummary::default();

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "Invalid input: {:#}", e)?;
                summary.commands_rejected += 1;
                continue;
            }
        };
        debug!("Console command: {:?}", command);

        if command == Command::Quit {
            break;
        }

        if execute(dispatcher, stats, command, output, &mut summary)? {
            summary.commands_executed += 1;
        } else {
            summary.commands_rejected += 1;
        }
    }

    info!(
        "Console session ended: {} commands, {} rejected, {} steps",
        summary.commands_executed, summary.commands_rejected, summary.steps_run
    );
    Ok(summary)
}

/// Apply one command. Returns false if the bank refused it.
fn execute<W: Write>(
    dispatcher: &mut Dispatcher,
    stats: &mut SimulationStats,
    command: Command,
    output: &mut W,
    summary: &mut SessionSummary,
) -> Result<bool> {
    match command {
        Command::Pickup {
            origin,
            direction,
            destination,
        } => {
            let outcome = dispatcher.pickup(origin, direction, destination);
            stats.record_pickup(&outcome);
            match outcome {
                Ok(PickupOutcome::Assigned(id)) => writeln!(
                    output,
                    "Call {} -> {} assigned to elevator {}",
                    origin, destination, id
                )?,
                Ok(PickupOutcome::Boarded(id)) => writeln!(
                    output,
                    "Call {} -> {} boarded elevator {}",
                    origin, destination, id
                )?,
                Ok(PickupOutcome::Deferred) => writeln!(
                    output,
                    "Call {} -> {} deferred, no elevator available",
                    origin, destination
                )?,
                Err(e) => {
                    writeln!(output, "Rejected: {}", e)?;
                    return Ok(false);
                }
            }
        }
        Command::Update {
            elevator,
            current,
            destination,
        } => match dispatcher.update(elevator, current, destination) {
            Ok(()) => writeln!(output, "Elevator {} updated", elevator)?,
            Err(e) => {
                writeln!(output, "Rejected: {}", e)?;
                return Ok(false);
            }
        },
        Command::Step(count) => {
            for _ in 0..count {
                let report = dispatcher.step();
                stats.record_step(&report);
                summary.steps_run += 1;
            }
            writeln!(output, "Advanced {} step(s)", count)?;
        }
        Command::Status => {
            for status in dispatcher.status() {
                writeln!(output, "{}", status)?;
            }
            writeln!(output, "Deferred calls: {}", dispatcher.deferred_count())?;
        }
        Command::Help => writeln!(output, "{}", HELP_TEXT)?,
        Command::Quit => {}
    }

    Ok(true)
}
