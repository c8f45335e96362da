//! Headless driver: line-delimited commands in, JSON snapshots out.
//!
//! Lets another program (a test harness, a GUI, a bot) drive the game without
//! a terminal. Each non-blank input line produces exactly one output line:
//! either the [`GameSnapshot`](crate::core::GameSnapshot) after the command,
//! or an error object. Errors never end the session.
//!
//! ```text
//! cell 4        play cell 4 (0..=8, row-major)
//! jump 2        move the cursor to history entry 2
//! sort          toggle the move-list order
//! restart       start over
//! show          print the current snapshot
//! # comment     ignored, as are blank lines
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::core::GameState;
use crate::types::Intent;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("`{0}` needs a numeric argument")]
    MissingArgument(&'static str),

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Show,
}

/// Parse a command line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let verb = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next();
    if let Some(extra) = parts.next() {
        return Err(CommandError::UnexpectedArgument(extra.to_string()));
    }

    let number = |name: &'static str| -> Result<usize, CommandError> {
        let raw = arg.ok_or(CommandError::MissingArgument(name))?;
        raw.parse()
            .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
    };
    let no_arg = |cmd: Command| match arg {
        Some(a) => Err(CommandError::UnexpectedArgument(a.to_string())),
        None => Ok(cmd),
    };

    let cmd = match verb.as_str() {
        "cell" | "play" => Command::Intent(Intent::SelectCell(number("cell")?)),
        "jump" | "step" => Command::Intent(Intent::SelectHistoryStep(number("jump")?)),
        "sort" => no_arg(Command::Intent(Intent::ToggleSortOrder))?,
        "restart" => no_arg(Command::Intent(Intent::Restart))?,
        "show" => no_arg(Command::Show)?,
        _ => return Err(CommandError::Unknown(verb.clone())),
    };
    Ok(Some(cmd))
}

#[derive(Serialize)]
struct ErrorLine {
    error: String,
    line: usize,
}

/// Drive `state` from `input`, writing one JSON line per command to `out`.
pub fn run<R: BufRead, W: Write>(state: &mut GameState, input: R, mut out: W) -> Result<()> {
    for (n, line) in input.lines().enumerate() {
        let line = line.context("failed to read command")?;
        let line_no = n + 1;

        match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Show)) => {}
            Ok(Some(Command::Intent(intent))) => {
                let changed = state.dispatch(intent);
                debug!(line = line_no, intent = intent.as_str(), changed, "command");
            }
            Err(e) => {
                debug!(line = line_no, error = %e, "bad command");
                serde_json::to_writer(
                    &mut out,
                    &ErrorLine {
                        error: e.to_string(),
                        line: line_no,
                    },
                )?;
                writeln!(out)?;
                continue;
            }
        }

        serde_json::to_writer(&mut out, &state.snapshot())?;
        writeln!(out)?;
        out.flush()?;
    }
    Ok(())
}

/// Run the headless driver on stdin/stdout.
#[instrument(skip_all, fields(history_mode = %config.history_mode))]
pub fn run_stdio(config: &Config) -> Result<()> {
    info!("headless session started");
    let mut state =
        GameState::with_mode(config.history_mode).with_sort_descending(config.sort_descending);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut state, stdin.lock(), stdout.lock())?;
    info!(moves = state.history().len() - 1, "headless session ended");
    Ok(())
}
