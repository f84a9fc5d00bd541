//! Line-based interactive prompts.
//!
//! Every prompt re-asks until it gets a usable answer. End of input is an
//! error since nothing more can be asked.

use crate::config::Mode;
use anyhow::{bail, Result};
use peg_solitaire::{validate_size, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Writes `question` and reads one trimmed line, or `None` at end of input.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<Option<String>> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn ask_or_bail<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String> {
    match ask(input, output, question)? {
        Some(answer) => Ok(answer),
        None => bail!("Input closed"),
    }
}

/// Asks for a board size, defaulting to [`DEFAULT_SIZE`] on empty input.
#[instrument(skip_all)]
pub fn board_size<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<usize> {
    let question = format!(
        "Board size (odd, {}-{}) [{}]: ",
        MIN_SIZE, MAX_SIZE, DEFAULT_SIZE
    );
    loop {
        let answer = ask_or_bail(input, output, &question)?;
        if answer.is_empty() {
            return Ok(DEFAULT_SIZE);
        }
        match answer.parse::<usize>() {
            Ok(size) => match validate_size(size) {
                Ok(()) => return Ok(size),
                Err(e) => {
                    debug!(size, error = %e, "Size rejected");
                    writeln!(output, "{}", e)?;
                }
            },
            Err(_) => {
                debug!(answer = %answer, "Size is not a number");
                writeln!(output, "Please enter a whole number.")?;
            }
        }
    }
}

/// Asks for a mode, defaulting to [`Mode::Manual`] on empty input.
#[instrument(skip_all)]
pub fn mode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Mode> {
    loop {
        let answer = ask_or_bail(input, output, "Mode (manual/random) [manual]: ")?;
        if answer.is_empty() {
            return Ok(Mode::Manual);
        }
        let parsed = Mode::from_str(&answer).ok().or(match answer.to_lowercase().as_str() {
            "m" => Some(Mode::Manual),
            "r" => Some(Mode::Random),
            _ => None,
        });
        match parsed {
            Some(mode) => return Ok(mode),
            None => {
                debug!(answer = %answer, "Mode rejected");
                writeln!(output, "Unknown mode {:?}, expected manual or random.", answer)?;
            }
        }
    }
}
