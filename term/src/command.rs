use std::str::FromStr;

use minesweeper_core::{Coord, UserCoord2};
use thiserror::Error;

/// One line of player input during a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    Grid,
    Symbols,
    Hint,
    Reveal(UserCoord2),
    Flag(UserCoord2),
    Unflag(UserCoord2),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("not a command and no coordinate separator")]
    MissingComma,
    #[error("coordinates must be two natural numbers")]
    Malformed,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let lower = input.to_ascii_lowercase();

        match lower.as_str() {
            "help" => return Ok(Self::Help),
            "quit" => return Ok(Self::Quit),
            "grid" => return Ok(Self::Grid),
            "symbols" => return Ok(Self::Symbols),
            "hint" => return Ok(Self::Hint),
            _ => {}
        }

        if !input.contains(',') {
            return Err(ParseCommandError::MissingComma);
        }

        // ASCII lowercasing keeps byte offsets, so the prefix lengths apply to `input` too
        if lower.starts_with("flag") {
            parse_coords(&input[4..]).map(Self::Flag)
        } else if lower.starts_with("unflag") {
            parse_coords(&input[6..]).map(Self::Unflag)
        } else {
            parse_coords(input).map(Self::Reveal)
        }
    }
}

fn parse_coords(text: &str) -> Result<UserCoord2, ParseCommandError> {
    let mut parts = text.split(',');
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseCommandError::Malformed);
    };
    Ok((parse_natural(x)?, parse_natural(y)?))
}

/// Digits only; values past `u32::MAX` saturate so they are later reported as out of range.
fn parse_natural(text: &str) -> Result<u32, ParseCommandError> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseCommandError::Malformed);
    }
    Ok(text.parse().unwrap_or(u32::MAX))
}

/// How an answer to the grid size prompt is handled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SizeAnswer {
    /// Empty or non-numeric, play the default size.
    Default,
    TooSmall,
    Accept(Coord),
    /// Large enough to need a y/n confirmation.
    ConfirmLarge(Coord),
    ConfirmHuge(Coord),
    TooLarge,
}

impl SizeAnswer {
    pub fn classify(answer: &str) -> Self {
        let answer = answer.trim();
        if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
            return Self::Default;
        }
        let Ok(size) = answer.parse::<Coord>() else {
            return Self::TooLarge;
        };
        match size {
            0..2 => Self::TooSmall,
            2..25 => Self::Accept(size),
            25..50 => Self::ConfirmLarge(size),
            50..100 => Self::ConfirmHuge(size),
            _ => Self::TooLarge,
        }
    }
}
