//! Session command parser
//!
//! Turns one input line into a typed [`Command`]. The grid lines that
//! follow a `create N` are not part of the command; the session loop reads
//! them separately.

use std::str::FromStr;
use thiserror::Error;

use crate::domain::ShapeId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unrecognized command: {0}")]
    Unrecognized(String),

    #[error("'{0}' is not a number")]
    BadNumber(String),
}

/// One line of the session protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `quit` — end the session
    Quit,
    /// `reset` — back to the initial game state
    Reset,
    /// `board` — render the board
    Board,
    /// `create N` — create a shape from the N grid lines that follow
    Create { size: usize },
    /// `show tiles` — enumerate the catalog
    ShowTiles,
    /// `show <id>` — render one shape
    Show { id: ShapeId },
    /// `resize N` — resize the board
    Resize { size: usize },
    /// `play <id> <row> <col>` — place a shape on the board
    Play {
        id: ShapeId,
        row: usize,
        col: usize,
    },
    /// `rotate <id>` — quarter turn counterclockwise
    Rotate { id: ShapeId },
    /// `fliplr <id>` — mirror left-to-right
    FlipLr { id: ShapeId },
    /// `flipud <id>` — mirror top-to-bottom
    FlipUd { id: ShapeId },
}

impl Command {
    /// Parses one input line. Blank lines and `//` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let command = match tokens.as_slice() {
            [] => return Ok(None),
            [first, ..] if first.starts_with("//") => return Ok(None),
            ["quit"] => Command::Quit,
            ["reset"] => Command::Reset,
            ["board"] => Command::Board,
            ["create", size] => Command::Create {
                size: number(size)?,
            },
            ["show", "tiles"] => Command::ShowTiles,
            ["show", id] => Command::Show { id: number(id)? },
            ["resize", size] => Command::Resize {
                size: number(size)?,
            },
            ["play", id, row, col] => Command::Play {
                id: number(id)?,
                row: number(row)?,
                col: number(col)?,
            },
            ["rotate", id] => Command::Rotate { id: number(id)? },
            ["fliplr", id] => Command::FlipLr { id: number(id)? },
            ["flipud", id] => Command::FlipUd { id: number(id)? },
            _ => return Err(ParseError::Unrecognized(line.trim().to_string())),
        };

        Ok(Some(command))
    }
}

fn number<T: FromStr>(token: &str) -> Result<T, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::BadNumber(token.to_string()))
}
