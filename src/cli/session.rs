//! Interactive session loop
//!
//! Reads commands line by line from any [`BufRead`], dispatches them to the
//! game, and renders replies. The loop itself owns no game logic: every
//! rule lives in [`crate::domain`], and every reply string lives here.

use anyhow::Result;
use std::io::{self, BufRead};

use super::command::Command;
use super::output::Output;
use crate::domain::{CatalogError, Game};

/// Runs a session to completion: until `quit` or end of input.
pub fn run<R: BufRead>(input: R, game: &mut Game, output: &Output) -> Result<()> {
    let mut lines = input.lines();

    while let Some(line) = lines.next() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => command,
            Err(err) => {
                output.verbose_ctx("parse", &err.to_string());
                output.reject("command not understood.");
                continue;
            }
        };
        dispatch(command, game, &mut lines, output)?;
    }

    output.reply("Goodbye");
    Ok(())
}

fn dispatch(
    command: Command,
    game: &mut Game,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    output: &Output,
) -> Result<()> {
    match command {
        // `quit` ends the loop before dispatch; nothing to do here.
        Command::Quit => {}

        Command::Reset => {
            game.reset();
            output.reply("game reset");
        }

        Command::Board => output.grid(&game.board().grid_lines()),

        Command::Resize { size } => {
            game.resize_board(size);
            output.grid(&game.board().grid_lines());
        }

        Command::Create { size } => {
            let mut grid = Vec::with_capacity(size);
            for _ in 0..size {
                match lines.next() {
                    Some(line) => grid.push(line?.trim().to_string()),
                    None => break,
                }
            }
            match game.create_shape(&grid, size) {
                Ok(id) => output.reply(&format!("created tile {}", id)),
                Err(CatalogError::Duplicate(existing)) => {
                    output.reject(&format!("duplicate of {} discarded", existing));
                }
                Err(err) => {
                    output.verbose_ctx("create", &err.to_string());
                    output.reject("invalid tile");
                }
            }
        }

        Command::ShowTiles => {
            if output.is_json() {
                let tiles: Vec<_> = game
                    .shapes()
                    .map(|(id, shape)| {
                        serde_json::json!({
                            "id": id,
                            "grid": shape.grid_lines(),
                        })
                    })
                    .collect();
                output.data(&tiles);
            } else {
                println!("tile inventory");
                for (id, shape) in game.shapes() {
                    println!("{}", id);
                    for line in shape.grid_lines() {
                        println!("{}", line);
                    }
                }
            }
        }

        Command::Show { id } => match game.shape(id) {
            Ok(shape) => output.grid(&shape.grid_lines()),
            Err(err) => output.error(&err.to_string()),
        },

        Command::Rotate { id } => match game.rotate_shape(id) {
            Ok(shape) => {
                let grid = shape.grid_lines();
                output.reply(&format!("rotated {}", id));
                output.grid(&grid);
            }
            Err(err) => output.error(&err.to_string()),
        },

        Command::FlipLr { id } => match game.mirror_shape_horizontal(id) {
            Ok(shape) => {
                let grid = shape.grid_lines();
                output.reply(&format!("fliplr {}", id));
                output.grid(&grid);
            }
            Err(err) => output.error(&err.to_string()),
        },

        Command::FlipUd { id } => match game.mirror_shape_vertical(id) {
            Ok(shape) => {
                let grid = shape.grid_lines();
                output.reply(&format!("flipud {}", id));
                output.grid(&grid);
            }
            Err(err) => output.error(&err.to_string()),
        },

        Command::Play { id, row, col } => match game.place_shape(id, row, col) {
            Ok(()) => output.reply(&format!("played {}", id)),
            Err(err) => {
                output.verbose_ctx("play", &err.to_string());
                output.reject(&format!("{} not played", id));
            }
        },
    }

    Ok(())
}
