//! Main CLI application structure

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use super::output::{Output, OutputFormat};
use super::session;
use crate::domain::Game;

#[derive(Parser)]
#[command(name = "tilebox")]
#[command(author, version, about = "Interactive polyomino catalog and board placement game")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Read commands from a file instead of standard input
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Starting board side length
    #[arg(long, default_value_t = Game::DEFAULT_BOARD_SIZE)]
    pub board_size: usize,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose(&format!(
        "tilebox starting, board size {}",
        cli.board_size
    ));

    let mut game = Game::with_board_size(cli.board_size);

    match cli.script {
        Some(path) => {
            output.verbose_ctx("script", &format!("reading commands from {}", path.display()));
            let file = File::open(&path)
                .with_context(|| format!("cannot open script {}", path.display()))?;
            session::run(BufReader::new(file), &mut game, &output)
        }
        None => {
            let stdin = io::stdin();
            session::run(stdin.lock(), &mut game, &output)
        }
    }
}
