//! # Command-Line Interface
//!
//! The thin shell around the game core: argument parsing, the line-oriented
//! session protocol, and output formatting.
//!
//! ## Session Commands
//!
//! | Command | Purpose | Reply |
//! |---------|---------|-------|
//! | `create N` + N grid lines | Create a shape | `created tile <id>` |
//! | `show tiles` / `show <id>` | Inspect the catalog | grids |
//! | `rotate`, `fliplr`, `flipud` | Transform a shape | confirmation + grid |
//! | `play <id> <row> <col>` | Place on the board | `played <id>` |
//! | `board`, `resize N` | Inspect/resize the board | grid |
//! | `reset`, `quit` | Session lifecycle | `game reset` / `Goodbye` |
//!
//! Grids use `*` for filled and `.` for empty cells, row-major top to
//! bottom.
//!
//! ## Output Formats
//!
//! The `--format` flag selects `text` (classic transcript, default) or
//! `json` (one object per reply). `--verbose` traces dispatch to stderr.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and start the session.

mod app;
mod command;
mod output;
mod session;

pub use app::{run, Cli};
pub use command::{Command, ParseError};
pub use output::{Output, OutputFormat};
