//! Output formatting for session replies

use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output helper for consistent formatting
///
/// Text mode reproduces the classic interpreter transcript; JSON mode emits
/// one object per reply for machine consumption.
pub struct Output {
    format: OutputFormat,
    verbose: bool,
}

impl Output {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }

    /// Prints a positive reply ("created tile 100", "played 101", ...)
    pub fn reply(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "ok": true,
                        "message": message
                    })
                );
            }
        }
    }

    /// Prints a rejection ("invalid tile", "99 not played", ...)
    ///
    /// Rejections are part of the normal transcript and go to stdout, but
    /// JSON mode flags them so drivers do not have to match on strings.
    pub fn reject(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "ok": false,
                        "message": message
                    })
                );
            }
        }
    }

    /// Prints an error message to stderr (bad lookups, unreadable input)
    pub fn error(&self, message: &str) {
        match self.format {
            OutputFormat::Text => eprintln!("Error: {}", message),
            OutputFormat::Json => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "ok": false,
                        "error": message
                    })
                );
            }
        }
    }

    /// Prints a rendered grid (a shape or the board)
    pub fn grid(&self, lines: &[String]) {
        match self.format {
            OutputFormat::Text => {
                for line in lines {
                    println!("{}", line);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "ok": true, "grid": lines }));
            }
        }
    }

    /// Prints structured data (JSON mode; pretty-printed fallback in text)
    pub fn data<T: Serialize>(&self, data: &T) {
        match self.format {
            OutputFormat::Text => {
                if let Ok(json) = serde_json::to_string_pretty(data) {
                    println!("{}", json);
                }
            }
            OutputFormat::Json => {
                if let Ok(json) = serde_json::to_string(data) {
                    println!("{}", json);
                }
            }
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
