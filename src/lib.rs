//! gen-comment library crate
//!
//! This crate provides the core functionality for the `gen-comment` CLI. It is
//! organized into two small modules: `comment` (banner formatting) and
//! `clipboard` (platform clipboard backends). The binary `src/main.rs` calls
//! `gen_comment_lib::run()` to execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `execute()` — the same flow with the clipboard backend and output
//!   streams supplied by the caller.
//!
//! See each module for detailed documentation on functions and behavior.

pub mod clipboard;
pub mod comment;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use crate::clipboard::{ClipboardBackend, ClipboardOutcome, current_backend, write_with};
use crate::comment::format_comment;

const PROGRAM: &str = "gen-comment";

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(
    name = PROGRAM,
    author,
    version,
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Comment text; multiple words are joined with single spaces.
    /// Every argument is text, `--help` and `--version` included.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    text: Vec<String>,
}

/// Run the gen-comment CLI.
///
/// Parses arguments, formats the banner and tries the clipboard backend of
/// the current platform.
///
/// Exit status:
/// - `1` when no text is given (usage on stderr) or the text is too long.
/// - `0` otherwise, including when the clipboard write fails.
///
/// Set `RUST_LOG=debug` to see backend selection and padding details.
pub fn run() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let cli = Cli::parse();
    let mut backend = current_backend();
    let stdout = io::stdout();
    let stderr = io::stderr();

    match execute(&cli.text, backend.as_mut(), &mut stdout.lock(), &mut stderr.lock()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            debug!("output failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Format `words` as a banner, copy it through `backend` and report to
/// `out`/`err`. Returns the process exit status.
pub fn execute(
    words: &[String],
    backend: &mut dyn ClipboardBackend,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<u8> {
    if words.is_empty() {
        writeln!(err, "usage: {} \"Your comment text here\"", PROGRAM)?;
        writeln!(err, "hint: quote multi-word comments")?;
        return Ok(1);
    }

    let text = words.join(" ");
    let line = match format_comment(&text) {
        Ok(line) => line,
        Err(e) => {
            writeln!(err, "error: {}", e)?;
            return Ok(1);
        }
    };

    match write_with(backend, &line) {
        ClipboardOutcome::Copied => {
            writeln!(out, "Copied to clipboard:")?;
        }
        ClipboardOutcome::Failed(detail) => {
            writeln!(err, "warning: failed to copy to clipboard: {}", detail)?;
            writeln!(out, "Paste manually:")?;
        }
    }
    writeln!(out, "{}", line)?;
    Ok(0)
}
